use std::{cell::RefCell, collections::HashMap, rc::Rc};

use chrono::{DateTime, Duration, Utc};

use super::SessionStore;

/// In-memory `SessionStore` with the same expiry semantics as the cookie jar.
///
/// Clones share the same entries, the way every part of a page shares one cookie jar.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, Entry>>>,
}

#[derive(Clone, Debug)]
struct Entry {
    value: String,
    expires: DateTime<Utc>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an entry with an explicit expiry, which may already be in the past.
    pub fn set_until(&self, name: &str, value: &str, expires: DateTime<Utc>) {
        self.entries.borrow_mut().insert(
            name.to_string(),
            Entry {
                value: value.to_string(),
                expires,
            },
        );
    }

    /// Expiry of a stored entry, expired or not.
    pub fn expires(&self, name: &str) -> Option<DateTime<Utc>> {
        self.entries.borrow().get(name).map(|entry| entry.expires)
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, name: &str, value: &str, hours: i64) {
        self.set_until(name, value, Utc::now() + Duration::hours(hours));
    }

    fn get(&self, name: &str) -> Option<String> {
        let entries = self.entries.borrow();
        let entry = entries.get(name)?;
        (entry.expires > Utc::now()).then(|| entry.value.clone())
    }

    fn erase(&self, name: &str) {
        self.entries.borrow_mut().remove(name);
    }
}
