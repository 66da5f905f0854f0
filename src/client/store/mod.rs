//! Session storage for the auth token.
//!
//! The API client and the view controller only see the `SessionStore` trait. In the
//! browser it is backed by `document.cookie` through `CookieStore`; tests use
//! `MemorySessionStore`.

pub mod cookie;
#[cfg(test)]
pub mod memory;

#[cfg(test)]
mod test;

pub use cookie::CookieStore;
#[cfg(test)]
pub use memory::MemorySessionStore;

/// Expiry-aware string key-value store.
///
/// Methods take `&self` because the underlying jar is ambient, process-wide state.
pub trait SessionStore {
    /// Stores `value` under `name`, expiring `hours` from now.
    fn set(&self, name: &str, value: &str, hours: i64);

    /// Returns the stored value, or `None` if absent or expired.
    fn get(&self, name: &str) -> Option<String>;

    /// Removes `name`. Erasing an absent entry is a no-op.
    fn erase(&self, name: &str);

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
