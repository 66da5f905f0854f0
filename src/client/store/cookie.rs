use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use super::SessionStore;

/// `expires` attribute format, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Browser cookie jar of the current document.
///
/// No HttpOnly or Secure flags are managed; cookies are scoped to path `/`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

impl CookieStore {
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }

    fn write(line: &str) {
        let Some(document) = Self::document() else {
            tracing::warn!("No document available, cookie not written");
            return;
        };
        if let Err(err) = document.set_cookie(line) {
            tracing::error!("Failed to write cookie: {:?}", err);
        }
    }
}

impl SessionStore for CookieStore {
    fn set(&self, name: &str, value: &str, hours: i64) {
        let expires = Utc::now() + Duration::hours(hours);
        Self::write(&format_cookie(name, value, expires));
    }

    fn get(&self, name: &str) -> Option<String> {
        let jar = Self::document()?.cookie().ok()?;
        find_cookie(&jar, name)
    }

    fn erase(&self, name: &str) {
        Self::write(&format_cookie(name, "", DateTime::<Utc>::UNIX_EPOCH));
    }
}

/// Builds a `document.cookie` assignment for `name` scoped to the site root.
pub fn format_cookie(name: &str, value: &str, expires: DateTime<Utc>) -> String {
    format!(
        "{}={}; expires={}; path=/",
        name,
        value,
        expires.format(EXPIRES_FORMAT)
    )
}

/// Looks `name` up in a `document.cookie` string (`a=1; b=2`).
pub fn find_cookie(jar: &str, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    jar.split(';')
        .map(|entry| entry.trim_start_matches(' '))
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(str::to_string)
}
