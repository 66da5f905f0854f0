pub const SITE_NAME: &str = "Server Management Dashboard";

/// Cookie holding the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Lifetime of the session cookie set at login and registration.
pub const TOKEN_LIFETIME_HOURS: i64 = 1;
