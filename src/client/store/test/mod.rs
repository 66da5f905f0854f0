use chrono::{Duration, TimeZone, Utc};

use crate::client::store::{
    cookie::{find_cookie, format_cookie},
    MemorySessionStore, SessionStore,
};
