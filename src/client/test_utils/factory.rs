use serde_json::{json, Value};

/// Server entry as `/api/servers` returns it. Stopped servers carry no `started_at`.
pub fn server_json(name: &str) -> Value {
    json!({
        "name": name,
        "type": "forge",
        "path": format!("/srv/minecraft/{}", name),
        "autostart": false,
        "mc_version": "1.20.1",
        "modloader_version": "47.2.0",
        "ram": 4096
    })
}

pub fn running_server_json(name: &str, started_at: &str) -> Value {
    let mut server = server_json(name);
    server["started_at"] = json!(started_at);
    server
}

/// User body as `/api/user` returns it.
pub fn user_json(username: &str, access_level: &str) -> Value {
    json!({
        "username": username,
        "access_level": access_level,
        "registered_at": "01/02/2025, 10:20:30",
        "last_login": "24/12/2025, 18:00:00"
    })
}

pub fn error_json(message: &str) -> Value {
    json!({ "message": message })
}

pub fn token_json(token: &str) -> Value {
    json!({ "token": token })
}
