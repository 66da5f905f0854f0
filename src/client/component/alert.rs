use dioxus_logger::tracing;

/// Shows a blocking `window.alert`.
pub fn blocking_alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("No window for alert: {}", message);
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        tracing::error!("Failed to show alert: {:?}", err);
    }
}
