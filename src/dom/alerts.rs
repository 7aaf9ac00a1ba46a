use super::query_all;
use gloo_timers::callback::Timeout;
use web_sys::Document;

const ALERT_DISMISS_MS: u32 = 5_000;

/// Removes `.alert-dismissible` flash messages after a few seconds.
pub fn schedule_dismiss(document: &Document) {
    let alerts = query_all(document, ".alert-dismissible");
    if alerts.is_empty() {
        return;
    }
    Timeout::new(ALERT_DISMISS_MS, move || {
        for alert in alerts {
            let _ = alert.class_list().remove_1("show");
            alert.remove();
        }
    })
    .forget();
}
