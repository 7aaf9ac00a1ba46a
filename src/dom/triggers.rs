use super::query_all;
use crate::model::ActivityType;
use crate::service::{ActivityReporter, GamificationApi, NotificationPresenter};
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

/// `data-record-activity="<type>"` records the activity on click, or on
/// submit for forms. `data-activity-description` is optional. A submit that
/// an earlier listener cancelled (a declined delete confirmation) is not
/// recorded.
pub fn bind<A, P>(document: &Document, reporter: Rc<ActivityReporter<A, P>>) -> Vec<EventListener>
where
    A: GamificationApi + 'static,
    P: NotificationPresenter + 'static,
{
    query_all(document, "[data-record-activity]")
        .into_iter()
        .filter_map(|element| {
            let raw = element.get_attribute("data-record-activity")?;
            let activity_type = match raw.parse::<ActivityType>() {
                Ok(activity_type) => activity_type,
                Err(err) => {
                    log::warn!("{}", err);
                    return None;
                }
            };
            let description = element
                .get_attribute("data-activity-description")
                .unwrap_or_else(|| activity_type.label());
            let event_type = if element.tag_name().eq_ignore_ascii_case("form") {
                "submit"
            } else {
                "click"
            };

            let reporter = reporter.clone();
            Some(EventListener::new(&element, event_type, move |event| {
                if event.default_prevented() {
                    return;
                }
                let reporter = reporter.clone();
                let description = description.clone();
                spawn_local(async move {
                    reporter.record_activity(activity_type, description).await;
                });
            }))
        })
        .collect()
}
