use super::{query_all, window};
use crate::model::{share_description, ActivityType, ShareTarget};
use crate::service::{ActivityReporter, GamificationApi, NotificationPresenter};
use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

fn share<A, P>(button: &Element, reporter: &Rc<ActivityReporter<A, P>>)
where
    A: GamificationApi + 'static,
    P: NotificationPresenter + 'static,
{
    let achievement_id = button.get_attribute("data-achievement-id").unwrap_or_default();
    let share_type = button
        .get_attribute("data-share-type")
        .filter(|kind| !kind.trim().is_empty())
        .unwrap_or_else(|| ShareTarget::default().to_string());
    let achievement_name = button.get_attribute("data-achievement-name");

    let reporter = reporter.clone();
    let description = share_description(&achievement_id, &share_type);
    spawn_local(async move {
        reporter
            .record_activity(ActivityType::ShareAchievement, description)
            .await;
    });

    // Unknown networks are recorded as given but open nothing.
    let target = match share_type.parse::<ShareTarget>() {
        Ok(target) => target,
        Err(err) => {
            log::warn!("{}", err);
            return;
        }
    };
    let Ok(window) = window() else {
        return;
    };
    let origin = window.location().origin().unwrap_or_default();
    let url = target.share_url(achievement_name.as_deref(), &origin);
    if let Err(err) =
        window.open_with_url_and_target_and_features(&url, "_blank", "width=600,height=400")
    {
        log::warn!("Could not open share window: {:?}", err);
    }
}

pub fn bind<A, P>(document: &Document, reporter: Rc<ActivityReporter<A, P>>) -> Vec<EventListener>
where
    A: GamificationApi + 'static,
    P: NotificationPresenter + 'static,
{
    query_all(document, ".achievement-share-btn")
        .into_iter()
        .map(|button| {
            let reporter = reporter.clone();
            let element = button.clone();
            EventListener::new_with_options(
                &button,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    share(&element, &reporter);
                },
            )
        })
        .collect()
}
