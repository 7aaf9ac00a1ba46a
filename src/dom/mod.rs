//! Browser bindings. Every binding looks up its elements once and silently
//! skips itself when the page does not contain them.

pub mod alerts;
pub mod bootstrap;
pub mod calendar;
pub mod confirm;
pub mod daily_reward;
pub mod fab;
pub mod forms;
mod http;
pub mod search;
pub mod share;
mod sound;
mod toast;
pub mod triggers;

pub use calendar::highlight_today;
pub use confirm::confirm_delete;
pub use http::HttpGamificationApi;
pub use sound::{SoundPlayer, ACHIEVEMENT_SOUND_ID, REWARD_SOUND_ID};
pub use toast::ToastService;

use crate::config::Config;
use crate::error::GamificationError;
use crate::model::ActivityType;
use crate::service::ActivityReporter;
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, NodeList, Window};

pub type PageReporter = ActivityReporter<Rc<HttpGamificationApi>, Rc<ToastService>>;

/// Everything bound to the current page. Dropping it detaches the listeners.
pub struct Page {
    pub reporter: Rc<PageReporter>,
    pub toasts: Rc<ToastService>,
    listeners: Vec<EventListener>,
}

impl Page {
    /// Keeps the listeners alive for the rest of the page's life.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

pub fn window() -> Result<Window, GamificationError> {
    web_sys::window().ok_or_else(|| GamificationError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document, GamificationError> {
    window()?
        .document()
        .ok_or_else(|| GamificationError::MissingElement("document".to_string()))
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub(crate) fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn is_authenticated(document: &Document) -> bool {
    document
        .body()
        .and_then(|body| body.get_attribute("data-authenticated"))
        .is_some_and(|value| value == "true")
}

/// Runs `f` once the document has been parsed.
pub fn when_ready<F>(f: F) -> Result<(), GamificationError>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
    Ok(())
}

/// Binds every page behavior and records the login activity.
pub fn start(config: Config) -> Result<Page, GamificationError> {
    let document = document()?;
    let authenticated = is_authenticated(&document);

    let sound = SoundPlayer::new(config.sound_muted_key.clone());
    let toasts = Rc::new(ToastService::new(document.clone(), sound.clone()));
    let api = Rc::new(HttpGamificationApi::new(config));
    let reporter = Rc::new(ActivityReporter::new(
        api.clone(),
        toasts.clone(),
        authenticated,
    ));

    let mut listeners = Vec::new();
    listeners.extend(fab::bind(&document));
    listeners.extend(daily_reward::bind(
        &document,
        api,
        toasts.clone(),
        sound.clone(),
    ));
    listeners.extend(search::bind(&document));
    listeners.extend(confirm::bind(&document));
    listeners.extend(share::bind(&document, reporter.clone()));
    listeners.extend(triggers::bind(&document, reporter.clone()));
    listeners.extend(forms::bind(&document));
    listeners.extend(sound.bind_toggle(&document));
    highlight_today(&document, chrono::Local::now().date_naive());
    bootstrap::init_widgets(&document);
    alerts::schedule_dismiss(&document);

    if authenticated {
        let reporter = reporter.clone();
        spawn_local(async move {
            reporter
                .record_activity(ActivityType::Login, "User logged in")
                .await;
        });
    }

    log::debug!("Bound {} page listeners", listeners.len());
    Ok(Page {
        reporter,
        toasts,
        listeners,
    })
}
