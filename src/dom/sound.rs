use super::{document, query};
use crate::error::GamificationError;
use crate::model::SoundPreference;
use gloo::events::EventListener;
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlAudioElement};

pub const ACHIEVEMENT_SOUND_ID: &str = "achievement-sound";
pub const REWARD_SOUND_ID: &str = "reward-sound";

#[derive(Debug, Clone, PartialEq)]
pub struct SoundPlayer {
    muted_key: String,
}

impl SoundPlayer {
    pub fn new(muted_key: impl Into<String>) -> Self {
        SoundPlayer {
            muted_key: muted_key.into(),
        }
    }

    /// Read fresh on every call so a toggle in another tab applies at once.
    pub fn preference(&self) -> SoundPreference {
        LocalStorage::get(&self.muted_key).unwrap_or_default()
    }

    pub fn set_preference(&self, preference: SoundPreference) -> Result<(), GamificationError> {
        LocalStorage::set(&self.muted_key, preference).map_err(|err| {
            log::debug!("Storage write failed: {}", err);
            GamificationError::Storage
        })
    }

    /// Plays the `<audio>` element with `element_id`, if present and not
    /// muted. Rejections (autoplay policy) are only logged.
    pub fn play(&self, element_id: &str) {
        if self.preference().muted {
            return;
        }
        let Some(audio) = document()
            .ok()
            .and_then(|document| document.get_element_by_id(element_id))
            .and_then(|element| element.dyn_into::<HtmlAudioElement>().ok())
        else {
            return;
        };

        match audio.play() {
            Ok(promise) => {
                let element_id = element_id.to_string();
                spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::debug!(
                            "{}",
                            GamificationError::Audio(format!("{}: {:?}", element_id, err))
                        );
                    }
                });
            }
            Err(err) => log::debug!("{}", GamificationError::Audio(format!("{:?}", err))),
        }
    }

    /// `#sound-toggle` flips the mute preference and mirrors it as a `muted`
    /// class.
    pub fn bind_toggle(&self, document: &Document) -> Option<EventListener> {
        let toggle = query(document, "#sound-toggle")?;
        let _ = toggle
            .class_list()
            .toggle_with_force("muted", self.preference().muted);

        let player = self.clone();
        let element = toggle.clone();
        Some(EventListener::new(&toggle, "click", move |_| {
            let preference = player.preference().toggled();
            match player.set_preference(preference) {
                Ok(()) => {
                    let _ = element
                        .class_list()
                        .toggle_with_force("muted", preference.muted);
                }
                Err(err) => log::warn!("Could not save sound preference: {}", err),
            }
        }))
    }
}
