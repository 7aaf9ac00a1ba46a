use super::sound::{SoundPlayer, ACHIEVEMENT_SOUND_ID};
use crate::components::{ToastComp, ToastProps};
use crate::error::GamificationError;
use crate::model::{Achievement, ActivityType, Notification};
use crate::service::NotificationPresenter;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element};
use yew::{AppHandle, Callback};

const CONTAINER_CLASS: &str = "toast-container position-fixed bottom-0 end-0 p-3";

/// Owns the page's toast container. Construct one per page and share it.
pub struct ToastService {
    document: Document,
    container: RefCell<Option<Element>>,
    sound: SoundPlayer,
}

impl ToastService {
    pub fn new(document: Document, sound: SoundPlayer) -> Self {
        ToastService {
            document,
            container: RefCell::new(None),
            sound,
        }
    }

    /// The container, reused from the markup or created on first use.
    pub fn container(&self) -> Result<Element, GamificationError> {
        if let Some(container) = self.container.borrow().as_ref() {
            return Ok(container.clone());
        }

        let container = match self.document.query_selector(".toast-container")? {
            Some(existing) => existing,
            None => {
                let body = self
                    .document
                    .body()
                    .ok_or_else(|| GamificationError::MissingElement("body".to_string()))?;
                let created = self.document.create_element("div")?;
                created.set_class_name(CONTAINER_CLASS);
                created.set_attribute("style", "z-index: 11")?;
                body.append_child(&created)?;
                created
            }
        };
        *self.container.borrow_mut() = Some(container.clone());
        Ok(container)
    }

    /// Appends a toast and schedules its removal.
    pub fn show(&self, notification: Notification) -> Result<Element, GamificationError> {
        let container = self.container()?;

        let element = self.document.create_element("div")?;
        element.set_class_name(&format!("toast {} show", notification.toast_class()));
        element.set_attribute("role", "alert")?;
        element.set_attribute("aria-live", "assertive")?;
        element.set_attribute("aria-atomic", "true")?;
        container.append_child(&element)?;

        let delay = notification.delay_ms();
        let plays_sound = notification.plays_sound();

        let app: Rc<RefCell<Option<AppHandle<ToastComp>>>> = Rc::new(RefCell::new(None));
        let dismiss: Rc<dyn Fn()> = {
            let element = element.clone();
            let app = app.clone();
            Rc::new(move || {
                let _ = element.class_list().remove_1("show");
                if let Some(app) = app.borrow_mut().take() {
                    app.destroy();
                }
                element.remove();
            })
        };

        let on_close = {
            let dismiss = dismiss.clone();
            // Deferred so the component is not torn down inside its own handler.
            Callback::from(move |_: ()| {
                let dismiss = dismiss.clone();
                Timeout::new(0, move || dismiss()).forget();
            })
        };
        let handle = yew::Renderer::<ToastComp>::with_root_and_props(
            element.clone(),
            ToastProps {
                notification,
                on_close,
            },
        )
        .render();
        *app.borrow_mut() = Some(handle);

        Timeout::new(delay, move || dismiss()).forget();

        if plays_sound {
            self.sound.play(ACHIEVEMENT_SOUND_ID);
        }
        Ok(element)
    }

    fn present_logged(&self, notification: Notification) {
        if let Err(err) = self.show(notification) {
            log::error!("Could not show notification: {}", err);
        }
    }
}

impl NotificationPresenter for ToastService {
    fn show_points_notification(&self, points: u32, activity_type: ActivityType) {
        self.present_logged(Notification::Points {
            points,
            activity_type,
        });
    }

    fn show_level_up_notification(&self, level: Option<u32>) {
        self.present_logged(Notification::LevelUp { level });
    }

    fn show_achievement_notification(&self, achievement: &Achievement) {
        self.present_logged(Notification::Achievement(achievement.clone()));
    }
}
