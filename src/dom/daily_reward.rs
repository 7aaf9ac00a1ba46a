use super::sound::{SoundPlayer, REWARD_SOUND_ID};
use super::{query, HttpGamificationApi, ToastService};
use crate::components::{RewardAmountComp, RewardAmountProps};
use crate::model::{ClaimOutcome, DailyReward, CLAIMED_MESSAGE, CLAIM_DELAY_MS};
use crate::service::{DailyRewardClaimer, RewardView};
use gloo::events::EventListener;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

/// `#daily-reward-box` and the counters around it.
pub struct RewardBox {
    element: Element,
    document: Document,
    sound: SoundPlayer,
}

impl RewardBox {
    pub fn new(element: Element, document: Document, sound: SoundPlayer) -> Self {
        RewardBox {
            element,
            document,
            sound,
        }
    }

    /// Streak the server rendered into `data-last-streak`, if any.
    pub fn last_streak(&self) -> u32 {
        self.element
            .get_attribute("data-last-streak")
            .and_then(|streak| streak.trim().parse().ok())
            .unwrap_or(0)
    }

    fn set_text(&self, selector: &str, text: &str) -> Option<Element> {
        let element = query(&self.document, selector)?;
        element.set_text_content(Some(text));
        Some(element)
    }

    fn append_amount(&self, outcome: &ClaimOutcome) {
        let Ok(amount) = self.document.create_element("div") else {
            return;
        };
        amount.set_class_name("reward-amount");
        if self.element.append_child(&amount).is_err() {
            return;
        }
        yew::Renderer::<RewardAmountComp>::with_root_and_props(
            amount,
            RewardAmountProps {
                outcome: outcome.clone(),
            },
        )
        .render();
    }
}

impl RewardView for RewardBox {
    fn show_pending(&self) {
        let _ = self.element.class_list().add_1("pulse");
    }

    fn show_claimed(&self, outcome: &ClaimOutcome) {
        let classes = self.element.class_list();
        let _ = classes.remove_1("pulse");
        let _ = classes.add_1("claimed");

        self.append_amount(outcome);
        self.set_text("#user-tokens", &outcome.total_tokens.to_string());

        if let Some(streak) = outcome.streak_text() {
            if let Some(info) = self.set_text("#streak-info", &streak) {
                if outcome.new_record {
                    let _ = info.class_list().add_1("text-success");
                    let _ = info.insert_adjacent_html(
                        "beforeend",
                        " <span class=\"badge bg-success\">New record!</span>",
                    );
                }
            }
        }

        self.set_text("#reward-message", CLAIMED_MESSAGE);
        self.sound.play(REWARD_SOUND_ID);
    }

    fn show_failed(&self, message: Option<&str>) {
        let _ = self.element.class_list().remove_1("pulse");
        if let Some(message) = message {
            self.set_text("#reward-message", message);
        }
    }
}

/// Wires `#daily-reward-box`. The claim guard lives in the claimer captured by
/// this listener, so it resets only with the page.
pub fn bind(
    document: &Document,
    api: Rc<HttpGamificationApi>,
    toasts: Rc<ToastService>,
    sound: SoundPlayer,
) -> Option<EventListener> {
    let element = query(document, "#daily-reward-box")?;

    let view = Rc::new(RewardBox::new(element.clone(), document.clone(), sound));
    let claimer = Rc::new(DailyRewardClaimer::with_reward(
        api,
        toasts,
        DailyReward::with_last_streak(view.last_streak()),
    ));

    Some(EventListener::new(&element, "click", move |_| {
        let claimer = claimer.clone();
        let view = view.clone();
        spawn_local(async move {
            if let Some(outcome) = claimer
                .claim(view.as_ref(), TimeoutFuture::new(CLAIM_DELAY_MS))
                .await
            {
                log::info!(
                    "Daily reward claimed: {} tokens, {} day streak",
                    outcome.tokens,
                    outcome.streak_days
                );
            }
        });
    }))
}
