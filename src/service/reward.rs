use super::{GamificationApi, NotificationPresenter};
use crate::model::{ClaimOutcome, DailyReward};
use std::cell::RefCell;
use std::future::Future;

/// Visual side of the reward box.
pub trait RewardView {
    fn show_pending(&self);

    fn show_claimed(&self, outcome: &ClaimOutcome);

    fn show_failed(&self, message: Option<&str>);
}

/// Owns the claim guard for one reward box.
pub struct DailyRewardClaimer<A, P> {
    api: A,
    presenter: P,
    state: RefCell<DailyReward>,
}

impl<A, P> DailyRewardClaimer<A, P>
where
    A: GamificationApi,
    P: NotificationPresenter,
{
    pub fn new(api: A, presenter: P) -> Self {
        Self::with_reward(api, presenter, DailyReward::new())
    }

    /// Starts from `reward`, e.g. one seeded with the streak the page
    /// rendered.
    pub fn with_reward(api: A, presenter: P, reward: DailyReward) -> Self {
        DailyRewardClaimer {
            api,
            presenter,
            state: RefCell::new(reward),
        }
    }

    pub fn state(&self) -> DailyReward {
        self.state.borrow().clone()
    }

    /// Runs one claim: pending visual, `delay`, request, outcome. Returns
    /// `None` without touching the network when a claim is already pending or
    /// done.
    pub async fn claim<V, D>(&self, view: &V, delay: D) -> Option<ClaimOutcome>
    where
        V: RewardView,
        D: Future<Output = ()>,
    {
        if !self.state.borrow_mut().begin() {
            log::debug!("Daily reward already claimed or pending");
            return None;
        }

        view.show_pending();
        delay.await;

        let response = match self.api.claim_daily_reward().await {
            Ok(response) => response,
            Err(err) => {
                log::error!("Error claiming reward: {}", err);
                self.state.borrow_mut().fail();
                view.show_failed(None);
                return None;
            }
        };

        let message = response.message.clone();
        let outcome = self.state.borrow_mut().complete(response);
        match outcome {
            Some(outcome) => {
                view.show_claimed(&outcome);
                if let Some(achievement) = &outcome.achievement {
                    self.presenter.show_achievement_notification(achievement);
                }
                Some(outcome)
            }
            None => {
                log::info!(
                    "Daily reward not granted: {}",
                    message.as_deref().unwrap_or("no message")
                );
                view.show_failed(message.as_deref());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GamificationError;
    use crate::model::{Achievement, ClaimState, DailyRewardResponse, Notification};
    use crate::service::testing::{MockApi, RecordingPresenter};
    use futures::executor::block_on;
    use futures::future::ready;

    #[derive(Default)]
    struct RecordingView {
        events: RefCell<Vec<String>>,
    }

    impl RewardView for RecordingView {
        fn show_pending(&self) {
            self.events.borrow_mut().push("pending".to_string());
        }

        fn show_claimed(&self, outcome: &ClaimOutcome) {
            self.events
                .borrow_mut()
                .push(format!("claimed {}", outcome.tokens_text()));
        }

        fn show_failed(&self, message: Option<&str>) {
            self.events
                .borrow_mut()
                .push(format!("failed {}", message.unwrap_or("-")));
        }
    }

    fn granted(achievement: Option<Achievement>) -> DailyRewardResponse {
        DailyRewardResponse {
            success: true,
            tokens: 2,
            total_tokens: 10,
            streak_days: 7,
            achievement_earned: achievement,
            ..Default::default()
        }
    }

    #[test]
    fn second_claim_sends_no_request() {
        let claimer = DailyRewardClaimer::new(
            MockApi::with_reward(Ok(granted(None))),
            RecordingPresenter::default(),
        );
        let view = RecordingView::default();

        assert!(block_on(claimer.claim(&view, ready(()))).is_some());
        assert!(block_on(claimer.claim(&view, ready(()))).is_none());

        assert_eq!(*claimer.api.claims.borrow(), 1);
        assert_eq!(*view.events.borrow(), vec!["pending", "claimed +2 tokens"]);
    }

    #[test]
    fn longer_streak_than_rendered_is_a_record() {
        let claimer = DailyRewardClaimer::with_reward(
            MockApi::with_reward(Ok(granted(None))),
            RecordingPresenter::default(),
            DailyReward::with_last_streak(6),
        );
        let outcome = block_on(claimer.claim(&RecordingView::default(), ready(()))).unwrap();
        assert!(outcome.new_record);

        let claimer = DailyRewardClaimer::with_reward(
            MockApi::with_reward(Ok(granted(None))),
            RecordingPresenter::default(),
            DailyReward::with_last_streak(7),
        );
        let outcome = block_on(claimer.claim(&RecordingView::default(), ready(()))).unwrap();
        assert!(!outcome.new_record);
    }

    #[test]
    fn streak_achievement_is_announced() {
        let claimer = DailyRewardClaimer::new(
            MockApi::with_reward(Ok(granted(Some(Achievement::new(
                "Streak Master",
                "Seven days",
                50,
            ))))),
            RecordingPresenter::default(),
        );

        block_on(claimer.claim(&RecordingView::default(), ready(())));

        let shown = claimer.presenter.shown.borrow();
        assert_eq!(shown.len(), 1);
        assert!(matches!(&shown[0], Notification::Achievement(a) if a.name == "Streak Master"));
    }

    #[test]
    fn network_failure_reopens_the_box() {
        let claimer = DailyRewardClaimer::new(
            MockApi::with_reward(Err(GamificationError::Network("offline".to_string()))),
            RecordingPresenter::default(),
        );
        let view = RecordingView::default();

        assert!(block_on(claimer.claim(&view, ready(()))).is_none());

        assert_eq!(claimer.state().state(), ClaimState::Idle);
        assert_eq!(*view.events.borrow(), vec!["pending", "failed -"]);
    }

    #[test]
    fn already_claimed_message_is_shown() {
        let claimer = DailyRewardClaimer::new(
            MockApi::with_reward(Ok(DailyRewardResponse {
                success: false,
                message: Some("You have already claimed your daily reward.".to_string()),
                ..Default::default()
            })),
            RecordingPresenter::default(),
        );
        let view = RecordingView::default();

        block_on(claimer.claim(&view, ready(())));

        assert_eq!(
            view.events.borrow()[1],
            "failed You have already claimed your daily reward."
        );
        assert!(claimer.presenter.shown.borrow().is_empty());
    }
}
