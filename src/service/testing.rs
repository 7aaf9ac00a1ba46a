use super::{GamificationApi, NotificationPresenter};
use crate::error::GamificationError;
use crate::model::{
    Achievement, ActivityEvent, ActivityResult, ActivityType, DailyRewardResponse, Notification,
};
use async_trait::async_trait;
use std::cell::RefCell;

#[derive(Default)]
pub struct MockApi {
    pub activity_response: RefCell<Option<Result<ActivityResult, GamificationError>>>,
    pub reward_response: RefCell<Option<Result<DailyRewardResponse, GamificationError>>>,
    pub recorded: RefCell<Vec<ActivityEvent>>,
    pub claims: RefCell<usize>,
}

impl MockApi {
    pub fn with_activity(response: Result<ActivityResult, GamificationError>) -> Self {
        let api = MockApi::default();
        *api.activity_response.borrow_mut() = Some(response);
        api
    }

    pub fn with_reward(response: Result<DailyRewardResponse, GamificationError>) -> Self {
        let api = MockApi::default();
        *api.reward_response.borrow_mut() = Some(response);
        api
    }
}

#[async_trait(?Send)]
impl GamificationApi for MockApi {
    async fn record_activity(
        &self,
        event: &ActivityEvent,
    ) -> Result<ActivityResult, GamificationError> {
        self.recorded.borrow_mut().push(event.clone());
        self.activity_response
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(GamificationError::Network("no response".to_string())))
    }

    async fn claim_daily_reward(&self) -> Result<DailyRewardResponse, GamificationError> {
        *self.claims.borrow_mut() += 1;
        self.reward_response
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(GamificationError::Network("no response".to_string())))
    }
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub shown: RefCell<Vec<Notification>>,
}

impl NotificationPresenter for RecordingPresenter {
    fn show_points_notification(&self, points: u32, activity_type: ActivityType) {
        self.shown.borrow_mut().push(Notification::Points {
            points,
            activity_type,
        });
    }

    fn show_level_up_notification(&self, level: Option<u32>) {
        self.shown
            .borrow_mut()
            .push(Notification::LevelUp { level });
    }

    fn show_achievement_notification(&self, achievement: &Achievement) {
        self.shown
            .borrow_mut()
            .push(Notification::Achievement(achievement.clone()));
    }
}
