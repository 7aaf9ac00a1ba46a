use crate::error::GamificationError;
use crate::model::{ActivityEvent, ActivityResult, DailyRewardResponse};
use async_trait::async_trait;
use std::rc::Rc;

/// Backend gamification endpoints.
#[async_trait(?Send)]
pub trait GamificationApi {
    async fn record_activity(
        &self,
        event: &ActivityEvent,
    ) -> Result<ActivityResult, GamificationError>;

    async fn claim_daily_reward(&self) -> Result<DailyRewardResponse, GamificationError>;
}

#[async_trait(?Send)]
impl<T> GamificationApi for Rc<T>
where
    T: GamificationApi + ?Sized,
{
    async fn record_activity(
        &self,
        event: &ActivityEvent,
    ) -> Result<ActivityResult, GamificationError> {
        (**self).record_activity(event).await
    }

    async fn claim_daily_reward(&self) -> Result<DailyRewardResponse, GamificationError> {
        (**self).claim_daily_reward().await
    }
}
