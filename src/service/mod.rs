mod api;
mod presenter;
mod reporter;
mod reward;

#[cfg(test)]
pub(crate) mod testing;

pub use api::GamificationApi;
pub use presenter::NotificationPresenter;
pub use reporter::ActivityReporter;
pub use reward::{DailyRewardClaimer, RewardView};
