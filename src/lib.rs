#[cfg(feature = "yew")]
pub mod components;
pub mod config;
#[cfg(feature = "yew")]
pub mod dom;
pub mod error;
pub mod model;
pub mod service;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    #[cfg(feature = "yew")]
    pub use crate::dom::{HttpGamificationApi, Page, SoundPlayer, ToastService};
    pub use crate::error::GamificationError;
    pub use crate::model::Achievement;
    pub use crate::model::ActivityEvent;
    pub use crate::model::ActivityResult;
    pub use crate::model::ActivityType;
    pub use crate::model::DailyReward;
    pub use crate::model::DailyRewardResponse;
    pub use crate::model::FabMenu;
    pub use crate::model::Notification;
    pub use crate::model::ShareTarget;
    pub use crate::service::ActivityReporter;
    pub use crate::service::DailyRewardClaimer;
    pub use crate::service::GamificationApi;
    pub use crate::service::NotificationPresenter;
    pub use crate::service::RewardView;
}
