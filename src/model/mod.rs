mod achievement;
mod activity;
mod activity_result;
pub mod calendar;
mod confirm;
pub mod csrf;
mod daily_reward;
mod fab;
mod notification;
mod preferences;
mod share;

pub use achievement::Achievement;
pub use activity::{ActivityEvent, ActivityType, ParseActivityTypeError};
pub use activity_result::ActivityResult;
pub use confirm::delete_prompt;
pub use daily_reward::{
    ClaimOutcome, ClaimState, DailyReward, DailyRewardResponse, CLAIMED_MESSAGE, CLAIM_DELAY_MS,
};
pub use fab::{ClickTarget, FabMenu};
pub use notification::{
    level_message, points_message, Notification, ACHIEVEMENT_DELAY_MS, LEVEL_UP_DELAY_MS,
    POINTS_DELAY_MS,
};
pub use preferences::SoundPreference;
pub use share::{share_description, share_text, ShareTarget};
