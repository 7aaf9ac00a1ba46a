mod reward_amount;
mod toast;

pub use reward_amount::{RewardAmountComp, RewardAmountProps};
pub use toast::{ToastComp, ToastProps};
