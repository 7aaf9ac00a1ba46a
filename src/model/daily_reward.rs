use super::Achievement;
use serde::Deserialize;

pub const CLAIM_DELAY_MS: u32 = 800;
pub const CLAIMED_MESSAGE: &str = "Reward claimed! Come back tomorrow for more.";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DailyRewardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub base_tokens: Option<u32>,
    #[serde(default)]
    pub streak_bonus: Option<u32>,
    #[serde(default)]
    pub achievement_earned: Option<Achievement>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimState {
    #[default]
    Idle,
    Pending,
    Claimed,
}

/// What the reward box should display after a successful claim.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimOutcome {
    pub tokens: u32,
    pub total_tokens: u32,
    pub streak_days: u32,
    pub new_record: bool,
    pub achievement: Option<Achievement>,
}

impl ClaimOutcome {
    pub fn tokens_text(&self) -> String {
        format!("+{} tokens", self.tokens)
    }

    pub fn streak_text(&self) -> Option<String> {
        (self.streak_days > 0).then(|| format!("Current streak: {} days", self.streak_days))
    }
}

/// Claim guard for one page load. Only one request may be in flight, and none
/// once a claim has succeeded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyReward {
    state: ClaimState,
    last_streak: u32,
}

impl DailyReward {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_streak(last_streak: u32) -> Self {
        DailyReward {
            state: ClaimState::Idle,
            last_streak,
        }
    }

    pub fn state(&self) -> ClaimState {
        self.state
    }

    pub fn is_claimed(&self) -> bool {
        self.state == ClaimState::Claimed
    }

    /// Returns `true` if the caller may start a claim request.
    pub fn begin(&mut self) -> bool {
        match self.state {
            ClaimState::Idle => {
                self.state = ClaimState::Pending;
                true
            }
            ClaimState::Pending | ClaimState::Claimed => false,
        }
    }

    /// Applies the server response. `None` means the claim did not go
    /// through and the box is clickable again.
    pub fn complete(&mut self, response: DailyRewardResponse) -> Option<ClaimOutcome> {
        if !response.success {
            self.fail();
            return None;
        }

        let new_record = response.streak_days > self.last_streak && response.streak_days > 1;
        self.last_streak = response.streak_days;
        self.state = ClaimState::Claimed;

        Some(ClaimOutcome {
            tokens: response.tokens,
            total_tokens: response.total_tokens,
            streak_days: response.streak_days,
            new_record,
            achievement: response.achievement_earned,
        })
    }

    pub fn fail(&mut self) {
        if self.state == ClaimState::Pending {
            self.state = ClaimState::Idle;
        }
    }
}
