use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kinds of user activity the backend awards points for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Login,
    Research,
    CreateCase,
    UpdateCase,
    CreateDocument,
    ShareAchievement,
    CompleteChallenge,
    ClaimDailyReward,
}

impl ActivityType {
    pub const ALL: [ActivityType; 8] = [
        ActivityType::Login,
        ActivityType::Research,
        ActivityType::CreateCase,
        ActivityType::UpdateCase,
        ActivityType::CreateDocument,
        ActivityType::ShareAchievement,
        ActivityType::CompleteChallenge,
        ActivityType::ClaimDailyReward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Login => "login",
            ActivityType::Research => "research",
            ActivityType::CreateCase => "create_case",
            ActivityType::UpdateCase => "update_case",
            ActivityType::CreateDocument => "create_document",
            ActivityType::ShareAchievement => "share_achievement",
            ActivityType::CompleteChallenge => "complete_challenge",
            ActivityType::ClaimDailyReward => "claim_daily_reward",
        }
    }

    /// Human readable form used in toast text, e.g. `create case`.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown activity type: {0}")]
pub struct ParseActivityTypeError(pub String);

impl FromStr for ActivityType {
    type Err = ParseActivityTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|activity_type| activity_type.as_str() == s.trim())
            .ok_or_else(|| ParseActivityTypeError(s.to_string()))
    }
}

/// Payload posted to the record-activity endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub activity_type: ActivityType,
    pub description: String,
}

impl ActivityEvent {
    pub fn new(activity_type: ActivityType, description: impl Into<String>) -> Self {
        ActivityEvent {
            activity_type,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_backend_expects() {
        let event = ActivityEvent::new(ActivityType::CreateDocument, "Drafted a lease");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "activity_type": "create_document",
                "description": "Drafted a lease"
            })
        );
    }

    #[test]
    fn parses_every_known_type() {
        for activity_type in ActivityType::ALL {
            assert_eq!(activity_type.as_str().parse::<ActivityType>(), Ok(activity_type));
        }
        assert!("delete_everything".parse::<ActivityType>().is_err());
    }

    #[test]
    fn label_replaces_every_underscore() {
        assert_eq!(ActivityType::ClaimDailyReward.label(), "claim daily reward");
        assert_eq!(ActivityType::Login.label(), "login");
    }
}
