use super::Achievement;
use serde::Deserialize;

/// Normalised outcome of a record-activity call.
///
/// Deserialises from every response shape the backend has shipped
/// (`points_earned`/`points`, `level_up`/`new_level`/`level`,
/// `new_achievements`/`achievements`), so callers only ever see this type.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "ActivityResponse")]
pub struct ActivityResult {
    pub success: bool,
    pub points_earned: u32,
    pub level_up: bool,
    pub new_level: Option<u32>,
    pub new_achievements: Vec<Achievement>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ActivityResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, alias = "points")]
    points_earned: Option<i64>,
    #[serde(default)]
    level_up: Option<bool>,
    #[serde(default)]
    new_level: Option<u32>,
    #[serde(default)]
    level: Option<u32>,
    #[serde(default, alias = "achievements")]
    new_achievements: Option<Vec<Achievement>>,
    #[serde(default)]
    message: Option<String>,
}

impl From<ActivityResponse> for ActivityResult {
    fn from(response: ActivityResponse) -> Self {
        // `level` is always present on current responses; only the explicit
        // flag or a `new_level` field mean the user actually advanced.
        let level_up = response
            .level_up
            .unwrap_or(response.new_level.is_some());
        let new_level = if level_up {
            response.new_level.or(response.level)
        } else {
            None
        };

        ActivityResult {
            success: response.success,
            points_earned: response.points_earned.unwrap_or(0).clamp(0, u32::MAX as i64) as u32,
            level_up,
            new_level,
            new_achievements: response.new_achievements.unwrap_or_default(),
            message: response.message,
        }
    }
}

impl ActivityResult {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
