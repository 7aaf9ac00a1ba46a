use super::{Achievement, ActivityResult, ActivityType};

pub const POINTS_DELAY_MS: u32 = 3_000;
pub const LEVEL_UP_DELAY_MS: u32 = 5_000;
pub const ACHIEVEMENT_DELAY_MS: u32 = 6_000;

/// One toast worth of content.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Points {
        points: u32,
        activity_type: ActivityType,
    },
    LevelUp {
        level: Option<u32>,
    },
    Achievement(Achievement),
}

impl Notification {
    /// Toasts for a successful activity, in display order:
    /// points, then level-up, then each achievement as the server listed it.
    pub fn for_activity(activity_type: ActivityType, result: &ActivityResult) -> Vec<Notification> {
        if !result.success {
            return Vec::new();
        }

        let mut notifications = Vec::with_capacity(2 + result.new_achievements.len());
        if result.points_earned > 0 {
            notifications.push(Notification::Points {
                points: result.points_earned,
                activity_type,
            });
        }
        if result.level_up {
            notifications.push(Notification::LevelUp {
                level: result.new_level,
            });
        }
        notifications.extend(
            result
                .new_achievements
                .iter()
                .cloned()
                .map(Notification::Achievement),
        );
        notifications
    }

    pub fn delay_ms(&self) -> u32 {
        match self {
            Notification::Points { .. } => POINTS_DELAY_MS,
            Notification::LevelUp { .. } => LEVEL_UP_DELAY_MS,
            Notification::Achievement(_) => ACHIEVEMENT_DELAY_MS,
        }
    }

    pub fn toast_class(&self) -> &'static str {
        match self {
            Notification::Points { .. } => "points-toast",
            Notification::LevelUp { .. } => "level-up-toast",
            Notification::Achievement(_) => "achievement-toast",
        }
    }

    pub fn header_class(&self) -> &'static str {
        match self {
            Notification::Points { .. } => "bg-success text-white",
            Notification::LevelUp { .. } => "bg-primary text-white",
            Notification::Achievement(_) => "bg-warning text-dark",
        }
    }

    pub fn icon_class(&self) -> &str {
        match self {
            Notification::Points { .. } => "bi bi-plus-circle",
            Notification::LevelUp { .. } => "bi bi-arrow-up-circle",
            Notification::Achievement(achievement) => achievement.icon_class(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notification::Points { .. } => "Points Earned",
            Notification::LevelUp { .. } => "Level Up!",
            Notification::Achievement(_) => "Achievement Unlocked!",
        }
    }

    /// Dark headers need the light close button.
    pub fn light_close_button(&self) -> bool {
        !matches!(self, Notification::Achievement(_))
    }

    pub fn plays_sound(&self) -> bool {
        matches!(self, Notification::Achievement(_))
    }
}

pub fn points_message(points: u32, activity_type: ActivityType) -> String {
    format!("+{} points for {}", points, activity_type.label())
}

pub fn level_message(level: Option<u32>) -> String {
    match level {
        Some(level) => format!("You've reached level {}", level),
        None => "You've reached a new level".to_string(),
    }
}
