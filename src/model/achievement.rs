use serde::{Deserialize, Serialize};

const DEFAULT_ICON: &str = "bi bi-trophy";

/// Display data for an earned achievement, owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Achievement {
    pub fn new(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Achievement {
            id: None,
            name: name.into(),
            description: description.into(),
            points,
            icon: None,
            category: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Icons are usually CSS classes; some seeds use an image file instead.
    pub fn icon_image(&self) -> Option<&str> {
        let icon = self.icon.as_deref()?.trim();
        let lower = icon.to_ascii_lowercase();
        [".png", ".svg", ".jpg", ".jpeg", ".gif", ".webp"]
            .iter()
            .any(|extension| lower.ends_with(extension))
            .then_some(icon)
    }

    pub fn icon_class(&self) -> &str {
        match self.icon.as_deref() {
            Some(icon) if !icon.trim().is_empty() => icon,
            _ => DEFAULT_ICON,
        }
    }
}
