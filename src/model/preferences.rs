use serde::{Deserialize, Serialize};

/// Persisted mute switch for gamification sounds. Stored as a bare JSON
/// boolean; anything unreadable counts as sound on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundPreference {
    pub muted: bool,
}

impl SoundPreference {
    pub fn toggled(self) -> Self {
        SoundPreference { muted: !self.muted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_as_plain_boolean() {
        let muted = SoundPreference { muted: true };
        assert_eq!(serde_json::to_string(&muted).unwrap(), "true");
        assert_eq!(
            serde_json::from_str::<SoundPreference>("false").unwrap(),
            SoundPreference::default()
        );
    }

    #[test]
    fn unreadable_value_is_rejected() {
        assert!(serde_json::from_str::<SoundPreference>("\"garbage\"").is_err());
    }

    #[test]
    fn toggle_flips_mute() {
        assert!(SoundPreference::default().toggled().muted);
        assert!(!SoundPreference { muted: true }.toggled().muted);
    }
}
