use std::fmt;
use std::str::FromStr;

const DEFAULT_ACHIEVEMENT_NAME: &str = "an achievement";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareTarget {
    #[default]
    Twitter,
    LinkedIn,
    Facebook,
    WhatsApp,
}

impl ShareTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareTarget::Twitter => "twitter",
            ShareTarget::LinkedIn => "linkedin",
            ShareTarget::Facebook => "facebook",
            ShareTarget::WhatsApp => "whatsapp",
        }
    }

    pub fn share_url(&self, achievement_name: Option<&str>, origin: &str) -> String {
        let text = urlencoding::encode(&share_text(achievement_name)).into_owned();
        let url = urlencoding::encode(origin).into_owned();
        match self {
            ShareTarget::Twitter => {
                format!("https://twitter.com/intent/tweet?text={}&url={}", text, url)
            }
            ShareTarget::LinkedIn => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}&title={}",
                url, text
            ),
            ShareTarget::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                url, text
            ),
            ShareTarget::WhatsApp => format!("https://wa.me/?text={}%20{}", text, url),
        }
    }
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShareTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(ShareTarget::Twitter),
            "linkedin" => Ok(ShareTarget::LinkedIn),
            "facebook" => Ok(ShareTarget::Facebook),
            "whatsapp" => Ok(ShareTarget::WhatsApp),
            other => Err(format!("Unknown share target: {}", other)),
        }
    }
}

pub fn share_text(achievement_name: Option<&str>) -> String {
    let name = achievement_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_ACHIEVEMENT_NAME);
    format!(
        "I just earned the {} badge on the Kenyan Legal Assistant platform! #LegalTech #Achievement",
        name
    )
}

/// `share_type` is the raw `data-share-type`, recorded even when it names no
/// known network.
pub fn share_description(achievement_id: &str, share_type: &str) -> String {
    format!("Shared achievement {} on {}", achievement_id, share_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://legal.example";

    #[test]
    fn twitter_link_encodes_text_and_origin() {
        let url = ShareTarget::Twitter.share_url(Some("Researcher"), ORIGIN);
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=I%20just%20earned%20the%20Researcher%20badge%20on%20the%20Kenyan%20Legal%20Assistant%20platform%21%20%23LegalTech%20%23Achievement&url=https%3A%2F%2Flegal.example"
        );
    }

    #[test]
    fn each_target_points_at_its_site() {
        assert!(ShareTarget::LinkedIn
            .share_url(None, ORIGIN)
            .starts_with("https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Flegal.example&title="));
        assert!(ShareTarget::Facebook
            .share_url(None, ORIGIN)
            .starts_with("https://www.facebook.com/sharer/sharer.php?u="));
        assert!(ShareTarget::WhatsApp
            .share_url(None, ORIGIN)
            .ends_with("%20https%3A%2F%2Flegal.example"));
    }

    #[test]
    fn missing_name_uses_default() {
        assert!(share_text(None).contains("the an achievement badge"));
        assert!(share_text(Some("")).contains("the an achievement badge"));
    }

    #[test]
    fn parses_targets_case_insensitively() {
        assert_eq!("LinkedIn".parse::<ShareTarget>(), Ok(ShareTarget::LinkedIn));
        assert!("myspace".parse::<ShareTarget>().is_err());
    }

    #[test]
    fn description_keeps_the_raw_share_type() {
        assert_eq!(
            share_description("12", ShareTarget::WhatsApp.as_str()),
            "Shared achievement 12 on whatsapp"
        );
        assert_eq!(
            share_description("12", "myspace"),
            "Shared achievement 12 on myspace"
        );
    }
}
