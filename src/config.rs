/// Endpoint and header settings, baked in at build time by `build.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub record_activity_url: String,
    pub claim_reward_url: String,
    pub csrf_header: String,
    pub csrf_cookie: String,
    pub csrf_meta: String,
    pub sound_muted_key: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            record_activity_url: env!("RECORD_ACTIVITY_URL").to_string(),
            claim_reward_url: env!("CLAIM_REWARD_URL").to_string(),
            csrf_header: env!("CSRF_HEADER").to_string(),
            csrf_cookie: "csrf_token".to_string(),
            csrf_meta: "csrf-token".to_string(),
            sound_muted_key: "gamification.sound_muted".to_string(),
        }
    }

    pub fn with_record_activity_url(mut self, url: impl Into<String>) -> Self {
        self.record_activity_url = url.into();
        self
    }

    pub fn with_csrf_header(mut self, header: impl Into<String>) -> Self {
        self.csrf_header = header.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
