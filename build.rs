use std::env;

fn main() {
    let record_activity_url = env::var("RECORD_ACTIVITY_URL")
        .unwrap_or_else(|_| String::from("/gamification/record_activity"));
    let claim_reward_url = env::var("CLAIM_REWARD_URL")
        .unwrap_or_else(|_| String::from("/gamification/claim_daily_reward"));
    let csrf_header = env::var("CSRF_HEADER").unwrap_or_else(|_| String::from("X-CSRFToken"));

    println!("cargo:rerun-if-env-changed=RECORD_ACTIVITY_URL");
    println!("cargo:rerun-if-env-changed=CLAIM_REWARD_URL");
    println!("cargo:rerun-if-env-changed=CSRF_HEADER");
    println!("cargo:rustc-env=RECORD_ACTIVITY_URL={}", record_activity_url);
    println!("cargo:rustc-env=CLAIM_REWARD_URL={}", claim_reward_url);
    println!("cargo:rustc-env=CSRF_HEADER={}", csrf_header);
}
