use serde_json::json;
use taskdesk_user::{compare_password, hash_password_with, validate_password};

use crate::config::Config;

pub fn check(password: &str) -> anyhow::Result<()> {
    super::print_json(&validate_password(password))
}

pub async fn hash(config: Config, password: &str) -> anyhow::Result<()> {
    let hash = hash_password_with(password, config.password.work_factor()).await?;

    println!("{hash}");

    Ok(())
}

pub async fn verify(password: &str, hash: &str) -> anyhow::Result<()> {
    let matches = compare_password(password, hash).await?;

    super::print_json(&json!({ "matches": matches }))
}
