use std::path::Path;

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

pub mod password;
pub mod sanitize;
pub mod task;
pub mod user;

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}
