use std::path::Path;

use serde_json::json;
use taskdesk_shared::{AppError, SnapshotStore, task::TaskPayload};
use taskdesk_task::Command;
use taskdesk_validation::{TaskForm, validate_form, validate_task_server};

use crate::config::Config;

fn command(config: &Config) -> Command {
    Command::new(SnapshotStore::new(&config.storage.dir))
}

/// Read a task payload, or a raw task form owned by `user_id` when given.
fn read_payload(path: &Path, user_id: Option<i64>) -> anyhow::Result<TaskPayload> {
    let Some(user_id) = user_id else {
        return super::read_json(path);
    };

    let form: TaskForm = super::read_json(path)?;
    if let Err(errors) = validate_form(&form) {
        super::print_json(&errors)?;
        return Err(AppError::from(errors).into());
    }

    Ok(form.to_payload(user_id))
}

pub fn validate(path: &Path, user_id: Option<i64>) -> anyhow::Result<()> {
    let payload = read_payload(path, user_id)?;

    validate_task_server(&payload)?;

    super::print_json(&json!({ "valid": true }))
}

pub fn create(config: Config, path: &Path, user_id: Option<i64>) -> anyhow::Result<()> {
    let payload = read_payload(path, user_id)?;
    let task = command(&config).create(payload)?;

    super::print_json(&task)
}

pub fn toggle(config: Config, id: u64) -> anyhow::Result<()> {
    let task = command(&config).toggle(id)?;

    super::print_json(&task)
}

pub fn list(config: Config) -> anyhow::Result<()> {
    super::print_json(&command(&config).list()?)
}
