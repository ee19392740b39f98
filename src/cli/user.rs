use std::path::Path;

use serde_json::json;
use taskdesk_shared::{
    AppError, SnapshotStore,
    user::{StoredUser, UserPayload},
};
use taskdesk_user::{Command, CreateUserInput};
use taskdesk_validation::{UserForm, validate_form, validate_user_server};

use crate::config::Config;

fn command(config: &Config) -> Command {
    Command::new(SnapshotStore::new(&config.storage.dir))
        .with_work_factor(config.password.work_factor())
}

/// Read a user payload, or a raw user form when `form` is set. Form errors
/// are printed in full before the first one is raised.
fn read_payload(path: &Path, form: bool) -> anyhow::Result<UserPayload> {
    if !form {
        return super::read_json(path);
    }

    let form: UserForm = super::read_json(path)?;
    if let Err(errors) = validate_form(&form) {
        super::print_json(&errors)?;
        return Err(AppError::from(errors).into());
    }

    Ok(form.to_payload())
}

fn without_hash(user: StoredUser) -> StoredUser {
    StoredUser {
        password_hash: None,
        ..user
    }
}

pub fn validate(config: Config, path: &Path, form: bool) -> anyhow::Result<()> {
    let payload = read_payload(path, form)?;
    let store = SnapshotStore::new(&config.storage.dir);

    validate_user_server(&payload, &store)?;

    super::print_json(&json!({ "valid": true }))
}

pub async fn create(
    config: Config,
    path: &Path,
    form: bool,
    password: String,
) -> anyhow::Result<()> {
    let payload = read_payload(path, form)?;
    let user = command(&config)
        .create(CreateUserInput { payload, password })
        .await?;

    super::print_json(&without_hash(user))
}

pub async fn login(config: Config, email: String, password: String) -> anyhow::Result<()> {
    let user = command(&config).authenticate(&email, &password).await?;

    super::print_json(&without_hash(user))
}

pub fn list(config: Config) -> anyhow::Result<()> {
    let users = command(&config)
        .list()?
        .into_iter()
        .map(without_hash)
        .collect::<Vec<_>>();

    super::print_json(&users)
}
