use std::path::Path;

use taskdesk_shared::{SnapshotStore, user::UserPayload};
use taskdesk_user::{Command, CreateUserInput, WorkFactor};

/// Cheap parameters so command tests do not pay the production cost.
pub fn fast_work_factor() -> WorkFactor {
    WorkFactor {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    }
}

#[allow(dead_code)]
pub fn setup_command(path: &Path) -> Command {
    Command::new(SnapshotStore::new(path)).with_work_factor(fast_work_factor())
}

#[allow(dead_code)]
pub fn payload(name: &str) -> UserPayload {
    UserPayload {
        name: name.to_owned(),
        email: format!("{}@taskdesk.localhost", name.to_lowercase()),
        phone: "555-0100".to_owned(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub async fn create_user(command: &Command, name: &str) -> anyhow::Result<u64> {
    let user = command
        .create(CreateUserInput {
            payload: payload(name),
            password: "Password1".to_owned(),
        })
        .await?;

    Ok(user.id)
}
