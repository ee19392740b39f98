use std::path::Path;

use taskdesk_shared::{SnapshotStore, task::TaskPayload};
use taskdesk_task::Command;

pub fn setup_command(path: &Path) -> Command {
    Command::new(SnapshotStore::new(path))
}

pub fn payload(title: &str) -> TaskPayload {
    TaskPayload {
        title: title.to_owned(),
        description: None,
        completed: false,
        user_id: 1,
    }
}
