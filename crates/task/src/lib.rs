use taskdesk_shared::{
    Result, SnapshotStore, TASKS_KEY, not_found,
    task::{StoredTask, TaskPayload},
};
use taskdesk_validation::{sanitize_payload, validate_task_server};

/// Task operations over the `tasks_db` snapshot.
#[derive(Debug, Clone)]
pub struct Command(SnapshotStore);

impl Command {
    pub fn new(store: SnapshotStore) -> Self {
        Self(store)
    }

    pub fn create(&self, payload: TaskPayload) -> Result<StoredTask> {
        validate_task_server(&payload)?;

        let payload = sanitize_payload(&payload)?;
        let mut tasks: Vec<StoredTask> = self.0.read(TASKS_KEY)?;
        let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = StoredTask { id, payload };

        tasks.push(task.clone());
        self.0.write(TASKS_KEY, &tasks)?;

        tracing::info!(task.id = id, task.user_id = task.payload.user_id, "task created");

        Ok(task)
    }

    pub fn find(&self, id: u64) -> Result<StoredTask> {
        let tasks: Vec<StoredTask> = self.0.read(TASKS_KEY)?;

        match tasks.into_iter().find(|t| t.id == id) {
            Some(task) => Ok(task),
            None => not_found!("Task not found"),
        }
    }

    pub fn toggle(&self, id: u64) -> Result<StoredTask> {
        let mut tasks: Vec<StoredTask> = self.0.read(TASKS_KEY)?;

        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            not_found!("Task not found");
        };

        task.payload.completed = !task.payload.completed;
        let task = task.clone();
        self.0.write(TASKS_KEY, &tasks)?;

        Ok(task)
    }

    pub fn list(&self) -> Result<Vec<StoredTask>> {
        self.0.read(TASKS_KEY)
    }
}
