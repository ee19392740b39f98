use taskdesk_shared::{
    Result, SnapshotStore, USERS_KEY, invalid, not_found, unauthenticated,
    user::{StoredUser, UserPayload},
};
use taskdesk_validation::{sanitize_payload, validate_user_server};

use crate::password::{WorkFactor, compare_password, hash_password_with, validate_password};

pub struct CreateUserInput {
    pub payload: UserPayload,
    pub password: String,
}

/// Account operations over the `users_db` snapshot.
#[derive(Debug, Clone)]
pub struct Command {
    store: SnapshotStore,
    work_factor: WorkFactor,
}

impl Command {
    pub fn new(store: SnapshotStore) -> Self {
        Self {
            store,
            work_factor: WorkFactor::default(),
        }
    }

    pub fn with_work_factor(mut self, work_factor: WorkFactor) -> Self {
        self.work_factor = work_factor;
        self
    }

    /// Validate, sanitize and persist a new account. The password hash is
    /// computed before the record is written.
    ///
    /// `email` is stored as submitted: it is the lookup key for the duplicate
    /// check and for [`Command::authenticate`].
    pub async fn create(&self, input: CreateUserInput) -> Result<StoredUser> {
        validate_user_server(&input.payload, &self.store)?;

        let check = validate_password(&input.password);
        if !check.valid {
            invalid!("password", "{}", check.message.unwrap_or_default());
        }

        let mut payload = sanitize_payload(&input.payload)?;
        payload.email = input.payload.email.to_owned();
        let password_hash = hash_password_with(&input.password, self.work_factor).await?;

        let mut users: Vec<StoredUser> = self.store.read(USERS_KEY)?;
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = StoredUser {
            id,
            payload,
            password_hash: Some(password_hash),
        };

        users.push(user.clone());
        self.store.write(USERS_KEY, &users)?;

        tracing::info!(user.id = id, "user created");

        Ok(user)
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<StoredUser> {
        let users: Vec<StoredUser> = self.store.read(USERS_KEY)?;

        let Some(user) = users.into_iter().find(|u| u.payload.email == email) else {
            unauthenticated!("Invalid email or password");
        };

        let Some(hash) = user.password_hash.as_deref() else {
            unauthenticated!("Invalid email or password");
        };

        if !compare_password(password, hash).await? {
            unauthenticated!("Invalid email or password");
        }

        Ok(user)
    }

    pub fn find(&self, id: u64) -> Result<StoredUser> {
        let users: Vec<StoredUser> = self.store.read(USERS_KEY)?;

        match users.into_iter().find(|u| u.id == id) {
            Some(user) => Ok(user),
            None => not_found!("User not found"),
        }
    }

    pub fn list(&self) -> Result<Vec<StoredUser>> {
        self.store.read(USERS_KEY)
    }
}
