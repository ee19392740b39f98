use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::Serialize;
use taskdesk_shared::{AppError, Result};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Outcome of the password strength policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PasswordCheck {
    fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: Some(message.to_owned()),
        }
    }
}

/// Check `password` against the strength policy, reporting the first unmet
/// rule: length, then uppercase, lowercase and digit.
pub fn validate_password(password: &str) -> PasswordCheck {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return PasswordCheck::fail("Password must be at least 8 characters");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return PasswordCheck::fail("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return PasswordCheck::fail("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return PasswordCheck::fail("Password must contain at least one number");
    }

    PasswordCheck::pass()
}

/// Argon2id cost parameters.
///
/// The default follows the OWASP recommendation:
/// - Memory: 65536 KiB (64 MiB)
/// - Iterations: 3
/// - Parallelism: 4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkFactor {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for WorkFactor {
    fn default() -> Self {
        Self {
            memory_kib: 65536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

impl WorkFactor {
    fn argon2(&self) -> Result<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| AppError::Server(format!("invalid password work factor: {e}")))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash `password` with a random salt and the default work factor.
pub async fn hash_password(password: &str) -> Result<String> {
    hash_password_with(password, WorkFactor::default()).await
}

/// Hash on the blocking pool so the caller's runtime keeps serving other work.
pub async fn hash_password_with(password: &str, work_factor: WorkFactor) -> Result<String> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || -> Result<String> {
        let argon2 = work_factor.argon2()?;
        let salt = SaltString::generate(&mut OsRng);

        Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
    })
    .await
    .map_err(|e| AppError::Unknown(e.into()))?
}

/// Check `password` against a stored PHC hash. The cost parameters are read
/// from the hash itself. A malformed hash is an error, a mismatch is `false`.
pub async fn compare_password(password: &str, hash: &str) -> Result<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || -> Result<bool> {
        let parsed_hash = PasswordHash::new(&hash)?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    })
    .await
    .map_err(|e| AppError::Unknown(e.into()))?
}
