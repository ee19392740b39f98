use std::sync::LazyLock;

use serde::Deserialize;
use taskdesk_shared::{
    Result, SnapshotStore, USERS_KEY, invalid, task::TaskPayload,
    user::{StoredUser, UserPayload},
};

use crate::{EMAIL, PHONE, ValidationRule, WEBSITE, validate};

/// Existing-user lookup consulted by the duplicate email check.
pub trait UserLookup {
    fn email_exists(&self, email: &str) -> Result<bool>;
}

impl UserLookup for [StoredUser] {
    fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self.iter().any(|user| user.payload.email == email))
    }
}

impl UserLookup for Vec<StoredUser> {
    fn email_exists(&self, email: &str) -> Result<bool> {
        self.as_slice().email_exists(email)
    }
}

#[derive(Deserialize)]
struct EmailRecord {
    #[serde(default)]
    email: Option<String>,
}

/// Reads the `users_db` snapshot fresh on every call. Records only need an
/// `email` field.
impl UserLookup for SnapshotStore {
    fn email_exists(&self, email: &str) -> Result<bool> {
        let users: Vec<EmailRecord> = self.read(USERS_KEY)?;

        Ok(users.iter().any(|user| user.email.as_deref() == Some(email)))
    }
}

static NAME_RULES: LazyLock<Vec<ValidationRule<str>>> = LazyLock::new(|| {
    vec![
        ValidationRule::trimmed_min_length(2, "Name must be at least 2 characters"),
        ValidationRule::max_length(50, "Name must be at most 50 characters"),
    ]
});

static EMAIL_RULES: LazyLock<Vec<ValidationRule<str>>> =
    LazyLock::new(|| vec![ValidationRule::matches(&EMAIL, "Invalid email address")]);

static PHONE_RULES: LazyLock<Vec<ValidationRule<str>>> =
    LazyLock::new(|| vec![ValidationRule::matches(&PHONE, "Invalid phone number")]);

static WEBSITE_RULES: LazyLock<Vec<ValidationRule<str>>> =
    LazyLock::new(|| vec![ValidationRule::matches(&WEBSITE, "Invalid website format")]);

static TITLE_RULES: LazyLock<Vec<ValidationRule<str>>> = LazyLock::new(|| {
    vec![
        ValidationRule::trimmed_min_length(3, "Title must be at least 3 characters"),
        ValidationRule::max_length(100, "Title must be at most 100 characters"),
    ]
});

static DESCRIPTION_RULES: LazyLock<Vec<ValidationRule<str>>> = LazyLock::new(|| {
    vec![ValidationRule::max_length(
        500,
        "Description must be at most 500 characters",
    )]
});

static USER_ID_RULES: LazyLock<Vec<ValidationRule<i64>>> =
    LazyLock::new(|| vec![ValidationRule::new(|id: &i64| *id >= 1, "Invalid user ID")]);

/// Re-validate a user payload before it is persisted.
///
/// Checks run in a fixed order and stop at the first violation, so the
/// returned error always names a single field.
pub fn validate_user_server<L>(payload: &UserPayload, users: &L) -> Result<()>
where
    L: UserLookup + ?Sized,
{
    validate(payload.name.as_str(), NAME_RULES.as_slice(), "name")?;
    validate(payload.email.as_str(), EMAIL_RULES.as_slice(), "email")?;

    if users.email_exists(&payload.email)? {
        tracing::warn!(email = %payload.email, "duplicate email rejected");
        invalid!("email", "Email already exists");
    }

    validate(payload.phone.as_str(), PHONE_RULES.as_slice(), "phone")?;

    if let Some(website) = payload.website.as_deref().filter(|w| !w.is_empty()) {
        validate(website, WEBSITE_RULES.as_slice(), "website")?;
    }

    if let Some(address) = &payload.address {
        if !address.street.is_empty() && address.street.chars().count() < 3 {
            invalid!("street", "Street must be at least 3 characters");
        }

        if !address.city.is_empty() && address.city.chars().count() < 2 {
            invalid!("city", "City must be at least 2 characters");
        }
    }

    if let Some(company) = &payload.company {
        if !company.name.is_empty() && company.name.chars().count() < 2 {
            invalid!("companyName", "Company name must be at least 2 characters");
        }
    }

    Ok(())
}

pub fn validate_task_server(payload: &TaskPayload) -> Result<()> {
    validate(payload.title.as_str(), TITLE_RULES.as_slice(), "title")?;

    if let Some(description) = payload.description.as_deref() {
        validate(description, DESCRIPTION_RULES.as_slice(), "description")?;
    }

    validate(&payload.user_id, USER_ID_RULES.as_slice(), "userId")
}
