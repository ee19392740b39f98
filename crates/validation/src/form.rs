use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use taskdesk_shared::{
    AppError,
    task::{StoredTask, TaskPayload},
    user::{Address, Company, StoredUser, UserPayload},
};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{EMAIL, PHONE, WEBSITE};

/// Raw input of the user form. Optional inputs left blank are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserForm {
    #[validate(
        custom(function = "not_blank", message = "Name must be between 2 and 50 characters"),
        length(min = 2, max = 50, message = "Name must be between 2 and 50 characters")
    )]
    pub name: String,

    #[validate(regex(path = *EMAIL, message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(regex(path = *PHONE, message = "Please enter a valid phone number"))]
    pub phone: String,

    #[serde(deserialize_with = "blank_as_none")]
    #[validate(regex(
        path = *WEBSITE,
        message = "Please enter a valid website (e.g., example.com)"
    ))]
    pub website: Option<String>,

    #[serde(deserialize_with = "blank_as_none")]
    #[validate(length(min = 3, message = "Street must be at least 3 characters"))]
    pub street: Option<String>,

    #[serde(deserialize_with = "blank_as_none")]
    pub suite: Option<String>,

    #[serde(deserialize_with = "blank_as_none")]
    #[validate(length(min = 2, message = "City must be at least 2 characters"))]
    pub city: Option<String>,

    #[serde(deserialize_with = "blank_as_none")]
    #[validate(length(min = 2, message = "Company name must be at least 2 characters"))]
    pub company_name: Option<String>,

    #[serde(deserialize_with = "blank_as_none")]
    pub catch_phrase: Option<String>,

    #[serde(deserialize_with = "blank_as_none")]
    pub bs: Option<String>,
}

impl UserForm {
    /// Pre-fill the form from an existing user.
    pub fn from_user(user: &StoredUser) -> Self {
        let payload = &user.payload;
        let address = payload.address.clone().unwrap_or_default();
        let company = payload.company.clone().unwrap_or_default();

        Self {
            name: payload.name.to_owned(),
            email: payload.email.to_owned(),
            phone: payload.phone.to_owned(),
            website: present(payload.website.clone()),
            street: present(Some(address.street)),
            suite: present(Some(address.suite)),
            city: present(Some(address.city)),
            company_name: present(Some(company.name)),
            catch_phrase: present(company.catch_phrase),
            bs: present(company.bs),
        }
    }

    /// Build the submitted payload: the address is only sent when a street or
    /// city was entered, the company only when it has a name.
    pub fn to_payload(&self) -> UserPayload {
        let address = (self.street.is_some() || self.city.is_some()).then(|| Address {
            street: self.street.clone().unwrap_or_default(),
            suite: self.suite.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
        });

        let company = self.company_name.as_ref().map(|name| Company {
            name: name.to_owned(),
            catch_phrase: self.catch_phrase.clone(),
            bs: self.bs.clone(),
        });

        UserPayload {
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            phone: self.phone.to_owned(),
            website: self.website.clone(),
            address,
            company,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TaskForm {
    #[validate(
        custom(function = "not_blank", message = "Title must be between 3 and 100 characters"),
        length(min = 3, max = 100, message = "Title must be between 3 and 100 characters")
    )]
    pub title: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: String,

    pub completed: bool,
}

impl TaskForm {
    pub fn from_task(task: &StoredTask) -> Self {
        Self {
            title: task.payload.title.to_owned(),
            description: task.payload.description.clone().unwrap_or_default(),
            completed: task.payload.completed,
        }
    }

    pub fn to_payload(&self, user_id: i64) -> TaskPayload {
        TaskPayload {
            title: self.title.to_owned(),
            description: present(Some(self.description.to_owned())),
            completed: self.completed,
            user_id,
        }
    }
}

/// Field name to message, one entry per invalid input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(value: ValidationErrors) -> Self {
        let errors = value
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let field = camel_case(&field.to_string());
                let message = errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));

                (field, message)
            })
            .collect();

        Self(errors)
    }
}

/// The alphabetically first invalid field becomes a single validation error.
impl From<FormErrors> for AppError {
    fn from(value: FormErrors) -> Self {
        match value.0.into_iter().next() {
            Some((field, message)) => AppError::validation(message, field),
            None => AppError::invalid_input("Invalid input"),
        }
    }
}

/// Run every rule of `form` and collect one message per invalid field.
pub fn validate_form<F: Validate>(form: &F) -> Result<(), FormErrors> {
    form.validate().map_err(FormErrors::from)
}

/// Re-validate a single field, as done when an input loses focus.
pub fn validate_field<F: Validate>(form: &F, field: &str) -> Option<String> {
    validate_form(form)
        .err()
        .and_then(|errors| errors.get(field).map(ToOwned::to_owned))
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(present(Option::<String>::deserialize(deserializer)?))
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}
