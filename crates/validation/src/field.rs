use taskdesk_shared::{Result, invalid};

use crate::{EMAIL, PHONE};

pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        invalid!("email", "Email is required");
    }

    if !EMAIL.is_match(email) {
        invalid!("email", "Invalid email format");
    }

    Ok(())
}

pub fn validate_required(value: &str, field_name: &str) -> Result<()> {
    if value.trim().is_empty() {
        invalid!(field_name, "{field_name} is required");
    }

    Ok(())
}

/// Check `value` against optional character bounds. A bound of zero is
/// treated as absent.
pub fn validate_length(
    value: &str,
    field_name: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<()> {
    let len = value.chars().count();

    if let Some(min) = min.filter(|min| *min > 0)
        && len < min
    {
        invalid!(field_name, "{field_name} must be at least {min} characters");
    }

    if let Some(max) = max.filter(|max| *max > 0)
        && len > max
    {
        invalid!(field_name, "{field_name} must be at most {max} characters");
    }

    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<()> {
    if phone.is_empty() {
        invalid!("phone", "Phone is required");
    }

    if !PHONE.is_match(phone) {
        invalid!("phone", "Invalid phone format");
    }

    Ok(())
}
