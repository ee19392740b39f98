use std::fmt;

use regex::Regex;
use taskdesk_shared::{AppError, Result};

/// A predicate paired with the message reported when it does not hold.
pub struct ValidationRule<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    message: String,
}

impl<T: ?Sized> ValidationRule<T> {
    pub fn new(
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ValidationRule<str> {
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(|v: &str| !v.trim().is_empty(), message)
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(move |v: &str| v.chars().count() >= min, message)
    }

    /// Like [`ValidationRule::min_length`] but ignores surrounding whitespace.
    pub fn trimmed_min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(move |v: &str| v.trim().chars().count() >= min, message)
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::new(move |v: &str| v.chars().count() <= max, message)
    }

    pub fn matches(pattern: &'static Regex, message: impl Into<String>) -> Self {
        Self::new(move |v: &str| pattern.is_match(v), message)
    }
}

impl<T: ?Sized> fmt::Debug for ValidationRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Evaluate `rules` in order; the first rule that does not hold is reported
/// against `field_name`.
pub fn validate<T: ?Sized>(
    value: &T,
    rules: &[ValidationRule<T>],
    field_name: &str,
) -> Result<()> {
    match rules.iter().find(|rule| !rule.check(value)) {
        Some(rule) => Err(AppError::validation(rule.message(), field_name)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EMAIL;

    fn username_rules() -> Vec<ValidationRule<str>> {
        vec![
            ValidationRule::required("Username is required"),
            ValidationRule::min_length(3, "Username is too short"),
            ValidationRule::new(
                |v: &str| v.chars().all(char::is_alphanumeric),
                "Letters and digits only",
            ),
        ]
    }

    #[test]
    fn passes_when_every_rule_holds() {
        assert!(validate("bob42", &username_rules(), "username").is_ok());
    }

    #[test]
    fn first_failing_rule_wins() {
        let err = validate("", &username_rules(), "username").unwrap_err();
        assert_eq!(err.message(), "Username is required");
        assert_eq!(err.field(), Some("username"));

        let err = validate("b!", &username_rules(), "username").unwrap_err();
        assert_eq!(err.message(), "Username is too short");

        let err = validate("bob!", &username_rules(), "username").unwrap_err();
        assert_eq!(err.message(), "Letters and digits only");
    }

    #[test]
    fn rules_over_sized_values() {
        let rules = vec![ValidationRule::new(|id: &i64| *id >= 1, "Invalid user ID")];

        assert!(validate(&3, &rules, "userId").is_ok());
        let err = validate(&0, &rules, "userId").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn pattern_and_length_rules() {
        let rules = vec![
            ValidationRule::matches(&EMAIL, "Invalid email address"),
            ValidationRule::max_length(12, "Email is too long"),
        ];

        assert!(validate("a@b.co", &rules, "email").is_ok());
        assert_eq!(
            validate("nope", &rules, "email").unwrap_err().message(),
            "Invalid email address"
        );
        assert_eq!(
            validate("long@domain.com", &rules, "email").unwrap_err().message(),
            "Email is too long"
        );
    }

    #[test]
    fn trimmed_length_ignores_padding() {
        let rule = ValidationRule::trimmed_min_length(2, "too short");
        assert!(!rule.check("  a  "));
        assert!(rule.check(" ab "));
    }
}
