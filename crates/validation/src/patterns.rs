use std::sync::LazyLock;

use regex::Regex;

/// Shape-only email check: `local@domain.tld`, no whitespace, one `@`.
pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d\s\-\+\(\)]+$").unwrap());

/// Bare domain such as `example.com`; no scheme, path or subdomain.
pub static WEBSITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]?\.[a-zA-Z]{2,}$").unwrap()
});
