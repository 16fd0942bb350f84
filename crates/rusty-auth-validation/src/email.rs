//! Email validation functions

use crate::string::FORM_WHITESPACE_CLASS;
use once_cell::sync::Lazy;
use regex::Regex;

// local-part "@" domain "." tld, no whitespace, no second '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let segment = format!("[^@{}]+", FORM_WHITESPACE_CLASS);
    Regex::new(&format!(r"^{segment}@{segment}\.{segment}$")).expect("email pattern is valid")
});

/// Validates email format
///
/// Accepts `local@domain.tld` where each segment has at least one character
/// and none contains whitespace or another `@`. The domain may itself
/// contain dots (`user@mail.example.co.uk`).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
