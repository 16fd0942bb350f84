//! Password validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of characters in a password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols of which a password needs at least one
pub const SPECIAL_SYMBOLS: &str = "!@#$%^&*";

// Whole value on a single line, at least MIN_PASSWORD_LENGTH characters
static SINGLE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[^\n\r\x{{2028}}\x{{2029}}]{{{},}}$",
        MIN_PASSWORD_LENGTH
    ))
    .expect("length pattern is valid")
});
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));
static LOWER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("lowercase pattern is valid"));
static UPPER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern is valid"));

/// Strong password check
///
/// Passes when every requirement holds:
/// - at least 8 characters, none of them a line terminator
/// - at least one ASCII digit
/// - at least one of `!@#$%^&*`
/// - at least one ASCII lowercase letter
/// - at least one ASCII uppercase letter
pub fn is_strong_password(password: &str) -> bool {
    let checks = [
        SINGLE_LINE_REGEX.is_match(password),
        DIGIT_REGEX.is_match(password),
        password.chars().any(|c| SPECIAL_SYMBOLS.contains(c)),
        LOWER_REGEX.is_match(password),
        UPPER_REGEX.is_match(password),
    ];

    checks.iter().all(|passed| *passed)
}

/// Confirmation matches when it is non-empty and byte-for-byte equal
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && password == confirm
}
