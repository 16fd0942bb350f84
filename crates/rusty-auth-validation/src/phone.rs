//! Phone number validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern is valid"));

/// Validates a mobile number: exactly ten ASCII digits, nothing else
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_REGEX.is_match(mobile)
}
