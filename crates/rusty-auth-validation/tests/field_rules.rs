/// Validation passes over whole forms
///
/// Checks ordering, accumulation (no short-circuit) and the boundary values of
/// each rule through the public `Validate` entry points.
use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_auth_validation::{Field, LoginFields, SignupFields, Validate};

fn valid_signup() -> SignupFields {
    SignupFields {
        name: "Ada".to_string(),
        email: "a@b.com".to_string(),
        password: "Abcdef1!".to_string(),
        confirm_password: "Abcdef1!".to_string(),
        gender: "male".to_string(),
        mobile: "1234567890".to_string(),
    }
}

fn messages(fields: &impl Validate) -> Vec<String> {
    match fields.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => errors.messages().map(str::to_string).collect(),
    }
}

#[test]
fn test_blank_signup_yields_six_messages_in_order() {
    assert_eq!(
        messages(&SignupFields::default()),
        vec![
            "Please enter your name".to_string(),
            "Please enter a valid email address".to_string(),
            Field::Password.message().to_string(),
            "Passwords do not match".to_string(),
            "Please select your gender".to_string(),
            "Please enter a valid 10-digit mobile number".to_string(),
        ]
    );
}

#[test]
fn test_valid_signup_passes() {
    assert!(valid_signup().validate().is_ok());
}

#[test]
fn test_valid_login_passes() {
    let fields = LoginFields {
        email: "a@b.com".to_string(),
        password: "Abcdef1!".to_string(),
    };
    assert!(fields.validate().is_ok());
}

#[test]
fn test_validation_is_deterministic() {
    let mut fields = valid_signup();
    fields.email = "not-an-email".to_string();
    fields.mobile = "12".to_string();

    let first = fields.validate().unwrap_err();
    let second = fields.validate().unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[rstest]
#[case("abcdefgh", false)]
#[case("Abcdef1!", true)]
#[case("Abcdef1", false)]
#[case("ABCDEFG1!", false)]
fn test_password_rule(#[case] password: &str, #[case] passes: bool) {
    let fields = LoginFields {
        email: "a@b.com".to_string(),
        password: password.to_string(),
    };
    assert_eq!(fields.validate().is_ok(), passes);
}

#[rstest]
#[case("12345", false)]
#[case("1234567890", true)]
#[case("12345678901", false)]
fn test_mobile_rule(#[case] mobile: &str, #[case] passes: bool) {
    let mut fields = valid_signup();
    fields.mobile = mobile.to_string();
    assert_eq!(fields.validate().is_ok(), passes);
}

#[rstest]
#[case::mismatch("Abcdef1!", "Abcdef1?")]
#[case::blank_confirmation("Abcdef1!", "")]
#[case::case_differs("Abcdef1!", "abcdef1!")]
fn test_confirmation_rule(#[case] password: &str, #[case] confirm: &str) {
    let mut fields = valid_signup();
    fields.password = password.to_string();
    fields.confirm_password = confirm.to_string();

    let errors = fields.validate().unwrap_err();
    let failed: Vec<Field> = errors.iter().map(|e| e.field).collect();
    assert_eq!(failed, vec![Field::ConfirmPassword]);
}

#[test]
fn test_weak_matching_passwords_fail_once() {
    let mut fields = valid_signup();
    fields.password = "abcdefgh".to_string();
    fields.confirm_password = "abcdefgh".to_string();

    let errors = fields.validate().unwrap_err();
    let failed: Vec<Field> = errors.iter().map(|e| e.field).collect();
    assert_eq!(failed, vec![Field::Password]);
}

#[rstest]
#[case("")]
#[case("other")]
fn test_gender_rule(#[case] gender: &str) {
    let mut fields = valid_signup();
    fields.gender = gender.to_string();

    let errors = fields.validate().unwrap_err();
    assert!(errors.has_error(Field::Gender));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_whitespace_name_is_blank() {
    let mut fields = valid_signup();
    fields.name = "   ".to_string();

    let errors = fields.validate().unwrap_err();
    assert_eq!(
        errors.messages().collect::<Vec<_>>(),
        vec!["Please enter your name"]
    );
}

#[rstest]
#[case::byte_order_mark("\u{FEFF}")]
#[case::no_break_space("\u{A0}\u{A0}")]
fn test_browser_blank_name(#[case] name: &str) {
    let mut fields = valid_signup();
    fields.name = name.to_string();

    let errors = fields.validate().unwrap_err();
    assert!(errors.has_error(Field::Name));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_email_whitespace_matches_browser() {
    let mut fields = valid_signup();
    fields.email = "a\u{FEFF}@b.com".to_string();
    assert!(fields.validate().unwrap_err().has_error(Field::Email));

    fields.email = "a\u{85}b@c.com".to_string();
    assert!(fields.validate().is_ok());
}
