//! Rusty-Auth WASM
//!
//! WebAssembly bindings for the login and signup forms. The page script
//! forwards DOM events (`input`, `submit`, clicks on elements carrying
//! `data-action`) to a `LoginPage` / `SignupPage` and re-renders from
//! `render()` afterwards. Navigation goes straight to `window.location`.

use rusty_auth::config::RoutesConfig;
use rusty_auth::{
    render_page, AuthForm, Config, Destination, FormError, FormKind, LoginForm, Navigator,
    SignupForm, SocialProvider,
};
use rusty_auth_validation::{LoginFields, SignupFields, Validate, ValidationErrors};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Navigator that performs full-page loads through `window.location`
///
/// A rejected `location.href` assignment is logged to the console and
/// through `tracing`, then remembered in `failed`. The form that asked for
/// the navigation is already terminal and stays so; the page script reads
/// `navigationFailed` to offer the user a plain link instead.
pub struct BrowserNavigator {
    routes: RoutesConfig,
    failed: bool,
}

impl BrowserNavigator {
    pub fn new(routes: RoutesConfig) -> Self {
        Self { routes, failed: false }
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, destination: Destination) {
        let href = destination.href(&self.routes);
        let Some(window) = web_sys::window() else {
            tracing::warn!(%href, "no window to navigate");
            self.failed = true;
            return;
        };

        if let Err(err) = window.location().set_href(&href) {
            tracing::error!(%href, ?err, "navigation failed");
            web_sys::console::error_2(&JsValue::from_str("navigation failed"), &err);
            self.failed = true;
        }
    }
}

fn to_js(err: FormError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Outcome of a submission as JavaScript sees it: the error list, empty when accepted
fn submission_errors<K, N>(
    form: &mut AuthForm<K>,
    navigator: &mut N,
) -> Result<ValidationErrors, FormError>
where
    K: FormKind,
    N: Navigator + ?Sized,
{
    match form.submit(navigator) {
        Ok(()) => Ok(ValidationErrors::new()),
        Err(FormError::ValidationFailure(errors)) => Ok(errors),
        Err(err) => Err(err),
    }
}

/// Social redirect keyed by the provider name written on the button
fn social_by_name<K, N>(
    form: &mut AuthForm<K>,
    provider: &str,
    navigator: &mut N,
) -> Result<(), FormError>
where
    K: FormKind,
    N: Navigator + ?Sized,
{
    let provider: SocialProvider = provider.parse()?;
    form.social_redirect(provider, navigator);
    Ok(())
}

macro_rules! form_page {
    ($(#[$meta:meta])* $page:ident, $form:ty) => {
        $(#[$meta])*
        #[wasm_bindgen]
        pub struct $page {
            form: $form,
            config: Config,
            navigator: BrowserNavigator,
        }

        #[wasm_bindgen]
        impl $page {
            #[wasm_bindgen(constructor)]
            pub fn new() -> Self {
                Self::with_config(Config::default())
            }

            /// Build from a TOML configuration string
            #[wasm_bindgen(js_name = fromToml)]
            pub fn from_toml(source: &str) -> Result<$page, JsValue> {
                Ok(Self::with_config(toml_config(source)?))
            }

            #[wasm_bindgen(js_name = setField)]
            pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
                self.form.set_field_by_name(name, value).map_err(to_js)
            }

            /// Returns the list of errors; an empty list means the page is navigating away
            pub fn submit(&mut self) -> Result<JsValue, JsValue> {
                let errors = submission_errors(&mut self.form, &mut self.navigator).map_err(to_js)?;
                Ok(serde_wasm_bindgen::to_value(&errors)?)
            }

            #[wasm_bindgen(js_name = dismissError)]
            pub fn dismiss_error(&mut self) {
                self.form.dismiss_error();
            }

            #[wasm_bindgen(js_name = togglePasswordVisibility)]
            pub fn toggle_password_visibility(&mut self) {
                self.form.toggle_password_visibility();
            }

            /// Provider name as written on the button: "Google", "Facebook" or "Apple"
            pub fn social(&mut self, provider: &str) -> Result<(), JsValue> {
                social_by_name(&mut self.form, provider, &mut self.navigator).map_err(to_js)
            }

            #[wasm_bindgen(js_name = followLink)]
            pub fn follow_link(&mut self) {
                self.form.follow_link(&mut self.navigator);
            }

            #[wasm_bindgen(getter, js_name = errorPopupOpen)]
            pub fn error_popup_open(&self) -> bool {
                self.form.state().error_popup_open()
            }

            #[wasm_bindgen(getter, js_name = passwordVisible)]
            pub fn password_visible(&self) -> bool {
                self.form.state().password_visible()
            }

            /// The form is done: submitted or redirected
            #[wasm_bindgen(getter)]
            pub fn finished(&self) -> bool {
                self.form.is_finished()
            }

            /// Set once the browser refused a navigation this page asked for
            #[wasm_bindgen(getter, js_name = navigationFailed)]
            pub fn navigation_failed(&self) -> bool {
                self.navigator.failed()
            }

            pub fn render(&self) -> String {
                render_page(&self.form, &self.config).into_string()
            }
        }

        impl $page {
            fn with_config(config: Config) -> Self {
                Self {
                    form: <$form>::new(),
                    navigator: BrowserNavigator::new(config.routes.clone()),
                    config,
                }
            }
        }

        impl Default for $page {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

form_page!(
    /// Login form bound to the browser
    LoginPage,
    LoginForm
);

form_page!(
    /// Signup form bound to the browser
    SignupPage,
    SignupForm
);

fn toml_config(source: &str) -> Result<Config, JsValue> {
    Config::from_toml_str(source)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

/// Validate a login object `{ email, password }` without a form instance
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateLogin({ email: 'a@b.com', password: 'Abcdef1!' });
/// ```
#[wasm_bindgen(js_name = validateLogin)]
pub fn validate_login(fields: JsValue) -> Result<JsValue, JsValue> {
    let fields: LoginFields = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?;
    let errors = fields.validate().err().unwrap_or_default();
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Validate a signup object (camelCase keys) without a form instance
#[wasm_bindgen(js_name = validateSignup)]
pub fn validate_signup(fields: JsValue) -> Result<JsValue, JsValue> {
    let fields: SignupFields = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?;
    let errors = fields.validate().err().unwrap_or_default();
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    rusty_auth_validation::is_valid_email(email)
}

/// Quick password validation
#[wasm_bindgen(js_name = isStrongPassword)]
pub fn is_strong_password_js(password: &str) -> bool {
    rusty_auth_validation::is_strong_password(password)
}

/// Quick mobile number validation
#[wasm_bindgen(js_name = isValidMobile)]
pub fn is_valid_mobile_js(mobile: &str) -> bool {
    rusty_auth_validation::is_valid_mobile(mobile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rusty_auth::{Field, HistoryNavigator, Phase};

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("invalid-email"));
    }

    #[test]
    fn test_password_validation() {
        assert!(is_strong_password_js("Abcdef1!"));
        assert!(!is_strong_password_js("abcdefgh"));
    }

    #[test]
    fn test_mobile_validation() {
        assert!(is_valid_mobile_js("1234567890"));
        assert!(!is_valid_mobile_js("12345"));
    }

    #[test]
    fn test_accepted_submission_has_no_errors() {
        let mut navigator = HistoryNavigator::default();
        let mut form = LoginForm::new();
        form.set_field_by_name("email", "a@b.com").unwrap();
        form.set_field_by_name("password", "Abcdef1!").unwrap();

        let errors = submission_errors(&mut form, &mut navigator).unwrap();

        assert!(errors.is_empty());
        assert_eq!(navigator.visited(), &["/product-catalog".to_string()]);
        assert_eq!(form.phase(), Phase::Submitted);
    }

    #[test]
    fn test_rejected_submission_lists_errors_in_order() {
        let mut navigator = HistoryNavigator::default();
        let mut form = SignupForm::new();
        form.set_field_by_name("name", "Ada").unwrap();
        form.set_field_by_name("mobile", "12").unwrap();

        let errors = submission_errors(&mut form, &mut navigator).unwrap();

        let failed: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            failed,
            vec![
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::Gender,
                Field::Mobile,
            ]
        );
        assert!(navigator.visited().is_empty());
        assert!(form.state().error_popup_open());
    }

    #[test]
    fn test_social_needs_button_spelling() {
        let mut navigator = HistoryNavigator::default();
        let mut form = LoginForm::new();

        let err = social_by_name(&mut form, "google", &mut navigator).unwrap_err();
        assert_eq!(err, FormError::UnknownProvider("google".to_string()));
        assert!(navigator.visited().is_empty());
        assert_eq!(form.phase(), Phase::Editing);

        social_by_name(&mut form, "Google", &mut navigator).unwrap();
        assert_eq!(navigator.last(), Some("https://accounts.google.com/signup"));
        assert_eq!(form.phase(), Phase::Redirected);
    }

    #[test]
    fn test_set_field_rejects_fields_of_the_other_form() {
        let mut form = LoginForm::new();
        let err = form.set_field_by_name("mobile", "1234567890").unwrap_err();
        assert!(matches!(err, FormError::UnknownField { form: "login", .. }));
        assert_eq!(form.state().value(Field::Mobile), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_page_starts_blank() {
        let page = LoginPage::new();
        assert!(!page.error_popup_open());
        assert!(!page.password_visible());
        assert!(!page.finished());
        assert!(page.render().contains("Login"));
    }

    #[wasm_bindgen_test]
    fn test_set_field_rejects_unknown_name() {
        let mut page = SignupPage::new();
        assert!(page.set_field("username", "ada").is_err());
        assert!(page.set_field("confirmPassword", "Abcdef1!").is_ok());
    }

    #[wasm_bindgen_test]
    fn test_invalid_submit_opens_popup_until_dismissed() {
        let mut page = SignupPage::new();
        let errors = page.submit().unwrap();
        let errors: ValidationErrors = serde_wasm_bindgen::from_value(errors).unwrap();

        assert_eq!(errors.len(), 6);
        assert!(page.error_popup_open());
        assert!(!page.finished());

        page.dismiss_error();
        assert!(!page.error_popup_open());
    }

    #[wasm_bindgen_test]
    fn test_unknown_provider_is_rejected() {
        let mut page = LoginPage::new();
        assert!(page.social("Twitter").is_err());
        assert!(!page.finished());
        assert!(!page.navigation_failed());
    }

    // Runs under Node, where there is no window to navigate
    #[wasm_bindgen_test]
    fn test_failed_navigation_leaves_form_finished() {
        let mut page = LoginPage::new();
        page.set_field("email", "a@b.com").unwrap();
        page.set_field("password", "Abcdef1!").unwrap();

        let errors = page.submit().unwrap();
        let errors: ValidationErrors = serde_wasm_bindgen::from_value(errors).unwrap();

        assert!(errors.is_empty());
        assert!(page.finished());
        assert!(page.navigation_failed());
        assert!(!page.render().contains("a@b.com"));
    }

    #[wasm_bindgen_test]
    fn test_toggle_password_visibility() {
        let mut page = LoginPage::new();
        page.toggle_password_visibility();
        assert!(page.password_visible());
    }
}
