//! # rusty-auth
//!
//! Login and signup forms as plain state machines. Each form owns its field
//! values, validates only when submitted, shows every violated rule in an
//! error popup, and hands navigation requests to a host-provided
//! [`Navigator`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_auth::{Field, HistoryNavigator, LoginForm};
//!
//! let mut navigator = HistoryNavigator::default();
//! let mut form = LoginForm::new();
//!
//! form.set_field(Field::Email, "a@b.com").unwrap();
//! form.set_field(Field::Password, "Abcdef1!").unwrap();
//! form.submit(&mut navigator).unwrap();
//!
//! assert_eq!(navigator.last(), Some("/product-catalog"));
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod login;
pub mod navigation;
pub mod presenter;
pub mod signup;
pub mod state;
pub mod view;

// Re-export Maud for hosts embedding the markup
pub use maud::Markup;

// Re-export validation types used in the form API
pub use rusty_auth_validation::{Field, FieldError, Gender, Validate, ValidationErrors};

pub use config::Config;
pub use error::FormError;
pub use form::{AuthForm, FormEvent, FormKind};
pub use login::{Login, LoginForm};
pub use navigation::{Destination, HistoryNavigator, Navigator, Route, SocialProvider};
pub use presenter::ErrorPresenter;
pub use signup::{Signup, SignupForm};
pub use state::{FormState, Phase};
pub use view::render_page;
