// File: src/form.rs
// Purpose: Event-driven engine shared by the login and signup forms

use crate::error::FormError;
use crate::navigation::{Destination, Navigator, Route, SocialProvider};
use crate::state::{FormState, Phase};
use rusty_auth_validation::{Field, Validate};
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// What distinguishes one form from the other
pub trait FormKind {
    /// Field set the validator runs over
    type Fields: Validate;

    /// Short name used in logs and errors
    const NAME: &'static str;
    /// Fields in display order
    const FIELDS: &'static [Field];
    /// Label of the submit button, also the verb of the social buttons
    const ACTION_LABEL: &'static str;
    /// Label of the password input
    const PASSWORD_LABEL: &'static str;
    /// Label of the popup's dismiss button
    const DISMISS_LABEL: &'static str;
    /// Route of the other form
    const LINK_ROUTE: Route;
    const LINK_PROMPT: &'static str;
    const LINK_TEXT: &'static str;

    /// Snapshot the current values for validation
    fn fields(state: &FormState) -> Self::Fields;
}

/// Discrete user events a form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: Field, value: String },
    Submit,
    DismissError,
    TogglePasswordVisibility,
    Social(SocialProvider),
    FollowLink,
}

/// A form instance: owned state plus its phase
#[derive(Debug, Clone)]
pub struct AuthForm<K> {
    state: FormState,
    phase: Phase,
    _kind: PhantomData<K>,
}

impl<K: FormKind> Default for AuthForm<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FormKind> AuthForm<K> {
    /// Fresh form: every field empty, popup closed, password hidden
    pub fn new() -> Self {
        Self {
            state: FormState::new(K::FIELDS),
            phase: Phase::Editing,
            _kind: PhantomData,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Submitted or redirected: the form has asked to be left
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Dispatch one event
    pub fn handle<N>(&mut self, event: FormEvent, navigator: &mut N) -> Result<(), FormError>
    where
        N: Navigator + ?Sized,
    {
        match event {
            FormEvent::Input { field, value } => self.set_field(field, value),
            FormEvent::Submit => self.submit(navigator),
            FormEvent::DismissError => {
                self.dismiss_error();
                Ok(())
            }
            FormEvent::TogglePasswordVisibility => {
                self.toggle_password_visibility();
                Ok(())
            }
            FormEvent::Social(provider) => {
                self.social_redirect(provider, navigator);
                Ok(())
            }
            FormEvent::FollowLink => {
                self.follow_link(navigator);
                Ok(())
            }
        }
    }

    /// Update one field; no validation runs and the popup stays as it is
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if self.ignored("input") {
            return Ok(());
        }

        if !self.state.set(field, value.into()) {
            return Err(FormError::UnknownField {
                form: K::NAME,
                field: field.name().to_string(),
            });
        }

        debug!(form = K::NAME, %field, "field changed");
        Ok(())
    }

    /// String-keyed variant of [`AuthForm::set_field`] for markup-driven hosts
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = name.parse::<Field>().map_err(|_| FormError::UnknownField {
            form: K::NAME,
            field: name.to_string(),
        })?;
        self.set_field(field, value)
    }

    /// Validate the current values
    ///
    /// On success every field is cleared and the navigator is sent to the
    /// catalog; the form is then finished. On failure the errors are stored,
    /// the popup opens and the values are left untouched.
    pub fn submit<N>(&mut self, navigator: &mut N) -> Result<(), FormError>
    where
        N: Navigator + ?Sized,
    {
        if self.ignored("submit") {
            return Ok(());
        }

        match K::fields(&self.state).validate() {
            Ok(()) => {
                info!(form = K::NAME, "submission accepted");
                self.state.clear_values();
                self.state.close_popup();
                self.phase = Phase::Submitted;
                navigator.navigate(Destination::Route(Route::Catalog));
                Ok(())
            }
            Err(errors) => {
                debug!(form = K::NAME, count = errors.len(), "submission rejected");
                self.state.open_popup(errors.clone());
                self.phase = Phase::ErrorShown;
                Err(FormError::ValidationFailure(errors))
            }
        }
    }

    /// Close the popup; field values are kept
    pub fn dismiss_error(&mut self) {
        if self.ignored("dismiss") || self.phase != Phase::ErrorShown {
            return;
        }

        self.state.close_popup();
        self.phase = Phase::Editing;
    }

    pub fn toggle_password_visibility(&mut self) {
        if self.ignored("toggle") {
            return;
        }

        self.state.toggle_password_visibility();
    }

    /// Leave for a provider's sign-up page, whatever the form holds
    ///
    /// Field values and the popup are left as they are; the form is finished.
    pub fn social_redirect<N>(&mut self, provider: SocialProvider, navigator: &mut N)
    where
        N: Navigator + ?Sized,
    {
        if self.ignored("social redirect") {
            return;
        }

        info!(form = K::NAME, %provider, "redirecting to provider");
        self.phase = Phase::Redirected;
        navigator.navigate(Destination::External(provider));
    }

    /// Go to the other form
    pub fn follow_link<N>(&mut self, navigator: &mut N)
    where
        N: Navigator + ?Sized,
    {
        if self.ignored("link") {
            return;
        }

        self.phase = Phase::Redirected;
        navigator.navigate(Destination::Route(K::LINK_ROUTE));
    }

    fn ignored(&self, action: &str) -> bool {
        if self.is_finished() {
            warn!(form = K::NAME, action, phase = ?self.phase, "event after navigation ignored");
            return true;
        }
        false
    }
}
