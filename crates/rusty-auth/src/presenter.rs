// File: src/presenter.rs
// Purpose: Error popup listing the errors of the last submission

use crate::config::PresenterConfig;
use crate::state::FormState;
use maud::{html, Markup};

/// Renders the error popup from a form's state
///
/// Holds no state of its own: whether anything is shown, and what, comes
/// entirely from the `FormState` passed in.
#[derive(Debug, Clone)]
pub struct ErrorPresenter {
    title: String,
}

impl Default for ErrorPresenter {
    fn default() -> Self {
        Self::new(&PresenterConfig::default())
    }
}

impl ErrorPresenter {
    pub fn new(config: &PresenterConfig) -> Self {
        Self {
            title: config.title.clone(),
        }
    }

    /// Popup markup, `None` while the popup is closed
    ///
    /// The dismiss button carries `data-action="dismiss-error"`; hosts wire
    /// it to the form's dismiss action.
    pub fn render(&self, state: &FormState, dismiss_label: &str) -> Option<Markup> {
        if !state.error_popup_open() {
            return None;
        }

        Some(html! {
            div.error-popup {
                div.error-popup-content {
                    h3 { (self.title) }
                    ul {
                        @for message in state.errors().messages() {
                            li { (message) }
                        }
                    }
                    button.error-popup-close type="button" data-action="dismiss-error" {
                        (dismiss_label)
                    }
                }
            }
        })
    }
}
