// File: src/navigation.rs
// Purpose: Navigation targets and the host-provided navigator

use crate::config::RoutesConfig;
use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application routes the forms can lead to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Signup,
    /// Product catalog, reached after a successful submission
    Catalog,
}

/// Third-party identity providers with a sign-up page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialProvider {
    Google,
    Facebook,
    Apple,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 3] = [
        SocialProvider::Google,
        SocialProvider::Facebook,
        SocialProvider::Apple,
    ];

    /// Fixed external sign-up page
    pub fn url(self) -> &'static str {
        match self {
            SocialProvider::Google => "https://accounts.google.com/signup",
            SocialProvider::Facebook => "https://www.facebook.com/r.php",
            SocialProvider::Apple => "https://appleid.apple.com/account#!&page=create",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
            SocialProvider::Apple => "Apple",
        }
    }

    /// CSS class of the provider's button
    pub fn button_class(self) -> &'static str {
        match self {
            SocialProvider::Google => "google-button",
            SocialProvider::Facebook => "facebook-button",
            SocialProvider::Apple => "apple-button",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SocialProvider {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Google" => Ok(SocialProvider::Google),
            "Facebook" => Ok(SocialProvider::Facebook),
            "Apple" => Ok(SocialProvider::Apple),
            other => Err(FormError::UnknownProvider(other.to_string())),
        }
    }
}

/// Where a navigation request points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// In-app route, resolved through the configured paths
    Route(Route),
    /// Full-page navigation to a provider's sign-up page
    External(SocialProvider),
}

impl Destination {
    /// Resolve to the href the browser should load
    pub fn href(self, routes: &RoutesConfig) -> String {
        match self {
            Destination::Route(route) => routes.path(route).to_string(),
            Destination::External(provider) => provider.url().to_string(),
        }
    }
}

/// Sink for navigation requests, provided by the host environment
///
/// Navigation is one-way: once a form has asked to navigate it does not
/// expect control back.
pub trait Navigator {
    fn navigate(&mut self, destination: Destination);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, destination: Destination) {
        (**self).navigate(destination)
    }
}

/// In-memory navigator that records every resolved href
///
/// Used by native hosts and tests in place of a browser.
#[derive(Debug, Clone, Default)]
pub struct HistoryNavigator {
    routes: RoutesConfig,
    visited: Vec<String>,
}

impl HistoryNavigator {
    pub fn new(routes: RoutesConfig) -> Self {
        Self {
            routes,
            visited: Vec::new(),
        }
    }

    /// Every href navigated to, oldest first
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(|s| s.as_str())
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, destination: Destination) {
        let href = destination.href(&self.routes);
        tracing::debug!(%href, "navigating");
        self.visited.push(href);
    }
}
