use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Session;
use crate::error::{Result, SoilviewError};

/// The single panel currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    Login,
    Signup,
    Home,
    Dashboard,
    Photos,
    Analysis,
    Reports,
    Profile,
    Contact,
}

impl ViewState {
    pub const ALL: [ViewState; 9] = [
        ViewState::Login,
        ViewState::Signup,
        ViewState::Home,
        ViewState::Dashboard,
        ViewState::Photos,
        ViewState::Analysis,
        ViewState::Reports,
        ViewState::Profile,
        ViewState::Contact,
    ];

    /// Starting view for a session
    pub fn initial(session: &Session) -> Self {
        if session.is_authenticated() {
            ViewState::Home
        } else {
            ViewState::Login
        }
    }

    /// Views reachable without logging in
    pub fn is_public(&self) -> bool {
        matches!(self, ViewState::Login | ViewState::Signup)
    }

    /// Lowercase route name, e.g. `reports`
    pub fn route_name(&self) -> &'static str {
        match self {
            ViewState::Login => "login",
            ViewState::Signup => "signup",
            ViewState::Home => "home",
            ViewState::Dashboard => "dashboard",
            ViewState::Photos => "photos",
            ViewState::Analysis => "analysis",
            ViewState::Reports => "reports",
            ViewState::Profile => "profile",
            ViewState::Contact => "contact",
        }
    }

    /// Navigation label
    pub fn title(&self) -> &'static str {
        match self {
            ViewState::Login => "Login",
            ViewState::Signup => "Sign Up",
            ViewState::Home => "Home",
            ViewState::Dashboard => "Dashboard",
            ViewState::Photos => "Photos",
            ViewState::Analysis => "Analysis",
            ViewState::Reports => "Reports",
            ViewState::Profile => "Profile",
            ViewState::Contact => "Contact",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

impl FromStr for ViewState {
    type Err = SoilviewError;

    /// Accepts `reports`, `/reports` and any casing
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('/').to_lowercase();
        ViewState::ALL
            .iter()
            .copied()
            .find(|view| view.route_name() == name)
            .ok_or_else(|| SoilviewError::UnknownView { name: s.to_string() })
    }
}

/// Which of the three mockups is running. They disagree on view membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Router mockup: login, signup and a single home page
    Basic,
    /// Navigation bar mockup without the chart
    Portal,
    /// Tabbed mockup with the nutrient chart
    #[default]
    Dashboard,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Basic, Variant::Portal, Variant::Dashboard];

    /// Views this variant can render, in navigation order
    pub fn views(&self) -> &'static [ViewState] {
        match self {
            Variant::Basic => &[ViewState::Login, ViewState::Signup, ViewState::Home],
            Variant::Portal => &[
                ViewState::Login,
                ViewState::Signup,
                ViewState::Home,
                ViewState::Photos,
                ViewState::Analysis,
                ViewState::Reports,
                ViewState::Profile,
                ViewState::Contact,
            ],
            Variant::Dashboard => &ViewState::ALL,
        }
    }

    pub fn contains(&self, view: ViewState) -> bool {
        self.views().contains(&view)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Portal => "portal",
            Variant::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SoilviewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Variant::Basic),
            "portal" => Ok(Variant::Portal),
            "dashboard" => Ok(Variant::Dashboard),
            _ => Err(SoilviewError::UnknownVariant { name: s.to_string() }),
        }
    }
}
