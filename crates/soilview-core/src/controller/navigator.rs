use serde::Serialize;

use crate::models::{Session, Variant, ViewState};

/// Why a navigation landed somewhere other than its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectReason {
    /// Protected view requested without a session
    Unauthenticated,
    /// View not part of the running variant
    UnknownRoute,
}

/// Outcome of one navigation action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Route name as asked for; may not name any view
    pub requested: String,
    pub resolved: ViewState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<RedirectReason>,
}

impl Navigation {
    pub fn redirected(&self) -> bool {
        self.redirect.is_some()
    }
}

/// Decide where a navigation lands without changing any state
pub fn resolve(variant: Variant, session: &Session, target: ViewState) -> Navigation {
    let redirect = if !variant.contains(target) {
        Some(RedirectReason::UnknownRoute)
    } else if !target.is_public() && !session.is_authenticated() {
        Some(RedirectReason::Unauthenticated)
    } else {
        None
    };

    Navigation {
        requested: target.route_name().to_string(),
        resolved: if redirect.is_some() { ViewState::Login } else { target },
        redirect,
    }
}

/// Resolve a raw route such as `/reports` or `settings`.
///
/// Routes that name no view fall through to login, whatever the session.
pub fn resolve_route(variant: Variant, session: &Session, route: &str) -> Navigation {
    match route.parse::<ViewState>() {
        Ok(target) => resolve(variant, session, target),
        Err(_) => Navigation {
            requested: route.trim().to_string(),
            resolved: ViewState::Login,
            redirect: Some(RedirectReason::UnknownRoute),
        },
    }
}

/// Holds the current view. No history is kept.
#[derive(Debug, Clone)]
pub struct Navigator {
    variant: Variant,
    current: ViewState,
}

impl Navigator {
    pub fn new(variant: Variant, session: &Session) -> Self {
        Self {
            variant,
            current: ViewState::initial(session),
        }
    }

    pub fn current(&self) -> ViewState {
        self.current
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn navigate(&mut self, session: &Session, target: ViewState) -> Navigation {
        self.commit(resolve(self.variant, session, target))
    }

    pub fn navigate_route(&mut self, session: &Session, route: &str) -> Navigation {
        self.commit(resolve_route(self.variant, session, route))
    }

    fn commit(&mut self, navigation: Navigation) -> Navigation {
        match navigation.redirect {
            Some(reason) => tracing::debug!(
                requested = %navigation.requested,
                reason = ?reason,
                "Redirecting to login"
            ),
            None => tracing::debug!(view = %navigation.resolved, "Navigating"),
        }

        self.current = navigation.resolved;
        navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_protected_view_redirects() {
        let nav = resolve(Variant::Dashboard, &Session::new(), ViewState::Reports);
        assert_eq!(nav.resolved, ViewState::Login);
        assert_eq!(nav.redirect, Some(RedirectReason::Unauthenticated));
    }

    #[test]
    fn test_public_views_always_reachable() {
        let nav = resolve(Variant::Basic, &Session::new(), ViewState::Signup);
        assert_eq!(nav.resolved, ViewState::Signup);
        assert!(!nav.redirected());
    }

    #[test]
    fn test_unknown_route_redirects_even_when_authenticated() {
        let nav = resolve(Variant::Basic, &Session::authenticated(), ViewState::Dashboard);
        assert_eq!(nav.resolved, ViewState::Login);
        assert_eq!(nav.redirect, Some(RedirectReason::UnknownRoute));
    }

    #[test]
    fn test_unparseable_routes_fall_through_to_login() {
        for route in ["settings", "/", "/reports/2024"] {
            let nav = resolve_route(Variant::Dashboard, &Session::authenticated(), route);
            assert_eq!(nav.resolved, ViewState::Login, "route {route}");
            assert_eq!(nav.redirect, Some(RedirectReason::UnknownRoute));
            assert_eq!(nav.requested, route);
        }
    }

    #[test]
    fn test_known_routes_resolve_like_views() {
        let nav = resolve_route(Variant::Dashboard, &Session::authenticated(), "/Reports");
        assert_eq!(nav.resolved, ViewState::Reports);
        assert_eq!(nav.requested, "reports");
        assert!(!nav.redirected());
    }

    #[test]
    fn test_navigate_route_moves_current_view() {
        let session = Session::authenticated();
        let mut navigator = Navigator::new(Variant::Dashboard, &session);

        let nav = navigator.navigate_route(&session, "settings");
        assert!(nav.redirected());
        assert_eq!(navigator.current(), ViewState::Login);
    }

    #[test]
    fn test_navigator_keeps_only_current_view() {
        let session = Session::authenticated();
        let mut navigator = Navigator::new(Variant::Portal, &session);
        assert_eq!(navigator.current(), ViewState::Home);

        navigator.navigate(&session, ViewState::Photos);
        navigator.navigate(&session, ViewState::Contact);
        assert_eq!(navigator.current(), ViewState::Contact);
    }
}
