//! Route resolution and the navigation guard.

/// Client-visible routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public login screen.
    Login,
    /// Alias list, default landing after authentication.
    Aliases,
    /// Account profile.
    Account,
}

impl Route {
    /// Returns whether the route requires a session.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Aliases | Self::Account)
    }
}

/// Resolves a requested route against the session state.
///
/// Pure guard: protected routes require a token, otherwise the request
/// redirects to the login screen.
#[must_use]
pub const fn resolve(requested: Route, authenticated: bool) -> Route {
    if requested.is_protected() && !authenticated {
        Route::Login
    } else {
        requested
    }
}

/// Returns the landing route for the given session state.
#[must_use]
pub const fn landing(authenticated: bool) -> Route {
    if authenticated {
        Route::Aliases
    } else {
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Route::Aliases)]
    #[test_case(Route::Account)]
    fn test_protected_routes_redirect_without_session(route: Route) {
        assert_eq!(resolve(route, false), Route::Login);
    }

    #[test_case(Route::Login)]
    #[test_case(Route::Aliases)]
    #[test_case(Route::Account)]
    fn test_all_routes_pass_with_session(route: Route) {
        assert_eq!(resolve(route, true), route);
    }

    #[test]
    fn test_login_is_public() {
        assert_eq!(resolve(Route::Login, false), Route::Login);
    }

    #[test]
    fn test_landing_route() {
        assert_eq!(landing(true), Route::Aliases);
        assert_eq!(landing(false), Route::Login);
    }
}
