//! Route gating.
//!
//! Every route but `login` needs a signed-in user; `admin` also needs the
//! administrator role.

use crate::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Lost,
    Found,
    Search,
    MyItems,
    Admin,
}

impl Route {
    /// Landing route after sign-in.
    pub const INDEX: Route = Route::Lost;

    /// Routes offered in the navigation menu, in display order.
    pub const MENU: [Route; 5] = [
        Route::Lost,
        Route::Found,
        Route::Search,
        Route::MyItems,
        Route::Admin,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Lost => "/lost",
            Route::Found => "/found",
            Route::Search => "/search",
            Route::MyItems => "/retrievals",
            Route::Admin => "/admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Lost => "Report Lost",
            Route::Found => "Report Found",
            Route::Search => "Search Items",
            Route::MyItems => "My Items",
            Route::Admin => "Admin",
        }
    }
}

/// Outcome of visiting a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// Decide whether `route` may be shown for the current session.
pub fn resolve(route: Route, session: &SessionContext) -> Navigation {
    let current = session.current_session();

    match (route, current) {
        (Route::Login, Some(_)) => Navigation::Redirect(Route::INDEX),
        (Route::Login, None) => Navigation::Render(Route::Login),
        (_, None) => Navigation::Redirect(Route::Login),
        (Route::Admin, Some(s)) if !s.is_admin() => Navigation::Redirect(Route::INDEX),
        (route, Some(_)) => Navigation::Render(route),
    }
}

/// Navigation entries for the current session. `Admin` is hidden from
/// everyone but administrators.
pub fn menu(session: &SessionContext) -> Vec<Route> {
    if !session.is_authenticated() {
        return vec![Route::Login];
    }
    let is_admin = session.is_admin();
    Route::MENU
        .iter()
        .copied()
        .filter(|r| *r != Route::Admin || is_admin)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::test_support::{fixture_clock, token_expiring_in};
    use crate::storage::{CredentialStore, MemoryStore, TOKEN_KEY};

    fn session_with(token: Option<String>) -> SessionContext {
        let store = Arc::new(MemoryStore::new());
        if let Some(token) = token {
            store.set(TOKEN_KEY, &token).unwrap();
        }
        SessionContext::new(store, fixture_clock())
    }

    #[test]
    fn test_signed_out_redirects_to_login() {
        let session = session_with(None);
        assert_eq!(resolve(Route::Search, &session), Navigation::Redirect(Route::Login));
        assert_eq!(resolve(Route::Login, &session), Navigation::Render(Route::Login));
        assert_eq!(menu(&session), vec![Route::Login]);
    }

    #[test]
    fn test_signed_in_skips_login() {
        let session = session_with(Some(token_expiring_in("student", 600)));
        assert_eq!(resolve(Route::Login, &session), Navigation::Redirect(Route::Lost));
        assert_eq!(resolve(Route::MyItems, &session), Navigation::Render(Route::MyItems));
    }

    #[test]
    fn test_admin_route_needs_admin_role() {
        let student = session_with(Some(token_expiring_in("student", 600)));
        assert_eq!(resolve(Route::Admin, &student), Navigation::Redirect(Route::Lost));
        assert!(!menu(&student).contains(&Route::Admin));

        let admin = session_with(Some(token_expiring_in("admin", 600)));
        assert_eq!(resolve(Route::Admin, &admin), Navigation::Render(Route::Admin));
        assert_eq!(menu(&admin).len(), 5);
    }

    #[test]
    fn test_expired_admin_is_signed_out() {
        let session = session_with(Some(token_expiring_in("admin", -30)));
        assert_eq!(resolve(Route::Admin, &session), Navigation::Redirect(Route::Login));
    }
}
