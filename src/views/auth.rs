//! Sign-in, sign-up and session screens.

use super::routes::{menu, Route};
use super::{Banner, Screen};
use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::forms::{LoginForm, SignupForm};
use crate::session::SessionContext;

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
const SIGNUP_FAILED: &str = "Signup failed. Email may already be registered.";

/// Sign in and land on the index route.
pub async fn login(client: &ApiClient, form: &LoginForm) -> Screen {
    let screen = Screen::new("Sign In");

    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            return screen.with_banner(Banner::Error(ClientError::Validation(errors).message()))
        }
    };

    match client.login(&request).await {
        Ok(_) if client.session().is_authenticated() => signed_in(client.session()),
        Ok(response) => screen.with_banner(Banner::Error(
            response.message.unwrap_or_else(|| LOGIN_FAILED.to_string()),
        )),
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            screen.with_banner(Banner::Error(e.banner_message(LOGIN_FAILED)))
        }
    }
}

/// Create an account; the service signs the new user in.
pub async fn signup(client: &ApiClient, form: &SignupForm) -> Screen {
    let screen = Screen::new("Sign Up");

    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            return screen.with_banner(Banner::Error(ClientError::Validation(errors).message()))
        }
    };

    match client.register(&request).await {
        Ok(_) if client.session().is_authenticated() => signed_in(client.session()),
        Ok(_) => screen.with_banner(Banner::Success(
            "Account created. Please sign in.".to_string(),
        )),
        Err(e) => {
            tracing::error!("Signup failed: {}", e);
            screen.with_banner(Banner::Error(e.banner_message(SIGNUP_FAILED)))
        }
    }
}

/// Sign out locally.
pub fn logout(client: &ApiClient) -> Screen {
    let screen = Screen::new("Sign Out");
    match client.logout() {
        Ok(()) => screen.with_banner(Banner::Success("Signed out.".to_string())),
        Err(e) => {
            tracing::error!("Sign-out failed: {}", e);
            screen.with_banner(Banner::Error(e.message()))
        }
    }
}

/// Who is signed in, and where they can go.
pub fn whoami(session: &SessionContext) -> Screen {
    let Some(current) = session.current_session() else {
        let mut screen = Screen::new("Session")
            .with_banner(Banner::Info("Not signed in.".to_string()));
        screen.push(format!("Go to {}", Route::Login.path()));
        return screen;
    };

    let mut screen = Screen::new("Session");
    screen.push(format!("Signed in as {}", current.display_name()));
    screen.push(format!("Role: {}", current.role.as_str()));
    match current.exp {
        Some(exp) => {
            if let Some(expires) = chrono::DateTime::from_timestamp(exp as i64, 0) {
                screen.push(format!("Expires: {}", expires.to_rfc3339()));
            }
        }
        None => screen.push("Expires: never"),
    }
    screen.extend(navigation_lines(session));
    screen
}

fn signed_in(session: &SessionContext) -> Screen {
    let name = session
        .current_session()
        .map(|s| s.display_name().to_string())
        .unwrap_or_default();
    let mut screen =
        Screen::new("Welcome").with_banner(Banner::Success(format!("Signed in as {}", name)));
    screen.extend(navigation_lines(session));
    screen
}

fn navigation_lines(session: &SessionContext) -> Vec<String> {
    menu(session)
        .into_iter()
        .map(|route| format!("  {:<14} {}", route.label(), route.path()))
        .collect()
}
