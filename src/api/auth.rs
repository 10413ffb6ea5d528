//! Authentication endpoints.

use super::ApiClient;
use crate::errors::ClientResult;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

impl ApiClient {
    /// POST /auth/register - Create an account and sign in.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self
            .send(self.post("/auth/register").json(request))
            .await?;
        self.remember_token(&response)?;
        Ok(response)
    }

    /// POST /auth/login - Sign in with email and password.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self.send(self.post("/auth/login").json(request)).await?;
        self.remember_token(&response)?;
        Ok(response)
    }

    /// Sign out locally. The service keeps no session to tear down.
    pub fn logout(&self) -> ClientResult<()> {
        self.session.sign_out()
    }

    fn remember_token(&self, response: &AuthResponse) -> ClientResult<()> {
        match response.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => {
                self.session.store_credential(token)?;
                tracing::info!("Signed in");
            }
            None => tracing::warn!("Authentication response carried no token"),
        }
        Ok(())
    }
}
