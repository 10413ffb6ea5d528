//! Session derivation from the stored bearer credential.
//!
//! The credential is a JWT-shaped token issued by the service. The client never
//! verifies the signature; it only reads the payload to learn who is signed in,
//! what role they hold and when the credential expires. Everything here is
//! synchronous and network-free.

use std::sync::Arc;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use mockable::Clock;
use serde_json::{Map, Value};

use crate::errors::ClientError;
use crate::models::Role;
use crate::storage::{CredentialStore, TOKEN_KEY};

/// Standard alphabet, padding optional. URL-safe input is translated first.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Claims of a decoded credential.
///
/// Fields are read leniently: a claim of an unexpected JSON type is treated as
/// absent rather than spoiling the whole credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Subject: the user id
    pub sub: Option<String>,
    pub role: Role,
    /// Expiration instant in seconds since the epoch. A credential without one
    /// never expires on the client.
    pub exp: Option<f64>,
    pub iat: Option<f64>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Every claim as sent
    pub claims: Map<String, Value>,
}

impl Session {
    pub fn from_claims(claims: Map<String, Value>) -> Self {
        let text = |key: &str| claims.get(key).and_then(Value::as_str).map(str::to_string);
        let number = |key: &str| claims.get(key).and_then(Value::as_f64);

        let role = match claims.get("role").and_then(Value::as_str) {
            Some("admin") => Role::Admin,
            Some("student") => Role::Student,
            _ => Role::Unknown,
        };

        Self {
            sub: text("sub"),
            role,
            exp: number("exp"),
            iat: number("iat"),
            name: text("name"),
            email: text("email"),
            claims,
        }
    }

    /// Expired when `exp * 1000 < now_millis`.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        self.exp.is_some_and(|exp| exp * 1000.0 < now_millis as f64)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Best human-readable label for the signed-in user.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .or(self.sub.as_deref())
            .unwrap_or("unknown user")
    }
}

/// Decode the payload segment of a credential.
///
/// Returns `None` for anything that is not a three-segment token whose middle
/// segment is base64 (either alphabet) of a UTF-8 JSON object.
pub fn decode_token(raw: &str) -> Option<Session> {
    let segments: Vec<&str> = raw.trim().split('.').collect();
    if segments.len() != 3 {
        tracing::debug!("Credential has {} segments, expected 3", segments.len());
        return None;
    }

    let json = match decode_segment(segments[1]) {
        Ok(json) => json,
        Err(reason) => {
            tracing::debug!("Error decoding credential payload: {}", reason);
            return None;
        }
    };

    match serde_json::from_str::<Value>(&json) {
        Ok(Value::Object(claims)) => Some(Session::from_claims(claims)),
        Ok(other) => {
            tracing::debug!("Credential payload is not an object: {}", other);
            None
        }
        Err(e) => {
            tracing::debug!("Error parsing credential payload: {}", e);
            None
        }
    }
}

/// Base64 to UTF-8 text, going through percent-escapes so multi-byte
/// sequences are reassembled rather than read byte-by-byte.
fn decode_segment(segment: &str) -> Result<String, String> {
    let standard: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = PAYLOAD_ENGINE
        .decode(standard.as_bytes())
        .map_err(|e| format!("invalid base64: {}", e))?;

    let escaped: String = bytes.iter().map(|b| format!("%{:02x}", b)).collect();

    urlencoding::decode(&escaped)
        .map(|text| text.into_owned())
        .map_err(|e| format!("invalid UTF-8: {}", e))
}

/// Explicit session context handed to everything that needs to know who is
/// signed in. Holds the credential store and the clock used for expiration.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn CredentialStore>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { store, clock }
    }

    fn now_millis(&self) -> i64 {
        self.clock.utc().timestamp_millis()
    }

    /// Persist a freshly issued credential, replacing any previous one.
    pub fn store_credential(&self, token: &str) -> Result<(), ClientError> {
        self.store.set(TOKEN_KEY, token)?;
        tracing::debug!("Stored new credential");
        Ok(())
    }

    /// Remove the credential.
    pub fn sign_out(&self) -> Result<(), ClientError> {
        self.store.remove(TOKEN_KEY)?;
        tracing::debug!("Credential removed");
        Ok(())
    }

    fn stored_credential(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read stored credential: {}", e);
                None
            }
        }
    }

    fn purge_expired(&self) {
        tracing::info!("Stored credential has expired; signing out");
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            tracing::warn!("Failed to remove expired credential: {}", e);
        }
    }

    /// Decoded session of the stored credential, if it is present, well formed
    /// and unexpired. An expired credential is purged from storage.
    pub fn current_session(&self) -> Option<Session> {
        let token = self.stored_credential()?;
        let session = decode_token(&token)?;

        if session.is_expired_at(self.now_millis()) {
            self.purge_expired();
            return None;
        }

        Some(session)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// True only for a valid, unexpired credential carrying the admin role.
    pub fn is_admin(&self) -> bool {
        self.current_session()
            .map(|session| session.is_admin())
            .unwrap_or(false)
    }

    /// Credential to attach to an outbound request.
    ///
    /// Expired credentials are purged and not sent. A credential the client
    /// cannot decode is still sent; the service is the authority on it.
    pub fn credential(&self) -> Option<String> {
        let token = self.stored_credential()?;

        if let Some(session) = decode_token(&token) {
            if session.is_expired_at(self.now_millis()) {
                self.purge_expired();
                return None;
            }
        }

        Some(token)
    }

    /// Value for the `Authorization` header, if a credential is present.
    pub fn authorization_header(&self) -> Option<String> {
        self.credential().map(|token| format!("Bearer {}", token))
    }
}
