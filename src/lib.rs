//! Lost & Found client
//!
//! Client for the campus Lost & Found tracking service: report lost and found
//! items, search, review matches, file claims and, for administrators, review
//! claims and log retrievals. The service owns all state; this crate derives the
//! session from the stored credential, validates forms and renders screens.

pub mod api;
pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod session;
pub mod storage;
pub mod views;

use std::sync::Arc;

use mockable::DefaultClock;

use api::ApiClient;
use config::Config;
use errors::ClientResult;
use session::SessionContext;
use storage::FileStore;

/// Build an API client with file-backed storage and the system clock.
pub fn client_from_config(config: &Config) -> ClientResult<ApiClient> {
    let store = Arc::new(FileStore::new(&config.storage_path));
    let session = SessionContext::new(store, Arc::new(DefaultClock));
    ApiClient::new(config.api_url.clone(), session)
}
