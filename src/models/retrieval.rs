//! Retrieval records for claimed items.

use serde::{Deserialize, Serialize};

/// Terminal record of a physical handoff, as listed to administrators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retrieval {
    pub id: String,
    pub claim_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request body for recording a retrieval against an approved claim.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRetrievalRequest {
    pub claim_id: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A retrieval as seen by the student who got their item back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalHistoryEntry {
    pub id: String,
    #[serde(default)]
    pub item_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_location: Option<String>,
    /// Administrator who verified the handoff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
