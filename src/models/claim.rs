//! Claims linking a lost report to a found report.

use serde::{Deserialize, Serialize};

/// Claim lifecycle. Only administrators move a claim out of `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    Retrieved,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Retrieved => "retrieved",
            ClaimStatus::Unknown => "unknown",
        }
    }
}

/// A user's claim that a found item belongs to their lost report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub lost_item_id: String,
    pub found_item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Claim {
    /// Last six characters of the id, as shown in listings.
    pub fn short_id(&self) -> &str {
        let count = self.id.chars().count();
        match self.id.char_indices().nth(count.saturating_sub(6)) {
            Some((idx, _)) => &self.id[idx..],
            None => &self.id,
        }
    }

    /// Approve/reject is only offered for pending claims.
    pub fn awaiting_decision(&self) -> bool {
        self.status == ClaimStatus::Pending
    }

    /// A retrieval can only be recorded against an approved claim.
    pub fn awaiting_retrieval(&self) -> bool {
        self.status == ClaimStatus::Approved
    }
}

/// Request body for filing a claim.
#[derive(Debug, Clone, Serialize)]
pub struct CreateClaimRequest {
    pub lost_item_id: String,
    pub found_item_id: String,
}

/// Acknowledgement returned by action endpoints (verify, approve, reject, delete).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(id: &str, status: ClaimStatus) -> Claim {
        Claim {
            id: id.to_string(),
            lost_item_id: "l".to_string(),
            found_item_id: "f".to_string(),
            student_id: None,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_short_id() {
        assert_eq!(claim("665f1c2e9b1d4a0012345678", ClaimStatus::Pending).short_id(), "345678");
        assert_eq!(claim("abc", ClaimStatus::Pending).short_id(), "abc");
    }

    #[test]
    fn test_available_actions() {
        assert!(claim("1", ClaimStatus::Pending).awaiting_decision());
        assert!(!claim("1", ClaimStatus::Pending).awaiting_retrieval());
        assert!(claim("1", ClaimStatus::Approved).awaiting_retrieval());
        assert!(!claim("1", ClaimStatus::Rejected).awaiting_decision());
    }

    #[test]
    fn test_claim_status_deserialize() {
        let c: Claim = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "lost_item_id": "l1",
            "found_item_id": "f1",
            "status": "retrieved"
        }))
        .unwrap();
        assert_eq!(c.status, ClaimStatus::Retrieved);
    }
}
