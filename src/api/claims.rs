//! Claim endpoints, user side and administrator side.

use super::{segment, ApiClient};
use crate::errors::ClientResult;
use crate::models::{ActionResponse, Claim, CreateClaimRequest};

impl ApiClient {
    /// POST /claims - Claim a found item for one of the user's lost reports.
    pub async fn create_claim(&self, lost_item_id: &str, found_item_id: &str) -> ClientResult<Claim> {
        let request = CreateClaimRequest {
            lost_item_id: lost_item_id.trim().to_string(),
            found_item_id: found_item_id.trim().to_string(),
        };
        self.send(self.post("/claims").json(&request)).await
    }

    /// POST /claims/:id/verify - Ask the service to verify a claim.
    pub async fn verify_claim(&self, claim_id: &str) -> ClientResult<ActionResponse> {
        let path = format!("/claims/{}/verify", segment(claim_id));
        self.send(self.post(&path)).await
    }

    /// GET /admin/claims - Every claim, for review.
    pub async fn admin_list_claims(&self) -> ClientResult<Vec<Claim>> {
        self.send(self.get("/admin/claims")).await
    }

    /// POST /admin/claims/:id/approve
    pub async fn approve_claim(&self, claim_id: &str) -> ClientResult<ActionResponse> {
        let path = format!("/admin/claims/{}/approve", segment(claim_id));
        self.send(self.post(&path)).await
    }

    /// POST /admin/claims/:id/reject
    pub async fn reject_claim(&self, claim_id: &str) -> ClientResult<ActionResponse> {
        let path = format!("/admin/claims/{}/reject", segment(claim_id));
        self.send(self.post(&path)).await
    }
}
