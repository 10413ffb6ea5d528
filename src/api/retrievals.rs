//! Retrieval endpoints.

use super::ApiClient;
use crate::errors::ClientResult;
use crate::models::{CreateRetrievalRequest, Retrieval, RetrievalHistoryEntry};

impl ApiClient {
    /// POST /admin/retrievals - Record the handoff of an approved claim.
    pub async fn create_retrieval(&self, request: &CreateRetrievalRequest) -> ClientResult<Retrieval> {
        self.send(self.post("/admin/retrievals").json(request)).await
    }

    /// GET /admin/retrievals - All recorded retrievals.
    pub async fn list_retrievals(&self) -> ClientResult<Vec<Retrieval>> {
        self.send(self.get("/admin/retrievals")).await
    }

    /// GET /retrievals/mine - Retrievals of the signed-in user's items.
    pub async fn my_retrievals(&self) -> ClientResult<Vec<RetrievalHistoryEntry>> {
        self.send(self.get("/retrievals/mine")).await
    }
}
