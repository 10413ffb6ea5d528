//! Lost and found item endpoints.

use super::{segment, ApiClient};
use crate::errors::ClientResult;
use crate::models::{ItemReport, ReportFoundRequest, ReportLostRequest, SearchFilters};

impl ApiClient {
    /// POST /lost-items - Report a lost item.
    pub async fn report_lost(&self, request: &ReportLostRequest) -> ClientResult<ItemReport> {
        self.send(self.post("/lost-items").json(request)).await
    }

    /// GET /lost-items - Lost items reported by the signed-in user.
    pub async fn list_lost_items(&self) -> ClientResult<Vec<ItemReport>> {
        self.send(self.get("/lost-items")).await
    }

    /// POST /found-items - Report a found item.
    pub async fn report_found(&self, request: &ReportFoundRequest) -> ClientResult<ItemReport> {
        self.send(self.post("/found-items").json(request)).await
    }

    /// GET /found-items - All found item reports.
    pub async fn list_found_items(&self) -> ClientResult<Vec<ItemReport>> {
        self.send(self.get("/found-items")).await
    }

    /// GET /found-items/search?q= - Search found items.
    pub async fn search_found_items(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> ClientResult<Vec<ItemReport>> {
        let pairs = filters.query_pairs(query);
        self.send(self.get("/found-items/search").query(&pairs)).await
    }

    /// GET /lost-items/search?q= - Search lost items.
    pub async fn search_lost_items(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> ClientResult<Vec<ItemReport>> {
        let pairs = filters.query_pairs(query);
        self.send(self.get("/lost-items/search").query(&pairs)).await
    }

    /// GET /lost-items/:id/matches - Found items the service paired with a lost report.
    pub async fn get_matches(&self, lost_item_id: &str) -> ClientResult<Vec<ItemReport>> {
        let path = format!("/lost-items/{}/matches", segment(lost_item_id));
        self.send(self.get(&path)).await
    }
}
