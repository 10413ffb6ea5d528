//! Administrator management of users and item reports.

use super::{segment, ApiClient};
use crate::errors::ClientResult;
use crate::models::{
    ActionResponse, CreateUserRequest, ItemReport, ReportFoundRequest, ReportLostRequest, User,
};

impl ApiClient {
    /// GET /admin/users
    pub async fn admin_list_users(&self) -> ClientResult<Vec<User>> {
        self.send(self.get("/admin/users")).await
    }

    /// POST /admin/users
    pub async fn admin_create_user(&self, request: &CreateUserRequest) -> ClientResult<User> {
        self.send(self.post("/admin/users").json(request)).await
    }

    /// DELETE /admin/users/:id
    pub async fn admin_delete_user(&self, user_id: &str) -> ClientResult<ActionResponse> {
        let path = format!("/admin/users/{}", segment(user_id));
        self.send(self.delete(&path)).await
    }

    /// GET /admin/lost-items
    pub async fn admin_list_lost_items(&self) -> ClientResult<Vec<ItemReport>> {
        self.send(self.get("/admin/lost-items")).await
    }

    /// POST /admin/lost-items
    pub async fn admin_create_lost_item(
        &self,
        request: &ReportLostRequest,
    ) -> ClientResult<ItemReport> {
        self.send(self.post("/admin/lost-items").json(request)).await
    }

    /// DELETE /admin/lost-items/:id
    pub async fn admin_delete_lost_item(&self, item_id: &str) -> ClientResult<ActionResponse> {
        let path = format!("/admin/lost-items/{}", segment(item_id));
        self.send(self.delete(&path)).await
    }

    /// GET /admin/found-items
    pub async fn admin_list_found_items(&self) -> ClientResult<Vec<ItemReport>> {
        self.send(self.get("/admin/found-items")).await
    }

    /// POST /admin/found-items
    pub async fn admin_create_found_item(
        &self,
        request: &ReportFoundRequest,
    ) -> ClientResult<ItemReport> {
        self.send(self.post("/admin/found-items").json(request)).await
    }

    /// DELETE /admin/found-items/:id
    pub async fn admin_delete_found_item(&self, item_id: &str) -> ClientResult<ActionResponse> {
        let path = format!("/admin/found-items/{}", segment(item_id));
        self.send(self.delete(&path)).await
    }
}
