//! Administrator screens: claim review, retrieval log and record management.

use chrono::NaiveDate;

use super::{list_or_empty, plural, render_item, Banner, Screen};
use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::forms::{FoundItemForm, LostItemForm, NewUserForm, RetrievalForm};
use crate::models::{Claim, ItemKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Claims,
    Retrievals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimDecision {
    Approve,
    Reject,
}

/// Which report collection a management screen works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCollection {
    Lost,
    Found,
}

/// Admin dashboard, one tab at a time.
pub async fn admin_dashboard(client: &ApiClient, tab: AdminTab) -> Screen {
    match tab {
        AdminTab::Claims => claims_tab(client).await,
        AdminTab::Retrievals => retrievals_tab(client).await,
    }
}

async fn claims_tab(client: &ApiClient) -> Screen {
    let mut screen = Screen::new("Admin Dashboard: Claims");
    let claims = list_or_empty(client.admin_list_claims().await, "claims");

    if claims.is_empty() {
        return screen.with_banner(Banner::Info("No claims to review".to_string()));
    }

    for claim in &claims {
        screen.extend(render_claim(claim));
    }
    screen
}

fn render_claim(claim: &Claim) -> Vec<String> {
    let mut lines = vec![format!(
        "- Claim #{} [{}] (id {})",
        claim.short_id(),
        claim.status.as_str(),
        claim.id
    )];
    if let Some(student) = &claim.student_id {
        lines.push(format!("    Student: {}", student));
    }
    lines.push(format!("    Lost Item: {}", claim.lost_item_id));
    lines.push(format!("    Found Item: {}", claim.found_item_id));
    if let Some(created) = &claim.created_at {
        lines.push(format!("    Created: {}", created));
    }
    if claim.awaiting_decision() {
        lines.push(format!(
            "    Actions: lostfound admin approve {0} | lostfound admin reject {0}",
            claim.id
        ));
    } else if claim.awaiting_retrieval() {
        lines.push(format!(
            "    Actions: lostfound admin record-retrieval {}",
            claim.id
        ));
    }
    lines
}

async fn retrievals_tab(client: &ApiClient) -> Screen {
    let mut screen = Screen::new("Admin Dashboard: Retrievals");
    let retrievals = list_or_empty(client.list_retrievals().await, "retrievals");

    if retrievals.is_empty() {
        return screen.with_banner(Banner::Info("No retrievals recorded yet".to_string()));
    }

    for retrieval in &retrievals {
        screen.push(format!("- Retrieval (id {})", retrieval.id));
        screen.push(format!("    Claim: {}", retrieval.claim_id));
        if let Some(by) = &retrieval.retrieved_by {
            screen.push(format!("    Retrieved by: {}", by));
        }
        if let Some(at) = &retrieval.retrieved_at {
            screen.push(format!("    Date: {}", at));
        }
        if let Some(location) = &retrieval.location {
            screen.push(format!("    Location: {}", location));
        }
        if let Some(notes) = retrieval.notes.as_deref().filter(|n| !n.is_empty()) {
            screen.push(format!("    Notes: {}", notes));
        }
    }
    screen
}

/// Approve or reject a claim, then reload the claims tab.
pub async fn decide_claim(client: &ApiClient, claim_id: &str, decision: ClaimDecision) -> Screen {
    let result = match decision {
        ClaimDecision::Approve => client.approve_claim(claim_id).await,
        ClaimDecision::Reject => client.reject_claim(claim_id).await,
    };
    let verb = match decision {
        ClaimDecision::Approve => "approve",
        ClaimDecision::Reject => "reject",
    };

    let banner = match result {
        Ok(response) => {
            tracing::info!("Claim {} {}d", claim_id, verb);
            Banner::Success(
                response
                    .message
                    .unwrap_or_else(|| format!("Claim {}d.", verb)),
            )
        }
        Err(e) => {
            tracing::error!("Failed to {} claim: {}", verb, e);
            Banner::Error(e.banner_message(&format!("Failed to {} claim.", verb)))
        }
    };

    claims_tab(client).await.with_banner(banner)
}

/// Record the physical handoff of an approved claim, then reload the claims tab.
pub async fn record_retrieval(client: &ApiClient, form: &RetrievalForm) -> Screen {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            return Screen::new("Record Retrieval")
                .with_banner(Banner::Error(ClientError::Validation(errors).message()))
        }
    };

    let banner = match client.create_retrieval(&request).await {
        Ok(retrieval) => {
            tracing::info!("Recorded retrieval {} for claim {}", retrieval.id, retrieval.claim_id);
            Banner::Success("Retrieval recorded.".to_string())
        }
        Err(e) => {
            tracing::error!("Failed to record retrieval: {}", e);
            Banner::Error(e.banner_message("Failed to record retrieval."))
        }
    };

    claims_tab(client).await.with_banner(banner)
}

/// List registered users.
pub async fn manage_users(client: &ApiClient) -> Screen {
    let mut screen = Screen::new("Manage Users");
    let users = list_or_empty(client.admin_list_users().await, "users");

    screen.push(plural(users.len(), "user", "users"));
    for user in &users {
        screen.push(format!(
            "- {} <{}> [{}] (id {})",
            user.name,
            user.email,
            user.role.as_str(),
            user.id
        ));
    }
    screen
}

/// Create a user, then list users.
pub async fn create_user(client: &ApiClient, form: &NewUserForm) -> Screen {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            return Screen::new("Manage Users")
                .with_banner(Banner::Error(ClientError::Validation(errors).message()))
        }
    };

    let banner = match client.admin_create_user(&request).await {
        Ok(user) => Banner::Success(format!("Created user {}.", user.email)),
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            Banner::Error(e.banner_message("Failed to create user."))
        }
    };
    manage_users(client).await.with_banner(banner)
}

/// Delete a user, then list users.
pub async fn delete_user(client: &ApiClient, user_id: &str) -> Screen {
    let banner = match client.admin_delete_user(user_id).await {
        Ok(_) => Banner::Success(format!("Deleted user {}.", user_id)),
        Err(e) => {
            tracing::error!("Failed to delete user: {}", e);
            Banner::Error(e.banner_message("Failed to delete user."))
        }
    };
    manage_users(client).await.with_banner(banner)
}

/// List every report in a collection.
pub async fn manage_reports(client: &ApiClient, collection: ReportCollection) -> Screen {
    let (title, result, kind) = match collection {
        ReportCollection::Lost => (
            "Manage Lost Items",
            client.admin_list_lost_items().await,
            ItemKind::Lost,
        ),
        ReportCollection::Found => (
            "Manage Found Items",
            client.admin_list_found_items().await,
            ItemKind::Found,
        ),
    };

    let mut screen = Screen::new(title);
    let items = list_or_empty(result, title);
    screen.push(plural(items.len(), "item", "items"));
    for item in &items {
        screen.extend(render_item(item, kind));
    }
    screen
}

/// Create a lost report on a user's behalf.
pub async fn create_lost_report(client: &ApiClient, form: &LostItemForm, today: NaiveDate) -> Screen {
    let request = match form.validate(today) {
        Ok(request) => request,
        Err(errors) => {
            return Screen::new("Manage Lost Items")
                .with_banner(Banner::Error(ClientError::Validation(errors).message()))
        }
    };

    let banner = match client.admin_create_lost_item(&request).await {
        Ok(item) => Banner::Success(format!("Created lost item {}.", item.id)),
        Err(e) => {
            tracing::error!("Failed to create lost item: {}", e);
            Banner::Error(e.banner_message("Failed to create lost item."))
        }
    };
    manage_reports(client, ReportCollection::Lost)
        .await
        .with_banner(banner)
}

/// Create a found report on a finder's behalf.
pub async fn create_found_report(client: &ApiClient, form: &FoundItemForm) -> Screen {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            return Screen::new("Manage Found Items")
                .with_banner(Banner::Error(ClientError::Validation(errors).message()))
        }
    };

    let banner = match client.admin_create_found_item(&request).await {
        Ok(item) => Banner::Success(format!("Created found item {}.", item.id)),
        Err(e) => {
            tracing::error!("Failed to create found item: {}", e);
            Banner::Error(e.banner_message("Failed to create found item."))
        }
    };
    manage_reports(client, ReportCollection::Found)
        .await
        .with_banner(banner)
}

/// Delete a report, then list the collection.
pub async fn delete_report(
    client: &ApiClient,
    collection: ReportCollection,
    item_id: &str,
) -> Screen {
    let result = match collection {
        ReportCollection::Lost => client.admin_delete_lost_item(item_id).await,
        ReportCollection::Found => client.admin_delete_found_item(item_id).await,
    };

    let banner = match result {
        Ok(_) => Banner::Success(format!("Deleted item {}.", item_id)),
        Err(e) => {
            tracing::error!("Failed to delete item {}: {}", item_id, e);
            Banner::Error(e.banner_message("Failed to delete item."))
        }
    };
    manage_reports(client, collection).await.with_banner(banner)
}
