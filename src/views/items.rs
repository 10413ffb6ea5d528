//! Reporting, searching and matching screens.

use chrono::NaiveDate;

use super::{list_or_empty, plural, render_item, Banner, Screen};
use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::forms::{FoundItemForm, LostItemForm};
use crate::models::{ItemKind, SearchFilters};

/// Report a lost item, then show the user's lost items.
pub async fn report_lost(client: &ApiClient, form: &LostItemForm, today: NaiveDate) -> Screen {
    let request = match form.validate(today) {
        Ok(request) => request,
        Err(errors) => {
            return Screen::new("Report Lost Item")
                .with_banner(Banner::Error(ClientError::Validation(errors).message()))
        }
    };

    match client.report_lost(&request).await {
        Ok(item) => {
            tracing::info!("Reported lost item {}", item.id);
            lost_items(client, None).await.with_banner(Banner::Success(format!(
                "Lost item '{}' reported.",
                item.title
            )))
        }
        Err(e) => {
            tracing::error!("Error reporting lost item: {}", e);
            Screen::new("Report Lost Item").with_banner(Banner::Error(
                e.banner_message("Failed to report lost item. Please try again."),
            ))
        }
    }
}

/// The user's lost items, with matches expanded for `selected`.
pub async fn lost_items(client: &ApiClient, selected: Option<&str>) -> Screen {
    let mut screen = Screen::new("Your Lost Items");
    let items = list_or_empty(client.list_lost_items().await, "lost items");

    if items.is_empty() {
        screen.push("You have not reported any lost items.");
        return screen;
    }

    for item in &items {
        screen.extend(render_item(item, ItemKind::Lost));
        if selected == Some(item.id.as_str()) {
            let matches = item_matches(client, &item.id, &item.title).await;
            screen.extend(matches.lines.iter().map(|l| format!("    {}", l)));
        }
    }
    screen
}

/// Report a found item.
pub async fn report_found(client: &ApiClient, form: &FoundItemForm) -> Screen {
    let screen = Screen::new("Report Found Item");

    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            return screen.with_banner(Banner::Error(ClientError::Validation(errors).message()))
        }
    };

    match client.report_found(&request).await {
        Ok(item) => {
            tracing::info!("Reported found item {}", item.id);
            let mut screen = screen.with_banner(Banner::Success(
                "Thank you! The found item has been reported.".to_string(),
            ));
            screen.extend(render_item(&item, ItemKind::Found));
            screen
        }
        Err(e) => {
            tracing::error!("Error reporting found item: {}", e);
            screen.with_banner(Banner::Error(
                e.banner_message("Failed to report found item. Please try again."),
            ))
        }
    }
}

/// Search found items. A blank query sends nothing.
pub async fn search_found(client: &ApiClient, query: &str, filters: &SearchFilters) -> Screen {
    let mut screen = Screen::new("Search Found Items");
    let query = query.trim();

    if query.is_empty() {
        screen.push("Enter keywords to search found items.");
        return screen;
    }

    let results = match client.search_found_items(query, filters).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            Vec::new()
        }
    };

    if results.is_empty() {
        screen.push("No items found matching your search. Try different keywords.");
        return screen;
    }

    screen.push(format!("{} found", plural(results.len(), "result", "results")));
    for item in &results {
        screen.extend(render_item(item, ItemKind::Found));
    }
    screen
}

/// Search lost items.
pub async fn search_lost(client: &ApiClient, query: &str, filters: &SearchFilters) -> Screen {
    let mut screen = Screen::new("Search Lost Items");
    let query = query.trim();

    if query.is_empty() {
        screen.push("Enter keywords to search lost items.");
        return screen;
    }

    let results = list_or_empty(client.search_lost_items(query, filters).await, "lost item search");
    if results.is_empty() {
        screen.push("No items found matching your search. Try different keywords.");
        return screen;
    }

    screen.push(format!("{} found", plural(results.len(), "result", "results")));
    for item in &results {
        screen.extend(render_item(item, ItemKind::Lost));
    }
    screen
}

/// Found items the service matched to a lost report.
pub async fn item_matches(client: &ApiClient, lost_item_id: &str, lost_item_title: &str) -> Screen {
    let mut screen = Screen::new(format!("Potential Matches for \"{}\"", lost_item_title));
    let matches = list_or_empty(client.get_matches(lost_item_id).await, "matches");

    if matches.is_empty() {
        screen.push(
            "No potential matches found yet. We'll notify you when someone reports a matching item.",
        );
        return screen;
    }

    screen.push(format!(
        "Found {}",
        plural(matches.len(), "potential match", "potential matches")
    ));
    for item in &matches {
        screen.extend(render_item(item, ItemKind::Found));
        screen.push(format!(
            "    Claim with: lostfound claim create {} {}",
            lost_item_id, item.id
        ));
    }
    screen
}

/// File a claim for a matched found item.
pub async fn file_claim(client: &ApiClient, lost_item_id: &str, found_item_id: &str) -> Screen {
    let screen = Screen::new("File Claim");

    match client.create_claim(lost_item_id, found_item_id).await {
        Ok(claim) => {
            tracing::info!("Created claim {}", claim.id);
            let mut screen =
                screen.with_banner(Banner::Success("Claim created successfully!".to_string()));
            screen.push(format!("Claim #{} is {}", claim.short_id(), claim.status.as_str()));
            screen
        }
        Err(e) => {
            tracing::error!("Failed to create claim: {}", e);
            screen.with_banner(Banner::Error(
                "Failed to create claim. Please try again.".to_string(),
            ))
        }
    }
}

/// Ask the service to verify a claim.
pub async fn verify_claim(client: &ApiClient, claim_id: &str) -> Screen {
    let screen = Screen::new("Verify Claim");

    match client.verify_claim(claim_id).await {
        Ok(response) => screen.with_banner(Banner::Success(
            response
                .message
                .unwrap_or_else(|| "Claim submitted for verification.".to_string()),
        )),
        Err(e) => {
            tracing::error!("Failed to verify claim: {}", e);
            screen.with_banner(Banner::Error(
                e.banner_message("Failed to verify claim. Please try again."),
            ))
        }
    }
}
