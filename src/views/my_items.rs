//! "My Items" screen: the user's lost reports and retrieval history.

use super::{item_matches, render_item, Banner, Screen};
use crate::api::ApiClient;
use crate::models::ItemKind;

const LOAD_FAILED: &str = "Failed to load your items. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MyItemsTab {
    #[default]
    LostItems,
    RetrievalHistory,
}

/// Render one tab of the screen. `selected` expands matches for a lost item
/// that is still pending.
pub async fn my_items(client: &ApiClient, tab: MyItemsTab, selected: Option<&str>) -> Screen {
    match tab {
        MyItemsTab::LostItems => lost_tab(client, selected).await,
        MyItemsTab::RetrievalHistory => history_tab(client).await,
    }
}

async fn lost_tab(client: &ApiClient, selected: Option<&str>) -> Screen {
    let mut screen = Screen::new("My Items: My Lost Items");

    let items = match client.list_lost_items().await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Failed to load data: {}", e);
            return screen.with_banner(Banner::Error(LOAD_FAILED.to_string()));
        }
    };

    if items.is_empty() {
        return screen.with_banner(Banner::Info(
            "You haven't reported any lost items yet.".to_string(),
        ));
    }

    for item in &items {
        screen.extend(render_item(item, ItemKind::Lost));
        if item.awaiting_match() && selected == Some(item.id.as_str()) {
            let matches = item_matches(client, &item.id, &item.title).await;
            screen.extend(matches.lines.iter().map(|l| format!("    {}", l)));
        }
    }
    screen
}

async fn history_tab(client: &ApiClient) -> Screen {
    let mut screen = Screen::new("My Items: Retrieval History");

    let entries = match client.my_retrievals().await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Failed to load data: {}", e);
            return screen.with_banner(Banner::Error(LOAD_FAILED.to_string()));
        }
    };

    if entries.is_empty() {
        return screen.with_banner(Banner::Info("No retrieved items yet.".to_string()));
    }

    for entry in &entries {
        screen.push(format!("- {} (retrieval {})", entry.item_title, entry.id));
        if let Some(category) = &entry.item_category {
            screen.push(format!("    Category: {}", category));
        }
        if let Some(location) = &entry.retrieval_location {
            screen.push(format!("    Location: {}", location));
        }
        if let Some(admin) = &entry.admin_name {
            screen.push(format!("    Verified by: {}", admin));
        }
        if let Some(date) = &entry.retrieval_date {
            screen.push(format!("    Date: {}", date));
        }
        if let Some(notes) = entry.notes.as_deref().filter(|n| !n.is_empty()) {
            screen.push(format!("    Notes: {}", notes));
        }
    }
    screen
}
