//! Lost and found item reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed category list offered by both report forms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "Electronics")]
    Electronics,
    #[serde(rename = "Books & Notebooks")]
    BooksNotebooks,
    #[serde(rename = "Clothing & Accessories")]
    ClothingAccessories,
    #[serde(rename = "Bags & Backpacks")]
    BagsBackpacks,
    #[serde(rename = "Keys & Cards")]
    KeysCards,
    #[serde(rename = "Documents & IDs")]
    DocumentsIds,
    #[serde(rename = "Laptops & Tablets")]
    LaptopsTablets,
    #[serde(rename = "Audio Equipment")]
    AudioEquipment,
    #[serde(rename = "Eyewear")]
    Eyewear,
    #[serde(rename = "Watches & Jewelry")]
    WatchesJewelry,
    #[serde(rename = "Sports Equipment")]
    SportsEquipment,
    #[serde(rename = "Personal Items")]
    PersonalItems,
    #[serde(rename = "Vehicle Items")]
    VehicleItems,
    #[serde(rename = "Wallets & Purses")]
    WalletsPurses,
    #[serde(rename = "Tools & Equipment")]
    ToolsEquipment,
    #[serde(rename = "Food & Beverages")]
    FoodBeverages,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 17] = [
        Category::Electronics,
        Category::BooksNotebooks,
        Category::ClothingAccessories,
        Category::BagsBackpacks,
        Category::KeysCards,
        Category::DocumentsIds,
        Category::LaptopsTablets,
        Category::AudioEquipment,
        Category::Eyewear,
        Category::WatchesJewelry,
        Category::SportsEquipment,
        Category::PersonalItems,
        Category::VehicleItems,
        Category::WalletsPurses,
        Category::ToolsEquipment,
        Category::FoodBeverages,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::BooksNotebooks => "Books & Notebooks",
            Category::ClothingAccessories => "Clothing & Accessories",
            Category::BagsBackpacks => "Bags & Backpacks",
            Category::KeysCards => "Keys & Cards",
            Category::DocumentsIds => "Documents & IDs",
            Category::LaptopsTablets => "Laptops & Tablets",
            Category::AudioEquipment => "Audio Equipment",
            Category::Eyewear => "Eyewear",
            Category::WatchesJewelry => "Watches & Jewelry",
            Category::SportsEquipment => "Sports Equipment",
            Category::PersonalItems => "Personal Items",
            Category::VehicleItems => "Vehicle Items",
            Category::WalletsPurses => "Wallets & Purses",
            Category::ToolsEquipment => "Tools & Equipment",
            Category::FoodBeverages => "Food & Beverages",
            Category::Other => "Other",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
    }
}

/// Item status as reported by the service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Found,
    Unclaimed,
    Claimed,
    Retrieved,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Found => "found",
            ItemStatus::Unclaimed => "unclaimed",
            ItemStatus::Claimed => "claimed",
            ItemStatus::Retrieved => "retrieved",
            ItemStatus::Unknown => "unknown",
        }
    }
}

/// Which side of the lost/found pairing a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Lost,
    Found,
}

/// A lost or found item report snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemReport {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passkey: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    /// Reporting student for lost items, finder for found items
    #[serde(
        default,
        alias = "student_id",
        alias = "finder_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_lost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ItemReport {
    /// Matches are only looked up while the owner is still searching.
    pub fn awaiting_match(&self) -> bool {
        self.status == ItemStatus::Pending
    }
}

/// Request body for reporting a lost item.
#[derive(Debug, Clone, Serialize)]
pub struct ReportLostRequest {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub date_lost: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// Request body for reporting a found item.
#[derive(Debug, Clone, Serialize)]
pub struct ReportFoundRequest {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// Optional narrowing for item searches, sent alongside `q`.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub category: Option<Category>,
    pub location: Option<String>,
}

impl SearchFilters {
    /// Query pairs for a search request, `q` first.
    pub fn query_pairs(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", query.to_string())];
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(location) = self.location.as_deref().map(str::trim) {
            if !location.is_empty() {
                pairs.push(("location", location.to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("keys & cards"), Some(Category::KeysCards));
        assert_eq!(Category::parse("  Other "), Some(Category::Other));
        assert_eq!(Category::parse("Spaceships"), None);
    }

    #[test]
    fn test_category_serializes_display_name() {
        let json = serde_json::to_string(&Category::DocumentsIds).unwrap();
        assert_eq!(json, "\"Documents & IDs\"");
    }

    #[test]
    fn test_item_report_owner_aliases() {
        let lost: ItemReport = serde_json::from_value(serde_json::json!({
            "id": "665f1c2e9b1d4a0012345678",
            "title": "Blue backpack",
            "description": "JanSport with a keychain",
            "category": "Bags & Backpacks",
            "location": "Library 2nd floor",
            "status": "pending",
            "student_id": "s-1",
            "date_lost": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(lost.owner_id.as_deref(), Some("s-1"));
        assert!(lost.awaiting_match());

        let found: ItemReport = serde_json::from_value(serde_json::json!({
            "id": "f-1",
            "title": "Calculator",
            "status": "unclaimed",
            "finder_id": "s-2",
            "passkey": "Ab3dE9xQ"
        }))
        .unwrap();
        assert_eq!(found.owner_id.as_deref(), Some("s-2"));
        assert_eq!(found.status, ItemStatus::Unclaimed);
        assert_eq!(found.description, "");
    }

    #[test]
    fn test_unknown_status_is_preserved_as_unknown() {
        let item: ItemReport = serde_json::from_value(serde_json::json!({
            "id": "x",
            "title": "Umbrella",
            "status": "archived"
        }))
        .unwrap();
        assert_eq!(item.status, ItemStatus::Unknown);
    }

    #[test]
    fn test_report_lost_request_wire_format() {
        let req = ReportLostRequest {
            title: "Phone".to_string(),
            description: "Black Pixel".to_string(),
            category: Category::Electronics,
            location: "Gym".to_string(),
            date_lost: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            serial_number: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["date_lost"], "2024-03-01");
        assert_eq!(value["category"], "Electronics");
        assert!(value.get("serial_number").is_none());
    }

    #[test]
    fn test_search_filters_query_pairs() {
        let filters = SearchFilters {
            category: Some(Category::Eyewear),
            location: Some("  ".to_string()),
        };
        assert_eq!(
            filters.query_pairs("glasses"),
            vec![
                ("q", "glasses".to_string()),
                ("category", "Eyewear".to_string())
            ]
        );
    }
}
