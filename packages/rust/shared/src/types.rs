//! Core domain types for the Craftstall inventory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of hex characters in an item id.
pub const ITEM_ID_LEN: usize = 8;

// ---------------------------------------------------------------------------
// ItemId
// ---------------------------------------------------------------------------

/// A short unique identifier for an inventory item.
///
/// Eight lowercase hex characters taken from a freshly generated UUID v4 —
/// short enough to read aloud over the counter, random enough that callers
/// only need a collision check against the current inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a new random item id.
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex[..ITEM_ID_LEN].to_string())
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// InventoryItem
// ---------------------------------------------------------------------------

/// One product record in the shop inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Short unique id, stable for the life of the item.
    pub id: ItemId,
    /// Item title, never empty.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Asking price in dollars, never negative.
    pub price: f64,
    /// Filename inside the images directory, if a photo exists.
    ///
    /// Serialized as `null` when absent so existing documents round-trip
    /// byte-for-byte.
    pub image: Option<String>,
    /// Whether the item has been sold.
    #[serde(default)]
    pub sold: bool,
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// The whole shop inventory, persisted as a single JSON document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Ordered list of items; the website renders them in this order.
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    /// Free-text metadata carried through untouched (the folder the shop's
    /// photos originally lived in; nothing in this repo reads it).
    #[serde(default)]
    pub google_drive_folder_id: String,
}

impl Inventory {
    /// Whether any item already uses `id`.
    pub fn contains_id(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Number of items, sold or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_is_short_hex() {
        let id = ItemId::generate();
        assert_eq!(id.as_str().len(), ITEM_ID_LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn item_id_serializes_transparently() {
        let id = ItemId::from("ab12cd34");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"ab12cd34\"");
    }

    #[test]
    fn inventory_document_shape() {
        let inv = Inventory {
            items: vec![InventoryItem {
                id: ItemId::from("deadbeef"),
                title: "Wire Dragon".into(),
                description: "A small red dragon".into(),
                price: 7.5,
                image: None,
                sold: false,
            }],
            google_drive_folder_id: "folder-123".into(),
        };

        let json = serde_json::to_string_pretty(&inv).expect("serialize");
        assert!(json.contains("\"items\""));
        assert!(json.contains("\"google_drive_folder_id\": \"folder-123\""));
        // Absent image must serialize as an explicit null.
        assert!(json.contains("\"image\": null"));

        let parsed: Inventory = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, inv);
    }

    #[test]
    fn missing_fields_take_defaults() {
        // A document written before the sold flag existed still loads.
        let json = r#"{
            "items": [{
                "id": "0a1b2c3d",
                "title": "Bead Owl",
                "description": "",
                "price": 4.0,
                "image": "owl.png"
            }]
        }"#;
        let parsed: Inventory = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.items.len(), 1);
        assert!(!parsed.items[0].sold);
        assert!(parsed.google_drive_folder_id.is_empty());
    }

    #[test]
    fn contains_id_matches_existing() {
        let mut inv = Inventory::default();
        assert!(!inv.contains_id(&ItemId::from("ab12cd34")));
        inv.items.push(InventoryItem {
            id: ItemId::from("ab12cd34"),
            title: "Clay Fox".into(),
            description: "".into(),
            price: 3.0,
            image: None,
            sold: false,
        });
        assert!(inv.contains_id(&ItemId::from("ab12cd34")));
    }
}
