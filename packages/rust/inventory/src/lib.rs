//! The inventory store: one JSON document, loaded whole and replaced whole.
//!
//! [`load`] never fails on a missing file (a brand-new shop starts empty) but
//! refuses to proceed past a malformed document. [`save`] replaces the file
//! atomically via a temp file + rename so a crash mid-write can never leave a
//! half-written inventory at the real path.
//!
//! Mutations ([`add_item`], [`edit_item`], [`remove_item`], [`toggle_sold`])
//! operate on the in-memory [`Inventory`]; persisting and re-rendering the
//! website afterwards is the caller's job.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use craftstall_shared::{CraftstallError, Inventory, InventoryItem, ItemId, Result};

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Load the inventory document, or the empty default when the file is absent.
pub fn load(path: &Path) -> Result<Inventory> {
    if !path.exists() {
        debug!(?path, "inventory file not found, starting with empty inventory");
        return Ok(Inventory::default());
    }

    let content = fs::read_to_string(path).map_err(|e| CraftstallError::io(path, e))?;
    let inventory: Inventory = serde_json::from_str(&content).map_err(|e| {
        CraftstallError::parse(format!(
            "malformed inventory document {}: {e}",
            path.display()
        ))
    })?;

    debug!(items = inventory.len(), "inventory loaded");
    Ok(inventory)
}

/// Serialize the inventory and atomically replace the document at `path`.
pub fn save(path: &Path, inventory: &Inventory) -> Result<()> {
    let json = serde_json::to_string_pretty(inventory)
        .map_err(|e| CraftstallError::Inventory(format!("serialize failed: {e}")))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CraftstallError::io(parent, e))?;
        }
    }

    // Temp file must live in the target directory: rename is only atomic
    // within one filesystem.
    let file_name = path
        .file_name()
        .ok_or_else(|| CraftstallError::Inventory(format!("bad path {}", path.display())))?
        .to_string_lossy();
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp, &json).map_err(|e| CraftstallError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| CraftstallError::io(path, e))?;

    info!(?path, items = inventory.len(), "inventory saved");
    Ok(())
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Generate an id not used by any item in `inventory`.
pub fn fresh_id(inventory: &Inventory) -> ItemId {
    loop {
        let id = ItemId::generate();
        if !inventory.contains_id(&id) {
            return id;
        }
    }
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Fields for a new item; the id is assigned by [`add_item`].
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
}

/// Append a new item. Returns its freshly assigned id.
///
/// Empty titles and negative prices are validation errors; the inventory is
/// untouched when one is reported.
pub fn add_item(inventory: &mut Inventory, new: NewItem) -> Result<ItemId> {
    let title = new.title.trim().to_string();
    if title.is_empty() {
        return Err(CraftstallError::validation("title must not be empty"));
    }
    validate_price(new.price)?;

    let id = fresh_id(inventory);
    inventory.items.push(InventoryItem {
        id: id.clone(),
        title,
        description: new.description,
        price: new.price,
        image: new.image,
        sold: false,
    });

    info!(%id, "item added");
    Ok(id)
}

/// A field-wise update for [`edit_item`]; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

/// What [`edit_item`] actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The patch carried an invalid price; the prior price was retained
    /// while the remaining fields were applied.
    pub price_rejected: bool,
}

/// Apply `patch` to the item at `index` (0-based).
///
/// An invalid price in the patch is rejected field-wise — the prior price is
/// retained and the rest of the patch still applies. Every other invalid
/// input aborts before anything is mutated.
pub fn edit_item(inventory: &mut Inventory, index: usize, patch: ItemPatch) -> Result<EditOutcome> {
    // Validate everything that aborts the edit before touching the item.
    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            return Err(CraftstallError::validation("title must not be empty"));
        }
    }
    let item = inventory
        .items
        .get_mut(index)
        .ok_or_else(|| CraftstallError::validation(format!("no item at position {}", index + 1)))?;

    let mut price_rejected = false;
    if let Some(title) = patch.title {
        item.title = title.trim().to_string();
    }
    if let Some(description) = patch.description {
        item.description = description;
    }
    if let Some(price) = patch.price {
        if validate_price(price).is_ok() {
            item.price = price;
        } else {
            price_rejected = true;
        }
    }
    if let Some(image) = patch.image {
        item.image = Some(image);
    }

    info!(id = %item.id, price_rejected, "item edited");
    Ok(EditOutcome { price_rejected })
}

/// Remove and return the item at `index` (0-based).
pub fn remove_item(inventory: &mut Inventory, index: usize) -> Result<InventoryItem> {
    if index >= inventory.items.len() {
        return Err(CraftstallError::validation(format!(
            "no item at position {}",
            index + 1
        )));
    }
    let item = inventory.items.remove(index);
    info!(id = %item.id, title = %item.title, "item removed");
    Ok(item)
}

/// Flip the sold flag of the item at `index`. Returns the new status.
pub fn toggle_sold(inventory: &mut Inventory, index: usize) -> Result<bool> {
    let item = inventory
        .items
        .get_mut(index)
        .ok_or_else(|| CraftstallError::validation(format!("no item at position {}", index + 1)))?;
    item.sold = !item.sold;
    info!(id = %item.id, sold = item.sold, "sold status toggled");
    Ok(item.sold)
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(CraftstallError::validation("price must be a number"));
    }
    if price < 0.0 {
        return Err(CraftstallError::validation("price must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A unique path under the system temp dir for store tests.
    fn test_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("craftstall_test_{}.json", ItemId::generate()))
    }

    fn sample_inventory() -> Inventory {
        let mut inventory = Inventory {
            google_drive_folder_id: "folder-xyz".into(),
            ..Inventory::default()
        };
        add_item(
            &mut inventory,
            NewItem {
                title: "Wire Dragon".into(),
                description: "A small red dragon with curled wings".into(),
                price: 7.5,
                image: Some("dragon.png".into()),
            },
        )
        .expect("add dragon");
        add_item(
            &mut inventory,
            NewItem {
                title: "Bead Owl".into(),
                description: "".into(),
                price: 4.0,
                image: None,
            },
        )
        .expect("add owl");
        inventory
    }

    #[test]
    fn load_missing_file_returns_empty_default() {
        let inventory = load(&test_path()).expect("load missing");
        assert!(inventory.is_empty());
        assert!(inventory.google_drive_folder_id.is_empty());
    }

    #[test]
    fn load_malformed_document_is_parse_error() {
        let path = test_path();
        fs::write(&path, "{not json").expect("write garbage");
        let err = load(&path).expect_err("should fail");
        assert!(matches!(err, CraftstallError::Parse { .. }));
    }

    #[test]
    fn save_then_load_roundtrips() {
        let path = test_path();
        let inventory = sample_inventory();
        save(&path, &inventory).expect("save");
        let loaded = load(&path).expect("load");
        assert_eq!(loaded, inventory);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let path = test_path();
        save(&path, &sample_inventory()).expect("save");
        let tmp = path.with_file_name(format!(
            ".{}.tmp",
            path.file_name().unwrap().to_string_lossy()
        ));
        assert!(path.exists());
        assert!(!tmp.exists());
    }

    #[test]
    fn save_overwrites_previous_document() {
        let path = test_path();
        let mut inventory = sample_inventory();
        save(&path, &inventory).expect("first save");

        remove_item(&mut inventory, 0).expect("remove");
        save(&path, &inventory).expect("second save");

        let loaded = load(&path).expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.items[0].title, "Bead Owl");
    }

    #[test]
    fn add_increases_count_and_assigns_unique_id() {
        let mut inventory = sample_inventory();
        let before = inventory.len();
        let id = add_item(
            &mut inventory,
            NewItem {
                title: "Clay Fox".into(),
                description: "orange".into(),
                price: 3.0,
                image: None,
            },
        )
        .expect("add");
        assert_eq!(inventory.len(), before + 1);
        let matching = inventory.items.iter().filter(|i| i.id == id).count();
        assert_eq!(matching, 1);
        assert!(!inventory.items.last().unwrap().sold);
    }

    #[test]
    fn add_rejects_empty_title_without_mutating() {
        let mut inventory = sample_inventory();
        let before = inventory.clone();
        let err = add_item(
            &mut inventory,
            NewItem {
                title: "   ".into(),
                description: "".into(),
                price: 1.0,
                image: None,
            },
        )
        .expect_err("empty title");
        assert!(matches!(err, CraftstallError::Validation { .. }));
        assert_eq!(inventory, before);
    }

    #[test]
    fn add_rejects_negative_price_without_mutating() {
        let mut inventory = sample_inventory();
        let before = inventory.clone();
        let err = add_item(
            &mut inventory,
            NewItem {
                title: "Clay Fox".into(),
                description: "".into(),
                price: -0.5,
                image: None,
            },
        )
        .expect_err("negative price");
        assert!(matches!(err, CraftstallError::Validation { .. }));
        assert_eq!(inventory, before);
    }

    #[test]
    fn edit_applies_only_patched_fields() {
        let mut inventory = sample_inventory();
        let outcome = edit_item(
            &mut inventory,
            0,
            ItemPatch {
                title: Some("Wire Dragon (large)".into()),
                price: Some(9.0),
                ..ItemPatch::default()
            },
        )
        .expect("edit");
        assert!(!outcome.price_rejected);

        let item = &inventory.items[0];
        assert_eq!(item.title, "Wire Dragon (large)");
        assert_eq!(item.price, 9.0);
        // Untouched fields survive.
        assert_eq!(item.description, "A small red dragon with curled wings");
        assert_eq!(item.image.as_deref(), Some("dragon.png"));
    }

    #[test]
    fn edit_with_invalid_price_retains_prior_value() {
        let mut inventory = sample_inventory();
        let outcome = edit_item(
            &mut inventory,
            0,
            ItemPatch {
                description: Some("now with a longer tail".into()),
                price: Some(-3.0),
                ..ItemPatch::default()
            },
        )
        .expect("edit");
        assert!(outcome.price_rejected);

        let item = &inventory.items[0];
        assert_eq!(item.price, 7.5);
        assert_eq!(item.description, "now with a longer tail");
    }

    #[test]
    fn edit_out_of_range_is_validation_error() {
        let mut inventory = sample_inventory();
        let err = edit_item(&mut inventory, 99, ItemPatch::default()).expect_err("bad index");
        assert!(matches!(err, CraftstallError::Validation { .. }));
    }

    #[test]
    fn remove_decreases_count_and_returns_item() {
        let mut inventory = sample_inventory();
        let before = inventory.len();
        let removed = remove_item(&mut inventory, 0).expect("remove");
        assert_eq!(removed.title, "Wire Dragon");
        assert_eq!(inventory.len(), before - 1);
        assert!(!inventory.contains_id(&removed.id));
    }

    #[test]
    fn toggle_flips_sold_both_ways() {
        let mut inventory = sample_inventory();
        assert!(toggle_sold(&mut inventory, 1).expect("first toggle"));
        assert!(inventory.items[1].sold);
        assert!(!toggle_sold(&mut inventory, 1).expect("second toggle"));
        assert!(!inventory.items[1].sold);
    }

    #[test]
    fn fresh_id_avoids_existing_ids() {
        let inventory = sample_inventory();
        let id = fresh_id(&inventory);
        assert!(!inventory.contains_id(&id));
    }
}
