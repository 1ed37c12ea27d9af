//! The website renderer: [`Inventory`] in, one static HTML document out.
//!
//! [`render`] is a pure function — same inventory and shop config always
//! produce byte-identical output, with items appearing in inventory order.
//! All user-supplied text is escaped before it reaches the document.
//!
//! [`write_site`] hashes the rendered output and skips the write when the
//! file on disk already matches, so "save and regenerate" after every menu
//! action stays cheap.

mod template;

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use craftstall_shared::{CraftstallError, Inventory, InventoryItem, Result, ShopConfig};

use template::PageFields;

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the complete storefront document.
pub fn render(inventory: &Inventory, shop: &ShopConfig) -> String {
    let products_html = render_products(inventory);
    template::page(&PageFields {
        name: &escape_html(&shop.name),
        tagline: &escape_html(&shop.tagline),
        owner: &escape_html(&shop.owner),
        contact_email: &escape_html(&shop.contact_email),
        products_html: &products_html,
    })
}

/// Render the products grid: one card per item, or the coming-soon
/// placeholder for an empty inventory.
fn render_products(inventory: &Inventory) -> String {
    if inventory.is_empty() {
        return r#"
                <div class="no-products">
                    <p>New items coming soon! Check back later.</p>
                </div>
"#
        .to_string();
    }

    let mut html = String::new();
    for item in &inventory.items {
        html.push_str(&render_card(item));
    }
    html
}

/// Render one product card.
fn render_card(item: &InventoryItem) -> String {
    let title = escape_html(&item.title);
    let description = escape_html(&item.description);

    let sold_class = if item.sold { " sold" } else { "" };
    let sold_badge = if item.sold {
        r#"<span class="sold-badge">SOLD</span>"#
    } else {
        ""
    };

    // A dangling image reference degrades to a broken <img>, never an error.
    let image_html = match &item.image {
        Some(filename) => {
            let src = escape_html(filename);
            format!(r#"<img src="images/{src}" alt="{title}">"#)
        }
        None => r#"<div class="no-image">No Image</div>"#.to_string(),
    };

    format!(
        r#"
                <div class="product-card{sold_class}">
                    <div class="product-image">
                        {image_html}
                        {sold_badge}
                    </div>
                    <div class="product-info">
                        <h3>{title}</h3>
                        <p>{description}</p>
                        <span class="price">{price}</span>
                    </div>
                </div>
"#,
        price = format_price(item.price),
    )
}

/// Format a price for display, always two decimals: `$7.50`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Escape text for safe interpolation into HTML content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Write the rendered document to `path`.
///
/// Returns `true` when the file was written, `false` when the on-disk
/// content already matched and the write was skipped.
pub fn write_site(path: &Path, html: &str) -> Result<bool> {
    let new_hash = content_hash(html.as_bytes());

    if let Ok(existing) = fs::read(path) {
        if content_hash(&existing) == new_hash {
            debug!(?path, "site unchanged, skipping write");
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CraftstallError::io(parent, e))?;
        }
    }
    fs::write(path, html).map_err(|e| CraftstallError::io(path, e))?;
    info!(?path, bytes = html.len(), "site written");
    Ok(true)
}

/// Hex SHA-256 of the rendered document.
fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftstall_shared::ItemId;

    fn item(title: &str, price: f64, image: Option<&str>, sold: bool) -> InventoryItem {
        InventoryItem {
            id: ItemId::generate(),
            title: title.into(),
            description: format!("{title} description"),
            price,
            image: image.map(String::from),
            sold,
        }
    }

    fn sample_inventory() -> Inventory {
        Inventory {
            items: vec![
                item("Wire Dragon", 7.5, Some("dragon.png"), false),
                item("Bead Owl", 4.0, None, true),
            ],
            google_drive_folder_id: String::new(),
        }
    }

    fn test_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("craftstall_site_{}.html", ItemId::generate()))
    }

    #[test]
    fn render_is_deterministic() {
        let inventory = sample_inventory();
        let shop = ShopConfig::default();
        assert_eq!(render(&inventory, &shop), render(&inventory, &shop));
    }

    #[test]
    fn cards_follow_inventory_order() {
        let html = render(&sample_inventory(), &ShopConfig::default());
        let dragon = html.find("Wire Dragon").expect("dragon present");
        let owl = html.find("Bead Owl").expect("owl present");
        assert!(dragon < owl);
    }

    #[test]
    fn sold_badge_only_on_sold_items() {
        let mut inventory = sample_inventory();
        let html = render(&inventory, &ShopConfig::default());
        assert_eq!(html.matches("sold-badge").count(), 2); // CSS rule + one badge

        inventory.items[1].sold = false;
        let html = render(&inventory, &ShopConfig::default());
        assert_eq!(html.matches("sold-badge").count(), 1); // CSS rule only
    }

    #[test]
    fn image_and_placeholder_rendering() {
        let html = render(&sample_inventory(), &ShopConfig::default());
        assert!(html.contains(r#"<img src="images/dragon.png" alt="Wire Dragon">"#));
        assert!(html.contains(r#"<div class="no-image">No Image</div>"#));
    }

    #[test]
    fn prices_always_show_two_decimals() {
        let html = render(&sample_inventory(), &ShopConfig::default());
        assert!(html.contains("$7.50"));
        assert!(html.contains("$4.00"));
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(12.345), "$12.35");
    }

    #[test]
    fn empty_inventory_renders_placeholder() {
        let html = render(&Inventory::default(), &ShopConfig::default());
        assert!(html.contains("New items coming soon"));
        assert!(!html.contains(r#"<div class="product-card"#));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut inventory = Inventory::default();
        inventory.items.push(InventoryItem {
            id: ItemId::generate(),
            title: r#"<script>alert("x")</script>"#.into(),
            description: "cats & dogs".into(),
            price: 1.0,
            image: Some(r#"a"b.png"#.into()),
            sold: false,
        });
        let html = render(&inventory, &ShopConfig::default());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("cats &amp; dogs"));
        assert!(html.contains("a&quot;b.png"));
    }

    #[test]
    fn removed_item_absent_from_render() {
        let mut inventory = sample_inventory();
        inventory.items.remove(0);
        let html = render(&inventory, &ShopConfig::default());
        assert!(!html.contains("Wire Dragon"));
        assert!(html.contains("Bead Owl"));
    }

    #[test]
    fn write_site_skips_unchanged_content() {
        let path = test_path();
        let html = render(&sample_inventory(), &ShopConfig::default());

        assert!(write_site(&path, &html).expect("first write"));
        assert!(!write_site(&path, &html).expect("second write"));

        let other = render(&Inventory::default(), &ShopConfig::default());
        assert!(write_site(&path, &other).expect("changed write"));
        assert_eq!(fs::read_to_string(&path).expect("read back"), other);
    }
}
