//! Application configuration for Craftstall.
//!
//! User config lives at `~/.craftstall/craftstall.toml`.
//! Every field has a default so a missing file means a working setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CraftstallError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "craftstall.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".craftstall";

// ---------------------------------------------------------------------------
// Config structs (matching craftstall.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shop identity and branding.
    #[serde(default)]
    pub shop: ShopConfig,

    /// File locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Flyer/icon generation settings.
    #[serde(default)]
    pub artwork: ArtworkConfig,
}

/// `[shop]` section — the text that ends up on the website and the flyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Shop name, used as the site title and flyer headline.
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// One-line tagline shown under the name.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// The maker's first name, used in the welcome blurb.
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Contact email for orders.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,

    /// Public URL of the published site; the flyer QR code points here.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Price range line for the flyer banner.
    #[serde(default = "default_price_range")]
    pub price_range: String,

    /// Bullet lines for the flyer body.
    #[serde(default = "default_highlights")]
    pub highlights: Vec<String>,

    /// "How to order" lines for the flyer.
    #[serde(default = "default_order_lines")]
    pub order_lines: Vec<String>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            tagline: default_tagline(),
            owner: default_owner(),
            contact_email: default_contact_email(),
            site_url: default_site_url(),
            price_range: default_price_range(),
            highlights: default_highlights(),
            order_lines: default_order_lines(),
        }
    }
}

fn default_shop_name() -> String {
    "Craftstall".into()
}
fn default_tagline() -> String {
    "Handmade with love".into()
}
fn default_owner() -> String {
    "the maker".into()
}
fn default_contact_email() -> String {
    "orders@example.com".into()
}
fn default_site_url() -> String {
    "https://example.com/shop".into()
}
fn default_price_range() -> String {
    "$2 - $10".into()
}
fn default_highlights() -> Vec<String> {
    vec![
        "Unique handcrafted creations".into(),
        "Animals, flowers, stars & more!".into(),
        "Perfect gifts for friends & family".into(),
    ]
}
fn default_order_lines() -> Vec<String> {
    vec!["Local pickup only".into(), "Pay with cash".into()]
}

/// `[paths]` section. Relative paths are resolved against the working
/// directory at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// The inventory JSON document.
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    /// The generated website.
    #[serde(default = "default_site_file")]
    pub site_file: String,

    /// Directory holding item photos.
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
            site_file: default_site_file(),
            images_dir: default_images_dir(),
        }
    }
}

fn default_inventory_file() -> String {
    "inventory.json".into()
}
fn default_site_file() -> String {
    "index.html".into()
}
fn default_images_dir() -> String {
    "images".into()
}

/// `[artwork]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkConfig {
    /// Output path for the generated flyer PNG.
    #[serde(default = "default_flyer_file")]
    pub flyer_file: String,

    /// Output path for the generated application icon.
    #[serde(default = "default_icon_file")]
    pub icon_file: String,

    /// Explicit TTF/OTF font file to draw flyer text with.
    /// When unset, `font_dirs` are searched for a usable font.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_file: Option<String>,

    /// Directories searched for a font when `font_file` is unset.
    #[serde(default = "default_font_dirs")]
    pub font_dirs: Vec<String>,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            flyer_file: default_flyer_file(),
            icon_file: default_icon_file(),
            font_file: None,
            font_dirs: default_font_dirs(),
        }
    }
}

fn default_flyer_file() -> String {
    "flyer.png".into()
}
fn default_icon_file() -> String {
    "craftstall.ico".into()
}
fn default_font_dirs() -> Vec<String> {
    vec![
        "/usr/share/fonts/truetype/dejavu".into(),
        "/usr/share/fonts/truetype/liberation".into(),
        "/usr/share/fonts/TTF".into(),
        "/Library/Fonts".into(),
        "C:\\Windows\\Fonts".into(),
    ]
}

// ---------------------------------------------------------------------------
// Resolved paths
// ---------------------------------------------------------------------------

/// [`PathsConfig`] with every entry resolved to an absolute location.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub inventory_file: PathBuf,
    pub site_file: PathBuf,
    pub images_dir: PathBuf,
}

impl PathsConfig {
    /// Resolve relative entries against `base` (typically the working dir).
    pub fn resolve(&self, base: &Path) -> ResolvedPaths {
        let join = |s: &str| {
            let p = PathBuf::from(s);
            if p.is_absolute() { p } else { base.join(p) }
        };
        ResolvedPaths {
            inventory_file: join(&self.inventory_file),
            site_file: join(&self.site_file),
            images_dir: join(&self.images_dir),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.craftstall/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CraftstallError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.craftstall/craftstall.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CraftstallError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| CraftstallError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CraftstallError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CraftstallError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CraftstallError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("inventory_file"));
        assert!(toml_str.contains("Craftstall"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.paths.inventory_file, "inventory.json");
        assert_eq!(parsed.shop.price_range, "$2 - $10");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[shop]
name = "Pine & Thread"
owner = "Sam"

[paths]
inventory_file = "/data/shop/inventory.json"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.shop.name, "Pine & Thread");
        assert_eq!(config.shop.tagline, "Handmade with love");
        assert_eq!(config.paths.inventory_file, "/data/shop/inventory.json");
        assert_eq!(config.paths.site_file, "index.html");
    }

    #[test]
    fn paths_resolve_against_base() {
        let paths = PathsConfig::default();
        let resolved = paths.resolve(Path::new("/work/shop"));
        assert_eq!(
            resolved.inventory_file,
            PathBuf::from("/work/shop/inventory.json")
        );
        assert_eq!(resolved.images_dir, PathBuf::from("/work/shop/images"));

        let absolute = PathsConfig {
            inventory_file: "/data/inventory.json".into(),
            ..PathsConfig::default()
        };
        let resolved = absolute.resolve(Path::new("/work/shop"));
        assert_eq!(
            resolved.inventory_file,
            PathBuf::from("/data/inventory.json")
        );
    }
}
