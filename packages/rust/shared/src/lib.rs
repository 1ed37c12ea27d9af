//! Shared types, error model, and configuration for Craftstall.
//!
//! This crate is the foundation depended on by all other Craftstall crates.
//! It provides:
//! - [`CraftstallError`] — the unified error type
//! - Domain types ([`Inventory`], [`InventoryItem`], [`ItemId`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ArtworkConfig, PathsConfig, ResolvedPaths, ShopConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{CraftstallError, Result};
pub use types::{ITEM_ID_LEN, Inventory, InventoryItem, ItemId};
