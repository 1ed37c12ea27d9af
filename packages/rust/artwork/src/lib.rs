//! Procedural artwork for the shop: the promotional flyer and the app icon.
//!
//! Geometry helpers live in [`primitives`] as pure functions; [`flyer`] and
//! [`icon`] compose them onto `image` canvases. Fonts are resolved at
//! runtime from config or common system locations ([`fonts`]).

pub mod fonts;
pub mod icon;
pub mod palette;
pub mod primitives;

mod flyer;

pub use flyer::{FLYER_HEIGHT, FLYER_WIDTH, compose_flyer, generate_flyer};
pub use icon::{ICON_SIZES, compose_icon_frame, generate_icon};
