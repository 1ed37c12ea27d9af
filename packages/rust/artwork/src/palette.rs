//! The shop's print palette — the same purple/teal/pink/yellow set the
//! website stylesheet uses.

use image::{Rgb, Rgba};

pub const PURPLE: Rgb<u8> = Rgb([155, 89, 182]);
pub const PURPLE_DARK: Rgb<u8> = Rgb([125, 60, 152]);
pub const TEAL: Rgb<u8> = Rgb([26, 188, 156]);
pub const TEAL_DARK: Rgb<u8> = Rgb([22, 160, 133]);
pub const PINK: Rgb<u8> = Rgb([255, 107, 157]);
pub const PINK_LIGHT: Rgb<u8> = Rgb([255, 184, 208]);
pub const YELLOW: Rgb<u8> = Rgb([255, 220, 80]);
pub const CREAM: Rgb<u8> = Rgb([255, 249, 245]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Gradient endpoints for the flyer background.
pub const GRADIENT_TOP: Rgb<u8> = Rgb([180, 120, 210]);
pub const GRADIENT_BOTTOM: Rgb<u8> = Rgb([100, 50, 140]);

/// Title drop-shadow color.
pub const TITLE_SHADOW: Rgb<u8> = Rgb([60, 30, 80]);

// Icon band colors (RGBA canvas).
pub const ICON_YELLOW: Rgba<u8> = Rgba([255, 220, 80, 255]);
pub const ICON_BLUE: Rgba<u8> = Rgba([52, 152, 219, 255]);
pub const ICON_PURPLE: Rgba<u8> = Rgba([125, 60, 152, 255]);
pub const ICON_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
