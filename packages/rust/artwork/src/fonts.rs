//! Font resolution and text measurement for the flyer.
//!
//! There is no built-in fallback face, so a font file must be found — either
//! configured explicitly or discovered in one of the configured directories.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use tracing::debug;

use craftstall_shared::{ArtworkConfig, CraftstallError, Result};

/// Face names tried, in order, inside each font directory.
const PREFERRED_FACES: &[&str] = &[
    "DejaVuSans.ttf",
    "DejaVuSans-Bold.ttf",
    "LiberationSans-Regular.ttf",
    "Arial.ttf",
    "arial.ttf",
];

/// Load the flyer font from config, or search the configured directories.
pub fn resolve_font(artwork: &ArtworkConfig) -> Result<FontVec> {
    if let Some(file) = &artwork.font_file {
        return load_font(Path::new(file));
    }

    for dir in &artwork.font_dirs {
        let dir = Path::new(dir);
        if !dir.is_dir() {
            continue;
        }
        for face in PREFERRED_FACES {
            let candidate = dir.join(face);
            if candidate.is_file() {
                debug!(?candidate, "using preferred font face");
                return load_font(&candidate);
            }
        }
        if let Some(found) = first_font_in(dir) {
            debug!(?found, "using first discovered font face");
            return load_font(&found);
        }
    }

    Err(CraftstallError::Artwork(
        "no usable font found; set [artwork] font_file in the config".into(),
    ))
}

/// Load and parse a single TTF/OTF file.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path).map_err(|e| CraftstallError::io(path, e))?;
    FontVec::try_from_vec(data)
        .map_err(|_| CraftstallError::Artwork(format!("invalid font file {}", path.display())))
}

/// First `.ttf`/`.otf` in a directory, in name order for determinism.
fn first_font_in(dir: &Path) -> Option<PathBuf> {
    let mut fonts: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf"))
                .unwrap_or(false)
        })
        .collect();
    fonts.sort();
    fonts.into_iter().next()
}

/// Width in pixels of `text` at `scale`, including kerning.
pub fn measure_text(font: &impl Font, scale: PxScale, text: &str) -> f32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0;
    let mut prev = None;
    for c in text.chars() {
        let glyph = scaled.glyph_id(c);
        if let Some(prev) = prev {
            width += scaled.kern(prev, glyph);
        }
        width += scaled.h_advance(glyph);
        prev = Some(glyph);
    }
    width
}

/// Left x coordinate that centers a run of `text_width` pixels on a canvas
/// of `canvas_width` pixels.
pub fn centered_x(canvas_width: u32, text_width: f32) -> i32 {
    ((canvas_width as f32 - text_width) / 2.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_x_splits_the_margin() {
        assert_eq!(centered_x(1000, 400.0), 300);
        assert_eq!(centered_x(100, 100.0), 0);
    }

    #[test]
    fn missing_font_is_reported() {
        let artwork = ArtworkConfig {
            font_file: Some("/nonexistent/path/font.ttf".into()),
            ..ArtworkConfig::default()
        };
        let err = resolve_font(&artwork).expect_err("missing font");
        assert!(matches!(err, CraftstallError::Io { .. }));
    }

    #[test]
    fn empty_dirs_fall_through_to_error() {
        let artwork = ArtworkConfig {
            font_file: None,
            font_dirs: vec!["/nonexistent/fonts".into()],
            ..ArtworkConfig::default()
        };
        let err = resolve_font(&artwork).expect_err("no font dirs");
        assert!(err.to_string().contains("no usable font"));
    }
}
