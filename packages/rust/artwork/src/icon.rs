//! Application icon: a rounded square with yellow/blue/purple bands, packed
//! into a single multi-size `.ico`.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use tracing::info;

use craftstall_shared::{CraftstallError, Result};

use crate::palette::{ICON_BLUE, ICON_PURPLE, ICON_WHITE, ICON_YELLOW};
use crate::primitives::draw_rounded_rect_mut;

/// Frame sizes packed into the icon, smallest first.
pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Smallest size that gets the three-dot detail.
const DOT_MIN_SIZE: u32 = 48;

/// Draw one icon frame at `size` pixels square.
pub fn compose_icon_frame(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let s = size as i32;
    let padding = s / 8;

    // Base rounded square.
    draw_rounded_rect_mut(
        &mut img,
        padding,
        padding,
        s - padding - 1,
        s - padding - 1,
        s / 4,
        ICON_BLUE,
    );

    // Yellow band on top, purple band on the bottom.
    let third = (s - 2 * padding) / 3;
    draw_rounded_rect_mut(
        &mut img,
        padding,
        padding,
        s - padding - 1,
        padding + third,
        s / 6,
        ICON_YELLOW,
    );
    draw_rounded_rect_mut(
        &mut img,
        padding,
        s - padding - third - 1,
        s - padding - 1,
        s - padding - 1,
        s / 6,
        ICON_PURPLE,
    );

    // Three dots across the middle; too small to read below 48px.
    if size >= DOT_MIN_SIZE {
        let center_y = s / 2;
        let dot_r = s / 10;
        for cx in [s / 3, s / 2, 2 * s / 3] {
            draw_filled_circle_mut(&mut img, (cx, center_y), dot_r, ICON_WHITE);
        }
    }

    img
}

/// Compose all frames and write the multi-size `.ico`.
pub fn generate_icon(out_path: &Path) -> Result<()> {
    let mut pngs: Vec<(u32, Vec<u8>)> = Vec::with_capacity(ICON_SIZES.len());
    for &size in &ICON_SIZES {
        let frame = compose_icon_frame(size);
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf)
            .write_image(frame.as_raw(), size, size, ExtendedColorType::Rgba8)
            .map_err(|e| CraftstallError::Artwork(format!("encoding {size}px frame: {e}")))?;
        pngs.push((size, buf));
    }

    let frames = pngs
        .iter()
        .map(|(size, buf)| {
            IcoFrame::with_encoded(buf.as_slice(), *size, *size, ExtendedColorType::Rgba8)
                .map_err(|e| CraftstallError::Artwork(format!("building {size}px frame: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let file = File::create(out_path).map_err(|e| CraftstallError::io(out_path, e))?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .map_err(|e| CraftstallError::Artwork(format!("writing icon: {e}")))?;

    info!(?out_path, frames = ICON_SIZES.len(), "icon written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_have_requested_dimensions() {
        for &size in &ICON_SIZES {
            let frame = compose_icon_frame(size);
            assert_eq!(frame.dimensions(), (size, size));
        }
    }

    #[test]
    fn corners_stay_transparent() {
        for &size in &ICON_SIZES {
            let frame = compose_icon_frame(size);
            assert_eq!(frame.get_pixel(0, 0).0[3], 0, "{size}px top-left");
            assert_eq!(
                frame.get_pixel(size - 1, size - 1).0[3],
                0,
                "{size}px bottom-right"
            );
        }
    }

    #[test]
    fn bands_are_stacked_yellow_blue_purple() {
        let frame = compose_icon_frame(64);
        // Left edge of each band, clear of the center dots.
        assert_eq!(frame.get_pixel(32, 12), &ICON_YELLOW);
        assert_eq!(frame.get_pixel(10, 32), &ICON_BLUE);
        assert_eq!(frame.get_pixel(32, 52), &ICON_PURPLE);
    }

    #[test]
    fn dots_only_on_large_frames() {
        let large = compose_icon_frame(64);
        assert_eq!(large.get_pixel(32, 32), &ICON_WHITE);

        let small = compose_icon_frame(32);
        assert_eq!(small.get_pixel(16, 16), &ICON_BLUE);
    }

    #[test]
    fn generate_writes_an_ico_file() {
        let path = std::env::temp_dir().join(format!(
            "craftstall_icon_{}.ico",
            craftstall_shared::ItemId::generate()
        ));
        generate_icon(&path).expect("generate icon");
        let bytes = std::fs::read(&path).expect("read icon");
        // ICO header: reserved 0, type 1, six images.
        assert_eq!(&bytes[..6], &[0u8, 0, 1, 0, 6, 0]);
    }
}
