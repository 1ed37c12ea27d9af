//! Flyer composition: a letter-size (150 DPI) promotional sheet drawn from
//! scratch — gradient background, doodle decorations, shop text, and a QR
//! code pointing at the published site.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::RgbImage;
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut, draw_text_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use qrcode::{Color as QrColor, EcLevel, QrCode};
use tracing::info;

use craftstall_shared::{ArtworkConfig, CraftstallError, Result, ShopConfig};

use crate::fonts::{self, centered_x, measure_text};
use crate::palette::*;
use crate::primitives::{
    doodle_points, draw_outlined_rounded_rect_mut, gradient_color, loopy_border_arcs,
    petal_centers, spiral_points, stamp_loopy_border, stamp_polyline, star_points,
};

/// 8.5 inches at 150 DPI.
pub const FLYER_WIDTH: u32 = 1275;
/// 11 inches at 150 DPI.
pub const FLYER_HEIGHT: u32 = 1650;

/// QR quiet-zone width, in modules, on each side.
const QR_BORDER_MODULES: usize = 2;

// ---------------------------------------------------------------------------
// QR code
// ---------------------------------------------------------------------------

/// Encode `url` as a square boolean matrix (true = dark module).
fn qr_matrix(url: &str) -> Result<(usize, Vec<bool>)> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::H)
        .map_err(|e| CraftstallError::Artwork(format!("QR encoding failed: {e}")))?;
    let width = code.width();
    let dark = code
        .to_colors()
        .into_iter()
        .map(|c| c == QrColor::Dark)
        .collect();
    Ok((width, dark))
}

/// Pixel size of one module and the centering offset for painting a QR of
/// `total_modules` (data + quiet zone) into a `box_px` square.
fn qr_layout(box_px: u32, total_modules: usize) -> (u32, u32) {
    let module_px = (box_px / total_modules as u32).max(1);
    let used = module_px * total_modules as u32;
    let offset = box_px.saturating_sub(used) / 2;
    (module_px, offset)
}

/// Paint the QR matrix into the square at `(x, y)`, sized `box_px`.
fn paint_qr(img: &mut RgbImage, x: i32, y: i32, box_px: u32, width: usize, dark: &[bool]) {
    let total = width + 2 * QR_BORDER_MODULES;
    let (module_px, offset) = qr_layout(box_px, total);

    for row in 0..width {
        for col in 0..width {
            if !dark[row * width + col] {
                continue;
            }
            let px = x + offset as i32 + ((col + QR_BORDER_MODULES) as u32 * module_px) as i32;
            let py = y + offset as i32 + ((row + QR_BORDER_MODULES) as u32 * module_px) as i32;
            draw_filled_rect_mut(
                img,
                Rect::at(px, py).of_size(module_px, module_px),
                PURPLE_DARK,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Decorations
// ---------------------------------------------------------------------------

fn draw_star(img: &mut RgbImage, cx: f32, cy: f32, size: f32, color: image::Rgb<u8>) {
    let vertices: Vec<Point<i32>> = star_points(cx, cy, size)
        .into_iter()
        .map(|(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect();
    draw_polygon_mut(img, &vertices, color);
}

fn draw_flower(img: &mut RgbImage, cx: f32, cy: f32, size: f32) {
    let petal_r = (size * 0.22).round() as i32;
    for (px, py) in petal_centers(cx, cy, size) {
        draw_filled_circle_mut(
            img,
            (px.round() as i32, py.round() as i32),
            petal_r,
            PINK_LIGHT,
        );
    }
    draw_filled_circle_mut(
        img,
        (cx.round() as i32, cy.round() as i32),
        (size * 0.15).round() as i32,
        YELLOW,
    );
}

/// Shorthand for horizontally centered text.
fn draw_centered(
    img: &mut RgbImage,
    font: &FontVec,
    scale: PxScale,
    y: i32,
    color: image::Rgb<u8>,
    text: &str,
) {
    let x = centered_x(FLYER_WIDTH, measure_text(font, scale, text));
    draw_text_mut(img, color, x, y, scale, font, text);
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Draw the complete flyer.
pub fn compose_flyer(shop: &ShopConfig, font: &FontVec) -> Result<RgbImage> {
    let mut img = RgbImage::new(FLYER_WIDTH, FLYER_HEIGHT);
    let w = FLYER_WIDTH as f32;
    let h = FLYER_HEIGHT as f32;

    // Background: purple gradient, lighter at the top.
    for y in 0..FLYER_HEIGHT {
        let color = gradient_color(GRADIENT_TOP, GRADIENT_BOTTOM, y as f32 / h);
        for x in 0..FLYER_WIDTH {
            img.put_pixel(x, y, color);
        }
    }

    // Corner spirals.
    for (cx, cy, color) in [
        (80.0, 80.0, YELLOW),
        (w - 80.0, 80.0, PINK),
        (80.0, h - 80.0, PINK),
        (w - 80.0, h - 80.0, YELLOW),
    ] {
        stamp_polyline(&mut img, &spiral_points(cx, cy, 60.0), color, 3);
    }

    // A row of wavy doodle lines under the top edge.
    for i in 0..5 {
        let points = doodle_points(30.0 + i as f32 * 250.0, 140.0, 80.0, 90.0);
        stamp_polyline(&mut img, &points, TEAL, 3);
    }

    // Margin decorations.
    draw_star(&mut img, 120.0, 420.0, 40.0, YELLOW);
    draw_star(&mut img, w - 120.0, 430.0, 32.0, PINK_LIGHT);
    draw_flower(&mut img, 150.0, 1060.0, 70.0);

    // Header block framed by a loopy border.
    let header_y = 180;
    let arcs = loopy_border_arcs(
        100.0,
        header_y as f32 - 30.0,
        w - 100.0,
        header_y as f32 + 200.0,
        18,
    );
    stamp_loopy_border(&mut img, &arcs, YELLOW, 3);

    // Title with a drop shadow.
    let title_scale = PxScale::from(95.0);
    let title_x = centered_x(FLYER_WIDTH, measure_text(font, title_scale, &shop.name));
    draw_text_mut(
        &mut img,
        TITLE_SHADOW,
        title_x + 4,
        header_y + 24,
        title_scale,
        font,
        &shop.name,
    );
    draw_text_mut(
        &mut img,
        WHITE,
        title_x,
        header_y + 20,
        title_scale,
        font,
        &shop.name,
    );

    draw_centered(
        &mut img,
        font,
        PxScale::from(38.0),
        header_y + 160,
        PINK_LIGHT,
        &shop.tagline,
    );

    // Price banner in a teal bubble.
    let info_y = 500;
    let price_scale = PxScale::from(52.0);
    let price_width = measure_text(font, price_scale, &shop.price_range);
    let price_x = centered_x(FLYER_WIDTH, price_width);
    draw_outlined_rounded_rect_mut(
        &mut img,
        price_x - 40,
        info_y - 15,
        price_x + price_width.round() as i32 + 40,
        info_y + 70,
        35,
        TEAL,
        TEAL_DARK,
        3,
    );
    draw_text_mut(
        &mut img,
        WHITE,
        price_x,
        info_y,
        price_scale,
        font,
        &shop.price_range,
    );

    // Highlight bullets.
    let body_scale = PxScale::from(32.0);
    let bullet_colors = [PINK, TEAL, YELLOW];
    let desc_y = info_y + 120;
    for (i, line) in shop.highlights.iter().enumerate() {
        let line_x = centered_x(FLYER_WIDTH, measure_text(font, body_scale, line));
        let line_y = desc_y + i as i32 * 55;
        draw_filled_circle_mut(
            &mut img,
            (line_x - 22, line_y + 17),
            7,
            bullet_colors[i % bullet_colors.len()],
        );
        draw_text_mut(&mut img, WHITE, line_x, line_y, body_scale, font, line);
    }

    // How-to-order block.
    let order_y = 950;
    draw_centered(
        &mut img,
        font,
        PxScale::from(36.0),
        order_y + 20,
        YELLOW,
        "How to Order",
    );
    for (i, line) in shop.order_lines.iter().enumerate() {
        draw_centered(
            &mut img,
            font,
            body_scale,
            order_y + 75 + i as i32 * 45,
            CREAM,
            line,
        );
    }

    // QR code in a white rounded frame.
    let qr_y = 1230;
    let qr_size: u32 = 220;
    let qr_x = ((FLYER_WIDTH - qr_size) / 2) as i32;
    let frame_padding = 25;
    draw_outlined_rounded_rect_mut(
        &mut img,
        qr_x - frame_padding,
        qr_y - frame_padding,
        qr_x + qr_size as i32 + frame_padding,
        qr_y + qr_size as i32 + frame_padding,
        20,
        WHITE,
        PURPLE,
        4,
    );
    let (qr_width, dark) = qr_matrix(&shop.site_url)?;
    paint_qr(&mut img, qr_x, qr_y, qr_size, qr_width, &dark);

    draw_centered(
        &mut img,
        font,
        body_scale,
        qr_y + qr_size as i32 + 35,
        PINK_LIGHT,
        "Scan to visit our shop!",
    );

    Ok(img)
}

/// Resolve the font, compose the flyer, and save it as a PNG.
pub fn generate_flyer(shop: &ShopConfig, artwork: &ArtworkConfig, out_path: &Path) -> Result<()> {
    let font = fonts::resolve_font(artwork)?;
    let img = compose_flyer(shop, &font)?;
    img.save(out_path)
        .map_err(|e| CraftstallError::Artwork(format!("saving flyer failed: {e}")))?;
    info!(?out_path, width = FLYER_WIDTH, height = FLYER_HEIGHT, "flyer written");
    Ok(())
}
