//! Drawing primitives for the flyer and icon.
//!
//! Geometry is split from pixel-pushing: the point/mask functions are pure
//! and unit-tested, the `stamp_*`/`draw_*` functions rasterize their output
//! onto any `imageproc` canvas.

use image::Rgb;
use imageproc::drawing::{Canvas, draw_filled_circle_mut};

// ---------------------------------------------------------------------------
// Geometry (pure)
// ---------------------------------------------------------------------------

/// Linear interpolation between two colors, `t` in `[0, 1]`.
pub fn gradient_color(top: Rgb<u8>, bottom: Rgb<u8>, t: f32) -> Rgb<u8> {
    let lerp = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
    Rgb([
        lerp(top.0[0], bottom.0[0]),
        lerp(top.0[1], bottom.0[1]),
        lerp(top.0[2], bottom.0[2]),
    ])
}

/// Points of a wavy doodle line: a straight run of `length` unit steps at
/// `angle_deg`, displaced sideways by a sine wave.
pub fn doodle_points(start_x: f32, start_y: f32, length: f32, angle_deg: f32) -> Vec<(f32, f32)> {
    let angle = angle_deg.to_radians();
    let (sin_a, cos_a) = angle.sin_cos();
    let steps = length.max(0.0) as usize;

    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        let wave = (i as f32 * 0.15).sin() * 8.0;
        let x = start_x + i as f32 * cos_a + wave * sin_a;
        let y = start_y + i as f32 * sin_a - wave * cos_a;
        points.push((x, y));
    }
    points
}

/// Points of an arithmetic spiral: two full turns, radius growing linearly
/// from zero to `max_radius`, sampled every five degrees.
pub fn spiral_points(cx: f32, cy: f32, max_radius: f32) -> Vec<(f32, f32)> {
    let mut points = Vec::with_capacity(144);
    for deg in (0..720).step_by(5) {
        let angle = (deg as f32).to_radians();
        let radius = deg as f32 / 720.0 * max_radius;
        points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
    }
    points
}

/// Points along a circular arc from `start_deg` to `end_deg`, sampled every
/// two degrees.
pub fn arc_points(
    cx: f32,
    cy: f32,
    radius: f32,
    start_deg: f32,
    end_deg: f32,
) -> Vec<(f32, f32)> {
    let steps = ((end_deg - start_deg).abs() / 2.0).max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let deg = start_deg + (end_deg - start_deg) * i as f32 / steps as f32;
        let angle = deg.to_radians();
        points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
    }
    points
}

/// One arc of a loopy border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub start_deg: f32,
    pub end_deg: f32,
}

/// The arcs of a loopy decorative border: `loops` upward bumps along the top
/// edge and `loops` downward bumps along the bottom edge of the given box.
pub fn loopy_border_arcs(x1: f32, y1: f32, x2: f32, y2: f32, loops: usize) -> Vec<ArcSpec> {
    let radius = 15.0;
    let span = x2 - x1;
    let mut arcs = Vec::with_capacity(loops * 2);
    for i in 0..loops {
        let cx = x1 + span * i as f32 / loops as f32 + span / loops as f32 / 2.0;
        arcs.push(ArcSpec {
            cx,
            cy: y1,
            radius,
            start_deg: 180.0,
            end_deg: 360.0,
        });
    }
    for i in 0..loops {
        let cx = x1 + span * i as f32 / loops as f32 + span / loops as f32 / 2.0;
        arcs.push(ArcSpec {
            cx,
            cy: y2,
            radius,
            start_deg: 0.0,
            end_deg: 180.0,
        });
    }
    arcs
}

/// Vertices of a five-pointed star: ten points alternating between the outer
/// radius (`size * 0.5`) and the inner radius (`size * 0.25`), starting at
/// the top.
pub fn star_points(cx: f32, cy: f32, size: f32) -> Vec<(f32, f32)> {
    let mut points = Vec::with_capacity(10);
    for i in 0..10 {
        let angle = ((i * 36) as f32 - 90.0).to_radians();
        let r = if i % 2 == 0 { size * 0.5 } else { size * 0.25 };
        points.push((cx + r * angle.cos(), cy + r * angle.sin()));
    }
    points
}

/// Centers of the six petals of a flower, evenly spaced around the middle.
pub fn petal_centers(cx: f32, cy: f32, size: f32) -> Vec<(f32, f32)> {
    (0..6)
        .map(|i| {
            let angle = ((i * 60) as f32).to_radians();
            (
                cx + angle.cos() * size * 0.25,
                cy + angle.sin() * size * 0.25,
            )
        })
        .collect()
}

/// Whether `(x, y)` falls inside a rounded rectangle spanning
/// `(x0, y0)..=(x1, y1)` with the given corner radius.
pub fn rounded_rect_contains(x: i32, y: i32, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) -> bool {
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    let r = radius.min((x1 - x0) / 2).min((y1 - y0) / 2).max(0);

    // Distance check only applies inside the four corner squares.
    let cx = if x < x0 + r {
        x0 + r
    } else if x > x1 - r {
        x1 - r
    } else {
        return true;
    };
    let cy = if y < y0 + r {
        y0 + r
    } else if y > y1 - r {
        y1 - r
    } else {
        return true;
    };

    let dx = (x - cx) as i64;
    let dy = (y - cy) as i64;
    dx * dx + dy * dy <= (r as i64) * (r as i64)
}

// ---------------------------------------------------------------------------
// Rasterization
// ---------------------------------------------------------------------------

/// Stamp a polyline onto the canvas by drawing a filled disc at every
/// sampled point; `thickness` is the disc diameter.
pub fn stamp_polyline<C>(canvas: &mut C, points: &[(f32, f32)], color: C::Pixel, thickness: i32)
where
    C: Canvas,
    C::Pixel: Copy,
{
    let radius = (thickness / 2).max(1);
    for &(x, y) in points {
        draw_filled_circle_mut(canvas, (x.round() as i32, y.round() as i32), radius, color);
    }
}

/// Stamp a loopy border.
pub fn stamp_loopy_border<C>(canvas: &mut C, arcs: &[ArcSpec], color: C::Pixel, thickness: i32)
where
    C: Canvas,
    C::Pixel: Copy,
{
    for arc in arcs {
        let points = arc_points(arc.cx, arc.cy, arc.radius, arc.start_deg, arc.end_deg);
        stamp_polyline(canvas, &points, color, thickness);
    }
}

/// Fill a rounded rectangle spanning `(x0, y0)..=(x1, y1)`.
pub fn draw_rounded_rect_mut<C>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: C::Pixel,
) where
    C: Canvas,
    C::Pixel: Copy,
{
    let (width, height) = canvas.dimensions();
    for y in y0.max(0)..=y1.min(height as i32 - 1) {
        for x in x0.max(0)..=x1.min(width as i32 - 1) {
            if rounded_rect_contains(x, y, x0, y0, x1, y1, radius) {
                canvas.draw_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Fill a rounded rectangle and give it an outline by drawing the outline
/// color first and insetting the fill.
pub fn draw_outlined_rounded_rect_mut<C>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    fill: C::Pixel,
    outline: C::Pixel,
    outline_width: i32,
) where
    C: Canvas,
    C::Pixel: Copy,
{
    draw_rounded_rect_mut(canvas, x0, y0, x1, y1, radius, outline);
    let w = outline_width.max(0);
    draw_rounded_rect_mut(
        canvas,
        x0 + w,
        y0 + w,
        x1 - w,
        y1 - w,
        (radius - w).max(0),
        fill,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: (f32, f32), b: (f32, f32)) -> f32 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    #[test]
    fn gradient_color_hits_endpoints() {
        let top = Rgb([180, 120, 210]);
        let bottom = Rgb([100, 50, 140]);
        assert_eq!(gradient_color(top, bottom, 0.0), top);
        assert_eq!(gradient_color(top, bottom, 1.0), bottom);
        assert_eq!(gradient_color(top, bottom, 0.5), Rgb([140, 85, 175]));
    }

    #[test]
    fn doodle_line_has_one_point_per_step() {
        let points = doodle_points(10.0, 20.0, 80.0, 90.0);
        assert_eq!(points.len(), 80);
        // Vertical line: x stays within the wave amplitude of the start.
        for (x, _) in &points {
            assert!((x - 10.0).abs() <= 8.5);
        }
        // End is roughly `length` away along the direction of travel.
        assert!((points.last().unwrap().1 - 20.0) > 70.0);
    }

    #[test]
    fn spiral_radius_grows_monotonically() {
        let points = spiral_points(0.0, 0.0, 60.0);
        assert_eq!(points.len(), 144);
        let radii: Vec<f32> = points.iter().map(|&p| dist(p, (0.0, 0.0))).collect();
        for pair in radii.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(radii.last().unwrap() <= &60.0);
    }

    #[test]
    fn loopy_border_has_arcs_on_both_edges() {
        let arcs = loopy_border_arcs(100.0, 150.0, 1100.0, 380.0, 18);
        assert_eq!(arcs.len(), 36);
        assert!(arcs[..18].iter().all(|a| a.cy == 150.0));
        assert!(arcs[18..].iter().all(|a| a.cy == 380.0));
    }

    #[test]
    fn star_alternates_outer_and_inner_radii() {
        let points = star_points(0.0, 0.0, 100.0);
        assert_eq!(points.len(), 10);
        for (i, &p) in points.iter().enumerate() {
            let r = dist(p, (0.0, 0.0));
            let expected = if i % 2 == 0 { 50.0 } else { 25.0 };
            assert!((r - expected).abs() < 0.01, "vertex {i}: r={r}");
        }
    }

    #[test]
    fn flower_has_six_equidistant_petals() {
        let centers = petal_centers(10.0, 10.0, 80.0);
        assert_eq!(centers.len(), 6);
        for &c in &centers {
            assert!((dist(c, (10.0, 10.0)) - 20.0).abs() < 0.01);
        }
    }

    #[test]
    fn rounded_rect_mask_clips_corners_only() {
        // 100x100 box with radius 20.
        assert!(rounded_rect_contains(50, 50, 0, 0, 100, 100, 20));
        assert!(rounded_rect_contains(50, 0, 0, 0, 100, 100, 20));
        assert!(rounded_rect_contains(0, 50, 0, 0, 100, 100, 20));
        // Extreme corner is outside the corner circle.
        assert!(!rounded_rect_contains(0, 0, 0, 0, 100, 100, 20));
        assert!(!rounded_rect_contains(100, 100, 0, 0, 100, 100, 20));
        // Out of the box entirely.
        assert!(!rounded_rect_contains(101, 50, 0, 0, 100, 100, 20));
    }

    #[test]
    fn arc_points_cover_the_requested_sweep() {
        let points = arc_points(0.0, 0.0, 10.0, 0.0, 180.0);
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert!((first.0 - 10.0).abs() < 0.01 && first.1.abs() < 0.01);
        assert!((last.0 + 10.0).abs() < 0.01 && last.1.abs() < 0.01);
    }

    #[test]
    fn rounded_rect_draw_respects_mask() {
        let mut img = image::RgbImage::from_pixel(60, 60, Rgb([0, 0, 0]));
        draw_rounded_rect_mut(&mut img, 10, 10, 50, 50, 12, Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(30, 30), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(10, 10), &Rgb([0, 0, 0])); // clipped corner
        assert_eq!(img.get_pixel(5, 30), &Rgb([0, 0, 0])); // outside box
    }
}
