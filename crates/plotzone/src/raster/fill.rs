//! Scanline polygon fill sampled at pixel centres.
//!
//! Conventions
//! - Pixel `(x, y)` is inside iff its centre `(x + 0.5, y + 0.5)` is inside
//!   the closed loop under the even-odd rule.
//! - Rows use the half-open rule `lo.y <= yc < hi.y` per edge and spans are
//!   half-open `[x_in, x_out)`. Two fills sharing an edge therefore never
//!   claim the same pixel, and together they miss none.
//! - Each edge is evaluated from its lower endpoint, so a shared edge yields
//!   bit-identical crossings in both fills.

use nalgebra::Vector2;

use super::mask::Mask;

#[inline]
fn crossing(a: Vector2<f64>, b: Vector2<f64>, yc: f64) -> Option<f64> {
    let (lo, hi) = if a.y <= b.y { (a, b) } else { (b, a) };
    if lo.y <= yc && yc < hi.y {
        Some(lo.x + (yc - lo.y) * (hi.x - lo.x) / (hi.y - lo.y))
    } else {
        None
    }
}

/// First pixel whose centre is `>= x`, clamped to `[0, limit]`.
#[inline]
fn first_center_at_or_after(x: f64, limit: usize) -> usize {
    (x - 0.5).ceil().clamp(0.0, limit as f64) as usize
}

/// Rasterize the closed loop `points` into a `width × height` mask.
///
/// Fewer than 3 points yield an empty mask.
pub fn fill_polygon(width: usize, height: usize, points: &[Vector2<f64>]) -> Mask {
    let mut mask = Mask::new(width, height);
    fill_into(&mut mask, points);
    mask
}

/// Rasterize `points` into an existing mask (set-only).
pub fn fill_into(mask: &mut Mask, points: &[Vector2<f64>]) {
    let n = points.len();
    if n < 3 || mask.width == 0 || mask.height == 0 {
        return;
    }
    let (min_y, max_y) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });
    let y0 = first_center_at_or_after(min_y, mask.height);
    let y1 = first_center_at_or_after(max_y, mask.height);

    let mut xs: Vec<f64> = Vec::with_capacity(n);
    for y in y0..y1 {
        let yc = y as f64 + 0.5;
        xs.clear();
        for i in 0..n {
            if let Some(x) = crossing(points[i], points[(i + 1) % n], yc) {
                xs.push(x);
            }
        }
        xs.sort_by(f64::total_cmp);
        for pair in xs.chunks_exact(2) {
            let x0 = first_center_at_or_after(pair[0], mask.width);
            let x1 = first_center_at_or_after(pair[1], mask.width);
            if x0 < x1 {
                mask.set_span(y, x0, x1);
            }
        }
    }
}
