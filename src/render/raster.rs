//! Integer rasterization primitives: Bresenham lines and midpoint circles.

use crate::foundation::core::Rgba8Premul;
use crate::render::canvas::Canvas;

/// Bresenham's line from `(x0, y0)` to `(x1, y1)`, both endpoints inclusive.
///
/// Handles every octant through sign-adjusted steps and a single error accumulator. Sets
/// exactly `max(|dx|, |dy|) + 1` pixels (before clipping).
pub fn draw_line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba8Premul) {
    let (mut x, mut y) = (i64::from(x0), i64::from(y0));
    let (x1, y1) = (i64::from(x1), i64::from(y1));

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        canvas.set(x as i32, y as i32, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Midpoint circle ring of radius `r` around `(cx, cy)`.
///
/// Each step plots the eight octant reflections. `r == 0` plots the center; negative radii
/// plot nothing.
pub fn draw_circle(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, color: Rgba8Premul) {
    if r < 0 {
        return;
    }
    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;

    while x >= y {
        for (px, py) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            canvas.set(cx.saturating_add(px), cy.saturating_add(py), color);
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Solid disk built from concentric rings, radius `r` down to 0.
pub fn fill_disk(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, color: Rgba8Premul) {
    for rr in (0..=r).rev() {
        draw_circle(canvas, cx, cy, rr, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
