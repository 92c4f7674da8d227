//! Forward-mapped rotation and scaling of canvases.
//!
//! Both transforms push every source pixel through a matrix and write it at the truncated or
//! rounded destination. There is no resampling: destination pixels no source pixel lands on
//! keep the background color, and the small gaps this leaves at glyph edges are part of the
//! look.

use kurbo::{Affine, Point};

use crate::foundation::core::{Bounds, Rgba8Premul};
use crate::render::canvas::Canvas;

/// Width multiplier for near-vertical rotations so corners are not clipped.
pub const WIDE_FACTOR: f64 = 1.3;

/// Factors closer than this to 1.0 leave the canvas untouched.
pub const SCALE_EPSILON: f64 = 0.001;

/// Whether `degrees` (any sign) falls in `[55, 125)` or `[235, 305)` after normalization.
pub fn is_wide_angle(degrees: i32) -> bool {
    let d = degrees.rem_euclid(360);
    (55..125).contains(&d) || (235..305).contains(&d)
}

/// Rotate about the image midpoint.
///
/// Returns `canvas` itself when `degrees` is a multiple of 360. Otherwise the result is
/// centered on the origin, as tall as the source and as wide (×1.3 for near-vertical angles),
/// pre-filled with `bg`.
pub fn rotate(canvas: Canvas, degrees: i32, bg: Rgba8Premul) -> Canvas {
    let deg = degrees.rem_euclid(360);
    if deg == 0 {
        return canvas;
    }

    let src = canvas.bounds();
    let (w, h) = (src.width() as i32, src.height() as i32);
    let wide = if is_wide_angle(deg) { WIDE_FACTOR } else { 1.0 };
    let out_w = (f64::from(w) * wide).round() as i32;
    let bounds = Bounds::new(-(out_w / 2), -(h / 2), out_w - out_w / 2, h - h / 2);
    let mut out = Canvas::filled(bounds, bg);

    let m = Affine::rotate(f64::from(-deg).to_radians());
    for (x, y, px) in canvas.pixels() {
        let centered = Point::new(
            f64::from(x - src.min_x - w / 2),
            f64::from(y - src.min_y - h / 2),
        );
        let p = m * centered;
        out.set(p.x as i32, p.y as i32, px);
    }
    out
}

/// Uniform scale anchored at the origin.
///
/// Returns `canvas` itself when `|factor - 1| < 0.001` (or the factor is not finite).
/// Negative factors clamp to 0. When magnifying, each source pixel is stamped as a square of
/// side `round(factor / 0.5)` so the sparse forward mapping leaves no holes.
pub fn scale(canvas: Canvas, factor: f64, bg: Rgba8Premul) -> Canvas {
    if (factor - 1.0).abs() < SCALE_EPSILON || !factor.is_finite() {
        return canvas;
    }
    let factor = factor.max(0.0);
    let stamp = if factor > 1.0 {
        (factor / 0.5).round() as i32
    } else {
        1
    };

    let src = canvas.bounds();
    let out_w = (f64::from(src.width()) * factor).round() as u32;
    let out_h = (f64::from(src.height()) * factor).round() as u32;
    let mut out = Canvas::filled(Bounds::from_size(out_w, out_h), bg);
    if out.bounds().is_empty() {
        return out;
    }

    let m = Affine::scale(factor);
    for (x, y, px) in canvas.pixels() {
        let p = m * Point::new(f64::from(x - src.min_x), f64::from(y - src.min_y));
        let (dx, dy) = (p.x.round() as i32, p.y.round() as i32);
        for sy in 0..stamp {
            for sx in 0..stamp {
                out.set(dx + sx, dy + sy, px);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
