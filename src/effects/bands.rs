//! Parallel diagonal bands.
//!
//! Both effects sweep the line `y = m*x + b` over every intercept `b` that touches the canvas,
//! where `m` is the configured slope negated into screen space (positive slopes rise to the
//! right). Colors alternate every `thickness` intercepts.
//!
//! [`Bands`] draws one Bresenham line per intercept. [`AccurateBands`] steps a whole band at a
//! time and evaluates the equation per column for each offset in the band, so every band is
//! exactly `thickness` pixels tall in each column.

use rand::{Rng, RngCore};

use crate::effects::fuzzer::Fuzzer;
use crate::effects::noise::{DEFAULT_COLOR1, DEFAULT_COLOR2};
use crate::foundation::config::DrawConfig;
use crate::foundation::core::{Bounds, Rgba8Premul};
use crate::foundation::math::{MAX_SLOPE, clamp_slope, line_eq_b, line_eq_y};
use crate::render::canvas::Canvas;
use crate::render::raster::draw_line;

/// Screen-space slope: the configured one negated, or a random one in `[-2, 2]`.
fn screen_slope(slope: Option<f64>, rng: &mut dyn RngCore) -> f64 {
    -clamp_slope(slope.unwrap_or_else(|| rng.random_range(-MAX_SLOPE..=MAX_SLOPE)))
}

/// Intercepts `[lo, hi]` whose lines can touch `bounds`, widened by `margin` on both sides.
fn intercept_range(bounds: Bounds, m: f64, margin: i32) -> (i32, i32) {
    let (x1, y1) = (bounds.max_x - 1, bounds.max_y - 1);
    let corners = [
        line_eq_b(m, bounds.min_x, bounds.min_y),
        line_eq_b(m, bounds.min_x, y1),
        line_eq_b(m, x1, bounds.min_y),
        line_eq_b(m, x1, y1),
    ];
    let lo = corners.iter().copied().min().unwrap_or(0);
    let hi = corners.iter().copied().max().unwrap_or(0);
    (lo - margin, hi + margin)
}

/// One Bresenham line per intercept, alternating colors every `thickness` lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Bands {
    /// Color of the first band and every other one after it.
    pub color1: Rgba8Premul,
    /// Color of the alternate bands.
    pub color2: Rgba8Premul,
    /// Band height in intercepts, at least 1.
    pub thickness: u32,
    /// Y-up slope; `None` picks a fresh random slope per overlay.
    pub slope: Option<f64>,
}

impl Bands {
    /// Resolve colors, thickness and slope from `cfg`, with translucent gray defaults.
    pub fn from_config(cfg: &DrawConfig) -> Self {
        Self {
            color1: cfg.color1.unwrap_or(DEFAULT_COLOR1),
            color2: cfg.color2.unwrap_or(DEFAULT_COLOR2),
            thickness: cfg.thickness(),
            slope: cfg.slope(),
        }
    }
}

impl Fuzzer for Bands {
    fn name(&self) -> &'static str {
        "bands"
    }

    fn overlay(&self, bounds: Bounds, rng: &mut dyn RngCore) -> Canvas {
        let mut layer = Canvas::with_bounds(bounds);
        if bounds.is_empty() {
            return layer;
        }
        let t = self.thickness.max(1) as i32;
        let m = screen_slope(self.slope, rng);
        let (lo, hi) = intercept_range(bounds, m, t);
        let (x0, x1) = (bounds.min_x - t, bounds.max_x - 1 + t);

        for b in lo..=hi {
            let color = if ((b - lo) / t) % 2 == 0 {
                self.color1
            } else {
                self.color2
            };
            draw_line(
                &mut layer,
                x0,
                line_eq_y(m, x0, b),
                x1,
                line_eq_y(m, x1, b),
                color,
            );
        }
        layer
    }
}

/// [`Bands`] with per-column evaluation; noticeably more work per overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct AccurateBands {
    /// Color of the first band and every other one after it.
    pub color1: Rgba8Premul,
    /// Color of the alternate bands.
    pub color2: Rgba8Premul,
    /// Band height in intercepts, at least 1.
    pub thickness: u32,
    /// Y-up slope; `None` picks a fresh random slope per overlay.
    pub slope: Option<f64>,
}

impl AccurateBands {
    /// Resolve colors, thickness and slope from `cfg`, with translucent gray defaults.
    pub fn from_config(cfg: &DrawConfig) -> Self {
        Self {
            color1: cfg.color1.unwrap_or(DEFAULT_COLOR1),
            color2: cfg.color2.unwrap_or(DEFAULT_COLOR2),
            thickness: cfg.thickness(),
            slope: cfg.slope(),
        }
    }
}

impl Fuzzer for AccurateBands {
    fn name(&self) -> &'static str {
        "accurate_bands"
    }

    fn overlay(&self, bounds: Bounds, rng: &mut dyn RngCore) -> Canvas {
        let mut layer = Canvas::with_bounds(bounds);
        if bounds.is_empty() {
            return layer;
        }
        let t = self.thickness.max(1) as i32;
        let m = screen_slope(self.slope, rng);
        let (lo, hi) = intercept_range(bounds, m, t);

        for (band, b) in (lo..=hi).step_by(t as usize).enumerate() {
            let color = if band % 2 == 0 {
                self.color1
            } else {
                self.color2
            };
            for offset in 0..t {
                for x in (bounds.min_x - t)..(bounds.max_x + t) {
                    layer.set(x, line_eq_y(m, x, b) + offset, color);
                }
            }
        }
        layer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/bands.rs"]
mod tests;
