//! Noise-driven effects: random lines, random disks and concentric ring stacks.

use rand::{Rng, RngCore};

use crate::effects::fuzzer::Fuzzer;
use crate::foundation::config::DrawConfig;
use crate::foundation::core::{Bounds, Rgba8Premul};
use crate::foundation::math::shape_count;
use crate::render::canvas::Canvas;
use crate::render::raster::{draw_circle, draw_line, fill_disk};

/// Light translucent gray.
pub const DEFAULT_COLOR1: Rgba8Premul = Rgba8Premul::gray(192);
/// Darker translucent gray.
pub const DEFAULT_COLOR2: Rgba8Premul = Rgba8Premul::gray(128);

/// Random point inside non-empty `bounds`.
fn random_point(bounds: Bounds, rng: &mut dyn RngCore) -> (i32, i32) {
    (
        rng.random_range(bounds.min_x..bounds.max_x),
        rng.random_range(bounds.min_y..bounds.max_y),
    )
}

/// `round(noise * 100)` single-pixel lines between random points.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLines {
    /// Line color.
    pub color: Rgba8Premul,
    /// Number of lines per overlay.
    pub count: usize,
}

impl RandomLines {
    /// Color from `color1`, count from the noise level.
    pub fn from_config(cfg: &DrawConfig) -> Self {
        Self {
            color: cfg.color1.unwrap_or(DEFAULT_COLOR1),
            count: shape_count(cfg.noise(), 100),
        }
    }
}

impl Fuzzer for RandomLines {
    fn name(&self) -> &'static str {
        "random_lines"
    }

    fn overlay(&self, bounds: Bounds, rng: &mut dyn RngCore) -> Canvas {
        let mut layer = Canvas::with_bounds(bounds);
        if bounds.is_empty() {
            return layer;
        }
        for _ in 0..self.count {
            let (x0, y0) = random_point(bounds, rng);
            let (x1, y1) = random_point(bounds, rng);
            draw_line(&mut layer, x0, y0, x1, y1, self.color);
        }
        layer
    }
}

/// `round(noise * 10)` filled disks with random centers and radii below the canvas height.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomCircles {
    /// Disk color.
    pub color: Rgba8Premul,
    /// Number of disks per overlay.
    pub count: usize,
}

impl RandomCircles {
    /// Without `color1` the disks get one random translucent gray, fixed here for the
    /// fuzzer's lifetime.
    pub fn from_config(cfg: &DrawConfig) -> Self {
        let color = cfg.color1.unwrap_or_else(|| {
            let k = rand::rng().random_range(0..128u8);
            Rgba8Premul::gray(k)
        });
        Self {
            color,
            count: shape_count(cfg.noise(), 10),
        }
    }
}

impl Fuzzer for RandomCircles {
    fn name(&self) -> &'static str {
        "random_circles"
    }

    fn overlay(&self, bounds: Bounds, rng: &mut dyn RngCore) -> Canvas {
        let mut layer = Canvas::with_bounds(bounds);
        if bounds.is_empty() {
            return layer;
        }
        let max_r = bounds.height() as i32;
        for _ in 0..self.count {
            let r = rng.random_range(0..max_r);
            let (cx, cy) = random_point(bounds, rng);
            fill_disk(&mut layer, cx, cy, r, self.color);
        }
        layer
    }
}

/// `round(noise * 20)` ring stacks whose color flips every `thickness` radii.
#[derive(Clone, Debug, PartialEq)]
pub struct ConcentricCircles {
    /// Color of the outermost ring band.
    pub color1: Rgba8Premul,
    /// Color of the alternate ring bands.
    pub color2: Rgba8Premul,
    /// Radii per band, at least 1.
    pub thickness: u32,
    /// Number of ring stacks per overlay.
    pub count: usize,
}

impl ConcentricCircles {
    /// Colors, thickness and count from `cfg`.
    pub fn from_config(cfg: &DrawConfig) -> Self {
        Self {
            color1: cfg.color1.unwrap_or(DEFAULT_COLOR1),
            color2: cfg.color2.unwrap_or(DEFAULT_COLOR2),
            thickness: cfg.thickness(),
            count: shape_count(cfg.noise(), 20),
        }
    }

    fn draw_stack(&self, layer: &mut Canvas, cx: i32, cy: i32, outer: i32) {
        let t = self.thickness.max(1) as i32;
        let mut first = true;
        let mut j = outer;
        while j >= 0 {
            let color = if first { self.color1 } else { self.color2 };
            for r in ((j - t).max(0)..=j).rev() {
                draw_circle(layer, cx, cy, r, color);
            }
            first = !first;
            j -= t;
        }
    }
}

impl Fuzzer for ConcentricCircles {
    fn name(&self) -> &'static str {
        "concentric_circles"
    }

    fn overlay(&self, bounds: Bounds, rng: &mut dyn RngCore) -> Canvas {
        let mut layer = Canvas::with_bounds(bounds);
        if bounds.is_empty() {
            return layer;
        }
        let max_r = bounds.height() as i32;
        for _ in 0..self.count {
            let outer = rng.random_range(0..max_r);
            let (cx, cy) = random_point(bounds, rng);
            self.draw_stack(&mut layer, cx, cy, outer);
        }
        layer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/noise.rs"]
mod tests;
