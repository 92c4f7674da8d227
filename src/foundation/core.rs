use std::str::FromStr;

use crate::foundation::error::{ScrawlError, ScrawlResult};

/// Half-open integer pixel rectangle `[min, max)`.
///
/// The origin is not pinned to `(0, 0)`: rotated glyphs are centered on the origin and carry
/// negative minimum coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Inclusive minimum x.
    pub min_x: i32,
    /// Inclusive minimum y.
    pub min_y: i32,
    /// Exclusive maximum x.
    pub max_x: i32,
    /// Exclusive maximum y.
    pub max_y: i32,
}

impl Bounds {
    /// Create bounds from two corners; an inverted axis collapses to zero extent.
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x: max_x.max(min_x),
            max_y: max_y.max(min_y),
        }
    }

    /// Bounds anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, to_i32(width), to_i32(height))
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.max_x.saturating_sub(self.min_x).max(0) as u32
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.max_y.saturating_sub(self.min_y).max(0) as u32
    }

    /// Return `true` when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// Return `true` when `(x, y)` is inside the rectangle.
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Same extent, moved so the minimum corner sits at `(x, y)`.
    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x.saturating_add(to_i32(self.width())),
            max_y: y.saturating_add(to_i32(self.height())),
        }
    }

    /// Overlap of two rectangles (possibly empty).
    pub fn intersect(self, other: Self) -> Self {
        Self::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        )
    }
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Build a premultiplied color; color channels are capped at alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: min_u8(r, a),
            g: min_u8(g, a),
            b: min_u8(b, a),
            a,
        }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Uniform gray where every channel, alpha included, equals `k`.
    pub const fn gray(k: u8) -> Self {
        Self::new(k, k, k, k)
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Channels in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Take stored `[r, g, b, a]` bytes as they are, without premultiplying or capping.
    pub fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }

    /// Same color with every channel capped at alpha.
    pub fn capped(self) -> Self {
        Self::new(self.r, self.g, self.b, self.a)
    }

    /// Return `true` when alpha is zero.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

const fn min_u8(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

impl FromStr for Rgba8Premul {
    type Err = ScrawlError;

    /// Parse `"r,g,b"` (opaque) or `"r,g,b,a"` (premultiplied) decimal channels.
    fn from_str(s: &str) -> ScrawlResult<Self> {
        let parts = s.split(',').map(str::trim).collect::<Vec<_>>();
        if !(3..=4).contains(&parts.len()) {
            return Err(ScrawlError::validation(format!(
                "color '{s}' must have 3 or 4 comma-separated channels"
            )));
        }
        let mut px = [0u8, 0, 0, 255];
        for (slot, part) in px.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|e| {
                ScrawlError::validation(format!("color channel '{part}' in '{s}': {e}"))
            })?;
        }
        Ok(Self::new(px[0], px[1], px[2], px[3]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
