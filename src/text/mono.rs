//! Monospaced text rendering from the glyph atlas.

use std::sync::Arc;

use rand::Rng;
use rayon::prelude::*;

use crate::foundation::config::DrawConfig;
use crate::foundation::core::{Bounds, Rgba8Premul};
use crate::foundation::error::ScrawlResult;
use crate::render::canvas::Canvas;
use crate::text::atlas::{AtlasCache, GLYPH_HEIGHT, GLYPH_WIDTH, GlyphAtlas};
use crate::text::wrap::{TextLayout, break_lines};
use crate::transform::affine::{WIDE_FACTOR, is_wide_angle, rotate, scale};

/// Random glyph rotation range in degrees.
const RANDOM_ROTATION: std::ops::Range<i32> = -35..40;

/// Renders challenge text into a fresh canvas.
pub trait FontDrawer: Sync {
    /// Render `text` onto a new canvas sized to fit it.
    fn draw(&self, text: &str) -> Canvas;
}

impl<F> FontDrawer for F
where
    F: Fn(&str) -> Canvas + Sync,
{
    fn draw(&self, text: &str) -> Canvas {
        self(text)
    }
}

/// Font drawer backed by a [`GlyphAtlas`].
///
/// Every glyph is scaled, then rotated (by a fresh random angle per glyph when random rotation
/// is on), then composited at a cursor that advances by the placed glyph's width.
#[derive(Clone, Debug)]
pub struct MonoFont {
    atlas: Arc<GlyphAtlas>,
    scale: f64,
    rotation: i32,
    random_rotation: bool,
    line_break: usize,
    background: Rgba8Premul,
}

impl MonoFont {
    /// Resolve `cfg` against the shared atlas cache, building the variant's atlas on first use.
    pub fn new(cfg: &DrawConfig) -> ScrawlResult<Self> {
        let atlas = AtlasCache::shared().get_or_build(cfg.variant)?;
        Ok(Self::with_atlas(atlas, cfg))
    }

    /// Use an already built atlas; `cfg.variant` is ignored and the default background follows
    /// the atlas's variant.
    pub fn with_atlas(atlas: Arc<GlyphAtlas>, cfg: &DrawConfig) -> Self {
        let cfg = cfg.clone().normalized();
        let background = cfg
            .background
            .unwrap_or_else(|| atlas.variant().background());
        Self {
            atlas,
            scale: cfg.scale,
            rotation: cfg.rotation,
            random_rotation: cfg.random_rotation,
            line_break: cfg.line_break,
            background,
        }
    }

    /// Atlas the glyphs come from.
    pub fn atlas(&self) -> &GlyphAtlas {
        &self.atlas
    }

    /// Wrapped lines for `text` at this font's line-break width.
    pub fn layout(&self, text: &str) -> TextLayout {
        break_lines(text, self.line_break)
    }

    /// Destination size for a layout.
    pub fn canvas_size(&self, layout: &TextLayout) -> (u32, u32) {
        let wide = if !self.random_rotation && is_wide_angle(self.rotation) {
            WIDE_FACTOR
        } else {
            1.0
        };
        let w = f64::from(GLYPH_WIDTH) * layout.longest as f64 * self.scale * wide;
        let h = f64::from(GLYPH_HEIGHT) * layout.lines.len() as f64 * self.scale;
        (w as u32, h as u32)
    }

    fn row_height(&self) -> u32 {
        (f64::from(GLYPH_HEIGHT) * self.scale).round() as u32
    }

    fn cell_advance(&self) -> i32 {
        (f64::from(GLYPH_WIDTH) * self.scale).round() as i32
    }

    /// One line of glyphs on a transparent strip anchored at the origin.
    fn render_line(&self, line: &str, width: u32) -> Canvas {
        let mut strip = Canvas::new(width, self.row_height());
        let mut rng = rand::rng();
        let mut cursor = 0i32;

        for ch in line.chars() {
            let Some(tile) = self.atlas.glyph(ch) else {
                tracing::warn!(
                    character = %ch,
                    codepoint = u32::from(ch),
                    "unknown character, skipping"
                );
                cursor += self.cell_advance();
                continue;
            };

            let degrees = if self.random_rotation {
                rng.random_range(RANDOM_ROTATION)
            } else {
                self.rotation
            };
            let placed = rotate(
                scale(tile.clone(), self.scale, self.background),
                degrees,
                self.background,
            );
            strip.composite_over(&placed, cursor, 0);
            cursor += placed.width() as i32;
        }
        strip
    }
}

impl FontDrawer for MonoFont {
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    fn draw(&self, text: &str) -> Canvas {
        let layout = self.layout(text);
        let (width, height) = self.canvas_size(&layout);
        let mut out = Canvas::filled(Bounds::from_size(width, height), self.background);

        let strips: Vec<Canvas> = layout
            .lines
            .par_iter()
            .map(|line| self.render_line(line, width))
            .collect();

        let row = self.row_height() as i32;
        for (i, strip) in strips.iter().enumerate() {
            out.composite_over(strip, 0, i as i32 * row);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/mono.rs"]
mod tests;
