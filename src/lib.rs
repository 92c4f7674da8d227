//! Scrawl renders short text challenges as distorted raster images.
//!
//! The engine is a small CPU pipeline over premultiplied RGBA8 canvases:
//!
//! - Lay text out from a monospaced glyph atlas, scaling and rotating every glyph
//!   ([`MonoFont`], or any [`FontDrawer`])
//! - Resolve overlay effects from a [`DrawConfig`] ([`FuzzKind::resolve`])
//! - Paint every effect concurrently and blend it over the text ([`generate`])
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

/// Randomized overlay effects.
pub mod effects;
/// Canvas, compositing, rasterization and the composition pipeline.
pub mod render;
/// Glyph atlas, line wrapping and text rendering.
pub mod text;
/// Forward-mapped rotation and scaling.
pub mod transform;

pub use crate::foundation::config::{
    DEFAULT_LINE_BREAK, DEFAULT_NOISE, DEFAULT_THICKNESS, DrawConfig,
};
pub use crate::foundation::core::{Bounds, Rgba8Premul};
pub use crate::foundation::error::{ScrawlError, ScrawlResult};

pub use crate::effects::bands::{AccurateBands, Bands};
pub use crate::effects::fuzzer::{FuzzFactory, FuzzKind, Fuzzer};
pub use crate::effects::noise::{ConcentricCircles, RandomCircles, RandomLines};
pub use crate::render::canvas::Canvas;
pub use crate::render::pipeline::{build_thread_pool, generate, generate_in};
pub use crate::render::raster::{draw_circle, draw_line, fill_disk};
pub use crate::text::atlas::{AtlasCache, FontVariant, GlyphAtlas};
pub use crate::text::mono::{FontDrawer, MonoFont};
pub use crate::text::wrap::{TextLayout, break_lines};
pub use crate::transform::affine::{rotate, scale};
