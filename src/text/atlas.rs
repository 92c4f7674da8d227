//! Glyph atlas: per-character tiles cut from an embedded monospaced sprite sheet.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::assets::decode::decode_image;
use crate::foundation::core::{Bounds, Rgba8Premul};
use crate::foundation::error::{ScrawlError, ScrawlResult};
use crate::render::canvas::Canvas;

/// Width of one sprite-sheet cell in pixels.
pub const GLYPH_WIDTH: u32 = 24;
/// Height of one sprite-sheet cell in pixels.
pub const GLYPH_HEIGHT: u32 = 50;

/// Every character the sheets carry, in sheet order.
pub const CHARSET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789`~!@#$%^&*(){}[]",
    "'\"<>,./=¿?+-_\\|;:‘’“”¡¢£€",
    "¥Š§š×÷‹›→←↑↓ÀÁÂÃÄÅÆÇÈÉÊËÌÍ",
    "ÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞßàáâãäåæçè",
    "éêëìíîïðñòóôõöøùúûüýþÿĄĽŚŞ",
    "ŤŹŻŔĂĹĆČĘĚĎŃŇŐŘŮűłąăčďęľĺń",
    "ňőřśşůŜĸŋΑαΒβΔδΕεΦφΓγΗηΙιΘ",
    "θΚκΛλΜμΝνΟοΠπΧχΡρΣσΤτΥυΩωΞ",
    "ξΨψΖζ ",
);

/// Characters that close a row of the sheet.
const ROW_BREAKS: [char; 10] = ['z', 'Z', ']', '€', 'Í', 'è', 'Ş', 'ń', 'Θ', 'Ξ'];

/// Which sprite sheet (and background) to draw glyphs with.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FontVariant {
    /// Dark gray glyphs on a light gray background.
    #[default]
    Gray,
    /// Black glyphs on white.
    Black,
    /// White glyphs on black.
    Inverted,
}

impl FontVariant {
    /// All variants.
    pub const ALL: [FontVariant; 3] = [Self::Gray, Self::Black, Self::Inverted];

    /// Background the variant's glyph tiles are painted on.
    pub fn background(self) -> Rgba8Premul {
        match self {
            Self::Gray => Rgba8Premul::opaque(192, 192, 192),
            Self::Black => Rgba8Premul::opaque(255, 255, 255),
            Self::Inverted => Rgba8Premul::opaque(0, 0, 0),
        }
    }

    fn sheet_png(self) -> &'static [u8] {
        match self {
            Self::Gray => include_bytes!("../../assets/glyphs/mono_gray.png"),
            Self::Black => include_bytes!("../../assets/glyphs/mono_black.png"),
            Self::Inverted => include_bytes!("../../assets/glyphs/mono_inverted.png"),
        }
    }
}

impl FromStr for FontVariant {
    type Err = ScrawlError;

    fn from_str(s: &str) -> ScrawlResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gray" | "grey" => Ok(Self::Gray),
            "black" => Ok(Self::Black),
            "inverted" => Ok(Self::Inverted),
            other => Err(ScrawlError::validation(format!(
                "unknown font variant '{other}' (expected gray, black or inverted)"
            ))),
        }
    }
}

/// Immutable character → glyph mapping for one font variant.
#[derive(Debug)]
pub struct GlyphAtlas {
    variant: FontVariant,
    cells: HashMap<char, Bounds>,
    glyphs: HashMap<char, Canvas>,
}

impl GlyphAtlas {
    /// Decode the embedded sheet for `variant` and cut every glyph tile.
    #[tracing::instrument]
    pub fn build(variant: FontVariant) -> ScrawlResult<Self> {
        Self::from_sheet(variant, variant.sheet_png())
    }

    /// Cut glyph tiles out of an encoded sprite sheet laid out in [`CHARSET`] order.
    pub fn from_sheet(variant: FontVariant, png: &[u8]) -> ScrawlResult<Self> {
        let sheet = decode_image(png)?;
        let cells = sheet_cells();

        let (need_w, need_h) = cells
            .values()
            .fold((0, 0), |(w, h), c| (w.max(c.max_x), h.max(c.max_y)));
        let have = sheet.bounds();
        if need_w > have.max_x || need_h > have.max_y {
            return Err(ScrawlError::asset(format!(
                "glyph sheet is {}x{}, charset needs {need_w}x{need_h}",
                have.width(),
                have.height(),
            )));
        }

        let bg = variant.background();
        let glyphs = cells
            .iter()
            .map(|(&ch, &cell)| {
                let mut tile = Canvas::filled(Bounds::from_size(GLYPH_WIDTH, GLYPH_HEIGHT), bg);
                tile.overlay(&sheet.crop(cell));
                (ch, tile)
            })
            .collect();

        Ok(Self {
            variant,
            cells,
            glyphs,
        })
    }

    /// Variant the tiles were cut for.
    pub fn variant(&self) -> FontVariant {
        self.variant
    }

    /// Pre-colored tile for `ch`.
    pub fn glyph(&self, ch: char) -> Option<&Canvas> {
        self.glyphs.get(&ch)
    }

    /// Source rectangle of `ch` in the sheet.
    pub fn cell(&self, ch: char) -> Option<Bounds> {
        self.cells.get(&ch).copied()
    }

    /// Number of characters with a tile.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Return `true` when no tiles were cut.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Row-major cell layout of [`CHARSET`]; a row-break character ends its row.
fn sheet_cells() -> HashMap<char, Bounds> {
    let (w, h) = (GLYPH_WIDTH as i32, GLYPH_HEIGHT as i32);
    let mut cells = HashMap::with_capacity(CHARSET.chars().count());
    let (mut x, mut y) = (0, 0);
    for ch in CHARSET.chars() {
        cells.insert(ch, Bounds::new(x, y, x + w, y + h));
        if ROW_BREAKS.contains(&ch) {
            x = 0;
            y += h;
        } else {
            x += w;
        }
    }
    cells
}

/// Single-slot atlas cache keyed by the last requested variant.
///
/// Readers share the read lock; a miss takes the write lock and re-checks before building, so
/// concurrent first use builds once.
#[derive(Debug, Default)]
pub struct AtlasCache {
    current: RwLock<Option<Arc<GlyphAtlas>>>,
    builds: AtomicUsize,
}

impl AtlasCache {
    /// Empty cache.
    pub const fn new() -> Self {
        Self {
            current: RwLock::new(None),
            builds: AtomicUsize::new(0),
        }
    }

    /// Process-wide cache used by [`MonoFont::new`](crate::MonoFont::new).
    pub fn shared() -> &'static AtlasCache {
        static SHARED: AtlasCache = AtlasCache::new();
        &SHARED
    }

    /// Return the cached atlas for `variant`, building (and replacing) it on a variant change.
    pub fn get_or_build(&self, variant: FontVariant) -> ScrawlResult<Arc<GlyphAtlas>> {
        {
            let slot = self.current.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(atlas) = slot.as_ref().filter(|a| a.variant == variant) {
                return Ok(Arc::clone(atlas));
            }
        }

        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(atlas) = slot.as_ref().filter(|a| a.variant == variant) {
            return Ok(Arc::clone(atlas));
        }

        tracing::debug!(?variant, "building glyph atlas");
        let atlas = Arc::new(GlyphAtlas::build(variant)?);
        self.builds.fetch_add(1, Ordering::Relaxed);
        *slot = Some(Arc::clone(&atlas));
        Ok(atlas)
    }

    /// How many times an atlas has been built.
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/atlas.rs"]
mod tests;
