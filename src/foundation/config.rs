use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{ScrawlError, ScrawlResult};
use crate::foundation::math::{clamp_noise, clamp_slope};
use crate::text::atlas::FontVariant;

/// Default noise level for the noise-driven fuzzers.
pub const DEFAULT_NOISE: f64 = 0.5;
/// Default band / ring thickness in pixels.
pub const DEFAULT_THICKNESS: u32 = 10;
/// Default line-break width in characters.
pub const DEFAULT_LINE_BREAK: usize = 18;

/// Typed drawing configuration shared by the font drawer and every fuzzer factory.
///
/// Every field is optional on the wire (`#[serde(default)]`) and unknown keys are ignored.
/// Out-of-range numbers are not rejected: negative counts clamp to one while decoding, and
/// [`DrawConfig::normalized`] clamps the rest. Every consumer reads through the clamped
/// accessors.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Shape density in `[0, 1]` for lines and circles.
    pub noise: f64,
    /// Band thickness in pixels for bands and concentric rings.
    #[serde(deserialize_with = "de_at_least_one_u32")]
    pub thickness: u32,
    /// Band slope in `[-2, 2]` (y-up convention); randomized when unset.
    pub slope: Option<f64>,
    /// Primary fuzzer color.
    pub color1: Option<Rgba8Premul>,
    /// Secondary fuzzer color (bands and rings).
    pub color2: Option<Rgba8Premul>,
    /// Fixed glyph rotation in degrees, used when `random_rotation` is off.
    pub rotation: i32,
    /// Rotate every glyph by a random angle in `[-35, 40)` degrees.
    pub random_rotation: bool,
    /// Glyph scale factor.
    pub scale: f64,
    /// Line-break width in characters.
    #[serde(deserialize_with = "de_at_least_one_usize")]
    pub line_break: usize,
    /// Glyph sheet to draw with.
    pub variant: FontVariant,
    /// Canvas background; defaults to the variant's background.
    pub background: Option<Rgba8Premul>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            noise: DEFAULT_NOISE,
            thickness: DEFAULT_THICKNESS,
            slope: None,
            color1: None,
            color2: None,
            rotation: 0,
            random_rotation: true,
            scale: 1.0,
            line_break: DEFAULT_LINE_BREAK,
            variant: FontVariant::default(),
            background: None,
        }
    }
}

impl DrawConfig {
    /// Parse a JSON document and clamp it.
    pub fn from_json(json: &str) -> ScrawlResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| ScrawlError::serde(format!("draw config: {e}")))?;
        Ok(cfg.normalized())
    }

    /// Clamp every numeric option into its documented range.
    pub fn normalized(mut self) -> Self {
        self.noise = clamp_noise(self.noise);
        self.slope = self.slope.map(clamp_slope);
        self.thickness = self.thickness.max(1);
        self.scale = if self.scale.is_finite() {
            self.scale.max(0.0)
        } else {
            1.0
        };
        self.line_break = self.line_break.max(1);
        self.color1 = self.color1.map(Rgba8Premul::capped);
        self.color2 = self.color2.map(Rgba8Premul::capped);
        self.background = self.background.map(Rgba8Premul::capped);
        self
    }

    /// Noise clamped to `[0, 1]`.
    pub fn noise(&self) -> f64 {
        clamp_noise(self.noise)
    }

    /// Thickness clamped to at least one pixel.
    pub fn thickness(&self) -> u32 {
        self.thickness.max(1)
    }

    /// Slope clamped to `[-2, 2]`, if set.
    pub fn slope(&self) -> Option<f64> {
        self.slope.map(clamp_slope)
    }

    /// Explicit background, else the variant's own.
    pub fn background_color(&self) -> Rgba8Premul {
        self.background.unwrap_or_else(|| self.variant.background())
    }
}

fn de_at_least_one_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = <i64 as serde::Deserialize>::deserialize(deserializer)?;
    Ok(v.clamp(1, i64::from(u32::MAX)) as u32)
}

fn de_at_least_one_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = <i64 as serde::Deserialize>::deserialize(deserializer)?;
    Ok(usize::try_from(v.max(1)).unwrap_or(usize::MAX))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
