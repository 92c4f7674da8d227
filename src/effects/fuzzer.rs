//! The [`Fuzzer`] seam and the registry of built-in effects.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};

use crate::effects::bands::{AccurateBands, Bands};
use crate::effects::noise::{ConcentricCircles, RandomCircles, RandomLines};
use crate::foundation::config::DrawConfig;
use crate::foundation::core::Bounds;
use crate::foundation::error::{ScrawlError, ScrawlResult};
use crate::render::canvas::Canvas;

/// A resolved overlay effect.
///
/// Implementations hold only read-only parameters, so one instance can paint any number of
/// canvases from any thread.
pub trait Fuzzer: Send + Sync + fmt::Debug {
    /// Short stable name, used in logs.
    fn name(&self) -> &'static str;

    /// Paint the effect onto a transparent scratch canvas covering `bounds`.
    fn overlay(&self, bounds: Bounds, rng: &mut dyn RngCore) -> Canvas;

    /// Paint an overlay for `img` and source-over it.
    fn apply(&self, img: &mut Canvas, rng: &mut dyn RngCore) {
        let layer = self.overlay(img.bounds(), rng);
        img.overlay(&layer);
    }
}

/// Resolves a configuration snapshot into a fuzzer.
pub type FuzzFactory = fn(&DrawConfig) -> Box<dyn Fuzzer>;

/// Built-in effect kinds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FuzzKind {
    /// [`Bands`].
    Bands,
    /// [`AccurateBands`].
    AccurateBands,
    /// [`RandomLines`].
    RandomLines,
    /// [`RandomCircles`].
    RandomCircles,
    /// [`ConcentricCircles`].
    ConcentricCircles,
}

/// Combinations picked from when no kinds are requested.
const RANDOM_PAIRS: [[FuzzKind; 2]; 5] = [
    [FuzzKind::Bands, FuzzKind::RandomLines],
    [FuzzKind::Bands, FuzzKind::ConcentricCircles],
    [FuzzKind::RandomLines, FuzzKind::ConcentricCircles],
    [FuzzKind::RandomLines, FuzzKind::RandomCircles],
    [FuzzKind::RandomCircles, FuzzKind::ConcentricCircles],
];

impl FuzzKind {
    /// Every kind, in registry order.
    pub const ALL: [FuzzKind; 5] = [
        Self::Bands,
        Self::AccurateBands,
        Self::RandomLines,
        Self::RandomCircles,
        Self::ConcentricCircles,
    ];

    /// Snake-case name, as accepted by [`FromStr`] and serde.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bands => "bands",
            Self::AccurateBands => "accurate_bands",
            Self::RandomLines => "random_lines",
            Self::RandomCircles => "random_circles",
            Self::ConcentricCircles => "concentric_circles",
        }
    }

    /// One-letter code accepted on the command line.
    pub fn letter(self) -> char {
        match self {
            Self::Bands => 'b',
            Self::AccurateBands => 'a',
            Self::RandomLines => 'l',
            Self::RandomCircles => 'r',
            Self::ConcentricCircles => 'c',
        }
    }

    /// Factory that builds this kind from a [`DrawConfig`].
    pub fn factory(self) -> FuzzFactory {
        match self {
            Self::Bands => |cfg| Box::new(Bands::from_config(cfg)),
            Self::AccurateBands => |cfg| Box::new(AccurateBands::from_config(cfg)),
            Self::RandomLines => |cfg| Box::new(RandomLines::from_config(cfg)),
            Self::RandomCircles => |cfg| Box::new(RandomCircles::from_config(cfg)),
            Self::ConcentricCircles => |cfg| Box::new(ConcentricCircles::from_config(cfg)),
        }
    }

    /// Run this kind's factory against `cfg`.
    pub fn resolve(self, cfg: &DrawConfig) -> Box<dyn Fuzzer> {
        (self.factory())(cfg)
    }

    /// One of the stock two-effect combinations, chosen uniformly.
    pub fn random_pair(rng: &mut dyn RngCore) -> [FuzzKind; 2] {
        RANDOM_PAIRS[rng.random_range(0..RANDOM_PAIRS.len())]
    }

    /// Parse a comma-separated list of names or letters. An empty list is valid.
    pub fn parse_list(list: &str) -> ScrawlResult<Vec<FuzzKind>> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for FuzzKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FuzzKind {
    type Err = ScrawlError;

    fn from_str(s: &str) -> ScrawlResult<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|k| k.name() == wanted || (wanted.len() == 1 && wanted.starts_with(k.letter())))
            .ok_or_else(|| ScrawlError::validation(format!("unknown fuzzer '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fuzzer.rs"]
mod tests;
