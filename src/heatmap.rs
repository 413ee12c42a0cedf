//! Color stops and the heatmaps built from them
//!
//! A [`Heatmap`] is an ordered, validated sequence of [`ColorStop`]s. Once
//! constructed it is immutable; every render borrows it.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from untyped channel values, rejecting anything outside [0, 255].
    pub fn try_from_channels(channels: [i64; 3]) -> Result<Self> {
        let mut out = [0u8; 3];
        for (slot, value) in out.iter_mut().zip(channels) {
            *slot = u8::try_from(value).map_err(|_| {
                Error::InvalidHeatmap(format!("channel value {} is outside [0, 255]", value))
            })?;
        }
        Ok(Self::new(out[0], out[1], out[2]))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// A single (position, color) entry of a heatmap
///
/// `position` is conventionally in [0, 1] but only finiteness and ordering
/// are enforced, by [`Heatmap::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}

/// Parses the CLI stop syntax `POS:R,G,B`, e.g. `0.5:0,255,0`.
impl FromStr for ColorStop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (pos, rgb) = s
            .split_once(':')
            .ok_or_else(|| Error::Config(format!("stop {:?} is not of the form POS:R,G,B", s)))?;

        let position = pos
            .trim()
            .parse::<f64>()
            .map_err(|e| Error::Config(format!("stop {:?}: bad position: {}", s, e)))?;

        let parts = rgb
            .split(',')
            .map(|c| c.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Config(format!("stop {:?}: bad channel: {}", s, e)))?;
        let channels: [i64; 3] = parts.try_into().map_err(|_| {
            Error::Config(format!("stop {:?}: expected exactly three channels", s))
        })?;

        Ok(ColorStop::new(position, Color::try_from_channels(channels)?))
    }
}

/// On-disk heatmap shape: `[[0.0, [255, 0, 0]], [1.0, [0, 0, 255]]]`
#[derive(Deserialize)]
#[serde(transparent)]
struct HeatmapFile(Vec<(f64, [i64; 3])>);

/// An ordered piecewise-linear color ramp
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    stops: Vec<ColorStop>,
}

impl Heatmap {
    /// Validate and build a heatmap.
    ///
    /// Requires at least two stops with finite, strictly increasing positions.
    pub fn new(stops: Vec<ColorStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(Error::InvalidHeatmap(format!(
                "at least two stops are required, got {}",
                stops.len()
            )));
        }

        if let Some(stop) = stops.iter().find(|s| !s.position.is_finite()) {
            return Err(Error::InvalidHeatmap(format!(
                "stop position {} is not finite",
                stop.position
            )));
        }

        if let Some(pair) = stops.windows(2).find(|w| w[0].position >= w[1].position) {
            return Err(Error::InvalidHeatmap(format!(
                "stop positions must be strictly increasing ({} is followed by {})",
                pair[0].position, pair[1].position
            )));
        }

        Ok(Self { stops })
    }

    /// Convenience constructor from `(position, (r, g, b))` pairs.
    pub fn from_pairs(pairs: &[(f64, (u8, u8, u8))]) -> Result<Self> {
        Self::new(pairs.iter().map(|&(p, c)| ColorStop::new(p, c.into())).collect())
    }

    /// Parse a heatmap from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let HeatmapFile(raw) = serde_json::from_str(json)?;
        let stops = raw
            .into_iter()
            .map(|(position, channels)| Ok(ColorStop::new(position, Color::try_from_channels(channels)?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(stops)
    }

    /// Read and parse a JSON heatmap file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Red at 0.0, green at 0.5, blue at 1.0.
    pub fn red_green_blue() -> Self {
        Self {
            stops: vec![
                ColorStop::new(0.0, Color::new(255, 0, 0)),
                ColorStop::new(0.5, Color::new(0, 255, 0)),
                ColorStop::new(1.0, Color::new(0, 0, 255)),
            ],
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; a valid heatmap has at least two stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first(&self) -> &ColorStop {
        &self.stops[0]
    }

    pub fn last(&self) -> &ColorStop {
        &self.stops[self.stops.len() - 1]
    }
}

impl Default for Heatmap {
    fn default() -> Self {
        Self::red_green_blue()
    }
}
