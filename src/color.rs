//! Color specs: ordered `(color, weight)` pairs driving every filler

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One entry of a [`ColorSpec`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorWeight {
    /// Any CSS color value ("red", "#ffcc00", ...)
    pub color: String,
    /// Cell count for the linear/random fillers, relative frequency for ratio filling
    pub weight: u32,
}

/// Ordered list of colors and weights.
///
/// Serializes as the nested-array form `[["red", 3], ["blue", 1]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, u32)>", into = "Vec<(String, u32)>")]
pub struct ColorSpec {
    entries: Vec<ColorWeight>,
}

impl ColorSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style push
    pub fn with(mut self, color: impl Into<String>, weight: u32) -> Self {
        self.push(color, weight);
        self
    }

    pub fn push(&mut self, color: impl Into<String>, weight: u32) {
        self.entries.push(ColorWeight { color: color.into(), weight });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorWeight> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.weight)).sum()
    }

    /// Parse either the JSON nested-array form or `red:3,blue:1`
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('[') {
            return serde_json::from_str::<ColorSpec>(trimmed)
                .map_err(|e| Error::InvalidColorSpec(e.to_string()));
        }

        let mut spec = ColorSpec::new();
        for part in trimmed.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (color, weight) = part
                .rsplit_once(':')
                .ok_or_else(|| Error::InvalidColorSpec(format!("expected color:weight, got '{}'", part)))?;
            let color = color.trim();
            if color.is_empty() {
                return Err(Error::InvalidColorSpec(format!("missing color in '{}'", part)));
            }
            let weight = weight
                .trim()
                .parse::<u32>()
                .map_err(|e| Error::InvalidColorSpec(format!("bad weight in '{}': {}", part, e)))?;
            spec.push(color, weight);
        }
        Ok(spec)
    }
}

impl FromStr for ColorSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorSpec::parse(s)
    }
}

impl From<Vec<(String, u32)>> for ColorSpec {
    fn from(pairs: Vec<(String, u32)>) -> Self {
        ColorSpec {
            entries: pairs
                .into_iter()
                .map(|(color, weight)| ColorWeight { color, weight })
                .collect(),
        }
    }
}

impl From<ColorSpec> for Vec<(String, u32)> {
    fn from(spec: ColorSpec) -> Self {
        spec.entries.into_iter().map(|e| (e.color, e.weight)).collect()
    }
}

impl<'a> IntoIterator for &'a ColorSpec {
    type Item = &'a ColorWeight;
    type IntoIter = std::slice::Iter<'a, ColorWeight>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
