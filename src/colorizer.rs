// src/colorizer.rs
//
// Turns a column of attribute values into one color per value. Small domains
// get one palette color each; domains larger than the color budget are split
// into equal-count buckets of neighbouring values that share a color.

use std::collections::BTreeMap;

use rand::Rng;

use crate::color::Color;
use crate::domain::{bucket_label, AttributeDomain};
use crate::error::EncodingError;
use crate::palettes::{Palette, PaletteKind, PaletteRegistry, PaletteSource, MAX_PALETTE_SIZE};
use crate::value::AttrValue;

/// Sentinel accepted for `max_colors` meaning "use the palette's capacity".
pub const UNBOUNDED: i32 = -1;

/// Upper bound on how many colors a single map may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBudget {
    Unbounded,
    Limit(usize),
}

impl ColorBudget {
    /// Accepts `-1` or `1..=255`.
    pub fn from_max_colors(max_colors: i32) -> Result<Self, EncodingError> {
        match max_colors {
            UNBOUNDED => Ok(ColorBudget::Unbounded),
            n if n >= 1 && (n as usize) < MAX_PALETTE_SIZE => Ok(ColorBudget::Limit(n as usize)),
            n => Err(EncodingError::parameter(
                "max_colors",
                format!(
                    "{} is out of range; use -1 for no limit or a value in 1..={}",
                    n,
                    MAX_PALETTE_SIZE - 1
                ),
            )),
        }
    }

    /// The number of colors actually available against a palette of `capacity`.
    pub fn effective(self, capacity: usize) -> Result<usize, EncodingError> {
        match self {
            ColorBudget::Unbounded => Ok(capacity),
            ColorBudget::Limit(n) if n <= capacity => Ok(n),
            ColorBudget::Limit(n) => Err(EncodingError::parameter(
                "max_colors",
                format!("{} exceeds the palette capacity of {}", n, capacity),
            )),
        }
    }
}

impl TryFrom<i32> for ColorBudget {
    type Error = EncodingError;

    fn try_from(max_colors: i32) -> Result<Self, Self::Error> {
        ColorBudget::from_max_colors(max_colors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// A finished value-to-color assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    palette: Palette,
    slots: BTreeMap<AttrValue, usize>,
    legend: Vec<LegendEntry>,
    binned: bool,
}

impl ColorMap {
    fn empty(palette_name: &str, kind: PaletteKind) -> Self {
        ColorMap {
            palette: Palette::new(palette_name, kind, Vec::new()),
            slots: BTreeMap::new(),
            legend: Vec::new(),
            binned: false,
        }
    }

    pub fn color_for(&self, value: &AttrValue) -> Result<Color, EncodingError> {
        let slot = self.index_for(value)?;
        Ok(self.palette.colors()[slot])
    }

    /// Palette slot (and legend row) the value was assigned to.
    pub fn index_for(&self, value: &AttrValue) -> Result<usize, EncodingError> {
        self.slots
            .get(value)
            .copied()
            .ok_or_else(|| EncodingError::UnmappedValue {
                value: value.to_string(),
            })
    }

    /// One color per input value, in input order.
    pub fn colors_for<'a, I>(&self, values: I) -> Result<Vec<Color>, EncodingError>
    where
        I: IntoIterator<Item = &'a AttrValue>,
    {
        values.into_iter().map(|v| self.color_for(v)).collect()
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// The colors in use, one per legend entry.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn distinct_colors(&self) -> usize {
        self.legend.len()
    }

    /// Whether several values had to share a color.
    pub fn is_binned(&self) -> bool {
        self.binned
    }

    /// Number of distinct values covered.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Builds [`ColorMap`]s against an injected palette registry.
#[derive(Debug, Clone, Copy)]
pub struct AttributeColorizer<'r> {
    registry: &'r PaletteRegistry,
}

impl<'r> AttributeColorizer<'r> {
    pub fn new(registry: &'r PaletteRegistry) -> Self {
        AttributeColorizer { registry }
    }

    pub fn registry(&self) -> &'r PaletteRegistry {
        self.registry
    }

    /// Build a map over `values` using the thread-local generator for
    /// `"random"` palettes.
    pub fn build(
        &self,
        values: &[AttrValue],
        palette_name: &str,
        max_colors: i32,
    ) -> Result<ColorMap, EncodingError> {
        self.build_with_rng(values, palette_name, max_colors, &mut rand::thread_rng())
    }

    pub fn build_with_rng<R: Rng + ?Sized>(
        &self,
        values: &[AttrValue],
        palette_name: &str,
        max_colors: i32,
        rng: &mut R,
    ) -> Result<ColorMap, EncodingError> {
        let budget = ColorBudget::from_max_colors(max_colors)?;
        let source = self.registry.lookup(palette_name)?;
        let budget = budget.effective(source.capacity())?;

        let domain = AttributeDomain::from_values(values);
        if domain.is_empty() {
            let kind = match source {
                PaletteSource::Named(p) => p.kind(),
                PaletteSource::Random => PaletteKind::Random,
            };
            return Ok(ColorMap::empty(palette_name, kind));
        }

        let buckets = domain.buckets(budget);
        let palette = self
            .registry
            .resolve_with_rng(palette_name, buckets.len(), rng)?;

        let mut slots = BTreeMap::new();
        let mut legend = Vec::with_capacity(buckets.len());
        for (slot, bucket) in buckets.iter().enumerate() {
            let members = domain.bucket_members(bucket);
            for value in members {
                slots.insert(value.clone(), slot);
            }
            legend.push(LegendEntry {
                label: bucket_label(members),
                color: palette.colors()[slot],
            });
        }

        Ok(ColorMap {
            palette,
            slots,
            legend,
            binned: buckets.len() < domain.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_parsing() {
        assert_eq!(ColorBudget::from_max_colors(-1).unwrap(), ColorBudget::Unbounded);
        assert_eq!(ColorBudget::from_max_colors(1).unwrap(), ColorBudget::Limit(1));
        assert_eq!(ColorBudget::from_max_colors(255).unwrap(), ColorBudget::Limit(255));
        assert!(ColorBudget::from_max_colors(0).is_err());
        assert!(ColorBudget::from_max_colors(256).is_err());
        assert!(ColorBudget::from_max_colors(-2).is_err());
    }

    #[test]
    fn test_budget_against_capacity() {
        assert_eq!(ColorBudget::Unbounded.effective(20).unwrap(), 20);
        assert_eq!(ColorBudget::Limit(5).effective(20).unwrap(), 5);
        assert!(ColorBudget::Limit(21).effective(20).is_err());
    }

    #[test]
    fn test_single_value_domain() {
        let registry = PaletteRegistry::builtin();
        let colorizer = AttributeColorizer::new(&registry);
        let values: Vec<AttrValue> = vec!["x".into(); 5];
        let map = colorizer.build(&values, "viridis", 3).unwrap();
        assert_eq!(map.distinct_colors(), 1);
        assert_eq!(map.legend()[0].label, "x");
        assert!(!map.is_binned());
    }
}
