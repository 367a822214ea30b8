// src/glyph.rs
//
// Merges layout positions with the color, size and alpha channels into the
// per-node and per-edge records a renderer consumes.

use std::collections::{BTreeMap, HashMap};

use rand::Rng;

use crate::color::Color;
use crate::colorizer::{AttributeColorizer, ColorMap, UNBOUNDED};
use crate::domain::AttributeDomain;
use crate::error::EncodingError;
use crate::palettes::PaletteRegistry;
use crate::value::AttrValue;

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub size: f32,
    pub alpha: f32,
}

/// A straight segment between the layout positions of two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGlyph {
    pub source: String,
    pub target: String,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub color: Color,
    pub width: f32,
    pub alpha: f32,
}

/// Drawing defaults for one kind of element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleDefaults {
    pub size: f32,
    pub color: &'static str,
    pub alpha: f32,
    pub palette: &'static str,
}

pub const NODE_STYLE: StyleDefaults = StyleDefaults {
    size: 9.0,
    color: "firebrick",
    alpha: 0.9,
    palette: "category20",
};

pub const EDGE_STYLE: StyleDefaults = StyleDefaults {
    size: 1.0,
    color: "navy",
    alpha: 0.6,
    palette: "viridis",
};

/// How to color a set of elements.
#[derive(Debug, Clone, Copy)]
pub enum Paint<'a> {
    Uniform(Color),
    ByAttribute {
        values: &'a [AttrValue],
        palette: &'a str,
        max_colors: i32,
    },
}

/// How to fill a numeric channel such as size or alpha.
#[derive(Debug, Clone, Copy)]
pub enum Scalar<'a> {
    Fixed(f32),
    /// Levels in `(0, 1]` derived from the attribute, scaled by `scale`.
    ByAttribute {
        values: &'a [AttrValue],
        max_levels: i32,
        scale: f32,
    },
}

/// First color of `palette`, for coloring everything alike.
pub fn uniform_from_palette(registry: &PaletteRegistry, palette: &str) -> Result<Color, EncodingError> {
    let resolved = registry.resolve(palette, 1)?;
    resolved.get(0).ok_or_else(|| EncodingError::InvalidPalette {
        name: palette.to_string(),
        requested: 1,
        capacity: 0,
    })
}

/// One color per element, plus the map when colors came from an attribute.
pub fn paint_colors<R: Rng + ?Sized>(
    colorizer: &AttributeColorizer<'_>,
    paint: Paint<'_>,
    count: usize,
    rng: &mut R,
) -> Result<(Vec<Color>, Option<ColorMap>), EncodingError> {
    match paint {
        Paint::Uniform(color) => Ok((vec![color; count], None)),
        Paint::ByAttribute {
            values,
            palette,
            max_colors,
        } => {
            check_len("color values", values.len(), count)?;
            let map = colorizer.build_with_rng(values, palette, max_colors, rng)?;
            let colors = map.colors_for(values)?;
            Ok((colors, Some(map)))
        }
    }
}

pub fn scalar_values(scalar: Scalar<'_>, count: usize) -> Result<Vec<f32>, EncodingError> {
    match scalar {
        Scalar::Fixed(v) => Ok(vec![v; count]),
        Scalar::ByAttribute {
            values,
            max_levels,
            scale,
        } => {
            check_len("scalar values", values.len(), count)?;
            Ok(numeric_levels(values, max_levels)?
                .into_iter()
                .map(|level| level * scale)
                .collect())
        }
    }
}

/// Map every value to an evenly spaced level in `(0, 1]`.
///
/// The sorted domain is split into at most `max_levels` equal-count buckets
/// (`-1` keeps one level per distinct value); bucket `i` of `k` gets
/// `(i + 1) / k`. There is no 256 cap here.
pub fn numeric_levels(values: &[AttrValue], max_levels: i32) -> Result<Vec<f32>, EncodingError> {
    let domain = AttributeDomain::from_values(values);
    let budget = match max_levels {
        UNBOUNDED => domain.len(),
        n if n > 0 => n as usize,
        n => {
            return Err(EncodingError::parameter(
                "max_levels",
                format!("{} is out of range; use -1 or a positive count", n),
            ))
        }
    };
    let buckets = domain.buckets(budget);
    let k = buckets.len() as f32;

    let mut levels = BTreeMap::new();
    for (i, bucket) in buckets.iter().enumerate() {
        let level = (i + 1) as f32 / k;
        for value in domain.bucket_members(bucket) {
            levels.insert(value, level);
        }
    }
    values
        .iter()
        .map(|v| {
            levels
                .get(v)
                .copied()
                .ok_or_else(|| EncodingError::UnmappedValue { value: v.to_string() })
        })
        .collect()
}

/// Zip ids with their layout position and channel values.
pub fn assemble_glyphs(
    ids: &[String],
    layout: &HashMap<String, (f32, f32)>,
    colors: &[Color],
    sizes: &[f32],
    alphas: &[f32],
) -> Result<Vec<Glyph>, EncodingError> {
    check_len("colors", colors.len(), ids.len())?;
    check_len("sizes", sizes.len(), ids.len())?;
    check_len("alphas", alphas.len(), ids.len())?;

    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let &(x, y) = layout
                .get(id)
                .ok_or_else(|| EncodingError::MissingPosition { id: id.clone() })?;
            Ok(Glyph {
                id: id.clone(),
                x,
                y,
                color: colors[i],
                size: sizes[i],
                alpha: alphas[i],
            })
        })
        .collect()
}

/// Zip edge endpoints with both layout positions and the channel values.
pub fn assemble_edges(
    ends: &[(String, String)],
    layout: &HashMap<String, (f32, f32)>,
    colors: &[Color],
    widths: &[f32],
    alphas: &[f32],
) -> Result<Vec<EdgeGlyph>, EncodingError> {
    check_len("colors", colors.len(), ends.len())?;
    check_len("widths", widths.len(), ends.len())?;
    check_len("alphas", alphas.len(), ends.len())?;

    let position = |id: &String| {
        layout
            .get(id)
            .copied()
            .ok_or_else(|| EncodingError::MissingPosition { id: id.clone() })
    };
    ends.iter()
        .enumerate()
        .map(|(i, (source, target))| {
            let (x0, y0) = position(source)?;
            let (x1, y1) = position(target)?;
            Ok(EdgeGlyph {
                source: source.clone(),
                target: target.clone(),
                x0,
                y0,
                x1,
                y1,
                color: colors[i],
                width: widths[i],
                alpha: alphas[i],
            })
        })
        .collect()
}

fn check_len(what: &'static str, got: usize, expected: usize) -> Result<(), EncodingError> {
    if got == expected {
        Ok(())
    } else {
        Err(EncodingError::parameter(
            what,
            format!("expected {} entries, got {}", expected, got),
        ))
    }
}
