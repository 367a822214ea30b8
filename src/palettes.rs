// src/palettes.rs

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use palette::{Clamp, FromColor, IntoColor, LinSrgb, Mix, Oklab, Srgb};
use rand::Rng;

use crate::builtin::{Blend, ALIASES, BUILTIN};
use crate::color::Color;
use crate::error::EncodingError;
use crate::random::random_palette;

/// Largest palette the registry will hold or synthesize.
pub const MAX_PALETTE_SIZE: usize = 256;

/// Name that requests a freshly synthesized palette instead of a registered one.
pub const RANDOM_PALETTE: &str = "random";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    /// Ordered light-to-dark (or dark-to-light) ramp.
    Sequential,
    /// Two ramps meeting at a neutral midpoint.
    Diverging,
    /// Unordered, individually distinct colors.
    Categorical,
    Random,
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaletteKind::Sequential => "sequential",
            PaletteKind::Diverging => "diverging",
            PaletteKind::Categorical => "categorical",
            PaletteKind::Random => "random",
        };
        write!(f, "{}", s)
    }
}

/// A named, ordered sequence of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    kind: PaletteKind,
    colors: Vec<Color>,
}

impl Palette {
    pub(crate) fn new(name: impl Into<String>, kind: PaletteKind, colors: Vec<Color>) -> Self {
        Palette {
            name: name.into(),
            kind,
            colors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors this palette natively holds.
    pub fn capacity(&self) -> usize {
        self.colors.len()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Pick `size` colors out of this palette.
    ///
    /// Ramps are sampled at evenly spaced positions so the extremes are always
    /// included. Categorical palettes hand out their leading entries, except
    /// that a pair is the first and third entry for more contrast.
    pub fn take(&self, size: usize) -> Result<Palette, EncodingError> {
        let capacity = self.capacity();
        if size == 0 || size > capacity {
            return Err(EncodingError::InvalidPalette {
                name: self.name.clone(),
                requested: size,
                capacity,
            });
        }
        let colors = match self.kind {
            PaletteKind::Categorical if size == 2 && capacity >= 3 => {
                vec![self.colors[0], self.colors[2]]
            }
            PaletteKind::Categorical | PaletteKind::Random => self.colors[..size].to_vec(),
            PaletteKind::Sequential | PaletteKind::Diverging => {
                if size == 1 {
                    vec![self.colors[0]]
                } else {
                    (0..size)
                        .map(|i| self.colors[i * (capacity - 1) / (size - 1)])
                        .collect()
                }
            }
        };
        Ok(Palette::new(self.name.clone(), self.kind, colors))
    }
}

/// What a palette name refers to.
#[derive(Debug, Clone, Copy)]
pub enum PaletteSource<'a> {
    Named(&'a Palette),
    Random,
}

impl PaletteSource<'_> {
    pub fn capacity(&self) -> usize {
        match self {
            PaletteSource::Named(p) => p.capacity(),
            PaletteSource::Random => MAX_PALETTE_SIZE,
        }
    }
}

/// Immutable table of named palettes.
///
/// Build it once (usually with [`PaletteRegistry::builtin`]) and share it by
/// reference; nothing mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    palettes: BTreeMap<String, Palette>,
    aliases: BTreeMap<String, String>,
}

impl PaletteRegistry {
    /// A registry with no palettes; only `"random"` resolves.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The bundled palettes. Ramps are expanded to 256 distinct entries.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for builtin in BUILTIN {
            let anchors: Vec<Color> = builtin
                .colors
                .iter()
                .filter_map(|c| Color::parse(c).ok())
                .collect();
            let colors = match builtin.kind {
                PaletteKind::Sequential | PaletteKind::Diverging => {
                    let mut ramp = interpolate(&anchors, MAX_PALETTE_SIZE, builtin.blend);
                    make_distinct(&mut ramp);
                    ramp
                }
                PaletteKind::Categorical | PaletteKind::Random => anchors,
            };
            registry.palettes.insert(
                builtin.name.to_string(),
                Palette::new(builtin.name, builtin.kind, colors),
            );
        }
        for (alias, target) in ALIASES {
            registry
                .aliases
                .insert(alias.to_string(), target.to_string());
        }
        registry
    }

    /// Process-wide read-only copy of [`PaletteRegistry::builtin`].
    pub fn shared() -> &'static PaletteRegistry {
        static SHARED: OnceLock<PaletteRegistry> = OnceLock::new();
        SHARED.get_or_init(PaletteRegistry::builtin)
    }

    /// Register an extra palette. Colors may be hex strings or color names.
    /// Registering an existing name replaces it.
    pub fn with_palette(
        mut self,
        name: &str,
        kind: PaletteKind,
        colors: &[&str],
    ) -> Result<Self, EncodingError> {
        let key = normalize(name);
        if key == RANDOM_PALETTE {
            return Err(EncodingError::parameter(
                "palette name",
                "'random' is reserved for synthesized palettes",
            ));
        }
        if kind == PaletteKind::Random {
            return Err(EncodingError::parameter(
                "palette kind",
                "registered palettes cannot be of kind random",
            ));
        }
        if colors.is_empty() || colors.len() > MAX_PALETTE_SIZE {
            return Err(EncodingError::InvalidPalette {
                name: name.to_string(),
                requested: colors.len(),
                capacity: MAX_PALETTE_SIZE,
            });
        }
        let parsed = colors
            .iter()
            .map(|c| Color::parse(c))
            .collect::<Result<Vec<_>, _>>()?;
        self.aliases.remove(&key);
        self.palettes
            .insert(key.clone(), Palette::new(key, kind, parsed));
        Ok(self)
    }

    /// Registered palette names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        self.palettes.keys().map(String::as_str).collect()
    }

    pub fn palettes(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.values()
    }

    pub fn get(&self, name: &str) -> Option<&Palette> {
        let key = normalize(name);
        let key = self.aliases.get(&key).unwrap_or(&key);
        self.palettes.get(key)
    }

    pub fn lookup(&self, name: &str) -> Result<PaletteSource<'_>, EncodingError> {
        if normalize(name) == RANDOM_PALETTE {
            return Ok(PaletteSource::Random);
        }
        self.get(name)
            .map(PaletteSource::Named)
            .ok_or_else(|| EncodingError::UnknownPalette {
                name: name.to_string(),
                available: self.names().into_iter().map(String::from).collect(),
            })
    }

    /// Resolve `size` colors from `name`, drawing random palettes from the
    /// thread-local generator.
    pub fn resolve(&self, name: &str, size: usize) -> Result<Palette, EncodingError> {
        self.resolve_with_rng(name, size, &mut rand::thread_rng())
    }

    pub fn resolve_with_rng<R: Rng + ?Sized>(
        &self,
        name: &str,
        size: usize,
        rng: &mut R,
    ) -> Result<Palette, EncodingError> {
        match self.lookup(name)? {
            PaletteSource::Named(palette) => palette.take(size),
            PaletteSource::Random => random_palette(size, rng),
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Expand anchor stops to `count` colors.
fn interpolate(anchors: &[Color], count: usize, blend: Blend) -> Vec<Color> {
    match anchors {
        [] => return Vec::new(),
        [only] => return vec![*only; count],
        _ => {}
    }
    let segments = anchors.len() - 1;
    (0..count)
        .map(|i| {
            let t = if count == 1 {
                0.0
            } else {
                i as f32 / (count - 1) as f32
            };
            let position = t * segments as f32;
            let segment = (position.floor() as usize).min(segments - 1);
            let factor = position - segment as f32;
            let (from, to) = (anchors[segment], anchors[segment + 1]);
            let rgb: Srgb = match blend {
                Blend::Oklab => {
                    let mixed = to_oklab(from).mix(to_oklab(to), factor);
                    let lin: LinSrgb = mixed.into_color();
                    Srgb::from_linear(lin)
                }
                Blend::Srgb => from
                    .to_srgb()
                    .into_format::<f32>()
                    .mix(to.to_srgb().into_format::<f32>(), factor),
            };
            Color::from(rgb.clamp().into_format::<u8>())
        })
        .collect()
}

fn to_oklab(color: Color) -> Oklab {
    let lin: LinSrgb = color.to_srgb().into_format::<f32>().into_linear();
    Oklab::from_color(lin)
}

/// Replace repeated entries with the nearest unused color so every index of
/// a ramp is a different color. The two endpoints are kept as they are.
fn make_distinct(colors: &mut [Color]) {
    let n = colors.len();
    if n < 2 {
        return;
    }
    let mut used = HashSet::with_capacity(n);
    let order = std::iter::once(0)
        .chain(std::iter::once(n - 1))
        .chain(1..n - 1);
    for i in order {
        if used.contains(&colors[i]) {
            colors[i] = nearest_unused(colors[i], &used);
        }
        used.insert(colors[i]);
    }
}

/// Search outward in RGB (by channel distance) for a color not in `used`.
fn nearest_unused(color: Color, used: &HashSet<Color>) -> Color {
    for radius in 1..=765i32 {
        for dr in -radius..=radius {
            for dg in -(radius - dr.abs())..=(radius - dr.abs()) {
                let rest = radius - dr.abs() - dg.abs();
                for db in [rest, -rest] {
                    let candidate = (
                        nudge(color.r, dr),
                        nudge(color.g, dg),
                        nudge(color.b, db),
                    );
                    if let (Some(r), Some(g), Some(b)) = candidate {
                        let candidate = Color::new(r, g, b);
                        if !used.contains(&candidate) {
                            return candidate;
                        }
                    }
                }
            }
        }
    }
    color
}

fn nudge(channel: u8, delta: i32) -> Option<u8> {
    u8::try_from(i32::from(channel) + delta).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_anchor_colors_all_parse() {
        for builtin in BUILTIN {
            for c in builtin.colors {
                assert!(Color::parse(c).is_ok(), "{} in {}", c, builtin.name);
            }
        }
    }

    #[test]
    fn test_ramps_keep_their_endpoints() {
        let registry = PaletteRegistry::builtin();
        let viridis = registry.get("viridis").unwrap();
        assert_eq!(viridis.capacity(), MAX_PALETTE_SIZE);
        assert_eq!(viridis.colors()[0], Color::new(0x44, 0x01, 0x54));
        assert_eq!(viridis.colors()[255], Color::new(0xfd, 0xe7, 0x25));

        let grey = registry.get("gray").unwrap();
        assert_eq!(grey.colors()[0], Color::new(0, 0, 0));
        assert_eq!(grey.colors()[255], Color::new(255, 255, 255));
    }

    #[test]
    fn test_take_samples_evenly() {
        let registry = PaletteRegistry::builtin();
        let viridis = registry.get("viridis").unwrap();
        let three = viridis.take(3).unwrap();
        assert_eq!(
            three.colors(),
            &[viridis.colors()[0], viridis.colors()[127], viridis.colors()[255]]
        );
    }

    #[test]
    fn test_take_categorical_prefix() {
        let registry = PaletteRegistry::builtin();
        let cat = registry.get("category10").unwrap();
        let four = cat.take(4).unwrap();
        assert_eq!(four.colors(), &cat.colors()[..4]);
        assert_eq!(cat.take(1).unwrap().colors(), &cat.colors()[..1]);
    }

    #[test]
    fn test_take_categorical_pair_skips_neighbour() {
        let registry = PaletteRegistry::builtin();
        let set1 = registry.get("set1").unwrap();
        let two = set1.take(2).unwrap();
        assert_eq!(two.colors(), &[set1.colors()[0], set1.colors()[2]]);

        // Two-color palettes have no third entry to reach for.
        let pair = PaletteRegistry::empty()
            .with_palette("pair", PaletteKind::Categorical, &["red", "blue"])
            .unwrap();
        let pair = pair.get("pair").unwrap();
        assert_eq!(pair.take(2).unwrap().colors(), pair.colors());
    }

    #[test]
    fn test_ramps_have_distinct_entries() {
        let registry = PaletteRegistry::builtin();
        for palette in registry.palettes() {
            if matches!(palette.kind(), PaletteKind::Sequential | PaletteKind::Diverging) {
                let distinct: HashSet<_> = palette.colors().iter().collect();
                assert_eq!(distinct.len(), MAX_PALETTE_SIZE, "{}", palette.name());
            }
        }
    }

    #[test]
    fn test_grey_is_every_level() {
        let registry = PaletteRegistry::builtin();
        let grey = registry.get("grey").unwrap();
        for (i, c) in grey.colors().iter().enumerate() {
            let level = i as u8;
            assert_eq!(*c, Color::new(level, level, level));
        }
    }

    #[test]
    fn test_make_distinct_nudges_repeats() {
        let c = Color::new(10, 10, 10);
        let mut colors = vec![c, c, c, Color::new(0, 0, 0)];
        make_distinct(&mut colors);
        assert_eq!(colors[0], c);
        assert_eq!(colors[3], Color::new(0, 0, 0));
        let distinct: HashSet<_> = colors.iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let registry = PaletteRegistry::builtin();
        assert!(registry.get("Viridis").is_some());
        assert!(registry.get("Category20").is_some());
        assert!(registry.get("Greys").is_some());
    }
}
