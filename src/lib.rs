pub mod builtin;
pub mod color;
pub mod colorizer;
pub mod domain;
pub mod error;
pub mod glyph;
pub mod palettes;
pub mod progress;
pub mod random;
pub mod swatch;
pub mod table;
pub mod value;

pub use color::Color;
pub use colorizer::{AttributeColorizer, ColorBudget, ColorMap, LegendEntry};
pub use error::EncodingError;
pub use palettes::{Palette, PaletteKind, PaletteRegistry};
pub use value::AttrValue;
