use palette::{FromColor, Hsl, Srgb};
use rand::Rng;

use crate::color::Color;
use crate::error::EncodingError;
use crate::palettes::{Palette, PaletteKind, MAX_PALETTE_SIZE, RANDOM_PALETTE};

/// Hue step between consecutive colors; the golden angle keeps neighbours far
/// apart on the color wheel no matter how many colors are requested.
const GOLDEN_ANGLE: f32 = 137.507_77;

/// Synthesize `size` distinguishable colors.
///
/// Hues start at a random offset and advance by the golden angle; saturation
/// and lightness are jittered per color.
pub fn random_palette<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Palette, EncodingError> {
    if size == 0 || size > MAX_PALETTE_SIZE {
        return Err(EncodingError::InvalidPalette {
            name: RANDOM_PALETTE.to_string(),
            requested: size,
            capacity: MAX_PALETTE_SIZE,
        });
    }
    let offset: f32 = rng.gen_range(0.0..360.0);
    let colors = (0..size)
        .map(|i| {
            let hue = (offset + i as f32 * GOLDEN_ANGLE) % 360.0;
            let saturation: f32 = rng.gen_range(0.55..0.95);
            let lightness: f32 = rng.gen_range(0.40..0.65);
            let hsl: Hsl = Hsl::new(hue, saturation, lightness);
            let rgb: Srgb = Srgb::from_color(hsl);
            Color::from(rgb.into_format::<u8>())
        })
        .collect();
    Ok(Palette::new(RANDOM_PALETTE, PaletteKind::Random, colors))
}
