use std::fmt;
use std::io;

/// Everything that can go wrong while turning attribute values into colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The palette name is neither registered nor `"random"`.
    UnknownPalette { name: String, available: Vec<String> },
    /// A palette was asked for more colors than it holds (or for none at all).
    InvalidPalette {
        name: String,
        requested: usize,
        capacity: usize,
    },
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },
    /// A value was looked up that never took part in building the map.
    UnmappedValue { value: String },
    InvalidColor { value: String },
    MissingPosition { id: String },
}

impl EncodingError {
    pub(crate) fn parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        EncodingError::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::UnknownPalette { name, available } => write!(
                f,
                "Unknown palette '{}'. Available palettes: {}, or 'random'",
                name,
                available.join(", ")
            ),
            EncodingError::InvalidPalette {
                name,
                requested,
                capacity,
            } => write!(
                f,
                "Palette '{}' cannot provide {} colors (capacity {})",
                name, requested, capacity
            ),
            EncodingError::InvalidParameter { parameter, message } => {
                write!(f, "Invalid {}: {}", parameter, message)
            }
            EncodingError::UnmappedValue { value } => {
                write!(f, "Value {} is not part of the color map", value)
            }
            EncodingError::InvalidColor { value } => {
                write!(f, "'{}' is neither a hex color nor a known color name", value)
            }
            EncodingError::MissingPosition { id } => {
                write!(f, "No layout position for '{}'", id)
            }
        }
    }
}

impl std::error::Error for EncodingError {}

impl From<EncodingError> for io::Error {
    fn from(e: EncodingError) -> Self {
        let kind = match e {
            EncodingError::MissingPosition { .. } => io::ErrorKind::NotFound,
            _ => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, e)
    }
}
