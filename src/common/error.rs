use thiserror::Error;

use super::symbology::Symbology;

// Content error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ContentError {
    #[error("Empty content")]
    Empty,

    #[error("Invalid character {character:?} at index {index}")]
    InvalidCharacter { index: usize, character: char },

    #[error("Invalid length {length}, expected {expected}")]
    InvalidLength { length: usize, expected: &'static str },

    #[error("Check digit mismatch: expected {expected:?}, found {found:?}")]
    ChecksumMismatch { expected: char, found: char },

    #[error("Value {value} out of range {min}..={max}")]
    OutOfRange { value: u64, min: u64, max: u64 },
}

// Configuration error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Bar scale must be finite and greater than zero, got {0}")]
    InvalidBarScale(f64),

    #[error("Marker overlap percent must lie within 0..=1, got {0}")]
    InvalidOverlapPercent(f64),

    #[error("Invalid value {value:?} for option {option}")]
    InvalidValue { option: &'static str, value: String },
}

// Encoding error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EncodingError {
    #[error("Content rejected: {0}")]
    ContentRejected(#[from] ContentError),

    #[error("No {symbology} table entry for validated character {character:?}")]
    InternalTableGap { symbology: Symbology, character: char },

    #[error("{symbology} encoder produced no characters")]
    EmptyEncoding { symbology: Symbology },
}

impl EncodingError {
    /// True when the error points at a validator/table inconsistency rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::InternalTableGap { .. } | Self::EmptyEncoding { .. })
    }
}

// Layout error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Clone)]
pub enum LayoutError {
    #[error("Invalid render option: {0}")]
    InvalidOption(#[from] ConfigError),

    #[error("Option {option} has no effect on {symbology}")]
    IncompatibleOption { symbology: Symbology, option: &'static str },
}

// Crate error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Clone)]
pub enum Error {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type BarResult<T> = Result<T, Error>;
