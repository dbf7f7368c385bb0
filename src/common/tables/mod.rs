//! Read-only pattern tables for every supported symbology.

pub mod codabar;
pub mod code11;
pub mod code128;
pub mod code39;
pub mod code93;
pub mod ean;
pub mod msi;
pub mod postal;
pub mod two_of_five;
