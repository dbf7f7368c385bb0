//! # barism
//!
//! A Rust library for encoding one-dimensional barcodes and laying them out for drawing.
//! Content is validated and turned into bar/space module patterns per symbology, then
//! converted into scaled rectangles and caption zones that any drawing backend can render.
//!
//! ## Features
//!
//! - **Symbologies**: EAN-13, EAN-8, UPC-E, EAN-2/EAN-5 add-ons, Code 39 (with optional mod 43),
//!   Code 93, Code 128, Code 11, Interleaved and Standard 2 of 5, MSI, Codabar, Pharmacode and FIM
//! - **Check Digits**: Computed and verified automatically for every symbology that defines them
//! - **Layout**: Quiet zones, aspect ratios, caption bands, marker overlap and fill marks
//! - **Captions**: Human readable text split into the zones each standard prints it in
//! - **Rendering**: Pluggable drawing backend, with a raster backend built on `image`
//!
//! ## Quick Start
//!
//! ### Simple Barcode Generation
//!
//! ```rust,no_run
//! use barism::{encode, layout, RenderOptions, Symbology};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Check digit is computed when left out
//! let code = encode("400638133393", Symbology::Ean13)?;
//! assert_eq!(code.check_digits(), "1");
//!
//! let geometry = layout(&code, &RenderOptions::default())?;
//! let img = geometry.to_image();
//! img.save("simple_ean13.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use barism::{layout, CodeBuilder, RenderOptions, Symbology};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = CodeBuilder::new("code-93", Symbology::Code93)
//!     .strict(false)                      // Non-strict mode upper-cases the content
//!     .build()?;
//!
//! let options = RenderOptions::builder()
//!     .bar_scale(2.0)                     // Module width in output units
//!     .print_caption(true)                // Reserve a caption band below the bars
//!     .show_check_digits(true)            // Print check characters in the caption
//!     .build()?;
//!
//! let geometry = layout(&code, &options)?;
//! assert!(geometry.warnings.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom Drawing Backend
//!
//! ```rust
//! use barism::{encode, layout, Bar, CaptionZone, DrawingBackend, Rect, RenderOptions, Symbology};
//!
//! struct Svg(String);
//!
//! impl DrawingBackend for Svg {
//!     fn fill_bar(&mut self, bar: &Bar) {
//!         let Rect { x, y, width, height } = bar.rect;
//!         self.0 += &format!("<rect x='{x}' y='{y}' width='{width}' height='{height}'/>");
//!     }
//!
//!     fn draw_caption(&mut self, rect: &Rect, text: &str, font_name: &str) {
//!         let (x, y) = (rect.x, rect.bottom());
//!         self.0 += &format!("<text x='{x}' y='{y}' font-family='{font_name}'>{text}</text>");
//!     }
//!
//!     fn tint_zone(&mut self, _zone: CaptionZone, _rect: &Rect) {}
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = encode("9638507", Symbology::Ean8)?;
//! let options = RenderOptions { print_caption: true, ..Default::default() };
//! let mut svg = Svg(String::new());
//! layout(&code, &options)?.draw(&mut svg);
//! assert!(svg.0.contains(">9638<"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Strict Mode
//!
//! Strict validation never rewrites content. Non-strict validation may upper-case letters
//! (Code 39, Code 93, Codabar start/stop letters, FIM) or pad an odd Interleaved 2 of 5
//! payload with a leading zero.

#![allow(clippy::items_after_test_module)]

pub(crate) mod common;
pub mod encoder;
pub mod layout;

pub use common::error::{BarResult, ConfigError, ContentError, EncodingError, Error, LayoutError};
pub use common::symbology::{CaptionStyle, MsiCheck, Symbology, SymbologyInfo};
pub use common::{checksum, tables, CheckScheme, CodeCharacter, Role};
pub use encoder::{compress_upca, encode, encode_with, expand_upce, validate, Code, CodeBuilder};
pub use layout::{
    caption_text, layout, measure, Bar, Caption, CaptionZone, DrawingBackend, Geometry,
    ImageCanvas, Rect, RenderOptions, RenderOptionsBuilder, Size, CAPTION_BAND_MODULES,
};
