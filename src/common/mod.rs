pub mod bit_utils;
pub mod character;
pub mod checksum;
pub mod error;
pub mod iter;
pub mod symbology;
pub mod tables;

pub use bit_utils::*;
pub use character::*;
pub use checksum::*;
pub use error::*;
pub use iter::*;
pub use symbology::*;
