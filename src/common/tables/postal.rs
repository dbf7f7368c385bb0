// Facing identification marks
//------------------------------------------------------------------------------

pub const FIM_BITS: usize = 9;

pub const FIM_NAMES: &str = "ABCDE";

/// Module patterns of FIM A to E
pub const FIM_PATTERNS: [u16; 5] = [
    0b110010011, // A
    0b101101101, // B
    0b110101011, // C
    0b111010111, // D
    0b010000010, // E
];

// Pharmacode
//------------------------------------------------------------------------------

pub const PHARMA_NARROW: u8 = 1;
pub const PHARMA_WIDE: u8 = 3;
pub const PHARMA_SPACE: u8 = 2;
pub const PHARMA_MIN: u64 = 3;
pub const PHARMA_MAX: u64 = 131070;
