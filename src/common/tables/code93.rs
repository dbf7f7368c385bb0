// Code 93
//------------------------------------------------------------------------------

pub const CHAR_BITS: usize = 9;

/// Module patterns indexed by check value: the 43 Code 39 characters followed by
/// the four shift characters ($), (%), (/), (+)
pub const PATTERNS: [u16; 47] = [
    0b100010100, // 0
    0b101001000, // 1
    0b101000100, // 2
    0b101000010, // 3
    0b100101000, // 4
    0b100100100, // 5
    0b100100010, // 6
    0b101010000, // 7
    0b100010010, // 8
    0b100001010, // 9
    0b110101000, // A
    0b110100100, // B
    0b110100010, // C
    0b110010100, // D
    0b110010010, // E
    0b110001010, // F
    0b101101000, // G
    0b101100100, // H
    0b101100010, // I
    0b100110100, // J
    0b100011010, // K
    0b101011000, // L
    0b101001100, // M
    0b101000110, // N
    0b100101100, // O
    0b100010110, // P
    0b110110100, // Q
    0b110110010, // R
    0b110101100, // S
    0b110100110, // T
    0b110010110, // U
    0b110011010, // V
    0b101101100, // W
    0b101100110, // X
    0b100110110, // Y
    0b100111010, // Z
    0b100101110, // -
    0b111010100, // .
    0b111010010, // space
    0b111001010, // $
    0b101101110, // /
    0b101110110, // +
    0b110101110, // %
    0b100100110, // ($)
    0b111011010, // (%)
    0b111010110, // (/)
    0b100110010, // (+)
];

pub const START_STOP: u16 = 0b101011110;

/// Stop character followed by the termination bar
pub const STOP_BITS: usize = 10;
pub const STOP: u16 = 0b1010111101;

pub const C_MAX_WEIGHT: u32 = 20;
pub const K_MAX_WEIGHT: u32 = 15;
