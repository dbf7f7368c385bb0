// EAN/UPC digit codes, 7 modules each, most significant bit leftmost
//------------------------------------------------------------------------------

pub const DIGIT_BITS: usize = 7;

/// Left-hand odd parity (set A)
pub const L_CODES: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, 0b0110001, 0b0101111, 0b0111011,
    0b0110111, 0b0001011,
];

/// Left-hand even parity (set B)
pub const G_CODES: [u8; 10] = [
    0b0100111, 0b0110011, 0b0011011, 0b0100001, 0b0011101, 0b0111001, 0b0000101, 0b0010001,
    0b0001001, 0b0010111,
];

/// Right-hand (set C)
pub const R_CODES: [u8; 10] = [
    0b1110010, 0b1100110, 0b1101100, 0b1000010, 0b1011100, 0b1001110, 0b1010000, 0b1000100,
    0b1001000, 0b1110100,
];

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn code(self, digit: usize) -> u8 {
        match self {
            Self::Odd => L_CODES[digit],
            Self::Even => G_CODES[digit],
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Self::Odd => Self::Even,
            Self::Even => Self::Odd,
        }
    }
}

use Parity::{Even as E, Odd as O};

/// Parity of the six left digits of EAN-13, keyed by the implicit first digit
pub const EAN13_PARITY: [[Parity; 6]; 10] = [
    [O, O, O, O, O, O],
    [O, O, E, O, E, E],
    [O, O, E, E, O, E],
    [O, O, E, E, E, O],
    [O, E, O, O, E, E],
    [O, E, E, O, O, E],
    [O, E, E, E, O, O],
    [O, E, O, E, O, E],
    [O, E, O, E, E, O],
    [O, E, E, O, E, O],
];

/// Parity of the six UPC-E digits for number system 0, keyed by the check digit.
/// Number system 1 uses the flipped parities.
pub const UPCE_PARITY: [[Parity; 6]; 10] = [
    [E, E, E, O, O, O],
    [E, E, O, E, O, O],
    [E, E, O, O, E, O],
    [E, E, O, O, O, E],
    [E, O, E, E, O, O],
    [E, O, O, E, E, O],
    [E, O, O, O, E, E],
    [E, O, E, O, E, O],
    [E, O, E, O, O, E],
    [E, O, O, E, O, E],
];

/// EAN-2 parity, keyed by the value modulo 4
pub const EAN2_PARITY: [[Parity; 2]; 4] = [[O, O], [O, E], [E, O], [E, E]];

/// EAN-5 parity, keyed by the EAN-5 check key
pub const EAN5_PARITY: [[Parity; 5]; 10] = [
    [E, E, O, O, O],
    [E, O, E, O, O],
    [E, O, O, E, O],
    [E, O, O, O, E],
    [O, E, E, O, O],
    [O, O, E, E, O],
    [O, O, O, E, E],
    [O, E, O, E, O],
    [O, E, O, O, E],
    [O, O, E, O, E],
];

// Guards
//------------------------------------------------------------------------------

pub const NORMAL_GUARD: [u8; 3] = [1, 1, 1];
pub const CENTRE_GUARD: [u8; 6] = [0, 1, 1, 1, 1, 1];
pub const UPCE_END_GUARD: [u8; 7] = [0, 1, 1, 1, 1, 1, 1];
pub const SUPPLEMENT_START: [u8; 5] = [0, 1, 1, 1, 2];
pub const SUPPLEMENT_SEPARATOR: [u8; 3] = [0, 1, 1];
