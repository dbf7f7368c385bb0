// 2 of 5
//------------------------------------------------------------------------------

pub const ELEMENTS: usize = 5;
pub const WIDE: u8 = 3;

/// Wide element flags per digit, two of five set
pub const PATTERNS: [u8; 10] = [
    0b00110, // 0
    0b10001, // 1
    0b01001, // 2
    0b11000, // 3
    0b00101, // 4
    0b10100, // 5
    0b01100, // 6
    0b00011, // 7
    0b10010, // 8
    0b01010, // 9
];

pub const INTERLEAVED_START: [u8; 4] = [1, 1, 1, 1];
pub const INTERLEAVED_STOP: [u8; 3] = [WIDE, 1, 1];

pub const STANDARD_START: [u8; 6] = [WIDE, 1, WIDE, 1, 1, 1];
pub const STANDARD_STOP: [u8; 5] = [WIDE, 1, 1, 1, WIDE];

#[cfg(test)]
mod two_of_five_table_tests {
    use super::*;

    #[test]
    fn test_two_wide_elements() {
        for (d, p) in PATTERNS.iter().enumerate() {
            assert_eq!(p.count_ones(), 2, "digit {d}");
        }
    }
}
