// Code 11
//------------------------------------------------------------------------------

/// Characters in check value order
pub const ALPHABET: &str = "0123456789-";

pub const ELEMENTS: usize = 5;
pub const WIDE: u8 = 2;

/// Wide element flags, bar/space/bar/space/bar leftmost first
pub const PATTERNS: [u8; 11] = [
    0b00001, // 0
    0b10001, // 1
    0b01001, // 2
    0b11000, // 3
    0b00101, // 4
    0b10100, // 5
    0b01100, // 6
    0b00011, // 7
    0b10010, // 8
    0b10000, // 9
    0b00100, // -
];

pub const START_STOP: u8 = 0b00110;

pub const C_MAX_WEIGHT: u32 = 10;
pub const K_MAX_WEIGHT: u32 = 9;
/// Content length from which the K check is appended
pub const K_MIN_LEN: usize = 10;

#[cfg(test)]
mod code11_table_tests {
    use super::*;

    #[test]
    fn test_patterns_are_unique() {
        let mut all = PATTERNS.to_vec();
        all.push(START_STOP);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 12);
    }
}
