// Codabar
//------------------------------------------------------------------------------

pub const ALPHABET: &str = "0123456789-$:/.+ABCD";

pub const ELEMENTS: usize = 7;
pub const WIDE: u8 = 3;

/// Wide element flags, bar/space... leftmost first, indexed like `ALPHABET`
pub const PATTERNS: [u8; 20] = [
    0b0000011, // 0
    0b0000110, // 1
    0b0001001, // 2
    0b1100000, // 3
    0b0010010, // 4
    0b1000010, // 5
    0b0100001, // 6
    0b0100100, // 7
    0b0110000, // 8
    0b1001000, // 9
    0b0001100, // -
    0b0011000, // $
    0b1000101, // :
    0b1010001, // /
    0b1010100, // .
    0b0010101, // +
    0b0011010, // A
    0b0101001, // B
    0b0001011, // C
    0b0001110, // D
];

pub const START_STOP: &str = "ABCD";
pub const DEFAULT_START: char = 'A';
pub const DEFAULT_STOP: char = 'B';

pub fn pattern_of(c: char) -> Option<u8> {
    ALPHABET.find(c).map(|i| PATTERNS[i])
}

#[cfg(test)]
mod codabar_table_tests {
    use super::*;

    #[test]
    fn test_wide_counts() {
        for (c, p) in ALPHABET.chars().zip(PATTERNS) {
            let exp = if c.is_ascii_digit() || c == '-' || c == '$' { 2 } else { 3 };
            assert_eq!(p.count_ones(), exp, "{c}");
        }
    }
}
