// Code 39
//------------------------------------------------------------------------------

/// Characters in check value order
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

pub const ELEMENTS: usize = 9;
pub const WIDE: u8 = 3;

/// Wide element flags, bar/space/bar... leftmost first, indexed like `ALPHABET`
pub const PATTERNS: [u16; 43] = [
    0b000110100, // 0
    0b100100001, // 1
    0b001100001, // 2
    0b101100000, // 3
    0b000110001, // 4
    0b100110000, // 5
    0b001110000, // 6
    0b000100101, // 7
    0b100100100, // 8
    0b001100100, // 9
    0b100001001, // A
    0b001001001, // B
    0b101001000, // C
    0b000011001, // D
    0b100011000, // E
    0b001011000, // F
    0b000001101, // G
    0b100001100, // H
    0b001001100, // I
    0b000011100, // J
    0b100000011, // K
    0b001000011, // L
    0b101000010, // M
    0b000010011, // N
    0b100010010, // O
    0b001010010, // P
    0b000000111, // Q
    0b100000110, // R
    0b001000110, // S
    0b000010110, // T
    0b110000001, // U
    0b011000001, // V
    0b111000000, // W
    0b010010001, // X
    0b110010000, // Y
    0b011010000, // Z
    0b010000101, // -
    0b110000100, // .
    0b011000100, // space
    0b010101000, // $
    0b010100010, // /
    0b010001010, // +
    0b000101010, // %
];

/// Start/stop character `*`
pub const START_STOP: u16 = 0b010010100;

/// Check value of a Code 39 (and Code 93) character.
pub fn value_of(c: char) -> Option<usize> {
    ALPHABET.find(c)
}

pub fn char_of(value: usize) -> Option<char> {
    ALPHABET.chars().nth(value)
}

#[cfg(test)]
mod code39_table_tests {
    use super::*;

    #[test]
    fn test_three_wide_elements() {
        for (i, p) in PATTERNS.iter().enumerate() {
            assert_eq!(p.count_ones(), 3, "pattern {i}");
        }
        assert_eq!(START_STOP.count_ones(), 3);
    }

    #[test]
    fn test_patterns_are_unique() {
        let mut all = PATTERNS.to_vec();
        all.push(START_STOP);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 44);
    }

    #[test]
    fn test_values() {
        assert_eq!(value_of('0'), Some(0));
        assert_eq!(value_of('Z'), Some(35));
        assert_eq!(value_of('%'), Some(42));
        assert_eq!(value_of('*'), None);
        assert_eq!(char_of(38), Some(' '));
    }
}
