use num_traits::PrimInt;

// Pattern conversions
//------------------------------------------------------------------------------

/// Converts the low `len` bits of `bits`, most significant first, into run widths.
/// A set bit is a bar module. The result alternates bar/space starting with a bar;
/// a pattern beginning with a space gets a leading zero-width bar.
pub fn bits_to_widths<T: PrimInt>(bits: T, len: usize) -> Vec<u8> {
    debug_assert!(len > 0 && len <= T::zero().count_zeros() as usize, "Invalid bit length {len}");

    let mut widths = Vec::with_capacity(len);
    let mut is_bar = true;
    let mut run = 0u8;
    for i in (0..len).rev() {
        let bit = (bits >> i) & T::one() == T::one();
        if bit != is_bar {
            widths.push(run);
            is_bar = bit;
            run = 0;
        }
        run += 1;
    }
    widths.push(run);
    widths
}

/// Expands the low `len` flags of `flags`, most significant first, into element widths.
/// A set flag is a wide element, a cleared flag a narrow one.
pub fn wide_narrow_to_widths<T: PrimInt>(flags: T, len: usize, wide: u8) -> Vec<u8> {
    debug_assert!(len > 0 && len <= T::zero().count_zeros() as usize, "Invalid flag length {len}");

    (0..len).rev().map(|i| if (flags >> i) & T::one() == T::one() { wide } else { 1 }).collect()
}

/// Renders alternating bar/space widths as a module string, `1` for bar modules.
pub fn widths_to_bit_string(widths: &[u8]) -> String {
    let mut res = String::with_capacity(widths.iter().map(|w| *w as usize).sum());
    for (i, w) in widths.iter().enumerate() {
        let c = if i & 1 == 0 { '1' } else { '0' };
        res.extend(std::iter::repeat(c).take(*w as usize));
    }
    res
}

#[cfg(test)]
mod bit_utils_tests {
    use super::*;

    #[test]
    fn test_bits_to_widths() {
        assert_eq!(bits_to_widths(0b101u8, 3), vec![1, 1, 1]);
        assert_eq!(bits_to_widths(0b0001101u8, 7), vec![0, 3, 2, 1, 1]);
        assert_eq!(bits_to_widths(0b1110010u8, 7), vec![3, 2, 1, 1]);
        assert_eq!(bits_to_widths(0b1010111101u16, 10), vec![1, 1, 1, 1, 4, 1, 1]);
    }

    #[test]
    fn test_wide_narrow_to_widths() {
        assert_eq!(wide_narrow_to_widths(0b00110u8, 5, 3), vec![1, 1, 3, 3, 1]);
        assert_eq!(wide_narrow_to_widths(0b010010100u16, 9, 2), vec![1, 2, 1, 1, 2, 1, 2, 1, 1]);
    }

    #[test]
    fn test_widths_to_bit_string() {
        assert_eq!(widths_to_bit_string(&[0, 3, 2, 1, 1]), "0001101");
        assert_eq!(widths_to_bit_string(&[1, 1, 1]), "101");
    }
}
