// MSI
//------------------------------------------------------------------------------

pub const DIGIT_BITS: usize = 4;

/// Widths of a set bit: wide bar, narrow space
pub const ONE: [u8; 2] = [2, 1];
/// Widths of a cleared bit: narrow bar, wide space
pub const ZERO: [u8; 2] = [1, 2];

pub const START: [u8; 2] = [2, 1];
pub const STOP: [u8; 3] = [1, 2, 1];

pub fn digit_widths(digit: u32) -> Vec<u8> {
    debug_assert!(digit < 10, "Invalid MSI digit {digit}");

    (0..DIGIT_BITS).rev().flat_map(|i| if digit >> i & 1 == 1 { ONE } else { ZERO }).collect()
}
