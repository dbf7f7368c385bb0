//! Check digit schemes shared by the symbologies.
//!
//! Every routine takes the numeric values of the characters in render order
//! (digits for the numeric symbologies, table indices for Code 39/93/11/128)
//! and returns the check value. Weights always count from the rightmost value.

// Check scheme
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CheckScheme {
    /// EAN/UPC modulo 10 with 3-1 weighting
    Mod10Weighted,
    /// EAN-5 parity key, weights 3 and 9
    Ean5,
    Mod43,
    /// Code 93 modulo 47 with weights cycling 1..=max_weight
    Mod47 { max_weight: u32 },
    /// Code 11 modulo 11 with weights cycling 1..=max_weight
    Mod11 { max_weight: u32 },
    /// MSI modulo 10 (Luhn)
    Luhn,
    /// MSI modulo 11, weights cycling 2..=7, may yield 10
    MsiMod11,
    Mod103,
    None,
}

impl CheckScheme {
    /// Returns `None` when the scheme has no check value.
    pub fn compute(&self, values: &[u32]) -> Option<u32> {
        match *self {
            Self::Mod10Weighted => Some(mod10_weighted(values)),
            Self::Ean5 => Some(ean5_key(values)),
            Self::Mod43 => Some(mod43(values)),
            Self::Mod47 { max_weight } => Some(mod47(values, max_weight)),
            Self::Mod11 { max_weight } => Some(mod11(values, max_weight)),
            Self::Luhn => Some(luhn(values)),
            Self::MsiMod11 => Some(msi_mod11(values)),
            Self::Mod103 => Some(mod103(values)),
            Self::None => None,
        }
    }
}

// Weighted sums
//------------------------------------------------------------------------------

pub fn mod10_weighted(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| if i & 1 == 0 { d * 3 } else { *d })
        .sum();
    (10 - sum % 10) % 10
}

pub fn ean5_key(digits: &[u32]) -> u32 {
    debug_assert_eq!(digits.len(), 5, "EAN-5 key needs 5 digits");

    let sum: u32 =
        digits.iter().enumerate().map(|(i, d)| if i & 1 == 0 { d * 3 } else { d * 9 }).sum();
    sum % 10
}

pub fn mod43(values: &[u32]) -> u32 {
    values.iter().sum::<u32>() % 43
}

pub fn mod47(values: &[u32], max_weight: u32) -> u32 {
    cyclic_weighted_sum(values, 1, max_weight) % 47
}

pub fn mod11(values: &[u32], max_weight: u32) -> u32 {
    cyclic_weighted_sum(values, 1, max_weight) % 11
}

pub fn luhn(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| match i & 1 {
            0 => {
                let dbl = d * 2;
                dbl / 10 + dbl % 10
            }
            _ => *d,
        })
        .sum();
    (10 - sum % 10) % 10
}

pub fn msi_mod11(digits: &[u32]) -> u32 {
    let sum = cyclic_weighted_sum(digits, 2, 7);
    (11 - sum % 11) % 11
}

/// Code 128 checksum. The first value is the start character and carries weight 1,
/// as does the first data character.
pub fn mod103(values: &[u32]) -> u32 {
    let Some((start, data)) = values.split_first() else {
        return 0;
    };
    let sum: u32 = data.iter().enumerate().map(|(i, v)| (i as u32 + 1) * v).sum();
    (start + sum) % 103
}

// Weights run min_weight..=max_weight from the rightmost value, then wrap
fn cyclic_weighted_sum(values: &[u32], min_weight: u32, max_weight: u32) -> u32 {
    let span = max_weight - min_weight + 1;
    values.iter().rev().enumerate().map(|(i, v)| (min_weight + i as u32 % span) * v).sum()
}

pub(crate) fn digit_values(content: &str) -> Vec<u32> {
    content.chars().filter_map(|c| c.to_digit(10)).collect()
}

#[cfg(test)]
mod checksum_tests {
    use test_case::test_case;

    use super::*;

    #[test_case("400638133393", 1; "ean13")]
    #[test_case("9638507", 4; "ean8")]
    #[test_case("03600029145", 2; "upca")]
    #[test_case("590123412345", 7; "ean13_2")]
    fn test_mod10_weighted(content: &str, exp: u32) {
        assert_eq!(mod10_weighted(&digit_values(content)), exp);
    }

    #[test]
    fn test_ean5_key() {
        // (5 + 4 + 5) * 3 + (2 + 9) * 9 = 141
        assert_eq!(ean5_key(&digit_values("52495")), 1);
    }

    #[test]
    fn test_luhn() {
        assert_eq!(luhn(&digit_values("1234")), 4);
        assert_eq!(luhn(&digit_values("7992739871")), 3);
    }

    #[test]
    fn test_msi_mod11() {
        // 1*5 + 2*4 + 3*3 + 4*2 = 30
        assert_eq!(msi_mod11(&digit_values("1234")), (11 - 30 % 11) % 11);
    }

    #[test]
    fn test_mod43() {
        // C = 12, O = 24, D = 13, E = 14, - = 36, 3 = 3, 9 = 9
        assert_eq!(mod43(&[12, 24, 13, 14, 36, 3, 9]), 111 % 43);
    }

    #[test]
    fn test_mod47() {
        // "TEST93": T=29, E=14, S=28, T=29, 9, 3
        let vals = [29, 14, 28, 29, 9, 3];
        let c = mod47(&vals, 20);
        assert_eq!(c, (29 * 6 + 14 * 5 + 28 * 4 + 29 * 3 + 9 * 2 + 3) % 47);
        let mut with_c = vals.to_vec();
        with_c.push(c);
        let k = mod47(&with_c, 15);
        assert_eq!(k, (29 * 7 + 14 * 6 + 28 * 5 + 29 * 4 + 9 * 3 + 3 * 2 + c) % 47);
    }

    #[test]
    fn test_mod11_wraps_weights() {
        let vals = [1; 12];
        // weights from the right: 1..=10, then 1, 2
        assert_eq!(mod11(&vals, 10), (55 + 1 + 2) % 11);
    }

    #[test]
    fn test_mod103() {
        // Start B, then "PJJ123C" in code set B
        let vals = [104, 48, 42, 42, 17, 18, 19, 35];
        assert_eq!(mod103(&vals), 879 % 103);
    }

    #[test]
    fn test_not_applicable() {
        assert_eq!(CheckScheme::None.compute(&[1, 2, 3]), None);
        assert_eq!(CheckScheme::Mod10Weighted.compute(&digit_values("9638507")), Some(4));
    }
}
