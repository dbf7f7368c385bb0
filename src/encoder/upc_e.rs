use super::ean::left_digit;
use super::rules::{ensure_digits, ensure_length, ensure_not_empty, verify_check_digit};
use super::SymbologyEncoder;
use crate::common::{
    digit_values, mod10_weighted,
    tables::ean::{NORMAL_GUARD, UPCE_END_GUARD, UPCE_PARITY},
    CodeCharacter, ContentError, EncodingError, Role,
};

// UPC-E
//------------------------------------------------------------------------------

pub(super) struct UpcE;

impl SymbologyEncoder for UpcE {
    /// Normalizes to the number system followed by the six UPC-E digits.
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_digits(content)?;
        let length = ensure_length(
            content,
            &[6, 7, 8, 11, 12],
            "6, 7 or 8 digits, or an 11 or 12 digit UPC-A",
        )?;

        let upce = match length {
            6 => format!("0{content}"),
            7 | 8 => {
                ensure_number_system(content)?;
                content.to_owned()
            }
            _ => {
                ensure_number_system(content)?;
                compress_upca(content).ok_or(ContentError::InvalidLength {
                    length,
                    expected: "a zero-suppressible UPC-A",
                })?
            }
        };

        let (body, check) = upce.split_at(7);
        if let Some(supplied) = check.chars().next() {
            verify_check_digit(supplied, check_digit(body))?;
        }
        Ok(body.to_owned())
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let digits = digit_values(content);
        debug_assert_eq!(digits.len(), 7, "UPC-E body must hold 7 digits");

        // Number system and check digit are carried by the parity pattern only
        let mut parity = UPCE_PARITY[check_digit(content) as usize];
        if digits[0] == 1 {
            parity = parity.map(|p| p.flip());
        }

        let mut chars = Vec::with_capacity(8);
        chars.push(CodeCharacter::marker(Role::Start, &NORMAL_GUARD));
        chars.extend(digits[1..].iter().zip(parity).map(|(d, p)| left_digit(Role::Content, *d, p)));
        chars.push(CodeCharacter::marker(Role::Stop, &UPCE_END_GUARD));
        Ok(chars)
    }
}

fn ensure_number_system(content: &str) -> Result<(), ContentError> {
    match content.chars().next() {
        Some('0' | '1') | None => Ok(()),
        Some(character) => Err(ContentError::InvalidCharacter { index: 0, character }),
    }
}

/// Check digit of a number system + 6 digit UPC-E body, computed over its UPC-A expansion.
pub(crate) fn check_digit(body: &str) -> u32 {
    let digits = digit_values(body);
    let (ns, x) = digits.split_at(1);
    let mut upca = ns.to_vec();
    upca.extend(expand_digits(x));
    mod10_weighted(&upca)
}

// Zero suppression
//------------------------------------------------------------------------------

// x1..x6 to the ten UPC-A manufacturer and product digits
fn expand_digits(x: &[u32]) -> Vec<u32> {
    let (head, zeros, tail): (Vec<u32>, usize, Vec<u32>) = match x[5] {
        0..=2 => ([&x[..2], &x[5..]].concat(), 4, x[2..5].to_vec()),
        3 => (x[..3].to_vec(), 5, x[3..5].to_vec()),
        4 => (x[..4].to_vec(), 5, vec![x[4]]),
        _ => (x[..5].to_vec(), 4, vec![x[5]]),
    };
    head.into_iter().chain(std::iter::repeat(0).take(zeros)).chain(tail).collect()
}

/// Expands a UPC-E code (number system, six digits, optional check digit) to UPC-A.
/// Returns `None` unless the input is 7 or 8 digits.
pub fn expand_upce(upce: &str) -> Option<String> {
    if !matches!(upce.len(), 7 | 8) || !upce.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = digit_values(upce);
    let body = expand_digits(&digits[1..7]);
    let res = std::iter::once(digits[0])
        .chain(body)
        .chain(digits.get(7).copied())
        .map(|d| char::from(b'0' + d as u8))
        .collect();
    Some(res)
}

/// Compresses a UPC-A code (11 digits, or 12 with check digit) to UPC-E when its
/// number system is 0 or 1 and its zeros can be suppressed. The suppression rules
/// are tried in order of the last UPC-E digit, so the result is canonical.
pub fn compress_upca(upca: &str) -> Option<String> {
    if !matches!(upca.len(), 11 | 12) || !upca.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (ns, rest) = upca.split_at(1);
    if !matches!(ns, "0" | "1") {
        return None;
    }
    let (body, check) = rest.split_at(10);
    let (m, p) = body.split_at(5);

    let x = if &m[3..] == "00" && matches!(&m[2..3], "0" | "1" | "2") && &p[..2] == "00" {
        format!("{}{}{}", &m[..2], &p[2..], &m[2..3])
    } else if &m[3..] == "00" && &p[..3] == "000" {
        format!("{}{}3", &m[..3], &p[3..])
    } else if &m[4..] == "0" && &p[..4] == "0000" {
        format!("{}{}4", &m[..4], &p[4..])
    } else if &p[..4] == "0000" && &p[4..] >= "5" {
        format!("{m}{}", &p[4..])
    } else {
        return None;
    };

    Some(format!("{ns}{x}{check}"))
}
