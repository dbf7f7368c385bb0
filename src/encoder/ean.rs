use super::rules::{
    digit_char, ensure_digits, ensure_length, ensure_not_empty, verify_check_digit,
};
use super::SymbologyEncoder;
use crate::common::{
    digit_values, mod10_weighted,
    tables::ean::{Parity, CENTRE_GUARD, DIGIT_BITS, EAN13_PARITY, NORMAL_GUARD, R_CODES},
    CodeCharacter, ContentError, EncodingError, Role,
};

// EAN-13 & EAN-8
//------------------------------------------------------------------------------

pub(super) struct Ean13;

pub(super) struct Ean8;

impl SymbologyEncoder for Ean13 {
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_digits(content)?;
        ensure_length(content, &[12, 13], "12 or 13 digits")?;
        strip_check_digit(content, 12)
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let digits = digit_values(content);
        debug_assert_eq!(digits.len(), 12, "EAN-13 body must hold 12 digits");

        let check = mod10_weighted(&digits);
        let parity = EAN13_PARITY[digits[0] as usize];

        // The first digit is carried by the parity pattern only
        let mut chars = Vec::with_capacity(15);
        chars.push(CodeCharacter::marker(Role::Start, &NORMAL_GUARD));
        let left = digits[1..7].iter().zip(parity);
        chars.extend(left.map(|(d, p)| left_digit(Role::Content, *d, p)));
        chars.push(CodeCharacter::marker(Role::Middle, &CENTRE_GUARD));
        chars.extend(digits[7..].iter().map(|d| right_digit(Role::Content, *d)));
        chars.push(right_digit(Role::Check, check));
        chars.push(CodeCharacter::marker(Role::Stop, &NORMAL_GUARD));
        Ok(chars)
    }
}

impl SymbologyEncoder for Ean8 {
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_digits(content)?;
        ensure_length(content, &[7, 8], "7 or 8 digits")?;
        strip_check_digit(content, 7)
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let digits = digit_values(content);
        debug_assert_eq!(digits.len(), 7, "EAN-8 body must hold 7 digits");

        let check = mod10_weighted(&digits);

        let mut chars = Vec::with_capacity(11);
        chars.push(CodeCharacter::marker(Role::Start, &NORMAL_GUARD));
        chars.extend(digits[..4].iter().map(|d| left_digit(Role::Content, *d, Parity::Odd)));
        chars.push(CodeCharacter::marker(Role::Middle, &CENTRE_GUARD));
        chars.extend(digits[4..].iter().map(|d| right_digit(Role::Content, *d)));
        chars.push(right_digit(Role::Check, check));
        chars.push(CodeCharacter::marker(Role::Stop, &NORMAL_GUARD));
        Ok(chars)
    }
}

// Shared EAN/UPC helpers
//------------------------------------------------------------------------------

/// Returns the first `body_len` digits, verifying a trailing check digit if present.
pub(super) fn strip_check_digit(content: &str, body_len: usize) -> Result<String, ContentError> {
    let (body, check) = content.split_at(body_len);
    if let Some(supplied) = check.chars().next() {
        verify_check_digit(supplied, mod10_weighted(&digit_values(body)))?;
    }
    Ok(body.to_owned())
}

pub(super) fn left_digit(role: Role, digit: u32, parity: Parity) -> CodeCharacter {
    let bits = parity.code(digit as usize) as u32;
    CodeCharacter::from_bits(role, bits, DIGIT_BITS, Some(digit_char(digit)))
}

fn right_digit(role: Role, digit: u32) -> CodeCharacter {
    let bits = R_CODES[digit as usize] as u32;
    CodeCharacter::from_bits(role, bits, DIGIT_BITS, Some(digit_char(digit)))
}
