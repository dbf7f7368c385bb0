use super::ean::left_digit;
use super::rules::{ensure_digits, ensure_length, ensure_not_empty};
use super::SymbologyEncoder;
use crate::common::{
    digit_values, ean5_key,
    tables::ean::{Parity, EAN2_PARITY, EAN5_PARITY, SUPPLEMENT_SEPARATOR, SUPPLEMENT_START},
    CodeCharacter, ContentError, EncodingError, Role,
};

// EAN-2 & EAN-5 add-on symbols
//------------------------------------------------------------------------------

pub(super) struct Ean2;

pub(super) struct Ean5;

impl SymbologyEncoder for Ean2 {
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_digits(content)?;
        ensure_length(content, &[2], "2 digits")?;
        Ok(content.to_owned())
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let digits = digit_values(content);
        let value = digits[0] * 10 + digits[1];
        Ok(supplement(&digits, &EAN2_PARITY[(value % 4) as usize]))
    }
}

impl SymbologyEncoder for Ean5 {
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_digits(content)?;
        ensure_length(content, &[5], "5 digits")?;
        Ok(content.to_owned())
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let digits = digit_values(content);
        Ok(supplement(&digits, &EAN5_PARITY[ean5_key(&digits) as usize]))
    }
}

fn supplement(digits: &[u32], parity: &[Parity]) -> Vec<CodeCharacter> {
    debug_assert_eq!(digits.len(), parity.len(), "One parity per supplement digit");

    let mut chars = Vec::with_capacity(digits.len() * 2);
    chars.push(CodeCharacter::marker(Role::Start, &SUPPLEMENT_START));
    for (i, (d, p)) in digits.iter().zip(parity).enumerate() {
        if i > 0 {
            chars.push(CodeCharacter::marker(Role::Separator, &SUPPLEMENT_SEPARATOR));
        }
        chars.push(left_digit(Role::Content, *d, *p));
    }
    chars
}

#[cfg(test)]
mod supplement_tests {
    use super::{Ean2, Ean5};
    use crate::common::{ContentError, Role};
    use crate::encoder::SymbologyEncoder;

    fn modules(chars: &[crate::common::CodeCharacter]) -> String {
        chars.iter().map(|c| c.to_bit_string()).collect()
    }

    #[test]
    fn test_ean2() {
        let chars = Ean2.encode("53").unwrap();
        assert_eq!(modules(&chars), "010110110001010100001");
        assert_eq!(chars[2].role(), Role::Separator);
    }

    #[test]
    fn test_ean5() {
        let chars = Ean5.encode("52495").unwrap();
        assert_eq!(modules(&chars), "010110111001010010011010011101010001011010110001");
        assert_eq!(chars.iter().filter(|c| c.role() == Role::Content).count(), 5);
    }

    #[test]
    fn test_validate() {
        assert_eq!(Ean2.validate("123", false), Err(ContentError::InvalidLength { length: 3, expected: "2 digits" }));
        assert_eq!(Ean5.validate("1234", false), Err(ContentError::InvalidLength { length: 4, expected: "5 digits" }));
        assert_eq!(Ean5.validate("12a45", false), Err(ContentError::InvalidCharacter { index: 2, character: 'a' }));
    }
}
