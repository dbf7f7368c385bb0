use super::rules::{digit_char, ensure_digits, ensure_not_empty};
use super::SymbologyEncoder;
use crate::common::{
    digit_values,
    tables::two_of_five::{
        ELEMENTS, INTERLEAVED_START, INTERLEAVED_STOP, PATTERNS, STANDARD_START, STANDARD_STOP,
        WIDE,
    },
    wide_narrow_to_widths, CodeCharacter, ContentError, EncodingError, Role,
};

// Interleaved 2 of 5
//------------------------------------------------------------------------------

pub(super) struct Interleaved;

impl SymbologyEncoder for Interleaved {
    /// Odd lengths get a leading zero unless strict.
    fn validate(&self, content: &str, strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_digits(content)?;

        let length = content.len();
        match (length % 2, strict) {
            (0, _) => Ok(content.to_owned()),
            (_, false) => Ok(format!("0{content}")),
            (_, true) => {
                Err(ContentError::InvalidLength { length, expected: "an even number of digits" })
            }
        }
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let digits = digit_values(content);
        debug_assert!(digits.len() % 2 == 0, "Interleaved 2 of 5 needs digit pairs");

        let mut chars = Vec::with_capacity(digits.len() / 2 + 2);
        chars.push(CodeCharacter::marker(Role::Start, &INTERLEAVED_START));
        for pair in digits.chunks_exact(2) {
            // Bars carry the first digit, spaces the second
            let bars = digit_widths(pair[0]);
            let spaces = digit_widths(pair[1]);
            let widths = bars.into_iter().zip(spaces).flat_map(|(b, s)| [b, s]).collect();
            let display = format!("{}{}", digit_char(pair[0]), digit_char(pair[1]));
            chars.push(CodeCharacter::new(Role::Content, widths, Some(display)));
        }
        chars.push(CodeCharacter::marker(Role::Stop, &INTERLEAVED_STOP));
        Ok(chars)
    }
}

// Standard 2 of 5
//------------------------------------------------------------------------------

pub(super) struct Standard;

impl SymbologyEncoder for Standard {
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_digits(content)?;
        Ok(content.to_owned())
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let mut chars = Vec::with_capacity(content.len() + 2);
        chars.push(CodeCharacter::marker(Role::Start, &STANDARD_START));
        for d in digit_values(content) {
            // Every bar is followed by a narrow space
            let widths = digit_widths(d).into_iter().flat_map(|b| [b, 1]).collect();
            chars.push(CodeCharacter::new(Role::Content, widths, Some(digit_char(d).to_string())));
        }
        chars.push(CodeCharacter::marker(Role::Stop, &STANDARD_STOP));
        Ok(chars)
    }
}

fn digit_widths(digit: u32) -> Vec<u8> {
    wide_narrow_to_widths(PATTERNS[digit as usize], ELEMENTS, WIDE)
}
