use super::rules::{ensure_not_empty, fold_and_ensure_charset, table_gap};
use super::SymbologyEncoder;
use crate::common::{
    mod47,
    tables::code39::{char_of, value_of},
    tables::code93::{CHAR_BITS, C_MAX_WEIGHT, K_MAX_WEIGHT, PATTERNS, START_STOP, STOP, STOP_BITS},
    CodeCharacter, ContentError, EncodingError, Role, Symbology,
};

// Code 93
//------------------------------------------------------------------------------

pub(super) struct Code93;

impl SymbologyEncoder for Code93 {
    fn validate(&self, content: &str, strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        fold_and_ensure_charset(content, strict, |c| value_of(c).is_some())
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let mut values = content
            .chars()
            .map(|c| value_of(c).map(|v| v as u32).ok_or_else(|| table_gap(Symbology::Code93, c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut chars = Vec::with_capacity(values.len() + 4);
        chars.push(CodeCharacter::from_bits(Role::Start, START_STOP as u32, CHAR_BITS, None));
        for (c, v) in content.chars().zip(&values) {
            chars.push(character(Role::Content, *v, Some(c)));
        }

        // K covers the data and C
        let c_check = mod47(&values, C_MAX_WEIGHT);
        values.push(c_check);
        let k_check = mod47(&values, K_MAX_WEIGHT);
        for check in [c_check, k_check] {
            chars.push(character(Role::Check, check, char_of(check as usize)));
        }

        chars.push(CodeCharacter::from_bits(Role::Stop, STOP as u32, STOP_BITS, None));
        Ok(chars)
    }
}

fn character(role: Role, value: u32, display: Option<char>) -> CodeCharacter {
    CodeCharacter::from_bits(role, PATTERNS[value as usize] as u32, CHAR_BITS, display)
}
