use super::rules::{digit_char, ensure_digits, ensure_not_empty};
use super::SymbologyEncoder;
use crate::common::{
    digit_values, luhn, msi_mod11,
    tables::msi::{digit_widths, START, STOP},
    CodeCharacter, ContentError, EncodingError, MsiCheck, Role,
};

// MSI
//------------------------------------------------------------------------------

pub(super) struct Msi(pub(super) MsiCheck);

impl SymbologyEncoder for Msi {
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_digits(content)?;
        Ok(content.to_owned())
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let digits = digit_values(content);
        let checks = check_digits(self.0, &digits);

        let mut chars = Vec::with_capacity(digits.len() + checks.len() + 2);
        chars.push(CodeCharacter::marker(Role::Start, &START));
        chars.extend(digits.iter().map(|d| character(Role::Content, *d)));
        chars.extend(checks.iter().map(|d| character(Role::Check, *d)));
        chars.push(CodeCharacter::marker(Role::Stop, &STOP));
        Ok(chars)
    }
}

fn character(role: Role, digit: u32) -> CodeCharacter {
    CodeCharacter::new(role, digit_widths(digit), Some(digit_char(digit).to_string()))
}

/// Check digits in render order. A modulo 11 result of 10 is written as the digits 1 0.
fn check_digits(scheme: MsiCheck, digits: &[u32]) -> Vec<u32> {
    let mod11 = |digits: &[u32]| match msi_mod11(digits) {
        10 => vec![1, 0],
        c => vec![c],
    };
    // Second check covers the data and the first check
    let then_luhn = |mut checks: Vec<u32>| {
        let all: Vec<u32> = digits.iter().chain(&checks).copied().collect();
        checks.push(luhn(&all));
        checks
    };

    match scheme {
        MsiCheck::Mod10 => vec![luhn(digits)],
        MsiCheck::Mod11 => mod11(digits),
        MsiCheck::Mod1010 => then_luhn(vec![luhn(digits)]),
        MsiCheck::Mod1110 => then_luhn(mod11(digits)),
    }
}
