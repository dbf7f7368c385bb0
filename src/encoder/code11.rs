use super::rules::{ensure_charset, ensure_not_empty, table_gap};
use super::SymbologyEncoder;
use crate::common::{
    mod11,
    tables::code11::{
        ALPHABET, C_MAX_WEIGHT, ELEMENTS, K_MAX_WEIGHT, K_MIN_LEN, PATTERNS, START_STOP, WIDE,
    },
    wide_narrow_to_widths, CodeCharacter, ContentError, EncodingError, Role, Symbology,
};

// Code 11
//------------------------------------------------------------------------------

pub(super) struct Code11;

impl SymbologyEncoder for Code11 {
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_charset(content, |c| ALPHABET.contains(c))?;
        Ok(content.to_owned())
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let mut values = content
            .chars()
            .map(|c| {
                let value = ALPHABET.find(c).ok_or_else(|| table_gap(Symbology::Code11, c))?;
                Ok(value as u32)
            })
            .collect::<Result<Vec<u32>, EncodingError>>()?;

        let start_stop = wide_narrow_to_widths(START_STOP, ELEMENTS, WIDE);
        let marker = |role| CodeCharacter::new(role, start_stop.clone(), None);

        let mut chars = Vec::with_capacity(values.len() * 2 + 6);
        chars.push(marker(Role::Start));
        for v in &values {
            chars.push(CodeCharacter::gap());
            chars.push(character(Role::Content, *v));
        }

        let mut checks = vec![mod11(&values, C_MAX_WEIGHT)];
        if values.len() >= K_MIN_LEN {
            values.push(checks[0]);
            checks.push(mod11(&values, K_MAX_WEIGHT));
        }
        for check in checks {
            chars.push(CodeCharacter::gap());
            chars.push(character(Role::Check, check));
        }

        chars.push(CodeCharacter::gap());
        chars.push(marker(Role::Stop));
        Ok(chars)
    }
}

fn character(role: Role, value: u32) -> CodeCharacter {
    let widths = wide_narrow_to_widths(PATTERNS[value as usize], ELEMENTS, WIDE);
    let display = ALPHABET.chars().nth(value as usize).map(String::from);
    CodeCharacter::new(role, widths, display)
}

#[cfg(test)]
mod code11_tests {
    use test_case::test_case;

    use super::Code11;
    use crate::common::{ContentError, Role};
    use crate::encoder::SymbologyEncoder;

    fn check_digits(content: &str) -> String {
        let chars = Code11.encode(content).unwrap();
        chars.iter().filter(|c| c.role() == Role::Check).filter_map(|c| c.display()).collect()
    }

    #[test_case("123-45", "5"; "c only")]
    #[test_case("0123456789", "03"; "c and k")]
    fn test_check_digits(content: &str, exp: &str) {
        assert_eq!(check_digits(content), exp);
    }

    #[test]
    fn test_structure() {
        let chars = Code11.encode("0").unwrap();
        let widths: Vec<u32> = chars.iter().map(|c| c.module_width()).collect();
        // start, gap, 0, gap, check 0, gap, stop
        assert_eq!(widths, vec![7, 1, 6, 1, 6, 1, 7]);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            Code11.validate("12A", false),
            Err(ContentError::InvalidCharacter { index: 2, character: 'A' })
        );
    }
}
