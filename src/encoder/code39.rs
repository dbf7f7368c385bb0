use super::rules::{ensure_not_empty, fold_and_ensure_charset, table_gap};
use super::SymbologyEncoder;
use crate::common::{
    mod43,
    tables::code39::{char_of, value_of, ELEMENTS, PATTERNS, START_STOP, WIDE},
    wide_narrow_to_widths, CodeCharacter, ContentError, EncodingError, Role, Symbology,
};

// Code 39
//------------------------------------------------------------------------------

pub(super) struct Code39 {
    pub(super) mod43: bool,
}

impl Code39 {
    fn symbology(&self) -> Symbology {
        if self.mod43 {
            Symbology::Code39Mod43
        } else {
            Symbology::Code39
        }
    }
}

impl SymbologyEncoder for Code39 {
    fn validate(&self, content: &str, strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        fold_and_ensure_charset(content, strict, |c| value_of(c).is_some())
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let values = content
            .chars()
            .map(|c| value_of(c).map(|v| v as u32).ok_or_else(|| table_gap(self.symbology(), c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut chars = Vec::with_capacity(values.len() * 2 + 4);
        chars.push(star(Role::Start));
        for (c, v) in content.chars().zip(&values) {
            chars.push(CodeCharacter::gap());
            chars.push(character(Role::Content, *v, c));
        }
        if self.mod43 {
            let check = mod43(&values);
            let c = char_of(check as usize).ok_or_else(|| table_gap(self.symbology(), '?'))?;
            chars.push(CodeCharacter::gap());
            chars.push(character(Role::Check, check, c));
        }
        chars.push(CodeCharacter::gap());
        chars.push(star(Role::Stop));
        Ok(chars)
    }
}

fn character(role: Role, value: u32, display: char) -> CodeCharacter {
    let widths = wide_narrow_to_widths(PATTERNS[value as usize], ELEMENTS, WIDE);
    CodeCharacter::new(role, widths, Some(display.to_string()))
}

fn star(role: Role) -> CodeCharacter {
    CodeCharacter::new(role, wide_narrow_to_widths(START_STOP, ELEMENTS, WIDE), None)
}

#[cfg(test)]
mod code39_tests {
    use test_case::test_case;

    use super::Code39;
    use crate::common::{ContentError, Role};
    use crate::encoder::SymbologyEncoder;

    #[test]
    fn test_single_character() {
        let chars = Code39 { mod43: false }.encode("A").unwrap();
        let modules: String = chars.iter().map(|c| c.to_bit_string()).collect();
        assert_eq!(modules, "10001011101110101110101000101110100010111011101");
    }

    #[test]
    fn test_mod43_check() {
        let chars = Code39 { mod43: true }.encode("CODE39").unwrap();
        let check = chars.iter().find(|c| c.role() == Role::Check).unwrap();
        assert_eq!(check.display(), Some("W"));
        assert!(Code39 { mod43: false }.encode("CODE39").unwrap().iter().all(|c| c.role() != Role::Check));
    }

    #[test_case("code-39", false, Ok("CODE-39"))]
    #[test_case("code-39", true, Err(ContentError::InvalidCharacter { index: 0, character: 'c' }))]
    #[test_case("A*B", false, Err(ContentError::InvalidCharacter { index: 1, character: '*' }))]
    #[test_case("", false, Err(ContentError::Empty))]
    fn test_validate(content: &str, strict: bool, exp: Result<&str, ContentError>) {
        assert_eq!(Code39 { mod43: false }.validate(content, strict), exp.map(String::from));
    }
}
