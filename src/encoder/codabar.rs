use super::rules::{ensure_not_empty, fold_and_ensure_charset, table_gap};
use super::SymbologyEncoder;
use crate::common::{
    tables::codabar::{pattern_of, DEFAULT_START, DEFAULT_STOP, ELEMENTS, START_STOP, WIDE},
    wide_narrow_to_widths, CodeCharacter, ContentError, EncodingError, Role, Symbology,
};

// Codabar
//------------------------------------------------------------------------------

pub(super) struct Codabar;

fn is_start_stop(c: char) -> bool {
    START_STOP.contains(c)
}

impl SymbologyEncoder for Codabar {
    /// Start/stop letters are kept when given as a pair; `a-d` are upper-cased unless strict.
    fn validate(&self, content: &str, strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        let content = fold_and_ensure_charset(content, strict, |c| pattern_of(c).is_some())?;

        let chars: Vec<char> = content.chars().collect();
        let last = chars.len() - 1;
        let enclosed = is_start_stop(chars[0]) && is_start_stop(chars[last]) && last > 0;
        for (index, character) in chars.iter().copied().enumerate() {
            let at_edge = index == 0 || index == last;
            if is_start_stop(character) && !(at_edge && enclosed) {
                return Err(ContentError::InvalidCharacter { index, character });
            }
        }
        if enclosed && chars.len() < 3 {
            return Err(ContentError::InvalidLength {
                length: chars.len(),
                expected: "at least one character between start and stop",
            });
        }
        Ok(content)
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let mut data: Vec<char> = content.chars().collect();
        let (start, stop) = match (data.first().copied(), data.last().copied()) {
            (Some(first), Some(last)) if is_start_stop(first) => {
                data.remove(0);
                data.pop();
                (first, last)
            }
            _ => (DEFAULT_START, DEFAULT_STOP),
        };

        let mut chars = Vec::with_capacity(data.len() * 2 + 3);
        chars.push(character(Role::Start, start, None)?);
        for c in data {
            chars.push(CodeCharacter::gap());
            chars.push(character(Role::Content, c, Some(c))?);
        }
        chars.push(CodeCharacter::gap());
        chars.push(character(Role::Stop, stop, None)?);
        Ok(chars)
    }
}

fn character(role: Role, c: char, display: Option<char>) -> Result<CodeCharacter, EncodingError> {
    let pattern = pattern_of(c).ok_or_else(|| table_gap(Symbology::Codabar, c))?;
    let widths = wide_narrow_to_widths(pattern, ELEMENTS, WIDE);
    Ok(CodeCharacter::new(role, widths, display.map(String::from)))
}
