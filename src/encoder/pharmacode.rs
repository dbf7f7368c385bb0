use super::rules::{ensure_digits, ensure_not_empty, table_gap};
use super::SymbologyEncoder;
use crate::common::{
    tables::postal::{PHARMA_MAX, PHARMA_MIN, PHARMA_NARROW, PHARMA_SPACE, PHARMA_WIDE},
    CodeCharacter, ContentError, EncodingError, Role, Symbology,
};

// Pharmacode one track
//------------------------------------------------------------------------------

pub(super) struct Pharmacode;

impl SymbologyEncoder for Pharmacode {
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        ensure_digits(content)?;
        let value = content.parse::<u64>().unwrap_or(u64::MAX);
        if !(PHARMA_MIN..=PHARMA_MAX).contains(&value) {
            return Err(ContentError::OutOfRange { value, min: PHARMA_MIN, max: PHARMA_MAX });
        }
        Ok(content.to_owned())
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let value = match content.parse::<u64>() {
            Ok(value) if (PHARMA_MIN..=PHARMA_MAX).contains(&value) => value,
            _ => {
                let c = content.chars().find(|c| !c.is_ascii_digit());
                return Err(table_gap(Symbology::Pharmacode, c.unwrap_or('0')));
            }
        };
        let bars = bars(value);
        let last = bars.len().saturating_sub(1);
        let chars = bars
            .into_iter()
            .enumerate()
            .map(|(i, bar)| {
                let widths = if i == last { vec![bar] } else { vec![bar, PHARMA_SPACE] };
                CodeCharacter::new(Role::Content, widths, None)
            })
            .collect();
        Ok(chars)
    }
}

/// Bar widths left to right. Reading from the right, a narrow bar at position i
/// is worth 2^i and a wide bar 2^(i+1).
fn bars(mut value: u64) -> Vec<u8> {
    let mut res = Vec::with_capacity(17);
    while value > 0 {
        if value % 2 == 0 {
            res.push(PHARMA_WIDE);
            value = (value - 2) / 2;
        } else {
            res.push(PHARMA_NARROW);
            value = (value - 1) / 2;
        }
    }
    res.reverse();
    res
}

#[cfg(test)]
mod pharmacode_tests {
    use test_case::test_case;

    use super::{bars, Pharmacode};
    use crate::common::{ContentError, EncodingError, Symbology};
    use crate::encoder::SymbologyEncoder;

    #[test_case(3, vec![1, 1])]
    #[test_case(4, vec![1, 3])]
    #[test_case(6, vec![3, 3])]
    #[test_case(7, vec![1, 1, 1])]
    #[test_case(131070, vec![3; 16])]
    fn test_bars(value: u64, exp: Vec<u8>) {
        assert_eq!(bars(value), exp);
    }

    #[test_case("2", ContentError::OutOfRange { value: 2, min: 3, max: 131070 })]
    #[test_case("131071", ContentError::OutOfRange { value: 131071, min: 3, max: 131070 })]
    #[test_case("99999999999999999999999", ContentError::OutOfRange { value: u64::MAX, min: 3, max: 131070 })]
    #[test_case("-5", ContentError::InvalidCharacter { index: 0, character: '-' })]
    fn test_validate(content: &str, exp: ContentError) {
        assert_eq!(Pharmacode.validate(content, false), Err(exp));
    }

    #[test]
    fn test_encode() {
        let chars = Pharmacode.encode("131070").unwrap();
        assert_eq!(chars.len(), 16);
        assert_eq!(chars.iter().map(|c| c.module_width()).sum::<u32>(), 16 * 3 + 15 * 2);
        let modules: String = Pharmacode.encode("3").unwrap().iter().map(|c| c.to_bit_string()).collect();
        assert_eq!(modules, "1001");
    }

    #[test_case("", '0')]
    #[test_case("12x", 'x')]
    #[test_case("0", '0')]
    fn test_encode_unvalidated(content: &str, character: char) {
        assert_eq!(
            Pharmacode.encode(content),
            Err(EncodingError::InternalTableGap { symbology: Symbology::Pharmacode, character })
        );
    }
}
