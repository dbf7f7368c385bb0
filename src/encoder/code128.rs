use super::rules::ensure_not_empty;
use super::SymbologyEncoder;
use crate::common::{
    mod103,
    tables::code128::{
        CODE_A, CODE_B, CODE_C, FNC4_A, FNC4_B, PATTERNS, SHIFT, START_A, START_B, START_C, STOP,
    },
    CodeCharacter, ContentError, EncodingError, Role,
};

// Code 128
//------------------------------------------------------------------------------

pub(super) struct Code128;

impl SymbologyEncoder for Code128 {
    fn validate(&self, content: &str, _strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        match content.chars().enumerate().find(|(_, c)| *c as u32 > 0xff) {
            Some((index, character)) => Err(ContentError::InvalidCharacter { index, character }),
            None => Ok(content.to_owned()),
        }
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let symbols = plan(content);
        let values: Vec<u32> = symbols.iter().map(|s| s.value).collect();
        let check = mod103(&values);

        let mut chars: Vec<CodeCharacter> = symbols
            .into_iter()
            .map(|s| CodeCharacter::new(s.role, PATTERNS[s.value as usize].to_vec(), s.display))
            .collect();
        chars.push(CodeCharacter::new(Role::Check, PATTERNS[check as usize].to_vec(), None));
        chars.push(CodeCharacter::marker(Role::Stop, &STOP));
        Ok(chars)
    }
}

// Code set selection
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    fn start(self) -> u32 {
        match self {
            Self::A => START_A,
            Self::B => START_B,
            Self::C => START_C,
        }
    }

    fn switch(self) -> u32 {
        match self {
            Self::A => CODE_A,
            Self::B => CODE_B,
            Self::C => CODE_C,
        }
    }

    fn fnc4(self) -> u32 {
        match self {
            Self::A => FNC4_A,
            _ => FNC4_B,
        }
    }

    fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            _ => Self::A,
        }
    }

    // Value of a 7 bit character in set A or B
    fn value(self, low: u8) -> u32 {
        match (self, low) {
            (Self::A, 0..=31) => low as u32 + 64,
            _ => low as u32 - 32,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Symbol {
    value: u32,
    role: Role,
    display: Option<String>,
}

impl Symbol {
    fn control(value: u32) -> Self {
        Self { value, role: Role::Control, display: None }
    }
}

// Set A or B a byte requires, None if both hold it
fn required_set(byte: u8) -> Option<CodeSet> {
    match byte & 0x7f {
        0..=31 => Some(CodeSet::A),
        96..=127 => Some(CodeSet::B),
        _ => None,
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn initial_set(bytes: &[u8]) -> CodeSet {
    let run = digit_run(bytes);
    if run >= 4 || (run == bytes.len() && run % 2 == 0) {
        return CodeSet::C;
    }
    bytes.iter().find_map(|b| required_set(*b)).unwrap_or(CodeSet::B)
}

/// Start symbol followed by data and control symbols, without check and stop.
/// Set C packs digit runs of 4+ at either end or 6+ inside; A/B follow the data.
fn plan(content: &str) -> Vec<Symbol> {
    let bytes: Vec<u8> = content.chars().map(|c| c as u32 as u8).collect();
    let mut set = initial_set(&bytes);
    let mut res = vec![Symbol { value: set.start(), role: Role::Start, display: None }];

    let mut i = 0;
    while i < bytes.len() {
        let run = digit_run(&bytes[i..]);

        if set == CodeSet::C {
            if run >= 2 {
                let value = (bytes[i] - b'0') as u32 * 10 + (bytes[i + 1] - b'0') as u32;
                let display = format!("{}{}", bytes[i] as char, bytes[i + 1] as char);
                res.push(Symbol { value, role: Role::Content, display: Some(display) });
                i += 2;
            } else {
                set = required_set(bytes[i]).unwrap_or(CodeSet::B);
                res.push(Symbol::control(set.switch()));
            }
            continue;
        }

        if run >= 4 && (i + run == bytes.len() || run >= 6) {
            if run % 2 == 1 {
                res.push(data_symbol(set, bytes[i]));
                i += 1;
            }
            set = CodeSet::C;
            res.push(Symbol::control(set.switch()));
            continue;
        }

        let byte = bytes[i];
        if let Some(needed) = required_set(byte).filter(|s| *s != set) {
            // Shift a lone character, switch for a sequence. SHIFT covers one symbol
            // only, so extended characters always switch to keep FNC4 in their set.
            let next = bytes.get(i + 1).and_then(|b| required_set(*b));
            if next == Some(set) && byte < 0x80 {
                res.push(Symbol::control(SHIFT));
                res.extend(extended(needed, byte));
                i += 1;
                continue;
            }
            set = needed;
            res.push(Symbol::control(set.switch()));
        }
        res.extend(extended(set, byte));
        i += 1;
    }
    res
}

// FNC4 prefixes the upper half of Latin-1
fn extended(set: CodeSet, byte: u8) -> Vec<Symbol> {
    let mut res = Vec::with_capacity(2);
    if byte >= 0x80 {
        res.push(Symbol::control(set.fnc4()));
    }
    res.push(data_symbol(set, byte));
    res
}

fn data_symbol(set: CodeSet, byte: u8) -> Symbol {
    debug_assert!(set != CodeSet::C, "Single characters are never coded in set C");

    let low = byte & 0x7f;
    let display = (low >= 32).then(|| char::from(byte).to_string());
    Symbol { value: set.value(low), role: Role::Content, display }
}

#[cfg(test)]
mod code128_tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::{plan, Code128, CodeSet};
    use crate::common::{ContentError, Role};
    use crate::encoder::SymbologyEncoder;

    fn values(content: &str) -> Vec<u32> {
        plan(content).iter().map(|s| s.value).collect()
    }

    #[test_case("123456", vec![105, 12, 34, 56]; "all digits in set c")]
    #[test_case("12", vec![105, 12]; "two digits in set c")]
    #[test_case("123", vec![104, 17, 18, 19]; "short odd digits in set b")]
    #[test_case("12345", vec![105, 12, 34, 100, 21]; "odd leading run")]
    #[test_case("PJJ123C", vec![104, 48, 42, 42, 17, 18, 19, 35]; "short inner run")]
    #[test_case("AB1234", vec![104, 33, 34, 99, 12, 34]; "trailing run")]
    #[test_case("A1234567B", vec![104, 33, 17, 99, 23, 45, 67, 100, 34]; "odd inner run")]
    #[test_case("A12345B", vec![104, 33, 17, 18, 19, 20, 21, 34]; "five digit inner run")]
    #[test_case("\tA", vec![103, 73, 33]; "control start")]
    #[test_case("ab\tc", vec![104, 65, 66, 98, 73, 67]; "shifted control")]
    #[test_case("a\t\t", vec![104, 65, 101, 73, 73]; "switch to a")]
    #[test_case("é", vec![104, 100, 73]; "latin1 in set b")]
    #[test_case("a\u{89}b", vec![104, 65, 101, 101, 73, 100, 66]; "lone extended control")]
    #[test_case("\t\u{e9}\t", vec![103, 73, 100, 100, 73, 101, 73]; "lone extended lowercase")]
    #[test_case("\u{89}\u{89}", vec![103, 101, 73, 101, 73]; "extended control run")]
    fn test_plan(content: &str, exp: Vec<u32>) {
        assert_eq!(values(content), exp);
    }

    // Reads symbol values back into bytes, applying SHIFT to the next symbol and
    // FNC4 to the next data character
    fn decode(values: &[u32]) -> Vec<u8> {
        let mut set = match values[0] {
            103 => CodeSet::A,
            104 => CodeSet::B,
            _ => CodeSet::C,
        };
        let (mut shift, mut fnc4) = (false, false);
        let mut res = Vec::new();
        for v in &values[1..] {
            let current = if shift { set.other() } else { set };
            shift = false;
            match (current, *v) {
                (CodeSet::C, 0..=99) => {
                    res.extend([b'0' + (*v / 10) as u8, b'0' + (*v % 10) as u8]);
                }
                (CodeSet::C, 100) | (CodeSet::A, 100) => set = CodeSet::B,
                (CodeSet::C, 101) | (CodeSet::B, 101) => set = CodeSet::A,
                (_, 99) => set = CodeSet::C,
                (_, 98) => shift = true,
                (CodeSet::A, 101) | (CodeSet::B, 100) => fnc4 = true,
                (current, v) => {
                    let low = match (current, v) {
                        (CodeSet::A, 64..=95) => v - 64,
                        _ => v + 32,
                    };
                    let high = if fnc4 { 0x80 } else { 0 };
                    res.push(low as u8 | high);
                    fnc4 = false;
                }
            }
        }
        res
    }

    #[test_case("a\u{89}b")]
    #[test_case("\t\u{e9}\t")]
    #[test_case("ab\tc")]
    #[test_case("a1234567b")]
    fn test_plan_decodes(content: &str) {
        let exp: Vec<u8> = content.chars().map(|c| c as u32 as u8).collect();
        assert_eq!(decode(&values(content)), exp);
    }

    proptest! {
        #[test]
        fn proptest_plan_decodes(bytes in proptest::collection::vec(any::<u8>(), 1..20)) {
            let content: String = bytes.iter().map(|b| char::from(*b)).collect();
            prop_assert_eq!(decode(&values(&content)), bytes);
        }
    }

    #[test]
    fn test_roles_and_display() {
        let symbols = plan("ab\tc");
        assert_eq!(symbols[0].role, Role::Start);
        assert_eq!(symbols[3].role, Role::Control);
        assert_eq!(symbols[4].display, None);
        assert_eq!(symbols[5].display.as_deref(), Some("c"));
        let symbols = plan("1234");
        assert_eq!(symbols[1].display.as_deref(), Some("12"));
    }

    #[test]
    fn test_encode() {
        let chars = Code128.encode("123456").unwrap();
        // (105 + 12 + 2 * 34 + 3 * 56) % 103 = 44
        assert_eq!(chars[4].role(), Role::Check);
        assert_eq!(chars[4].widths(), &[1, 3, 2, 1, 3, 1]);
        assert_eq!(chars[5].module_width(), 13);
        assert_eq!(chars.iter().map(|c| c.module_width()).sum::<u32>(), 11 * 5 + 13);
    }

    #[test]
    fn test_validate() {
        assert_eq!(Code128.validate("Ünïcödé", true), Ok("Ünïcödé".to_string()));
        assert_eq!(
            Code128.validate("ab€", true),
            Err(ContentError::InvalidCharacter { index: 2, character: '€' })
        );
    }

    #[test]
    fn test_set_values() {
        assert_eq!(CodeSet::A.value(b'A'), 33);
        assert_eq!(CodeSet::A.value(0), 64);
        assert_eq!(CodeSet::B.value(b'a'), 65);
    }
}
