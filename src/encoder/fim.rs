use super::rules::{ensure_length, ensure_not_empty, fold_and_ensure_charset, table_gap};
use super::SymbologyEncoder;
use crate::common::{
    tables::postal::{FIM_BITS, FIM_NAMES, FIM_PATTERNS},
    CodeCharacter, ContentError, EncodingError, Role, Symbology,
};

// Facing identification mark
//------------------------------------------------------------------------------

pub(super) struct Fim;

impl SymbologyEncoder for Fim {
    fn validate(&self, content: &str, strict: bool) -> Result<String, ContentError> {
        ensure_not_empty(content)?;
        let content = fold_and_ensure_charset(content, strict, |c| FIM_NAMES.contains(c))?;
        ensure_length(&content, &[1], "one of A, B, C, D or E")?;
        Ok(content)
    }

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError> {
        let c = content.chars().next().unwrap_or('?');
        let index = FIM_NAMES.find(c).ok_or_else(|| table_gap(Symbology::Fim, c))?;
        let bits = FIM_PATTERNS[index] as u32;
        Ok(vec![CodeCharacter::from_bits(Role::Content, bits, FIM_BITS, None)])
    }
}
