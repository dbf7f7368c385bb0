use log::error;

use crate::common::{ContentError, EncodingError, Symbology};

// Content validation helpers
//------------------------------------------------------------------------------

pub(crate) fn ensure_not_empty(content: &str) -> Result<(), ContentError> {
    if content.is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(())
}

/// Rejects the first character outside the allowed set, reporting its char index.
pub(crate) fn ensure_charset(
    content: &str,
    allowed: impl Fn(char) -> bool,
) -> Result<(), ContentError> {
    match content.chars().enumerate().find(|(_, c)| !allowed(*c)) {
        Some((index, character)) => Err(ContentError::InvalidCharacter { index, character }),
        None => Ok(()),
    }
}

pub(crate) fn ensure_digits(content: &str) -> Result<(), ContentError> {
    ensure_charset(content, |c| c.is_ascii_digit())
}

/// Upper-cases ASCII letters unless strict, then checks the charset against the folded
/// content. Errors report the caller's original character.
pub(crate) fn fold_and_ensure_charset(
    content: &str,
    strict: bool,
    allowed: impl Fn(char) -> bool,
) -> Result<String, ContentError> {
    let folded = if strict { content.to_owned() } else { content.to_ascii_uppercase() };
    ensure_charset(&folded, allowed).map_err(|err| match err {
        ContentError::InvalidCharacter { index, character } => ContentError::InvalidCharacter {
            index,
            character: content.chars().nth(index).unwrap_or(character),
        },
        other => other,
    })?;
    Ok(folded)
}

pub(crate) fn ensure_length(
    content: &str,
    allowed: &[usize],
    expected: &'static str,
) -> Result<usize, ContentError> {
    let length = content.chars().count();
    if !allowed.contains(&length) {
        return Err(ContentError::InvalidLength { length, expected });
    }
    Ok(length)
}

/// Compares a caller supplied check digit with the computed one.
pub(crate) fn verify_check_digit(supplied: char, expected: u32) -> Result<(), ContentError> {
    let expected = char::from_digit(expected, 10).unwrap_or('?');
    if supplied != expected {
        return Err(ContentError::ChecksumMismatch { expected, found: supplied });
    }
    Ok(())
}

pub(crate) fn digit_char(d: u32) -> char {
    char::from_digit(d, 10).unwrap_or('?')
}

/// A validated character with no table entry. Never expected; logged loudly.
pub(crate) fn table_gap(symbology: Symbology, character: char) -> EncodingError {
    error!("{symbology} table has no entry for validated character {character:?}");
    EncodingError::InternalTableGap { symbology, character }
}
