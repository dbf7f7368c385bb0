mod codabar;
mod code11;
mod code128;
mod code39;
mod code93;
mod ean;
mod fim;
mod msi;
mod pharmacode;
pub(crate) mod rules;
mod supplement;
mod two_of_five;
mod upc_e;

pub use upc_e::{compress_upca, expand_upce};
pub(crate) use upc_e::check_digit as upce_check_digit;

use log::{debug, error};

use crate::common::{CodeCharacter, ContentError, EncodingError, MsiCheck, Role, Symbology};

// Symbology encoder
//------------------------------------------------------------------------------

/// One strategy per symbology. `validate` normalizes caller content; `encode` turns
/// normalized content into characters in render order.
pub(crate) trait SymbologyEncoder: Sync {
    fn validate(&self, content: &str, strict: bool) -> Result<String, ContentError>;

    fn encode(&self, content: &str) -> Result<Vec<CodeCharacter>, EncodingError>;
}

fn encoder_for(symbology: Symbology) -> &'static dyn SymbologyEncoder {
    match symbology {
        Symbology::Ean13 => &ean::Ean13,
        Symbology::Ean8 => &ean::Ean8,
        Symbology::UpcE => &upc_e::UpcE,
        Symbology::Ean2 => &supplement::Ean2,
        Symbology::Ean5 => &supplement::Ean5,
        Symbology::Code39 => &code39::Code39 { mod43: false },
        Symbology::Code39Mod43 => &code39::Code39 { mod43: true },
        Symbology::Code93 => &code93::Code93,
        Symbology::Code128 => &code128::Code128,
        Symbology::Code11 => &code11::Code11,
        Symbology::Interleaved2of5 => &two_of_five::Interleaved,
        Symbology::Standard2of5 => &two_of_five::Standard,
        Symbology::Msi(MsiCheck::Mod10) => &msi::Msi(MsiCheck::Mod10),
        Symbology::Msi(MsiCheck::Mod11) => &msi::Msi(MsiCheck::Mod11),
        Symbology::Msi(MsiCheck::Mod1010) => &msi::Msi(MsiCheck::Mod1010),
        Symbology::Msi(MsiCheck::Mod1110) => &msi::Msi(MsiCheck::Mod1110),
        Symbology::Codabar => &codabar::Codabar,
        Symbology::Pharmacode => &pharmacode::Pharmacode,
        Symbology::Fim => &fim::Fim,
    }
}

/// Checks `content` against the rules of `symbology` and returns the normalized
/// content. Computed check digits are not part of the result.
pub fn validate(content: &str, symbology: Symbology, strict: bool) -> Result<String, ContentError> {
    encoder_for(symbology).validate(content, strict)
}

/// Encodes in non-strict mode, which may fold case or pad content.
pub fn encode(content: &str, symbology: Symbology) -> Result<Code, EncodingError> {
    encode_with(content, symbology, false)
}

pub fn encode_with(
    content: &str,
    symbology: Symbology,
    strict: bool,
) -> Result<Code, EncodingError> {
    CodeBuilder::new(content, symbology).strict(strict).build()
}

// Code builder
//------------------------------------------------------------------------------

pub struct CodeBuilder<'a> {
    content: &'a str,
    symbology: Symbology,
    strict: bool,
}

impl<'a> CodeBuilder<'a> {
    pub fn new(content: &'a str, symbology: Symbology) -> Self {
        Self { content, symbology, strict: false }
    }

    pub fn content(&mut self, content: &'a str) -> &mut Self {
        self.content = content;
        self
    }

    pub fn symbology(&mut self, symbology: Symbology) -> &mut Self {
        self.symbology = symbology;
        self
    }

    pub fn strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    pub fn metadata(&self) -> String {
        format!("{{ Symbology: {}, Strict: {} }}", self.symbology, self.strict)
    }

    pub fn build(&self) -> Result<Code, EncodingError> {
        debug!("Encoding {:?} {}", self.content, self.metadata());

        let encoder = encoder_for(self.symbology);
        let content = encoder.validate(self.content, self.strict)?;
        let chars = encoder.encode(&content)?;

        let code = Code::new(self.symbology, content, chars)?;
        debug!("Encoded {} characters, {} modules", code.chars.len(), code.module_width());
        Ok(code)
    }
}

// Code
//------------------------------------------------------------------------------

/// An encoded barcode: normalized content plus the characters to render.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Code {
    symbology: Symbology,
    content: String,
    chars: Vec<CodeCharacter>,
}

impl Code {
    /// Rejects an empty character sequence, which no valid content encodes to.
    fn new(
        symbology: Symbology,
        content: String,
        chars: Vec<CodeCharacter>,
    ) -> Result<Self, EncodingError> {
        if chars.is_empty() {
            error!("{symbology} encoder produced no characters for {content:?}");
            return Err(EncodingError::EmptyEncoding { symbology });
        }
        Ok(Self { symbology, content, chars })
    }

    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn characters(&self) -> &[CodeCharacter] {
        &self.chars
    }

    pub fn module_width(&self) -> u32 {
        self.chars.iter().map(CodeCharacter::module_width).sum()
    }

    /// Display text of the check characters, in render order.
    pub fn check_digits(&self) -> String {
        self.chars.iter().filter(|c| c.role() == Role::Check).filter_map(|c| c.display()).collect()
    }

    /// Module string without quiet zones, `1` for bar modules.
    pub fn to_module_string(&self) -> String {
        self.chars.iter().map(CodeCharacter::to_bit_string).collect()
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Symbology: {}, Content: {:?}, Check: {:?}, Modules: {} }}",
            self.symbology,
            self.content,
            self.check_digits(),
            self.module_width()
        )
    }
}
