use super::bit_utils::{bits_to_widths, widths_to_bit_string};

// Role
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Role {
    Content,
    Check,
    Start,
    Middle,
    Stop,
    /// Inter-character gaps and supplement separators
    Separator,
    /// Quiet zone filler marks added by the layout engine
    Filler,
    /// Code set switches and shifts
    Control,
}

impl Role {
    pub fn is_marker(self) -> bool {
        matches!(self, Self::Start | Self::Middle | Self::Stop)
    }
}

// Code character
//------------------------------------------------------------------------------

/// One emitted symbol unit. `widths` alternate bar/space starting with a bar, in modules.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CodeCharacter {
    role: Role,
    widths: Vec<u8>,
    display: Option<String>,
}

impl CodeCharacter {
    pub fn new(role: Role, widths: Vec<u8>, display: Option<String>) -> Self {
        debug_assert!(!widths.is_empty(), "Code character without modules");
        debug_assert!(widths[1..].iter().all(|w| *w > 0), "Only the leading bar may be empty");

        Self { role, widths, display }
    }

    pub fn from_bits(role: Role, bits: u32, len: usize, display: Option<char>) -> Self {
        Self::new(role, bits_to_widths(bits, len), display.map(String::from))
    }

    pub fn marker(role: Role, widths: &[u8]) -> Self {
        Self::new(role, widths.to_vec(), None)
    }

    pub fn gap() -> Self {
        Self::new(Role::Separator, vec![0, 1], None)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn widths(&self) -> &[u8] {
        &self.widths
    }

    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn module_width(&self) -> u32 {
        self.widths.iter().map(|w| *w as u32).sum()
    }

    /// Iterates `(is_bar, width)` runs, skipping empty ones.
    pub fn runs(&self) -> impl Iterator<Item = (bool, u8)> + '_ {
        self.widths.iter().enumerate().filter(|(_, w)| **w > 0).map(|(i, w)| (i & 1 == 0, *w))
    }

    pub fn to_bit_string(&self) -> String {
        widths_to_bit_string(&self.widths)
    }
}
