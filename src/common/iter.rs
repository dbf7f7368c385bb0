use super::character::{CodeCharacter, Role};

// Iterator over the bar and space runs of a character sequence
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Run {
    /// Offset from the first module of the first character
    pub offset: u32,
    pub width: u32,
    pub is_bar: bool,
    pub role: Role,
    /// Index of the owning character
    pub index: usize,
}

pub struct RunIter<'a> {
    chars: &'a [CodeCharacter],
    index: usize,
    element: usize,
    offset: u32,
}

impl<'a> RunIter<'a> {
    pub fn new(chars: &'a [CodeCharacter]) -> Self {
        Self { chars, index: 0, element: 0, offset: 0 }
    }
}

impl Iterator for RunIter<'_> {
    type Item = Run;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ch = self.chars.get(self.index)?;
            let Some(&w) = ch.widths().get(self.element) else {
                self.index += 1;
                self.element = 0;
                continue;
            };
            let is_bar = self.element & 1 == 0;
            self.element += 1;
            if w == 0 {
                continue;
            }
            let (role, index) = (ch.role(), self.index);
            let run = Run { offset: self.offset, width: w as u32, is_bar, role, index };
            self.offset += w as u32;
            return Some(run);
        }
    }
}
