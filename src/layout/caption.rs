use super::options::RenderOptions;
use crate::common::{CaptionStyle, CodeCharacter, Role};
use crate::encoder::{upce_check_digit, Code};

// Caption zones
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum CaptionZone {
    LeftQuietZone,
    LeftNumberZone,
    RightNumberZone,
    RightQuietZone,
    /// Between the start and stop markers of symbols without a middle marker
    TextZone,
}

/// Text shown in `zone`, or `None` when the symbology leaves the zone empty.
pub fn caption_text(code: &Code, zone: CaptionZone, options: &RenderOptions) -> Option<String> {
    let info = code.symbology().info();
    let show_check = options.show_check_digits || info.shows_check_digits;
    let chars = code.characters();

    let text = match (info.caption_style, zone) {
        (CaptionStyle::Ean13 | CaptionStyle::UpcE, CaptionZone::LeftQuietZone) => {
            code.content().chars().next().map(String::from)
        }
        (CaptionStyle::Ean13 | CaptionStyle::Ean8, CaptionZone::LeftNumberZone) => {
            let middle = chars.iter().position(|c| c.role() == Role::Middle)?;
            Some(displays(&chars[..middle], show_check))
        }
        (CaptionStyle::Ean13 | CaptionStyle::Ean8, CaptionZone::RightNumberZone) => {
            let middle = chars.iter().position(|c| c.role() == Role::Middle)?;
            Some(displays(&chars[middle + 1..], show_check))
        }
        (CaptionStyle::UpcE, CaptionZone::TextZone) => Some(displays(chars, false)),
        // The check digit is implied by the digit parities
        (CaptionStyle::UpcE, CaptionZone::RightQuietZone) if show_check => {
            char::from_digit(upce_check_digit(code.content()), 10).map(String::from)
        }
        (CaptionStyle::Text, CaptionZone::TextZone) => Some(displays(chars, show_check)),
        _ => None,
    };
    text.filter(|t| !t.is_empty())
}

fn displays(chars: &[CodeCharacter], show_check: bool) -> String {
    chars
        .iter()
        .filter(|c| match c.role() {
            Role::Content => true,
            Role::Check => show_check,
            _ => false,
        })
        .filter_map(|c| c.display())
        .collect()
}
