use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::checksum::CheckScheme;
use super::error::ConfigError;

// Symbology
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Symbology {
    Ean13,
    Ean8,
    UpcE,
    Ean2,
    Ean5,
    Code39,
    Code39Mod43,
    Code93,
    Code128,
    Code11,
    Interleaved2of5,
    Standard2of5,
    Msi(MsiCheck),
    Codabar,
    Pharmacode,
    Fim,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Default)]
pub enum MsiCheck {
    #[default]
    Mod10,
    Mod11,
    Mod1010,
    Mod1110,
}

impl Symbology {
    pub const ALL: [Symbology; 16] = [
        Self::Ean13,
        Self::Ean8,
        Self::UpcE,
        Self::Ean2,
        Self::Ean5,
        Self::Code39,
        Self::Code39Mod43,
        Self::Code93,
        Self::Code128,
        Self::Code11,
        Self::Interleaved2of5,
        Self::Standard2of5,
        Self::Msi(MsiCheck::Mod10),
        Self::Codabar,
        Self::Pharmacode,
        Self::Fim,
    ];

    pub fn info(self) -> &'static SymbologyInfo {
        match self {
            Self::Ean13 => &EAN13,
            Self::Ean8 => &EAN8,
            Self::UpcE => &UPCE,
            Self::Ean2 => &EAN2,
            Self::Ean5 => &EAN5,
            Self::Code39 => &CODE39,
            Self::Code39Mod43 => &CODE39_MOD43,
            Self::Code93 => &CODE93,
            Self::Code128 => &CODE128,
            Self::Code11 => &CODE11,
            Self::Interleaved2of5 => &INTERLEAVED_2OF5,
            Self::Standard2of5 => &STANDARD_2OF5,
            Self::Msi(_) => &MSI,
            Self::Codabar => &CODABAR,
            Self::Pharmacode => &PHARMACODE,
            Self::Fim => &FIM,
        }
    }

    /// Scheme of the first check character. The second Code 93, Code 11 and MSI
    /// checks reuse the same routine with different weights or input.
    pub fn check_scheme(self) -> CheckScheme {
        match self {
            Self::Ean13 | Self::Ean8 | Self::UpcE => CheckScheme::Mod10Weighted,
            Self::Ean5 => CheckScheme::Ean5,
            Self::Code39Mod43 => CheckScheme::Mod43,
            Self::Code93 => CheckScheme::Mod47 { max_weight: 20 },
            Self::Code128 => CheckScheme::Mod103,
            Self::Code11 => CheckScheme::Mod11 { max_weight: 10 },
            Self::Msi(MsiCheck::Mod10 | MsiCheck::Mod1010) => CheckScheme::Luhn,
            Self::Msi(MsiCheck::Mod11 | MsiCheck::Mod1110) => CheckScheme::MsiMod11,
            Self::Ean2
            | Self::Code39
            | Self::Interleaved2of5
            | Self::Standard2of5
            | Self::Codabar
            | Self::Pharmacode
            | Self::Fim => CheckScheme::None,
        }
    }
}

impl Display for Symbology {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Msi(check) => {
                let scheme = match check {
                    MsiCheck::Mod10 => "Mod 10",
                    MsiCheck::Mod11 => "Mod 11",
                    MsiCheck::Mod1010 => "Mod 10/10",
                    MsiCheck::Mod1110 => "Mod 11/10",
                };
                write!(f, "{} {scheme}", self.info().name)
            }
            _ => f.write_str(self.info().name),
        }
    }
}

impl FromStr for Symbology {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '/'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let sym = match key.as_str() {
            "ean13" | "upca" => Self::Ean13,
            "ean8" => Self::Ean8,
            "upce" => Self::UpcE,
            "ean2" => Self::Ean2,
            "ean5" => Self::Ean5,
            "code39" => Self::Code39,
            "code39mod43" => Self::Code39Mod43,
            "code93" => Self::Code93,
            "code128" => Self::Code128,
            "code11" => Self::Code11,
            "interleaved2of5" | "itf" => Self::Interleaved2of5,
            "standard2of5" | "industrial2of5" => Self::Standard2of5,
            "msi" | "msimod10" => Self::Msi(MsiCheck::Mod10),
            "msimod11" => Self::Msi(MsiCheck::Mod11),
            "msimod1010" => Self::Msi(MsiCheck::Mod1010),
            "msimod1110" => Self::Msi(MsiCheck::Mod1110),
            "codabar" => Self::Codabar,
            "pharmacode" | "pharmacodeonetrack" => Self::Pharmacode,
            "fim" => Self::Fim,
            _ => return Err(ConfigError::InvalidValue { option: "symbology", value: s.to_owned() }),
        };
        Ok(sym)
    }
}

// Symbology info
//------------------------------------------------------------------------------

/// How a symbology spreads its caption over the caption zones.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CaptionStyle {
    /// First digit left of the symbol, two digit groups split by the middle marker
    Ean13,
    /// Two digit groups split by the middle marker
    Ean8,
    /// Number system left, six digits between the markers, check digit right
    UpcE,
    /// All displayable characters between the start and stop markers
    Text,
    None,
}

/// Fixed per-symbology layout and caption constants.
#[derive(Debug, PartialEq, Clone)]
pub struct SymbologyInfo {
    /// Human readable name, such as "EAN-8"
    pub name: &'static str,
    /// Governing standard, such as "International Standard ISO/IEC 15420"
    pub standard: &'static str,
    /// Quiet zone on each side, in modules
    pub quiet_zone_width: u32,
    /// Bar height as a multiple of the symbol width, used when there is no fixed height
    pub aspect_ratio: f64,
    /// Bar height in units, overriding the aspect ratio
    pub fixed_height: Option<f64>,
    pub allows_marker_overlap: bool,
    pub allows_quiet_zone_fill: bool,
    pub requires_caption: bool,
    pub shows_check_digits: bool,
    pub default_caption_font: &'static str,
    pub caption_style: CaptionStyle,
}

const ISO_15420: &str = "International Standard ISO/IEC 15420";
const NO_STANDARD: &str = "No international standard";
const OCRB: &str = "OCRB";
const HELVETICA: &str = "Helvetica";

const LINEAR_QUIET_ZONE: u32 = 10;
const LINEAR_HEIGHT: f64 = 50.0;
const SUPPLEMENT_HEIGHT: f64 = 66.0;

pub const EAN13: SymbologyInfo = SymbologyInfo {
    name: "EAN-13",
    standard: ISO_15420,
    quiet_zone_width: 7,
    aspect_ratio: 0.73,
    fixed_height: None,
    allows_marker_overlap: true,
    allows_quiet_zone_fill: true,
    requires_caption: true,
    shows_check_digits: true,
    default_caption_font: OCRB,
    caption_style: CaptionStyle::Ean13,
};

pub const EAN8: SymbologyInfo = SymbologyInfo {
    name: "EAN-8",
    aspect_ratio: 0.84,
    caption_style: CaptionStyle::Ean8,
    ..EAN13
};

pub const UPCE: SymbologyInfo = SymbologyInfo {
    name: "UPC-E",
    quiet_zone_width: 9,
    aspect_ratio: 1.36,
    allows_quiet_zone_fill: false,
    caption_style: CaptionStyle::UpcE,
    ..EAN13
};

pub const EAN2: SymbologyInfo = SymbologyInfo {
    name: "EAN-2",
    standard: NO_STANDARD,
    quiet_zone_width: 5,
    aspect_ratio: 1.0,
    fixed_height: Some(SUPPLEMENT_HEIGHT),
    allows_marker_overlap: false,
    allows_quiet_zone_fill: false,
    requires_caption: true,
    shows_check_digits: false,
    default_caption_font: OCRB,
    caption_style: CaptionStyle::Text,
};

pub const EAN5: SymbologyInfo = SymbologyInfo { name: "EAN-5", ..EAN2 };

pub const CODE39: SymbologyInfo = SymbologyInfo {
    name: "Code 39",
    standard: "International Standard ISO/IEC 16388",
    quiet_zone_width: LINEAR_QUIET_ZONE,
    aspect_ratio: 1.0,
    fixed_height: Some(LINEAR_HEIGHT),
    allows_marker_overlap: false,
    allows_quiet_zone_fill: false,
    requires_caption: true,
    shows_check_digits: false,
    default_caption_font: HELVETICA,
    caption_style: CaptionStyle::Text,
};

pub const CODE39_MOD43: SymbologyInfo = SymbologyInfo { name: "Code 39 Mod 43", ..CODE39 };

pub const CODE93: SymbologyInfo =
    SymbologyInfo { name: "Code 93", standard: NO_STANDARD, ..CODE39 };

pub const CODE128: SymbologyInfo =
    SymbologyInfo { name: "Code 128", standard: "International Standard ISO/IEC 15417", ..CODE39 };

pub const CODE11: SymbologyInfo =
    SymbologyInfo { name: "Code 11", standard: NO_STANDARD, ..CODE39 };

pub const INTERLEAVED_2OF5: SymbologyInfo = SymbologyInfo {
    name: "Interleaved 2 of 5",
    standard: "International Standard ISO/IEC 16390",
    ..CODE39
};

pub const STANDARD_2OF5: SymbologyInfo =
    SymbologyInfo { name: "Standard 2 of 5", standard: NO_STANDARD, ..CODE39 };

pub const MSI: SymbologyInfo = SymbologyInfo { name: "MSI", standard: NO_STANDARD, ..CODE39 };

pub const CODABAR: SymbologyInfo =
    SymbologyInfo { name: "Codabar", standard: NO_STANDARD, ..CODE39 };

pub const PHARMACODE: SymbologyInfo = SymbologyInfo {
    name: "Pharmacode One Track",
    standard: NO_STANDARD,
    quiet_zone_width: 6,
    fixed_height: Some(30.0),
    requires_caption: false,
    caption_style: CaptionStyle::None,
    ..CODE39
};

pub const FIM: SymbologyInfo = SymbologyInfo {
    name: "FIM",
    standard: NO_STANDARD,
    quiet_zone_width: 0,
    fixed_height: Some(40.0),
    requires_caption: false,
    caption_style: CaptionStyle::None,
    ..CODE39
};

#[cfg(test)]
mod symbology_tests {
    use test_case::test_case;

    use super::{CaptionStyle, MsiCheck, Symbology};
    use crate::common::checksum::CheckScheme;

    #[test_case("EAN-13", Symbology::Ean13)]
    #[test_case("ean8", Symbology::Ean8)]
    #[test_case("UPC_E", Symbology::UpcE)]
    #[test_case("Code 128", Symbology::Code128)]
    #[test_case("itf", Symbology::Interleaved2of5)]
    #[test_case("msi-mod11", Symbology::Msi(MsiCheck::Mod11))]
    #[test_case("FIM", Symbology::Fim)]
    fn test_from_str(name: &str, exp: Symbology) {
        assert_eq!(name.parse::<Symbology>(), Ok(exp));
    }

    #[test]
    fn test_unknown_name() {
        assert!("qr".parse::<Symbology>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for sym in Symbology::ALL {
            assert_eq!(sym.to_string().parse::<Symbology>(), Ok(sym), "{sym}");
        }
    }

    #[test]
    fn test_capabilities() {
        for sym in Symbology::ALL {
            let info = sym.info();
            if info.allows_marker_overlap || info.allows_quiet_zone_fill {
                assert_eq!(info.default_caption_font, "OCRB", "{sym}");
            }
            if !info.requires_caption {
                assert_eq!(info.caption_style, CaptionStyle::None, "{sym}");
            }
        }
        assert!(Symbology::Ean8.info().allows_quiet_zone_fill);
        assert!(!Symbology::UpcE.info().allows_quiet_zone_fill);
        assert!(!Symbology::Code93.info().shows_check_digits);
    }

    #[test_case(Symbology::Ean8, &[9, 6, 3, 8, 5, 0, 7], Some(4))]
    #[test_case(Symbology::Msi(MsiCheck::Mod10), &[1, 2, 3, 4], Some(4))]
    #[test_case(Symbology::Codabar, &[1, 2], None)]
    fn test_check_scheme(sym: Symbology, values: &[u32], exp: Option<u32>) {
        assert_eq!(sym.check_scheme().compute(values), exp);
    }

    #[test]
    fn test_check_scheme_matches_caption_flag() {
        for sym in Symbology::ALL {
            if sym.info().shows_check_digits {
                assert_ne!(sym.check_scheme(), CheckScheme::None, "{sym}");
            }
        }
    }
}
