use log::debug;

use crate::common::{ConfigError, Symbology};

// Render options
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Clone)]
pub struct RenderOptions {
    /// Width of one module, in output units
    pub bar_scale: f64,
    pub print_caption: bool,
    /// Caption font, `None` for the symbology default
    pub caption_font_name: Option<String>,
    /// Share of the caption band the markers extend into, 0..=1
    pub marker_overlap_percent: f64,
    pub fill_empty_quiet_zones: bool,
    pub debug_tint: bool,
    pub show_check_digits: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bar_scale: 1.0,
            print_caption: false,
            caption_font_name: None,
            marker_overlap_percent: 1.0,
            fill_empty_quiet_zones: false,
            debug_tint: false,
            show_check_digits: false,
        }
    }
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bar_scale.is_finite() || self.bar_scale <= 0.0 {
            return Err(ConfigError::InvalidBarScale(self.bar_scale));
        }
        if !(0.0..=1.0).contains(&self.marker_overlap_percent) {
            return Err(ConfigError::InvalidOverlapPercent(self.marker_overlap_percent));
        }
        Ok(())
    }

    pub fn font_name(&self, symbology: Symbology) -> &str {
        self.caption_font_name.as_deref().unwrap_or(symbology.info().default_caption_font)
    }

    /// Builds options from string pairs, such as `bar_scale=2`. Unknown keys are
    /// skipped, unparsable or out of range values are rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = Self::builder();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            match key {
                "bar_scale" => builder.bar_scale(parse("bar_scale", value)?),
                "print_caption" => builder.print_caption(parse("print_caption", value)?),
                "caption_font_name" => builder.caption_font_name(value),
                "marker_overlap_percent" => {
                    builder.marker_overlap_percent(parse("marker_overlap_percent", value)?)
                }
                "fill_empty_quiet_zones" => {
                    builder.fill_empty_quiet_zones(parse("fill_empty_quiet_zones", value)?)
                }
                "debug_tint" => builder.debug_tint(parse("debug_tint", value)?),
                "show_check_digits" => {
                    builder.show_check_digits(parse("show_check_digits", value)?)
                }
                _ => {
                    debug!("Ignoring unknown render option {key:?}");
                    continue;
                }
            };
        }
        builder.build()
    }
}

fn parse<T: std::str::FromStr>(option: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue { option, value: value.to_owned() })
}

// Render options builder
//------------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn bar_scale(&mut self, bar_scale: f64) -> &mut Self {
        self.options.bar_scale = bar_scale;
        self
    }

    pub fn print_caption(&mut self, print_caption: bool) -> &mut Self {
        self.options.print_caption = print_caption;
        self
    }

    pub fn caption_font_name(&mut self, name: &str) -> &mut Self {
        self.options.caption_font_name = Some(name.to_owned());
        self
    }

    pub fn unset_caption_font_name(&mut self) -> &mut Self {
        self.options.caption_font_name = None;
        self
    }

    pub fn marker_overlap_percent(&mut self, percent: f64) -> &mut Self {
        self.options.marker_overlap_percent = percent;
        self
    }

    pub fn fill_empty_quiet_zones(&mut self, fill: bool) -> &mut Self {
        self.options.fill_empty_quiet_zones = fill;
        self
    }

    pub fn debug_tint(&mut self, debug_tint: bool) -> &mut Self {
        self.options.debug_tint = debug_tint;
        self
    }

    pub fn show_check_digits(&mut self, show: bool) -> &mut Self {
        self.options.show_check_digits = show;
        self
    }

    pub fn build(&self) -> Result<RenderOptions, ConfigError> {
        self.options.validate()?;
        Ok(self.options.clone())
    }
}

#[cfg(test)]
mod options_tests {
    use test_case::test_case;

    use super::RenderOptions;
    use crate::common::{ConfigError, Symbology};

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.bar_scale, 1.0);
        assert_eq!(opts.marker_overlap_percent, 1.0);
        assert!(!opts.print_caption && !opts.fill_empty_quiet_zones);
        assert_eq!(opts.validate(), Ok(()));
        assert_eq!(opts.font_name(Symbology::Ean13), "OCRB");
        assert_eq!(opts.font_name(Symbology::Code128), "Helvetica");
    }

    #[test_case(0.0, 1.0, Err(ConfigError::InvalidBarScale(0.0)))]
    #[test_case(-2.0, 1.0, Err(ConfigError::InvalidBarScale(-2.0)))]
    #[test_case(f64::INFINITY, 1.0, Err(ConfigError::InvalidBarScale(f64::INFINITY)))]
    #[test_case(1.0, 1.5, Err(ConfigError::InvalidOverlapPercent(1.5)))]
    #[test_case(1.0, -0.1, Err(ConfigError::InvalidOverlapPercent(-0.1)))]
    #[test_case(2.5, 0.0, Ok(()))]
    fn test_validate(scale: f64, overlap: f64, exp: Result<(), ConfigError>) {
        let res = RenderOptions::builder().bar_scale(scale).marker_overlap_percent(overlap).build();
        assert_eq!(res.map(|_| ()), exp);
    }

    #[test]
    fn test_nan_scale() {
        let opts = RenderOptions { bar_scale: f64::NAN, ..Default::default() };
        assert!(matches!(opts.validate(), Err(ConfigError::InvalidBarScale(_))));
    }

    #[test]
    fn test_builder_font() {
        let opts = RenderOptions::builder().caption_font_name("Courier").build().unwrap();
        assert_eq!(opts.font_name(Symbology::Ean8), "Courier");
        let opts = RenderOptions::builder()
            .caption_font_name("Courier")
            .unset_caption_font_name()
            .build()
            .unwrap();
        assert_eq!(opts.caption_font_name, None);
    }

    #[test]
    fn test_from_pairs() {
        let pairs = [
            ("bar_scale", "2"),
            ("print_caption", "true"),
            ("colour", "red"),
            ("show_check_digits", " true "),
        ];
        let opts = RenderOptions::from_pairs(pairs).unwrap();
        assert_eq!(opts.bar_scale, 2.0);
        assert!(opts.print_caption);
        assert!(opts.show_check_digits);
    }

    #[test]
    fn test_from_pairs_errors() {
        assert_eq!(
            RenderOptions::from_pairs([("bar_scale", "wide")]),
            Err(ConfigError::InvalidValue { option: "bar_scale", value: "wide".to_string() })
        );
        assert_eq!(
            RenderOptions::from_pairs([("bar_scale", "-1")]),
            Err(ConfigError::InvalidBarScale(-1.0))
        );
    }
}
