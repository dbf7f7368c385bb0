mod caption;
mod options;
mod render;

pub use caption::{caption_text, CaptionZone};
pub use options::{RenderOptions, RenderOptionsBuilder};
pub use render::{DrawingBackend, ImageCanvas};

use log::{debug, warn};

use crate::common::{LayoutError, Role, RunIter, Symbology};
use crate::encoder::Code;

/// Height of the caption band below the bars, in modules
pub const CAPTION_BAND_MODULES: f64 = 10.0;

// Quiet zone filler marks are drawn on a grid of one unit cells
const FILLER_ROWS: usize = 7;
const FILLER_COLUMNS: f64 = 4.0;

// Geometry
//------------------------------------------------------------------------------

/// Axis aligned rectangle, origin top left, y growing downwards.
#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Bar {
    pub rect: Rect,
    pub role: Role,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Caption {
    pub zone: CaptionZone,
    pub rect: Rect,
    pub text: Option<String>,
    /// The zone holds quiet zone filler marks instead of text
    pub filler: bool,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Geometry {
    pub size: Size,
    /// Bars left to right, followed by any filler marks
    pub bars: Vec<Bar>,
    pub captions: Vec<Caption>,
    pub font_name: String,
    pub debug_tint: bool,
    /// Options that were ignored for this symbology
    pub warnings: Vec<LayoutError>,
}

// Layout
//------------------------------------------------------------------------------

/// Size of the whole symbol including quiet zones, without placing anything.
pub fn measure(code: &Code, options: &RenderOptions) -> Result<Size, LayoutError> {
    options.validate()?;
    Ok(symbol_size(code, options.bar_scale))
}

pub fn layout(code: &Code, options: &RenderOptions) -> Result<Geometry, LayoutError> {
    options.validate()?;

    let symbology = code.symbology();
    let info = symbology.info();
    let warnings = incompatible_options(symbology, options);
    for w in &warnings {
        warn!("{w}");
    }

    let unit = options.bar_scale;
    let size = symbol_size(code, unit);
    let captioned = options.print_caption && info.requires_caption;
    let band = if captioned { CAPTION_BAND_MODULES * unit } else { 0.0 };
    let bar_height = size.height - band;
    let overlap =
        if info.allows_marker_overlap { options.marker_overlap_percent * band } else { 0.0 };
    let left = info.quiet_zone_width as f64 * unit;

    debug!(
        "Laying out {symbology}: {} modules, unit {unit}, size {}x{}",
        code.module_width(),
        size.width,
        size.height
    );

    let mut bars: Vec<Bar> = RunIter::new(code.characters())
        .filter(|r| r.is_bar)
        .map(|r| {
            let height = if r.role.is_marker() { bar_height + overlap } else { bar_height };
            let rect = Rect::new(left + r.offset as f64 * unit, 0.0, r.width as f64 * unit, height);
            Bar { rect, role: r.role }
        })
        .collect();

    let mut captions = if captioned {
        caption_zones(code, options, Rect::new(0.0, bar_height, size.width, band))
    } else {
        Vec::new()
    };

    if options.fill_empty_quiet_zones && info.allows_quiet_zone_fill {
        let symbol_right = left + code.module_width() as f64 * unit;
        let top = if captioned {
            bar_height + (band - FILLER_ROWS as f64 * unit) / 2.0
        } else {
            bar_height - FILLER_ROWS as f64 * unit
        };
        let sides = [
            (CaptionZone::LeftQuietZone, left - (FILLER_COLUMNS + 1.0) * unit),
            (CaptionZone::RightQuietZone, symbol_right + unit),
        ];
        for (zone, x) in sides {
            let caption = captions.iter_mut().find(|c| c.zone == zone);
            if caption.as_ref().is_some_and(|c| c.text.is_some()) {
                continue;
            }
            if let Some(c) = caption {
                c.filler = true;
            }
            bars.extend(filler_mark(zone, x, top, unit));
        }
    }

    Ok(Geometry {
        size,
        bars,
        captions,
        font_name: options.font_name(symbology).to_owned(),
        debug_tint: options.debug_tint,
        warnings,
    })
}

fn symbol_size(code: &Code, unit: f64) -> Size {
    let info = code.symbology().info();
    let modules = code.module_width() as f64;
    let width = (2 * info.quiet_zone_width) as f64 * unit + modules * unit;
    let height = match info.fixed_height {
        Some(h) => h * unit,
        None => modules * info.aspect_ratio * unit,
    };
    Size { width, height }
}

fn incompatible_options(symbology: Symbology, options: &RenderOptions) -> Vec<LayoutError> {
    let info = symbology.info();
    let defaults = RenderOptions::default();

    let mut res = Vec::new();
    let mut ignore =
        |option: &'static str| res.push(LayoutError::IncompatibleOption { symbology, option });
    if options.marker_overlap_percent != defaults.marker_overlap_percent
        && !info.allows_marker_overlap
    {
        ignore("marker_overlap_percent");
    }
    if options.fill_empty_quiet_zones && !info.allows_quiet_zone_fill {
        ignore("fill_empty_quiet_zones");
    }
    if options.print_caption && !info.requires_caption {
        ignore("print_caption");
    }
    res
}

/// Quiet zones plus either the two number zones split by the middle marker, or the
/// text zone between the start and stop markers.
fn caption_zones(code: &Code, options: &RenderOptions, band: Rect) -> Vec<Caption> {
    let info = code.symbology().info();
    let unit = options.bar_scale;
    let quiet = info.quiet_zone_width as f64 * unit;
    let chars = code.characters();

    let mut offsets = Vec::with_capacity(chars.len() + 1);
    let mut acc = 0;
    offsets.push(acc);
    for c in chars {
        acc += c.module_width();
        offsets.push(acc);
    }
    let end_of = |role: Role| chars.iter().position(|c| c.role() == role).map(|i| offsets[i + 1]);
    let start_of = |role: Role| chars.iter().rposition(|c| c.role() == role).map(|i| offsets[i]);

    let start = end_of(Role::Start).unwrap_or(0);
    let stop = start_of(Role::Stop).unwrap_or(acc);
    let span = |from: u32, to: u32| {
        let width = to.saturating_sub(from) as f64 * unit;
        Rect::new(quiet + from as f64 * unit, band.y, width, band.height)
    };

    let mut zones = vec![(CaptionZone::LeftQuietZone, Rect::new(0.0, band.y, quiet, band.height))];
    match chars.iter().position(|c| c.role() == Role::Middle) {
        Some(i) => {
            zones.push((CaptionZone::LeftNumberZone, span(start, offsets[i])));
            zones.push((CaptionZone::RightNumberZone, span(offsets[i + 1], stop)));
        }
        None => zones.push((CaptionZone::TextZone, span(start, stop))),
    }
    zones.push((
        CaptionZone::RightQuietZone,
        Rect::new(band.right() - quiet, band.y, quiet, band.height),
    ));

    zones
        .into_iter()
        .map(|(zone, rect)| {
            let text = caption_text(code, zone, options);
            Caption { zone, rect, text, filler: false }
        })
        .collect()
}

/// Angle bracket of one unit cells, `<` on the left and `>` on the right.
fn filler_mark(zone: CaptionZone, x: f64, top: f64, unit: f64) -> Vec<Bar> {
    (0..FILLER_ROWS)
        .map(|row| {
            let d = (row as f64 - (FILLER_ROWS / 2) as f64).abs();
            let col = if zone == CaptionZone::LeftQuietZone { d } else { FILLER_COLUMNS - 1.0 - d };
            let rect = Rect::new(x + col * unit, top + row as f64 * unit, unit, unit);
            Bar { rect, role: Role::Filler }
        })
        .collect()
}
