use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect as PixelRect};
use log::trace;

use super::{Bar, CaptionZone, Geometry, Rect, Size};

// Drawing backend
//------------------------------------------------------------------------------

/// Receives the output of the layout engine. Bars arrive left to right.
pub trait DrawingBackend {
    fn fill_bar(&mut self, bar: &Bar);

    fn draw_caption(&mut self, rect: &Rect, text: &str, font_name: &str);

    /// Called for every caption zone before any bar when debug tint is on.
    fn tint_zone(&mut self, zone: CaptionZone, rect: &Rect);
}

impl Geometry {
    pub fn draw<B: DrawingBackend>(&self, backend: &mut B) {
        if self.debug_tint {
            for caption in &self.captions {
                backend.tint_zone(caption.zone, &caption.rect);
            }
        }
        for bar in &self.bars {
            backend.fill_bar(bar);
        }
        for caption in &self.captions {
            if let Some(text) = &caption.text {
                backend.draw_caption(&caption.rect, text, &self.font_name);
            }
        }
    }

    pub fn to_image(&self) -> RgbImage {
        let mut canvas = ImageCanvas::new(self.size);
        self.draw(&mut canvas);
        canvas.into_image()
    }
}

// Image canvas
//------------------------------------------------------------------------------

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Raster backend. Rectangles snap to whole pixels; captions are not rendered
/// since no font stack is bundled.
pub struct ImageCanvas {
    img: RgbImage,
}

impl ImageCanvas {
    pub fn new(size: Size) -> Self {
        let w = size.width.ceil().max(1.0) as u32;
        let h = size.height.ceil().max(1.0) as u32;
        Self { img: RgbImage::from_pixel(w, h, WHITE) }
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    fn fill(&mut self, rect: &Rect, color: Rgb<u8>) {
        let x = rect.x.round();
        let y = rect.y.round();
        let w = (rect.right().round() - x).max(1.0) as u32;
        let h = (rect.bottom().round() - y).max(1.0) as u32;
        draw_filled_rect_mut(&mut self.img, PixelRect::at(x as i32, y as i32).of_size(w, h), color);
    }
}

impl DrawingBackend for ImageCanvas {
    fn fill_bar(&mut self, bar: &Bar) {
        self.fill(&bar.rect, BLACK);
    }

    fn draw_caption(&mut self, rect: &Rect, text: &str, font_name: &str) {
        trace!("Skipping caption {text:?} in {font_name} at {rect:?}");
    }

    fn tint_zone(&mut self, zone: CaptionZone, rect: &Rect) {
        let tint = match zone {
            CaptionZone::LeftQuietZone | CaptionZone::RightQuietZone => Rgb([255, 220, 220]),
            CaptionZone::LeftNumberZone | CaptionZone::RightNumberZone => Rgb([220, 255, 220]),
            CaptionZone::TextZone => Rgb([220, 220, 255]),
        };
        self.fill(rect, tint);
    }
}
