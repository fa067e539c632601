//! [`FitImage`] for `image::DynamicImage`.
//!
//! Canvases are created as RGBA8 so transparent fills survive. Pasting
//! replaces pixels rather than alpha-blending them.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use crate::color::CanvasColor;
use crate::error::LayoutError;
use crate::fit::{FitImage, Resample};
use crate::geometry::{Rect, Size};

impl FitImage for DynamicImage {
    type Error = LayoutError;

    fn dimensions(&self) -> Size {
        let (w, h) = GenericImageView::dimensions(self);
        Size::new(w, h)
    }

    fn resize(&self, size: Size, resample: Resample) -> Result<Self, LayoutError> {
        let size = size.validate()?;
        if FitImage::dimensions(self) == size {
            return Ok(self.clone());
        }
        Ok(self.resize_exact(size.width, size.height, filter(resample)))
    }

    fn crop(&self, rect: Rect) -> Result<Self, LayoutError> {
        let bounds = FitImage::dimensions(self);
        if !rect.fits_within(bounds) {
            return Err(LayoutError::RectOutOfBounds { rect, bounds });
        }
        Ok(self.crop_imm(rect.x0, rect.y0, rect.width(), rect.height()))
    }

    fn canvas(size: Size, color: CanvasColor) -> Result<Self, LayoutError> {
        let size = size.validate()?;
        let pixel = Rgba(color.to_rgba());
        Ok(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            size.width,
            size.height,
            pixel,
        )))
    }

    fn paste(&mut self, image: &Self, x: u32, y: u32) -> Result<(), LayoutError> {
        let rect = Rect::at(x, y, FitImage::dimensions(image));
        let bounds = FitImage::dimensions(self);
        if !rect.fits_within(bounds) {
            return Err(LayoutError::RectOutOfBounds { rect, bounds });
        }
        imageops::replace(self, image, x as i64, y as i64);
        Ok(())
    }
}

fn filter(resample: Resample) -> FilterType {
    match resample {
        Resample::Nearest => FilterType::Nearest,
        Resample::Antialias => FilterType::Lanczos3,
    }
}
