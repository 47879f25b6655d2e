// File: crates/topster-render-skia/src/cover.rs
// Summary: Decoded cover art wrapped as a Skia image.

use skia_safe as skia;
use topster_core::{ImageSource, RenderError, RenderResult};

/// An image ready for [`crate::SkiaSurface`], or a placeholder for one that
/// is still loading.
#[derive(Clone)]
pub struct SkiaImage {
    image: Option<skia::Image>,
    width: u32,
    height: u32,
}

impl SkiaImage {
    /// Copy straight-alpha RGBA pixels into a Skia raster image.
    pub fn from_rgba(pixels: &image::RgbaImage) -> RenderResult<Self> {
        let (width, height) = pixels.dimensions();
        let info = skia::ImageInfo::new(
            (width as i32, height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let data = skia::Data::new_copy(pixels.as_raw());
        let image = skia::images::raster_from_data(&info, data, width as usize * 4)
            .ok_or_else(|| RenderError::image(format!("cannot wrap {width}x{height} RGBA buffer")))?;
        Ok(Self { image: Some(image), width, height })
    }

    pub fn from_dynamic(img: &image::DynamicImage) -> RenderResult<Self> {
        Self::from_rgba(&img.to_rgba8())
    }

    /// Known size, pixels not yet available.
    pub fn loading(width: u32, height: u32) -> Self {
        Self { image: None, width, height }
    }

    pub(crate) fn skia_image(&self) -> Option<&skia::Image> {
        self.image.as_ref()
    }
}

impl ImageSource for SkiaImage {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }
    fn is_complete(&self) -> bool { self.image.is_some() }
}
