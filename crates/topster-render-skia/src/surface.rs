// File: crates/topster-render-skia/src/surface.rs
// Summary: CPU raster surface on Skia implementing the topster-core drawing contract, with RGBA/PNG read-back.

use skia_safe as skia;
use topster_core::{
    Color, DrawContext, FontSpec, Rect, RenderError, RenderResult, Shadow, Surface, TextAlign,
};

use crate::cover::SkiaImage;
use crate::text::TextShaper;
use crate::to_skia_color;

/// Canvas paint state; reset whenever the surface is resized.
#[derive(Clone, Debug)]
struct PaintState {
    font: FontSpec,
    fill: Color,
    stroke: Color,
    line_width: f32,
    align: TextAlign,
    shadow: Option<Shadow>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            font: FontSpec::new(7.5, "sans-serif"),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            align: TextAlign::Left,
            shadow: None,
        }
    }
}

/// Opaque RGBA raster. The pixel buffer is allocated by the first paint call
/// and dropped on resize; measuring text never touches it.
pub struct SkiaSurface {
    width: u32,
    height: u32,
    raster: Option<skia::Surface>,
    shaper: TextShaper,
    state: PaintState,
}

impl SkiaSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            raster: None,
            shaper: TextShaper::new(),
            state: PaintState::default(),
        }
    }

    fn ensure_raster(&mut self) -> RenderResult<&mut skia::Surface> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::context_unavailable(format!(
                "no pixels to paint on a {}x{} surface",
                self.width, self.height
            )));
        }
        if self.raster.is_none() {
            let mut raster = skia::surfaces::raster_n32_premul((self.width as i32, self.height as i32))
                .ok_or_else(|| {
                    RenderError::context_unavailable(format!(
                        "failed to create {}x{} raster surface",
                        self.width, self.height
                    ))
                })?;
            // opaque canvas: starts black
            raster.canvas().clear(skia::Color::BLACK);
            self.raster = Some(raster);
        }
        self.raster
            .as_mut()
            .ok_or_else(|| RenderError::context_unavailable("raster surface missing"))
    }

    /// Read the painted pixels back as straight RGBA.
    pub fn to_rgba8(&mut self) -> RenderResult<image::RgbaImage> {
        let (w, h) = (self.width, self.height);
        let raster = self.ensure_raster()?;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !raster.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::snapshot("read_pixels failed"));
        }
        image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| RenderError::snapshot("pixel buffer size mismatch"))
    }

    /// Allocate the raster for a paint call. A surface with no pixels
    /// swallows the call, as a zero-sized canvas does.
    fn paintable(&mut self) -> bool {
        match self.ensure_raster() {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(%err, "paint call dropped");
                false
            }
        }
    }

    /// PNG-encode the painted pixels.
    pub fn to_png_bytes(&mut self) -> RenderResult<Vec<u8>> {
        let rgba = self.to_rgba8()?;
        let mut out = std::io::Cursor::new(Vec::new());
        rgba.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| RenderError::snapshot(e.to_string()))?;
        Ok(out.into_inner())
    }

    fn base_paint(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia_color(color));
        paint
    }

    /// Blurred silhouette of `rect` under the current shadow, if any.
    fn draw_rect_shadow(canvas: &skia::Canvas, rect: skia::Rect, shadow: Option<Shadow>) {
        let Some(s) = shadow else { return };
        let mut paint = Self::base_paint(s.color);
        if s.blur > 0.0 {
            paint.set_mask_filter(skia::MaskFilter::blur(skia::BlurStyle::Normal, s.blur / 2.0, false));
        }
        canvas.draw_rect(rect.with_offset((s.offset_x, s.offset_y)), &paint);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, stroke: bool) {
        let font = self.state.font.clone();
        let shadow = self.state.shadow;
        let paint = if stroke {
            let mut p = Self::base_paint(self.state.stroke);
            p.set_style(skia::paint::Style::Stroke);
            p.set_stroke_width(self.state.line_width);
            p
        } else {
            Self::base_paint(self.state.fill)
        };

        let x = match self.state.align {
            TextAlign::Left => x,
            TextAlign::Center => x - self.shaper.measure_width(text, &font) / 2.0,
        };
        if !self.paintable() {
            return;
        }
        let Some(raster) = self.raster.as_mut() else { return };
        self.shaper.draw(raster.canvas(), text, (x, y), &font, &paint, shadow);
    }
}

impl Default for SkiaSurface {
    /// 300x150, the size of a fresh HTML canvas.
    fn default() -> Self {
        Self::new(300, 150)
    }
}

impl DrawContext<SkiaImage> for SkiaSurface {
    fn set_font(&mut self, font: &FontSpec) { self.state.font = font.clone(); }
    fn set_fill_color(&mut self, color: Color) { self.state.fill = color; }
    fn set_stroke_color(&mut self, color: Color) { self.state.stroke = color; }
    fn set_line_width(&mut self, width: f32) { self.state.line_width = width; }
    fn set_text_align(&mut self, align: TextAlign) { self.state.align = align; }
    fn set_shadow(&mut self, shadow: Option<Shadow>) { self.state.shadow = shadow; }

    fn fill_rect(&mut self, rect: Rect) {
        let shadow = self.state.shadow;
        let paint = Self::base_paint(self.state.fill);
        if !self.paintable() {
            return;
        }
        let Some(raster) = self.raster.as_mut() else { return };
        let canvas = raster.canvas();
        let rect = skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height);
        Self::draw_rect_shadow(canvas, rect, shadow);
        canvas.draw_rect(rect, &paint);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.draw_text(text, x, y, false);
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        self.draw_text(text, x, y, true);
    }

    fn draw_image(&mut self, image: &SkiaImage, dest: Rect) {
        let shadow = self.state.shadow;
        let Some(img) = image.skia_image() else {
            tracing::debug!("image has no pixels yet, not drawn");
            return;
        };
        if !self.paintable() {
            return;
        }
        let Some(raster) = self.raster.as_mut() else { return };
        let canvas = raster.canvas();
        let rect = skia::Rect::from_xywh(dest.x, dest.y, dest.width, dest.height);
        Self::draw_rect_shadow(canvas, rect, shadow);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        canvas.draw_image_rect(img, None, rect, &paint);
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        self.shaper.measure_width(text, &self.state.font)
    }
}

impl Surface for SkiaSurface {
    type Image = SkiaImage;

    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.raster = None;
        self.state = PaintState::default();
    }

    fn context(&mut self) -> RenderResult<&mut dyn DrawContext<SkiaImage>> {
        Ok(self as &mut dyn DrawContext<SkiaImage>)
    }
}
