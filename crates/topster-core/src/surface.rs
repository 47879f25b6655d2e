// File: crates/topster-core/src/surface.rs
// Summary: Collaborator contracts (drawing surface, 2D context, image resource) with renderer-agnostic value types.

use crate::color::Color;
use crate::error::RenderResult;
use crate::geometry::Rect;

/// An already-decoded raster that can be handed to [`DrawContext::draw_image`].
pub trait ImageSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// `false` while the pixels are still in flight. Only background images
    /// are checked; covers are assumed ready.
    fn is_complete(&self) -> bool {
        true
    }
}

/// Font selection. Sizes are in points, as CSS `16pt` would be.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub size_pt: f32,
    pub family: String,
}

impl FontSpec {
    pub fn new(size_pt: f32, family: impl Into<String>) -> Self {
        Self { size_pt, family: family.into() }
    }

    /// Size in CSS pixels (96 px per 72 pt).
    pub fn size_px(&self) -> f32 {
        self.size_pt * 96.0 / 72.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Drop shadow applied to subsequent draw calls while set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    /// Blur amount as a canvas `shadowBlur` value; the Gaussian sigma is half of it.
    pub blur: f32,
    pub color: Color,
}

/// Stateful 2D drawing context, shaped after an HTML canvas context.
///
/// State setters affect every later draw call until changed again. Text is
/// positioned by its alphabetic baseline.
pub trait DrawContext<I: ?Sized> {
    fn set_font(&mut self, font: &FontSpec);
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_shadow(&mut self, shadow: Option<Shadow>);

    fn fill_rect(&mut self, rect: Rect);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);
    fn draw_image(&mut self, image: &I, dest: Rect);

    /// Advance width of `text` under the current font.
    fn measure_text(&mut self, text: &str) -> f32;
}

/// A resizable drawing target.
pub trait Surface {
    type Image: ImageSource;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Change the pixel size. Any previous paint is discarded and context
    /// state resets.
    fn resize(&mut self, width: u32, height: u32);

    /// Borrow the 2D context. Errors with
    /// [`RenderError::ContextUnavailable`](crate::RenderError::ContextUnavailable)
    /// when the backend cannot provide one.
    fn context(&mut self) -> RenderResult<&mut dyn DrawContext<Self::Image>>;
}
