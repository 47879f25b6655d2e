// File: crates/topster-core/src/recording.rs
// Summary: In-memory surface that records draw commands instead of rasterizing; used for layout inspection and tests.

use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::geometry::Rect;
use crate::surface::{DrawContext, FontSpec, ImageSource, Shadow, Surface, TextAlign};

/// Image stand-in carrying only an id and its pixel size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedImage {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub complete: bool,
}

impl RecordedImage {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { id: id.into(), width, height, complete: true }
    }

    /// An image whose pixels have not arrived yet.
    pub fn loading(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { complete: false, ..Self::new(id, width, height) }
    }
}

impl ImageSource for RecordedImage {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }
    fn is_complete(&self) -> bool { self.complete }
}

/// Text paint state captured at the time of a text draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPaint {
    pub font: FontSpec,
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f32,
    pub align: TextAlign,
    pub shadow: Option<Shadow>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    FillText { text: String, x: f32, y: f32, paint: TextPaint },
    StrokeText { text: String, x: f32, y: f32, paint: TextPaint },
    DrawImage { id: String, dest: Rect, shadow: Option<Shadow> },
}

#[derive(Clone, Debug)]
struct State {
    font: FontSpec,
    fill: Color,
    stroke: Color,
    line_width: f32,
    align: TextAlign,
    shadow: Option<Shadow>,
}

impl Default for State {
    // canvas defaults: 10px sans-serif, black fill and stroke, 1px lines
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

/// Records every draw call. Text is measured with a fixed advance of
/// `advance_em` times the font's pixel size per character.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    advance_em: f32,
    available: bool,
    state: State,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            advance_em: 0.6,
            available: true,
            state: State::default(),
            commands: Vec::new(),
        }
    }

    /// A surface whose context can never be acquired.
    pub fn without_context() -> Self {
        Self { available: false, ..Self::default() }
    }

    pub fn with_advance_em(mut self, advance_em: f32) -> Self {
        self.advance_em = advance_em;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Ids of drawn images with their destination rects, in draw order.
    pub fn images(&self) -> Vec<(&str, Rect)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawImage { id, dest, .. } => Some((id.as_str(), *dest)),
                _ => None,
            })
            .collect()
    }

    /// Filled text runs, in draw order.
    pub fn filled_text(&self) -> Vec<(&str, f32, f32, &TextPaint)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, x, y, paint } => Some((text.as_str(), *x, *y, paint)),
                _ => None,
            })
            .collect()
    }

    fn text_paint(&self) -> TextPaint {
        let s = &self.state;
        TextPaint {
            font: s.font.clone(),
            fill: s.fill,
            stroke: s.stroke,
            line_width: s.line_width,
            align: s.align,
            shadow: s.shadow,
        }
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(300, 150)
    }
}

impl DrawContext<RecordedImage> for RecordingSurface {
    fn set_font(&mut self, font: &FontSpec) { self.state.font = font.clone(); }
    fn set_fill_color(&mut self, color: Color) { self.state.fill = color; }
    fn set_stroke_color(&mut self, color: Color) { self.state.stroke = color; }
    fn set_line_width(&mut self, width: f32) { self.state.line_width = width; }
    fn set_text_align(&mut self, align: TextAlign) { self.state.align = align; }
    fn set_shadow(&mut self, shadow: Option<Shadow>) { self.state.shadow = shadow; }

    fn fill_rect(&mut self, rect: Rect) {
        let color = self.state.fill;
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let paint = self.text_paint();
        self.commands.push(DrawCommand::FillText { text: text.to_string(), x, y, paint });
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        let paint = self.text_paint();
        self.commands.push(DrawCommand::StrokeText { text: text.to_string(), x, y, paint });
    }

    fn draw_image(&mut self, image: &RecordedImage, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            id: image.id.clone(),
            dest,
            shadow: self.state.shadow,
        });
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * self.state.font.size_px() * self.advance_em
    }
}

impl Surface for RecordingSurface {
    type Image = RecordedImage;

    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.state = State::default();
        self.commands.clear();
    }

    fn context(&mut self) -> RenderResult<&mut dyn DrawContext<RecordedImage>> {
        if !self.available {
            return Err(RenderError::context_unavailable("recording surface has no context"));
        }
        Ok(self as &mut dyn DrawContext<RecordedImage>)
    }
}
