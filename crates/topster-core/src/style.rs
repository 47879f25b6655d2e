// File: crates/topster-core/src/style.rs
// Summary: Text styling for titles and captions: resolved per-chart options and fixed paint presets.

use crate::chart::Chart;
use crate::color::Color;
use crate::surface::{DrawContext, FontSpec, Shadow, TextAlign};
use crate::types::DEFAULT_FONT_FAMILY;

impl Shadow {
    /// Canvas-style `2px 2px 4px rgba(0,0,0,0.6)`.
    pub const DROP: Shadow = Shadow {
        offset_x: 2.0,
        offset_y: 2.0,
        blur: 4.0,
        color: Color::rgba(0, 0, 0, 153),
    };
}

/// Size, alignment and outline used for one kind of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPreset {
    pub size_pt: f32,
    pub align: TextAlign,
    pub line_width: f32,
    pub outline: Color,
}

impl TextPreset {
    pub const TITLE: TextPreset = TextPreset {
        size_pt: 38.0,
        align: TextAlign::Center,
        line_width: 0.2,
        outline: Color::BLACK,
    };

    pub const CAPTION: TextPreset = TextPreset {
        size_pt: 16.0,
        align: TextAlign::Left,
        line_width: 0.3,
        outline: Color::BLACK,
    };
}

/// Chart text options with their defaults applied.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub color: Color,
    pub shadows: bool,
}

impl TextStyle {
    /// `font` falls back to monospace, `text_color` must be `#RRGGBB` or white
    /// is used, `shadows` defaults to on.
    pub fn resolve<I>(chart: &Chart<I>) -> Self {
        let family = chart
            .font
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FONT_FAMILY)
            .to_string();
        let color = chart
            .text_color
            .as_deref()
            .and_then(Color::from_hex6)
            .unwrap_or(Color::WHITE);
        Self { family, color, shadows: chart.shadows.unwrap_or(true) }
    }

    pub fn font(&self, preset: &TextPreset) -> FontSpec {
        FontSpec::new(preset.size_pt, self.family.clone())
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.shadows.then_some(Shadow::DROP)
    }

    /// Load font, fill color, alignment, outline and shadow into `ctx`.
    pub fn apply<I: ?Sized>(&self, ctx: &mut dyn DrawContext<I>, preset: &TextPreset) {
        ctx.set_font(&self.font(preset));
        ctx.set_fill_color(self.color);
        ctx.set_text_align(preset.align);
        ctx.set_shadow(self.shadow());
        ctx.set_line_width(preset.line_width);
        ctx.set_stroke_color(preset.outline);
    }
}
