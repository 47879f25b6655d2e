// File: crates/topster-render-skia/src/text.rs
// Summary: Text shaper/painter on Skia textlayout; measures and draws baseline-anchored runs with optional shadow.

use skia_safe as skia;
use skia::textlayout::{
    FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextShadow, TextStyle,
};
use topster_core::{FontSpec, Shadow};

use crate::to_skia_color;

/// Families tried after the requested one, keyed by CSS generic name.
fn fallback_families(family: &str) -> &'static [&'static str] {
    match family.to_ascii_lowercase().as_str() {
        "serif" => &["Times New Roman", "Georgia", "DejaVu Serif", "serif"],
        "sans-serif" => &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"],
        // monospace and unknown families
        _ => &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"],
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, foreground: &skia::Paint, shadow: Option<Shadow>) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size_px().max(1.0));
        let mut families = vec![font.family.as_str()];
        families.extend_from_slice(fallback_families(&font.family));
        ts.set_font_families(families.as_slice());
        ts.set_foreground_paint(foreground);
        if let Some(s) = shadow {
            ts.add_shadow(TextShadow::new(
                to_skia_color(s.color),
                (s.offset_x, s.offset_y),
                (s.blur / 2.0) as f64,
            ));
        }
        ts
    }

    pub fn layout(
        &self,
        text: &str,
        font: &FontSpec,
        foreground: &skia::Paint,
        shadow: Option<Shadow>,
    ) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(font, foreground, shadow);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(100_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        let p = self.layout(text, font, &skia::Paint::default(), None);
        p.max_intrinsic_width()
    }

    /// Paint `text` with its alphabetic baseline at `y`, starting at `x`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        font: &FontSpec,
        foreground: &skia::Paint,
        shadow: Option<Shadow>,
    ) {
        let p = self.layout(text, font, foreground, shadow);
        p.paint(canvas, (x, y - p.alphabetic_baseline()));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
