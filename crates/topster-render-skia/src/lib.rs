// File: crates/topster-render-skia/src/lib.rs
// Summary: Skia renderer crate; CPU raster surface, cover images and text shaping for topster-core.

use skia_safe as skia;

pub mod cover;
pub mod surface;
pub mod text;

pub use cover::SkiaImage;
pub use surface::SkiaSurface;
pub use text::TextShaper;

pub(crate) fn to_skia_color(c: topster_core::Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
