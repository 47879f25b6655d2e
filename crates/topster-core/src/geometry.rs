// File: crates/topster-core/src/geometry.rs
// Summary: Pixel math for the grid: cover scaling, centering offsets, caption sidebar width.

use crate::chart::Chart;
use crate::style::{TextPreset, TextStyle};
use crate::surface::DrawContext;
use crate::types::SIDEBAR_MARGIN;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Integer pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Fit a `width` x `height` image into a square cell of side `cell_size`.
///
/// Oversized images shrink to fit. Images smaller than the cell on both
/// axes are scaled *up* until one axis touches the cell. An image that
/// matches the cell on one axis and is smaller on the other is left alone.
/// Results are floored to whole pixels.
pub fn scaled_dimensions(width: u32, height: u32, cell_size: u32) -> Dimensions {
    let (w, h, cell) = (width as f64, height as f64, cell_size as f64);

    let factor = if width > cell_size && height > cell_size {
        (cell / w).min(cell / h)
    } else if width > cell_size {
        cell / w
    } else if height > cell_size {
        cell / h
    } else if width < cell_size && height < cell_size {
        (cell / w).min(cell / h)
    } else {
        1.0
    };

    Dimensions {
        width: (w * factor).floor() as u32,
        height: (h * factor).floor() as u32,
    }
}

/// Margin that centers `dimension` inside `cell_size` along one axis.
#[inline]
pub fn centering_offset(dimension: u32, cell_size: u32) -> u32 {
    if dimension < cell_size {
        (cell_size - dimension) / 2
    } else {
        0
    }
}

/// Width of the caption sidebar: the widest visible caption plus a fixed
/// margin and one gap. Zero when captions are hidden.
///
/// Leaves the caption font loaded in `ctx`.
pub fn max_title_width<I: ?Sized, T>(chart: &Chart<T>, ctx: &mut dyn DrawContext<I>) -> f32 {
    if !chart.show_titles {
        return 0.0;
    }

    let style = TextStyle::resolve(chart);
    ctx.set_font(&style.font(&TextPreset::CAPTION));
    ctx.set_fill_color(style.color);

    let widest = chart
        .visible_items()
        .map(|(_, item)| ctx.measure_text(&item.caption()))
        .fold(0.0_f32, f32::max);

    widest + SIDEBAR_MARGIN + chart.gap as f32
}
