// File: crates/topster-core/src/types.rs
// Summary: Shared layout constants (cell size, margins, caption metrics) and the per-render layout plan.

/// Side length of every square grid cell, in pixels.
pub const CELL_SIZE: u32 = 260;
/// Height reserved above the grid when the chart has a title.
pub const TITLE_MARGIN: u32 = 60;
/// Minimum horizontal margin added to the caption sidebar.
pub const SIDEBAR_MARGIN: f32 = 20.0;
/// Left inset of captions inside the sidebar.
pub const CAPTION_INSET: f32 = 10.0;
/// Vertical advance between consecutive captions.
pub const CAPTION_LINE_HEIGHT: f32 = 25.0;
/// Extra vertical advance applied per grid row.
pub const CAPTION_ROW_SPACING: f32 = 35.0;
/// Fallback font family when a chart does not name one.
pub const DEFAULT_FONT_FAMILY: &str = "monospace";

/// Layout plan consumed by the paint passes.
///
/// Contract: produced by [`crate::layout::setup`] for a single render and
/// never reused after the chart changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasInfo {
    /// Canvas width in whole pixels.
    pub width: u32,
    /// Canvas height in whole pixels.
    pub height: u32,
    pub cell_size: u32,
    /// 0 without a title, [`TITLE_MARGIN`] otherwise.
    pub chart_title_margin: u32,
    /// Width of the caption sidebar (0 when captions are hidden).
    pub max_item_title_width: f32,
}
