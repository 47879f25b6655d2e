// File: crates/topster-core/src/layout.rs
// Summary: Layout planner; sizes the surface for a chart and returns the per-render plan.

use crate::chart::Chart;
use crate::error::RenderResult;
use crate::geometry::max_title_width;
use crate::surface::Surface;
use crate::types::{CanvasInfo, CELL_SIZE, TITLE_MARGIN};

/// Measure the caption sidebar, then resize `surface` to fit the grid,
/// title bar and sidebar. Resizing discards any earlier paint.
pub fn setup<S: Surface>(surface: &mut S, chart: &Chart<S::Image>) -> RenderResult<CanvasInfo> {
    let ctx = surface.context()?;
    let max_item_title_width = max_title_width(chart, ctx);

    let gap = chart.gap;
    let cell_size = CELL_SIZE;
    let chart_title_margin = if chart.title.is_empty() { 0 } else { TITLE_MARGIN };

    // room for each cell + gap between cells + outer gap (+ sidebar / title bar);
    // saturates at u32::MAX rather than wrapping for absurd gaps
    let pitch = cell_size.saturating_add(gap);
    let grid_width = chart.size.x.saturating_mul(pitch).saturating_add(gap);
    let grid_height = chart.size.y.saturating_mul(pitch).saturating_add(gap);
    // fractional sidebar widths truncate, as assigning a canvas width does
    let width = (grid_width as f32 + max_item_title_width) as u32;
    let height = grid_height.saturating_add(chart_title_margin);

    surface.resize(width, height);
    tracing::debug!(width, height, sidebar = max_item_title_width, "canvas sized");

    Ok(CanvasInfo {
        width,
        height,
        cell_size,
        chart_title_margin,
        max_item_title_width,
    })
}

/// Top-left corner of the cell at `index`, before centering and title margin.
pub fn cell_origin(index: usize, columns: u32, gap: u32, cell_size: u32) -> (u32, u32) {
    let col = (index % columns as usize) as u32;
    let row = (index / columns as usize) as u32;
    let pitch = cell_size.saturating_add(gap);
    (
        col.saturating_mul(pitch).saturating_add(gap),
        row.saturating_mul(pitch).saturating_add(gap),
    )
}
