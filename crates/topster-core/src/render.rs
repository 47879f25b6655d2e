// File: crates/topster-core/src/render.rs
// Summary: Ordered paint passes (background, title, cover grid with captions) over a sized surface.

use crate::chart::{BackgroundKind, Chart};
use crate::color::Color;
use crate::error::RenderResult;
use crate::geometry::{centering_offset, scaled_dimensions, Rect};
use crate::layout::cell_origin;
use crate::style::{TextPreset, TextStyle};
use crate::surface::{ImageSource, Surface};
use crate::types::{CanvasInfo, CAPTION_INSET, CAPTION_LINE_HEIGHT, CAPTION_ROW_SPACING};

/// Flat color fill, or a photo scaled to cover the whole canvas.
///
/// An image background that is missing or still loading paints nothing.
pub fn draw_background<S: Surface>(surface: &mut S, chart: &Chart<S::Image>) -> RenderResult<()> {
    let (cw, ch) = (surface.width() as f32, surface.height() as f32);
    let background = &chart.background;

    match background.kind {
        BackgroundKind::Color => {
            let color = Color::parse(&background.value).unwrap_or_else(|| {
                tracing::warn!(value = %background.value, "unparseable background color, using black");
                Color::BLACK
            });
            let ctx = surface.context()?;
            ctx.set_fill_color(color);
            ctx.fill_rect(Rect::from_xywh(0.0, 0.0, cw, ch));
        }
        BackgroundKind::Image => {
            let Some(img) = background.image.as_ref().filter(|img| img.is_complete()) else {
                tracing::debug!("background image not ready, skipping");
                return Ok(());
            };
            if img.width() == 0 || img.height() == 0 {
                return Ok(());
            }
            let dest = cover_rect(img.width(), img.height(), cw, ch);
            surface.context()?.draw_image(img, dest);
        }
    }
    Ok(())
}

/// Destination rect that makes an `iw` x `ih` image cover a `cw` x `ch`
/// canvas, centered on the overflowing axis.
fn cover_rect(iw: u32, ih: u32, cw: f32, ch: f32) -> Rect {
    let image_ratio = ih as f32 / iw as f32;
    let canvas_ratio = ch / cw;

    if image_ratio > canvas_ratio {
        let height = cw * image_ratio;
        Rect::from_xywh(0.0, ((ch - height) / 2.0).floor(), cw, height)
    } else {
        let width = cw * canvas_ratio / image_ratio;
        Rect::from_xywh(((cw - width) / 2.0).floor(), 0.0, width, ch)
    }
}

/// Centered chart title above the grid. Nothing is drawn for an empty title.
pub fn draw_title<S: Surface>(
    surface: &mut S,
    chart: &Chart<S::Image>,
    info: &CanvasInfo,
) -> RenderResult<()> {
    if chart.title.is_empty() {
        return Ok(());
    }
    let style = TextStyle::resolve(chart);
    let ctx = surface.context()?;
    style.apply(&mut *ctx, &TextPreset::TITLE);

    let x = info.width as f32 / 2.0;
    let y = (chart.gap as f32 + 90.0) / 2.0;
    ctx.stroke_text(&chart.title, x, y);
    ctx.fill_text(&chart.title, x, y);
    Ok(())
}

/// Covers in grid order, each followed by its caption in the sidebar when
/// captions are shown. Slots past the grid capacity are skipped.
pub fn draw_covers<S: Surface>(
    surface: &mut S,
    chart: &Chart<S::Image>,
    info: &CanvasInfo,
) -> RenderResult<()> {
    let style = TextStyle::resolve(chart);
    let ctx = surface.context()?;
    // caption state is set once; the shadow also lands under the covers
    style.apply(&mut *ctx, &TextPreset::CAPTION);

    let gap = chart.gap;
    let cell = info.cell_size;
    let caption_x = info.width as f32 - info.max_item_title_width + CAPTION_INSET;

    let hidden = chart.items.len().saturating_sub(chart.size.capacity());
    if hidden > 0 {
        tracing::debug!(hidden, "items beyond grid capacity are not painted");
    }

    for (index, item) in chart.visible_items() {
        let row = (index / chart.size.x as usize) as f32;
        let (cell_x, cell_y) = cell_origin(index, chart.size.x, gap, cell);

        let dims = scaled_dimensions(item.cover.width(), item.cover.height(), cell);
        let dest = Rect::from_xywh(
            cell_x.saturating_add(centering_offset(dims.width, cell)) as f32,
            cell_y
                .saturating_add(centering_offset(dims.height, cell))
                .saturating_add(info.chart_title_margin) as f32,
            dims.width as f32,
            dims.height as f32,
        );
        ctx.draw_image(&item.cover, dest);

        if chart.show_titles {
            let caption = item.caption();
            let i = index as f32;
            let caption_y = CAPTION_LINE_HEIGHT * i
                + (CAPTION_LINE_HEIGHT + gap as f32)
                + (row % (i + 1.0)) * CAPTION_ROW_SPACING
                + info.chart_title_margin as f32;
            ctx.stroke_text(&caption, caption_x, caption_y);
            ctx.fill_text(&caption, caption_x, caption_y);
        }
    }
    Ok(())
}
