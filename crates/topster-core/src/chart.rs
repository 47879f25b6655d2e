// File: crates/topster-core/src/chart.rs
// Summary: Chart model (grid size, items, background, text options) and the `generate` entry point.

use crate::error::RenderResult;
use crate::layout::setup;
use crate::render::{draw_background, draw_covers, draw_title};
use crate::surface::Surface;

/// Grid dimensions: `x` columns by `y` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSize {
    pub x: u32,
    pub y: u32,
}

impl ChartSize {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Number of slots painted. Items past this index are kept but not drawn.
    pub const fn capacity(&self) -> usize {
        (self.x as usize) * (self.y as usize)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundKind {
    #[default]
    Color,
    Image,
}

/// Either a flat CSS color (`value`) or a photo (`image`) fitted to cover the canvas.
#[derive(Clone, Debug)]
pub struct Background<I> {
    pub kind: BackgroundKind,
    pub value: String,
    pub image: Option<I>,
}

impl<I> Background<I> {
    pub fn color(value: impl Into<String>) -> Self {
        Self { kind: BackgroundKind::Color, value: value.into(), image: None }
    }

    pub fn image(value: impl Into<String>, image: I) -> Self {
        Self { kind: BackgroundKind::Image, value: value.into(), image: Some(image) }
    }
}

impl<I> Default for Background<I> {
    fn default() -> Self {
        Self::color("#000000")
    }
}

#[derive(Clone, Debug)]
pub struct ChartItem<I> {
    pub title: String,
    pub creator: Option<String>,
    pub cover: I,
}

impl<I> ChartItem<I> {
    pub fn new(title: impl Into<String>, cover: I) -> Self {
        Self { title: title.into(), creator: None, cover }
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// `"{creator} - {title}"`, or just the title when there is no creator.
    pub fn caption(&self) -> String {
        match self.creator.as_deref() {
            Some(creator) if !creator.is_empty() => format!("{creator} - {}", self.title),
            _ => self.title.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart<I> {
    pub title: String,
    /// Slots in grid order; `None` is an empty cell.
    pub items: Vec<Option<ChartItem<I>>>,
    pub size: ChartSize,
    pub background: Background<I>,
    pub show_titles: bool,
    /// Spacing between cells and around the grid, in pixels.
    pub gap: u32,
    pub font: Option<String>,
    /// `#RRGGBB`; anything else paints white.
    pub text_color: Option<String>,
    /// `None` means shadows on.
    pub shadows: Option<bool>,
}

impl<I> Chart<I> {
    pub fn new(title: impl Into<String>, size: ChartSize) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            size,
            background: Background::default(),
            show_titles: false,
            gap: 10,
            font: None,
            text_color: None,
            shadows: None,
        }
    }

    pub fn add_item(&mut self, item: ChartItem<I>) {
        self.items.push(Some(item));
    }

    /// Occupied slots that land on the grid, with their index.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &ChartItem<I>)> {
        self.items
            .iter()
            .take(self.size.capacity())
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|item| (i, item)))
    }
}

/// Paint `chart` onto `surface`: size the canvas, then background, title and
/// the cover grid, in that order.
#[tracing::instrument(skip_all, fields(cols = chart.size.x, rows = chart.size.y, items = chart.items.len()))]
pub fn generate<'s, S: Surface>(
    surface: &'s mut S,
    chart: &Chart<S::Image>,
) -> RenderResult<&'s mut S> {
    let info = setup(surface, chart)?;
    draw_background(surface, chart)?;
    draw_title(surface, chart, &info)?;
    draw_covers(surface, chart, &info)?;
    Ok(surface)
}
