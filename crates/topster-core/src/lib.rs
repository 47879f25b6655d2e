// File: crates/topster-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, layout planner, paint passes and surface contracts.

pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod recording;
pub mod render;
pub mod style;
pub mod surface;
pub mod types;

pub use chart::{generate, Background, BackgroundKind, Chart, ChartItem, ChartSize};
pub use color::Color;
pub use error::{RenderError, RenderResult};
pub use geometry::{centering_offset, max_title_width, scaled_dimensions, Dimensions, Rect};
pub use layout::setup;
pub use render::{draw_background, draw_covers, draw_title};
pub use style::{TextPreset, TextStyle};
pub use surface::{DrawContext, FontSpec, ImageSource, Shadow, Surface, TextAlign};
pub use types::{CanvasInfo, CELL_SIZE};
