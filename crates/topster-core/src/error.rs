// File: crates/topster-core/src/error.rs
// Summary: Error type shared by the layout planner, the paint passes and surface backends.

/// Convenience result type for rendering APIs.
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// The surface could not hand out a 2D drawing context. Fatal for the
    /// whole render.
    #[error("rendering context not available: {0}")]
    ContextUnavailable(String),

    /// Decoded pixels could not be turned into a drawable image.
    #[error("image conversion failed: {0}")]
    Image(String),

    /// Reading back or encoding the painted raster failed.
    #[error("snapshot failed: {0}")]
    Snapshot(String),
}

impl RenderError {
    pub fn context_unavailable(msg: impl Into<String>) -> Self {
        Self::ContextUnavailable(msg.into())
    }

    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }
}
