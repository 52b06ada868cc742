//! Plot error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid plot size {width}x{height}, both dimensions must be non-zero")]
    InvalidSize { width: usize, height: usize },

    #[error("degenerate view window with extent ({dx}, {dy})")]
    DegenerateWindow { dx: f64, dy: f64 },

    #[error("palette index {0} is out of range (0-15)")]
    InvalidColor(u8),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
