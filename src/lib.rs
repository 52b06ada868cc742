//! `conplot` draws 2D data into a grid of terminal character cells.
//!
//! Points and line segments are submitted to a [`Plot`] with a palette [`Color`] and a
//! [`Marker`]. Block markers use half-block shading, so every printed line shows two rows of
//! pixels; character markers stamp a literal glyph over the cell. The finished grid can be
//! written to a terminal with a [`Presenter`].
//!
//! # Example
//! ```rust ,no_run
//! use conplot::{Color, Marker, Plot, Presenter};
//!
//! let mut plot = Plot::new(60, 15).unwrap();
//! plot.invert_y_axis(true);
//! for i in 0..100 {
//!     let x = i as f64 / 10.0;
//!     plot.add_line(x, x.sin(), x + 0.1, (x + 0.1).sin(), Color::BrightGreen, Marker::Block);
//! }
//! plot.render().unwrap();
//! Presenter::new_with_stdout().present(&plot).unwrap();
//! ```

pub mod error;
pub mod plot;
pub mod raster;
pub mod rendering;
pub mod util;
pub mod view;

pub use crate::error::{PlotError, Result};
pub use crate::plot::{Dataset, Plot, StyleKey};
pub use crate::rendering::cell::{Cell, Glyph, Marker};
pub use crate::rendering::color::Color;
pub use crate::rendering::grid::Grid;
pub use crate::rendering::renderer::{AxisFormat, Presenter};
pub use crate::view::{Bounds, Point, Segment, ViewWindow};
