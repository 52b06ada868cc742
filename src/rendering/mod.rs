//! Rendering module: the cell grid plots are drawn into and the presenter that prints it.
//!
//! **Sub-modules:**
//!
//! *   [`color`](crate::rendering::color): The 16-entry [`Color`](color::Color) palette.
//! *   [`cell`](crate::rendering::cell): [`Cell`](cell::Cell), the unit of the grid, and the
//!     [`Marker`](cell::Marker) data is drawn with.
//! *   [`display`](crate::rendering::display): [`Display`](display::Display), a generic 2D buffer.
//! *   [`grid`](crate::rendering::grid): [`Grid`](grid::Grid), the render target and its blending rules.
//! *   [`renderer`](crate::rendering::renderer): [`Presenter`](renderer::Presenter), which writes
//!     a plot to a terminal using `crossterm`.
//!
//! **Key Concepts:**
//!
//! *   **Sub-rows:** Every printed row holds two pixel rows. Half-block cells print `▀` with
//!     the upper pixel as foreground and the lower pixel as background color.
//! *   **Literal cells:** Cells can also hold a caller-chosen character, which takes precedence
//!     over half-block shading.

pub mod cell;
pub mod color;
pub mod display;
pub mod grid;
pub mod renderer;
