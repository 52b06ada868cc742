//! Writing a plot to a terminal.
//!
//! [`Presenter`] walks a [`Plot`]'s grid row by row and writes it to any [`Write`] sink
//! using `crossterm` escape sequences:
//!
//! *   **Half-block cells** print `▀` with the upper pixel as foreground and the lower pixel
//!     as background color.
//! *   **Color changes** are only emitted when a cell's colors differ from the previous
//!     cell, and at the start of every row.
//! *   **Y inversion:** rows are printed bottom-up when the plot's y axis is inverted.
//! *   **Axis labels:** optional y labels after every row and an x axis line below the grid.

use crate::plot::Plot;
use crate::rendering::cell::Cell;
use crate::rendering::color::Color;
use crossterm::queue;
use crossterm::style::{Colors, Print, ResetColor, SetColors};
use std::io;
use std::io::{Stdout, Write, stdout};

/// Number format for axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisFormat {
    /// Minimum label width, right aligned.
    pub width: usize,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl AxisFormat {
    pub fn new(width: usize, precision: usize) -> Self {
        Self { width, precision }
    }

    /// Formats `value` according to this format.
    ///
    /// ```rust
    /// use conplot::rendering::renderer::AxisFormat;
    ///
    /// assert_eq!(AxisFormat::default().format(3.14159), "  3.14");
    /// ```
    pub fn format(&self, value: f64) -> String {
        format!("{:>width$.precision$}", value, width = self.width, precision = self.precision)
    }
}

impl Default for AxisFormat {
    fn default() -> Self {
        Self::new(6, 2)
    }
}

/// Writes plots to a sink.
pub struct Presenter<W: Write> {
    sink: W,
    x_axis: Option<AxisFormat>,
    y_axis: Option<AxisFormat>,
}

impl Presenter<Stdout> {
    pub fn new_with_stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> Presenter<W> {
    /// Creates a presenter writing to `sink` with both axes hidden.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            x_axis: None,
            y_axis: None,
        }
    }

    /// Shows x axis labels below the grid in the given format, or hides them with `None`.
    pub fn with_x_axis(mut self, format: Option<AxisFormat>) -> Self {
        self.x_axis = format;
        self
    }

    /// Shows y axis labels after every row in the given format, or hides them with `None`.
    pub fn with_y_axis(mut self, format: Option<AxisFormat>) -> Self {
        self.y_axis = format;
        self
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Writes the plot's grid and axes and flushes the sink.
    ///
    /// Axis labels need a view window; they are left out if the plot has none yet.
    pub fn present(&mut self, plot: &Plot) -> io::Result<()> {
        let grid = plot.grid();
        let window = plot.window();
        let (width, height) = (grid.width(), grid.height());

        for (y, row) in grid.rows(grid.inverted_y()) {
            let mut last: Option<(Color, Color)> = None;
            for cell in row {
                let colors = (cell.color, cell.bg_color);
                if last != Some(colors) {
                    queue!(self.sink, SetColors(cell_colors(cell)))?;
                    last = Some(colors);
                }
                queue!(self.sink, Print(cell.printable()))?;
            }
            queue!(self.sink, ResetColor)?;
            if let (Some(format), Some(window)) = (self.y_axis, window) {
                queue!(self.sink, Print(format.format(window.row_value(y, height))))?;
            }
            queue!(self.sink, Print('\n'))?;
        }

        if let (Some(format), Some(window)) = (self.x_axis, window) {
            let mut x = 0;
            while x < width {
                let label = format.format(window.column_value(x, width));
                x += label.chars().count() + 1;
                queue!(self.sink, Print('|'), Print(label))?;
            }
            queue!(self.sink, Print('\n'))?;
        }

        self.sink.flush()
    }
}

fn cell_colors(cell: &Cell) -> Colors {
    Colors {
        foreground: Some(cell.color.to_crossterm()),
        background: Some(cell.bg_color.to_crossterm()),
    }
}
