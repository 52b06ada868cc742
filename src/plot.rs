//! The plot aggregator: collects styled points and lines and renders them into a [`Grid`].
//!
//! A plot works in one of two modes:
//!
//! *   **Fixed range**: a [`ViewWindow`] was set with [`Plot::set_draw_range`]. Every
//!     point and line is drawn into the grid as soon as it is added.
//! *   **Auto range**: no window was set. Submissions only grow a running bounding box,
//!     and [`Plot::render`] derives the window from it and draws everything in one pass.
//!
//! In both modes all submitted data is kept, so [`Plot::render`] can redraw the whole grid
//! after a resize or a range change.
//!
//! # Example
//!
//! ```rust
//! use conplot::plot::Plot;
//! use conplot::rendering::cell::Marker;
//! use conplot::rendering::color::Color;
//!
//! let mut plot = Plot::new(20, 5).unwrap();
//! plot.add_line(0.0, 0.0, 10.0, 10.0, Color::Green, Marker::Block);
//! plot.add_point(5.0, 5.0, Color::Red, Marker::Char('x'));
//! plot.render().unwrap();
//!
//! let window = plot.window().unwrap();
//! assert_eq!(window.extent(), (10.0, 10.0));
//! ```

use indexmap::IndexMap;
use log::{debug, warn};

use crate::error::Result;
use crate::raster::{draw_line, draw_point};
use crate::rendering::cell::Marker;
use crate::rendering::color::Color;
use crate::rendering::grid::Grid;
use crate::view::{Bounds, Point, Segment, ViewWindow};

/// The key submitted data is grouped under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub marker: Marker,
    pub color: Color,
}

impl StyleKey {
    pub fn new(marker: Marker, color: Color) -> Self {
        Self { marker, color }
    }
}

/// All submitted data, grouped by style in first-observed order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub points: IndexMap<StyleKey, Vec<Point>>,
    pub lines: IndexMap<StyleKey, Vec<Segment>>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.points.values().map(Vec::len).sum()
    }

    pub fn line_count(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
    }
}

/// How the view window is determined.
#[derive(Clone, Copy, Debug)]
enum Range {
    /// Derived from the data at render time. Holds the window of the last successful render.
    Auto {
        bounds: Bounds,
        last: Option<ViewWindow>,
    },
    /// Set explicitly by the caller.
    Fixed(ViewWindow),
}

impl Range {
    fn auto() -> Self {
        Range::Auto {
            bounds: Bounds::unobserved(),
            last: None,
        }
    }
}

/// Collects styled points and lines and rasterizes them into a grid.
#[derive(Clone, Debug)]
pub struct Plot {
    grid: Grid,
    dataset: Dataset,
    range: Range,
}

impl Plot {
    /// Creates a plot `width` characters wide and `height` lines high.
    ///
    /// Half-block markers address two sub-rows per line.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(width, height, Color::Black)?,
            dataset: Dataset::default(),
            range: Range::auto(),
        })
    }

    /// Reallocates the grid. Submitted data is kept; call [`Plot::render`] to redraw it.
    pub fn set_size(&mut self, width: usize, height: usize) -> Result<()> {
        self.grid.resize(width, height)?;
        debug!("plot resized to {width}x{height}");
        Ok(())
    }

    /// Fixes the data range mapped onto the grid to `(x1, y1)..(x2, y2)`.
    ///
    /// `x1 == x2` switches back to auto range. The grid is reset either way; submitted data is
    /// kept.
    pub fn set_draw_range(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        if x1 == x2 {
            self.clear_draw_range();
            return Ok(());
        }
        let window = ViewWindow::from_corners(x1, y1, x2, y2)?;
        self.range = Range::Fixed(window);
        self.grid.reset();
        debug!("draw range fixed to ({x1}, {y1})..({x2}, {y2})");
        Ok(())
    }

    /// Switches to auto range, recomputing the bounds from the kept data.
    pub fn clear_draw_range(&mut self) {
        let mut bounds = Bounds::unobserved();
        for point in self.dataset.points.values().flatten() {
            bounds.include(*point);
        }
        for segment in self.dataset.lines.values().flatten() {
            bounds.include(segment.a);
            bounds.include(segment.b);
        }
        self.range = Range::Auto { bounds, last: None };
        self.grid.reset();
        debug!("draw range cleared");
    }

    /// Sets the background color and resets the grid to it.
    ///
    /// Everything drawn so far is erased, including points and lines drawn immediately in a
    /// fixed range. The data is kept; call [`Plot::render`] to draw it again.
    pub fn set_background_color(&mut self, color: Color) {
        self.grid.set_background(color);
    }

    /// Makes y grow upwards when printed. By default y grows downwards.
    ///
    /// Resets the grid like [`Plot::set_background_color`], so kept data only shows up again
    /// after [`Plot::render`].
    pub fn invert_y_axis(&mut self, inverted: bool) {
        self.grid.set_inverted_y(inverted);
    }

    /// Removes all submitted data and resets the grid.
    pub fn clear_data(&mut self) {
        self.dataset.clear();
        if let Range::Auto { .. } = self.range {
            self.range = Range::auto();
        }
        self.grid.reset();
        debug!("plot data cleared");
    }

    /// Adds a point. With a fixed range it is drawn right away.
    ///
    /// Points with non-finite coordinates are dropped.
    pub fn add_point(&mut self, x: f64, y: f64, color: Color, marker: Marker) {
        let point = Point::new(x, y);
        if !point.is_finite() {
            warn!("dropping non-finite point ({x}, {y})");
            return;
        }
        self.dataset
            .points
            .entry(StyleKey::new(marker, color))
            .or_default()
            .push(point);

        match &mut self.range {
            Range::Fixed(window) => draw_point(&mut self.grid, window, point, color, marker),
            Range::Auto { bounds, .. } => bounds.include(point),
        }
    }

    /// Adds a line from `(x1, y1)` to `(x2, y2)`. With a fixed range it is drawn right away.
    ///
    /// Lines with a non-finite endpoint are dropped.
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, marker: Marker) {
        let segment = Segment::new(Point::new(x1, y1), Point::new(x2, y2));
        if !segment.a.is_finite() || !segment.b.is_finite() {
            warn!("dropping non-finite line ({x1}, {y1})..({x2}, {y2})");
            return;
        }
        self.dataset
            .lines
            .entry(StyleKey::new(marker, color))
            .or_default()
            .push(segment);

        match &mut self.range {
            Range::Fixed(window) => draw_line(&mut self.grid, window, segment, color, marker),
            Range::Auto { bounds, .. } => {
                bounds.include(segment.a);
                bounds.include(segment.b);
            }
        }
    }

    /// Redraws the grid from scratch.
    ///
    /// In auto range the window is derived from the bounding box of all data, which fails with
    /// [`PlotError::DegenerateWindow`](crate::error::PlotError::DegenerateWindow) if nothing
    /// was added or the data has no extent on one of the axes. All lines are drawn before all
    /// points, so point markers end up on top.
    pub fn render(&mut self) -> Result<()> {
        let window = match &mut self.range {
            Range::Fixed(window) => *window,
            Range::Auto { bounds, last } => {
                let window = bounds.window()?;
                *last = Some(window);
                window
            }
        };

        self.grid.reset();
        for (style, segments) in &self.dataset.lines {
            for segment in segments {
                draw_line(&mut self.grid, &window, *segment, style.color, style.marker);
            }
        }
        for (style, points) in &self.dataset.points {
            for point in points {
                draw_point(&mut self.grid, &window, *point, style.color, style.marker);
            }
        }
        debug!(
            "rendered {} lines and {} points into {}x{}",
            self.dataset.line_count(),
            self.dataset.point_count(),
            self.grid.width(),
            self.grid.height()
        );
        Ok(())
    }

    /// The render target.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The submitted data.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The active window: the fixed one, or the one computed by the last auto-range render.
    pub fn window(&self) -> Option<ViewWindow> {
        match self.range {
            Range::Fixed(window) => Some(window),
            Range::Auto { last, .. } => last,
        }
    }

    /// The bounding box of the data, tracked while in auto range.
    pub fn bounds(&self) -> Option<Bounds> {
        match self.range {
            Range::Fixed(_) => None,
            Range::Auto { bounds, .. } => Some(bounds),
        }
    }

    /// Whether the data range was fixed with [`Plot::set_draw_range`].
    pub fn has_fixed_range(&self) -> bool {
        matches!(self.range, Range::Fixed(_))
    }
}

impl Default for Plot {
    /// A 10x10 plot on a black background.
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            dataset: Dataset::default(),
            range: Range::auto(),
        }
    }
}
