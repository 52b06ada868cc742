//! Data-space geometry and the mapping from data space onto the grid.

use crate::error::{PlotError, Result};

/// A point in data space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A line segment in data space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

/// The data-space rectangle mapped onto the grid.
///
/// A window always has a finite, non-zero extent on both axes, so mapping through it never
/// divides by zero. Negative extents are allowed and mirror the corresponding axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    origin: Point,
    dx: f64,
    dy: f64,
}

impl ViewWindow {
    /// Creates a window starting at `origin` spanning `(dx, dy)`.
    pub fn new(origin: Point, dx: f64, dy: f64) -> Result<Self> {
        let usable = |v: f64| v.is_finite() && v != 0.0;
        if !origin.is_finite() || !usable(dx) || !usable(dy) {
            return Err(PlotError::DegenerateWindow { dx, dy });
        }
        Ok(Self { origin, dx, dy })
    }

    /// Creates the window spanning from `(x1, y1)` to `(x2, y2)`.
    ///
    /// ```rust
    /// use conplot::view::{Point, ViewWindow};
    ///
    /// let window = ViewWindow::from_corners(0.0, 0.0, 4.0, 4.0).unwrap();
    /// assert_eq!(window.map(Point::new(1.5, 3.9), 4, 2), (1, 3));
    /// assert!(ViewWindow::from_corners(1.0, 0.0, 1.0, 4.0).is_err());
    /// ```
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        Self::new(Point::new(x1, y1), x2 - x1, y2 - y1)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The `(dx, dy)` extent of the window.
    pub fn extent(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    /// Maps `point` to `(column, sub-row)` on a grid of `width` columns and `height`
    /// printed rows (so `2 * height` sub-rows).
    ///
    /// The result is not clamped: points outside the window map outside the grid.
    pub fn map(&self, point: Point, width: usize, height: usize) -> (i64, i64) {
        let col = ((point.x - self.origin.x) * width as f64 / self.dx).floor();
        let subrow = ((point.y - self.origin.y) * (2 * height) as f64 / self.dy).floor();
        (col as i64, subrow as i64)
    }

    /// The data-space x value at the left edge of column `col`.
    pub fn column_value(&self, col: usize, width: usize) -> f64 {
        self.origin.x + col as f64 * self.dx / width as f64
    }

    /// The data-space y value at the edge of printed row `row`.
    pub fn row_value(&self, row: usize, height: usize) -> f64 {
        self.origin.y + row as f64 * self.dy / height as f64
    }
}

/// Running bounding box over all observed points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Bounds that have not observed anything yet.
    pub fn unobserved() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_unobserved(&self) -> bool {
        self.min.x > self.max.x
    }

    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// The window spanning the bounding box.
    ///
    /// Fails when nothing was observed or the box has no width or no height.
    pub fn window(&self) -> Result<ViewWindow> {
        if self.is_unobserved() {
            return Err(PlotError::DegenerateWindow { dx: 0.0, dy: 0.0 });
        }
        ViewWindow::from_corners(self.min.x, self.min.y, self.max.x, self.max.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unobserved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_floors_negative_offsets() {
        let window = ViewWindow::from_corners(0.0, 0.0, 10.0, 10.0).unwrap();
        // truncation would put this in column 0
        assert_eq!(window.map(Point::new(-0.5, 5.0), 10, 5), (-1, 5));
        assert_eq!(window.map(Point::new(10.0, 10.0), 10, 5), (10, 10));
    }

    #[test]
    fn test_map_negative_extent_mirrors() {
        let window = ViewWindow::from_corners(4.0, 0.0, 0.0, 4.0).unwrap();
        assert_eq!(window.map(Point::new(3.5, 0.0), 4, 2), (0, 0));
    }

    #[test]
    fn test_degenerate_windows() {
        assert!(ViewWindow::new(Point::default(), 0.0, 1.0).is_err());
        assert!(ViewWindow::new(Point::default(), 1.0, f64::NAN).is_err());
        assert!(ViewWindow::new(Point::new(f64::INFINITY, 0.0), 1.0, 1.0).is_err());
    }

    #[test]
    fn test_bounds_window() {
        let mut bounds = Bounds::unobserved();
        assert!(bounds.is_unobserved());
        assert!(bounds.window().is_err());

        bounds.include(Point::new(0.0, 0.0));
        // single point has no area
        assert!(bounds.window().is_err());

        bounds.include(Point::new(10.0, 10.0));
        let window = bounds.window().unwrap();
        assert_eq!(window.origin(), Point::new(0.0, 0.0));
        assert_eq!(window.extent(), (10.0, 10.0));
    }

    #[test]
    fn test_axis_values() {
        let window = ViewWindow::from_corners(-1.0, 0.0, 1.0, 8.0).unwrap();
        assert_eq!(window.column_value(2, 4), 0.0);
        assert_eq!(window.row_value(1, 4), 2.0);
    }
}
