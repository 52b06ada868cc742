//! 2D buffer backing the plot grid.
//!
//! `Display` is a row-major grid with a fixed `width` and `height` and a fill value
//! used whenever the buffer is cleared or reallocated. It is generic over the element
//! type so the grid logic stays independent of the cell representation.

use std::fmt;
use std::fmt::{Debug, Formatter};

/// A 2D row-major buffer.
///
/// # Example
///
/// ```rust
/// use conplot::rendering::display::Display;
///
/// let mut display: Display<u8> = Display::new(10, 5, 0);
/// if let Some(value) = display.get_mut(2, 3) {
///     *value = 7;
/// }
///
/// assert_eq!(display.width(), 10);
/// assert_eq!(display.get(2, 3), Some(&7));
/// assert_eq!(display.get(10, 0), None);
/// ```
#[derive(Clone)]
pub struct Display<T> {
    width: usize,
    height: usize,
    default: T,
    pixels: Vec<T>,
}

impl<T: Debug> Debug for Display<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Display {{ width: {}, height: {}, pixels: {:?} }}",
            self.width, self.height, self.pixels
        )
    }
}

impl<T: Clone> Display<T> {
    /// Creates a new `Display` with every element set to `default`.
    pub fn new(width: usize, height: usize, default: T) -> Self {
        Self {
            width,
            height,
            default: default.clone(),
            pixels: vec![default; width * height],
        }
    }

    /// Refills the whole buffer with the fill value.
    pub fn clear(&mut self) {
        self.fill(self.default.clone());
    }

    /// Fills the buffer with `value` without changing the fill value.
    fn fill(&mut self, value: T) {
        for pixel in self.pixels.iter_mut() {
            *pixel = value.clone();
        }
    }

    /// Replaces the fill value. Takes effect on the next `clear` or resize.
    pub fn set_default(&mut self, default: T) {
        self.default = default;
    }

    /// Reallocates the buffer to the new size and clears it.
    ///
    /// Nothing from the previous contents survives.
    pub fn resize_clear(&mut self, width: usize, height: usize) {
        self.pixels = vec![self.default.clone(); width * height];
        self.width = width;
        self.height = height;
    }
}

impl<T> Display<T> {
    #[inline]
    fn get_index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Gets the height of the buffer (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the width of the buffer (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets a reference to the element at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.get_index(x, y).map(|idx| &self.pixels[idx])
    }

    /// Gets a mutable reference to the element at `(x, y)`, or `None` if out of bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.get_index(x, y).map(|idx| &mut self.pixels[idx])
    }

    /// Returns row `y` as a slice.
    ///
    /// Panics if `y` is out of bounds.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_equal(display: &Display<u8>, value: u8) -> bool {
        (0..display.height()).all(|y| display.row(y).iter().all(|&v| v == value))
    }

    #[test]
    fn test_resize_clear_discards_contents() {
        let mut display = Display::new(3, 2, 0u8);
        *display.get_mut(2, 1).unwrap() = 9;
        display.resize_clear(4, 4);
        assert_eq!(display.width(), 4);
        assert_eq!(display.height(), 4);
        assert!(all_equal(&display, 0));
    }

    #[test]
    fn test_get_rejects_wrapping_coordinates() {
        let display = Display::new(3, 2, 0u8);
        // (3, 0) would alias (0, 1) with a naive linear index
        assert_eq!(display.get(3, 0), None);
        assert_eq!(display.get(0, 2), None);
        assert_eq!(display.row(1).len(), 3);
    }

    #[test]
    fn test_set_default_applies_on_clear() {
        let mut display = Display::new(2, 2, 1u8);
        display.set_default(5);
        assert_eq!(display.get(0, 0), Some(&1));
        display.clear();
        assert!(all_equal(&display, 5));
    }
}
