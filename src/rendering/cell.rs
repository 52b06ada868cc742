//! Cell representation for the plot grid.
//!
//! A [`Cell`] is the unit the grid is made of. It is either empty, half-block shaded
//! (two independently colored pixels stacked vertically, printed as `▀`), or holds a
//! literal character stamped by the caller.

use crate::rendering::color::Color;

/// The character printed for half-block shaded cells.
/// Its foreground is the upper pixel, its background the lower one.
pub const UPPER_HALF_BLOCK: char = '\u{2580}';

/// What a point or line is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    /// Half-block shading, one sub-row pixel per plotted coordinate.
    #[default]
    Block,
    /// A literal character that takes over the whole cell.
    Char(char),
}

/// The kind of content a cell holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    /// Nothing was drawn here yet.
    #[default]
    Empty,
    /// Half-block shading.
    Block,
    /// A literal character.
    Char(char),
}

/// A single grid cell.
///
/// *   `glyph`: what kind of content the cell shows.
/// *   `color`: for `Block` cells the upper half, for `Char` cells the shown color.
/// *   `bg_color`: for `Block` cells the lower half, for `Char` cells the color that was
///     displaced by the last collision (or the background).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub glyph: Glyph,
    pub color: Color,
    pub bg_color: Color,
}

impl Cell {
    /// Creates an empty cell filled with `background` in both halves.
    pub fn empty(background: Color) -> Self {
        Self {
            glyph: Glyph::Empty,
            color: background,
            bg_color: background,
        }
    }

    /// Returns whether nothing was drawn into this cell.
    pub fn is_empty(&self) -> bool {
        self.glyph == Glyph::Empty
    }

    /// The character a presenter should print for this cell.
    pub fn printable(&self) -> char {
        match self.glyph {
            Glyph::Empty => ' ',
            Glyph::Block => UPPER_HALF_BLOCK,
            Glyph::Char(c) => c,
        }
    }

    /// The legacy packed attribute byte: `bg_color` in bits 4-7, `color` in bits 0-3.
    ///
    /// ```rust
    /// use conplot::rendering::cell::Cell;
    /// use conplot::rendering::color::Color;
    ///
    /// let mut cell = Cell::empty(Color::Black);
    /// cell.color = Color::White;
    /// cell.bg_color = Color::Red;
    /// assert_eq!(cell.attr(), 0x1f);
    /// ```
    pub fn attr(&self) -> u8 {
        self.bg_color.index() << 4 | self.color.index()
    }

    /// Pushes the shown color into the secondary slot and shows `color` instead.
    pub(crate) fn shift_in(&mut self, color: Color) {
        self.bg_color = self.color;
        self.color = color;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty(Color::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell() {
        let cell = Cell::empty(Color::Blue);
        assert!(cell.is_empty());
        assert_eq!(cell.printable(), ' ');
        assert_eq!(cell.attr(), 0x44);
    }

    #[test]
    fn test_shift_in_keeps_previous_color() {
        let mut cell = Cell::empty(Color::Black);
        cell.color = Color::Green;
        cell.shift_in(Color::Yellow);
        assert_eq!(cell.color, Color::Yellow);
        assert_eq!(cell.bg_color, Color::Green);
    }
}
