//! The render target: a fixed-size grid of [`Cell`]s addressed in sub-rows.
//!
//! Every printed row holds two sub-rows, so the grid is `width` columns by `2 * height`
//! sub-rows for drawing purposes. [`Grid::set_cell`] is the only way content gets in and
//! implements the blending rules between half-block pixels and literal characters.

use crate::error::{PlotError, Result};
use crate::rendering::cell::{Cell, Glyph, Marker};
use crate::rendering::color::Color;
use crate::rendering::display::Display;

const DEFAULT_WIDTH: usize = 10;
const DEFAULT_HEIGHT: usize = 10;

/// A grid of cells plus the background it is reset to.
#[derive(Clone, Debug)]
pub struct Grid {
    display: Display<Cell>,
    background: Color,
    inverted_y: bool,
}

impl Grid {
    /// Creates a grid of `width` columns and `height` printed rows, filled with `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self> {
        check_size(width, height)?;
        Ok(Self {
            display: Display::new(width, height, Cell::empty(background)),
            background,
            inverted_y: false,
        })
    }

    /// Reallocates the grid. All previous cell contents are lost.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        check_size(width, height)?;
        self.display.resize_clear(width, height);
        Ok(())
    }

    /// Refills every cell with the background without changing dimensions.
    pub fn reset(&mut self) {
        self.display.clear();
    }

    /// Changes the background and resets the grid to it.
    pub fn set_background(&mut self, background: Color) {
        self.background = background;
        self.display.set_default(Cell::empty(background));
        self.reset();
    }

    /// Flips which half of a cell even sub-rows land in and resets the grid.
    pub fn set_inverted_y(&mut self, inverted: bool) {
        self.inverted_y = inverted;
        self.reset();
    }

    pub fn width(&self) -> usize {
        self.display.width()
    }

    pub fn height(&self) -> usize {
        self.display.height()
    }

    /// Number of addressable sub-rows, twice the printed height.
    pub fn subrows(&self) -> usize {
        self.display.height() * 2
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn inverted_y(&self) -> bool {
        self.inverted_y
    }

    /// The cell at column `x` of printed row `row`.
    pub fn cell(&self, x: usize, row: usize) -> Option<&Cell> {
        self.display.get(x, row)
    }

    /// Iterates over printed rows, top-down in storage order or bottom-up when `reversed`.
    pub fn rows(&self, reversed: bool) -> impl Iterator<Item = (usize, &[Cell])> {
        let height = self.height();
        (0..height).map(move |i| {
            let y = if reversed { height - 1 - i } else { i };
            (y, self.display.row(y))
        })
    }

    /// Draws `marker` in `color` at column `col`, sub-row `subrow`.
    ///
    /// Coordinates outside `[0, width) x [0, 2 * height)` are ignored.
    ///
    /// Half-block markers only touch the half of the cell selected by the sub-row parity and
    /// keep any literal character already there. Literal markers always take over the glyph;
    /// the color they displace is pushed into `bg_color` when it carried information.
    pub fn set_cell(&mut self, col: i64, subrow: i64, color: Color, marker: Marker) {
        if col < 0 || subrow < 0 || col >= self.width() as i64 || subrow >= self.subrows() as i64
        {
            return;
        }
        let background = self.background;
        let parity_shift = i64::from(self.inverted_y);
        let Some(cell) = self.display.get_mut(col as usize, (subrow / 2) as usize) else {
            return;
        };

        match marker {
            Marker::Block => {
                if cell.glyph == Glyph::Empty {
                    cell.glyph = Glyph::Block;
                }
                if (subrow + parity_shift) % 2 == 0 {
                    cell.color = color;
                } else {
                    cell.bg_color = color;
                }
            }
            Marker::Char(c) => {
                match cell.glyph {
                    Glyph::Empty => cell.color = color,
                    Glyph::Block if cell.color != background => cell.shift_in(color),
                    Glyph::Block => cell.color = color,
                    Glyph::Char(existing) if existing != c => cell.shift_in(color),
                    // same character already there: first writer keeps its colors
                    Glyph::Char(_) => {}
                }
                cell.glyph = Glyph::Char(c);
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            display: Display::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, Cell::empty(Color::Black)),
            background: Color::Black,
            inverted_y: false,
        }
    }
}

fn check_size(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PlotError::InvalidSize { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(4, 2, Color::Black).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert!(matches!(
            Grid::new(0, 3, Color::Black),
            Err(PlotError::InvalidSize { width: 0, height: 3 })
        ));
        let mut grid = grid();
        assert!(grid.resize(3, 0).is_err());
        assert_eq!(grid.width(), 4);
    }

    #[test]
    fn test_block_halves_are_independent() {
        let mut grid = grid();
        grid.set_cell(1, 2, Color::Red, Marker::Block);
        grid.set_cell(1, 3, Color::Blue, Marker::Block);
        let cell = grid.cell(1, 1).unwrap();
        assert_eq!(cell.glyph, Glyph::Block);
        assert_eq!(cell.color, Color::Red);
        assert_eq!(cell.bg_color, Color::Blue);
        assert_eq!(cell.attr(), 0x41);
    }

    #[test]
    fn test_inverted_y_flips_parity() {
        let mut grid = grid();
        grid.set_inverted_y(true);
        grid.set_cell(0, 0, Color::Green, Marker::Block);
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.color, Color::Black);
        assert_eq!(cell.bg_color, Color::Green);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut grid = grid();
        let before = grid.clone();
        for (col, subrow) in [(-1, 0), (4, 0), (0, -1), (0, 4), (i64::MAX, i64::MIN)] {
            grid.set_cell(col, subrow, Color::White, Marker::Block);
        }
        let same = before
            .rows(false)
            .zip(grid.rows(false))
            .all(|((_, a), (_, b))| a == b);
        assert!(same);
    }

    #[test]
    fn test_char_on_empty_cell() {
        let mut grid = grid();
        grid.set_cell(2, 0, Color::Yellow, Marker::Char('x'));
        let cell = grid.cell(2, 0).unwrap();
        assert_eq!(cell.glyph, Glyph::Char('x'));
        assert_eq!(cell.color, Color::Yellow);
        assert_eq!(cell.bg_color, Color::Black);
    }

    #[test]
    fn test_char_over_drawn_block_keeps_previous_color() {
        let mut grid = grid();
        grid.set_cell(0, 0, Color::Red, Marker::Block);
        grid.set_cell(0, 1, Color::Blue, Marker::Block);
        grid.set_cell(0, 0, Color::White, Marker::Char('*'));
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.glyph, Glyph::Char('*'));
        assert_eq!(cell.color, Color::White);
        assert_eq!(cell.bg_color, Color::Red);
    }

    #[test]
    fn test_char_over_block_with_background_upper_half() {
        let mut grid = grid();
        // only the lower half is drawn, the upper one still shows the background
        grid.set_cell(0, 1, Color::Blue, Marker::Block);
        grid.set_cell(0, 0, Color::White, Marker::Char('*'));
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.color, Color::White);
        assert_eq!(cell.bg_color, Color::Blue);
    }

    #[test]
    fn test_char_collisions() {
        let mut grid = grid();
        grid.set_cell(3, 3, Color::Red, Marker::Char('a'));
        grid.set_cell(3, 3, Color::Green, Marker::Char('a'));
        let cell = *grid.cell(3, 1).unwrap();
        assert_eq!((cell.color, cell.bg_color), (Color::Red, Color::Black));

        grid.set_cell(3, 2, Color::Cyan, Marker::Char('b'));
        let cell = *grid.cell(3, 1).unwrap();
        assert_eq!(cell.glyph, Glyph::Char('b'));
        assert_eq!((cell.color, cell.bg_color), (Color::Cyan, Color::Red));
    }

    #[test]
    fn test_block_on_char_keeps_glyph() {
        let mut grid = grid();
        grid.set_cell(1, 0, Color::Red, Marker::Char('o'));
        grid.set_cell(1, 1, Color::Magenta, Marker::Block);
        let cell = grid.cell(1, 0).unwrap();
        assert_eq!(cell.glyph, Glyph::Char('o'));
        assert_eq!(cell.color, Color::Red);
        assert_eq!(cell.bg_color, Color::Magenta);
    }

    #[test]
    fn test_background_change_resets() {
        let mut grid = grid();
        grid.set_cell(0, 0, Color::Red, Marker::Block);
        grid.set_background(Color::Blue);
        assert!(grid.rows(false).all(|(_, row)| row.iter().all(|c| *c == Cell::empty(Color::Blue))));
    }

    #[test]
    fn test_rows_reversed() {
        let grid = Grid::new(1, 3, Color::Black).unwrap();
        let order: Vec<usize> = grid.rows(true).map(|(y, _)| y).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }
}
