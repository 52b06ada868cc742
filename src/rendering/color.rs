//! The 16-entry terminal palette.

use crate::error::PlotError;

/// One of the 16 classic terminal palette colors.
///
/// The core treats these as opaque 4-bit indices. Mapping them to real display colors is
/// the job of the [`Presenter`](crate::rendering::renderer::Presenter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightGray,
    DarkGray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    White,
}

impl Color {
    /// All palette entries, ordered by index.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::BrightGray,
        Color::DarkGray,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::White,
    ];

    /// Returns the palette index (0..=15).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a palette entry by index.
    ///
    /// ```rust
    /// use conplot::rendering::color::Color;
    ///
    /// assert_eq!(Color::from_index(15).unwrap(), Color::White);
    /// assert!(Color::from_index(16).is_err());
    /// ```
    pub fn from_index(index: u8) -> Result<Self, PlotError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(PlotError::InvalidColor(index))
    }

    /// Maps the palette entry to the matching ANSI color understood by `crossterm`.
    pub fn to_crossterm(self) -> crossterm::style::Color {
        use crossterm::style::Color as C;
        match self {
            Color::Black => C::Black,
            Color::Red => C::DarkRed,
            Color::Green => C::DarkGreen,
            Color::Yellow => C::DarkYellow,
            Color::Blue => C::DarkBlue,
            Color::Magenta => C::DarkMagenta,
            Color::Cyan => C::DarkCyan,
            Color::BrightGray => C::Grey,
            Color::DarkGray => C::DarkGrey,
            Color::BrightRed => C::Red,
            Color::BrightGreen => C::Green,
            Color::BrightYellow => C::Yellow,
            Color::BrightBlue => C::Blue,
            Color::BrightMagenta => C::Magenta,
            Color::BrightCyan => C::Cyan,
            Color::White => C::White,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = PlotError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Color::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index() as usize, i);
        }
        assert_eq!(Color::try_from(4u8).unwrap(), Color::Blue);
    }

    #[test]
    fn test_out_of_palette() {
        assert!(matches!(
            Color::from_index(200),
            Err(PlotError::InvalidColor(200))
        ));
    }
}
