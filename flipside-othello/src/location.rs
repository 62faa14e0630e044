//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A cell on the Othello board, stored as its row-major index (`a1` = 0, `h8` = 63).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(u8);

/// A set of locations on the Othello board, which can be iterated to retrieve them
/// in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < EDGE_LENGTH * EDGE_LENGTH);
        Self(index)
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// Convert from zero-based row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        Self((row * EDGE_LENGTH + col) as u8)
    }

    /// Get the zero-based (row, column) coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// A one-hot [`Bitboard`] holding just this location.
    #[inline]
    pub fn to_bitboard(self) -> Bitboard {
        Bitboard::from_index(self.0)
    }
}

/// Convert this [`Location`] into string notation ("d3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.col() as u8) as char)?;
        f.write_char((b'1' + self.row() as u8) as char)
    }
}

/// Reasons a move string fails to name a cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseLocationError {
    #[display(fmt = "location must be 2 characters")]
    BadLength,
    #[display(fmt = "column must be a value from 'a' to 'h'")]
    BadColumn,
    #[display(fmt = "row must be a value from '1' to '8'")]
    BadRow,
}

/// Build a [`Location`] from 1-indexed string notation ("a1" through "h8").
/// Column letters are lowercase only; length is checked before either character.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseLocationError::BadLength);
        }

        let col = match bytes[0] {
            c @ b'a'..=b'h' => (c - b'a') as usize,
            _ => return Err(ParseLocationError::BadColumn),
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => (r - b'1') as usize,
            _ => return Err(ParseLocationError::BadRow),
        };

        Ok(Self::from_coords(row, col))
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        self.0.contains(loc.to_index())
    }

    /// Returns whether the list holds no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let index = self.0.first()?;
        self.0.remove(index);

        Some(Location(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
