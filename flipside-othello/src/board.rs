//! The Othello board and the rules that act on it.
//!
//! A [`Board`] is a pair of disjoint [`Bitboard`]s, one per color. Legality and
//! flipping walk outward from the candidate cell in each of the eight compass
//! directions; each direction carries its own index delta and a predicate that
//! rejects indices which fell off the board or wrapped onto another row.

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::game::{Color, Outcome};
use crate::location::{Location, LocationList, ParseLocationError};
use crate::{utils, EDGE_LENGTH, MAX_VALID_MOVES, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt;

/// The complete position: which cells hold black disks and which hold white.
/// Invariant: the two bitboards never share a cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

/// A legal move together with the board it produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Child {
    pub location: Location,
    pub board: Board,
}

/// Every legal move out of a position, in row-major order.
pub type Children = ArrayVec<[Child; MAX_VALID_MOVES]>;

/// Reasons a textual move cannot be placed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum PlaceError {
    #[display(fmt = "location must be 2 characters")]
    BadLength,
    #[display(fmt = "column must be a value from 'a' to 'h'")]
    BadColumn,
    #[display(fmt = "row must be a value from '1' to '8'")]
    BadRow,
    #[display(fmt = "cell already occupied")]
    Occupied,
}

impl PlaceError {
    /// The stable negative code for this error, as sent to remote peers.
    pub fn code(self) -> i32 {
        match self {
            PlaceError::BadLength => -4,
            PlaceError::BadColumn => -3,
            PlaceError::BadRow => -2,
            PlaceError::Occupied => -1,
        }
    }
}

impl From<ParseLocationError> for PlaceError {
    fn from(err: ParseLocationError) -> Self {
        match err {
            ParseLocationError::BadLength => PlaceError::BadLength,
            ParseLocationError::BadColumn => PlaceError::BadColumn,
            ParseLocationError::BadRow => PlaceError::BadRow,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "layout does not fit on the board")]
    TooLong,
    #[display(fmt = "layout cells must be '*', 'o' or '.'")]
    UnknownCell,
}

/// One of the eight compass directions a run of disks can lie along.
struct Direction {
    delta: i32,
    /// Cheap necessary condition on the origin: room for a run and its end cap.
    gate: fn(i32) -> bool,
    /// Whether a stepped-to index is still on the board in this direction.
    on_board: fn(i32) -> bool,
}

fn can_flip_up(pos: i32) -> bool {
    pos >= 2 * EDGE_LENGTH as i32
}

fn can_flip_down(pos: i32) -> bool {
    pos < (NUM_SPACES - 2 * EDGE_LENGTH) as i32
}

fn can_flip_left(pos: i32) -> bool {
    pos % EDGE_LENGTH as i32 > 1
}

fn can_flip_right(pos: i32) -> bool {
    pos % (EDGE_LENGTH as i32) < EDGE_LENGTH as i32 - 2
}

fn below_top(x: i32) -> bool {
    x >= 0
}

fn above_bottom(x: i32) -> bool {
    x < NUM_SPACES as i32
}

// A leftward step from column 0 lands in column 7 of the row above.
fn left_of_right_edge(x: i32) -> bool {
    x % EDGE_LENGTH as i32 != EDGE_LENGTH as i32 - 1
}

// A rightward step from column 7 lands in column 0 of the row below.
fn right_of_left_edge(x: i32) -> bool {
    x % EDGE_LENGTH as i32 != 0
}

fn leftward(x: i32) -> bool {
    below_top(x) && left_of_right_edge(x)
}

fn down_leftward(x: i32) -> bool {
    above_bottom(x) && left_of_right_edge(x)
}

fn rightward(x: i32) -> bool {
    above_bottom(x) && right_of_left_edge(x)
}

fn up_rightward(x: i32) -> bool {
    below_top(x) && right_of_left_edge(x)
}

fn can_flip_up_left(pos: i32) -> bool {
    can_flip_up(pos) && can_flip_left(pos)
}

fn can_flip_down_left(pos: i32) -> bool {
    can_flip_down(pos) && can_flip_left(pos)
}

fn can_flip_up_right(pos: i32) -> bool {
    can_flip_up(pos) && can_flip_right(pos)
}

fn can_flip_down_right(pos: i32) -> bool {
    can_flip_down(pos) && can_flip_right(pos)
}

const UP: i32 = -(EDGE_LENGTH as i32);
const DOWN: i32 = EDGE_LENGTH as i32;

const DIRECTIONS: [Direction; 8] = [
    Direction {
        delta: UP,
        gate: can_flip_up,
        on_board: below_top,
    },
    Direction {
        delta: DOWN,
        gate: can_flip_down,
        on_board: above_bottom,
    },
    Direction {
        delta: -1,
        gate: can_flip_left,
        on_board: leftward,
    },
    Direction {
        delta: UP - 1,
        gate: can_flip_up_left,
        on_board: leftward,
    },
    Direction {
        delta: DOWN - 1,
        gate: can_flip_down_left,
        on_board: down_leftward,
    },
    Direction {
        delta: 1,
        gate: can_flip_right,
        on_board: rightward,
    },
    Direction {
        delta: UP + 1,
        gate: can_flip_up_right,
        on_board: up_rightward,
    },
    Direction {
        delta: DOWN + 1,
        gate: can_flip_down_right,
        on_board: rightward,
    },
];

impl Direction {
    /// Length of the run of `theirs` disks starting next to `pos` that is capped
    /// by one of `mine`. Zero if the run is empty, reaches the edge, or reaches a gap.
    #[inline]
    fn flippable_run(&self, pos: u8, mine: Bitboard, theirs: Bitboard) -> u8 {
        let pos = pos as i32;
        if !(self.gate)(pos) {
            return 0;
        }

        let mut x = pos + self.delta;
        let mut run = 0;
        while (self.on_board)(x) && theirs.contains(x as u8) {
            run += 1;
            x += self.delta;
        }

        if run > 0 && (self.on_board)(x) && mine.contains(x as u8) {
            run
        } else {
            0
        }
    }
}

/// Returns true if placing on the empty cell `pos` would flip anything.
#[inline]
fn is_legal(pos: u8, mine: Bitboard, theirs: Bitboard) -> bool {
    DIRECTIONS
        .iter()
        .any(|dir| dir.flippable_run(pos, mine, theirs) > 0)
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: White on d4 and e5, Black on e4 and d5.
    pub const fn new() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    /// Parse a row-major layout that begins after `rows` empty rows.
    /// Cells past the end of `layout` are empty.
    pub fn with_empty_rows(rows: usize, layout: &str) -> Result<Self, ParseBoardError> {
        let start = rows.checked_mul(EDGE_LENGTH).ok_or(ParseBoardError::TooLong)?;
        if start > NUM_SPACES || layout.chars().count() > NUM_SPACES - start {
            return Err(ParseBoardError::TooLong);
        }

        let mut board = Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        };
        for (offset, cell) in layout.chars().enumerate() {
            let index = (start + offset) as u8;
            match cell {
                '*' => board.black.insert(index),
                'o' => board.white.insert(index),
                '.' => {}
                _ => return Err(ParseBoardError::UnknownCell),
            }
        }

        Ok(board)
    }

    /// The 64-character row-major layout: `*` black, `o` white, `.` empty.
    pub fn layout(&self) -> String {
        (0..NUM_SPACES as u8)
            .map(|index| self.cell_char(index))
            .collect()
    }

    #[inline]
    fn cell_char(&self, index: u8) -> char {
        if self.black.contains(index) {
            Color::Black.cell_char()
        } else if self.white.contains(index) {
            Color::White.cell_char()
        } else {
            '.'
        }
    }

    /// The disks belonging to `color`.
    #[inline]
    pub fn bits(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// A mask of the empty cells.
    #[inline]
    pub fn empty(&self) -> Bitboard {
        !(self.black | self.white)
    }

    /// Count the disks belonging to `color`.
    #[inline]
    pub fn count(&self, color: Color) -> u8 {
        self.bits(color).count_occupied()
    }

    /// The color occupying `loc`, if any.
    pub fn cell(&self, loc: Location) -> Option<Color> {
        let index = loc.to_index();
        if self.black.contains(index) {
            Some(Color::Black)
        } else if self.white.contains(index) {
            Some(Color::White)
        } else {
            None
        }
    }

    #[inline]
    fn is_occupied(&self, loc: Location) -> bool {
        !((self.black | self.white) & loc.to_bitboard()).is_empty()
    }

    /// Get (mine, theirs) from the point of view of `color`.
    #[inline]
    fn sides(&self, color: Color) -> (Bitboard, Bitboard) {
        match color {
            Color::Black => (self.black, self.white),
            Color::White => (self.white, self.black),
        }
    }

    /// Returns true if `color` has at least one legal placement.
    pub fn has_legal_move(&self, color: Color) -> bool {
        let (mine, theirs) = self.sides(color);
        LocationList::from(self.empty()).any(|loc| is_legal(loc.to_index(), mine, theirs))
    }

    /// Returns true unless the game is over.
    pub fn has_any_legal_move(&self) -> bool {
        self.has_legal_move(Color::Black) || self.has_legal_move(Color::White)
    }

    /// Returns true when neither color can move.
    pub fn is_finished(&self) -> bool {
        !self.has_any_legal_move()
    }

    /// The legal placements for `color`, iterated left to right, top to bottom.
    pub fn legal_moves(&self, color: Color) -> LocationList {
        let (mine, theirs) = self.sides(color);
        let mut moves = Bitboard::EMPTY;
        for loc in LocationList::from(self.empty()) {
            if is_legal(loc.to_index(), mine, theirs) {
                moves.insert(loc.to_index());
            }
        }
        LocationList::from(moves)
    }

    /// Every legal move for `color` paired with the board it produces, in the
    /// same order as [`Board::legal_moves`].
    /// Panics if a position somehow offers more than [`MAX_VALID_MOVES`].
    pub fn children(&self, color: Color) -> Children {
        let mut children = Children::new();
        for location in LocationList::from(self.empty()) {
            let mut board = *self;
            if board.place_at(location, color) > 0 {
                children.push(Child { location, board });
            }
        }
        children
    }

    /// Place a disk for `color` at a textual location such as `"d3"`.
    ///
    /// Returns the number of disks flipped. `Ok(0)` means the move is illegal and
    /// the board was left untouched. The board is never modified on error.
    pub fn place(&mut self, location: &str, color: Color) -> Result<u8, PlaceError> {
        self.try_place_at(location.parse()?, color)
    }

    /// [`Board::place`] for an already parsed location.
    pub fn try_place_at(&mut self, loc: Location, color: Color) -> Result<u8, PlaceError> {
        if self.is_occupied(loc) {
            return Err(PlaceError::Occupied);
        }
        Ok(self.place_at(loc, color))
    }

    /// Place a disk for `color` at an empty `loc`, flipping every capped run.
    /// Returns the number of disks flipped; when that is zero the board is unchanged.
    pub fn place_at(&mut self, loc: Location, color: Color) -> u8 {
        debug_assert!(!self.is_occupied(loc));
        let pos = loc.to_index();

        let (mut mine, mut theirs) = self.sides(color);
        let mut flipped = 0;
        for dir in DIRECTIONS.iter() {
            let run = dir.flippable_run(pos, mine, theirs);
            let mut x = pos as i32;
            for _ in 0..run {
                x += dir.delta;
                theirs.remove(x as u8);
                mine.insert(x as u8);
            }
            flipped += run;
        }

        if flipped > 0 {
            mine.insert(pos);
            match color {
                Color::Black => {
                    self.black = mine;
                    self.white = theirs;
                }
                Color::White => {
                    self.white = mine;
                    self.black = theirs;
                }
            }
        }

        flipped
    }

    /// Decide the game by disk majority.
    pub fn outcome(&self) -> Outcome {
        let difference = bitboard::score_absolute_difference(self.black, self.white);
        if difference > 0 {
            Outcome::Winner(Color::Black)
        } else if difference < 0 {
            Outcome::Winner(Color::White)
        } else {
            Outcome::Draw
        }
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        Self::with_empty_rows(0, layout)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid((0..NUM_SPACES as u8).map(|i| self.cell_char(i)), f)?;
        writeln!(
            f,
            "  Black(*): {}, White(o): {}",
            self.count(Color::Black),
            self.count(Color::White)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: usize, layout: &str) -> Board {
        Board::with_empty_rows(rows, layout).unwrap()
    }

    fn check(board: &Board, rows: usize, expected: &str) {
        let mut full = ".".repeat(rows * EDGE_LENGTH);
        full.push_str(expected);
        full.push_str(&".".repeat(NUM_SPACES - full.len()));
        assert_eq!(board.layout(), full);
    }

    fn moves(board: &Board, color: Color) -> Vec<String> {
        board.legal_moves(color).map(|loc| loc.to_string()).collect()
    }

    #[test]
    fn board_size() {
        assert_eq!(std::mem::size_of::<Board>(), 16);
    }

    #[test]
    fn counts_after_first_move() {
        let mut board = Board::new();
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
        assert_eq!(board.place("d3", Color::Black), Ok(1));
        assert_eq!(board.count(Color::Black), 4);
        assert_eq!(board.count(Color::White), 1);
    }

    #[test]
    fn legal_moves_from_start() {
        let board = Board::new();
        assert!(board.has_any_legal_move());
        assert_eq!(moves(&board, Color::Black), ["d3", "c4", "f5", "e6"]);
        assert_eq!(moves(&board, Color::White), ["e3", "f4", "c5", "d6"]);
    }

    #[test]
    fn legal_moves_surrounded_ring() {
        let board: Board = "\
........\
.******.\
.*oooo*.\
.*o.*o*.\
.*o*.o*.\
.*oooo*.\
.******.\
........"
            .parse()
            .unwrap();
        assert_eq!(board.legal_moves(Color::White).len(), 30);
    }

    #[test]
    fn children_from_start() {
        let children = Board::new().children(Color::Black);
        let indices: Vec<u8> = children.iter().map(|c| c.location.to_index()).collect();
        assert_eq!(indices, vec![19, 26, 37, 44]);
        check(&children[0].board, 2, "...*.......**......*o");
        check(&children[1].board, 3, "..***......*o");
        check(&children[2].board, 3, "...o*......***");
        check(&children[3].board, 3, "...o*......**.......*");
    }

    #[test]
    fn display_grid() {
        let expected = "   a b c d e f g h
 +----------------
1| . . . . . . . .
2| . . . . . . . .
3| . . . . . . . .
4| . . . o * . . .
5| . . . * o . . .
6| . . . . . . . .
7| . . . . . . . .
8| . . . . . . . .  Black(*): 2, White(o): 2
";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn layout_round_trip() {
        let board = Board::new();
        check(&board, 3, "...o*......*o");
        assert_eq!(board.layout().parse::<Board>(), Ok(board));
    }

    #[test]
    fn parse_failures() {
        assert_eq!(
            Board::with_empty_rows(7, "*........"),
            Err(ParseBoardError::TooLong)
        );
        assert_eq!(Board::with_empty_rows(9, ""), Err(ParseBoardError::TooLong));
        assert_eq!(
            Board::with_empty_rows(usize::MAX / 4, ""),
            Err(ParseBoardError::TooLong)
        );
        assert_eq!("..x".parse::<Board>(), Err(ParseBoardError::UnknownCell));
    }

    #[test]
    fn flip_up() {
        let mut start = Board::new();
        assert_eq!(start.place("d6", Color::White), Ok(1));
        check(&start, 3, "...o*......oo......o");

        for &(cell, flips) in [("o", 1), ("*", 0)].iter() {
            let mut b = board(0, &format!("*.......{}", cell));
            assert_eq!(b.place("a3", Color::Black), Ok(flips));
        }
    }

    #[test]
    fn flip_down() {
        let mut start = Board::new();
        assert_eq!(start.place("d3", Color::Black), Ok(1));
        check(&start, 2, "...*.......**......*o");

        for &(cell, flips) in [("o", 1), ("*", 0)].iter() {
            let mut b = board(6, &format!(".......*.......{}", cell));
            assert_eq!(b.place("h6", Color::White), Ok(flips));
        }
    }

    #[test]
    fn flip_left() {
        let mut start = Board::new();
        assert_eq!(start.place("f4", Color::White), Ok(1));
        check(&start, 3, "...ooo.....*o");

        let mut b = board(0, "*o");
        assert_eq!(b.place("c1", Color::Black), Ok(1));
        let mut b = board(0, "oo");
        assert_eq!(b.place("c1", Color::Black), Ok(0));
    }

    #[test]
    fn flip_right() {
        let mut start = Board::new();
        assert_eq!(start.place("c5", Color::White), Ok(1));
        check(&start, 3, "...o*.....ooo");

        let mut b = board(7, "......o*");
        assert_eq!(b.place("f8", Color::Black), Ok(1));
        let mut b = board(7, "......oo");
        assert_eq!(b.place("f8", Color::Black), Ok(0));
    }

    #[test]
    fn flip_diagonals() {
        let mut b = Board::new();
        assert_eq!(b.place("e6", Color::Black), Ok(1));
        assert_eq!(b.place("f6", Color::White), Ok(1));
        check(&b, 3, "...o*......*o.......*o");

        let mut b = Board::new();
        assert_eq!(b.place("d6", Color::White), Ok(1));
        assert_eq!(b.place("c6", Color::Black), Ok(1));
        check(&b, 3, "...o*......*o.....*o");

        let mut b = Board::new();
        assert_eq!(b.place("e3", Color::White), Ok(1));
        assert_eq!(b.place("f3", Color::Black), Ok(1));
        check(&b, 2, "....o*.....o*......*o");

        let mut b = Board::new();
        assert_eq!(b.place("d3", Color::Black), Ok(1));
        assert_eq!(b.place("c3", Color::White), Ok(1));
        check(&b, 2, "..o*.......o*......*o");
    }

    #[test]
    fn multiple_flips_down() {
        for i in 0..6 {
            let mut b = board(i + 1, "...***....ooooo");
            let expected: Vec<String> = "cdefg"
                .chars()
                .map(|col| format!("{}{}", col, i + 1))
                .collect();
            assert_eq!(moves(&b, Color::White), expected);
            assert_eq!(b.place(&expected[2], Color::White), Ok(3));
            check(&b, i, "....o......ooo....ooooo");
        }
    }

    #[test]
    fn multiple_flips_up() {
        for i in 0..6 {
            let mut b = board(i, "..*****....ooo");
            let expected: Vec<String> = "cdefg"
                .chars()
                .map(|col| format!("{}{}", col, i + 3))
                .collect();
            assert_eq!(moves(&b, Color::Black), expected);
            assert_eq!(b.place(&expected[2], Color::Black), Ok(3));
            check(&b, i, "..*****....***......*");
        }
    }

    // Five rows with a three-wide pattern shifted `i` columns from the left edge.
    fn shifted(i: usize, rows: &[&str]) -> String {
        rows.iter()
            .map(|row| format!("{}{}{}", ".".repeat(i), row, ".".repeat(5 - i)))
            .collect()
    }

    #[test]
    fn multiple_flips_left() {
        for i in 0..6 {
            let mut b = board(0, &shifted(i, &["o..", "o*.", "o*.", "o*.", "o.."]));
            let col = (b'c' + i as u8) as char;
            let expected: Vec<String> = (1..6).map(|row| format!("{}{}", col, row)).collect();
            assert_eq!(moves(&b, Color::White), expected);
            assert_eq!(b.place(&expected[2], Color::White), Ok(3));
            check(&b, 0, &shifted(i, &["o..", "oo.", "ooo", "oo.", "o.."]));
        }
    }

    #[test]
    fn multiple_flips_right() {
        for i in 0..6 {
            let mut b = board(0, &shifted(i, &["..*", ".o*", ".o*", ".o*", "..*"]));
            let col = (b'a' + i as u8) as char;
            let expected: Vec<String> = (1..6).map(|row| format!("{}{}", col, row)).collect();
            assert_eq!(moves(&b, Color::Black), expected);
            assert_eq!(b.place(&expected[2], Color::Black), Ok(3));
            check(&b, 0, &shifted(i, &["..*", ".**", "***", ".**", "..*"]));
        }
    }

    #[test]
    fn flip_stops_at_right_edge() {
        let mut b = board(
            1,
            "\
......oo\
*ooooo.o\
......o.\
......*",
        );
        assert_eq!(b.place("g3", Color::Black), Ok(6));
        check(
            &b,
            1,
            "\
......oo\
*******o\
......*.\
......*",
        );
    }

    #[test]
    fn flip_stops_at_bottom_edge() {
        let mut b: Board = "\
..o.....\
..*.....\
..*.....\
..*.....\
..*.....\
..*.....\
.*.****o\
.**....."
            .parse()
            .unwrap();
        assert_eq!(b.place("c7", Color::White), Ok(9));
        check(
            &b,
            0,
            "\
..o.....\
..o.....\
..o.....\
..o.....\
..o.....\
..o.....\
.*oooooo\
.**.....",
        );
    }

    #[test]
    fn flip_stops_at_left_edge() {
        let mut b: Board = "\
*......*\
.o.....o\
..o....o\
...o...o\
....o..o\
.....o.o\
......oo\
ooooooo."
            .parse()
            .unwrap();
        assert_eq!(b.place("h8", Color::Black), Ok(12));
        check(
            &b,
            0,
            "\
*......*\
.*.....*\
..*....*\
...*...*\
....*..*\
.....*.*\
......**\
ooooooo*",
        );
    }

    #[test]
    fn flip_stops_at_top_edge() {
        let mut b: Board = "\
..o..*..\
*.o.o...\
.ooo....\
*o.oooo*\
..oo....\
..o.o...\
..o..o..\
..*...*."
            .parse()
            .unwrap();
        assert_eq!(b.place("c4", Color::Black), Ok(14));
        check(
            &b,
            0,
            "\
..o..*..\
*.o.*...\
.*o*....\
********\
..**....\
..*.*...\
..*..*..\
..*...*.",
        );
    }

    #[test]
    fn place_errors() {
        for &color in Color::ALL.iter() {
            let mut b = Board::new();
            for &(input, err) in [
                ("", PlaceError::BadLength),
                ("f", PlaceError::BadLength),
                ("f44", PlaceError::BadLength),
                ("f0", PlaceError::BadRow),
                ("f9", PlaceError::BadRow),
                ("fa", PlaceError::BadRow),
                ("F4", PlaceError::BadColumn),
                ("24", PlaceError::BadColumn),
                ("i4", PlaceError::BadColumn),
                ("d4", PlaceError::Occupied),
                ("e4", PlaceError::Occupied),
                ("d5", PlaceError::Occupied),
                ("e5", PlaceError::Occupied),
            ]
            .iter()
            {
                assert_eq!(b.place(input, color), Err(err));
                assert_eq!(b, Board::new());
            }
        }
    }

    #[test]
    fn error_codes_are_distinct_and_negative() {
        let codes: Vec<i32> = [
            PlaceError::BadLength,
            PlaceError::BadColumn,
            PlaceError::BadRow,
            PlaceError::Occupied,
        ]
        .iter()
        .map(|e| e.code())
        .collect();
        assert_eq!(codes, vec![-4, -3, -2, -1]);
    }

    #[test]
    fn zero_flip_leaves_board_untouched() {
        let mut b = Board::new();
        assert_eq!(b.place("a1", Color::Black), Ok(0));
        assert_eq!(b.place_at(Location::from_index(27 - 9), Color::White), 0);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn try_place_at_matches_place() {
        let d3: Location = "d3".parse().unwrap();
        let mut parsed = Board::new();
        assert_eq!(parsed.try_place_at(d3, Color::Black), Ok(1));
        let mut textual = Board::new();
        assert_eq!(textual.place("d3", Color::Black), Ok(1));
        assert_eq!(parsed, textual);
        assert_eq!(parsed.try_place_at(d3, Color::White), Err(PlaceError::Occupied));
        assert_eq!(parsed, textual);
    }

    /// Not reachable in play: Black has 34 legal moves here.
    fn crowded() -> Board {
        board(
            0,
            "..*o.*..\
             .o...*o.\
             .oo..o*.\
             .**.o.*.\
             .o*o.*o.\
             ..**.*o.\
             .oo*o.o.",
        )
    }

    #[test]
    fn crowded_position_exceeds_move_capacity() {
        let b = crowded();
        let count = b.legal_moves(Color::Black).count();
        assert_eq!(count, 34);
        assert!(count > MAX_VALID_MOVES);
        assert_eq!(b.children(Color::White).len(), 11);
    }

    #[test]
    #[should_panic]
    fn children_past_capacity_panics() {
        crowded().children(Color::Black);
    }

    #[test]
    fn outcome_by_majority() {
        assert_eq!(Board::new().outcome(), Outcome::Draw);
        assert_eq!(board(0, "*").outcome(), Outcome::Winner(Color::Black));
        assert_eq!(board(0, "*oo").outcome(), Outcome::Winner(Color::White));
        assert!(board(0, "*").is_finished());
        assert!(!Board::new().is_finished());
    }

    #[test]
    fn pass_position() {
        let b = board(0, "*o");
        assert!(b.has_legal_move(Color::Black));
        assert!(!b.has_legal_move(Color::White));
        assert!(b.legal_moves(Color::White).is_empty());
        assert!(b.children(Color::White).is_empty());
    }
}
