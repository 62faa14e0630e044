//! Heuristic position evaluation.
//!
//! An [`Evaluator`] knows how to value a single occupied cell. Everything else,
//! the terminal check, summing over the board and the debug breakdown, is shared
//! and lives in provided methods.

mod full;
mod weighted;

pub use full::FullScore;
pub use weighted::WeightedScore;

use crate::config::ConfigError;
use flipside_othello::bitboard::Bitboard;
use flipside_othello::{Board, Color, Location, EDGE_LENGTH, NUM_SPACES};
use serde::Deserialize;
use std::fmt;

/// The value of a decided game. Heuristic totals always stay strictly inside
/// `(-WIN, WIN)`.
pub const WIN: i32 = 1_000_000;

/// A positional heuristic, from the point of view of one color.
pub trait Evaluator {
    fn name(&self) -> &'static str;

    /// Value of the occupied cell `loc` for the color owning `mine`.
    fn score_cell(&self, loc: Location, mine: Bitboard, theirs: Bitboard, empty: Bitboard)
        -> i32;

    /// Score `board` for `color`: `±WIN` or 0 once neither color can move,
    /// otherwise the sum of own cell values minus the opponent's.
    fn score(&self, board: &Board, color: Color) -> i32 {
        let mine = board.bits(color);
        let theirs = board.bits(!color);
        if board.has_any_legal_move() {
            score_cells(self, mine, theirs, board.empty())
        } else {
            terminal_score(mine, theirs)
        }
    }

    /// Per-cell contributions behind [`Evaluator::score`], ignoring the terminal check.
    fn explain(&self, board: &Board, color: Color) -> Breakdown {
        let mine = board.bits(color);
        let theirs = board.bits(!color);
        let empty = board.empty();

        let mut breakdown = Breakdown {
            cells: [None; NUM_SPACES],
            mine: 0,
            theirs: 0,
        };
        for index in 0..NUM_SPACES as u8 {
            let loc = Location::from_index(index);
            if mine.contains(index) {
                let value = self.score_cell(loc, mine, theirs, empty);
                breakdown.mine += value;
                breakdown.cells[index as usize] = Some(Contribution::Mine(value));
            } else if theirs.contains(index) {
                let value = self.score_cell(loc, theirs, mine, empty);
                breakdown.theirs += value;
                breakdown.cells[index as usize] = Some(Contribution::Theirs(value));
            }
        }

        assert_eq!(
            breakdown.total(),
            score_cells(self, mine, theirs, empty),
            "{} breakdown disagrees with its own total",
            self.name()
        );
        breakdown
    }
}

/// Sum the cell values of `mine` and subtract those of `theirs`.
pub fn score_cells<E: Evaluator + ?Sized>(
    evaluator: &E,
    mine: Bitboard,
    theirs: Bitboard,
    empty: Bitboard,
) -> i32 {
    let mut total = 0;
    for index in 0..NUM_SPACES as u8 {
        if mine.contains(index) {
            total += evaluator.score_cell(Location::from_index(index), mine, theirs, empty);
        } else if theirs.contains(index) {
            total -= evaluator.score_cell(Location::from_index(index), theirs, mine, empty);
        }
    }
    total
}

fn terminal_score(mine: Bitboard, theirs: Bitboard) -> i32 {
    let (mine, theirs) = (mine.count_occupied(), theirs.count_occupied());
    if mine > theirs {
        WIN
    } else if mine < theirs {
        -WIN
    } else {
        0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contribution {
    Mine(i32),
    Theirs(i32),
}

/// Every occupied cell's value, as produced by [`Evaluator::explain`].
#[derive(Clone, Debug)]
pub struct Breakdown {
    cells: [Option<Contribution>; NUM_SPACES],
    mine: i32,
    theirs: i32,
}

impl Breakdown {
    pub fn cell(&self, loc: Location) -> Option<Contribution> {
        self.cells[loc.to_index() as usize]
    }

    pub fn total(&self) -> i32 {
        self.mine - self.theirs
    }
}

/// Own values are plain, opponent values are in parentheses, empty cells are `....`.
impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in "abcdefgh".chars() {
            write!(f, "{:>8} ", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(EDGE_LENGTH).enumerate() {
            write!(f, "{} ", row + 1)?;
            for cell in cells {
                match cell {
                    Some(Contribution::Mine(value)) => write!(f, "{:>8} ", value)?,
                    Some(Contribution::Theirs(value)) => write!(f, "   ({:>4})", value)?,
                    None => write!(f, "    .... ")?,
                }
            }
            writeln!(f)?;
        }

        write!(
            f,
            "Score: {} - ({}) = {}",
            self.mine,
            self.theirs,
            self.total()
        )
    }
}

/// Which heuristic a computer player evaluates positions with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Full,
    Weighted,
}

impl Default for ScoreKind {
    fn default() -> Self {
        ScoreKind::Full
    }
}

impl ScoreKind {
    pub fn evaluator(self) -> Box<dyn Evaluator + Send> {
        match self {
            ScoreKind::Full => Box::new(FullScore),
            ScoreKind::Weighted => Box::new(WeightedScore),
        }
    }
}

impl std::str::FromStr for ScoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" | "full" => Ok(ScoreKind::Full),
            "w" | "weighted" => Ok(ScoreKind::Weighted),
            _ => Err(ConfigError::UnknownScore),
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreKind::Full => f.write_str("full"),
            ScoreKind::Weighted => f.write_str("weighted"),
        }
    }
}
