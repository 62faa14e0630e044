//! The context-sensitive heuristic: a cell's value depends on its class and on
//! which of its neighbours are still empty.

use super::Evaluator;
use flipside_othello::bitboard::Bitboard;
use flipside_othello::{Location, EDGE_LENGTH, NUM_SPACES};

const ROW: i32 = EDGE_LENGTH as i32;
const LAST: i32 = ROW - 1;
const END: i32 = NUM_SPACES as i32;

/// Classifies every occupied cell (corner, safe edge, edge, bad edge, center
/// edge, bad center, bad, center) by looking at its neighbourhood.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullScore;

impl FullScore {
    pub const CORNER: i32 = 16;
    pub const SAFE_EDGE: i32 = 12;
    pub const EDGE: i32 = 4;
    pub const CENTER: i32 = 1;
    pub const CENTER_EDGE: i32 = 0;
    pub const BAD: i32 = -4;
    pub const BAD_EDGE: i32 = -8;
    pub const BAD_CENTER: i32 = -10;
}

impl Evaluator for FullScore {
    fn name(&self) -> &'static str {
        "full"
    }

    fn score_cell(&self, loc: Location, mine: Bitboard, theirs: Bitboard, empty: Bitboard) -> i32 {
        let pos = loc.to_index() as i32;
        let row = loc.row() as i32;
        let col = loc.col() as i32;
        let on_side = col == 0 || col == LAST;

        if row == 0 || row == LAST {
            let row_start = pos - col;
            if on_side {
                Self::CORNER
            } else if safe_edge(pos, 1, row_start, row_start + ROW, mine, theirs, empty) {
                Self::SAFE_EDGE
            } else if next_to_empty_corner(empty, col, pos, 1, 1) {
                Self::BAD_EDGE
            } else {
                Self::EDGE
            }
        } else if on_side {
            if safe_edge(pos, ROW, 0, END, mine, theirs, empty) {
                Self::SAFE_EDGE
            } else if next_to_empty_corner(empty, row, pos, ROW, ROW) {
                Self::BAD_EDGE
            } else {
                Self::EDGE
            }
        } else if row == 1 {
            if next_to_empty_corner(empty, col, pos, ROW + 1, 1 - ROW) {
                Self::BAD_CENTER
            } else if empty_up(empty, pos) {
                Self::BAD
            } else {
                Self::CENTER_EDGE
            }
        } else if row == LAST - 1 {
            if next_to_empty_corner(empty, col, pos, 1 - ROW, ROW + 1) {
                Self::BAD_CENTER
            } else if empty_down(empty, pos) {
                Self::BAD
            } else {
                Self::CENTER_EDGE
            }
        } else if col == 1 {
            if any_empty(empty, pos, [-ROW - 1, -1, ROW - 1]) {
                Self::BAD
            } else {
                Self::CENTER_EDGE
            }
        } else if col == LAST - 1 {
            if any_empty(empty, pos, [1 - ROW, 1, ROW + 1]) {
                Self::BAD
            } else {
                Self::CENTER_EDGE
            }
        } else {
            Self::CENTER
        }
    }
}

#[inline]
fn is_set(set: Bitboard, index: i32) -> bool {
    set.contains(index as u8)
}

/// Whether the edge cell at `pos` can no longer be flipped along its edge line,
/// which runs from `low` up to (excluding) `high` in steps of `step`.
///
/// Walking away from `low`: if the run of occupied cells reaches the end of the
/// line, the cell is safe when that run is all ours or nothing behind it is
/// empty. If the run stops at a gap, everything behind the cell must be ours.
fn safe_edge(
    pos: i32,
    step: i32,
    low: i32,
    high: i32,
    mine: Bitboard,
    theirs: Bitboard,
    empty: Bitboard,
) -> bool {
    let mut all_mine = true;
    let mut i = pos + step;
    while i < high {
        if is_set(theirs, i) {
            all_mine = false;
        } else if !is_set(mine, i) {
            break;
        }
        i += step;
    }

    let mut behind = pos - step;
    if i >= high {
        if all_mine {
            return true;
        }
        while behind >= low {
            if is_set(empty, behind) {
                return false;
            }
            behind -= step;
        }
    } else {
        while behind >= low {
            if !is_set(mine, behind) {
                return false;
            }
            behind -= step;
        }
    }
    true
}

/// `x` is the cell's row or column; only positions 1 and 6 sit next to a corner.
#[inline]
fn next_to_empty_corner(empty: Bitboard, x: i32, pos: i32, before: i32, after: i32) -> bool {
    (x == 1 && is_set(empty, pos - before)) || (x == LAST - 1 && is_set(empty, pos + after))
}

#[inline]
fn any_empty(empty: Bitboard, pos: i32, offsets: [i32; 3]) -> bool {
    offsets.iter().any(|&offset| is_set(empty, pos + offset))
}

/// Whether the edge row next to a second-row cell has room to move into.
/// The cell straight across is checked first. When a diagonal neighbour is
/// a corner, the cells beside and below that corner count too.
fn empty_edge(
    empty: Bitboard,
    pos: i32,
    across: [i32; 3],
    low: i32,
    low_extra: i32,
    high: i32,
    high_extra: i32,
) -> bool {
    if is_set(empty, pos + across[1]) {
        return true;
    }
    let (x, y) = (pos + across[0], pos + across[2]);
    if x == low {
        is_set(empty, y) || is_set(empty, pos - 1) || is_set(empty, pos + low_extra)
    } else if y == high {
        is_set(empty, x) || is_set(empty, pos + 1) || is_set(empty, pos + high_extra)
    } else {
        is_set(empty, x) || is_set(empty, y)
    }
}

#[inline]
fn empty_up(empty: Bitboard, pos: i32) -> bool {
    empty_edge(
        empty,
        pos,
        [-ROW - 1, -ROW, 1 - ROW],
        0,
        ROW - 1,
        LAST,
        ROW + 1,
    )
}

#[inline]
fn empty_down(empty: Bitboard, pos: i32) -> bool {
    empty_edge(
        empty,
        pos,
        [ROW - 1, ROW, ROW + 1],
        END - ROW,
        -ROW - 1,
        END - 1,
        1 - ROW,
    )
}
