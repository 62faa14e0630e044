//! A cheaper heuristic that looks each cell up in a fixed table.

use super::Evaluator;
use flipside_othello::bitboard::Bitboard;
use flipside_othello::{Location, EDGE_LENGTH};

/// Values each occupied cell by its position alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedScore;

impl WeightedScore {
    pub const CORNER: i32 = 4;
    pub const EDGE: i32 = 2;
    pub const CENTER: i32 = 1;
    pub const CENTER_EDGE: i32 = 0;
    pub const BAD: i32 = -1;
    pub const BAD_EDGE: i32 = -3;
    pub const BAD_CENTER: i32 = -4;
}

type W = WeightedScore;

const EDGE_ROW: [i32; EDGE_LENGTH] = [
    W::CORNER, W::BAD_EDGE, W::EDGE, W::EDGE, W::EDGE, W::EDGE, W::BAD_EDGE, W::CORNER,
];
const SECOND_ROW: [i32; EDGE_LENGTH] = [
    W::BAD_EDGE, W::BAD_CENTER, W::BAD, W::BAD, W::BAD, W::BAD, W::BAD_CENTER, W::BAD_EDGE,
];
const THIRD_ROW: [i32; EDGE_LENGTH] = [
    W::EDGE, W::BAD, W::CENTER, W::CENTER_EDGE, W::CENTER_EDGE, W::CENTER, W::BAD, W::EDGE,
];
const MIDDLE_ROW: [i32; EDGE_LENGTH] = [
    W::EDGE, W::BAD, W::CENTER_EDGE, W::CENTER, W::CENTER, W::CENTER_EDGE, W::BAD, W::EDGE,
];

/// Symmetric top to bottom.
const WEIGHTS: [[i32; EDGE_LENGTH]; EDGE_LENGTH] = [
    EDGE_ROW, SECOND_ROW, THIRD_ROW, MIDDLE_ROW, MIDDLE_ROW, THIRD_ROW, SECOND_ROW, EDGE_ROW,
];

impl Evaluator for WeightedScore {
    fn name(&self) -> &'static str {
        "weighted"
    }

    #[inline]
    fn score_cell(&self, loc: Location, _: Bitboard, _: Bitboard, _: Bitboard) -> i32 {
        WEIGHTS[loc.row()][loc.col()]
    }
}
