//! Depth-limited minimax search with alpha-beta pruning.
//!
//! All values are from the searching color's point of view: one side
//! maximizes, the other minimizes, and the evaluator is always asked about
//! the searching color.

use crate::score::{Evaluator, WIN};
use flipside_othello::{Board, Children, Color, MAX_VALID_MOVES};
use arrayvec::ArrayVec;

/// Below every reachable score.
pub const MIN: i32 = -WIN - 1;
/// Above every reachable score.
pub const MAX: i32 = WIN + 1;

/// One color's search over a fixed evaluator. Keeps a running count of
/// evaluator calls across every search it runs.
pub struct Search<'a> {
    color: Color,
    evaluator: &'a dyn Evaluator,
    evaluations: u64,
}

impl<'a> Search<'a> {
    pub fn new(color: Color, evaluator: &'a dyn Evaluator) -> Self {
        Self {
            color,
            evaluator,
            evaluations: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Evaluator calls made so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Every move for the searching color that reaches the best value at
    /// `depth` plies, in enumeration order. Moves tied on the deep value are
    /// narrowed down to those whose child scores best right now.
    ///
    /// # Panics
    /// If the searching color has no legal move.
    pub fn best_moves(&mut self, board: &Board, depth: u32) -> Children {
        let children = board.children(self.color);
        assert!(
            !children.is_empty(),
            "{} has no legal moves to search",
            self.color
        );
        let count = children.len();

        let mut best_value = MIN;
        let mut best = Children::new();
        for child in children {
            let value = if depth <= 1 {
                self.evaluate(&child.board)
            } else {
                self.minimax(&child.board, depth - 1, !self.color, count, MIN, MAX)
            };

            if value > best_value {
                best_value = value;
                best.clear();
            }
            if value == best_value {
                best.push(child);
            }
        }

        if best.len() > 1 {
            let immediate: ArrayVec<[i32; MAX_VALID_MOVES]> =
                best.iter().map(|child| self.evaluate(&child.board)).collect();
            let top = immediate.iter().copied().max().unwrap_or(MIN);
            best = best
                .into_iter()
                .zip(immediate)
                .filter(|&(_, value)| value == top)
                .map(|(child, _)| child)
                .collect();
        }

        best
    }

    /// Value of `board` with `turn` to move and `depth` plies left.
    ///
    /// `prev_moves` is how many moves the previous ply had; zero means it was
    /// a pass, so a second pass here ends the game and the board is scored
    /// right away.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        turn: Color,
        prev_moves: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth == 0 {
            return self.evaluate(board);
        }

        let children = board.children(turn);
        if children.is_empty() {
            if prev_moves == 0 {
                return self.evaluate(board);
            }
            // Forced pass: the opponent moves on the same board.
            return self.descend(board, depth - 1, !turn, 0, alpha, beta);
        }

        let count = children.len();
        if turn == self.color {
            let mut best = MIN;
            for child in children.iter() {
                let value = self.descend(&child.board, depth - 1, !turn, count, alpha, beta);
                best = best.max(value);
                alpha = alpha.max(best);
                if best >= beta {
                    break;
                }
            }
            best
        } else {
            let mut best = MAX;
            for child in children.iter() {
                let value = self.descend(&child.board, depth - 1, !turn, count, alpha, beta);
                best = best.min(value);
                beta = beta.min(best);
                if best <= alpha {
                    break;
                }
            }
            best
        }
    }

    #[inline]
    fn descend(
        &mut self,
        board: &Board,
        depth: u32,
        turn: Color,
        prev_moves: usize,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        if depth > 0 {
            self.minimax(board, depth, turn, prev_moves, alpha, beta)
        } else {
            self.evaluate(board)
        }
    }

    #[inline]
    fn evaluate(&mut self, board: &Board) -> i32 {
        self.evaluations += 1;
        self.evaluator.score(board, self.color)
    }
}
