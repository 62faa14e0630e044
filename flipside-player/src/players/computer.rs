use super::{Played, Player};
use crate::score::{Evaluator, ScoreKind};
use crate::search::Search;
use arrayvec::ArrayVec;
use flipside_othello::{Board, Color, Location, MAX_VALID_MOVES};
use itertools::Itertools;
use log::{debug, log_enabled, Level};
use rand::{Rng, RngCore};

/// Picks moves by searching `depth` plies ahead, or among all legal moves at depth 0.
///
/// Without a random source the first of the best moves (in board order) is
/// played; with one, a uniformly random one of them.
pub struct ComputerPlayer {
    color: Color,
    depth: u32,
    kind: ScoreKind,
    evaluator: Box<dyn Evaluator + Send>,
    rng: Option<Box<dyn RngCore + Send>>,
    quiet: bool,
    evaluations: u64,
}

impl ComputerPlayer {
    pub fn new(color: Color, depth: u32, kind: ScoreKind) -> Self {
        Self {
            color,
            depth,
            kind,
            evaluator: kind.evaluator(),
            rng: None,
            quiet: true,
            evaluations: 0,
        }
    }

    /// Choose randomly among equally good moves, drawing from `rng`.
    pub fn with_rng<R: RngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Announce each move on stdout unless `quiet`.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Evaluator calls across every search this player has run.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    fn candidates(&mut self, board: &Board) -> ArrayVec<[Location; MAX_VALID_MOVES]> {
        if self.depth == 0 {
            return board.legal_moves(self.color).collect();
        }

        let mut search = Search::new(self.color, self.evaluator.as_ref());
        let best = search.best_moves(board, self.depth);
        self.evaluations += search.evaluations();
        debug!(
            "{} searched {} positions at depth {}",
            self.color,
            search.evaluations(),
            self.depth
        );
        best.iter().map(|child| child.location).collect()
    }
}

impl Player for ComputerPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn describe(&self) -> String {
        let random = if self.rng.is_some() { ", random" } else { "" };
        if self.depth == 0 {
            format!("{} computer (no search{})", self.color, random)
        } else {
            format!(
                "{} computer (depth {}, {}{})",
                self.color, self.depth, self.kind, random
            )
        }
    }

    fn make_move(&mut self, board: &mut Board, _opponent: &[Location]) -> Option<Played> {
        let candidates = self.candidates(board);
        debug!(
            "{} candidates: {}",
            self.color,
            candidates.iter().join(" ")
        );

        let index = match self.rng.as_mut() {
            Some(rng) if candidates.len() > 1 => rng.gen_range(0..candidates.len()),
            _ => 0,
        };
        let location = *candidates.get(index)?;
        let flips = board.place_at(location, self.color);
        assert!(flips > 0, "{} chose illegal move {}", self.color, location);

        let played = Played { location, flips };
        debug!("{} chose {}", self.color, played);
        if !self.quiet {
            println!("{} played at: {}", self.color, played);
        }
        if self.depth > 0 && log_enabled!(Level::Debug) {
            debug!("{}", self.evaluator.explain(board, self.color));
        }

        Some(played)
    }
}
