//! `flipside-player` plays Othello on top of `flipside-othello`.
//!
//!  - [`score`] values a position for one color, either with the
//!    neighbourhood-aware [`FullScore`](score::FullScore) heuristic or the
//!    fixed-table [`WeightedScore`](score::WeightedScore).
//!  - [`search`] picks moves with depth-limited alpha-beta minimax.
//!  - [`players`], [`game`] and [`config`] put computer and human players at a
//!    table and run games or whole matches between them.

pub mod config;
pub mod game;
pub mod players;
pub mod score;
pub mod search;

pub use config::{ConfigError, MatchConfig, PlayerConfig, PlayerKind};
pub use game::{Game, Tally};
pub use score::{Evaluator, ScoreKind, WIN};
pub use search::Search;
