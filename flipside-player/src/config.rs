//! Match and player configuration, loaded from JSON.
//!
//! ```json
//! {
//!   "black": { "kind": "human" },
//!   "white": { "depth": 5, "score": "weighted", "random": false },
//!   "matches": 1,
//!   "seed": 7
//! }
//! ```
//!
//! Absent fields take their defaults: computer players search 3 plies with the
//! full heuristic and break ties randomly. A `"remote"` player waits for a
//! client on its `port` (1234 unless set).

use crate::players::{ComputerPlayer, HumanPlayer, Player, RemotePlayer, PORT};
use crate::score::ScoreKind;
use derive_more::{Display, Error};
use flipside_othello::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Deeper searches than this take too long to be useful.
pub const MAX_DEPTH: u32 = 9;

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "could not read config: {}", _0)]
    Io(io::Error),
    #[display(fmt = "could not parse config: {}", _0)]
    Json(serde_json::Error),
    #[display(fmt = "search depth {} is above the maximum of {}", _0, MAX_DEPTH)]
    DepthTooLarge(#[error(not(source))] u32),
    #[display(fmt = "score must be 'full' or 'weighted'")]
    UnknownScore,
    #[display(fmt = "player kind must be 'human', 'computer' or 'remote'")]
    UnknownKind,
    #[display(fmt = "no remote player connected: {}", _0)]
    Connect(io::Error),
    #[display(fmt = "at least one match must be played")]
    NoMatches,
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Computer,
    Remote,
}

impl std::str::FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "human" => Ok(PlayerKind::Human),
            "c" | "computer" => Ok(PlayerKind::Computer),
            "r" | "remote" => Ok(PlayerKind::Remote),
            _ => Err(ConfigError::UnknownKind),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub kind: PlayerKind,
    /// Plies to search; 0 picks among the legal moves directly.
    pub depth: u32,
    /// Break ties between equally good moves at random.
    pub random: bool,
    pub score: ScoreKind,
    /// Port a remote player listens on.
    pub port: u16,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            kind: PlayerKind::Computer,
            depth: 3,
            random: true,
            score: ScoreKind::Full,
            port: PORT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    pub black: PlayerConfig,
    pub white: PlayerConfig,
    /// Games to play back to back.
    pub matches: u32,
    /// Seeds every random player; entropy is used when absent.
    pub seed: Option<u64>,
    /// Suppress the board and per-move output.
    pub quiet: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            black: PlayerConfig::default(),
            white: PlayerConfig::default(),
            matches: 1,
            seed: None,
            quiet: false,
        }
    }
}

impl MatchConfig {
    /// Read and validate a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for player in [&self.black, &self.white].iter() {
            if player.depth > MAX_DEPTH {
                return Err(ConfigError::DepthTooLarge(player.depth));
            }
        }
        if self.matches == 0 {
            return Err(ConfigError::NoMatches);
        }
        Ok(())
    }

    pub fn player(&self, color: Color) -> &PlayerConfig {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    /// Build the player for `color`. Humans read stdin and write stdout;
    /// remote players block until a client connects.
    pub fn build_player(&self, color: Color) -> Result<Box<dyn Player>, ConfigError> {
        let config = self.player(color);
        let player: Box<dyn Player> = match config.kind {
            PlayerKind::Human => Box::new(HumanPlayer::new(
                color,
                io::BufReader::new(io::stdin()),
                io::stdout(),
            )),
            PlayerKind::Remote => Box::new(
                RemotePlayer::listen(color, config.port).map_err(ConfigError::Connect)?,
            ),
            PlayerKind::Computer => {
                let mut player = ComputerPlayer::new(color, config.depth, config.score)
                    .with_quiet(self.quiet);
                if config.random {
                    // Distinct streams per color from one seed.
                    let rng = match self.seed {
                        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(color as u64)),
                        None => StdRng::from_entropy(),
                    };
                    player = player.with_rng(rng);
                }
                Box::new(player)
            }
        };
        Ok(player)
    }
}
