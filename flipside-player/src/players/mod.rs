//! The kinds of player and the timing wrapper the game loop drives them through.

mod computer;
mod human;
mod remote;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;
pub use remote::{RemotePlayer, PORT};

use flipside_othello::{Board, Color, Location, PlaceError};
use std::fmt;
use std::time::{Duration, Instant};

/// A move that was made, and how many disks it flipped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Played {
    pub location: Location,
    pub flips: u8,
}

impl fmt::Display for Played {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.flips == 1 { "" } else { "s" };
        write!(f, "{} ({} flip{})", self.location, self.flips, plural)
    }
}

/// Anything that can take a turn for one color.
pub trait Player {
    fn color(&self) -> Color;

    /// A short label for reports.
    fn describe(&self) -> String {
        self.color().to_string()
    }

    /// Play one move on `board`. Only called when this player's color has a
    /// legal move. `opponent` holds the moves made since this player's last
    /// turn, empty if the opponent passed. Returns `None` if the player quits instead.
    fn make_move(&mut self, board: &mut Board, opponent: &[Location]) -> Option<Played>;

    /// Told once the game has ended, with the opponent's moves since this
    /// player's last turn.
    fn game_over(&mut self, _board: &Board, _opponent: &[Location]) {}
}

/// Parse `text` as a location and place a disk there. `flips` is zero when
/// nothing could be flipped, and then the board is unchanged.
fn place_text(board: &mut Board, color: Color, text: &str) -> Result<Played, PlaceError> {
    let location: Location = text.parse()?;
    let flips = board.try_place_at(location, color)?;
    Ok(Played { location, flips })
}

/// A player at the table, with the wall-clock time it has spent thinking.
pub struct Seat {
    player: Box<dyn Player>,
    elapsed: Duration,
    moves: u32,
}

impl Seat {
    pub fn new(player: Box<dyn Player>) -> Self {
        Self {
            player,
            elapsed: Duration::default(),
            moves: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.player.color()
    }

    pub fn describe(&self) -> String {
        self.player.describe()
    }

    /// Total time spent across every move so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Let the player move, timing how long it takes.
    pub fn play(&mut self, board: &mut Board, opponent: &[Location]) -> Option<Played> {
        assert!(
            board.has_legal_move(self.color()),
            "{} asked to move without a legal move",
            self.color()
        );
        let start = Instant::now();
        let played = self.player.make_move(board, opponent);
        self.elapsed += start.elapsed();
        if played.is_some() {
            self.moves += 1;
        }
        played
    }

    pub fn game_over(&mut self, board: &Board, opponent: &[Location]) {
        self.player.game_over(board, opponent);
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total time for {}: {:.6} seconds",
            self.describe(),
            self.elapsed.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always plays the first legal move.
    struct First(Color);

    impl Player for First {
        fn color(&self) -> Color {
            self.0
        }

        fn make_move(&mut self, board: &mut Board, _: &[Location]) -> Option<Played> {
            let location = board.legal_moves(self.0).next()?;
            let flips = board.place_at(location, self.0);
            Some(Played { location, flips })
        }
    }

    #[test]
    fn seat_counts_moves() {
        let mut seat = Seat::new(Box::new(First(Color::Black)));
        let mut board = Board::new();
        let played = seat.play(&mut board, &[]).unwrap();
        assert_eq!(played.to_string(), "d3 (1 flip)");
        assert_eq!(seat.moves(), 1);
        assert!(seat.to_string().starts_with("Total time for Black: "));
    }

    #[test]
    #[should_panic]
    fn seat_rejects_moving_without_moves() {
        let mut seat = Seat::new(Box::new(First(Color::White)));
        let mut board = Board::with_empty_rows(0, "*o").unwrap();
        seat.play(&mut board, &[]);
    }

    #[test]
    fn place_text_parses_once_and_places() {
        let mut board = Board::new();
        let played = place_text(&mut board, Color::Black, "d3").unwrap();
        assert_eq!(played.to_string(), "d3 (1 flip)");
        assert_eq!(board.count(Color::Black), 4);

        let before = board;
        assert_eq!(place_text(&mut board, Color::White, "d3"), Err(PlaceError::Occupied));
        assert_eq!(place_text(&mut board, Color::White, "z3"), Err(PlaceError::BadColumn));
        assert_eq!(place_text(&mut board, Color::White, "a1").map(|p| p.flips), Ok(0));
        assert_eq!(board, before);
    }
}
