//! Running games between two seated players.

use crate::players::{Player, Seat};
use flipside_othello::{Board, Color, Location, Outcome};
use log::{info, trace};
use std::fmt;

/// Results accumulated over a series of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    pub black_disks: u32,
    pub white_disks: u32,
}

impl Tally {
    pub fn record(&mut self, board: &Board) {
        match board.outcome() {
            Outcome::Winner(Color::Black) => self.black_wins += 1,
            Outcome::Winner(Color::White) => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.black_disks += board.count(Color::Black) as u32;
        self.white_disks += board.count(Color::White) as u32;
    }

    pub fn games(&self) -> u32 {
        self.black_wins + self.white_wins + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ">>> Black Wins: {}, White Wins: {}, Draws: {}",
            self.black_wins, self.white_wins, self.draws
        )?;
        write!(
            f,
            ">>> Black Pieces: {}, White Pieces: {}",
            self.black_disks, self.white_disks
        )
    }
}

/// Two seated players. Black always moves first.
pub struct Game {
    seats: [Seat; 2],
    quiet: bool,
}

impl Game {
    /// # Panics
    /// If `black` and `white` do not play the colors they are seated as.
    pub fn new(black: Box<dyn Player>, white: Box<dyn Player>, quiet: bool) -> Self {
        assert_eq!(black.color(), Color::Black);
        assert_eq!(white.color(), Color::White);
        Self {
            seats: [Seat::new(black), Seat::new(white)],
            quiet,
        }
    }

    pub fn seats(&self) -> &[Seat; 2] {
        &self.seats
    }

    /// Play a game from the starting position and return the final board.
    ///
    /// A color without a legal move passes. The game ends after two passes in
    /// a row, or as soon as a player quits. Each player is handed the moves
    /// its opponent made since its own last turn, and both are told when the
    /// game ends.
    pub fn play_one(&mut self) -> Board {
        let mut board = Board::new();
        let mut turn = 0;
        let mut skipped = 0;
        let mut pending: [Vec<Location>; 2] = Default::default();

        while skipped < 2 {
            let seat = &mut self.seats[turn];
            let color = seat.color();
            if board.has_legal_move(color) {
                if skipped > 0 {
                    trace!("{} passed", !color);
                    if !self.quiet {
                        println!("\n{} has no valid moves - skipping turn", !color);
                    }
                    skipped = 0;
                }
                if !self.quiet {
                    println!("\n{}", board);
                }
                match seat.play(&mut board, &pending[turn]) {
                    Some(played) => {
                        trace!("{} played {}", color, played);
                        pending[turn].clear();
                        pending[turn ^ 1].push(played.location);
                    }
                    None => {
                        info!("{} quit", color);
                        break;
                    }
                }
            } else {
                skipped += 1;
            }
            turn ^= 1;
        }

        let outcome = board.outcome();
        info!(
            "game over: {} ({} - {})",
            outcome,
            board.count(Color::Black),
            board.count(Color::White)
        );
        if !self.quiet {
            println!("\n{}\nGame Over - {}", board, outcome);
        }
        for (seat, moves) in self.seats.iter_mut().zip(pending.iter()) {
            seat.game_over(&board, moves);
        }
        board
    }

    /// Play `games` games, calling `after_game` with each final board.
    pub fn play_match<F: FnMut(&Board)>(&mut self, games: u32, mut after_game: F) -> Tally {
        let mut tally = Tally::default();
        for _ in 0..games {
            let board = self.play_one();
            tally.record(&board);
            after_game(&board);
        }

        for seat in self.seats.iter() {
            info!("{} ({} moves)", seat, seat.moves());
        }
        tally
    }
}
