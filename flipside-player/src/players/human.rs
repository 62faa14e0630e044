use super::{place_text, Played, Player};
use flipside_othello::{Board, Color, Location};
use itertools::Itertools;
use log::warn;
use std::io::{self, BufRead, Write};

/// Reads moves as text ("d3") from `input` and writes prompts to `output`.
///
/// `q` quits and `v` lists the valid moves. Closed input counts as quitting.
pub struct HumanPlayer<R, W> {
    color: Color,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(color: Color, input: R, output: W) -> Self {
        Self {
            color,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_move(&mut self, board: &mut Board) -> io::Result<Option<Played>> {
        let mut line = String::new();
        loop {
            write!(self.output, "enter {}'s move: ", self.color)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim_end_matches(|c| c == '\n' || c == '\r');

            match line {
                "q" => return Ok(None),
                "v" => writeln!(
                    self.output,
                    "  valid moves are: {}",
                    board.legal_moves(self.color).join(" ")
                )?,
                _ => {
                    let reason = match place_text(board, self.color, line) {
                        Ok(played) if played.flips > 0 => return Ok(Some(played)),
                        Ok(_) => "must flip at least one piece".to_string(),
                        Err(err) => err.to_string(),
                    };
                    writeln!(
                        self.output,
                        "  invalid move: '{}' - {}\n  please enter a location (eg 'a1' or 'h8'), \
                         'q' to quit or 'v' to print valid moves",
                        line, reason
                    )?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn color(&self) -> Color {
        self.color
    }

    fn describe(&self) -> String {
        format!("{} human", self.color)
    }

    fn make_move(&mut self, board: &mut Board, _opponent: &[Location]) -> Option<Played> {
        match self.read_move(board) {
            Ok(played) => played,
            Err(err) => {
                warn!("{} stopped reading moves: {}", self.color, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(input: &str) -> (Board, Option<Played>, String) {
        let mut board = Board::new();
        let mut player = HumanPlayer::new(Color::Black, input.as_bytes(), Vec::new());
        let played = player.make_move(&mut board, &[]);
        let output = String::from_utf8(player.into_output()).unwrap();
        (board, played, output)
    }

    #[test]
    fn accepts_a_legal_move() {
        let (board, played, output) = play("d3\n");
        let played = played.unwrap();
        assert_eq!(played.location.to_string(), "d3");
        assert_eq!(played.flips, 1);
        assert_eq!(board.count(Color::Black), 4);
        assert_eq!(output, "enter Black's move: ");
    }

    #[test]
    fn explains_bad_input_then_retries() {
        let (board, played, output) = play("d\nF4\nd9\nd4\na1\nd3\n");
        assert_eq!(played.unwrap().location.to_string(), "d3");
        assert_eq!(board.count(Color::White), 1);
        for message in [
            "'d' - location must be 2 characters",
            "'F4' - column must be a value from 'a' to 'h'",
            "'d9' - row must be a value from '1' to '8'",
            "'d4' - cell already occupied",
            "'a1' - must flip at least one piece",
        ]
        .iter()
        {
            assert!(output.contains(message), "missing {:?} in {}", message, output);
        }
        assert_eq!(output.matches("enter Black's move: ").count(), 6);
    }

    #[test]
    fn lists_valid_moves() {
        let (_, played, output) = play("v\nq\n");
        assert_eq!(played, None);
        assert!(output.contains("  valid moves are: d3 c4 f5 e6\n"));
    }

    #[test]
    fn closed_input_quits() {
        let (board, played, _) = play("");
        assert_eq!(played, None);
        assert_eq!(board, Board::new());
    }
}
