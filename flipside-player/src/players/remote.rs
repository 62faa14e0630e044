//! A player on the other end of a TCP connection, speaking a line protocol.
//!
//! The client opens with `printBoards` to receive a 64-character board layout
//! after every change, or an empty line to skip them. Each turn the server
//! sends the opponent's moves since the client last moved, concatenated
//! (`"d3"`, `"d3c4"`, or empty after a pass), and the client answers with
//! commands:
//!
//! - `v`: the legal moves, concatenated.
//! - `q`: quit.
//! - a location: the number of flips on success, otherwise `"<code> <reason>"`
//!   where the code is negative for a bad location and `0` when nothing flips.
//!
//! At the end of the game the server sends `end` and then one last moves line.

use super::{place_text, Played, Player};
use async_std::io::BufReader;
use async_std::net::{TcpListener, TcpStream};
use async_std::prelude::*;
use async_std::task;
use flipside_othello::{Board, Color, Location};
use itertools::Itertools;
use log::{debug, info, warn};
use std::io;
use std::net::SocketAddr;

/// Where remote players connect by default.
pub const PORT: u16 = 1234;

pub struct RemotePlayer {
    color: Color,
    peer: SocketAddr,
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    print_boards: bool,
    /// Whether the client has been sent its first moves line.
    started: bool,
    /// Set once the client quits or the connection fails.
    closed: bool,
}

impl RemotePlayer {
    /// Listen on `port` on every interface and wait for one client.
    pub fn listen(color: Color, port: u16) -> io::Result<Self> {
        let listener = std::net::TcpListener::bind(("0.0.0.0", port))?;
        info!("{} waiting for a client on port {}", color, port);
        Self::accept(color, listener)
    }

    /// Accept one client from `listener` and read its greeting.
    pub fn accept(color: Color, listener: std::net::TcpListener) -> io::Result<Self> {
        task::block_on(async {
            let listener = TcpListener::from(listener);
            let (stream, peer) = listener.accept().await?;
            let mut player = Self {
                color,
                peer,
                reader: BufReader::new(stream.clone()),
                writer: stream,
                print_boards: false,
                started: false,
                closed: false,
            };
            let greeting = player.receive().await?.unwrap_or_default();
            player.print_boards = greeting == "printBoards";
            info!(
                "{} connected from {} (boards {})",
                color,
                peer,
                if player.print_boards { "on" } else { "off" }
            );
            Ok::<_, io::Error>(player)
        })
    }

    async fn send(&mut self, line: &str) -> io::Result<()> {
        debug!("{} sending {:?}", self.peer, line);
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await
    }

    /// The next line without its terminator, or `None` once the client hangs up.
    async fn receive(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(|c| c == '\n' || c == '\r').to_string();
        debug!("{} received {:?}", self.peer, line);
        Ok(Some(line))
    }

    /// The opponent's moves, then the board if anything changed or this is
    /// the client's first look at it.
    async fn send_moves(&mut self, board: &Board, opponent: &[Location]) -> io::Result<()> {
        self.send(&opponent.iter().join("")).await?;
        if self.print_boards && (!opponent.is_empty() || !self.started) {
            self.send(&board.layout()).await?;
        }
        self.started = true;
        Ok(())
    }

    async fn take_turn(
        &mut self,
        board: &mut Board,
        opponent: &[Location],
    ) -> io::Result<Option<Played>> {
        self.send_moves(board, opponent).await?;
        loop {
            let command = match self.receive().await? {
                Some(command) => command,
                None => return Ok(None),
            };
            match command.as_str() {
                "q" => return Ok(None),
                "v" => {
                    let moves = board.legal_moves(self.color).join("");
                    self.send(&moves).await?;
                }
                text => match place_text(board, self.color, text) {
                    Ok(played) if played.flips > 0 => {
                        self.send(&played.flips.to_string()).await?;
                        if self.print_boards {
                            self.send(&board.layout()).await?;
                        }
                        return Ok(Some(played));
                    }
                    Ok(_) => self.send("0 must flip at least one piece").await?,
                    Err(err) => self.send(&format!("{} {}", err.code(), err)).await?,
                },
            }
        }
    }

    async fn finish(&mut self, board: &Board, opponent: &[Location]) -> io::Result<()> {
        self.send("end").await?;
        self.send_moves(board, opponent).await
    }
}

impl Player for RemotePlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn describe(&self) -> String {
        format!("{} remote ({})", self.color, self.peer)
    }

    fn make_move(&mut self, board: &mut Board, opponent: &[Location]) -> Option<Played> {
        if self.closed {
            return None;
        }
        match task::block_on(self.take_turn(board, opponent)) {
            Ok(Some(played)) => Some(played),
            Ok(None) => {
                self.closed = true;
                None
            }
            Err(err) => {
                warn!("{} lost its client {}: {}", self.color, self.peer, err);
                self.closed = true;
                None
            }
        }
    }

    fn game_over(&mut self, board: &Board, opponent: &[Location]) {
        if self.closed {
            return;
        }
        if let Err(err) = task::block_on(self.finish(board, opponent)) {
            warn!("{} could not report the result to {}: {}", self.color, self.peer, err);
            self.closed = true;
        }
    }
}
