use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use flipside_othello::Color;
use flipside_player::{Game, MatchConfig, PlayerKind, ScoreKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "flipside",
    version,
    about = "Play Othello against the computer, or let it play itself"
)]
struct Cli {
    /// JSON match configuration; the flags below override its fields
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Who plays Black: human, computer or remote
    #[arg(long, value_name = "KIND")]
    black: Option<PlayerKind>,
    /// Who plays White: human, computer or remote
    #[arg(long, value_name = "KIND")]
    white: Option<PlayerKind>,
    /// Search depth for computer players, 0 to 9
    #[arg(long)]
    depth: Option<u32>,
    /// Heuristic for computer players: full or weighted
    #[arg(long, value_name = "SCORE")]
    score: Option<ScoreKind>,
    /// Break ties between equally good moves at random
    #[arg(long, value_name = "BOOL")]
    random: Option<bool>,
    /// Number of games to play; more than one runs a computer-only tournament
    #[arg(long)]
    matches: Option<u32>,
    /// Port remote players listen on
    #[arg(long)]
    port: Option<u16>,
    /// Seed for reproducible random players
    #[arg(long)]
    seed: Option<u64>,
    /// Only print the final summary
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn apply(&self, config: &mut MatchConfig) {
        if let Some(kind) = self.black {
            config.black.kind = kind;
        }
        if let Some(kind) = self.white {
            config.white.kind = kind;
        }
        for player in [&mut config.black, &mut config.white].iter_mut() {
            if let Some(depth) = self.depth {
                player.depth = depth;
            }
            if let Some(score) = self.score {
                player.score = score;
            }
            if let Some(random) = self.random {
                player.random = random;
            }
            if let Some(port) = self.port {
                player.port = port;
            }
        }
        if let Some(matches) = self.matches {
            config.matches = matches;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.quiet |= self.quiet;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => MatchConfig::default(),
    };
    cli.apply(&mut config);
    config.validate()?;

    let tournament = config.matches > 1;
    if tournament {
        if Color::ALL
            .iter()
            .any(|&color| config.player(color).kind != PlayerKind::Computer)
        {
            bail!("tournaments are computer-only");
        }
        config.quiet = true;
    }

    let mut game = Game::new(
        config.build_player(Color::Black)?,
        config.build_player(Color::White)?,
        config.quiet,
    );

    let progress = if tournament {
        let bar = ProgressBar::new(config.matches as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix} [{bar:40}] {pos}/{len} games ({eta})")
                .progress_chars("=> "),
        );
        bar.set_prefix("Playing");
        bar
    } else {
        ProgressBar::hidden()
    };
    let tally = game.play_match(config.matches, |_| progress.inc(1));
    progress.finish_and_clear();

    if tournament {
        println!("{}", tally);
    }
    for seat in game.seats().iter() {
        println!("{}", seat);
    }
    Ok(())
}
