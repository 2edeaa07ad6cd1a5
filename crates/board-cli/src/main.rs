use board_cli::commands;
use board_cli::config::CliConfig;
use board_cli::report::to_json;
use clap::{Parser, Subcommand};
use rules_engine::Game;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "board-cli")]
#[command(about = "Check and play moves against the board rules")]
struct Cli {
    /// Path to the TOML config file (defaults to board.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Board in placement notation
    #[arg(long, global = true)]
    board: Option<String>,

    /// Side to move: white or black
    #[arg(long, global = true)]
    mover: Option<String>,

    /// Maximum log level
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single move, e.g. e2e4
    Check {
        /// Move in coordinate notation
        #[arg(value_name = "MOVE")]
        mv: String,
    },
    /// List the legal destinations of one piece
    Moves {
        /// Square holding the piece, e.g. g1
        square: String,
    },
    /// Play moves read from stdin, one per line
    Play,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CliConfig::load_from(path)?,
        None => CliConfig::load()?,
    };
    config.apply_overrides(
        cli.board.as_deref(),
        cli.mover.as_deref(),
        cli.log_level.as_deref(),
    );

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(io::stderr)
        .init();

    let board = config.board()?;
    let mover = config.first_to_move()?;
    tracing::info!(board = %board.to_placement(), %mover, "loaded position");

    match cli.command {
        Commands::Check { mv } => {
            let report = commands::check(&board, mover, &mv)?;
            if cli.json {
                println!("{}", to_json(&report)?);
            } else {
                println!("{}", report);
            }
            if !report.legal {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Moves { square } => {
            let report = commands::moves(&board, mover, &square)?;
            if cli.json {
                println!("{}", to_json(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Commands::Play => {
            let mut game = Game::from_board(board, mover);
            println!("{}", game.board());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let summary = commands::play(&mut game, stdin.lock(), &mut stdout)?;
            tracing::info!(%summary, "session finished");
            println!("{}", summary);
        }
    }

    Ok(ExitCode::SUCCESS)
}
