use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use minesweeper::config::{Difficulty, GameConfig, MAX_SIDE};
use minesweeper::console::Console;
use minesweeper::engine::GameSession;
use minesweeper::game_loop;
use minesweeper::render::RenderStyle;
use minesweeper::tui;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "minesweeper", about = "Clear the mine field without stepping on a mine", version)]
struct Args {
    /// Difficulty preset (prompted for when neither this nor --size/--mines is given)
    #[arg(short, long, value_enum, conflicts_with_all = ["size", "mines"])]
    difficulty: Option<Difficulty>,
    /// Custom board side size
    #[arg(long, requires = "mines")]
    size: Option<usize>,
    /// Custom number of mines
    #[arg(long, requires = "size")]
    mines: Option<usize>,
    /// Seed (0 = random)
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Launch TUI mode
    #[arg(long)]
    tui: bool,
    /// Print the game manual and exit
    #[arg(long)]
    manual: bool,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_manual() {
    println!("\n-----Manual for Minesweeper-----\n");
    println!("Try to clear the mine field without stepping on a mine!");
    println!("To clear a tile, enter <row> <column>");
    println!("Use flags to keep track of where you think mines are using f <row> <column>");
    println!("If you want to remove a flag, just type in f <row> <column> again.");
    println!("You cannot select a tile if it is flagged, if it has already been cleared, or if it does not exist.\n");
    println!("Difficulty levels:");
    for d in Difficulty::ALL {
        println!("{}", d);
    }
    println!("custom: --size <N> --mines <M> (N up to {})\n", MAX_SIDE);
    println!("--------------------------------\n");
}

fn init_logging(args: &Args) -> io::Result<()> {
    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);
    match &args.log_file {
        Some(path) => builder.with_ansi(false).with_writer(Mutex::new(File::create(path)?)).init(),
        // The TUI owns the terminal; log nowhere unless a file was given.
        None if args.tui => {}
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.manual {
        print_manual();
        return ExitCode::SUCCESS;
    }
    if let Err(e) = init_logging(&args) {
        eprintln!("cannot open log file: {}", e);
        return ExitCode::FAILURE;
    }

    let config = match GameConfig::resolve(args.difficulty, args.size, args.mines) {
        Ok(c) => c,
        Err(e) => { eprintln!("{}", e); return ExitCode::FAILURE; }
    };

    let style = if io::stdout().is_terminal() { RenderStyle::Color } else { RenderStyle::Plain };
    let mut console = Console::new(io::stdin().lock(), io::stdout(), style);
    let config = match config {
        Some(c) => c,
        None => match console.choose_config() {
            Ok(Some(c)) => c,
            Ok(None) => return ExitCode::SUCCESS,
            Err(e) => { eprintln!("{}", e); return ExitCode::FAILURE; }
        },
    };

    if args.tui {
        drop(console);
        if let Err(e) = tui::run_tui(config, args.seed) {
            eprintln!("TUI error: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let mut session = GameSession::new(config, args.seed);
    match game_loop::run(&mut session, &mut console) {
        Ok(status) => {
            tracing::info!(?status, "session ended");
            ExitCode::SUCCESS
        }
        Err(e) => { eprintln!("{}", e); ExitCode::FAILURE }
    }
}
