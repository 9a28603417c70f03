//! Terminal Game of Life runner (default binary).
//!
//! Resolves configuration, seeds a grid the size of the terminal, then hands
//! the terminal to the session engine until the user quits.

use clap::Parser;
use tokio::sync::mpsc;

use tui_life::cli::{Cli, CliCommand};
use tui_life::config::{self, AppConfig};
use tui_life::core::{patterns, Grid, Pattern};
use tui_life::engine::{run_session, Game, QuitSignal, INPUT_QUEUE_CAPACITY};
use tui_life::input::{spawn_reader, TerminalEvents};
use tui_life::logging;
use tui_life::report::{Fatal, Warning};
use tui_life::term::{LifeView, TerminalRenderer};
use tui_life::types::LifeError;

fn main() {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Some(CliCommand::Patterns) => {
            println!("Available patterns: {}", Pattern::names());
            return;
        }
        Some(CliCommand::ConfigLocation) => {
            println!("{}", config::config_dir().display());
            return;
        }
        None => {}
    }

    let mut warnings = Vec::new();
    let (preset, fps) = cli.overrides(&mut warnings);
    let file = config::load_file_config(&config::search_paths(), &mut warnings);
    let app = AppConfig::resolve(file, preset, fps, &mut warnings);

    if let Err(fatal) = run(app, warnings) {
        fatal.show();
        std::process::exit(1);
    }
}

fn run(app: AppConfig, mut warnings: Vec<Warning>) -> Result<(), Fatal> {
    let (width, height) = crossterm::terminal::size().map_err(|e| {
        Fatal::new(
            LifeError::DisplayInit(e.to_string()),
            "Cannot query the terminal size.",
            "Please run the program inside an interactive terminal.",
        )
    })?;

    let mut grid = Grid::new(width, height).map_err(|e| {
        Fatal::new(
            e,
            "Cannot size the grid to the terminal.",
            "Make sure the terminal window is at least one cell wide and tall.",
        )
    })?;

    let report = patterns::seed(&mut grid, &app.session.preset);
    if let Some(LifeError::UnknownPattern(name)) = &report.warning {
        warnings.push(Warning::unknown_pattern(name));
    }
    // Shown before the alternate screen so they stay visible afterwards.
    for warning in &warnings {
        warning.show();
    }

    let game = Game::new(grid, &app.session);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            Fatal::new(
                e,
                "Cannot start the scheduler.",
                "Please try to re-run the program.",
            )
        })?;

    let mut term = TerminalRenderer::new(LifeView::new(app.palette));
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(Fatal::from_session(e));
    }

    let result = runtime.block_on(async move {
        let quit = QuitSignal::new();
        let (input_tx, input_rx) = mpsc::channel(INPUT_QUEUE_CAPACITY);
        let reader = spawn_reader(TerminalEvents, input_tx, quit.subscribe());

        let result = run_session(game, term, input_rx, quit).await;

        // A reader failure means the terminal went away under us.
        let read_result = match reader.await {
            Ok(read_result) => read_result,
            Err(e) => Err(anyhow::anyhow!("input reader task failed: {}", e)),
        };
        result.and_then(|state| read_result.map(|()| state))
    });

    let state = result.map_err(Fatal::from_session)?;
    log::info!("exited after {} generations", state.turn);
    Ok(())
}
