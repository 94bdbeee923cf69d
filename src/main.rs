use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use blitz::app::Workbench;
use blitz::kernel::services::adapters::{ensure_settings_file, load_settings_from};
use blitz::kernel::services::ports::Settings;
use blitz::kernel::{Dataset, DatasetError};
use blitz::tui::crossterm::into_input_event;
use blitz::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use blitz::tui::view::{EventResult, View};

mod logging;

const IDLE_POLL: Duration = Duration::from_millis(250);

const USAGE: &str = "\
Usage: blitz [--data <path>]

Search a list of addresses and quiz yourself on their locations.

Options:
  --data <path>   JSON file with [{\"address\": ..., \"location\": ...}] records
  -h, --help      Print this help
";

#[derive(Debug, Default)]
struct Args {
    data: Option<PathBuf>,
    help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        if arg == "-h" || arg == "--help" {
            parsed.help = true;
        } else if arg == "--data" {
            let value = args
                .next()
                .ok_or_else(|| "--data requires a path".to_string())?;
            parsed.data = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--data=") {
            parsed.data = Some(PathBuf::from(value));
        } else {
            return Err(format!("unexpected argument: {arg}"));
        }
    }
    Ok(parsed)
}

fn load_settings() -> Settings {
    match ensure_settings_file() {
        Ok(path) => load_settings_from(&path).unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "settings file unavailable, using defaults");
            Settings::default()
        }
    }
}

fn load_dataset(cli: Option<PathBuf>, settings: &Settings) -> Result<Dataset, DatasetError> {
    match cli.or_else(|| settings.dataset.clone()) {
        Some(path) => Dataset::load(&path),
        None => Dataset::bundled(),
    }
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("blitz: {message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let _logging = logging::init();

    let settings = load_settings();
    let dataset = match load_dataset(args.data, &settings) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(error = %e, "failed to load dataset");
            eprintln!("blitz: {e}");
            return ExitCode::from(1);
        }
    };
    tracing::info!(records = dataset.len(), "dataset loaded");

    let mut workbench = Workbench::from_settings(dataset, &settings);
    match run(&mut workbench) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(signal)) => {
            tracing::info!(?signal, "terminated by signal");
            ExitCode::from(signal.exit_code() as u8)
        }
        Err(e) => {
            tracing::error!(error = %e, "terminal error");
            eprintln!("blitz: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(workbench: &mut Workbench) -> io::Result<Option<TerminationSignal>> {
    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    {
        if let Err(e) =
            blitz::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)
        {
            tracing::warn!(error = %e, "signal handlers not installed");
        }
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut dirty = true;
    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(Some(signal));
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
                if let Some((x, y)) = workbench.cursor_position() {
                    frame.set_cursor_position((x, y));
                }
            })?;
            dirty = false;
        }

        let timeout = workbench
            .next_deadline()
            .map(|at| at.saturating_duration_since(Instant::now()).min(IDLE_POLL))
            .unwrap_or(IDLE_POLL);

        if crossterm::event::poll(timeout)? {
            if let Some(event) = into_input_event(crossterm::event::read()?) {
                match workbench.handle_input(&event) {
                    EventResult::Quit => return Ok(None),
                    EventResult::Consumed => dirty = true,
                    EventResult::Ignored => {}
                }
            }
        }

        if workbench.tick(Instant::now()) {
            dirty = true;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
