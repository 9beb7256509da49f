//codeterm/src/main.rs
use codeterm::app::Workbench;
use codeterm::kernel::services::adapters::{
    ensure_settings_file, load_settings, AppMessage, AsyncRuntime,
};
use codeterm::kernel::services::ports::Settings;
use codeterm::tui::crossterm::into_input_event;
use codeterm::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use codeterm::tui::view::{EventResult, View};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const MAX_MESSAGES_PER_TICK: usize = 256;

enum CliAction {
    Run,
    Version,
    Help,
}

fn parse_args(args: impl Iterator<Item = String>) -> CliAction {
    for arg in args {
        match arg.as_str() {
            "-V" | "--version" => return CliAction::Version,
            "-h" | "--help" => return CliAction::Help,
            _ => {}
        }
    }
    CliAction::Run
}

fn print_help() {
    println!("codeterm {}", env!("CARGO_PKG_VERSION"));
    println!("A terminal-style coding workspace with a simulated assistant.\n");
    println!("Usage: codeterm [--help] [--version]\n");
    println!("Keys: F1/F2/F3 or Tab switch views, Esc returns to the terminal, Ctrl+Q quits.");
    println!("Type \"help\" in the terminal view for the command list.");
}

/// Missing or broken settings fall back to defaults.
fn load_startup_settings() -> Settings {
    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "ensure_settings_file failed");
    }
    match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "load_settings failed, using defaults");
            Settings::default()
        }
    }
}

fn main() -> io::Result<()> {
    match parse_args(std::env::args().skip(1)) {
        CliAction::Version => {
            println!("codeterm {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        CliAction::Help => {
            print_help();
            return Ok(());
        }
        CliAction::Run => {}
    }

    let mut logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }
    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());

    let settings = load_startup_settings();
    let (msg_tx, msg_rx) = mpsc::channel::<AppMessage>();
    let runtime = AsyncRuntime::new(msg_tx)?;
    let mut workbench = Workbench::new(&settings, runtime, log_rx);

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    codeterm::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let outcome = run(&mut terminal, &mut workbench, &msg_rx, &signal_rx);

    drop(workbench);
    drop(terminal);
    drop(guard);

    match outcome? {
        Some(signal) => {
            tracing::info!(?signal, "terminated by signal");
            drop(logging);
            std::process::exit(signal.exit_code());
        }
        None => {
            tracing::info!("exit");
            Ok(())
        }
    }
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    workbench: &mut Workbench,
    msg_rx: &Receiver<AppMessage>,
    signal_rx: &Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(Some(signal));
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
            })?;
            dirty = false;
        }

        if crossterm::event::poll(POLL_INTERVAL)? {
            let event = into_input_event(crossterm::event::read()?);
            match workbench.handle_input(&event) {
                EventResult::Quit => return Ok(None),
                EventResult::Consumed => dirty = true,
                EventResult::Ignored => {}
            }
        }

        for msg in msg_rx.try_iter().take(MAX_MESSAGES_PER_TICK) {
            dirty |= workbench.handle_message(msg);
        }
        dirty |= workbench.tick();
    }
}
