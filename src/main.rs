use std::io;
use std::panic;

use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use bramble::app::App;
use bramble::config::{Args, Config};
use bramble::logging;

fn main() -> io::Result<()> {
    let (file, config) = Args::parse().into_config();

    if let Some(path) = &config.log_file {
        if let Err(e) = logging::init(path) {
            eprintln!("Warning: could not open log file {}: {}", path.display(), e);
        }
    }
    tracing::debug!(?file, ?config, "session config");

    // Setup panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, file, config);

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "terminal error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("exiting");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    file: Option<String>,
    config: Config,
) -> io::Result<()> {
    let mut app = App::new(config);

    if let Some(name) = file {
        if let Err(e) = app.open(&name) {
            tracing::warn!(error = %e, "could not open startup file");
            app.set_status(&e.to_string());
        }
    }

    loop {
        app.render_frame(terminal)?;

        // One event per frame; the clock and status timeout refresh on the next key
        let ev = event::read()?;
        app.handle_event(ev);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
    Ok(())
}
