//! slashpad - terminal Markdown editor with a slash-command block menu
//!
//! Entry point for the application.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use slashpad::app::App;
use slashpad::cli::Args;
use slashpad::fs::{self, EditorSettings, SlashpadPaths};
use slashpad::logging;
use slashpad::tui::TerminalEventGuard;

fn main() -> Result<()> {
    let args = Args::parse();

    // Dropping the guard flushes buffered log lines, so it lives until exit.
    let _log_guard = match &args.log_file {
        Some(path) => logging::init(path)?,
        None => None,
    };

    let settings = load_settings(&args)?;
    let (text, title) = match &args.file {
        Some(path) => {
            let title = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            (Some(fs::read_document(path)?), title)
        }
        None => (None, "welcome".to_string()),
    };
    info!(title = %title, "starting editor");

    let mut app = App::new(settings, text.as_deref(), &title);

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &mut app);
    ratatui::restore();
    result?;

    if args.print {
        println!("{}", app.text());
    }
    Ok(())
}

fn load_settings(args: &Args) -> Result<EditorSettings> {
    match &args.config {
        Some(path) => fs::load_settings(path),
        None => SlashpadPaths::from_cwd()?.load_settings(),
    }
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<()> {
    // Must be created after ratatui::init, which resets terminal flags.
    let _event_guard = TerminalEventGuard::new();

    loop {
        // Layout is computed inside the draw closure so it matches the frame.
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Paste(text) => {
                    debug!(len = text.len(), "paste");
                    app.handle_paste(&text);
                }
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
