//! roster-tui - An interactive student roster table for the terminal
//!
//! Rows can be reordered by dragging their handle, columns resized by
//! dragging the header edge, rows expanded to show details, and each
//! student's gender edited in place. It uses the Component Architecture
//! pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::RecordStore;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

/// Interactive student roster table
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Roster file to load (.json or .csv); the built-in sample is used otherwise
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Config file (default: ~/.roster-tui/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level for ~/.roster-tui/roster-tui.log (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.log_level.as_deref()) {
        eprintln!("Logging disabled: {:#}", err);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(err) if cli.config.is_some() => return Err(err),
        Err(err) => {
            warn!("Using default config: {:#}", err);
            Config::default()
        }
    };

    let store = load_store(cli.roster.or_else(|| config.roster_path.clone()))?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    let mut app = App::new(store, &config);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        error!("Exited with error: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("Exited cleanly");
    Ok(())
}

fn load_store(path: Option<PathBuf>) -> Result<RecordStore> {
    match path {
        Some(path) => services::load_roster(&path),
        None => RecordStore::new(services::sample_roster()).context("Invalid sample roster"),
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!("Draw error: {:#}", e);
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = event_to_action(app, event)?;

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}

/// Convert a terminal event to the action it triggers
fn event_to_action(app: &mut App, event: Event) -> Result<Option<Action>> {
    let action = match event {
        Event::Key(key) => app.handle_key_event(key)?,
        Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        // A gesture cannot outlive the terminal losing focus
        Event::FocusLost => Some(Action::CancelGestures),
        _ => None,
    };
    Ok(action)
}
