//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. Table
//! actions are forwarded to the table; the App itself only owns the modals.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, HelpDialog, QuitDialog, TableComponent};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{RecordStore, TableState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Modal overlay stack
    pub modals: ModalStack,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub table: TableComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App for `store`, laid out according to `config`
    pub fn new(store: RecordStore, config: &Config) -> App {
        let state = TableState::new(store, config.exclusive_expansion)
            .with_column_defaults(&config.column_widths);
        info!("Table ready with {} records", state.len());

        Self {
            should_quit: false,
            modals: ModalStack::new(),
            table: TableComponent::new(state, config.px_per_cell),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => self.table.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.modals.is_empty() {
            return self.table.handle_mouse_event(mouse);
        }

        // Modals take no pointer input, but a release must still end a gesture
        let action = match mouse.kind {
            MouseEventKind::Up(_) | MouseEventKind::Moved => Some(Action::PointerReleased),
            MouseEventKind::ScrollDown if self.modals.top() == Some(Modal::Help) => {
                Some(Action::ScrollDown)
            }
            MouseEventKind::ScrollUp if self.modals.top() == Some(Modal::Help) => {
                Some(Action::ScrollUp)
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!("Action: {}", action);
        }

        match action {
            Action::Tick | Action::Resize(_, _) => Ok(None),
            Action::ForceQuit => {
                self.should_quit = true;
                Ok(None)
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
                Ok(Some(Action::CancelGestures))
            }
            Action::OpenHelp => {
                self.modals.push(Modal::Help);
                Ok(Some(Action::CancelGestures))
            }
            Action::CloseModal => {
                if self.modals.pop() == Some(Modal::Help) {
                    self.help_dialog.update(Action::CloseModal)?;
                }
                Ok(None)
            }
            Action::ScrollUp | Action::ScrollDown => self.help_dialog.update(action),
            other => self.table.update(other),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.table.draw(frame, layout.table)?;
        self.draw_status(frame, layout.status);
        self.draw_help_bar(frame, layout.help);

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            None => {}
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.table.state();
        let mode = if let Some(column) = state.resizing_column() {
            Span::styled(
                format!(" RESIZE {} ", column),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )
        } else if state.dragging_source().is_some() {
            Span::styled(" DRAG ", Style::default().fg(Color::Black).bg(Color::Magenta))
        } else {
            Span::styled(" TABLE ", Style::default().fg(Color::Black).bg(Color::Cyan))
        };

        let mut spans = vec![
            mode,
            Span::raw(format!(" {}/{} ", self.table.selected() + 1, state.len())),
        ];
        if let Some(message) = self.table.status_message() {
            spans.push(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str| {
            Span::styled(k, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        };
        let hints = Line::from(vec![
            key(" j/k"),
            Span::raw(" select  "),
            key("J/K"),
            Span::raw(" move  "),
            key("Enter"),
            Span::raw(" details  "),
            key("m/f"),
            Span::raw(" gender  "),
            key("?"),
            Span::raw(" help  "),
            key("q"),
            Span::raw(" quit"),
        ]);
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
