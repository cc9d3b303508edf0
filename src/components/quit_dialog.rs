//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
pub struct QuitDialog;

impl Default for QuitDialog {
    fn default() -> Self {
        Self
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 44, 8);
        frame.render_widget(Clear, popup_area);

        let key_style = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let content = vec![
            Line::from(""),
            Line::from(Span::styled("Quit roster-tui?", key_style(Color::White))),
            Line::from(Span::styled(
                "Row order and edits are not saved.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", key_style(Color::Green)),
                Span::raw("Quit  "),
                Span::styled(" n/Esc ", key_style(Color::Red)),
                Span::raw("Back to table"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit ")
                    .title_style(key_style(Color::Yellow)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_quit_dialog_keys() {
        let mut dialog = QuitDialog;
        let key = |c| KeyEvent::new(c, KeyModifiers::NONE);
        let mut press = |code| dialog.handle_key_event(key(code)).unwrap();
        assert_eq!(press(KeyCode::Char('y')), Some(Action::ForceQuit));
        assert_eq!(press(KeyCode::Esc), Some(Action::CloseModal));
        assert_eq!(press(KeyCode::Char('x')), None);
    }
}
