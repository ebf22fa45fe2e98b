//! Profile widget: balance and settlement history.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{PredictionResult, Store};

/// Profile screen: point balance on top, prediction history below.
pub struct ProfileScreen;

impl ProfileScreen {
    /// Render the profile screen.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        Self::render_balance(frame, chunks[0], store);
        Self::render_history(frame, chunks[1], store);
    }

    fn render_balance(frame: &mut Frame, area: Rect, store: &Store) {
        let balance = Line::from(vec![
            Span::raw("Your balance: "),
            Span::styled(
                format!("{} $PRED", store.profile.balance),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let paragraph = Paragraph::new(balance).block(
            Block::default()
                .title(" Profile ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_history(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(format!(
                " Your Predictions ({} pending) ",
                store.profile.pending_count()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if store.profile.history.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No predictions yet",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
            .centered();
            frame.render_widget(empty, area);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for prediction in &store.profile.history {
            let (status_color, status_text) = match prediction.result {
                PredictionResult::Won => (Color::Green, "Won +200"),
                PredictionResult::Lost => (Color::Red, "Lost"),
                PredictionResult::Pending => (Color::Yellow, "In play"),
            };

            lines.push(Line::from(vec![
                Span::styled("▌ ", Style::default().fg(status_color)),
                Span::styled(
                    prediction.event_title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  Pick: "),
                Span::styled(
                    prediction.chosen_option.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(status_text, Style::default().fg(status_color)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}
