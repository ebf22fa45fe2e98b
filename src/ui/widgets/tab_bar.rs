//! Bottom navigation bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Store, Tab};

/// Bottom navigation bar widget.
pub struct TabBar;

impl TabBar {
    /// Render the navigation bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let mut spans = vec![Span::raw(" ")];

        for (index, tab) in Tab::ALL.iter().enumerate() {
            let is_selected = store.session.active_tab == *tab;

            let key_style = Style::default().fg(Color::DarkGray);
            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };

            spans.push(Span::styled(format!("[{}] ", index + 1), key_style));
            spans.push(Span::styled(tab.to_string(), name_style));
            spans.push(Span::raw("  "));
        }

        let tab_line = Line::from(spans);
        let paragraph = Paragraph::new(tab_line);

        frame.render_widget(paragraph, area);
    }
}
