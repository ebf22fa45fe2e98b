//! Earn screen widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Static task list; completing tasks is handled outside this client.
pub struct EarnScreen;

impl EarnScreen {
    /// Render the earn screen.
    pub fn render(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::raw(""),
            Line::from(vec![
                Span::raw("  Subscribe to the channel "),
                Span::styled("(+100 $PRED)", Style::default().fg(Color::Cyan)),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::raw("  Invite 3 friends "),
                Span::styled("(+500 $PRED)", Style::default().fg(Color::Cyan)),
                Span::styled("  0/3", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Tasks ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);
    }
}
