//! Friends screen widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Static invite screen; deep links live in the host environment.
pub struct FriendsScreen;

impl FriendsScreen {
    /// Render the friends screen.
    pub fn render(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::raw(""),
            Line::from(Span::raw("  Invite friends and earn bonuses!")),
            Line::raw(""),
            Line::from(Span::styled(
                "  Share your invite link from the app menu.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Friends ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);
    }
}
