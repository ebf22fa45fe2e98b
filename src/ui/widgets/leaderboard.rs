//! Leaderboard widget.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::Store;

/// Leaderboard table, in the order the ledger ranked it.
pub struct LeaderboardTable;

impl LeaderboardTable {
    /// Render the leaderboard.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let header_cells = ["#", "Player", "$PRED"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = store
            .leaderboard
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                // The podium gets the accent color.
                let name_style = if index < 3 {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                let cells = vec![
                    Cell::from(format!("{}", index + 1)),
                    Cell::from(entry.username.clone()).style(name_style),
                    Cell::from(format!("{}", entry.balance))
                        .style(Style::default().fg(Color::Cyan)),
                ];
                Row::new(cells).height(1)
            });

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Percentage(70),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(" Top Players ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(table, area);
    }
}
