//! Event market widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Store;

/// Event market widget: one card per open event, options as buttons.
pub struct MarketList;

impl MarketList {
    /// Render the event market.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(format!(" Event Market ({}) ", store.markets.events.len()))
            .title_bottom(" Enter stakes 100 $PRED ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if store.markets.events.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No open events right now...",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
            .centered();
            frame.render_widget(empty, area);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for (index, event) in store.markets.events.iter().enumerate() {
            let is_selected = store.markets.selected_index == Some(index);

            let marker = if is_selected { "▶ " } else { "  " };
            let title_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(event.title.clone(), title_style),
            ]));

            let mut option_spans = vec![Span::raw("    ")];
            for (option_index, option) in event.options.iter().enumerate() {
                // First option renders red, the rest blue, as the mini-app does.
                let color = if option_index == 0 {
                    Color::Red
                } else {
                    Color::Blue
                };
                let mut style = Style::default().fg(color);
                if is_selected && store.markets.selected_option == option_index {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                option_spans.push(Span::styled(format!("[ {} ]", option.name), style));
                option_spans.push(Span::raw(" "));
            }
            lines.push(Line::from(option_spans));
            lines.push(Line::raw(""));
        }

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}
