//! Wish results rendering.

use super::rarity_color;
use crate::game_state::GameState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw_wish_results(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(" Wish Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = state
        .last_results
        .iter()
        .map(|result| match result {
            Some(item) => {
                let mut style = Style::default().fg(rarity_color(item.rarity));
                if item.rarity.stars() == 5 {
                    style = style.add_modifier(Modifier::BOLD);
                }
                ListItem::new(item.describe()).style(style)
            }
            None => ListItem::new("No item was pulled.")
                .style(Style::default().fg(Color::DarkGray)),
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
