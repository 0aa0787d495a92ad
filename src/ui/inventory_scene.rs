//! Inventory list rendering.

use super::rarity_color;
use crate::game_state::GameState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_inventory(frame: &mut Frame, area: Rect, state: &GameState) {
    let inventory = state.player.inventory();
    let block = Block::default()
        .title(format!(" Inventory ({} items) ", inventory.len()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inventory.is_empty() {
        let empty = Paragraph::new("Nothing here yet. Go wish!")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let items: Vec<ListItem> = inventory
        .iter()
        .skip(state.inventory_offset)
        .take(visible)
        .map(|item| {
            ListItem::new(item.describe()).style(Style::default().fg(rarity_color(item.rarity)))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
