//! Main menu rendering.

use crate::game_state::{GameState, MENU_ACTIONS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw_menu(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(" Choose an action ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = MENU_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let prefix = if i == state.menu_index { "> " } else { "  " };
            let style = if i == state.menu_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}. {}", prefix, i + 1, action.label())).style(style)
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
