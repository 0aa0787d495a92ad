//! Terminal UI rendering.

mod inventory_scene;
mod menu_scene;
mod wish_scene;

use crate::game_state::{GameState, Screen};
use crate::items::Rarity;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Color used for an item of the given rarity.
pub(crate) fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::ThreeStar => Color::Blue,
        Rarity::FourStar => Color::Magenta,
        Rarity::FiveStar => Color::Yellow,
    }
}

/// Main drawing entry point: header, active scene, footer.
pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: balance + pity
            Constraint::Length(1), // Status line
            Constraint::Min(0),    // Active scene
            Constraint::Length(1), // Footer help
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], state);
    draw_status(frame, chunks[1], state);

    match state.screen {
        Screen::Menu => menu_scene::draw_menu(frame, chunks[2], state),
        Screen::WishResults => wish_scene::draw_wish_results(frame, chunks[2], state),
        Screen::Inventory => inventory_scene::draw_inventory(frame, chunks[2], state),
    }

    draw_footer(frame, chunks[3], state);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Primogems: {} ", state.player.primogems()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled(
            format!("Pity: {} ", state.engine.pity()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(
        Block::default()
            .title(" Wish Simulator ")
            .borders(Borders::ALL),
    );
    frame.render_widget(header, area);
}

fn draw_status(frame: &mut Frame, area: Rect, state: &GameState) {
    if let Some(status) = &state.status {
        let line = Paragraph::new(status.as_str()).style(Style::default().fg(Color::Green));
        frame.render_widget(line, area);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &GameState) {
    let help = match state.screen {
        Screen::Menu => "[↑/↓] Navigate  [Enter/1-5] Select  [q] Quit",
        Screen::WishResults => "[Enter/Esc] Back to menu  [q] Quit",
        Screen::Inventory => "[↑/↓] Scroll  [Enter/Esc] Back to menu  [q] Quit",
    };
    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
