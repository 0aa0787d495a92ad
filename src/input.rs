//! Keyboard dispatch for each screen.

use crate::game_state::{GameState, MenuAction, Screen, MENU_ACTIONS};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Routes a key event to the active screen. Returns `Quit` when the
/// session should end.
pub fn handle_key(state: &mut GameState, key: KeyEvent, rng: &mut impl Rng) -> InputResult {
    match state.screen {
        Screen::Menu => handle_menu_key(state, key, rng),
        Screen::WishResults => handle_results_key(state, key),
        Screen::Inventory => handle_inventory_key(state, key),
    }
}

fn handle_menu_key(state: &mut GameState, key: KeyEvent, rng: &mut impl Rng) -> InputResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            if state.menu_index > 0 {
                state.menu_index -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.menu_index + 1 < MENU_ACTIONS.len() {
                state.menu_index += 1;
            }
        }
        KeyCode::Enter => return run_action(state, MENU_ACTIONS[state.menu_index], rng),
        // Number shortcuts matching the displayed menu order
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            state.menu_index = index;
            return run_action(state, MENU_ACTIONS[index], rng);
        }
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}

fn run_action(state: &mut GameState, action: MenuAction, rng: &mut impl Rng) -> InputResult {
    match action {
        MenuAction::DailyQuest => state.complete_daily_quest(),
        MenuAction::SingleWish => state.wish_single(rng),
        MenuAction::TenWish => state.wish_ten(rng),
        MenuAction::Inventory => {
            state.inventory_offset = 0;
            state.screen = Screen::Inventory;
        }
        MenuAction::Quit => return InputResult::Quit,
    }
    InputResult::Continue
}

fn handle_results_key(state: &mut GameState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            state.screen = Screen::Menu;
        }
        KeyCode::Char('q') => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}

fn handle_inventory_key(state: &mut GameState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.inventory_offset = state.inventory_offset.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.inventory_offset + 1 < state.player.inventory().len() {
                state.inventory_offset += 1;
            }
        }
        KeyCode::Enter | KeyCode::Esc => {
            state.screen = Screen::Menu;
        }
        KeyCode::Char('q') => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}
