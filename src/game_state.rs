//! Session state shared between the input handler and the UI.

use crate::banner::Banner;
use crate::constants::{SINGLE_WISH_COST, TEN_WISH_COST, TEN_WISH_COUNT};
use crate::gacha::GachaEngine;
use crate::items::Item;
use crate::player::Player;
use rand::Rng;

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    WishResults,
    Inventory,
}

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    DailyQuest,
    SingleWish,
    TenWish,
    Inventory,
    Quit,
}

pub const MENU_ACTIONS: [MenuAction; 5] = [
    MenuAction::DailyQuest,
    MenuAction::SingleWish,
    MenuAction::TenWish,
    MenuAction::Inventory,
    MenuAction::Quit,
];

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::DailyQuest => "Complete daily quest",
            MenuAction::SingleWish => "Perform a single wish (160 primogems)",
            MenuAction::TenWish => "Perform a ten-wish (1600 primogems)",
            MenuAction::Inventory => "View inventory",
            MenuAction::Quit => "Exit",
        }
    }
}

/// Full session state: ledger, draw engine, and UI bookkeeping.
pub struct GameState {
    pub player: Player,
    pub engine: GachaEngine,
    pub screen: Screen,
    pub menu_index: usize,
    pub inventory_offset: usize,
    /// Outcomes of the most recent wish batch. `None` entries are wishes
    /// whose tier had no banner items.
    pub last_results: Vec<Option<Item>>,
    /// One-line message shown under the header.
    pub status: Option<String>,
}

impl GameState {
    pub fn new(banner: Banner) -> Self {
        Self {
            player: Player::new(),
            engine: GachaEngine::new(banner),
            screen: Screen::Menu,
            menu_index: 0,
            inventory_offset: 0,
            last_results: Vec::new(),
            status: None,
        }
    }

    pub fn complete_daily_quest(&mut self) {
        let earned = self.player.complete_daily_quest();
        self.status = Some(format!(
            "Daily quest completed! You earned {} primogems.",
            earned
        ));
    }

    /// Spends for one wish and performs it. Refuses without wishing when
    /// the balance is short.
    pub fn wish_single(&mut self, rng: &mut impl Rng) {
        if !self.player.spend_primogems(SINGLE_WISH_COST) {
            self.status = Some("Not enough primogems!".to_string());
            return;
        }
        let result = self.engine.wish(rng);
        if let Some(item) = result {
            self.player.add_item(item);
        }
        self.last_results = vec![result];
        self.status = Some(format!("You spent {} primogems.", SINGLE_WISH_COST));
        self.screen = Screen::WishResults;
    }

    /// Spends for a ten-wish batch. All ten wishes share the engine's pity
    /// counter, exactly as ten single wishes would.
    pub fn wish_ten(&mut self, rng: &mut impl Rng) {
        if !self.player.spend_primogems(TEN_WISH_COST) {
            self.status = Some("Not enough primogems!".to_string());
            return;
        }
        let mut results = Vec::with_capacity(TEN_WISH_COUNT);
        for _ in 0..TEN_WISH_COUNT {
            let result = self.engine.wish(rng);
            if let Some(item) = result {
                self.player.add_item(item);
            }
            results.push(result);
        }
        self.last_results = results;
        self.status = Some(format!("You spent {} primogems.", TEN_WISH_COST));
        self.screen = Screen::WishResults;
    }
}
