//! Primogem ledger and item inventory.

use crate::constants::DAILY_QUEST_REWARD;
use crate::items::Item;

/// Player session state: primogem balance plus collected items.
///
/// The balance can never go negative; spends that would overdraw are
/// refused and leave the balance untouched.
#[derive(Debug, Clone, Default)]
pub struct Player {
    primogems: u32,
    inventory: Vec<Item>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primogems(&self) -> u32 {
        self.primogems
    }

    pub fn add_primogems(&mut self, amount: u32) {
        self.primogems += amount;
    }

    /// Returns false and leaves the balance unchanged when funds are short.
    pub fn spend_primogems(&mut self, amount: u32) -> bool {
        if self.primogems >= amount {
            self.primogems -= amount;
            true
        } else {
            false
        }
    }

    /// Credits the daily quest reward and returns the amount earned.
    pub fn complete_daily_quest(&mut self) -> u32 {
        self.add_primogems(DAILY_QUEST_REWARD);
        DAILY_QUEST_REWARD
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }
}
