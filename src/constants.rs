// Gacha draw constants
pub const HARD_PITY: u32 = 90;
pub const ROLL_RANGE: u32 = 100;
pub const FIVE_STAR_THRESHOLD: u32 = 1; // roll < 1 => 1% chance
pub const FOUR_STAR_THRESHOLD: u32 = 10; // roll < 10 => 9% chance, rest is 3-star

// Primogem economy constants
pub const SINGLE_WISH_COST: u32 = 160;
pub const TEN_WISH_COST: u32 = 1600;
pub const TEN_WISH_COUNT: usize = 10;
pub const DAILY_QUEST_REWARD: u32 = 100;
