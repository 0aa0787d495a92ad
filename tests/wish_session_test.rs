//! Integration tests: primogem ledger + draw engine composition.
//!
//! The ledger and the engine only meet in the session driver: spend first,
//! wish only when the spend succeeds.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wishsim::banner::Banner;
use wishsim::constants::{DAILY_QUEST_REWARD, SINGLE_WISH_COST, TEN_WISH_COST};
use wishsim::game_state::{GameState, Screen};

// =========================================================================
// Spend-before-wish gating
// =========================================================================

#[test]
fn test_refused_wish_leaves_everything_untouched() {
    let mut state = GameState::new(Banner::standard());
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    state.player.add_primogems(SINGLE_WISH_COST - 1);

    state.wish_single(&mut rng);

    assert_eq!(state.player.primogems(), SINGLE_WISH_COST - 1);
    assert!(state.player.inventory().is_empty());
    assert_eq!(state.engine.pity(), 0, "a refused wish must not advance pity");
    assert_eq!(state.screen, Screen::Menu);
}

#[test]
fn test_single_wish_costs_160() {
    let mut state = GameState::new(Banner::standard());
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    state.player.add_primogems(200);

    state.wish_single(&mut rng);

    assert_eq!(state.player.primogems(), 200 - SINGLE_WISH_COST);
    assert_eq!(state.last_results.len(), 1);
}

// =========================================================================
// Ten-wish batches
// =========================================================================

#[test]
fn test_ten_wish_costs_1600_and_shares_pity() {
    let mut state = GameState::new(Banner::standard());
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    state.player.add_primogems(TEN_WISH_COST);

    state.wish_ten(&mut rng);

    assert_eq!(state.player.primogems(), 0);
    assert_eq!(state.last_results.len(), 10);

    // One shared pity counter: ten non-5-star wishes leave pity at 10,
    // any 5-star in the batch resets it mid-run.
    let five_stars = state
        .last_results
        .iter()
        .flatten()
        .filter(|item| item.rarity.stars() == 5)
        .count();
    if five_stars == 0 {
        assert_eq!(state.engine.pity(), 10);
    } else {
        assert!(state.engine.pity() < 10);
    }
}

#[test]
fn test_ten_wish_inventory_matches_hits() {
    // The standard banner covers every tier, so all ten wishes land.
    let mut state = GameState::new(Banner::standard());
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    state.player.add_primogems(TEN_WISH_COST);

    state.wish_ten(&mut rng);

    let hits = state.last_results.iter().flatten().count();
    assert_eq!(hits, 10);
    assert_eq!(state.player.inventory().len(), hits);
}

// =========================================================================
// Earning primogems through daily quests
// =========================================================================

#[test]
fn test_daily_quests_fund_a_single_wish() {
    let mut state = GameState::new(Banner::standard());
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    // One daily quest is not enough for a wish.
    state.complete_daily_quest();
    assert_eq!(state.player.primogems(), DAILY_QUEST_REWARD);
    state.wish_single(&mut rng);
    assert!(state.player.inventory().is_empty());

    // A second one is.
    state.complete_daily_quest();
    state.wish_single(&mut rng);
    assert_eq!(
        state.player.primogems(),
        2 * DAILY_QUEST_REWARD - SINGLE_WISH_COST
    );
    assert_eq!(state.player.inventory().len(), 1);
}
