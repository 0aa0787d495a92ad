//! Wish rolling and pity tracking.
//!
//! Rarity selection uses a banded roll over a 100-point range, with a hard
//! pity that forces a 5-star once enough wishes pass without one.

#![allow(dead_code)]

use crate::banner::Banner;
use crate::constants::{FIVE_STAR_THRESHOLD, FOUR_STAR_THRESHOLD, HARD_PITY, ROLL_RANGE};
use crate::items::{Item, Rarity};
use rand::Rng;

/// Rolls a rarity tier: 1% 5-star, 9% 4-star, 90% 3-star.
///
/// The roll spans the full 100-point range so the bands match their
/// advertised percentages exactly.
pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen_range(0..ROLL_RANGE);
    if roll < FIVE_STAR_THRESHOLD {
        Rarity::FiveStar
    } else if roll < FOUR_STAR_THRESHOLD {
        Rarity::FourStar
    } else {
        Rarity::ThreeStar
    }
}

/// Pity-tracking draw engine over a fixed banner.
///
/// The pity counter counts wishes since the last 5-star and is owned
/// exclusively by the engine; only `wish` mutates it.
#[derive(Debug, Clone)]
pub struct GachaEngine {
    banner: Banner,
    pity: u32,
}

impl GachaEngine {
    pub fn new(banner: Banner) -> Self {
        Self::with_pity(banner, 0)
    }

    /// Starts the engine at a known pity count, e.g. resuming a session
    /// that already has wishes banked toward the guarantee.
    pub fn with_pity(banner: Banner, pity: u32) -> Self {
        Self { banner, pity }
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Wishes made since the last 5-star.
    pub fn pity(&self) -> u32 {
        self.pity
    }

    /// Performs one wish. Returns `None` when the selected tier has no
    /// banner entries; the caller reports "no item" and moves on.
    ///
    /// Reaching `HARD_PITY` forces a 5-star, bypassing the roll. The pity
    /// counter resets whenever the selected tier is 5-star, forced or
    /// rolled; a `None` from an under-populated lower tier never resets it.
    pub fn wish(&mut self, rng: &mut impl Rng) -> Option<Item> {
        self.pity += 1;

        let rarity = if self.pity >= HARD_PITY {
            Rarity::FiveStar
        } else {
            roll_rarity(rng)
        };

        if rarity == Rarity::FiveStar {
            self.pity = 0;
        }

        let pool = self.banner.items_of_rarity(rarity);
        if pool.is_empty() {
            return None;
        }
        Some(*pool[rng.gen_range(0..pool.len())])
    }
}
