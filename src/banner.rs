//! Banner catalog: the fixed set of items a wish can produce.

#![allow(dead_code)]

use crate::items::{Element, Item, Rarity, WeaponType};

/// An ordered, immutable set of drawable items. Fixed at construction;
/// read-only for the lifetime of the engine.
#[derive(Debug, Clone)]
pub struct Banner {
    items: Vec<Item>,
}

impl Banner {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The standard banner. Note there is no 3-star character and only a
    /// single 3-star weapon.
    pub fn standard() -> Self {
        Self::new(vec![
            Item::character("Diluc", Rarity::FiveStar, Element::Pyro),
            Item::character("Mona", Rarity::FiveStar, Element::Hydro),
            Item::weapon("Aquila Favonia", Rarity::FiveStar, WeaponType::Sword),
            Item::character("Xiangling", Rarity::FourStar, Element::Pyro),
            Item::weapon("Favonius Lance", Rarity::FourStar, WeaponType::Polearm),
            Item::weapon("Black Tassel", Rarity::ThreeStar, WeaponType::Claymore),
        ])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Pure filter over the catalog. Returns an empty Vec when no item
    /// matches the given rarity.
    pub fn items_of_rarity(&self, rarity: Rarity) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.rarity == rarity)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_banner_has_all_tiers() {
        let banner = Banner::standard();
        assert_eq!(banner.items_of_rarity(Rarity::FiveStar).len(), 3);
        assert_eq!(banner.items_of_rarity(Rarity::FourStar).len(), 2);
        assert_eq!(banner.items_of_rarity(Rarity::ThreeStar).len(), 1);
    }

    #[test]
    fn test_filter_returns_only_matching_rarity() {
        let banner = Banner::standard();
        for rarity in [Rarity::ThreeStar, Rarity::FourStar, Rarity::FiveStar] {
            assert!(banner
                .items_of_rarity(rarity)
                .iter()
                .all(|item| item.rarity == rarity));
        }
    }

    #[test]
    fn test_filter_is_deterministic() {
        let banner = Banner::standard();
        let first: Vec<&str> = banner
            .items_of_rarity(Rarity::FiveStar)
            .iter()
            .map(|item| item.name)
            .collect();
        let second: Vec<&str> = banner
            .items_of_rarity(Rarity::FiveStar)
            .iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_tier_returns_empty_vec() {
        let banner = Banner::new(vec![Item::character(
            "Diluc",
            Rarity::FiveStar,
            Element::Pyro,
        )]);
        assert!(banner.items_of_rarity(Rarity::FourStar).is_empty());
    }
}
