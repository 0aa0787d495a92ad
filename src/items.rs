#![allow(dead_code)]

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rarity {
    ThreeStar = 3,
    FourStar = 4,
    FiveStar = 5,
}

impl Rarity {
    /// Returns the star count for this rarity tier.
    pub fn stars(&self) -> u8 {
        *self as u8
    }

    /// Maps a raw star count back to a tier. Anything outside {3, 4, 5}
    /// is not a drawable tier.
    pub fn from_stars(stars: u8) -> Option<Self> {
        match stars {
            3 => Some(Rarity::ThreeStar),
            4 => Some(Rarity::FourStar),
            5 => Some(Rarity::FiveStar),
            _ => None,
        }
    }

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::ThreeStar => "3-Star",
            Rarity::FourStar => "4-Star",
            Rarity::FiveStar => "5-Star",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Pyro,
    Hydro,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Pyro => "Pyro",
            Element::Hydro => "Hydro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponType {
    Sword,
    Polearm,
    Claymore,
}

impl WeaponType {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponType::Sword => "Sword",
            WeaponType::Polearm => "Polearm",
            WeaponType::Claymore => "Claymore",
        }
    }
}

/// Item category. Characters carry an element, weapons a weapon type;
/// the category only affects how the item is displayed, never the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Character { element: Element },
    Weapon { weapon_type: WeaponType },
}

/// A drawable banner entry. Defined once at banner construction and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub name: &'static str,
    pub rarity: Rarity,
    pub kind: ItemKind,
}

impl Item {
    pub fn character(name: &'static str, rarity: Rarity, element: Element) -> Self {
        Self {
            name,
            rarity,
            kind: ItemKind::Character { element },
        }
    }

    pub fn weapon(name: &'static str, rarity: Rarity, weapon_type: WeaponType) -> Self {
        Self {
            name,
            rarity,
            kind: ItemKind::Weapon { weapon_type },
        }
    }

    /// Renders the inventory display line for this item.
    pub fn describe(&self) -> String {
        match self.kind {
            ItemKind::Character { element } => format!(
                "Character: {} | Rarity: {} | Element: {}",
                self.name,
                self.rarity.stars(),
                element.name()
            ),
            ItemKind::Weapon { weapon_type } => format!(
                "Weapon: {} | Rarity: {} | Type: {}",
                self.name,
                self.rarity.stars(),
                weapon_type.name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::ThreeStar < Rarity::FourStar);
        assert!(Rarity::FourStar < Rarity::FiveStar);
    }

    #[test]
    fn test_rarity_stars() {
        assert_eq!(Rarity::ThreeStar.stars(), 3);
        assert_eq!(Rarity::FourStar.stars(), 4);
        assert_eq!(Rarity::FiveStar.stars(), 5);
    }

    #[test]
    fn test_from_stars_round_trips() {
        for rarity in [Rarity::ThreeStar, Rarity::FourStar, Rarity::FiveStar] {
            assert_eq!(Rarity::from_stars(rarity.stars()), Some(rarity));
        }
        assert_eq!(Rarity::from_stars(2), None);
        assert_eq!(Rarity::from_stars(6), None);
    }

    #[test]
    fn test_character_describe() {
        let item = Item::character("Diluc", Rarity::FiveStar, Element::Pyro);
        assert_eq!(item.describe(), "Character: Diluc | Rarity: 5 | Element: Pyro");
    }

    #[test]
    fn test_weapon_describe() {
        let item = Item::weapon("Black Tassel", Rarity::ThreeStar, WeaponType::Claymore);
        assert_eq!(item.describe(), "Weapon: Black Tassel | Rarity: 3 | Type: Claymore");
    }
}
