//! Equipment catalog records

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, ProficiencyId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorCategory {
    Light,
    Medium,
    Heavy,
}

impl ArmorCategory {
    /// The proficiency needed to wear armor of this category.
    pub fn proficiency(&self) -> ArmorProficiency {
        match self {
            ArmorCategory::Light => ArmorProficiency::Light,
            ArmorCategory::Medium => ArmorProficiency::Medium,
            ArmorCategory::Heavy => ArmorProficiency::Heavy,
        }
    }
}

impl fmt::Display for ArmorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmorCategory::Light => write!(f, "light"),
            ArmorCategory::Medium => write!(f, "medium"),
            ArmorCategory::Heavy => write!(f, "heavy"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorProficiency {
    Light,
    Medium,
    Heavy,
    Shields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponCategory {
    Simple,
    Martial,
}

impl WeaponCategory {
    /// Proficiency key covering every weapon of this category.
    pub fn proficiency(&self) -> ProficiencyId {
        match self {
            WeaponCategory::Simple => ProficiencyId::new("simple-weapons"),
            WeaponCategory::Martial => ProficiencyId::new("martial-weapons"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Armor {
        category: ArmorCategory,
        base_ac: u8,
    },
    Shield,
    Weapon {
        category: WeaponCategory,
        #[serde(default)]
        ranged: bool,
    },
    /// A bundle that expands to its contents when granted
    Pack { contents: Vec<ItemGrant> },
    Gear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

impl ItemData {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn gear(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ItemKind::Gear)
    }

    pub fn armor(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: ArmorCategory,
        base_ac: u8,
    ) -> Self {
        Self::new(id, name, ItemKind::Armor { category, base_ac })
    }

    pub fn weapon(id: impl Into<ItemId>, name: impl Into<String>, category: WeaponCategory) -> Self {
        Self::new(
            id,
            name,
            ItemKind::Weapon {
                category,
                ranged: false,
            },
        )
    }

    pub fn ranged_weapon(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: WeaponCategory,
    ) -> Self {
        Self::new(
            id,
            name,
            ItemKind::Weapon {
                category,
                ranged: true,
            },
        )
    }

    pub fn pack(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        contents: impl IntoIterator<Item = ItemGrant>,
    ) -> Self {
        Self::new(
            id,
            name,
            ItemKind::Pack {
                contents: contents.into_iter().collect(),
            },
        )
    }

    pub fn is_pack(&self) -> bool {
        matches!(self.kind, ItemKind::Pack { .. })
    }
}

/// An item with a quantity, as granted by content or an equipment option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGrant {
    pub item: ItemId,
    pub quantity: u32,
}

impl ItemGrant {
    pub fn new(item: impl Into<ItemId>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }

    pub fn one(item: impl Into<ItemId>) -> Self {
        Self::new(item, 1)
    }
}

/// Which items satisfy a "pick any" slot inside an equipment option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFilter {
    SimpleWeapon,
    SimpleMeleeWeapon,
    MartialWeapon,
    MartialMeleeWeapon,
}

impl ItemFilter {
    pub fn matches(&self, item: &ItemData) -> bool {
        let ItemKind::Weapon { category, ranged } = item.kind else {
            return false;
        };
        match self {
            ItemFilter::SimpleWeapon => category == WeaponCategory::Simple,
            ItemFilter::SimpleMeleeWeapon => category == WeaponCategory::Simple && !ranged,
            ItemFilter::MartialWeapon => category == WeaponCategory::Martial,
            ItemFilter::MartialMeleeWeapon => category == WeaponCategory::Martial && !ranged,
        }
    }
}

impl fmt::Display for ItemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemFilter::SimpleWeapon => write!(f, "simple weapon"),
            ItemFilter::SimpleMeleeWeapon => write!(f, "simple melee weapon"),
            ItemFilter::MartialWeapon => write!(f, "martial weapon"),
            ItemFilter::MartialMeleeWeapon => write!(f, "martial melee weapon"),
        }
    }
}
