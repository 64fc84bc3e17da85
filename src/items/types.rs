#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
}

impl ItemKind {
    /// Returns the display name for this item kind.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Armor => "armor",
            ItemKind::Potion => "potion",
        }
    }
}

/// Immutable value object; carried as enemy loot and in the player inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub value: u32,
}

impl Item {
    pub fn new(name: &str, kind: ItemKind, value: u32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value,
        }
    }
}
