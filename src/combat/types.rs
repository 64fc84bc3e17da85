use rand::Rng;

use crate::items::types::{Item, ItemKind};

#[derive(Debug, Clone)]
pub struct Enemy {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub loot: Vec<Item>,
}

impl Enemy {
    pub fn new(name: &str, max_hp: i32, attack: i32, defense: i32, loot: Vec<Item>) -> Self {
        Self {
            name: name.to_string(),
            hp: max_hp,
            max_hp,
            attack,
            defense,
            loot,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }
}

/// The fixed encounter catalog: four archetypes, each carrying one loot
/// item. Every call instantiates fresh copies at full HP.
pub fn catalog() -> [Enemy; 4] {
    [
        Enemy::new(
            "Goblin",
            30,
            8,
            1,
            vec![Item::new("Rusty Sword", ItemKind::Weapon, 5)],
        ),
        Enemy::new(
            "Orc",
            50,
            12,
            3,
            vec![Item::new("Battle Axe", ItemKind::Weapon, 15)],
        ),
        Enemy::new(
            "Dragon",
            100,
            20,
            8,
            vec![Item::new("Dragon Scales", ItemKind::Armor, 25)],
        ),
        Enemy::new(
            "Skeleton",
            35,
            10,
            2,
            vec![Item::new("Bone Staff", ItemKind::Weapon, 10)],
        ),
    ]
}

/// Draws one enemy uniformly from the catalog.
pub fn roll_encounter(rng: &mut impl Rng) -> Enemy {
    let enemies = catalog();
    let index = rng.gen_range(0..enemies.len());
    enemies[index].clone()
}
