//! Player record and the progression engine.

use crate::core::constants::*;
use crate::items::types::Item;

/// The player character. HP may drop below zero transiently when a lethal
/// hit lands; the caller processes defeat before anything else observes it.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub exp: u32,
    pub max_exp: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub gold: u32,
    pub inventory: Vec<Item>,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            level: 1,
            exp: 0,
            max_exp: STARTING_MAX_EXP,
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
            gold: STARTING_GOLD,
            inventory: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Applies mitigation to incoming raw damage and subtracts the result
    /// from HP. Mitigation is `max(1, raw - defense / 2)`; at least one
    /// point always lands. Returns the damage actually taken.
    pub fn take_damage(&mut self, raw: i32) -> i32 {
        let mitigated = (raw - self.defense / 2).max(MIN_DAMAGE);
        self.hp -= mitigated;
        mitigated
    }

    /// Restores HP, capped at max.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Adds experience and performs at most one level-up check. Overshoot
    /// beyond `max_exp` is discarded on level-up rather than carried over.
    /// Returns whether a level-up occurred.
    pub fn gain_exp(&mut self, amount: u32) -> bool {
        self.exp += amount;
        if self.exp >= self.max_exp {
            self.level_up();
            true
        } else {
            false
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.exp = 0;
        self.max_exp = (self.max_exp as f64 * MAX_EXP_GROWTH) as u32;
        self.max_hp += LEVEL_UP_HP_BONUS;
        self.hp = self.max_hp;
        self.attack += LEVEL_UP_ATTACK_BONUS;
        self.defense += LEVEL_UP_DEFENSE_BONUS;
    }
}
