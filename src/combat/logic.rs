//! Turn resolution for one encounter.
//!
//! A `Battle` borrows the player, owns the spawned enemy, and resolves one
//! full damage exchange per round. Narration is accumulated in a log and
//! drained by the UI layer; it is not part of the computational contract.

use rand::Rng;

use super::types::Enemy;
use crate::character::player::Player;
use crate::core::constants::*;
use crate::items::types::Item;

/// Round actions resolved by the battle engine. Fleeing is handled by the
/// caller before round resolution and never reaches `execute_round`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    Defend,
    UsePotion,
}

/// Terminal result of one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
    Aborted,
}

/// Rolls the player's outgoing damage for an attack.
pub fn roll_player_damage(attack: i32, rng: &mut impl Rng) -> i32 {
    (attack + rng.gen_range(-PLAYER_ATTACK_VARIANCE..=PLAYER_ATTACK_VARIANCE)).max(MIN_DAMAGE)
}

/// Rolls the enemy's raw retaliation damage, before defend halving and
/// player mitigation.
pub fn roll_enemy_damage(attack: i32, rng: &mut impl Rng) -> i32 {
    (attack + rng.gen_range(-ENEMY_ATTACK_VARIANCE..=ENEMY_ATTACK_VARIANCE)).max(MIN_DAMAGE)
}

pub struct Battle<'a> {
    pub player: &'a mut Player,
    pub enemy: Enemy,
    pub round: u32,
    log: Vec<String>,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a mut Player, enemy: Enemy) -> Self {
        Self {
            player,
            enemy,
            round: 0,
            log: Vec::new(),
        }
    }

    /// Resolves one full round: the player's action, then the enemy's
    /// retaliation if it is still standing. An enemy killed by the player's
    /// action does not get its retaliation turn. Returns whether the enemy
    /// is still alive.
    pub fn execute_round(&mut self, action: BattleAction, rng: &mut impl Rng) -> bool {
        self.round += 1;
        self.log.push(format!("--- Round {} ---", self.round));

        match action {
            BattleAction::Attack => {
                let damage = roll_player_damage(self.player.attack, rng);
                self.enemy.take_damage(damage);
                self.log.push(format!("You attack for {damage} damage!"));
            }
            BattleAction::Defend => {
                self.log.push("You brace for impact...".to_string());
            }
            BattleAction::UsePotion => {
                self.player.heal(POTION_HEAL);
                self.log
                    .push(format!("You drink a potion and restore {POTION_HEAL} HP"));
            }
        }

        if self.enemy.is_alive() {
            let mut raw = roll_enemy_damage(self.enemy.attack, rng);
            if action == BattleAction::Defend {
                raw = (raw / 2).max(MIN_DAMAGE);
            }
            let taken = self.player.take_damage(raw);
            self.log
                .push(format!("{} attacks for {taken} damage!", self.enemy.name));
        }

        self.log.push(format!(
            "Enemy HP: {}/{}",
            self.enemy.hp.max(0),
            self.enemy.max_hp
        ));
        self.log.push(format!(
            "Your HP: {}/{}",
            self.player.hp, self.player.max_hp
        ));

        self.enemy.is_alive()
    }

    /// Takes the accumulated narration, leaving the log empty.
    pub fn drain_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    /// Dissolves the battle, handing back the player borrow and the enemy
    /// for reward processing.
    pub fn into_parts(self) -> (&'a mut Player, Enemy) {
        (self.player, self.enemy)
    }
}

/// Rewards granted for a victory.
#[derive(Debug, Clone)]
pub struct VictoryRewards {
    pub exp_gained: u32,
    pub gold_gained: u32,
    pub loot: Vec<Item>,
    pub leveled_up: bool,
}

/// Applies victory rewards to the player: EXP equal to the enemy's full HP
/// pool (not remaining HP), rolled gold, and the enemy's loot appended to
/// the inventory.
pub fn apply_victory(player: &mut Player, enemy: &Enemy, rng: &mut impl Rng) -> VictoryRewards {
    let exp_gained = enemy.max_hp as u32;
    let gold_gained = rng.gen_range(GOLD_REWARD_MIN..=GOLD_REWARD_MAX);
    player.gold += gold_gained;
    let leveled_up = player.gain_exp(exp_gained);
    player.inventory.extend(enemy.loot.iter().cloned());
    VictoryRewards {
        exp_gained,
        gold_gained,
        loot: enemy.loot.clone(),
        leveled_up,
    }
}
