//! Phase transition functions and the encounter sub-loop.
//!
//! Each screen handler returns the next `Phase`, or `None` to leave the
//! loop. All I/O goes through the generic handles so tests can script a
//! complete session; all randomness comes from the injected generator.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::combat::logic::{apply_victory, Battle, BattleAction, EncounterOutcome};
use crate::combat::types::roll_encounter;
use crate::core::constants::{CHARACTER_NAME_MAX_LENGTH, REST_HEAL};
use crate::core::session::{GameSession, Phase};
use crate::ui::prompt::{self, BattleChoice, ExploreChoice, MenuChoice};
use crate::ui::screen;

/// Runs the session until the player quits or input ends.
pub fn run(
    session: &mut GameSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
    rng: &mut impl Rng,
) -> io::Result<()> {
    loop {
        let next = match session.phase {
            Phase::Menu => main_menu(session, input, out)?,
            Phase::Exploring => explore(session, input, out, rng)?,
            Phase::GameOver => game_over(session, out)?,
        };
        match next {
            Some(phase) => session.phase = phase,
            None => return Ok(()),
        }
    }
}

fn main_menu(
    session: &mut GameSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<Phase>> {
    screen::clear(out)?;
    screen::title_banner(out)?;
    writeln!(out, "\n1. New Game\n2. Quit")?;
    loop {
        let Some(line) = prompt::read_line(input, out, "Select: ")? else {
            return Ok(None);
        };
        match prompt::parse_menu_choice(&line) {
            Some(MenuChoice::NewGame) => {
                let Some(name) = prompt_character_name(input, out)? else {
                    return Ok(None);
                };
                session.start_new_game(name);
                return Ok(Some(Phase::Exploring));
            }
            Some(MenuChoice::Quit) => return Ok(None),
            None => writeln!(out, "Invalid choice!")?,
        }
    }
}

fn prompt_character_name(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<String>> {
    loop {
        let Some(line) = prompt::read_line(input, out, "Enter your character name: ")? else {
            return Ok(None);
        };
        match prompt::validate_name(&line) {
            Some(name) => return Ok(Some(name)),
            None => writeln!(
                out,
                "Names must be 1-{CHARACTER_NAME_MAX_LENGTH} characters."
            )?,
        }
    }
}

fn explore(
    session: &mut GameSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
    rng: &mut impl Rng,
) -> io::Result<Option<Phase>> {
    screen::clear(out)?;
    let Some(player) = session.player.as_ref() else {
        return Ok(Some(Phase::Menu));
    };
    screen::stats_panel(out, player)?;
    writeln!(out, "You wander through a dark dungeon...\n")?;
    writeln!(out, "1. Search for enemies")?;
    writeln!(out, "2. Rest (restore {REST_HEAL} HP)")?;
    writeln!(out, "3. View inventory")?;
    writeln!(out, "4. Return to menu")?;

    loop {
        let Some(line) = prompt::read_line(input, out, "Choice: ")? else {
            return Ok(None);
        };
        match prompt::parse_explore_choice(&line) {
            Some(ExploreChoice::Search) => return run_encounter(session, input, out, rng),
            Some(ExploreChoice::Rest) => {
                if let Some(player) = session.player.as_mut() {
                    player.heal(REST_HEAL);
                }
                writeln!(out, "You rest and feel refreshed!")?;
                return Ok(Some(Phase::Exploring));
            }
            Some(ExploreChoice::Inventory) => {
                screen::clear(out)?;
                if let Some(player) = session.player.as_ref() {
                    screen::inventory(out, player)?;
                }
                if prompt::pause(input, out, "\nPress Enter to continue...")?.is_none() {
                    return Ok(None);
                }
                return Ok(Some(Phase::Exploring));
            }
            Some(ExploreChoice::ReturnToMenu) => return Ok(Some(Phase::Menu)),
            None => writeln!(out, "Invalid choice!")?,
        }
    }
}

/// Spawns an enemy and runs the battle sub-loop to a terminal outcome.
/// Victory applies rewards and stays in exploration; defeat moves to the
/// game-over screen; fleeing aborts with no reward of any kind.
fn run_encounter(
    session: &mut GameSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
    rng: &mut impl Rng,
) -> io::Result<Option<Phase>> {
    let enemy = roll_encounter(rng);
    writeln!(out, "\nA wild {} appears!", enemy.name)?;
    if prompt::pause(input, out, "Press Enter to battle...")?.is_none() {
        return Ok(None);
    }

    let Some(player) = session.player.as_mut() else {
        return Ok(Some(Phase::Menu));
    };
    let mut battle = Battle::new(player, enemy);

    let outcome = loop {
        screen::battle_options(out, &battle.enemy)?;
        let Some(line) = prompt::read_line(input, out, "Action: ")? else {
            return Ok(None);
        };
        let Some(choice) = prompt::parse_battle_choice(&line) else {
            writeln!(out, "Invalid action!")?;
            continue;
        };
        let action = match choice {
            BattleChoice::Flee => {
                writeln!(out, "You flee!")?;
                break EncounterOutcome::Aborted;
            }
            BattleChoice::Attack => BattleAction::Attack,
            BattleChoice::Defend => BattleAction::Defend,
            BattleChoice::UsePotion => BattleAction::UsePotion,
        };

        let enemy_alive = battle.execute_round(action, rng);
        for line in battle.drain_log() {
            writeln!(out, "{line}")?;
        }
        if !battle.player.is_alive() {
            break EncounterOutcome::Defeat;
        }
        if !enemy_alive {
            break EncounterOutcome::Victory;
        }
    };

    match outcome {
        EncounterOutcome::Victory => {
            let (player, enemy) = battle.into_parts();
            let rewards = apply_victory(player, &enemy, rng);
            session.enemies_defeated += 1;
            writeln!(
                out,
                "\nVictory! Gained {} EXP and {} Gold",
                rewards.exp_gained, rewards.gold_gained
            )?;
            for item in &rewards.loot {
                writeln!(out, "Looted: {} ({})", item.name, item.kind.name())?;
            }
            if rewards.leveled_up {
                writeln!(out, "LEVEL UP! You are now level {}", player.level)?;
            }
            Ok(Some(Phase::Exploring))
        }
        EncounterOutcome::Defeat => Ok(Some(Phase::GameOver)),
        EncounterOutcome::Aborted => Ok(Some(Phase::Exploring)),
    }
}

fn game_over(session: &GameSession, out: &mut impl Write) -> io::Result<Option<Phase>> {
    screen::clear(out)?;
    writeln!(
        out,
        "Game Over! You defeated {} enemies.",
        session.enemies_defeated
    )?;
    if let Some(player) = session.player.as_ref() {
        writeln!(out, "Final Level: {}", player.level)?;
    }
    Ok(Some(Phase::Menu))
}
