//! Line input and choice parsing.
//!
//! Screens read numeric selections one line at a time; parsing is split
//! from the screens so invalid-input handling stays a local re-prompt.

use std::io::{self, BufRead, Write};

use crate::core::constants::CHARACTER_NAME_MAX_LENGTH;

/// Main menu selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    Quit,
}

/// Exploration screen selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreChoice {
    Search,
    Rest,
    Inventory,
    ReturnToMenu,
}

/// Battle prompt selections. Flee aborts the encounter before round
/// resolution; the rest map onto battle actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleChoice {
    Attack,
    Defend,
    UsePotion,
    Flee,
}

/// Writes the prompt, flushes, and reads one trimmed line.
/// Returns `None` on end of input.
pub fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prints a message and waits for Enter. Returns `None` on end of input.
pub fn pause(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> io::Result<Option<()>> {
    Ok(read_line(input, out, message)?.map(|_| ()))
}

pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line {
        "1" => Some(MenuChoice::NewGame),
        "2" => Some(MenuChoice::Quit),
        _ => None,
    }
}

pub fn parse_explore_choice(line: &str) -> Option<ExploreChoice> {
    match line {
        "1" => Some(ExploreChoice::Search),
        "2" => Some(ExploreChoice::Rest),
        "3" => Some(ExploreChoice::Inventory),
        "4" => Some(ExploreChoice::ReturnToMenu),
        _ => None,
    }
}

pub fn parse_battle_choice(line: &str) -> Option<BattleChoice> {
    match line {
        "1" => Some(BattleChoice::Attack),
        "2" => Some(BattleChoice::Defend),
        "3" => Some(BattleChoice::UsePotion),
        "4" => Some(BattleChoice::Flee),
        _ => None,
    }
}

/// Validates a character name: trimmed, non-empty, within the length cap.
pub fn validate_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() || name.chars().count() > CHARACTER_NAME_MAX_LENGTH {
        return None;
    }
    Some(name.to_string())
}
