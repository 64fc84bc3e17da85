//! Text rendering for the terminal views.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::character::player::Player;
use crate::combat::types::Enemy;

/// Clears the terminal between views. Presentation only; in tests the
/// escape sequence simply lands in the capture buffer.
pub fn clear(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

pub fn title_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "╔═══════════════════════════════════╗")?;
    writeln!(out, "║        DUNGEON CRAWLER RPG        ║")?;
    writeln!(out, "╚═══════════════════════════════════╝")
}

/// The bordered status panel shown at the top of the exploring view.
pub fn stats_panel(out: &mut impl Write, player: &Player) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "{} | Level {}", player.name, player.level)?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "HP: {}/{} | EXP: {}/{}",
        player.hp, player.max_hp, player.exp, player.max_exp
    )?;
    writeln!(
        out,
        "ATK: {} | DEF: {} | Gold: {}",
        player.attack, player.defense, player.gold
    )?;
    writeln!(out, "{rule}")?;
    writeln!(out)
}

pub fn inventory(out: &mut impl Write, player: &Player) -> io::Result<()> {
    writeln!(out, "Inventory:")?;
    if player.inventory.is_empty() {
        writeln!(out, "Empty")?;
    } else {
        for item in &player.inventory {
            writeln!(out, "- {} ({})", item.name, item.kind.name())?;
        }
    }
    Ok(())
}

/// The per-round battle prompt: who we are facing plus the action menu.
pub fn battle_options(out: &mut impl Write, enemy: &Enemy) -> io::Result<()> {
    writeln!(out, "\nFacing: {}", enemy.name)?;
    writeln!(out, "1. Attack  2. Defend  3. Use Potion  4. Flee")
}
