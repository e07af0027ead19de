//! Menu tables for the interactive session.
//!
//! Each record kind has an explicit table mapping the number the user types
//! to a description and an action, so reordering entries never changes what
//! a number does.

use crate::{cli::types::RecordKind, error::RosterError, Result};

/// Something the session can do in response to a menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddPlayer,
    GenerateRandomPlayer,
    ReadSortDisplay,
    SearchPlayers,
    ViewPlayers,
    SortPlayers,
    ViewPeople,
    SortPeople,
    SearchPeople,
    AddPerson,
    GenerateRandomPeople,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: u32,
    pub description: &'static str,
    pub action: MenuAction,
}

const fn entry(key: u32, description: &'static str, action: MenuAction) -> MenuEntry {
    MenuEntry {
        key,
        description,
        action,
    }
}

pub const ROSTER_MENU: &[MenuEntry] = &[
    entry(1, "Add Player", MenuAction::AddPlayer),
    entry(2, "Generate Random Player", MenuAction::GenerateRandomPlayer),
    entry(3, "Read, Sort, and Display Records", MenuAction::ReadSortDisplay),
    entry(4, "Search for Players by Name", MenuAction::SearchPlayers),
    entry(5, "View Players", MenuAction::ViewPlayers),
    entry(6, "Sort Players by Name", MenuAction::SortPlayers),
    entry(7, "Exit", MenuAction::Exit),
];

pub const PERSON_MENU: &[MenuEntry] = &[
    entry(1, "View People", MenuAction::ViewPeople),
    entry(2, "Sort People", MenuAction::SortPeople),
    entry(3, "Search People", MenuAction::SearchPeople),
    entry(4, "Add New Person", MenuAction::AddPerson),
    entry(5, "Generate Random People", MenuAction::GenerateRandomPeople),
    entry(6, "Exit", MenuAction::Exit),
];

pub fn menu_for(kind: RecordKind) -> &'static [MenuEntry] {
    match kind {
        RecordKind::Roster => ROSTER_MENU,
        RecordKind::Person => PERSON_MENU,
    }
}

/// Resolve raw user input against a menu.
///
/// Anything that is not one of the table's keys is an
/// [`RosterError::InvalidChoice`].
pub fn resolve_choice(menu: &[MenuEntry], input: &str) -> Result<MenuAction> {
    let invalid = || RosterError::InvalidChoice {
        input: input.trim().to_string(),
    };

    let key: u32 = input.trim().parse().map_err(|_| invalid())?;
    menu.iter()
        .find(|e| e.key == key)
        .map(|e| e.action)
        .ok_or_else(invalid)
}
