//! Delimited row parsing for the two record shapes.
//!
//! Rows are split on a plain comma with no quoting or escaping. Trailing
//! empty fields are dropped before the field count is checked, so a row such
//! as `Alice,Forward,Coach,Head Coach,` has four fields and is rejected.

use crate::cli::types::{PersonId, RecordKind};

pub const DELIMITER: char = ',';

/// A player/coach/team row: `PlayerName,Position,CoachName,CoachRole,TeamName`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub player_name: String,
    pub position: String,
    pub coach_name: String,
    pub coach_role: String,
    pub team_name: String,
}

/// A person row: `Id,FirstName,LastName,Email,Gender`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
}

/// One accepted row, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Roster(RosterRow),
    Person(PersonRow),
}

/// Result of parsing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRow {
    Accepted(Record),
    /// Wrong number of fields for the shape.
    WrongFieldCount(usize),
    /// Person row whose id field is not an integer.
    BadId(String),
}

/// Split a line into fields, dropping trailing empty fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse one data line of the given shape. Header handling is the caller's job.
pub fn parse_row(kind: RecordKind, line: &str) -> ParsedRow {
    let fields = split_fields(line);
    if fields.len() != kind.field_count() {
        return ParsedRow::WrongFieldCount(fields.len());
    }

    match kind {
        RecordKind::Roster => ParsedRow::Accepted(Record::Roster(RosterRow {
            player_name: fields[0].to_string(),
            position: fields[1].to_string(),
            coach_name: fields[2].to_string(),
            coach_role: fields[3].to_string(),
            team_name: fields[4].to_string(),
        })),
        RecordKind::Person => match fields[0].parse::<PersonId>() {
            Ok(id) => ParsedRow::Accepted(Record::Person(PersonRow {
                id,
                first_name: fields[1].to_string(),
                last_name: fields[2].to_string(),
                email: fields[3].to_string(),
                gender: fields[4].to_string(),
            })),
            Err(_) => ParsedRow::BadId(fields[0].to_string()),
        },
    }
}
