//! Record shape selection for the startup file.

use std::fmt;

/// Shape of the delimited records in the startup file.
///
/// The two shapes carry different fields and drive different menus, but share
/// the same store, ingestion and query pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RecordKind {
    /// `PlayerName,Position,CoachName,CoachRole,TeamName`, no header
    #[default]
    Roster,
    /// `Id,FirstName,LastName,Email,Gender`, first line is a header
    Person,
}

impl RecordKind {
    /// Number of comma-separated fields a row of this shape must have.
    pub fn field_count(&self) -> usize {
        match self {
            RecordKind::Roster | RecordKind::Person => 5,
        }
    }

    /// Whether the first line of a file of this shape is a header.
    pub fn has_header(&self) -> bool {
        matches!(self, RecordKind::Person)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordKind::Roster => "roster",
            RecordKind::Person => "person",
        };
        write!(f, "{}", s)
    }
}
