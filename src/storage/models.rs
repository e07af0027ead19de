//! Data models for the storage layer

use crate::cli::types::PersonId;
use serde::Serialize;
use std::fmt;

/// Index of a coach in its owning [`RecordStore`](super::RecordStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoachId(pub(crate) usize);

/// Index of a team in its owning store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(pub(crate) usize);

/// Index of a player in its owning store, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub(crate) usize);

/// A coach; identity is the exact `(name, role)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coach {
    pub name: String,
    pub role: String,
}

/// A team; identity is the exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub(crate) members: Vec<PlayerId>,
}

impl Team {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: Vec::new(),
        }
    }

    /// Players on this team, in the order they joined.
    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }
}

/// A player linked to a coach and team owned by the same store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub position: String,
    pub coach: CoachId,
    pub team: TeamId,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        coach: CoachId,
        team: TeamId,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            coach,
            team,
        }
    }
}

/// A generic person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person [ID: {}, First Name: {}, Last Name: {}, Email: {}, Gender: {}]",
            self.id, self.first_name, self.last_name, self.email, self.gender
        )
    }
}

/// A player with its coach and team resolved, ready for display or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub position: String,
    pub coach: String,
    pub coach_role: String,
    pub team: String,
}

impl fmt::Display for PlayerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), Coach: {} ({}), Team: {}",
            self.name, self.position, self.coach, self.coach_role, self.team
        )
    }
}
