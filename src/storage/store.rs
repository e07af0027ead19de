//! Entity ownership and find-or-create

use super::models::*;
use crate::{cli::types::PersonId, error::RosterError, Result};
use tracing::debug;

/// Owns every coach, team, player and person of a session.
///
/// Coaches and teams are deduplicated by identity and created lazily the
/// first time something references them. Players and people are kept in
/// insertion order and never removed.
#[derive(Debug, Default)]
pub struct RecordStore {
    pub(crate) coaches: Vec<Coach>,
    pub(crate) teams: Vec<Team>,
    pub(crate) players: Vec<Player>,
    pub(crate) people: Vec<Person>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the coach with this exact `(name, role)`, creating it on a miss.
    ///
    /// Matching is case-sensitive; `("Coach", "Head Coach")` and
    /// `("Coach", "Scrum Coach")` are different coaches.
    pub fn find_or_create_coach(&mut self, name: &str, role: &str) -> CoachId {
        if let Some(idx) = self
            .coaches
            .iter()
            .position(|c| c.name == name && c.role == role)
        {
            return CoachId(idx);
        }

        debug!(coach = name, role, "creating coach");
        self.coaches.push(Coach {
            name: name.to_string(),
            role: role.to_string(),
        });
        CoachId(self.coaches.len() - 1)
    }

    /// Return the team with this exact name, creating it on a miss.
    pub fn find_or_create_team(&mut self, name: &str) -> TeamId {
        if let Some(idx) = self.teams.iter().position(|t| t.name == name) {
            return TeamId(idx);
        }

        debug!(team = name, "creating team");
        self.teams.push(Team::new(name));
        TeamId(self.teams.len() - 1)
    }

    /// Append a player and enrol it on its team. Duplicate names are allowed.
    ///
    /// Fails with [`RosterError::DanglingReference`] when the player's coach
    /// or team id does not belong to this store.
    pub fn add_player(&mut self, player: Player) -> Result<PlayerId> {
        if player.coach.0 >= self.coaches.len() {
            return Err(RosterError::DanglingReference {
                entity: "coach",
                index: player.coach.0,
            });
        }
        if player.team.0 >= self.teams.len() {
            return Err(RosterError::DanglingReference {
                entity: "team",
                index: player.team.0,
            });
        }

        Ok(self.push_player(player))
    }

    /// Find or create the coach and team by identity, then append the player.
    pub fn enrol_player(
        &mut self,
        name: impl Into<String>,
        position: impl Into<String>,
        coach_name: &str,
        coach_role: &str,
        team_name: &str,
    ) -> PlayerId {
        let coach = self.find_or_create_coach(coach_name, coach_role);
        let team = self.find_or_create_team(team_name);
        self.push_player(Player::new(name, position, coach, team))
    }

    // coach and team ids must already be checked against this store
    fn push_player(&mut self, player: Player) -> PlayerId {
        let id = PlayerId(self.players.len());
        self.teams[player.team.0].members.push(id);
        self.players.push(player);
        id
    }

    /// Append a person record. Ids are taken as given.
    pub fn add_person(&mut self, person: Person) {
        self.people.push(person);
    }

    /// Id for the next person added during a session: current count + 1.
    pub fn next_person_id(&self) -> PersonId {
        PersonId::new(self.people.len() as i64 + 1)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.people.is_empty()
    }
}
