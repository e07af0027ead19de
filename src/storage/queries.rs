//! Read-side lookups over the record store

use super::{models::*, store::RecordStore};

impl RecordStore {
    pub fn coach(&self, id: CoachId) -> Option<&Coach> {
        self.coaches.get(id.0)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.0)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    pub fn coaches(&self) -> &[Coach] {
        &self.coaches
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// All players in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// All people in insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Look up a team by exact name without creating it.
    pub fn find_team(&self, name: &str) -> Option<TeamId> {
        self.teams.iter().position(|t| t.name == name).map(TeamId)
    }

    /// Players on a team, in the order they joined it.
    pub fn team_roster(&self, id: TeamId) -> Vec<&Player> {
        self.team(id)
            .map(|team| {
                team.members
                    .iter()
                    .filter_map(|pid| self.player(*pid))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve a player's coach and team into a flat view.
    pub fn player_view(&self, player: &Player) -> Option<PlayerView> {
        let coach = self.coach(player.coach)?;
        let team = self.team(player.team)?;
        Some(PlayerView {
            name: player.name.clone(),
            position: player.position.clone(),
            coach: coach.name.clone(),
            coach_role: coach.role.clone(),
            team: team.name.clone(),
        })
    }
}
