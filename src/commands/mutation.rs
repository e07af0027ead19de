//! Adding players and people, by hand or at random.

use rand::Rng;
use tracing::info;

use crate::{
    cli::types::{CoachRole, PersonId, Selection, Squad},
    storage::{Person, PlayerId, RecordStore},
};

/// Coach name used for every player added or generated in a session.
pub const SESSION_COACH_NAME: &str = "Coach";

/// Position given to players added by hand.
pub const PLACEHOLDER_POSITION: &str = "Player Position";

pub const FIRST_NAMES: [&str; 10] = [
    "John", "David", "Michael", "Chris", "Daniel", "Paul", "Sarah", "Jessica", "Emily", "Samantha",
];

pub const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Davis", "Miller", "Wilson", "Moore",
    "Taylor",
];

pub const POSITIONS: [&str; 2] = ["Forward", "Back"];

pub const GENDERS: [&str; 2] = ["Male", "Female"];

/// A player added from the prompts, with the sub-menu selections that were
/// applied (including whether either fell back to its default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddedPlayer {
    pub id: PlayerId,
    pub role: Selection<CoachRole>,
    pub squad: Selection<Squad>,
}

/// Add a player by name and 1-based coach/squad choices.
///
/// Out-of-range choices fall back to Head Coach and A Squad; the returned
/// selections report it. Never fails.
pub fn add_player(
    store: &mut RecordStore,
    name: &str,
    coach_choice: i64,
    team_choice: i64,
) -> AddedPlayer {
    let role = CoachRole::from_choice(coach_choice);
    let squad = Squad::from_choice(team_choice);

    let id = insert_session_player(store, name, PLACEHOLDER_POSITION, role.value, squad.value);
    info!(
        player = name,
        role = %role.value,
        squad = %squad.value,
        role_defaulted = role.defaulted,
        squad_defaulted = squad.defaulted,
        "player added"
    );

    AddedPlayer { id, role, squad }
}

/// Add a player with name, position, role and squad drawn uniformly from
/// the fixed pools.
pub fn generate_random_player(store: &mut RecordStore, rng: &mut impl Rng) -> PlayerId {
    let name = format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES));
    let position = pick(rng, &POSITIONS);
    let role = CoachRole::ALL[rng.gen_range(0..CoachRole::ALL.len())];
    let squad = Squad::ALL[rng.gen_range(0..Squad::ALL.len())];

    let id = insert_session_player(store, &name, position, role, squad);
    info!(
        player = %name,
        position,
        role = %role,
        squad = %squad,
        "random player generated"
    );
    id
}

/// Add a person; the id is the current person count + 1.
pub fn add_person(
    store: &mut RecordStore,
    first_name: &str,
    last_name: &str,
    email: &str,
    gender: &str,
) -> PersonId {
    let id = store.next_person_id();
    store.add_person(Person {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        gender: gender.to_string(),
    });
    info!(%id, first_name, last_name, "person added");
    id
}

/// Add `count` random people and return the newly added records.
pub fn generate_random_people<'a>(
    store: &'a mut RecordStore,
    rng: &mut impl Rng,
    count: usize,
) -> &'a [Person] {
    let start = store.person_count();

    for _ in 0..count {
        let first_name = pick(rng, &FIRST_NAMES);
        let last_name = pick(rng, &LAST_NAMES);
        let email = format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );
        let gender = pick(rng, &GENDERS);
        add_person(store, first_name, last_name, &email, gender);
    }

    &store.people()[start..]
}

fn insert_session_player(
    store: &mut RecordStore,
    name: &str,
    position: &str,
    role: CoachRole,
    squad: Squad,
) -> PlayerId {
    store.enrol_player(
        name,
        position,
        SESSION_COACH_NAME,
        role.as_str(),
        squad.as_str(),
    )
}

fn pick<'p>(rng: &mut impl Rng, pool: &[&'p str]) -> &'p str {
    pool[rng.gen_range(0..pool.len())]
}
