//! Unit tests for storage functionality

use super::*;
use crate::{cli::types::PersonId, RosterError};

fn create_test_store_with_player() -> (RecordStore, PlayerId) {
    let mut store = RecordStore::new();
    let coach = store.find_or_create_coach("Coach", "Head Coach");
    let team = store.find_or_create_team("A Squad");
    let id = store
        .add_player(Player::new("Test Player", "Forward", coach, team))
        .unwrap();
    (store, id)
}

#[test]
fn test_store_creation() {
    let store = RecordStore::new();
    assert!(store.is_empty());
    assert_eq!(store.player_count(), 0);
    assert!(store.coaches().is_empty());
    assert!(store.teams().is_empty());
}

#[test]
fn test_find_or_create_coach_reuses_identity() {
    let mut store = RecordStore::new();

    let first = store.find_or_create_coach("Coach", "Head Coach");
    let second = store.find_or_create_coach("Coach", "Head Coach");
    let third = store.find_or_create_coach("Coach", "Head Coach");

    assert_eq!(first, second);
    assert_eq!(first, third);
    assert_eq!(store.coaches().len(), 1);
}

#[test]
fn test_find_or_create_coach_role_is_part_of_identity() {
    let mut store = RecordStore::new();

    let head = store.find_or_create_coach("Coach", "Head Coach");
    let scrum = store.find_or_create_coach("Coach", "Scrum Coach");

    assert_ne!(head, scrum);
    assert_eq!(store.coaches().len(), 2);
    assert_eq!(store.coach(scrum).unwrap().role, "Scrum Coach");
}

#[test]
fn test_find_or_create_coach_is_case_sensitive() {
    let mut store = RecordStore::new();

    let upper = store.find_or_create_coach("Coach", "Head Coach");
    let lower = store.find_or_create_coach("coach", "Head Coach");

    assert_ne!(upper, lower);
    assert_eq!(store.coaches().len(), 2);
}

#[test]
fn test_find_or_create_coach_many_pairs() {
    let mut store = RecordStore::new();
    let pairs = [
        ("Coach", "Head Coach"),
        ("Smith", "Assistant Coach"),
        ("Coach", "Head Coach"),
        ("Coach", "Scrum Coach"),
        ("Smith", "Assistant Coach"),
        ("Coach", "Scrum Coach"),
    ];

    let ids: Vec<CoachId> = pairs
        .iter()
        .map(|(name, role)| store.find_or_create_coach(name, role))
        .collect();

    assert_eq!(store.coaches().len(), 3);
    assert_eq!(ids[0], ids[2]);
    assert_eq!(ids[1], ids[4]);
    assert_eq!(ids[3], ids[5]);
}

#[test]
fn test_find_or_create_team_reuses_name() {
    let mut store = RecordStore::new();

    let a = store.find_or_create_team("A Squad");
    let b = store.find_or_create_team("B Squad");
    let a_again = store.find_or_create_team("A Squad");

    assert_eq!(a, a_again);
    assert_ne!(a, b);
    assert_eq!(store.teams().len(), 2);
    assert_eq!(store.find_team("B Squad"), Some(b));
    assert_eq!(store.find_team("b squad"), None);
}

#[test]
fn test_add_player_allows_duplicate_names() {
    let (mut store, first) = create_test_store_with_player();
    let coach = store.find_or_create_coach("Coach", "Head Coach");
    let team = store.find_or_create_team("A Squad");

    let second = store
        .add_player(Player::new("Test Player", "Back", coach, team))
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(store.player_count(), 2);
    assert_eq!(store.players()[0].position, "Forward");
    assert_eq!(store.players()[1].position, "Back");
}

#[test]
fn test_add_player_rejects_ids_from_another_store() {
    let mut other = RecordStore::new();
    other.find_or_create_coach("Coach", "Head Coach");
    let coach = other.find_or_create_coach("Coach", "Scrum Coach");
    other.find_or_create_team("A Squad");
    let team = other.find_or_create_team("B Squad");

    let mut store = RecordStore::new();
    match store.add_player(Player::new("Ghost", "Back", coach, team)) {
        Err(RosterError::DanglingReference { entity, index }) => {
            assert_eq!(entity, "coach");
            assert_eq!(index, 1);
        }
        other => panic!("Expected DanglingReference, got {other:?}"),
    }
    assert_eq!(store.player_count(), 0);

    // a valid coach alone is not enough
    store.find_or_create_coach("Coach", "Head Coach");
    store.find_or_create_coach("Coach", "Scrum Coach");
    match store.add_player(Player::new("Ghost", "Back", coach, team)) {
        Err(RosterError::DanglingReference { entity, .. }) => assert_eq!(entity, "team"),
        other => panic!("Expected DanglingReference, got {other:?}"),
    }
    assert_eq!(store.player_count(), 0);
    assert!(store.teams().is_empty());
}

#[test]
fn test_enrol_player_finds_or_creates_links() {
    let (mut store, first) = create_test_store_with_player();

    let second = store.enrol_player("Second", "Back", "Coach", "Head Coach", "A Squad");
    let third = store.enrol_player("Third", "Back", "Coach", "Scrum Coach", "B Squad");

    assert_eq!(store.coaches().len(), 2);
    assert_eq!(store.teams().len(), 2);
    let first = store.player(first).unwrap();
    let second = store.player(second).unwrap();
    assert_eq!(first.coach, second.coach);
    assert_eq!(first.team, second.team);
    assert_ne!(store.player(third).unwrap().team, first.team);
}

#[test]
fn test_team_roster_tracks_members() {
    let (mut store, _) = create_test_store_with_player();
    let coach = store.find_or_create_coach("Coach", "Scrum Coach");
    let b = store.find_or_create_team("B Squad");
    let a = store.find_or_create_team("A Squad");

    store
        .add_player(Player::new("B Player", "Back", coach, b))
        .unwrap();
    store
        .add_player(Player::new("Second A", "Back", coach, a))
        .unwrap();

    let names: Vec<&str> = store
        .team_roster(a)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Test Player", "Second A"]);
    assert_eq!(store.team_roster(b).len(), 1);
    assert_eq!(store.team(a).unwrap().members().len(), 2);
}

#[test]
fn test_player_view_resolves_links() {
    let (store, id) = create_test_store_with_player();
    let player = store.player(id).unwrap();

    let view = store.player_view(player).unwrap();
    assert_eq!(view.name, "Test Player");
    assert_eq!(view.position, "Forward");
    assert_eq!(view.coach, "Coach");
    assert_eq!(view.coach_role, "Head Coach");
    assert_eq!(view.team, "A Squad");
    assert_eq!(
        view.to_string(),
        "Test Player (Forward), Coach: Coach (Head Coach), Team: A Squad"
    );
}

#[test]
fn test_next_person_id_is_count_plus_one() {
    let mut store = RecordStore::new();
    assert_eq!(store.next_person_id(), PersonId::new(1));

    store.add_person(Person {
        id: PersonId::new(40),
        first_name: "Alice".to_string(),
        last_name: "Zane".to_string(),
        email: "alice@example.com".to_string(),
        gender: "Female".to_string(),
    });

    assert_eq!(store.next_person_id(), PersonId::new(2));
    assert_eq!(store.person_count(), 1);
    assert!(!store.is_empty());
}

#[test]
fn test_person_display() {
    let person = Person {
        id: PersonId::new(3),
        first_name: "Bob".to_string(),
        last_name: "Young".to_string(),
        email: "bob@example.com".to_string(),
        gender: "Male".to_string(),
    };
    assert_eq!(
        person.to_string(),
        "Person [ID: 3, First Name: Bob, Last Name: Young, Email: bob@example.com, Gender: Male]"
    );
}
