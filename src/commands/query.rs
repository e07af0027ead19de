//! Sorting and searching over players and people.
//!
//! Sorting never reorders the caller's collection: it returns a new sequence
//! of references. All name comparisons are case-insensitive.

use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::{
    cli::types::PersonId,
    core::{read_lines, split_fields},
    storage::{Person, Player},
    Result,
};

/// How many sorted lines read-sort-display returns.
pub const READ_SORT_DISPLAY_LIMIT: usize = 20;

/// Name handling shared by both record shapes.
pub trait NameKey {
    /// The full display name used as the sort key.
    fn full_name(&self) -> String;

    /// Whether the record's searchable name equals `query`, ignoring case.
    fn matches_name(&self, query: &str) -> bool;
}

impl NameKey for Player {
    fn full_name(&self) -> String {
        self.name.clone()
    }

    fn matches_name(&self, query: &str) -> bool {
        eq_ignore_case(&self.name, query)
    }
}

impl NameKey for Person {
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn matches_name(&self, query: &str) -> bool {
        eq_ignore_case(&self.first_name, query) || eq_ignore_case(&self.last_name, query)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Records ordered by case-insensitive full name; ties keep input order.
pub fn sort_by_full_name<T: NameKey>(records: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by_cached_key(|r| r.full_name().to_lowercase());
    sorted
}

/// Every record whose name equals `query` ignoring case, in input order.
///
/// An empty result means "not found" and is not an error.
pub fn search_by_name<'a, T: NameKey>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records.iter().filter(|r| r.matches_name(query)).collect()
}

/// A raw line from the read-sort-display source with its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedLine {
    pub rank: usize,
    pub line: String,
}

/// Sort raw person-shaped lines by "first last" and keep the first 20.
///
/// Every line takes part, except a first line whose id field is not an
/// integer, which is taken to be a header. Lines are trimmed; blank lines
/// and lines without first and last name fields are ignored.
pub fn read_sort_display<S: AsRef<str>>(lines: &[S]) -> Vec<RankedLine> {
    let header_lines = usize::from(
        lines.first().is_some_and(|l| is_header(l.as_ref())),
    );

    let mut keyed: Vec<(String, String)> = lines
        .iter()
        .skip(header_lines)
        .map(|l| l.as_ref().trim())
        .filter_map(|line| {
            let fields = split_fields(line);
            if fields.len() < 3 {
                return None;
            }
            let key = format!("{} {}", fields[1], fields[2]).to_lowercase();
            Some((key, line.to_string()))
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    keyed
        .into_iter()
        .take(READ_SORT_DISPLAY_LIMIT)
        .enumerate()
        .map(|(i, (_, line))| RankedLine { rank: i + 1, line })
        .collect()
}

fn is_header(line: &str) -> bool {
    let fields = split_fields(line.trim());
    fields
        .first()
        .is_some_and(|id| id.parse::<PersonId>().is_err())
}

/// Read `path` on its own and run [`read_sort_display`] over it.
pub fn read_sort_display_file(path: &Path) -> Result<Vec<RankedLine>> {
    let lines = read_lines(path)?;
    let ranked = read_sort_display(&lines);
    info!(path = %path.display(), shown = ranked.len(), "read-sort-display");
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RecordStore;

    fn person(id: i64, first: &str, last: &str) -> Person {
        Person {
            id: PersonId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            gender: "Female".to_string(),
        }
    }

    fn players(names: &[&str]) -> Vec<Player> {
        let mut store = RecordStore::new();
        let coach = store.find_or_create_coach("Coach", "Head Coach");
        let team = store.find_or_create_team("A Squad");
        names
            .iter()
            .map(|n| Player::new(*n, "Forward", coach, team))
            .collect()
    }

    #[test]
    fn test_sort_people_by_full_name() {
        let people = vec![person(1, "Bob", "Young"), person(2, "Alice", "Zane")];
        let sorted = sort_by_full_name(&people);

        assert_eq!(sorted[0].first_name, "Alice");
        assert_eq!(sorted[1].first_name, "Bob");
        // caller's order is untouched
        assert_eq!(people[0].first_name, "Bob");
    }

    #[test]
    fn test_sort_people_tie_breaks_on_last_name() {
        let people = vec![
            person(1, "Sam", "Wilson"),
            person(2, "sam", "Brown"),
            person(3, "Sam", "davis"),
        ];
        let sorted: Vec<i64> = sort_by_full_name(&people)
            .iter()
            .map(|p| p.id.as_i64())
            .collect();
        assert_eq!(sorted, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_is_case_insensitive_and_stable() {
        let roster = players(&["bob", "Alice", "BOB", "alice"]);
        let sorted: Vec<&str> = sort_by_full_name(&roster)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(sorted, vec!["Alice", "alice", "bob", "BOB"]);
    }

    #[test]
    fn test_search_players_exact_ignore_case() {
        let roster = players(&["Alice", "Alicia", "ALICE", "Bob"]);
        let found: Vec<&str> = search_by_name(&roster, "alice")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(found, vec!["Alice", "ALICE"]);
    }

    #[test]
    fn test_search_players_not_found_is_empty() {
        let roster = players(&["Alice"]);
        assert!(search_by_name(&roster, "Ali").is_empty());
        assert!(search_by_name(&roster, "").is_empty());
    }

    #[test]
    fn test_search_people_first_or_last_name() {
        let people = vec![
            person(1, "Taylor", "Smith"),
            person(2, "John", "Taylor"),
            person(3, "John", "Smith"),
        ];
        let ids: Vec<i64> = search_by_name(&people, "TAYLOR")
            .iter()
            .map(|p| p.id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_read_sort_display_sorts_and_ranks() {
        let lines = [
            "id,first_name,last_name,email,gender",
            "1,Bob,Young,bob@example.com,Male",
            "  2,alice,Zane,alice@example.com,Female  ",
            "",
            "3,Alice,Adams,adams@example.com,Female",
        ];
        let ranked = read_sort_display(&lines);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].line, "3,Alice,Adams,adams@example.com,Female");
        assert_eq!(ranked[1].line, "2,alice,Zane,alice@example.com,Female");
        assert_eq!(ranked[2].rank, 3);
        assert!(ranked[2].line.starts_with("1,Bob"));
    }

    #[test]
    fn test_read_sort_display_keeps_first_line_without_header() {
        let lines = [
            "2,Zed,Young,z@example.com,Male",
            "1,Amy,Adams,a@example.com,Female",
        ];
        let ranked = read_sort_display(&lines);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].line, "1,Amy,Adams,a@example.com,Female");
        assert_eq!(ranked[1].line, "2,Zed,Young,z@example.com,Male");
    }

    #[test]
    fn test_read_sort_display_header_only_on_first_line() {
        let lines = [
            "1,Zed,Young,z@example.com,Male",
            "id,first_name,last_name,email,gender",
        ];
        let ranked = read_sort_display(&lines);

        // a header-looking line later in the file is an ordinary record
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].line, "id,first_name,last_name,email,gender");
    }

    #[test]
    fn test_read_sort_display_caps_at_twenty() {
        let mut lines = vec!["id,first_name,last_name,email,gender".to_string()];
        for i in 0..30 {
            lines.push(format!("{i},Name{i:02},Last,n{i}@example.com,Male"));
        }
        let ranked = read_sort_display(&lines);

        assert_eq!(ranked.len(), READ_SORT_DISPLAY_LIMIT);
        assert!(ranked[0].line.contains("Name00"));
        assert!(ranked[19].line.contains("Name19"));
    }
}
