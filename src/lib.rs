//! Rugby Club Roster Manager Library
//!
//! An in-memory roster of players, coaches and squads (or generic person
//! records) loaded from comma-delimited text, with an interactive menu to
//! add, randomly generate, sort, display and search entries.
//!
//! ## Features
//!
//! - **Record Store**: deduplicated coaches and teams with find-or-create lookups
//! - **Ingestion**: roster-shaped and person-shaped delimited files
//! - **Queries**: case-insensitive sort and exact-name search
//! - **Mutations**: manual and seeded random additions
//!
//! ## Quick Start
//!
//! ```rust
//! use rugby_roster::{
//!     commands::{
//!         ingest::{load_from_delimited_text, IngestPolicy},
//!         query::search_by_name,
//!     },
//!     RecordKind, RecordStore,
//! };
//!
//! # fn example() -> rugby_roster::Result<()> {
//! let mut store = RecordStore::new();
//! load_from_delimited_text(
//!     &mut store,
//!     RecordKind::Roster,
//!     &["Alice Smith,Forward,Coach,Head Coach,A Squad"],
//!     IngestPolicy::Lenient,
//! )?;
//!
//! assert_eq!(search_by_name(store.players(), "alice smith").len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{CoachRole, PersonId, RecordKind, Selection, Squad};
pub use error::{Result, RosterError};
pub use storage::{Coach, Person, Player, PlayerView, RecordStore, Team};

/// Default source for "Read, Sort, and Display Records".
pub const CLUB_FORM_FILE: &str = "Club_Form.txt";
