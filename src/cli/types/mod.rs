//! Type-safe wrappers and enums for roster data.

pub mod choices;
pub mod ids;
pub mod kind;

pub use choices::{CoachRole, Selection, Squad};
pub use ids::PersonId;
pub use kind::RecordKind;
