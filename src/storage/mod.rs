//! In-memory record store for the roster manager
//!
//! - `models`: entity structs and the typed indices that link them
//! - `store`: ownership of the entity collections and find-or-create
//! - `queries`: read-side lookups over the store

pub mod models;
pub mod queries;
pub mod store;

#[cfg(test)]
mod tests;

pub use models::*;
pub use store::RecordStore;
