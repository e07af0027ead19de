//! Operations over the record store and the interactive session that drives them

pub mod ingest;
pub mod menu;
pub mod mutation;
pub mod query;
pub mod session;
