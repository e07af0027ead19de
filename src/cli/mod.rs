//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::RecordKind;

use crate::CLUB_FORM_FILE;

#[derive(Debug, Parser)]
#[clap(
    name = "rugby-roster",
    about = "Interactive roster manager for club players, coaches and squads"
)]
pub struct Cli {
    /// Record file to load at startup (prompted for when omitted).
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// Record shape of the startup file.
    #[clap(long, short, value_enum, default_value_t = RecordKind::Roster)]
    pub kind: RecordKind,

    /// Person-shaped file read by "Read, Sort, and Display Records".
    #[clap(long, default_value = CLUB_FORM_FILE)]
    pub club_form: PathBuf,

    /// Abort loading person records when an id is not numeric.
    #[clap(long)]
    pub strict: bool,

    /// Seed for random player/person generation (reproducible sessions).
    #[clap(long)]
    pub seed: Option<u64>,

    /// Output query results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Write logs to this file instead of the cache directory.
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level.
    #[clap(long)]
    pub debug: bool,
}
