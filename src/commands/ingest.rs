//! Ingestion of delimited record files into the store.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::{
    cli::types::RecordKind,
    core::{parse_row, read_lines, ParsedRow, Record},
    error::RosterError,
    storage::{Person, RecordStore},
    Result,
};

/// What to do with a person row whose id is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestPolicy {
    /// Skip the row and count it.
    #[default]
    Lenient,
    /// Fail the whole call; nothing from it reaches the store.
    Strict,
}

impl IngestPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            IngestPolicy::Strict
        } else {
            IngestPolicy::Lenient
        }
    }
}

/// Outcome of one ingestion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IngestReport {
    pub ingested: usize,
    pub skipped: usize,
}

/// Parse `lines` as records of `kind` and add them to the store.
///
/// Rows with the wrong field count are skipped. For the person shape the
/// first line is a header and is always discarded; a non-numeric id is
/// skipped under [`IngestPolicy::Lenient`] and returns
/// [`RosterError::InvalidRecordId`] under [`IngestPolicy::Strict`].
pub fn load_from_delimited_text<S: AsRef<str>>(
    store: &mut RecordStore,
    kind: RecordKind,
    lines: &[S],
    policy: IngestPolicy,
) -> Result<IngestReport> {
    let header_lines = usize::from(kind.has_header() && !lines.is_empty());
    let mut report = IngestReport::default();
    let mut records = Vec::new();

    for (idx, line) in lines.iter().enumerate().skip(header_lines) {
        match parse_row(kind, line.as_ref()) {
            ParsedRow::Accepted(record) => records.push(record),
            ParsedRow::WrongFieldCount(count) => {
                debug!(line = idx + 1, fields = count, "skipping row");
                report.skipped += 1;
            }
            ParsedRow::BadId(value) => match policy {
                IngestPolicy::Lenient => {
                    debug!(line = idx + 1, value = %value, "skipping row with non-numeric id");
                    report.skipped += 1;
                }
                IngestPolicy::Strict => {
                    return Err(RosterError::InvalidRecordId {
                        line: idx + 1,
                        value,
                    })
                }
            },
        }
    }

    for record in records {
        insert_record(store, record);
        report.ingested += 1;
    }

    info!(
        kind = %kind,
        ingested = report.ingested,
        skipped = report.skipped,
        "records ingested"
    );
    Ok(report)
}

/// Read a file and ingest it. A missing or unreadable file leaves the store
/// unchanged and returns [`RosterError::SourceUnavailable`].
pub fn load_file(
    store: &mut RecordStore,
    path: &Path,
    kind: RecordKind,
    policy: IngestPolicy,
) -> Result<IngestReport> {
    let lines = read_lines(path).inspect_err(|e| warn!(error = %e, "record source unavailable"))?;
    load_from_delimited_text(store, kind, &lines, policy)
}

fn insert_record(store: &mut RecordStore, record: Record) {
    match record {
        Record::Roster(row) => {
            store.enrol_player(
                row.player_name,
                row.position,
                &row.coach_name,
                &row.coach_role,
                &row.team_name,
            );
        }
        Record::Person(row) => store.add_person(Person {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            gender: row.gender,
        }),
    }
}
