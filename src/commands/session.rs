//! The interactive menu loop.
//!
//! A [`Session`] owns the store for its whole lifetime, plus the random
//! source and the input/output handles, so a session can be driven from the
//! terminal or from in-memory buffers.

use rand::Rng;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use super::{
    ingest::{load_file, IngestPolicy},
    menu::{menu_for, resolve_choice, MenuAction},
    mutation::{add_person, add_player, generate_random_people, generate_random_player},
    query::{read_sort_display_file, search_by_name, sort_by_full_name},
};
use crate::{
    cli::types::{CoachRole, RecordKind, Squad},
    error::RosterError,
    storage::RecordStore,
    Result, CLUB_FORM_FILE,
};

/// How many people "Generate Random People" adds at once.
pub const RANDOM_PEOPLE_BATCH: usize = 5;

/// Session settings taken from the command line.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub kind: RecordKind,
    pub club_form: PathBuf,
    pub policy: IngestPolicy,
    pub as_json: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            kind: RecordKind::Roster,
            club_form: PathBuf::from(CLUB_FORM_FILE),
            policy: IngestPolicy::Lenient,
            as_json: false,
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<I, O, G> {
    store: RecordStore,
    rng: G,
    input: I,
    output: O,
    config: SessionConfig,
}

impl<I: BufRead, O: Write, G: Rng> Session<I, O, G> {
    pub fn new(config: SessionConfig, rng: G, input: I, output: O) -> Self {
        Self {
            store: RecordStore::new(),
            rng,
            input,
            output,
            config,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Load the startup file, prompting for its name when `path` is `None`.
    ///
    /// A missing file or a strict-mode id failure is reported to the user
    /// and the session carries on with whatever the store holds.
    pub fn load_startup_file(&mut self, path: Option<PathBuf>) -> Result<()> {
        let path = match path {
            Some(p) => p,
            None => match self.prompt("Please enter the filename to read: ")? {
                Some(name) => PathBuf::from(name.trim()),
                None => return Ok(()),
            },
        };

        match load_file(&mut self.store, &path, self.config.kind, self.config.policy) {
            Ok(report) => {
                writeln!(self.output, "File read successfully.")?;
                if report.skipped > 0 {
                    info!(skipped = report.skipped, "rows skipped during load");
                }
            }
            Err(e @ (RosterError::SourceUnavailable { .. } | RosterError::InvalidRecordId { .. })) => {
                warn!(error = %e, "startup load failed, continuing with an empty store");
                writeln!(self.output, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Run the menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let menu = menu_for(self.config.kind);
        info!(kind = %self.config.kind, "session started");

        loop {
            writeln!(self.output, "\nPlease select an option from the following:")?;
            for entry in menu {
                writeln!(self.output, "{}. {}", entry.key, entry.description)?;
            }

            let Some(input) = self.prompt("Enter your choice: ")? else {
                info!("input exhausted, ending session");
                return Ok(());
            };

            let action = match resolve_choice(menu, &input) {
                Ok(action) => action,
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            if self.dispatch(action)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<Flow> {
        match action {
            MenuAction::AddPlayer => self.handle_add_player(),
            MenuAction::GenerateRandomPlayer => self.handle_generate_random_player(),
            MenuAction::ReadSortDisplay => self.handle_read_sort_display(),
            MenuAction::SearchPlayers => self.handle_search_players(),
            MenuAction::ViewPlayers => self.handle_view_players(false),
            MenuAction::SortPlayers => self.handle_view_players(true),
            MenuAction::ViewPeople => self.handle_view_people(false),
            MenuAction::SortPeople => self.handle_view_people(true),
            MenuAction::SearchPeople => self.handle_search_people(),
            MenuAction::AddPerson => self.handle_add_person(),
            MenuAction::GenerateRandomPeople => self.handle_generate_random_people(),
            MenuAction::Exit => {
                writeln!(self.output, "Exiting. Goodbye!")?;
                info!("session exited by user");
                Ok(Flow::Exit)
            }
        }
    }

    fn handle_add_player(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Please input the Player Name: ")? else {
            return Ok(Flow::Exit);
        };

        writeln!(self.output, "Please select from the following Coach Staff:")?;
        for (i, role) in CoachRole::ALL.iter().enumerate() {
            writeln!(self.output, "{} ({})", role, i + 1)?;
        }
        let Some(coach_choice) = self.prompt_number("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        writeln!(self.output, "Please select the Teams:")?;
        for (i, squad) in Squad::ALL.iter().enumerate() {
            writeln!(self.output, "{} ({})", squad, i + 1)?;
        }
        let Some(team_choice) = self.prompt_number("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        let added = add_player(&mut self.store, &name, coach_choice, team_choice);
        if added.role.defaulted {
            writeln!(
                self.output,
                "Invalid choice. Defaulting to {}.",
                added.role.value
            )?;
        }
        if added.squad.defaulted {
            writeln!(
                self.output,
                "Invalid choice. Defaulting to {}.",
                added.squad.value
            )?;
        }

        writeln!(
            self.output,
            "\n\"{}\" has been added as \"{}\" to \"{}\" successfully!",
            name, added.role.value, added.squad.value
        )?;
        Ok(Flow::Continue)
    }

    fn handle_generate_random_player(&mut self) -> Result<Flow> {
        let id = generate_random_player(&mut self.store, &mut self.rng);
        if let Some(view) = self
            .store
            .player(id)
            .and_then(|p| self.store.player_view(p))
        {
            writeln!(
                self.output,
                "\n\"{}\" has been added as \"{}\" to \"{}\" successfully!",
                view.name, view.coach_role, view.team
            )?;
        }
        Ok(Flow::Continue)
    }

    fn handle_read_sort_display(&mut self) -> Result<Flow> {
        let ranked = match read_sort_display_file(&self.config.club_form) {
            Ok(ranked) => ranked,
            Err(e @ RosterError::SourceUnavailable { .. }) => {
                warn!(error = %e, "read-sort-display source unavailable");
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };

        writeln!(self.output, "File read successfully.")?;
        if self.config.as_json {
            write_json(&mut self.output, &ranked)?;
        } else {
            writeln!(self.output, "First {} records:", super::query::READ_SORT_DISPLAY_LIMIT)?;
            for entry in &ranked {
                writeln!(self.output, "{}. {}", entry.rank, entry.line)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_search_players(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Enter the name to search for: ")? else {
            return Ok(Flow::Exit);
        };

        let views: Vec<_> = search_by_name(self.store.players(), &query)
            .into_iter()
            .filter_map(|p| self.store.player_view(p))
            .collect();
        info!(query = %query, matches = views.len(), "player search");

        if views.is_empty() {
            writeln!(self.output, "No players found with the name '{}'.", query)?;
        } else if self.config.as_json {
            write_json(&mut self.output, &views)?;
        } else {
            for view in &views {
                writeln!(
                    self.output,
                    "Name: {} - Coach: {} - Team: {}",
                    view.name, view.coach_role, view.team
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_view_players(&mut self, sorted: bool) -> Result<Flow> {
        let players: Vec<_> = if sorted {
            sort_by_full_name(self.store.players())
        } else {
            self.store.players().iter().collect()
        };
        let views: Vec<_> = players
            .into_iter()
            .filter_map(|p| self.store.player_view(p))
            .collect();

        if self.config.as_json {
            write_json(&mut self.output, &views)?;
        } else {
            let heading = if sorted {
                "\nPlayers sorted by name:"
            } else {
                "\nPlayers:"
            };
            writeln!(self.output, "{}", heading)?;
            for view in &views {
                writeln!(self.output, "{}", view)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_view_people(&mut self, sorted: bool) -> Result<Flow> {
        let people: Vec<_> = if sorted {
            sort_by_full_name(self.store.people())
        } else {
            self.store.people().iter().collect()
        };

        if self.config.as_json {
            write_json(&mut self.output, &people)?;
        } else {
            let heading = if sorted {
                "\nPeople sorted by name:"
            } else {
                "\nPeople:"
            };
            writeln!(self.output, "{}", heading)?;
            for person in people {
                writeln!(self.output, "{}", person)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_search_people(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Enter the first name or last name to search: ")? else {
            return Ok(Flow::Exit);
        };

        let found = search_by_name(self.store.people(), &query);
        info!(query = %query, matches = found.len(), "person search");

        if found.is_empty() {
            writeln!(self.output, "\nPerson not found.")?;
        } else if self.config.as_json {
            write_json(&mut self.output, &found)?;
        } else {
            for person in found {
                writeln!(self.output, "{}", person)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_add_person(&mut self) -> Result<Flow> {
        let prompts = [
            "Please enter the first name: ",
            "Please enter the last name: ",
            "Please enter the email: ",
            "Please enter the gender (Male/Female): ",
        ];
        let mut answers = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            match self.prompt(prompt)? {
                Some(answer) => answers.push(answer),
                None => return Ok(Flow::Exit),
            }
        }

        add_person(
            &mut self.store,
            &answers[0],
            &answers[1],
            &answers[2],
            &answers[3],
        );
        writeln!(self.output, "\nNew person added successfully.")?;
        Ok(Flow::Continue)
    }

    fn handle_generate_random_people(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nGenerating random people:")?;
        let added = generate_random_people(&mut self.store, &mut self.rng, RANDOM_PEOPLE_BATCH);
        for person in added {
            writeln!(self.output, "{}", person)?;
        }
        Ok(Flow::Continue)
    }

    /// Print `message` and read one line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Read a number for a sub-menu. Unparseable input becomes 0, which every
    /// sub-menu treats as out of range.
    fn prompt_number(&mut self, message: &str) -> Result<Option<i64>> {
        Ok(self
            .prompt(message)?
            .map(|s| s.trim().parse().unwrap_or(0)))
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
