//! The editing session: records on one side, the visible list on the other.
//!
//! RULES:
//!   - Every record has exactly one list row, in the same position.
//!   - Every operation updates both or neither.
//!   - Rows are matched to records by the id stored with the row.

use crate::{
    catalog::{Buff, BuffPolicy, Monster},
    config::ToolConfig,
    error::{ToolError, ToolResult},
    list_view::{ListView, RecordList},
    prompt::SavePrompt,
    record::{IdGenerator, MonsterRecord},
    snapshot::SessionSnapshot,
    spawn_file,
    types::{ArrivalMs, RecordId},
};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RemoveOutcome {
    Removed { id: RecordId },
    /// No row selected, or the selection is past the end of the list.
    NothingSelected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved { path: PathBuf, lines: usize },
    /// The save prompt was dismissed. No file was touched.
    Cancelled,
}

pub struct MonsterToolEditor<L: ListView = RecordList> {
    config:  ToolConfig,
    ids:     IdGenerator,
    records: Vec<MonsterRecord>,
    list:    L,
}

impl MonsterToolEditor<RecordList> {
    pub fn new(config: ToolConfig) -> Self {
        Self::with_list(config, RecordList::new())
    }

    /// Rebuild a session from a snapshot. Ids continue after the
    /// highest id seen, even if the snapshot's counter is behind.
    ///
    /// Every record is checked first: duplicate ids, arrivals past the
    /// configured limit, and (under the strict policy) unknown monsters
    /// or buffs reject the whole snapshot.
    pub fn from_snapshot(config: ToolConfig, snapshot: SessionSnapshot) -> ToolResult<Self> {
        let mut editor = Self::new(config);
        let max_ms = editor.max_arrival_ms()?;

        let mut seen = HashSet::with_capacity(snapshot.records.len());
        for record in &snapshot.records {
            if !seen.insert(record.id()) {
                return Err(ToolError::InvalidSnapshot {
                    reason: format!("record id {} appears more than once", record.id()),
                });
            }
            if record.arrival_time > max_ms {
                return Err(ToolError::InvalidSnapshot {
                    reason: format!(
                        "record {} arrives at {} ms, past the {max_ms} ms limit",
                        record.id(),
                        record.arrival_time
                    ),
                });
            }
            editor.check_catalog(&record.monster, record.buffs())?;
        }

        let highest = snapshot.records.iter().map(|r| r.id().0).max().unwrap_or(0);
        let next = snapshot.next_id.max(highest + 1);
        editor.ids = IdGenerator::resume_at(next);
        for record in snapshot.records {
            editor.push(record);
        }
        log::info!(
            "session: restored {} records, next id {next}",
            editor.records.len()
        );
        Ok(editor)
    }
}

impl<L: ListView> MonsterToolEditor<L> {
    /// Start an empty session over an existing list display.
    /// The display must be empty.
    pub fn with_list(config: ToolConfig, list: L) -> Self {
        assert_eq!(list.row_count(), 0, "session must start with an empty list");
        Self {
            config,
            ids: IdGenerator::new(),
            records: Vec::new(),
            list,
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[MonsterRecord] {
        &self.records
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    /// Access to the display, e.g. for the front-end to move the selection.
    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a record from the form inputs and append it.
    ///
    /// - `arrival_seconds` must be within [0, max_arrival_seconds].
    /// - `buff_text` is split on whitespace and sorted; the configured
    ///   policy decides whether unknown tokens are accepted.
    ///
    /// On error nothing changes and no id is consumed.
    pub fn add_record(
        &mut self,
        monster: Monster,
        arrival_seconds: f64,
        buff_text: &str,
    ) -> ToolResult<RecordId> {
        let arrival_time = self.seconds_to_ms(arrival_seconds)?;
        let buffs = self.config.buff_policy.normalize(buff_text)?;

        let mut record = MonsterRecord::new(&mut self.ids);
        record.monster = monster.name().to_string();
        record.arrival_time = arrival_time;
        record.set_buffs(buffs);

        let id = record.id();
        log::debug!("session: added {record}");
        self.push(record);
        Ok(id)
    }

    /// Remove the record behind the list's current selection.
    pub fn remove_selected(&mut self) -> ToolResult<RemoveOutcome> {
        let row = self.list.selected_row();
        self.remove_row(row)
    }

    /// Remove the record shown at `row`. `None` or an out-of-range row
    /// leaves the session untouched.
    pub fn remove_row(&mut self, row: Option<usize>) -> ToolResult<RemoveOutcome> {
        let Some(row) = row.filter(|&r| r < self.list.row_count()) else {
            return Ok(RemoveOutcome::NothingSelected);
        };
        let Some(id) = self.list.row_key(row) else {
            return Ok(RemoveOutcome::NothingSelected);
        };
        let Some(position) = self.records.iter().position(|r| r.id() == id) else {
            log::error!("session: list row {row} refers to missing record {id}");
            debug_assert!(false, "list row {row} refers to missing record {id}");
            return Err(ToolError::Other(anyhow::anyhow!(
                "list row {row} refers to missing record {id}"
            )));
        };

        self.list.remove_row(row);
        let removed = self.records.remove(position);
        log::debug!("session: removed {removed}");
        Ok(RemoveOutcome::Removed { id })
    }

    /// Ask `prompt` for a destination and write the spawn file there.
    pub fn save(&self, prompt: &mut dyn SavePrompt) -> ToolResult<SaveOutcome> {
        let path = prompt.prompt_save_path(&self.config.default_file_name);
        self.save_to(path.as_deref())
    }

    /// Write the spawn file to `path`, truncating it. `None` or an empty
    /// path is a cancelled prompt. I/O failures are returned to the caller.
    pub fn save_to(&self, path: Option<&Path>) -> ToolResult<SaveOutcome> {
        let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
            log::info!("save: cancelled");
            return Ok(SaveOutcome::Cancelled);
        };
        let lines = spawn_file::save_to_path(path, &self.records)?;
        log::info!("save: wrote {lines} records to {}", path.display());
        Ok(SaveOutcome::Saved { path: path.to_path_buf(), lines })
    }

    /// Append every entry of an existing spawn file as new records.
    /// The whole file is checked first; a bad file changes nothing.
    pub fn load_file(&mut self, path: &Path) -> ToolResult<usize> {
        let entries = spawn_file::load_from_path(path)?;
        let max_ms = self.max_arrival_ms()?;

        let mut checked = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.arrival_time > max_ms {
                return Err(ToolError::MalformedLine {
                    line:   entry.line,
                    reason: format!("arrival time {} exceeds {max_ms}", entry.arrival_time),
                });
            }
            self.check_catalog(&entry.monster, &entry.buffs)?;
            let buffs = self.config.buff_policy.normalize(&entry.buffs.join(" "))?;
            checked.push((entry.monster, entry.arrival_time, buffs));
        }

        let count = checked.len();
        for (monster, arrival_time, buffs) in checked {
            let mut record = MonsterRecord::new(&mut self.ids);
            record.monster = monster;
            record.arrival_time = arrival_time;
            record.set_buffs(buffs);
            self.push(record);
        }
        log::info!("load: appended {count} records from {}", path.display());
        Ok(count)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            next_id: self.ids.peek(),
            records: self.records.clone(),
        }
    }

    fn push(&mut self, record: MonsterRecord) {
        self.list.append_row(record.id(), record.to_string());
        self.records.push(record);
    }

    fn max_arrival_ms(&self) -> ToolResult<ArrivalMs> {
        self.seconds_to_ms(self.config.max_arrival_seconds)
    }

    /// Under the strict policy, monster and buffs must come from the catalog.
    fn check_catalog(&self, monster: &str, buffs: &[String]) -> ToolResult<()> {
        if self.config.buff_policy == BuffPolicy::Strict {
            monster.parse::<Monster>()?;
            for buff in buffs {
                buff.parse::<Buff>()?;
            }
        }
        Ok(())
    }

    fn seconds_to_ms(&self, seconds: f64) -> ToolResult<ArrivalMs> {
        if !seconds.is_finite() || seconds < 0.0 || seconds > self.config.max_arrival_seconds {
            return Err(ToolError::ArrivalOutOfRange { seconds });
        }
        let ms = (seconds * 1000.0).round();
        if ms > ArrivalMs::MAX as f64 {
            return Err(ToolError::ArrivalOutOfRange { seconds });
        }
        Ok(ms as ArrivalMs)
    }
}
