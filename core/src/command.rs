use crate::{
    catalog::Monster,
    editor::{MonsterToolEditor, RemoveOutcome, SaveOutcome},
    error::ToolResult,
    list_view::ListView,
    types::RecordId,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Every action the user can take on a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum EditorCommand {
    Add {
        monster:         String,
        arrival_seconds: f64,
        #[serde(default)]
        buffs:           String,
    },
    Select {
        row: Option<usize>,
    },
    /// Remove the selected row.
    Remove,
    /// A missing path is a cancelled save prompt.
    Save {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    Load {
        path: PathBuf,
    },
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CommandOutcome {
    Added    { id: RecordId },
    Selected { row: Option<usize> },
    Removed  { remove: RemoveOutcome },
    Saved    { save: SaveOutcome },
    Loaded   { count: usize },
    Listed   { rows: Vec<String> },
}

impl<L: ListView> MonsterToolEditor<L> {
    pub fn apply(&mut self, command: EditorCommand) -> ToolResult<CommandOutcome> {
        match command {
            EditorCommand::Add { monster, arrival_seconds, buffs } => {
                let monster: Monster = monster.parse()?;
                let id = self.add_record(monster, arrival_seconds, &buffs)?;
                Ok(CommandOutcome::Added { id })
            }
            EditorCommand::Select { row } => {
                self.list_mut().set_selected_row(row);
                Ok(CommandOutcome::Selected { row })
            }
            EditorCommand::Remove => Ok(CommandOutcome::Removed {
                remove: self.remove_selected()?,
            }),
            EditorCommand::Save { path } => Ok(CommandOutcome::Saved {
                save: self.save_to(path.as_deref())?,
            }),
            EditorCommand::Load { path } => Ok(CommandOutcome::Loaded {
                count: self.load_file(&path)?,
            }),
            EditorCommand::List => Ok(CommandOutcome::Listed { rows: self.row_texts() }),
        }
    }

    /// Visible row text, top to bottom.
    pub fn row_texts(&self) -> Vec<String> {
        (0..self.list().row_count())
            .filter_map(|i| self.list().row_text(i).map(str::to_string))
            .collect()
    }
}

/// Parse one line of the interactive prompt.
///
///   add <monster> <seconds> [buff ...]
///   select <row> | select none
///   remove
///   save [path]
///   load <path>
///   list
///
/// Returns `None` for anything else.
pub fn parse_text_command(line: &str) -> Option<EditorCommand> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;
    match verb {
        "add" => {
            let monster = words.next()?.to_string();
            let arrival_seconds: f64 = words.next()?.parse().ok()?;
            let buffs = words.collect::<Vec<_>>().join(" ");
            Some(EditorCommand::Add { monster, arrival_seconds, buffs })
        }
        "select" => {
            let row = match words.next()? {
                "none" => None,
                n => Some(n.parse().ok()?),
            };
            Some(EditorCommand::Select { row })
        }
        "remove" => Some(EditorCommand::Remove),
        "save" => {
            let rest = line.trim_start().strip_prefix("save")?.trim();
            let path = (!rest.is_empty()).then(|| PathBuf::from(rest));
            Some(EditorCommand::Save { path })
        }
        "load" => {
            let rest = line.trim_start().strip_prefix("load")?.trim();
            (!rest.is_empty()).then(|| EditorCommand::Load { path: PathBuf::from(rest) })
        }
        "list" => Some(EditorCommand::List),
        _ => None,
    }
}
