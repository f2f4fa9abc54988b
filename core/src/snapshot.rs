//! Snapshot serialization — a whole editing session to/from JSON.
//!
//! A snapshot captures the records in insertion order plus the next
//! unused id, so a resumed session never hands out an id twice.

use crate::{error::ToolResult, record::MonsterRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub next_id: u64,
    pub records: Vec<MonsterRecord>,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> ToolResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ToolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_to(&self, path: &Path) -> ToolResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn read_from(path: &Path) -> ToolResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
