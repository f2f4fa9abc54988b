//! The spawn file read by the game level.
//!
//! FORMAT (one record per line, no header, no footer):
//!   <monster> <arrival_ms>[ <buff>]*\n
//!
//! Lines are ordered by arrival time, ascending. Records with equal
//! arrival times keep their session order. Record ids are not written.
//! Fields are space-separated with no quoting, so names containing
//! whitespace cannot be represented.

use crate::{
    error::{ToolError, ToolResult},
    record::MonsterRecord,
    types::ArrivalMs,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One parsed line of a spawn file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnEntry {
    /// 1-based line number in the source text.
    pub line:         usize,
    pub monster:      String,
    pub arrival_time: ArrivalMs,
    pub buffs:        Vec<String>,
}

/// Render one record as a spawn file line, newline included.
pub fn render_line(record: &MonsterRecord) -> String {
    let mut line = format!("{} {}", record.monster, record.arrival_time);
    for buff in record.buffs() {
        line.push(' ');
        line.push_str(buff);
    }
    line.push('\n');
    line
}

/// Records in file order: stable sort by arrival time.
pub fn file_order(records: &[MonsterRecord]) -> Vec<&MonsterRecord> {
    let mut ordered: Vec<&MonsterRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.cmp_arrival(b));
    ordered
}

/// Write all records to `out`. Returns the number of lines written.
pub fn write_records<W: Write>(out: &mut W, records: &[MonsterRecord]) -> ToolResult<usize> {
    let ordered = file_order(records);
    for record in &ordered {
        out.write_all(render_line(record).as_bytes())?;
    }
    Ok(ordered.len())
}

/// Create or truncate `path` and write all records to it.
/// The file handle is dropped on every return path.
pub fn save_to_path(path: &Path, records: &[MonsterRecord]) -> ToolResult<usize> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let lines = write_records(&mut out, records)?;
    out.flush()?;
    Ok(lines)
}

/// Parse spawn file text. Blank lines are skipped.
pub fn parse(text: &str) -> ToolResult<Vec<SpawnEntry>> {
    let mut entries = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let mut fields = raw.split_whitespace();
        let Some(monster) = fields.next() else {
            continue;
        };
        let arrival = fields.next().ok_or_else(|| ToolError::MalformedLine {
            line,
            reason: "missing arrival time".into(),
        })?;
        let arrival_time: ArrivalMs = arrival.parse().map_err(|_| ToolError::MalformedLine {
            line,
            reason: format!("arrival time '{arrival}' is not a whole number of milliseconds"),
        })?;
        entries.push(SpawnEntry {
            line,
            monster: monster.to_string(),
            arrival_time,
            buffs: fields.map(str::to_string).collect(),
        });
    }
    Ok(entries)
}

/// Read and parse the spawn file at `path`.
pub fn load_from_path(path: &Path) -> ToolResult<Vec<SpawnEntry>> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}
