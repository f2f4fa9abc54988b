//! A single scheduled spawn and the counter that names it.
//!
//! RULE: Two records are the same record iff their ids match.
//! Monster, arrival time and buffs play no part in equality.

use crate::types::{ArrivalMs, RecordId};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Hands out record ids, starting at 1. Owned by the session,
/// so two sessions never share a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continue a sequence whose next unused id is `next`.
    /// Panics on 0; ids start at 1.
    pub fn resume_at(next: u64) -> Self {
        assert!(next >= 1, "record ids start at 1");
        Self { next }
    }

    pub fn next_id(&mut self) -> RecordId {
        let id = RecordId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `next_id` will return.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self { Self::new() }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterRecord {
    id:               RecordId,
    pub monster:      String,
    pub arrival_time: ArrivalMs,
    #[serde(deserialize_with = "sorted_buffs")]
    buffs:            Vec<String>,
}

/// Buffs read from a snapshot are sorted on the way in, like `set_buffs`.
fn sorted_buffs<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut buffs = Vec::<String>::deserialize(deserializer)?;
    buffs.sort();
    Ok(buffs)
}

impl MonsterRecord {
    /// A blank record carrying the next id from `ids`.
    pub fn new(ids: &mut IdGenerator) -> Self {
        Self::with_id(ids.next_id())
    }

    /// A blank record with a known id. Used when restoring snapshots.
    pub fn with_id(id: RecordId) -> Self {
        Self {
            id,
            monster:      String::new(),
            arrival_time: 0,
            buffs:        Vec::new(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Buff tokens, always in lexicographic order.
    pub fn buffs(&self) -> &[String] {
        &self.buffs
    }

    /// Replace the buff list. Tokens are sorted on the way in.
    pub fn set_buffs(&mut self, mut buffs: Vec<String>) {
        buffs.sort();
        self.buffs = buffs;
    }

    /// Order by arrival time only. Used with a stable sort, so records
    /// arriving together keep their insertion order.
    pub fn cmp_arrival(&self, other: &Self) -> Ordering {
        self.arrival_time.cmp(&other.arrival_time)
    }
}

impl PartialEq for MonsterRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MonsterRecord {}

/// The row text shown in the record list.
impl fmt::Display for MonsterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {} {} {}(ms) {:?}",
            self.id, self.monster, self.arrival_time, self.buffs
        )
    }
}
