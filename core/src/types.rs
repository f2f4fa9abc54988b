//! Shared primitive types used across the editor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrival offset from level start, in milliseconds.
pub type ArrivalMs = u32;

/// Latest arrival the selector offers: 10 minutes.
pub const MAX_ARRIVAL_SECONDS: f64 = 600.0;

/// Identity of a spawn record within one editing session.
/// Assigned by `IdGenerator`, starting at 1, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
