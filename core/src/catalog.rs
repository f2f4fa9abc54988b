//! Monster catalog and the closed set of spawn buffs.
//!
//! Records store monster and buff names as plain strings, exactly as they
//! appear in the spawn file. These enums are what the selector offers and
//! what strict validation checks against.

use crate::error::{ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Monster {
    Boar,
    // New monsters are appended here and to ALL.
}

impl Monster {
    /// Selector order.
    pub const ALL: &'static [Monster] = &[Monster::Boar];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boar => "Boar",
        }
    }
}

impl FromStr for Monster {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| ToolError::UnknownMonster { name: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Buff {
    Windfall,
    EverChanging,
}

impl Buff {
    pub const ALL: &'static [Buff] = &[Buff::Windfall, Buff::EverChanging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windfall     => "WINDFALL",
            Self::EverChanging => "EVER_CHANGING",
        }
    }
}

impl FromStr for Buff {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| ToolError::UnknownBuff { token: s.to_string() })
    }
}

/// How buff tokens typed by the user are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffPolicy {
    /// Any whitespace-free token is stored verbatim.
    #[default]
    AcceptAny,
    /// Every token must name a `Buff`.
    Strict,
}

impl BuffPolicy {
    /// Split free text into buff tokens, sorted lexicographically.
    pub fn normalize(&self, text: &str) -> ToolResult<Vec<String>> {
        let mut tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if *self == BuffPolicy::Strict {
            for token in &tokens {
                token.parse::<Buff>()?;
            }
        }
        tokens.sort();
        Ok(tokens)
    }
}
