//! Authoring core for monster spawn files.
//!
//! A session holds spawn records (monster, arrival time, buffs) and
//! writes them out as the line-oriented file a game level reads.
//! UI concerns reach the core only through `ListView` and `SavePrompt`.

pub mod catalog;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod list_view;
pub mod prompt;
pub mod record;
pub mod snapshot;
pub mod spawn_file;
pub mod types;
