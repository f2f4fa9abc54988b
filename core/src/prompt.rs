//! Save-path prompt capability.

use std::path::PathBuf;

/// Asks the user where to save. `None` means the prompt was cancelled.
pub trait SavePrompt {
    fn prompt_save_path(&mut self, suggested_name: &str) -> Option<PathBuf>;
}

/// A prompt with a pre-decided answer. Used for scripted commands and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedPrompt(pub Option<PathBuf>);

impl FixedPrompt {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self(Some(path.into()))
    }

    pub fn cancelled() -> Self {
        Self(None)
    }
}

impl SavePrompt for FixedPrompt {
    fn prompt_save_path(&mut self, _suggested_name: &str) -> Option<PathBuf> {
        // An empty path is what a cancelled file dialog hands back.
        self.0.clone().filter(|p| !p.as_os_str().is_empty())
    }
}
