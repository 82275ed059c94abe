// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line input for the console.

use depot_core::DepotError;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use tracing::warn;

/// Supplies one line of user input per prompt.
pub trait LineSource {
    /// Shows `prompt` and reads a line without its terminator.
    ///
    /// Returns `Ok(None)` once input is closed (end of file or interrupt).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, DepotError>;
}

/// Terminal input through rustyline, with bounded in-session history.
pub struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    pub fn new(history_size: usize) -> Result<Self, DepotError> {
        let config = Config::builder()
            .max_history_size(history_size)
            .map_err(|e| DepotError::Internal(format!("invalid history size: {e}")))?
            .auto_add_history(false)
            .build();
        let editor = DefaultEditor::with_config(config)
            .map_err(|e| DepotError::Internal(format!("failed to initialize readline: {e}")))?;
        Ok(Self { editor })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, DepotError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => {
                warn!(error = %e, "terminal read failed");
                Err(DepotError::Io { source: e })
            }
            Err(e) => {
                warn!(error = %e, "line editor failed");
                Err(DepotError::Internal(format!("readline error: {e}")))
            }
        }
    }
}

/// Pre-recorded input for driving the console in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: std::collections::VecDeque<String>,
    /// Every prompt shown, in order.
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, DepotError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_replays_then_closes() {
        let mut source = ScriptedSource::new(["1", "crate"]);
        assert_eq!(source.read_line("a: ").unwrap().as_deref(), Some("1"));
        assert_eq!(source.read_line("b: ").unwrap().as_deref(), Some("crate"));
        assert_eq!(source.read_line("c: ").unwrap(), None);
        assert_eq!(source.prompts, vec!["a: ", "b: ", "c: "]);
    }
}
