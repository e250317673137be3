//! Single-line text input shown in the status bar.

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PromptOutcome {
    Pending,
    Submitted(String),
    Cancelled,
}

#[derive(Debug, Clone)]
pub(crate) struct LinePrompt {
    label: String,
    input: String,
}

impl LinePrompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_input(label, "")
    }

    /// Prompt pre-filled with the current value.
    pub fn with_input(label: impl Into<String>, input: impl Into<String>) -> Self {
        LinePrompt {
            label: label.into(),
            input: input.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match key.code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => return PromptOutcome::Submitted(self.input.clone()),
            KeyCode::Esc => return PromptOutcome::Cancelled,
            _ => {}
        }
        PromptOutcome::Pending
    }
}
