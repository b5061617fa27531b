//! Single-line prompt for typing a location fragment

use crossterm::event::{KeyCode, KeyModifiers};

/// Outcome of one key press in the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Navigate to the entered fragment
    Submit(String),
    Cancel,
    Continue,
}

#[derive(Debug, Default)]
pub struct FragmentPrompt {
    active: bool,
    input: String,
}

impl FragmentPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the prompt prefilled with the current fragment
    pub fn open(&mut self, current: &str) {
        self.active = true;
        self.input = current.to_string();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> PromptAction {
        match code {
            KeyCode::Enter => {
                self.active = false;
                let fragment = std::mem::take(&mut self.input);
                let fragment = fragment.trim();
                if fragment.is_empty() {
                    PromptAction::Cancel
                } else {
                    PromptAction::Submit(fragment.to_string())
                }
            }
            KeyCode::Esc => {
                self.active = false;
                self.input.clear();
                PromptAction::Cancel
            }
            KeyCode::Backspace => {
                self.input.pop();
                PromptAction::Continue
            }
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                PromptAction::Continue
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                PromptAction::Continue
            }
            _ => PromptAction::Continue,
        }
    }
}
