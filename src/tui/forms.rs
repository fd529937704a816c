use tui_input::{Input, InputRequest};

use crate::config::Choice;

/// Single-select list of run modes
#[derive(Debug, Clone, Default)]
pub struct SetupForm {
    selected: usize,
}

impl SetupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &'static [Choice] {
        &Choice::ALL
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Choice {
        Choice::ALL[self.selected]
    }

    /// Move the cursor down, wrapping
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % Choice::ALL.len();
    }

    /// Move the cursor up, wrapping
    pub fn prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(Choice::ALL.len() - 1);
    }
}

/// One-line prompt for the new project's idea
#[derive(Debug, Clone, Default)]
pub struct IdeaForm {
    input: Input,
}

impl IdeaForm {
    pub const TITLE: &'static str = "Spill the tea ☕";
    pub const PROMPT: &'static str = "Manifest: ";
    pub const PLACEHOLDER: &'static str = "Make me a unicorn...";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    pub fn handle_input(&mut self, req: InputRequest) {
        self.input.handle(req);
    }
}
