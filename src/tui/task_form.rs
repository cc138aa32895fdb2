//! Create-task form for the terminal user interface.
//!
//! The form only ever produces a draft; the server assigns the id and the
//! completion flag. The AI capture flow pre-fills it, but submission is
//! always a separate, manual step.

use crate::api::ParsedTask;
use crate::fields::Priority;
use crate::tui::input::InputField;

/// Field order in the create form.
pub const TITLE_FIELD: usize = 0;
pub const NOTES_FIELD: usize = 1;
pub const PRIORITY_FIELD: usize = 2;

/// The create-task form: two text fields plus a priority selector.
pub struct TaskForm {
    pub title: InputField,
    pub notes: InputField,
    pub priority: usize,
    pub current_field: usize,
    pub priorities: Vec<Priority>,
}

impl TaskForm {
    pub fn new() -> Self {
        Self {
            title: InputField::new(),
            notes: InputField::new(),
            priority: 1, // Medium
            current_field: TITLE_FIELD,
            priorities: vec![Priority::High, Priority::Medium, Priority::Low],
        }
    }

    /// Pre-fill from an AI-parse suggestion. The user still reviews and
    /// submits manually.
    pub fn from_parsed(parsed: &ParsedTask) -> Self {
        let mut form = Self::new();
        form.title = InputField::with_value(&parsed.title);
        form.notes = InputField::with_value(&parsed.notes);
        form.priority = form
            .priorities
            .iter()
            .position(|&p| p == parsed.priority)
            .unwrap_or(1);
        form
    }

    /// The priority the selector currently points at.
    pub fn selected_priority(&self) -> Priority {
        self.priorities
            .get(self.priority)
            .copied()
            .unwrap_or_default()
    }

    /// The trimmed title, or `None` when it is effectively blank.
    pub fn trimmed_title(&self) -> Option<String> {
        let t = self.title.value.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    }

    pub fn field_count(&self) -> usize {
        3 // 2 text fields + priority selector
    }

    /// Move to the next field in the form.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % self.field_count();
    }

    /// Move to the previous field in the form.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            self.field_count() - 1
        } else {
            self.current_field - 1
        };
    }

    /// Handle character input for the currently active field.
    pub fn handle_char(&mut self, c: char) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_char(c),
            NOTES_FIELD => self.notes.handle_char(c),
            _ => {}
        }
    }

    /// Handle backspace input for the currently active field.
    pub fn handle_backspace(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_backspace(),
            NOTES_FIELD => self.notes.handle_backspace(),
            _ => {}
        }
    }

    /// Handle forward delete for the currently active field.
    pub fn handle_delete(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_delete(),
            NOTES_FIELD => self.notes.handle_delete(),
            _ => {}
        }
    }

    /// Handle left/right arrow keys for cursor movement or the selector.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            TITLE_FIELD => {
                if right {
                    self.title.move_cursor_right()
                } else {
                    self.title.move_cursor_left()
                }
            }
            NOTES_FIELD => {
                if right {
                    self.notes.move_cursor_right()
                } else {
                    self.notes.move_cursor_left()
                }
            }
            PRIORITY_FIELD => {
                if right {
                    self.priority = (self.priority + 1) % self.priorities.len();
                } else {
                    self.priority = if self.priority == 0 {
                        self.priorities.len() - 1
                    } else {
                        self.priority - 1
                    };
                }
            }
            _ => {}
        }
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}
