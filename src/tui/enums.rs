//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppState {
    TaskList,
    AddTask,
    AiParse,
    Help,
    ConfirmDelete,
}
