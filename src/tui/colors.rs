//! Color constants for the terminal user interface.

use ratatui::style::Color;

// Priority accents, shared by list rows and the form selector.

/// Used for high-priority tasks
pub const EMBER: Color = Color::Rgb(214, 64, 69);
/// Used for medium-priority tasks
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Used for low-priority tasks
pub const SLATE: Color = Color::Rgb(110, 128, 145);
/// Accent for the AI capture prompt
pub const DARK_PURPLE: Color = Color::Rgb(86, 60, 92);
