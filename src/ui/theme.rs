//! Color theme constants for the tally UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Selected row highlight
pub const COLOR_SELECTED: Color = Color::Rgb(40, 40, 55);

/// Positive totals and success states - green
pub const COLOR_OK: Color = Color::Rgb(4, 181, 117);

/// Error banners and rejected input - red
pub const COLOR_ERROR: Color = Color::Red;
