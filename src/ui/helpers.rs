//! Helper functions and constants for UI rendering

use ratatui::layout::Rect;

/// Spinner frames for in-flight request animation
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A rect of the given size centered inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Format minor units as dollars, e.g. `1250` -> `$12.50`.
pub fn format_amount(amount: i64) -> String {
    if amount < 0 {
        format!("-${}.{:02}", -amount / 100, (-amount) % 100)
    } else {
        format!("${}.{:02}", amount / 100, amount % 100)
    }
}

/// Truncate a string to `max` characters, appending an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
