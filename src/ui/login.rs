//! Login screen

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::App;

use super::helpers::SPINNER_FRAMES;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

pub const TALLY_LOGO: [&str; 5] = [
    "████████╗ █████╗ ██╗     ██╗  ██╗   ██╗",
    "╚══██╔══╝██╔══██╗██║     ██║  ╚██╗ ██╔╝",
    "   ██║   ███████║██║     ██║   ╚████╔╝ ",
    "   ██║   ██╔══██║██║     ██║    ╚██╔╝  ",
    "   ██║   ██║  ██║███████╗███████╗██║   ",
];

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let inner = area.inner(Margin::new(2, 1));

    let logo_area = Rect::new(inner.x, inner.y, inner.width, 6);
    let logo = Paragraph::new(TALLY_LOGO.join("\n"))
        .style(Style::default().fg(COLOR_HEADER))
        .alignment(Alignment::Center);
    frame.render_widget(logo, logo_area);

    let dialog_area = Rect::new(
        inner.x + 4,
        inner.y + 8,
        inner.width.saturating_sub(8),
        8,
    );
    let dialog_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let content = if app.signing_in {
        let frame_idx = app.tick_count as usize % SPINNER_FRAMES.len();
        format!("{} Signing in...", SPINNER_FRAMES[frame_idx])
    } else if let Some(status) = &app.status {
        format!("✗ {status}\n\n[Enter] Try again  [Q] Quit")
    } else {
        "Track your expenses.\n\n[Enter] Sign in  [Q] Quit".to_string()
    };
    let style = if app.status.is_some() && !app.signing_in {
        Style::default().fg(COLOR_ERROR)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let para = Paragraph::new(content)
        .style(style)
        .block(dialog_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, dialog_area);
}
