//! Not-found screen for unrecognized paths.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::router::Route;

use super::helpers::centered_rect;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_not_found(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.area(), 50, 8);

    let path = match &app.route {
        Route::NotFound(path) => path.as_str(),
        _ => "",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" 404 ", Style::default().fg(COLOR_HEADER)));
    let para = Paragraph::new(format!(
        "Nothing lives at {path}\n\n[h] Go home  [q] Quit"
    ))
    .style(Style::default().fg(COLOR_DIM))
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}
