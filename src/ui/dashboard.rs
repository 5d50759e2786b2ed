//! Dashboard screen: filter bar, expense list, summary line.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::{format_date, App, Focus};
use crate::models::SortBy;
use crate::store::selectors;

use super::helpers::{format_amount, truncate, SPINNER_FRAMES};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_OK, COLOR_SELECTED,
};

pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // filter bar
            Constraint::Min(3),    // expense list
            Constraint::Length(1), // summary
            Constraint::Length(1), // hints / status
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_filter_bar(frame, app, chunks[1]);
    render_expense_list(frame, app, chunks[2]);
    render_summary(frame, app, chunks[3]);
    render_footer(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let uid = app
        .store
        .state()
        .auth
        .uid()
        .unwrap_or("?")
        .to_string();
    let line = Line::from(vec![
        Span::styled(" tally ", Style::default().fg(COLOR_HEADER).bold()),
        Span::styled(format!("· {uid}"), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let filters = app.store.state().filters.clone();
    let focused = app.focus == Focus::Filter;

    let border_style = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    };
    let sort_label = match filters.sort_by {
        SortBy::Date => "date",
        SortBy::Amount => "amount",
    };
    let range_label = match (filters.start_date, filters.end_date) {
        (None, None) => String::new(),
        (start, end) => format!(
            "  {} → {}",
            start.map(format_date).unwrap_or_else(|| "…".to_string()),
            end.map(format_date).unwrap_or_else(|| "…".to_string()),
        ),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            format!(" filter · sort: {sort_label}{range_label} "),
            Style::default().fg(COLOR_DIM),
        ));

    let text = if filters.text.is_empty() && !focused {
        Span::styled("press / to search", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled(filters.text.clone(), Style::default().fg(COLOR_ACCENT))
    };
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}

fn render_expense_list(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_expenses();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" expenses ", Style::default().fg(COLOR_DIM)));

    if app.loading_expenses {
        let frame_idx = app.tick_count as usize % SPINNER_FRAMES.len();
        let para = Paragraph::new(format!("{} Loading expenses...", SPINNER_FRAMES[frame_idx]))
            .style(Style::default().fg(COLOR_DIM))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(para, area);
        return;
    }
    if visible.is_empty() {
        let para = Paragraph::new("No expenses match. [a] add one")
            .style(Style::default().fg(COLOR_DIM))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(para, area);
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, expense)| {
            let style = if i == app.selected && app.focus == Focus::List {
                Style::default().bg(COLOR_SELECTED).fg(COLOR_ACCENT)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };
            Row::new(vec![
                Cell::from(format_date(expense.created_at)),
                Cell::from(truncate(&expense.description, 40)),
                Cell::from(
                    Text::from(format_amount(expense.amount)).alignment(Alignment::Right),
                ),
                Cell::from(Span::styled(
                    truncate(&expense.note, 30),
                    Style::default().fg(COLOR_DIM),
                )),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(30),
        ],
    )
    .header(
        Row::new(vec!["date", "description", "amount", "note"])
            .style(Style::default().fg(COLOR_DIM)),
    )
    .block(block);
    frame.render_widget(table, area);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_expenses();
    let total = selectors::expenses_total(&visible);
    let noun = if visible.len() == 1 {
        "expense"
    } else {
        "expenses"
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} {noun} totalling ", visible.len()),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(format_amount(total), Style::default().fg(COLOR_OK).bold()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(status) = &app.status {
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(COLOR_ERROR),
        ))
    } else if app.focus == Focus::Filter {
        Line::from(Span::styled(
            " type to filter · [Enter]/[Esc] done",
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        Line::from(Span::styled(
            " [a]dd [e]dit [x] remove [/] search [s]ort [d]ates [o] sign out [q]uit",
            Style::default().fg(COLOR_DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}
