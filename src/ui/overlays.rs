//! Overlay dialogs: the add/edit expense form and the date-range editor.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{ExpenseForm, FormField, FormMode, RangeField, RangeForm};

use super::components::{render_input_field, InputFieldConfig};
use super::helpers::centered_rect;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

pub fn render_expense_form(frame: &mut Frame, form: &ExpenseForm) {
    let title = match form.mode {
        FormMode::Add => " add expense ",
        FormMode::Edit { .. } => " edit expense ",
    };
    let area = centered_rect(frame.area(), 52, 22);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(title, Style::default().fg(COLOR_HEADER)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = [
        ("description", &form.description, FormField::Description, ""),
        ("amount", &form.amount, FormField::Amount, "12.50"),
        ("date", &form.date, FormField::Date, "2024-03-01"),
        ("note", &form.note, FormField::Note, "optional"),
    ];
    let mut y = inner.y;
    for (label, value, field, placeholder) in fields {
        let field_area = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 4);
        let config = InputFieldConfig::new(label, value)
            .focused(form.field == field)
            .placeholder(placeholder);
        y += render_input_field(frame, field_area, &config);
    }

    render_dialog_footer(frame, inner, y, form.error.as_deref());
}

pub fn render_range_form(frame: &mut Frame, form: &RangeForm) {
    let area = centered_rect(frame.area(), 52, 14);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " filter by date ",
            Style::default().fg(COLOR_HEADER),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = [
        ("from", &form.start, RangeField::Start),
        ("to", &form.end, RangeField::End),
    ];
    let mut y = inner.y;
    for (label, value, field) in fields {
        let field_area = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 4);
        let config = InputFieldConfig::new(label, value)
            .focused(form.field == field)
            .placeholder("2024-03-01, blank for none");
        y += render_input_field(frame, field_area, &config);
    }

    render_dialog_footer(frame, inner, y, form.error.as_deref());
}

fn render_dialog_footer(frame: &mut Frame, inner: Rect, y: u16, error: Option<&str>) {
    let mut y = y;
    if let Some(error) = error {
        let error_area = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1);
        frame.render_widget(
            Paragraph::new(Span::styled(error, Style::default().fg(COLOR_ERROR))),
            error_area,
        );
        y += 1;
    }
    if y < inner.y + inner.height {
        let hint_area = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[Tab] next field  [Enter] save  [Esc] cancel",
                Style::default().fg(COLOR_DIM),
            )),
            hint_area,
        );
    }
}
