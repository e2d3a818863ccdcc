use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, ExpenseField},
    ui::{
        components::{card::Card, form, money},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    render_form(frame, layout[0], state, theme);
    render_list(frame, layout[1], state, theme);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let expense_form = &state.expenses;
    let card = Card::new("Registrar Gasto", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    form::input_row(
        frame,
        rows[0],
        "Monto:",
        &expense_form.monto,
        "0.00",
        expense_form.focus == ExpenseField::Monto,
        theme,
    );
    form::select_row(
        frame,
        rows[1],
        "Categoría:",
        expense_form.categoria().as_str(),
        expense_form.focus == ExpenseField::Categoria,
        theme,
    );
    form::input_row(
        frame,
        rows[2],
        "Descripción:",
        &expense_form.descripcion,
        "Descripción del gasto",
        expense_form.focus == ExpenseField::Descripcion,
        theme,
    );

    if expense_form.list.is_busy() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Guardando...",
                Style::default().fg(theme.dim),
            )),
            rows[3],
        );
    } else if let Some(message) = &expense_form.message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            )),
            rows[3],
        );
    }
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Lista de Gastos", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let items = state.expenses.list.items();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No hay gastos registrados.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let lines: Vec<Line<'_>> = items
        .iter()
        .map(|expense| {
            Line::from(vec![
                Span::styled(
                    format!("-{}", money::format_monto(expense.monto)),
                    Style::default().fg(theme.negative),
                ),
                Span::raw(" - "),
                Span::styled(
                    expense.categoria.as_str(),
                    Style::default().fg(theme.accent),
                ),
                Span::raw(" - "),
                Span::styled(
                    expense.description.clone(),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("  {}", expense.fecha.format("%d/%m/%Y")),
                    Style::default().fg(theme.dim),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
