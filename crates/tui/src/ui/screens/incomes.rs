use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, IncomeField},
    ui::{
        components::{card::Card, form, money},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    render_form(frame, layout[0], state, theme);
    render_list(frame, layout[1], state, theme);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let income_form = &state.incomes;
    let card = Card::new("Registrar Ingreso", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    form::input_row(
        frame,
        rows[0],
        "Monto:",
        &income_form.monto,
        "0.00",
        income_form.focus == IncomeField::Monto,
        theme,
    );
    form::input_row(
        frame,
        rows[1],
        "Descripción:",
        &income_form.descripcion,
        "Descripción del ingreso",
        income_form.focus == IncomeField::Descripcion,
        theme,
    );

    if income_form.list.is_busy() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Guardando...",
                Style::default().fg(theme.dim),
            )),
            rows[2],
        );
    } else if let Some(message) = &income_form.message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            )),
            rows[2],
        );
    }
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Lista de Ingresos", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let items = state.incomes.list.items();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No hay ingresos registrados.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let lines: Vec<Line<'_>> = items
        .iter()
        .map(|income| {
            Line::from(vec![
                Span::styled(
                    format!("+{}", money::format_monto(income.monto)),
                    Style::default().fg(theme.positive),
                ),
                Span::raw(" - "),
                Span::styled(income.description.clone(), Style::default().fg(theme.text)),
                Span::styled(
                    format!("  {}", income.fecha.format("%d/%m/%Y")),
                    Style::default().fg(theme.dim),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
