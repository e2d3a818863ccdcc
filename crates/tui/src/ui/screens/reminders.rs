use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, ReminderField},
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
    let reminder_form = &state.reminders;
    let card = Card::new("Nuevo Recordatorio", theme);
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
        "Título:",
        &reminder_form.titulo,
        "Ej. Pagar arriendo",
        reminder_form.focus == ReminderField::Titulo,
        theme,
    );
    form::input_row(
        frame,
        rows[1],
        "Fecha:",
        &reminder_form.fecha,
        "AAAA-MM-DD",
        reminder_form.focus == ReminderField::Fecha,
        theme,
    );
    form::input_row(
        frame,
        rows[2],
        "Monto:",
        &reminder_form.monto,
        "(opcional)",
        reminder_form.focus == ReminderField::Monto,
        theme,
    );

    if reminder_form.list.is_busy() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Guardando...",
                Style::default().fg(theme.dim),
            )),
            rows[3],
        );
    } else if let Some(message) = &reminder_form.message {
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
    let list_focused = state.reminders.focus == ReminderField::Lista;
    let card = Card::new("Recordatorios", theme).focused(list_focused);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let sorted = state.reminders.sorted();
    if sorted.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No hay recordatorios.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let mut lines: Vec<Line<'_>> = Vec::with_capacity(sorted.len() + 1);
    for (i, reminder) in sorted.iter().enumerate() {
        let selected = list_focused && i == state.reminders.selected;
        let base = if reminder.completado {
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if selected {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        let prefix = if selected { "> " } else { "  " };
        let marker = if reminder.completado { "[x] " } else { "[ ] " };

        let mut spans = vec![
            Span::styled(prefix, Style::default().fg(theme.accent)),
            Span::styled(marker, Style::default().fg(theme.dim)),
            Span::styled(reminder.titulo.clone(), base),
        ];
        if let Some(monto) = reminder.monto {
            spans.push(Span::styled(
                format!(" - {}", money::format_monto(monto)),
                base,
            ));
        }
        spans.push(Span::styled(
            format!("  {}", reminder.fecha.format("%d/%m/%Y")),
            Style::default().fg(theme.dim),
        ));
        lines.push(Line::from(spans));
    }

    if state.reminders.confirm_delete.is_some() {
        lines.push(Line::from(Span::styled(
            "¿Eliminar este recordatorio? (y/n)",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
