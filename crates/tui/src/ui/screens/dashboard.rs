use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use ledger::recent;

use crate::{
    app::{AppState, DashboardData},
    ui::{
        components::{
            card::{Card, StatCard},
            money,
        },
        theme::Theme,
    },
};

/// How many movements the activity feed shows.
const RECENT_MOVEMENTS: usize = 5;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    if state.dashboard.loading && state.dashboard.data.is_none() {
        render_notice(frame, area, "Cargando dashboard...", theme.dim);
        return;
    }

    // Initial-load failures are fatal to this view: the placeholder replaces
    // all content until a reload succeeds.
    if let Some(error) = &state.dashboard.error {
        render_notice(frame, area, error, theme.error);
        return;
    }

    let Some(data) = &state.dashboard.data else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Totals row
            Constraint::Min(5),    // Recent movements
            Constraint::Length(8), // Reminders overview
        ])
        .split(area);

    render_totals(frame, layout[0], data, theme);
    render_movements(frame, layout[1], data, theme);
    render_reminders(frame, layout[2], data, theme);
}

fn render_notice(frame: &mut Frame<'_>, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(color)))
        .alignment(Alignment::Center);
    let row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(paragraph, row);
}

fn render_totals(frame: &mut Frame<'_>, area: Rect, data: &DashboardData, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let ingresos = Span::styled(
        money::format_monto(data.balance.ingresos),
        Style::default().fg(theme.positive),
    );
    StatCard::new("Ingresos", ingresos, theme).render(frame, cols[0]);

    let gastos = Span::styled(
        money::format_monto(data.balance.gastos),
        Style::default().fg(theme.negative),
    );
    StatCard::new("Gastos", gastos, theme).render(frame, cols[1]);

    let balance = money::styled_balance(data.balance.balance, theme);
    StatCard::new("Balance", balance, theme).render(frame, cols[2]);
}

fn render_movements(frame: &mut Frame<'_>, area: Rect, data: &DashboardData, theme: &Theme) {
    let card = Card::new("Últimos Movimientos", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let top = recent(&data.movements, RECENT_MOVEMENTS);
    if top.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No hay movimientos recientes.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let lines: Vec<Line<'_>> = top
        .iter()
        .map(|movement| {
            Line::from(vec![
                money::styled_movement_amount(movement.kind, movement.monto, theme),
                Span::raw(" - "),
                Span::styled(
                    movement.description.clone(),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("  {}", movement.fecha.format("%d/%m/%Y")),
                    Style::default().fg(theme.dim),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_reminders(frame: &mut Frame<'_>, area: Rect, data: &DashboardData, theme: &Theme) {
    let card = Card::new("Recordatorios", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if data.reminders.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No hay recordatorios.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let lines: Vec<Line<'_>> = data
        .reminders
        .iter()
        .map(|reminder| {
            let marker = if reminder.completado { "[x] " } else { "[ ] " };
            let style = if reminder.completado {
                Style::default()
                    .fg(theme.dim)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(theme.text)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(theme.dim)),
                Span::styled(reminder.titulo.clone(), style),
            ];
            if let Some(monto) = reminder.monto {
                spans.push(Span::styled(
                    format!(" - {}", money::format_monto(monto)),
                    style,
                ));
            }
            spans.push(Span::styled(
                format!("  {}", reminder.fecha.format("%d/%m/%Y")),
                Style::default().fg(theme.dim),
            ));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
