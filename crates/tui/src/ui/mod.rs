pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{AppState, ReminderField, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    // Theme travels by value from here down; no ambient lookup.
    let theme = Theme::from_mode(state.theme_mode);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(2), // Tab bar (label + gap)
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_title_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Dashboard => screens::dashboard::render(frame, layout[2], state, &theme),
        Section::Ingresos => screens::incomes::render(frame, layout[2], state, &theme),
        Section::Gastos => screens::expenses::render(frame, layout[2], state, &theme),
        Section::Recordatorios => screens::reminders::render(frame, layout[2], state, &theme),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_title_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " MiBalance ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(state.base_url.as_str(), Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = match state.section {
        Section::Dashboard => "r recargar   ←/→ sección   Ctrl+T tema   q salir",
        Section::Ingresos | Section::Gastos => {
            "Tab campo   Enter guardar   ←/→ sección   Ctrl+C salir"
        }
        Section::Recordatorios => {
            if state.reminders.focus == ReminderField::Lista {
                "↑/↓ elegir   Enter completar   x eliminar   Tab formulario"
            } else {
                "Tab campo   Enter guardar   ←/→ sección   Ctrl+C salir"
            }
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {hints}"),
            Style::default().fg(theme.dim),
        )),
        area,
    );
}
