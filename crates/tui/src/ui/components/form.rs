use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// One labeled text input row. The focused row shows a block cursor.
pub fn input_row(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let label_color = if focused { theme.accent } else { theme.dim };
    let mut spans = vec![Span::styled(
        format!("{label:<12}"),
        Style::default().fg(label_color),
    )];

    if value.is_empty() && !placeholder.is_empty() {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(theme.dim),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(theme.text),
        ));
    }

    if focused {
        spans.push(Span::styled("█", Style::default().fg(theme.accent)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Read-only selector row, cycled with the arrow keys while focused.
pub fn select_row(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let label_color = if focused { theme.accent } else { theme.dim };
    let value_color = if focused { theme.accent } else { theme.text };
    let line = Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(label_color)),
        Span::styled(format!("< {value} >"), Style::default().fg(value_color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
