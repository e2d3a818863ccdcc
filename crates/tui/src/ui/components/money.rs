use ratatui::{style::Style, text::Span};
use rust_decimal::Decimal;

use ledger::MovementKind;

use crate::ui::theme::Theme;

/// Formats an amount for display: `$` plus the decimal value with trailing
/// zeros trimmed, full precision otherwise.
pub fn format_monto(monto: Decimal) -> String {
    let normalized = monto.normalize();
    if normalized.is_sign_negative() {
        format!("-${}", -normalized)
    } else {
        format!("${normalized}")
    }
}

/// Movement amounts carry the origin sign: `+` income, `-` expense.
pub fn styled_movement_amount(
    kind: MovementKind,
    monto: Decimal,
    theme: &Theme,
) -> Span<'static> {
    let color = match kind {
        MovementKind::Ingreso => theme.positive,
        MovementKind::Gasto => theme.negative,
    };
    Span::styled(
        format!("{}{}", kind.sign(), format_monto(monto)),
        Style::default().fg(color),
    )
}

/// Totals keep their own color; the net balance is green when non-negative
/// and red otherwise.
pub fn styled_balance(balance: Decimal, theme: &Theme) -> Span<'static> {
    let color = if balance >= Decimal::ZERO {
        theme.positive
    } else {
        theme.negative
    };
    Span::styled(format_monto(balance), Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_monto(Decimal::new(10000, 2)), "$100");
        assert_eq!(format_monto(Decimal::new(1250, 2)), "$12.5");
        assert_eq!(format_monto(Decimal::new(-3075, 2)), "-$30.75");
    }
}
