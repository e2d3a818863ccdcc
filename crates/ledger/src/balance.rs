use api_types::{balance::BalanceSummary, expense::Expense, income::Income};
use rust_decimal::Decimal;

/// Recomputes the totals locally from the fetched collections.
///
/// The remote `/balance` endpoint stays authoritative for the dashboard so
/// the service's rounding semantics win; this recomputation serves views
/// that already hold both collections. Full decimal precision, no rounding.
pub fn summarize(incomes: &[Income], expenses: &[Expense]) -> BalanceSummary {
    let ingresos: Decimal = incomes.iter().map(|income| income.monto).sum();
    let gastos: Decimal = expenses.iter().map(|expense| expense.monto).sum();
    BalanceSummary {
        ingresos,
        gastos,
        balance: ingresos - gastos,
    }
}

#[cfg(test)]
mod tests {
    use api_types::expense::ExpenseCategory;
    use chrono::{DateTime, FixedOffset};

    use super::*;

    fn fecha(raw: &str) -> DateTime<FixedOffset> {
        raw.parse().unwrap()
    }

    fn income(monto: Decimal) -> Income {
        Income {
            id: 1.into(),
            monto,
            description: String::new(),
            fecha: fecha("2024-01-01T00:00:00+00:00"),
        }
    }

    fn expense(monto: Decimal) -> Expense {
        Expense {
            id: 2.into(),
            monto,
            categoria: ExpenseCategory::Otros,
            description: String::new(),
            fecha: fecha("2024-01-02T00:00:00+00:00"),
        }
    }

    #[test]
    fn balance_is_ingresos_minus_gastos() {
        let summary = summarize(
            &[income(Decimal::new(100, 0))],
            &[expense(Decimal::new(40, 0))],
        );

        assert_eq!(summary.ingresos, Decimal::new(100, 0));
        assert_eq!(summary.gastos, Decimal::new(40, 0));
        assert_eq!(summary.balance, Decimal::new(60, 0));
        assert_eq!(summary.balance, summary.ingresos - summary.gastos);
    }

    #[test]
    fn empty_collections_sum_to_zero() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.ingresos, Decimal::ZERO);
        assert_eq!(summary.gastos, Decimal::ZERO);
        assert_eq!(summary.balance, Decimal::ZERO);
    }

    #[test]
    fn balance_may_be_negative() {
        let summary = summarize(
            &[income(Decimal::new(50, 0))],
            &[expense(Decimal::new(80, 0))],
        );
        assert_eq!(summary.balance, Decimal::new(-30, 0));
    }

    #[test]
    fn decimal_sums_do_not_drift() {
        let summary = summarize(
            &[income(Decimal::new(1, 1)), income(Decimal::new(2, 1))],
            &[],
        );
        assert_eq!(summary.ingresos, Decimal::new(3, 1));
    }
}
