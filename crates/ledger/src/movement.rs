use api_types::{
    RecordId,
    expense::{Expense, ExpenseCategory},
    income::Income,
};
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

/// Origin collection of a [`Movement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementKind {
    Ingreso,
    Gasto,
}

impl MovementKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ingreso => "Ingreso",
            Self::Gasto => "Gasto",
        }
    }

    /// Sign shown next to the amount in movement lists.
    pub fn sign(self) -> char {
        match self {
            Self::Ingreso => '+',
            Self::Gasto => '-',
        }
    }
}

/// A unified view of either an income or an expense, tagged with its origin.
///
/// Movements are derived on demand from the two fetched collections and
/// exist only for display ordering; they are never persisted or sent back to
/// the service.
#[derive(Clone, Debug, PartialEq)]
pub struct Movement {
    pub id: RecordId,
    pub kind: MovementKind,
    pub monto: Decimal,
    pub description: String,
    /// Set for expenses only.
    pub categoria: Option<ExpenseCategory>,
    pub fecha: DateTime<FixedOffset>,
}

impl From<&Income> for Movement {
    fn from(income: &Income) -> Self {
        Self {
            id: income.id.clone(),
            kind: MovementKind::Ingreso,
            monto: income.monto,
            description: income.description.clone(),
            categoria: None,
            fecha: income.fecha,
        }
    }
}

impl From<&Expense> for Movement {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.clone(),
            kind: MovementKind::Gasto,
            monto: expense.monto,
            description: expense.description.clone(),
            categoria: Some(expense.categoria),
            fecha: expense.fecha,
        }
    }
}

/// Merges the two collections into a single feed sorted by `fecha`
/// descending (most recent first).
///
/// Equal dates keep their input order: incomes before expenses, each in the
/// order the service returned them (stable sort).
pub fn aggregate(incomes: &[Income], expenses: &[Expense]) -> Vec<Movement> {
    let mut movements: Vec<Movement> = incomes
        .iter()
        .map(Movement::from)
        .chain(expenses.iter().map(Movement::from))
        .collect();
    movements.sort_by(|a, b| b.fecha.cmp(&a.fecha));
    movements
}

/// First `n` elements of an already aggregated feed.
pub fn recent(movements: &[Movement], n: usize) -> &[Movement] {
    &movements[..movements.len().min(n)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn fecha(raw: &str) -> DateTime<FixedOffset> {
        raw.parse().unwrap()
    }

    fn income(id: i64, monto: i64, raw_fecha: &str) -> Income {
        Income {
            id: id.into(),
            monto: Decimal::new(monto, 0),
            description: format!("ingreso {id}"),
            fecha: fecha(raw_fecha),
        }
    }

    fn expense(id: i64, monto: i64, raw_fecha: &str) -> Expense {
        Expense {
            id: id.into(),
            monto: Decimal::new(monto, 0),
            categoria: ExpenseCategory::Comida,
            description: format!("gasto {id}"),
            fecha: fecha(raw_fecha),
        }
    }

    #[test]
    fn aggregate_merges_and_sorts_descending() {
        let incomes = vec![income(1, 100, "2024-01-01T00:00:00+00:00")];
        let expenses = vec![expense(2, 40, "2024-01-02T00:00:00+00:00")];

        let movements = aggregate(&incomes, &expenses);

        assert_eq!(movements.len(), 2);
        assert_eq!(movements[0].kind, MovementKind::Gasto);
        assert_eq!(movements[0].monto, Decimal::new(40, 0));
        assert_eq!(movements[1].kind, MovementKind::Ingreso);
        assert_eq!(movements[1].monto, Decimal::new(100, 0));
        assert!(movements[0].fecha >= movements[1].fecha);
    }

    #[test]
    fn aggregate_length_is_sum_of_inputs() {
        let incomes = vec![
            income(1, 10, "2024-03-05T09:00:00+00:00"),
            income(2, 20, "2024-02-01T12:00:00+00:00"),
        ];
        let expenses = vec![
            expense(3, 5, "2024-01-15T08:30:00+00:00"),
            expense(4, 7, "2024-04-01T10:00:00+00:00"),
            expense(5, 9, "2024-03-20T18:00:00+00:00"),
        ];

        let movements = aggregate(&incomes, &expenses);

        assert_eq!(movements.len(), incomes.len() + expenses.len());
        for pair in movements.windows(2) {
            assert!(pair[0].fecha >= pair[1].fecha);
        }
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let same = "2024-01-01T00:00:00+00:00";
        let incomes = vec![income(1, 10, same), income(2, 20, same)];
        let expenses = vec![expense(3, 5, same)];

        let movements = aggregate(&incomes, &expenses);

        let ids: Vec<String> = movements.iter().map(|m| m.id.to_string()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn tagging_is_total_and_consistent_with_origin() {
        let incomes = vec![income(1, 10, "2024-01-03T00:00:00+00:00")];
        let expenses = vec![expense(2, 5, "2024-01-04T00:00:00+00:00")];

        let movements = aggregate(&incomes, &expenses);

        assert!(movements.iter().all(|m| match m.kind {
            MovementKind::Ingreso => m.categoria.is_none(),
            MovementKind::Gasto => m.categoria.is_some(),
        }));
        assert_eq!(MovementKind::Ingreso.label(), "Ingreso");
        assert_eq!(MovementKind::Gasto.label(), "Gasto");
    }

    #[test]
    fn empty_inputs_are_not_an_error() {
        assert!(aggregate(&[], &[]).is_empty());

        let incomes = vec![income(1, 10, "2024-01-01T00:00:00+00:00")];
        let movements = aggregate(&incomes, &[]);
        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].kind, MovementKind::Ingreso);
    }

    #[test]
    fn recent_is_a_prefix_of_at_most_n() {
        let incomes: Vec<Income> = (0..4)
            .map(|i| income(i, 10, "2024-01-01T00:00:00+00:00"))
            .collect();
        let movements = aggregate(&incomes, &[]);

        assert_eq!(recent(&movements, 5).len(), 4);
        let top = recent(&movements, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top, &movements[..2]);
    }
}
