use api_types::{balance::BalanceSummary, expense::Expense, income::Income, reminder::Reminder};

use crate::store::{LedgerStore, StoreError};

/// One combined read of all four collections.
#[derive(Clone, Debug)]
pub struct LedgerSnapshot {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub reminders: Vec<Reminder>,
    pub balance: BalanceSummary,
}

/// Fetches the four collections concurrently and joins them fail-fast.
///
/// A single failed read fails the whole load; callers render a blocking
/// error state rather than a partially filled view.
pub async fn load_snapshot<S: LedgerStore>(store: &S) -> Result<LedgerSnapshot, StoreError> {
    let (incomes, expenses, balance, reminders) = tokio::try_join!(
        store.incomes(),
        store.expenses(),
        store.balance(),
        store.reminders(),
    )?;

    Ok(LedgerSnapshot {
        incomes,
        expenses,
        reminders,
        balance,
    })
}
