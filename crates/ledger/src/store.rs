//! Contract of the remote ledger service, as consumed by the client.
//!
//! The service is the sole owner of all four collections. Implementations
//! issue one request per call and never cache: every list call returns the
//! full authoritative collection, which callers swap in wholesale.

use api_types::{
    RecordId,
    balance::BalanceSummary,
    expense::{Expense, ExpenseNew},
    income::{Income, IncomeNew},
    reminder::{Reminder, ReminderNew},
};
use thiserror::Error;

/// Remote-call failures, classified at the transport boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no encontrado: {0}")]
    NotFound(String),
    #[error("datos inválidos: {0}")]
    Validation(String),
    #[error("error del servidor: {0}")]
    Server(String),
    #[error("servidor no alcanzable: {0}")]
    Transport(String),
}

/// The four remote collections.
///
/// Creates return `()`: the authoritative row is only ever observed through
/// the post-mutation refetch, never through the create response.
#[allow(async_fn_in_trait)]
pub trait LedgerStore {
    async fn incomes(&self) -> Result<Vec<Income>, StoreError>;
    async fn create_income(&self, new: IncomeNew) -> Result<(), StoreError>;

    async fn expenses(&self) -> Result<Vec<Expense>, StoreError>;
    async fn create_expense(&self, new: ExpenseNew) -> Result<(), StoreError>;

    async fn reminders(&self) -> Result<Vec<Reminder>, StoreError>;
    async fn create_reminder(&self, new: ReminderNew) -> Result<(), StoreError>;
    async fn set_reminder_completed(
        &self,
        id: &RecordId,
        completado: bool,
    ) -> Result<(), StoreError>;
    async fn delete_reminder(&self, id: &RecordId) -> Result<(), StoreError>;

    async fn balance(&self) -> Result<BalanceSummary, StoreError>;
}
