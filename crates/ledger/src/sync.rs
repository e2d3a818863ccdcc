//! Mutation cycle against the remote store.
//!
//! Every write follows the same shape: `Idle -> InFlight -> Success ->
//! refetch -> Idle`, or `Idle -> InFlight -> Failure -> Idle`. On success the
//! full affected collection is refetched and swapped in wholesale; a local
//! delta is never applied. On failure the last-known-good copy stays exactly
//! as it was and the error names the failed action. There is no retry.

use api_types::{
    RecordId,
    expense::{Expense, ExpenseNew},
    income::{Income, IncomeNew},
    reminder::{Reminder, ReminderNew},
};
use thiserror::Error;

use crate::store::{LedgerStore, StoreError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    InFlight,
}

/// Last-known-good copy of one remote collection plus its mutation phase.
///
/// The copy has no lifecycle of its own: it is replaced wholesale on every
/// refetch, never patched in place.
#[derive(Debug)]
pub struct SyncedCollection<T> {
    items: Vec<T>,
    phase: Phase,
}

impl<T> Default for SyncedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Idle,
        }
    }
}

impl<T> SyncedCollection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` while a mutation cycle for this collection has not resolved.
    /// Views disable submission for the same logical action while busy.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::InFlight
    }

    /// Marks the collection in flight, rejecting overlapping mutations.
    pub fn begin(&mut self) -> Result<(), SyncError> {
        if self.is_busy() {
            return Err(SyncError::Busy);
        }
        self.phase = Phase::InFlight;
        Ok(())
    }

    /// Replaces the local copy wholesale (initial load or external refetch).
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }
}

/// State-changing operations, used to name failed actions in notices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationAction {
    CreateIncome,
    CreateExpense,
    CreateReminder,
    ToggleReminder,
    DeleteReminder,
}

impl MutationAction {
    /// User-facing notice for a failed attempt at this action.
    pub fn failure_notice(self) -> &'static str {
        match self {
            Self::CreateIncome => "No se pudo guardar el ingreso",
            Self::CreateExpense => "No se pudo guardar el gasto",
            Self::CreateReminder => "No se pudo guardar el recordatorio",
            Self::ToggleReminder => "No se pudo actualizar el estado",
            Self::DeleteReminder => "No se pudo eliminar el recordatorio",
        }
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    /// A mutation for the same collection is still in flight.
    #[error("operación en curso")]
    Busy,
    #[error("{}: {source}", .action.failure_notice())]
    Mutation {
        action: MutationAction,
        source: StoreError,
    },
}

/// Guarantees that, after any successful write, the dependent local copy is
/// refreshed from authoritative state.
#[derive(Debug)]
pub struct Reconciler<S> {
    store: S,
}

impl<S: LedgerStore> Reconciler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create_income(
        &self,
        incomes: &mut SyncedCollection<Income>,
        new: IncomeNew,
    ) -> Result<(), SyncError> {
        incomes.begin()?;
        let result = async {
            self.store.create_income(new).await?;
            self.store.incomes().await
        }
        .await;
        finish(incomes, MutationAction::CreateIncome, result)
    }

    pub async fn create_expense(
        &self,
        expenses: &mut SyncedCollection<Expense>,
        new: ExpenseNew,
    ) -> Result<(), SyncError> {
        expenses.begin()?;
        let result = async {
            self.store.create_expense(new).await?;
            self.store.expenses().await
        }
        .await;
        finish(expenses, MutationAction::CreateExpense, result)
    }

    pub async fn create_reminder(
        &self,
        reminders: &mut SyncedCollection<Reminder>,
        new: ReminderNew,
    ) -> Result<(), SyncError> {
        reminders.begin()?;
        let result = async {
            self.store.create_reminder(new).await?;
            self.store.reminders().await
        }
        .await;
        finish(reminders, MutationAction::CreateReminder, result)
    }

    /// Sends the negation of the locally displayed `completado` value.
    ///
    /// A toggle from another client between our read and this write is
    /// overridden by our intent; the refetch makes the outcome visible
    /// either way. Accepted race, not corrected.
    pub async fn toggle_reminder(
        &self,
        reminders: &mut SyncedCollection<Reminder>,
        id: &RecordId,
    ) -> Result<(), SyncError> {
        let current = match reminders.items.iter().find(|r| &r.id == id) {
            Some(reminder) => reminder.completado,
            None => {
                return Err(SyncError::Mutation {
                    action: MutationAction::ToggleReminder,
                    source: StoreError::NotFound(id.to_string()),
                });
            }
        };

        reminders.begin()?;
        let result = async {
            self.store.set_reminder_completed(id, !current).await?;
            self.store.reminders().await
        }
        .await;
        finish(reminders, MutationAction::ToggleReminder, result)
    }

    /// Deletes a reminder. The confirmation dialog is the caller's concern;
    /// this contract starts at confirmed intent.
    pub async fn delete_reminder(
        &self,
        reminders: &mut SyncedCollection<Reminder>,
        id: &RecordId,
    ) -> Result<(), SyncError> {
        reminders.begin()?;
        let result = async {
            self.store.delete_reminder(id).await?;
            self.store.reminders().await
        }
        .await;
        finish(reminders, MutationAction::DeleteReminder, result)
    }
}

fn finish<T>(
    collection: &mut SyncedCollection<T>,
    action: MutationAction,
    result: Result<Vec<T>, StoreError>,
) -> Result<(), SyncError> {
    collection.phase = Phase::Idle;
    match result {
        Ok(items) => {
            tracing::debug!(?action, count = items.len(), "refetched after mutation");
            collection.items = items;
            Ok(())
        }
        Err(source) => {
            tracing::warn!(?action, %source, "mutation failed, keeping last-good copy");
            Err(SyncError::Mutation { action, source })
        }
    }
}
