use std::cell::{Cell, RefCell};

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;

use api_types::{
    RecordId,
    balance::BalanceSummary,
    expense::{Expense, ExpenseCategory, ExpenseNew},
    income::{Income, IncomeNew},
    reminder::{Reminder, ReminderNew},
};
use ledger::{LedgerStore, MutationAction, Reconciler, StoreError, SyncError, SyncedCollection};

/// In-memory stand-in for the remote service. Single-threaded interior
/// mutability is enough: the reconciler never spawns.
#[derive(Default)]
struct FakeStore {
    incomes: RefCell<Vec<Income>>,
    expenses: RefCell<Vec<Expense>>,
    reminders: RefCell<Vec<Reminder>>,
    next_id: Cell<i64>,
    fail_writes: Cell<bool>,
    fail_balance: Cell<bool>,
}

impl FakeStore {
    fn new() -> Self {
        let store = Self::default();
        store.next_id.set(100);
        store
    }

    fn allocate(&self) -> RecordId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        RecordId::Int(id)
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

impl LedgerStore for FakeStore {
    async fn incomes(&self) -> Result<Vec<Income>, StoreError> {
        Ok(self.incomes.borrow().clone())
    }

    async fn create_income(&self, new: IncomeNew) -> Result<(), StoreError> {
        self.check_write()?;
        self.incomes.borrow_mut().push(Income {
            id: self.allocate(),
            monto: new.monto,
            description: new.description,
            fecha: fecha("2024-06-01T12:00:00+00:00"),
        });
        Ok(())
    }

    async fn expenses(&self) -> Result<Vec<Expense>, StoreError> {
        Ok(self.expenses.borrow().clone())
    }

    async fn create_expense(&self, new: ExpenseNew) -> Result<(), StoreError> {
        self.check_write()?;
        self.expenses.borrow_mut().push(Expense {
            id: self.allocate(),
            monto: new.monto,
            categoria: new.categoria,
            description: new.description,
            fecha: fecha("2024-06-02T12:00:00+00:00"),
        });
        Ok(())
    }

    async fn reminders(&self) -> Result<Vec<Reminder>, StoreError> {
        Ok(self.reminders.borrow().clone())
    }

    async fn create_reminder(&self, new: ReminderNew) -> Result<(), StoreError> {
        self.check_write()?;
        self.reminders.borrow_mut().push(Reminder {
            id: self.allocate(),
            titulo: new.titulo,
            fecha: new.fecha,
            monto: new.monto,
            completado: new.completado,
        });
        Ok(())
    }

    async fn set_reminder_completed(
        &self,
        id: &RecordId,
        completado: bool,
    ) -> Result<(), StoreError> {
        self.check_write()?;
        let mut reminders = self.reminders.borrow_mut();
        let reminder = reminders
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        reminder.completado = completado;
        Ok(())
    }

    async fn delete_reminder(&self, id: &RecordId) -> Result<(), StoreError> {
        self.check_write()?;
        let mut reminders = self.reminders.borrow_mut();
        let before = reminders.len();
        reminders.retain(|r| &r.id != id);
        if reminders.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn balance(&self) -> Result<BalanceSummary, StoreError> {
        if self.fail_balance.get() {
            return Err(StoreError::Transport("connection refused".to_string()));
        }
        Ok(ledger::summarize(
            &self.incomes.borrow(),
            &self.expenses.borrow(),
        ))
    }
}

fn fecha(raw: &str) -> DateTime<FixedOffset> {
    raw.parse().unwrap()
}

fn dia(raw: &str) -> NaiveDate {
    raw.parse().unwrap()
}

fn reminder(id: i64, titulo: &str) -> Reminder {
    Reminder {
        id: id.into(),
        titulo: titulo.to_string(),
        fecha: dia("2024-03-01"),
        monto: None,
        completado: false,
    }
}

#[tokio::test]
async fn create_income_converges_through_refetch() {
    let reconciler = Reconciler::new(FakeStore::new());
    let mut incomes = SyncedCollection::default();

    reconciler
        .create_income(
            &mut incomes,
            IncomeNew {
                monto: Decimal::new(100, 0),
                description: "Salario".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(incomes.len(), 1);
    assert_eq!(incomes.items()[0].monto, Decimal::new(100, 0));
    assert!(!incomes.is_busy());
}

#[tokio::test]
async fn create_expense_converges_through_refetch() {
    let reconciler = Reconciler::new(FakeStore::new());
    let mut expenses = SyncedCollection::default();

    reconciler
        .create_expense(
            &mut expenses,
            ExpenseNew {
                monto: Decimal::new(40, 0),
                categoria: ExpenseCategory::Transporte,
                description: "Bus".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses.items()[0].categoria, ExpenseCategory::Transporte);
}

#[tokio::test]
async fn toggle_twice_restores_completado() {
    let reconciler = Reconciler::new(FakeStore::new());
    let mut reminders = SyncedCollection::default();

    reconciler
        .create_reminder(
            &mut reminders,
            ReminderNew::new("Pagar arriendo".to_string(), dia("2024-03-01"), None),
        )
        .await
        .unwrap();
    assert!(!reminders.items()[0].completado);

    let id = reminders.items()[0].id.clone();
    reconciler
        .toggle_reminder(&mut reminders, &id)
        .await
        .unwrap();
    assert!(reminders.items()[0].completado);

    reconciler
        .toggle_reminder(&mut reminders, &id)
        .await
        .unwrap();
    assert!(!reminders.items()[0].completado);
}

#[tokio::test]
async fn deleted_reminder_is_absent_after_refetch() {
    let store = FakeStore::new();
    store
        .reminders
        .borrow_mut()
        .extend([reminder(4, "Luz"), reminder(5, "Agua")]);
    let reconciler = Reconciler::new(store);

    let mut reminders = SyncedCollection::default();
    reminders.replace(reconciler.store().reminders().await.unwrap());

    let id = RecordId::Int(5);
    reconciler
        .delete_reminder(&mut reminders, &id)
        .await
        .unwrap();

    assert_eq!(reminders.len(), 1);
    assert!(reminders.items().iter().all(|r| r.id != id));
}

#[tokio::test]
async fn failed_toggle_leaves_collection_unchanged() {
    let store = FakeStore::new();
    store.reminders.borrow_mut().push(reminder(1, "Luz"));
    let reconciler = Reconciler::new(store);

    let mut reminders = SyncedCollection::default();
    reminders.replace(reconciler.store().reminders().await.unwrap());
    let before = reminders.items().to_vec();

    reconciler.store().fail_writes.set(true);
    let err = reconciler
        .toggle_reminder(&mut reminders, &RecordId::Int(1))
        .await
        .unwrap_err();

    match err {
        SyncError::Mutation { action, .. } => {
            assert_eq!(action, MutationAction::ToggleReminder);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(reminders.items(), before.as_slice());
    assert!(!reminders.is_busy());
}

#[tokio::test]
async fn failed_create_raises_notice_naming_the_action() {
    let store = FakeStore::new();
    store.fail_writes.set(true);
    let reconciler = Reconciler::new(store);

    let mut incomes = SyncedCollection::default();
    let err = reconciler
        .create_income(
            &mut incomes,
            IncomeNew {
                monto: Decimal::new(10, 0),
                description: String::new(),
            },
        )
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No se pudo guardar el ingreso"));
    assert!(incomes.is_empty());
    assert!(!incomes.is_busy());
}

#[tokio::test]
async fn busy_collection_rejects_a_second_mutation() {
    let store = FakeStore::new();
    store.reminders.borrow_mut().push(reminder(1, "Luz"));
    let reconciler = Reconciler::new(store);

    let mut reminders = SyncedCollection::default();
    reminders.replace(reconciler.store().reminders().await.unwrap());

    reminders.begin().unwrap();
    let err = reconciler
        .toggle_reminder(&mut reminders, &RecordId::Int(1))
        .await
        .unwrap_err();

    assert!(matches!(err, SyncError::Busy));
    // The store never saw the second attempt.
    assert!(!reconciler.store().reminders.borrow()[0].completado);
}

#[tokio::test]
async fn toggle_unknown_id_reports_not_found() {
    let reconciler = Reconciler::new(FakeStore::new());
    let mut reminders = SyncedCollection::<Reminder>::default();

    let err = reconciler
        .toggle_reminder(&mut reminders, &RecordId::Int(9))
        .await
        .unwrap_err();

    match err {
        SyncError::Mutation {
            action,
            source: StoreError::NotFound(_),
        } => assert_eq!(action, MutationAction::ToggleReminder),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!reminders.is_busy());
}

#[tokio::test]
async fn snapshot_joins_all_four_collections() {
    let store = FakeStore::new();
    store.incomes.borrow_mut().push(Income {
        id: 1.into(),
        monto: Decimal::new(100, 0),
        description: "Salario".to_string(),
        fecha: fecha("2024-01-01T00:00:00+00:00"),
    });
    store.expenses.borrow_mut().push(Expense {
        id: 2.into(),
        monto: Decimal::new(40, 0),
        categoria: ExpenseCategory::Comida,
        description: "Mercado".to_string(),
        fecha: fecha("2024-01-02T00:00:00+00:00"),
    });
    store.reminders.borrow_mut().push(reminder(3, "Luz"));

    let snapshot = ledger::load_snapshot(&store).await.unwrap();

    assert_eq!(snapshot.incomes.len(), 1);
    assert_eq!(snapshot.expenses.len(), 1);
    assert_eq!(snapshot.reminders.len(), 1);
    assert_eq!(snapshot.balance.balance, Decimal::new(60, 0));
    assert_eq!(
        snapshot.balance.balance,
        snapshot.balance.ingresos - snapshot.balance.gastos
    );

    let movements = ledger::aggregate(&snapshot.incomes, &snapshot.expenses);
    assert_eq!(movements.len(), 2);
    assert_eq!(movements[0].kind, ledger::MovementKind::Gasto);
}

#[tokio::test]
async fn snapshot_load_fails_fast_when_any_read_fails() {
    let store = FakeStore::new();
    store.incomes.borrow_mut().push(Income {
        id: 1.into(),
        monto: Decimal::new(100, 0),
        description: String::new(),
        fecha: fecha("2024-01-01T00:00:00+00:00"),
    });
    store.fail_balance.set(true);

    let err = ledger::load_snapshot(&store).await.unwrap_err();
    assert!(matches!(err, StoreError::Transport(_)));
}
