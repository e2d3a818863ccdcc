pub mod dashboard;
pub mod expenses;
pub mod incomes;
pub mod reminders;
