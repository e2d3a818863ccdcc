pub use balance::summarize;
pub use movement::{Movement, MovementKind, aggregate, recent};
pub use snapshot::{LedgerSnapshot, load_snapshot};
pub use store::{LedgerStore, StoreError};
pub use sync::{MutationAction, Phase, Reconciler, SyncError, SyncedCollection};

mod balance;
mod movement;
mod snapshot;
mod store;
mod sync;
