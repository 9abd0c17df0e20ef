//! The persistent-store collaborator.
//!
//! The reconciliation core never talks to a database directly; it sees
//! this trait: natural-key lookups, one transactional [`WriteBatch`]
//! applied per import, and enumeration of legacy tables. The in-memory
//! implementation backs tests and the CLI's JSON store file.

mod batch;
mod error;
mod file;
mod memory;
mod store;

pub use batch::WriteBatch;
pub use error::{Result, StoreError};
pub use file::{load_store, save_store};
pub use memory::MemoryStore;
pub use store::{ClubStore, RawTable};
