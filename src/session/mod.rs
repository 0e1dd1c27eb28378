//! Session
//!
//! Authentication and role state, derived once from persisted storage and
//! passed explicitly to the router and to every view.
//!
//! - [`Session`]: the two facts the router cares about
//! - [`SessionContext`]: token and profile keys for views and the API client
//! - [`KeyValueStore`]: persisted storage seam (memory, file, `localStorage`)

mod context;
#[cfg(feature = "native")]
mod file_store;
mod role;
mod store;

pub use context::{clear_session, Session, SessionContext};
#[cfg(feature = "native")]
pub use file_store::{FileStore, STORE_FILE_NAME};
pub use role::{Role, UnknownRole};
pub use store::{keys, KeyValueStore, MemoryStore, StoreError};
