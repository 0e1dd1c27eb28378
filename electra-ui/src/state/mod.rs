//! State Management
//!
//! Global reactive state and the `localStorage` backed session store.

pub mod global;
pub mod storage;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use storage::LocalStore;
