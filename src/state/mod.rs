//! State Management
//!
//! Global application state and the persistent session store.

pub mod global;
pub mod session;

pub use global::{provide_global_state, Blog, Comment, GlobalState};
