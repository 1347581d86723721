//! Configuration module for the signal-scope application.

pub mod backend;

mod debug; // Private; forces files to use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use backend::{BACKEND, QUICK_TOKENS, QuickToken};
