//! nc-gui-consts: UI constant registry
//!
//! Named constants consumed by the UI layer, plus the two values that depend
//! on the environment (base URL and message duration), resolved once from an
//! environment snapshot.

pub mod config;
pub mod env;
pub mod registry;
pub mod vocabulary;
