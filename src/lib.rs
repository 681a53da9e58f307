//! TUI Memory (workspace facade crate).
//!
//! Re-exports `tui_memory::{core,input,term,types}` from the crates under
//! `crates/` and adds the [`app::App`] glue used by the terminal binary.

pub mod app;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub use app::App;
