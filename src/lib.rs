//! TUI Gridworld (workspace facade crate).
//!
//! Re-exports the member crates under `tui_gridworld::{core,input,term,types}`
//! and hosts the pieces shared by both binaries: logger setup and
//! environment-driven configuration.

pub mod logging;
pub mod settings;

pub use tui_gridworld_core as core;
pub use tui_gridworld_input as input;
pub use tui_gridworld_term as term;
pub use tui_gridworld_types as types;
