//! Terminal input module (kernel-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::WorldAction`] /
//! [`crate::types::LifeAction`] and provides a held-direction repeat handler
//! that accumulates the next focal coordinate (including terminals without
//! key-release events). The kernel never sees raw key events.

pub mod handler;
pub mod map;

pub use tui_gridworld_types as types;

pub use handler::FocusInput;
pub use map::{direction_of, life_action, should_quit, world_action};
