//! Terminal "grid renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget/layout
//! frameworks and instead renders kernel snapshots into a simple framebuffer
//! that is diffed and flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable (views only read snapshots)
//! - Redraw only what changed between frames
//! - Allow precise control over aspect ratio (2 chars wide per grid cell)

pub mod fb;
pub mod life_view;
pub mod renderer;
pub mod view;
pub mod world_view;

pub use tui_gridworld_core as core;
pub use tui_gridworld_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use life_view::{LifeHud, LifeView};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{AnchorY, Viewport};
pub use world_view::{WorldHud, WorldView};
