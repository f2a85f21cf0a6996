//! Error types for kernel construction and materialization.
//!
//! Lookup misses (absent neighbors, duplicate creation requests) are not
//! errors anywhere in the kernel; only configuration and cell-source failures
//! reach the caller.

use tui_gridworld_types::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid extent must be non-zero, got {width}x{height}")]
    EmptyExtent { width: u32, height: u32 },

    #[error("visibility radius must be at least 1")]
    ZeroRadius,

    #[error("visibility radius {radius} exceeds the maximum of {max}")]
    RadiusTooLarge { radius: u32, max: u32 },

    #[error("grid extent {width}x{height} exceeds the maximum of {max_cells} cells")]
    ExtentTooLarge {
        width: u32,
        height: u32,
        max_cells: usize,
    },

    #[error("scan margin {margin} exceeds visibility radius {radius}")]
    ScanMarginTooLarge { margin: u32, radius: u32 },

    #[error("{what} ratio must be at least 1 (one in N)")]
    ZeroRatio { what: &'static str },

    #[error("bounded grids need a Toroidal, Clamped or Truncated boundary")]
    UnboundedLife,

    #[error("boundary extent {boundary_width}x{boundary_height} does not match grid extent {width}x{height}")]
    ExtentMismatch {
        width: u32,
        height: u32,
        boundary_width: u32,
        boundary_height: u32,
    },

    #[error("eviction factor must be at least 1")]
    ZeroEvictionFactor,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to materialize cell {at}: {reason}")]
    Materialize { at: Coordinate, reason: String },

    #[error("operation requires {expected} mode, kernel is in {actual} mode")]
    WrongMode {
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T, E = KernelError> = std::result::Result<T, E>;
