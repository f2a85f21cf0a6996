//! Kernel configuration - everything consumed at construction
//!
//! Every constructor validates its config first and fails fast with a
//! [`ConfigError`]; a kernel that exists is always well-formed.

use crate::boundary::BoundaryPolicy;
use crate::error::ConfigError;
use crate::rng::HazardRatio;
use crate::types::{
    Coordinate, Extent, DEFAULT_HAZARD_ONE_IN, DEFAULT_LIFE_EXTENT, DEFAULT_LIFE_SEED_ONE_IN,
    DEFAULT_SCAN_MARGIN, DEFAULT_SEED, DEFAULT_VISIBLE_RADIUS, MAX_LIFE_CELLS, MAX_VISIBLE_RADIUS,
};

/// Distance-from-focus eviction of materialized cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Never evict (cells live as long as the store).
    #[default]
    Disabled,
    /// After each recenter, drop cells farther than `radius * factor` from
    /// the focus (Chebyshev distance).
    Distance { factor: u32 },
}

impl EvictionPolicy {
    /// Keep-distance for a window radius, `None` when disabled.
    pub fn keep_distance(&self, radius: u32) -> Option<u32> {
        match *self {
            EvictionPolicy::Disabled => None,
            EvictionPolicy::Distance { factor } => Some(radius.saturating_mul(factor)),
        }
    }
}

/// Bounded automaton configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub extent: Extent,
    pub boundary: BoundaryPolicy,
    pub seed: u64,
    /// Initial alive probability, one in N.
    pub seed_one_in: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        let extent = Extent::square(DEFAULT_LIFE_EXTENT);
        Self {
            extent,
            boundary: BoundaryPolicy::Toroidal(extent),
            seed: DEFAULT_SEED,
            seed_one_in: DEFAULT_LIFE_SEED_ONE_IN,
        }
    }
}

impl LifeConfig {
    /// Square grid with a toroidal boundary.
    pub fn new(side: u32) -> Self {
        let extent = Extent::square(side);
        Self {
            extent,
            boundary: BoundaryPolicy::Toroidal(extent),
            ..Self::default()
        }
    }

    /// Replace the grid extent, keeping the boundary kind.
    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = extent;
        self.boundary = match self.boundary {
            BoundaryPolicy::Clamped(_) => BoundaryPolicy::Clamped(extent),
            BoundaryPolicy::Truncated(_) => BoundaryPolicy::Truncated(extent),
            _ => BoundaryPolicy::Toroidal(extent),
        };
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_seed_one_in(mut self, one_in: u32) -> Self {
        self.seed_one_in = one_in;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extent.is_empty() {
            return Err(ConfigError::EmptyExtent {
                width: self.extent.width,
                height: self.extent.height,
            });
        }
        let side_fits = |v: u32| i32::try_from(v).is_ok();
        let (w, h) = (self.extent.width, self.extent.height);
        if !side_fits(w) || !side_fits(h) || self.extent.area() > MAX_LIFE_CELLS {
            return Err(ConfigError::ExtentTooLarge {
                width: w,
                height: h,
                max_cells: MAX_LIFE_CELLS,
            });
        }
        if self.seed_one_in == 0 {
            return Err(ConfigError::ZeroRatio { what: "initial alive" });
        }
        let boundary = self.boundary.extent().ok_or(ConfigError::UnboundedLife)?;
        if boundary != self.extent {
            return Err(ConfigError::ExtentMismatch {
                width: self.extent.width,
                height: self.extent.height,
                boundary_width: boundary.width,
                boundary_height: boundary.height,
            });
        }
        Ok(())
    }
}

/// Streaming world configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldConfig {
    /// Window radius around the focal point.
    pub radius: u32,
    /// The proximity scan covers `radius - scan_margin`.
    pub scan_margin: u32,
    /// Hazard probability, one in N.
    pub hazard_one_in: u32,
    pub seed: u64,
    /// Initial focal point.
    pub start: Coordinate,
    /// Force the start cell to be hazard-free.
    pub safe_start: bool,
    pub eviction: EvictionPolicy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_VISIBLE_RADIUS,
            scan_margin: DEFAULT_SCAN_MARGIN,
            hazard_one_in: DEFAULT_HAZARD_ONE_IN,
            seed: DEFAULT_SEED,
            start: Coordinate::ORIGIN,
            safe_start: true,
            eviction: EvictionPolicy::Disabled,
        }
    }
}

impl WorldConfig {
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_scan_margin(mut self, margin: u32) -> Self {
        self.scan_margin = margin;
        self
    }

    pub fn with_hazard_one_in(mut self, one_in: u32) -> Self {
        self.hazard_one_in = one_in;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_start(mut self, start: Coordinate) -> Self {
        self.start = start;
        self
    }

    pub fn with_safe_start(mut self, safe_start: bool) -> Self {
        self.safe_start = safe_start;
        self
    }

    pub fn with_eviction(mut self, eviction: EvictionPolicy) -> Self {
        self.eviction = eviction;
        self
    }

    pub fn scan_radius(&self) -> u32 {
        self.radius.saturating_sub(self.scan_margin)
    }

    pub fn hazard(&self) -> HazardRatio {
        HazardRatio::one_in(self.hazard_one_in)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius == 0 {
            return Err(ConfigError::ZeroRadius);
        }
        if self.radius > MAX_VISIBLE_RADIUS {
            return Err(ConfigError::RadiusTooLarge {
                radius: self.radius,
                max: MAX_VISIBLE_RADIUS,
            });
        }
        if self.scan_margin > self.radius {
            return Err(ConfigError::ScanMarginTooLarge {
                margin: self.scan_margin,
                radius: self.radius,
            });
        }
        if self.hazard_one_in == 0 {
            return Err(ConfigError::ZeroRatio { what: "hazard" });
        }
        if let EvictionPolicy::Distance { factor: 0 } = self.eviction {
            return Err(ConfigError::ZeroEvictionFactor);
        }
        Ok(())
    }
}

/// Mode-tagged configuration for [`SimulationKernel`](crate::SimulationKernel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelConfig {
    Life(LifeConfig),
    World(WorldConfig),
}

impl KernelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            KernelConfig::Life(c) => c.validate(),
            KernelConfig::World(c) => c.validate(),
        }
    }
}

impl From<LifeConfig> for KernelConfig {
    fn from(value: LifeConfig) -> Self {
        KernelConfig::Life(value)
    }
}

impl From<WorldConfig> for KernelConfig {
    fn from(value: WorldConfig) -> Self {
        KernelConfig::World(value)
    }
}
