//! Environment-driven configuration for the binaries.
//!
//! Missing or unparsable variables fall back to the defaults; validation of
//! the resulting config is left to the kernel constructors so a bad
//! combination (e.g. radius 0) fails fast with a [`crate::core::ConfigError`].

use crate::core::{BoundaryPolicy, EvictionPolicy, LifeConfig, WorldConfig};
use crate::types::Extent;

/// Streaming world settings from `GRIDWORLD_*`.
pub fn world_config_from_env() -> WorldConfig {
    world_config_from(|key| std::env::var(key).ok())
}

/// Bounded automaton settings from `GRIDLIFE_*` and `GRIDWORLD_SEED`.
pub fn life_config_from_env() -> LifeConfig {
    life_config_from(|key| std::env::var(key).ok())
}

pub fn world_config_from(lookup: impl Fn(&str) -> Option<String>) -> WorldConfig {
    let mut config = WorldConfig::default();
    if let Some(seed) = parsed(&lookup, "GRIDWORLD_SEED") {
        config = config.with_seed(seed);
    }
    if let Some(radius) = parsed(&lookup, "GRIDWORLD_RADIUS") {
        config = config.with_radius(radius);
        // Keep the default inset legal for small radii.
        config.scan_margin = config.scan_margin.min(radius);
    }
    if let Some(one_in) = parsed(&lookup, "GRIDWORLD_HAZARD_ONE_IN") {
        config = config.with_hazard_one_in(one_in);
    }
    match parsed::<u32>(&lookup, "GRIDWORLD_EVICT_FACTOR") {
        Some(0) | None => {}
        Some(factor) => config = config.with_eviction(EvictionPolicy::Distance { factor }),
    }
    config
}

pub fn life_config_from(lookup: impl Fn(&str) -> Option<String>) -> LifeConfig {
    let mut config = LifeConfig::default();
    if let Some(extent) = lookup("GRIDLIFE_EXTENT").and_then(|s| parse_extent(&s)) {
        config = config.with_extent(extent);
    }
    if let Some(boundary) = lookup("GRIDLIFE_BOUNDARY")
        .and_then(|s| BoundaryPolicy::parse_bounded(s.trim(), config.extent))
    {
        config = config.with_boundary(boundary);
    }
    if let Some(seed) = parsed(&lookup, "GRIDWORLD_SEED") {
        config = config.with_seed(seed);
    }
    config
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

/// `"N"` for a square grid or `"WxH"`.
fn parse_extent(s: &str) -> Option<Extent> {
    let s = s.trim();
    match s.split_once(['x', 'X']) {
        Some((w, h)) => Some(Extent::new(w.trim().parse().ok()?, h.trim().parse().ok()?)),
        None => s.parse().ok().map(Extent::square),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_SEED, DEFAULT_VISIBLE_RADIUS};

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(world_config_from(env(&[])), WorldConfig::default());
        assert_eq!(life_config_from(env(&[])), LifeConfig::default());
    }

    #[test]
    fn world_variables_are_applied() {
        let cfg = world_config_from(env(&[
            ("GRIDWORLD_SEED", "42"),
            ("GRIDWORLD_RADIUS", "1"),
            ("GRIDWORLD_HAZARD_ONE_IN", "5"),
            ("GRIDWORLD_EVICT_FACTOR", "3"),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.radius, 1);
        assert_eq!(cfg.scan_margin, 1);
        assert_eq!(cfg.hazard_one_in, 5);
        assert_eq!(cfg.eviction, EvictionPolicy::Distance { factor: 3 });
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = world_config_from(env(&[
            ("GRIDWORLD_SEED", "not-a-number"),
            ("GRIDWORLD_RADIUS", "-4"),
            ("GRIDWORLD_EVICT_FACTOR", "0"),
        ]));
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert_eq!(cfg.radius, DEFAULT_VISIBLE_RADIUS);
        assert_eq!(cfg.eviction, EvictionPolicy::Disabled);
    }

    #[test]
    fn life_extent_and_boundary() {
        let cfg = life_config_from(env(&[
            ("GRIDLIFE_EXTENT", "40x20"),
            ("GRIDLIFE_BOUNDARY", "clamp"),
        ]));
        assert_eq!(cfg.extent, Extent::new(40, 20));
        assert_eq!(cfg.boundary, BoundaryPolicy::Clamped(Extent::new(40, 20)));
        assert!(cfg.validate().is_ok());

        let square = life_config_from(env(&[
            ("GRIDLIFE_EXTENT", "16"),
            ("GRIDLIFE_BOUNDARY", "bogus"),
        ]));
        assert_eq!(square.boundary, BoundaryPolicy::Toroidal(Extent::square(16)));
    }

    #[test]
    fn zero_radius_is_left_for_validation() {
        let cfg = world_config_from(env(&[("GRIDWORLD_RADIUS", "0")]));
        assert!(cfg.validate().is_err());
    }
}
