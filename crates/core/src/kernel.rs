//! One interface over both simulation modes.

use crate::config::KernelConfig;
use crate::error::{KernelError, Result};
use crate::life::{LifeKernel, StepReport};
use crate::store::GridStore;
use crate::types::Coordinate;
use crate::world::{RecenterOutcome, WorldKernel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Bounded automaton driven by `step()`
    Life,
    /// Unbounded streaming world driven by `recenter()`
    World,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Life => "life",
            Mode::World => "world",
        }
    }
}

#[derive(Debug, Clone)]
pub enum SimulationKernel {
    Life(LifeKernel),
    World(WorldKernel),
}

impl SimulationKernel {
    pub fn from_config(config: impl Into<KernelConfig>) -> Result<Self> {
        match config.into() {
            KernelConfig::Life(c) => Ok(SimulationKernel::Life(LifeKernel::new(c)?)),
            KernelConfig::World(c) => Ok(SimulationKernel::World(WorldKernel::new(c)?)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            SimulationKernel::Life(_) => Mode::Life,
            SimulationKernel::World(_) => Mode::World,
        }
    }

    /// Advance the bounded automaton one generation.
    pub fn step(&mut self) -> Result<StepReport> {
        match self {
            SimulationKernel::Life(k) => Ok(k.step()),
            SimulationKernel::World(_) => Err(self.wrong_mode(Mode::Life)),
        }
    }

    /// Move the streaming world's focal point.
    pub fn recenter(&mut self, focus: Coordinate) -> Result<RecenterOutcome> {
        match self {
            SimulationKernel::World(k) => k.recenter(focus),
            SimulationKernel::Life(_) => Err(self.wrong_mode(Mode::World)),
        }
    }

    pub fn store(&self) -> &GridStore {
        match self {
            SimulationKernel::Life(k) => k.store(),
            SimulationKernel::World(k) => k.store(),
        }
    }

    /// Only the streaming world can end a session.
    pub fn is_game_over(&self) -> bool {
        match self {
            SimulationKernel::Life(_) => false,
            SimulationKernel::World(k) => k.is_game_over(),
        }
    }

    pub fn as_life(&self) -> Option<&LifeKernel> {
        match self {
            SimulationKernel::Life(k) => Some(k),
            SimulationKernel::World(_) => None,
        }
    }

    pub fn as_world(&self) -> Option<&WorldKernel> {
        match self {
            SimulationKernel::World(k) => Some(k),
            SimulationKernel::Life(_) => None,
        }
    }

    fn wrong_mode(&self, expected: Mode) -> KernelError {
        KernelError::WrongMode {
            expected: expected.as_str(),
            actual: self.mode().as_str(),
        }
    }
}

impl From<LifeKernel> for SimulationKernel {
    fn from(value: LifeKernel) -> Self {
        SimulationKernel::Life(value)
    }
}

impl From<WorldKernel> for SimulationKernel {
    fn from(value: WorldKernel) -> Self {
        SimulationKernel::World(value)
    }
}
