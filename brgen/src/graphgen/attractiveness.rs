//! Attractiveness parameter `a` of the attachment law and its per-step schedule.

use crate::core::utils::errors::ConfigError;

/// Attractiveness of the classic Bollobás–Riordan model, where `w(i) = deg(i) / (2n - 1)`.
pub const BOLLOBAS_RIORDAN_ATTRACTIVENESS: f64 = 1.0;
pub const DEFAULT_ATTRACTIVENESS: f64 = 0.47;
pub const DEFAULT_SWEEP_START: f64 = 1.0;
pub const DEFAULT_SWEEP_FLOOR: f64 = 0.47;
pub const DEFAULT_SWEEP_STEP: f64 = 0.01;

/// How `a` evolves over the steps of one growth run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attractiveness {
    /// The same `a` for every step (Bollobás–Riordan, Buckley–Osthus)
    Constant(f64),
    /// Starts at `start` and is lowered by `step` after every draw, never going below `floor`
    Sweep { start: f64, floor: f64, step: f64 },
}

impl Attractiveness {
    pub fn bollobas_riordan() -> Self {
        Attractiveness::Constant(BOLLOBAS_RIORDAN_ATTRACTIVENESS)
    }

    pub fn constant(a: f64) -> Result<Self, ConfigError> {
        if a.is_finite() && a > 0.0 {
            Ok(Attractiveness::Constant(a))
        } else {
            Err(ConfigError::InvalidAttractiveness(a))
        }
    }

    pub fn sweep(start: f64, floor: f64, step: f64) -> Result<Self, ConfigError> {
        let valid = start.is_finite()
            && floor.is_finite()
            && step.is_finite()
            && floor > 0.0
            && start >= floor
            && step >= 0.0;
        if valid {
            Ok(Attractiveness::Sweep { start, floor, step })
        } else {
            Err(ConfigError::InvalidSweep { start, floor, step })
        }
    }

    /// Re-checks a schedule built from the public variants.
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Attractiveness::Constant(a) => Self::constant(a),
            Attractiveness::Sweep { start, floor, step } => Self::sweep(start, floor, step),
        }
    }

    /// Value used for the first step
    pub fn initial(&self) -> f64 {
        match *self {
            Attractiveness::Constant(a) => a,
            Attractiveness::Sweep { start, .. } => start,
        }
    }

    /// Value for the step following one that used `current`.
    pub fn advance(&self, current: f64) -> f64 {
        match *self {
            Attractiveness::Constant(a) => a,
            Attractiveness::Sweep { floor, step, .. } => (current - step).max(floor),
        }
    }
}

impl Default for Attractiveness {
    fn default() -> Self {
        Attractiveness::Constant(DEFAULT_ATTRACTIVENESS)
    }
}
