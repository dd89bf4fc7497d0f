use thiserror::Error;
use uom::si::f64::{ElectricCurrent, Length, TemperatureInterval, ThermodynamicTemperature, Time};

use crate::support::constraint::ConstraintError;

/// Errors in cable data, raised when a spec or one of its parts is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// A field violated its numeric constraint.
    #[error("{field} is invalid")]
    Constraint {
        /// Name of the offending field.
        field: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// A field was infinite or `NaN`.
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    /// A cable must have between one and [`MAX_STAGES`](super::MAX_STAGES) thermal stages.
    #[error("expected 1 to {max} thermal stages, got {count}")]
    StageCount { count: usize, max: usize },

    /// A stage's outer radius is not larger than its inner radius.
    #[error("stage radii must increase outward: inner={inner:?}, outer={outer:?}")]
    NonIncreasingRadii { inner: Length, outer: Length },

    /// A stage does not start where the previous one ends.
    #[error("stage {stage} starts at {inner:?} but the previous stage ends at {previous_outer:?}")]
    Discontiguous {
        stage: usize,
        inner: Length,
        previous_outer: Length,
    },

    /// The ladder network has no physical step response.
    ///
    /// Only reachable through extreme parameter ratios where the eigenvalues
    /// of the network lose all precision.
    #[error("thermal network is degenerate")]
    DegenerateNetwork,
}

impl SpecError {
    pub(super) fn constraint(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Constraint { field, source }
    }
}

/// Errors in caller-supplied scalars.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A current was zero, negative or not finite.
    #[error("{field} must be positive and finite, got {value:?}")]
    Current {
        field: &'static str,
        value: ElectricCurrent,
    },

    /// A temperature or duration was not finite.
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    /// The duration is below the floor of the IEC 60853-2 method.
    #[error("duration {duration:?} is below the minimum of {minimum:?}")]
    DurationBelowMinimum { duration: Time, minimum: Time },

    /// Too few output points were requested.
    #[error("{field} must be at least {minimum}, got {count}")]
    TooFewPoints {
        field: &'static str,
        count: usize,
        minimum: usize,
    },

    /// The temperature limit does not exceed ambient.
    #[error("maximum temperature {max_temperature:?} must exceed ambient {ambient:?}")]
    LimitNotAboveAmbient {
        max_temperature: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
    },
}

/// Errors from the steady-state, transient and radial solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThermalError {
    /// The cable data is malformed.
    #[error("invalid cable description")]
    InvalidSpec(#[from] SpecError),

    /// The request violates its preconditions.
    #[error("invalid input")]
    InvalidInput(#[from] InputError),

    /// Losses grow faster with temperature than the cable can shed them.
    ///
    /// No steady state exists at or above `critical_current`.
    #[error("thermal runaway: {current:?} is not below the critical current {critical_current:?}")]
    ThermalRunaway {
        current: ElectricCurrent,
        critical_current: ElectricCurrent,
    },

    /// A transient sample moved against the direction of the current step.
    #[error("transient response reverses at sample {index} by {excursion:?}")]
    NonMonotonic {
        index: usize,
        excursion: TemperatureInterval,
    },

    /// The radial profile does not close on ambient at the outer boundary.
    #[error("radial profile ends {residual:?} away from ambient")]
    ProfileMismatch { residual: TemperatureInterval },
}
