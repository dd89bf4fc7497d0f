//! Result records returned by the cable solvers.

use uom::si::f64::{ElectricCurrent, Length, TemperatureInterval, ThermodynamicTemperature, Time};

use crate::support::units::LinearPowerDensity;

use super::Layer;

/// Steady conductor state under a sustained current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateResult {
    /// Conductor temperature.
    pub temperature: ThermodynamicTemperature,

    /// Rise of the conductor above ambient.
    pub temperature_rise: TemperatureInterval,

    /// Joule losses at the solved temperature.
    pub losses: LinearPowerDensity,
}

/// One point of a transient response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientSample {
    /// Time since the current step.
    pub time: Time,
    pub temperature: ThermodynamicTemperature,
}

/// Conductor temperature after a step change in current.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientResult {
    /// Samples ordered by time, from the step to the end of the duration.
    pub samples: Vec<TransientSample>,

    /// Steady temperature at the initial current.
    pub initial_temperature: ThermodynamicTemperature,

    /// Steady temperature the response tends to at the emergency current.
    pub target_temperature: ThermodynamicTemperature,
}

impl TransientResult {
    /// Temperature at the end of the duration.
    #[must_use]
    pub fn final_temperature(&self) -> ThermodynamicTemperature {
        self.samples
            .last()
            .map_or(self.initial_temperature, |sample| sample.temperature)
    }

    /// Highest sampled temperature.
    #[must_use]
    pub fn peak_temperature(&self) -> ThermodynamicTemperature {
        self.samples
            .iter()
            .map(|sample| sample.temperature)
            .fold(self.initial_temperature, |peak, t| if t > peak { t } else { peak })
    }
}

/// One point of a radial profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSample {
    pub radius: Length,
    pub temperature: ThermodynamicTemperature,

    /// Index of the stage the radius falls in.
    pub stage: usize,
    pub layer: Layer,
}

/// Temperature at an interface between stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerBoundary {
    pub radius: Length,
    pub temperature: ThermodynamicTemperature,
}

/// Steady temperature through the cable and its surroundings.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialResult {
    /// Samples ordered from the conductor outward.
    pub samples: Vec<RadialSample>,

    /// The conductor surface, every interface and the ambient boundary.
    pub boundaries: Vec<LayerBoundary>,

    pub conductor_temperature: ThermodynamicTemperature,
    pub losses: LinearPowerDensity,
}

/// Largest current the cable can carry for an emergency of given duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmergencyRating {
    pub emergency_current: ElectricCurrent,
    pub initial_current: ElectricCurrent,

    /// `emergency_current / initial_current`.
    pub scaling_factor: f64,

    /// Steady temperature at the initial current.
    pub initial_temperature: ThermodynamicTemperature,

    /// Temperature at the end of the emergency.
    pub final_temperature: ThermodynamicTemperature,

    /// Whether the scaling factor lies within the range IEC 60853-2 is
    /// validated for.
    ///
    /// Ratings outside it are still returned, but should be treated as
    /// extrapolations.
    pub within_iec_limit: bool,

    /// Bisection iterations spent; zero when the initial current already
    /// meets the limit.
    pub iterations: usize,
}
