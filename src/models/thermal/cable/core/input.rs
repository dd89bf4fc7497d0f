//! Request records, one per calculation.

use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use super::{InputError, limits::MIN_DURATION_SECONDS, min_duration};

/// Sustained loading at a given ambient temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateInput {
    pub current: ElectricCurrent,
    pub ambient: ThermodynamicTemperature,
}

/// A step from `initial_current` (in steady state) to `emergency_current`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientInput {
    pub initial_current: ElectricCurrent,
    pub emergency_current: ElectricCurrent,
    pub duration: Time,
    pub ambient: ThermodynamicTemperature,

    /// Number of uniformly spaced samples over `[0, duration]`, at least 2.
    pub sample_count: usize,
}

/// How sample radii are spread between the conductor and the outer boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RadialSpacing {
    /// Geometric spacing, so thin inner layers are resolved next to wide soil.
    #[default]
    Logarithmic,
    Uniform,
}

/// Radial temperature profile request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialInput {
    pub current: ElectricCurrent,
    pub ambient: ThermodynamicTemperature,

    /// Number of sampled radii, at least 2.
    pub point_count: usize,
    pub spacing: RadialSpacing,
}

/// Emergency rating request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmergencyInput {
    pub initial_current: ElectricCurrent,
    pub duration: Time,
    pub max_temperature: ThermodynamicTemperature,
    pub ambient: ThermodynamicTemperature,
}

/// Returns the current in amperes if it is positive and finite.
pub(super) fn amperes(field: &'static str, value: ElectricCurrent) -> Result<f64, InputError> {
    let amps = value.get::<ampere>();
    if amps.is_finite() && amps > 0.0 {
        Ok(amps)
    } else {
        Err(InputError::Current { field, value })
    }
}

/// Returns the temperature in °C if it is finite.
pub(super) fn celsius(
    field: &'static str,
    value: ThermodynamicTemperature,
) -> Result<f64, InputError> {
    let celsius = value.get::<degree_celsius>();
    if celsius.is_finite() {
        Ok(celsius)
    } else {
        Err(InputError::NotFinite { field })
    }
}

/// Returns the duration in seconds if it is finite and not below the floor.
pub(super) fn duration_seconds(duration: Time) -> Result<f64, InputError> {
    let seconds = duration.get::<second>();
    if !seconds.is_finite() {
        return Err(InputError::NotFinite { field: "duration" });
    }
    if seconds < MIN_DURATION_SECONDS {
        return Err(InputError::DurationBelowMinimum {
            duration,
            minimum: min_duration(),
        });
    }
    Ok(seconds)
}

pub(super) fn point_count(field: &'static str, count: usize) -> Result<usize, InputError> {
    if count < 2 {
        return Err(InputError::TooFewPoints {
            field,
            count,
            minimum: 2,
        });
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::time::{hour, minute};

    #[test]
    fn currents_must_be_positive() {
        assert_eq!(
            amperes("current", ElectricCurrent::new::<ampere>(800.0)),
            Ok(800.0)
        );
        assert!(amperes("current", ElectricCurrent::new::<ampere>(0.0)).is_err());
        assert!(amperes("current", ElectricCurrent::new::<ampere>(f64::INFINITY)).is_err());
    }

    #[test]
    fn duration_floor_is_inclusive() {
        assert_eq!(duration_seconds(Time::new::<minute>(10.0)), Ok(600.0));
        assert!(matches!(
            duration_seconds(Time::new::<hour>(0.1)),
            Err(InputError::DurationBelowMinimum { .. })
        ));
        assert!(duration_seconds(Time::new::<hour>(f64::NAN)).is_err());
    }

    #[test]
    fn at_least_two_points() {
        assert_eq!(point_count("sample_count", 2), Ok(2));
        assert_eq!(
            point_count("sample_count", 1),
            Err(InputError::TooFewPoints {
                field: "sample_count",
                count: 1,
                minimum: 2
            })
        );
    }
}
