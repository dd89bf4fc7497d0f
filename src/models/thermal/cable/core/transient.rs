//! Conductor temperature after a step change in current.
//!
//! The cable starts in steady state at the initial current. After the step the
//! conductor moves towards the steady temperature at the emergency current,
//! and the outstanding part of that move decays with the network's
//! [attenuation](ThermalNetwork::attenuation):
//!
//! ```text
//! T(t) = T_final − (T_final − T_initial) α(t)
//! ```
//!
//! Both end points account for the temperature dependence of the conductor
//! resistance; the response between them follows the ladder.

use uom::si::{
    f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature, Time},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use super::{
    CableThermalSpec, ConductorResistanceModel, ThermalError, ThermalNetwork, TransientInput,
    TransientResult, TransientSample, input, steady_state,
};

/// Step response between two validated steady states.
#[derive(Debug, Clone)]
pub(super) struct StepResponse {
    network: ThermalNetwork,

    /// Steady temperature at the initial current, °C.
    pub(super) initial: f64,

    /// Steady temperature at the emergency current, °C.
    pub(super) target: f64,
}

impl StepResponse {
    /// Builds the network and both steady end points.
    pub(super) fn new(
        spec: &CableThermalSpec,
        initial_amps: f64,
        emergency_amps: f64,
        ambient: f64,
    ) -> Result<Self, ThermalError> {
        let network = ThermalNetwork::new(spec)?;
        let model = ConductorResistanceModel::new(spec.conductor());
        let r_total = network.total_resistance().value;

        let initial = steady_state::solve(&model, r_total, initial_amps, ambient)?.celsius;
        let target = steady_state::solve(&model, r_total, emergency_amps, ambient)?.celsius;

        Ok(Self {
            network,
            initial,
            target,
        })
    }

    /// Conductor temperature `seconds` after the step, °C.
    pub(super) fn temperature_at(&self, seconds: f64) -> f64 {
        self.target - (self.target - self.initial) * self.network.attenuation_at(seconds)
    }
}

/// Samples the conductor temperature over the duration of a current step.
///
/// # Errors
///
/// Returns [`ThermalError::InvalidInput`] for a non-positive current, a
/// duration below [`min_duration`](super::min_duration) or fewer than two
/// samples; [`ThermalError::ThermalRunaway`] if either current has no steady
/// state; and [`ThermalError::NonMonotonic`] if the sampled response moves
/// against the step.
pub fn transient(
    spec: &CableThermalSpec,
    input: &TransientInput,
) -> Result<TransientResult, ThermalError> {
    let initial_amps = input::amperes("initial_current", input.initial_current)?;
    let emergency_amps = input::amperes("emergency_current", input.emergency_current)?;
    let ambient = input::celsius("ambient", input.ambient)?;
    let duration = input::duration_seconds(input.duration)?;
    let count = input::point_count("sample_count", input.sample_count)?;

    let response = StepResponse::new(spec, initial_amps, emergency_amps, ambient)?;

    #[allow(clippy::cast_precision_loss)]
    let step = duration / (count - 1) as f64;
    let times: Vec<f64> = (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = step * i as f64;
            if i + 1 == count { duration } else { t }
        })
        .collect();

    let mut temperatures: Vec<f64> = times.iter().map(|&t| response.temperature_at(t)).collect();
    enforce_monotonic(&mut temperatures, response.target - response.initial)?;

    let samples = times
        .into_iter()
        .zip(temperatures)
        .map(|(t, celsius)| TransientSample {
            time: Time::new::<second>(t),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(celsius),
        })
        .collect();

    Ok(TransientResult {
        samples,
        initial_temperature: ThermodynamicTemperature::new::<degree_celsius>(response.initial),
        target_temperature: ThermodynamicTemperature::new::<degree_celsius>(response.target),
    })
}

/// Conductor temperature at the end of a current step of given duration.
///
/// # Errors
///
/// Same as [`transient`], apart from the sample count.
pub fn temperature_after(
    spec: &CableThermalSpec,
    initial_current: ElectricCurrent,
    emergency_current: ElectricCurrent,
    duration: Time,
    ambient: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, ThermalError> {
    let initial_amps = input::amperes("initial_current", initial_current)?;
    let emergency_amps = input::amperes("emergency_current", emergency_current)?;
    let ambient = input::celsius("ambient", ambient)?;
    let duration = input::duration_seconds(duration)?;

    let response = StepResponse::new(spec, initial_amps, emergency_amps, ambient)?;
    Ok(ThermodynamicTemperature::new::<degree_celsius>(
        response.temperature_at(duration),
    ))
}

/// Checks that `temperatures` move in the direction of `rise`.
///
/// Reversals within rounding are clamped to the previous sample; anything
/// larger is an error.
fn enforce_monotonic(temperatures: &mut [f64], rise: f64) -> Result<(), ThermalError> {
    let tol = 1e-9 * rise.abs().max(1.0);
    let direction = if rise < 0.0 { -1.0 } else { 1.0 };

    for i in 1..temperatures.len() {
        let excursion = direction * (temperatures[i - 1] - temperatures[i]);
        if excursion > tol {
            tracing::debug!(index = i, excursion, "transient response is not monotonic");
            return Err(ThermalError::NonMonotonic {
                index: i,
                excursion: TemperatureInterval::new::<delta_kelvin>(excursion),
            });
        }
        if excursion > 0.0 {
            temperatures[i] = temperatures[i - 1];
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::cable::core::{
        InputError, SteadyStateInput, steady_state,
        test_support::{amps, buried_cable, celsius, compact_cable, hours},
    };

    fn step(initial: f64, emergency: f64, duration_h: f64) -> TransientInput {
        TransientInput {
            initial_current: amps(initial),
            emergency_current: amps(emergency),
            duration: hours(duration_h),
            ambient: celsius(20.0),
            sample_count: 25,
        }
    }

    fn steady(spec: &CableThermalSpec, current: f64) -> f64 {
        steady_state(
            spec,
            &SteadyStateInput {
                current: amps(current),
                ambient: celsius(20.0),
            },
        )
        .unwrap()
        .temperature
        .get::<degree_celsius>()
    }

    #[test]
    fn starts_at_initial_steady_state() {
        let spec = buried_cable();
        let result = transient(&spec, &step(800.0, 1600.0, 6.0)).unwrap();

        assert_eq!(result.samples.len(), 25);
        assert_eq!(result.samples[0].time, Time::new::<second>(0.0));
        assert_eq!(result.samples[24].time, hours(6.0));
        assert_relative_eq!(
            result.samples[0].temperature.get::<degree_celsius>(),
            steady(&spec, 800.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            result.initial_temperature.get::<degree_celsius>(),
            steady(&spec, 800.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.target_temperature.get::<degree_celsius>(),
            steady(&spec, 1600.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn long_duration_approaches_target() {
        let spec = compact_cable();
        let result = transient(&spec, &step(400.0, 800.0, 48.0)).unwrap();

        assert_relative_eq!(
            result.final_temperature().get::<degree_celsius>(),
            steady(&spec, 800.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn step_up_is_non_decreasing() {
        let spec = buried_cable();
        let result = transient(&spec, &step(500.0, 1700.0, 6.0)).unwrap();

        for pair in result.samples.windows(2) {
            assert!(pair[1].temperature >= pair[0].temperature);
        }
        assert_eq!(result.peak_temperature(), result.final_temperature());
    }

    #[test]
    fn step_down_is_non_increasing() {
        let spec = compact_cable();
        let result = transient(&spec, &step(900.0, 300.0, 2.0)).unwrap();

        for pair in result.samples.windows(2) {
            assert!(pair[1].temperature <= pair[0].temperature);
        }
        assert_relative_eq!(
            result.peak_temperature().get::<degree_celsius>(),
            result.initial_temperature.get::<degree_celsius>(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn temperature_after_matches_last_sample() {
        let spec = buried_cable();
        let result = transient(&spec, &step(800.0, 1600.0, 6.0)).unwrap();
        let end = temperature_after(&spec, amps(800.0), amps(1600.0), hours(6.0), celsius(20.0))
            .unwrap();

        assert_relative_eq!(
            end.get::<degree_celsius>(),
            result.final_temperature().get::<degree_celsius>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_short_durations() {
        let spec = buried_cable();
        assert!(matches!(
            transient(&spec, &step(800.0, 1600.0, 0.1)),
            Err(ThermalError::InvalidInput(
                InputError::DurationBelowMinimum { .. }
            ))
        ));
        assert!(
            temperature_after(&spec, amps(800.0), amps(1600.0), hours(0.1), celsius(20.0))
                .is_err()
        );
    }

    #[test]
    fn rejects_a_single_sample() {
        let spec = buried_cable();
        let mut input = step(800.0, 1600.0, 6.0);
        input.sample_count = 1;
        assert!(matches!(
            transient(&spec, &input),
            Err(ThermalError::InvalidInput(InputError::TooFewPoints { .. }))
        ));
    }

    #[test]
    fn emergency_current_in_runaway_fails() {
        let spec = buried_cable();
        assert!(matches!(
            transient(&spec, &step(800.0, 5000.0, 6.0)),
            Err(ThermalError::ThermalRunaway { .. })
        ));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn small_reversals_are_clamped() {
        let mut temperatures = vec![20.0, 30.0, 30.0 - 1e-12, 40.0];
        enforce_monotonic(&mut temperatures, 20.0).unwrap();
        assert_eq!(temperatures, vec![20.0, 30.0, 30.0, 40.0]);

        let mut temperatures = vec![20.0, 30.0, 29.0, 40.0];
        assert!(matches!(
            enforce_monotonic(&mut temperatures, 20.0),
            Err(ThermalError::NonMonotonic { index: 2, .. })
        ));

        let mut temperatures = vec![60.0, 50.0, 50.0 + 1e-12, 40.0];
        enforce_monotonic(&mut temperatures, -20.0).unwrap();
        assert_eq!(temperatures, vec![60.0, 50.0, 50.0, 40.0]);
    }
}
