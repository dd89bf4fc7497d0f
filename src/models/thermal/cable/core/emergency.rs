//! Iterative solver for the emergency current rating.
//!
//! Finds the current that, applied for the emergency duration after steady
//! operation at the initial current, brings the conductor exactly to the
//! temperature limit. The end-of-duration temperature rises with current, so
//! the search brackets the root from the initial current upward and bisects.

mod config;
mod error;
mod problem;

pub use config::EmergencyRatingConfig;
pub use error::EmergencyRatingError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature, Time},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{
    CableThermalSpec, EmergencyInput, EmergencyRating, InputError, ThermalError, input,
    is_within_iec_limit,
};

use problem::{EmergencyModel, EmergencyProblem, Trial};

/// First upper bracket, as a multiple of the initial current.
const FIRST_BRACKET_FACTOR: f64 = 1.5;

/// Largest upper bracket, as a multiple of the initial current.
const MAX_BRACKET_FACTOR: f64 = 10.0;

/// Finds the largest current the cable can carry for `input.duration`
/// without exceeding `input.max_temperature`.
///
/// The returned rating is flagged, not rejected, when its scaling factor lies
/// outside the range the IEC 60853-2 method is validated for.
///
/// # Errors
///
/// Returns [`EmergencyRatingError::Thermal`] for invalid inputs or if the
/// initial current has no steady state, [`EmergencyRatingError::NoSolution`]
/// if no current in the search range ends at the limit, and
/// [`EmergencyRatingError::ConvergenceFailure`] if the bisection does not
/// converge within the configured iterations.
pub fn emergency_rating(
    spec: &CableThermalSpec,
    input: &EmergencyInput,
    config: EmergencyRatingConfig,
) -> Result<EmergencyRating, EmergencyRatingError> {
    let request = validate(input)?;
    let model = EmergencyModel::new(spec, request.initial_amps, request.duration, request.ambient)?;
    let problem = EmergencyProblem::new(input.max_temperature);
    let temperature_tol = config.temperature_tol.get::<delta_kelvin>();

    let initial_trial = model.call(&input.initial_current)?;
    let initial_residual = problem.residual(&initial_trial);
    if initial_residual.abs() <= temperature_tol {
        return Ok(rating(input, &model, initial_trial, 0));
    }
    if initial_residual > 0.0 {
        return Err(EmergencyRatingError::NoSolution {
            lower: input.initial_current,
            upper: input.initial_current,
            max_temperature: input.max_temperature,
        });
    }

    let upper = upper_bracket(&model, &problem, input)?;

    let solution = bisection::solve(
        &model,
        &problem,
        [request.initial_amps, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Trial currents in thermal runaway lie above the rating.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(EmergencyRatingError::ConvergenceFailure {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    tracing::debug!(
        iters = solution.iters,
        current = solution.snapshot.output.current.get::<ampere>(),
        "emergency rating converged"
    );

    Ok(rating(input, &model, solution.snapshot.output, solution.iters))
}

/// Emergency rating up to the cable's own maximum operating temperature.
///
/// # Errors
///
/// Same as [`emergency_rating`].
pub fn emergency_rating_to_limit(
    spec: &CableThermalSpec,
    initial_current: ElectricCurrent,
    duration: Time,
    ambient: ThermodynamicTemperature,
    config: EmergencyRatingConfig,
) -> Result<EmergencyRating, EmergencyRatingError> {
    let input = EmergencyInput {
        initial_current,
        duration,
        max_temperature: spec.max_operating_temperature(),
        ambient,
    };
    emergency_rating(spec, &input, config)
}

/// A validated request in plain SI numbers.
struct Request {
    initial_amps: f64,

    /// Seconds.
    duration: f64,

    /// °C.
    ambient: f64,
}

fn validate(input: &EmergencyInput) -> Result<Request, ThermalError> {
    let initial_amps = input::amperes("initial_current", input.initial_current)?;
    let ambient = input::celsius("ambient", input.ambient)?;
    let max_temperature = input::celsius("max_temperature", input.max_temperature)?;
    let duration = input::duration_seconds(input.duration)?;

    if max_temperature <= ambient {
        return Err(InputError::LimitNotAboveAmbient {
            max_temperature: input.max_temperature,
            ambient: input.ambient,
        }
        .into());
    }

    Ok(Request {
        initial_amps,
        duration,
        ambient,
    })
}

/// Widens the search until a trial current overshoots the limit.
///
/// Starts at [`FIRST_BRACKET_FACTOR`] times the initial current and doubles,
/// stopping at [`MAX_BRACKET_FACTOR`] times. A trial in thermal runaway counts
/// as an overshoot.
fn upper_bracket(
    model: &EmergencyModel,
    problem: &EmergencyProblem,
    input: &EmergencyInput,
) -> Result<f64, EmergencyRatingError> {
    let initial_amps = input.initial_current.get::<ampere>();
    let cap = MAX_BRACKET_FACTOR * initial_amps;
    let mut upper = FIRST_BRACKET_FACTOR * initial_amps;

    loop {
        let residual = match model.call(&ElectricCurrent::new::<ampere>(upper)) {
            Ok(trial) => problem.residual(&trial),
            Err(ThermalError::ThermalRunaway {
                critical_current, ..
            }) => {
                tracing::debug!(
                    upper,
                    critical_current = critical_current.get::<ampere>(),
                    "upper bracket is in thermal runaway"
                );
                f64::INFINITY
            }
            Err(err) => return Err(err.into()),
        };

        if residual > 0.0 {
            return Ok(upper);
        }
        if upper >= cap {
            return Err(EmergencyRatingError::NoSolution {
                lower: input.initial_current,
                upper: ElectricCurrent::new::<ampere>(cap),
                max_temperature: input.max_temperature,
            });
        }

        tracing::debug!(upper, residual, "expanding emergency current bracket");
        upper = (2.0 * upper).min(cap);
    }
}

fn rating(
    input: &EmergencyInput,
    model: &EmergencyModel,
    trial: Trial,
    iterations: usize,
) -> EmergencyRating {
    let scaling_factor = trial.current.get::<ampere>() / input.initial_current.get::<ampere>();
    let within_iec_limit = is_within_iec_limit(scaling_factor);

    if !within_iec_limit {
        tracing::warn!(
            scaling_factor,
            emergency_current = trial.current.get::<ampere>(),
            initial_current = input.initial_current.get::<ampere>(),
            "emergency rating exceeds the IEC 60853-2 scaling limit"
        );
    }

    EmergencyRating {
        emergency_current: trial.current,
        initial_current: input.initial_current,
        scaling_factor,
        initial_temperature: ThermodynamicTemperature::new::<degree_celsius>(
            model.initial_celsius(),
        ),
        final_temperature: trial.final_temperature,
        within_iec_limit,
        iterations,
    }
}
