use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature};

use crate::models::thermal::cable::core::ThermalError;

/// Errors that can occur while finding an emergency rating.
#[derive(Debug, Error)]
pub enum EmergencyRatingError {
    /// The inputs were invalid or the cable has no steady state at the
    /// initial current.
    #[error("thermal calculation failed")]
    Thermal(#[from] ThermalError),

    /// No current in the search range ends the emergency at the limit.
    ///
    /// Either the initial current already exceeds the limit, or even the
    /// largest current searched stays below it.
    #[error(
        "no emergency current between {lower:?} and {upper:?} reaches {max_temperature:?}"
    )]
    NoSolution {
        lower: ElectricCurrent,
        upper: ElectricCurrent,
        max_temperature: ThermodynamicTemperature,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    ConvergenceFailure {
        /// Best distance from the temperature limit achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
