use twine_solvers::equation::bisection;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the emergency current search.
#[derive(Debug, Clone, Copy)]
pub struct EmergencyRatingConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Accepted distance between the end-of-duration temperature and the limit.
    pub temperature_tol: TemperatureInterval,

    /// Absolute tolerance on the emergency current.
    pub current_tol: ElectricCurrent,
}

impl Default for EmergencyRatingConfig {
    fn default() -> Self {
        Self {
            max_iters: 60,
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(0.01),
            current_tol: ElectricCurrent::new::<ampere>(1e-6),
        }
    }
}

impl EmergencyRatingConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.current_tol.get::<ampere>(),
            x_rel_tol: 0.0,
            residual_tol: self.temperature_tol.get::<delta_kelvin>(),
        }
    }
}
