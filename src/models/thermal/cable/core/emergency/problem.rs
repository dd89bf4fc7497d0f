//! Problem formulation for the emergency current search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::models::thermal::cable::core::{
    CableThermalSpec, ConductorResistanceModel, ThermalError, ThermalNetwork, input,
    steady_state,
};

/// End-of-duration state for one trial emergency current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Trial {
    pub(super) current: ElectricCurrent,
    pub(super) final_temperature: ThermodynamicTemperature,
}

/// Model adapter for the emergency search.
///
/// Holds everything that does not depend on the trial current, so each call
/// only solves the steady state at the trial current.
#[derive(Debug, Clone)]
pub(super) struct EmergencyModel {
    resistance: ConductorResistanceModel,
    r_total: f64,
    ambient: f64,

    /// Steady temperature at the initial current, °C.
    initial: f64,

    /// Network attenuation at the end of the duration.
    attenuation: f64,
}

impl EmergencyModel {
    pub(super) fn new(
        spec: &CableThermalSpec,
        initial_amps: f64,
        duration: f64,
        ambient: f64,
    ) -> Result<Self, ThermalError> {
        let network = ThermalNetwork::new(spec)?;
        let resistance = ConductorResistanceModel::new(spec.conductor());
        let r_total = network.total_resistance().value;
        let initial = steady_state::solve(&resistance, r_total, initial_amps, ambient)?.celsius;

        Ok(Self {
            resistance,
            r_total,
            ambient,
            initial,
            attenuation: network.attenuation_at(duration),
        })
    }

    /// Steady temperature at the initial current, °C.
    pub(super) fn initial_celsius(&self) -> f64 {
        self.initial
    }
}

impl Model for EmergencyModel {
    type Input = ElectricCurrent;
    type Output = Trial;
    type Error = ThermalError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let amps = input::amperes("emergency_current", *input)?;
        let target =
            steady_state::solve(&self.resistance, self.r_total, amps, self.ambient)?.celsius;
        let celsius = target - (target - self.initial) * self.attenuation;

        Ok(Trial {
            current: *input,
            final_temperature: ThermodynamicTemperature::new::<degree_celsius>(celsius),
        })
    }
}

/// Equation problem for the emergency search.
///
/// The residual is `final_temperature - max_temperature` in kelvin, which
/// rises with the trial current.
pub(super) struct EmergencyProblem {
    max_temperature: ThermodynamicTemperature,
}

impl EmergencyProblem {
    pub(super) fn new(max_temperature: ThermodynamicTemperature) -> Self {
        Self { max_temperature }
    }

    pub(super) fn residual(&self, trial: &Trial) -> f64 {
        trial.final_temperature.get::<degree_celsius>()
            - self.max_temperature.get::<degree_celsius>()
    }
}

impl EquationProblem<1> for EmergencyProblem {
    type Input = ElectricCurrent;
    type Output = Trial;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ElectricCurrent::new::<ampere>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
