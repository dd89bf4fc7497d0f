//! Conductor resistance as a function of temperature.

use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::StrictlyPositive,
    units::{
        LinearPowerDensity, LinearResistance, TemperatureCoefficient, ohms_per_meter,
        watts_per_meter,
    },
};

use super::{Conductor, SpecError};

/// Linear resistance–temperature law of a conductor.
///
/// `R(T) = R_ref (1 + α (T − T_ref))`, and the AC resistance adds the fixed
/// skin and proximity factors: `R_ac(T) = R(T) (1 + y_s + y_p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorResistanceModel {
    /// DC resistance at the reference temperature, Ω/m.
    r_ref: f64,
    /// Temperature coefficient, 1/K.
    alpha: f64,
    /// Reference temperature, °C.
    t_ref: f64,
    /// `1 + y_s + y_p`.
    ac_factor: f64,
}

impl ConductorResistanceModel {
    /// Builds the model of an already validated conductor.
    #[must_use]
    pub fn new(conductor: &Conductor) -> Self {
        Self {
            r_ref: conductor.dc_resistance().value,
            alpha: conductor.temperature_coefficient().value,
            t_ref: conductor.reference_temperature().get::<degree_celsius>(),
            ac_factor: 1.0 + conductor.skin_effect() + conductor.proximity_effect(),
        }
    }

    /// Builds a DC-only model from raw parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Constraint`] if the resistance or coefficient is
    /// zero, negative or `NaN`.
    pub fn from_parts(
        r_ref: LinearResistance,
        alpha: TemperatureCoefficient,
        t_ref: ThermodynamicTemperature,
    ) -> Result<Self, SpecError> {
        let r_ref = StrictlyPositive::new(r_ref).map_err(SpecError::constraint("dc_resistance"))?;
        let alpha = StrictlyPositive::new(alpha)
            .map_err(SpecError::constraint("temperature_coefficient"))?;

        Ok(Self {
            r_ref: r_ref.into_inner().value,
            alpha: alpha.into_inner().value,
            t_ref: t_ref.get::<degree_celsius>(),
            ac_factor: 1.0,
        })
    }

    /// DC resistance at `temperature`.
    #[must_use]
    pub fn resistance_at(&self, temperature: ThermodynamicTemperature) -> LinearResistance {
        ohms_per_meter(self.dc_ohms_per_meter(temperature.get::<degree_celsius>()))
    }

    /// AC resistance at `temperature`.
    #[must_use]
    pub fn ac_resistance_at(&self, temperature: ThermodynamicTemperature) -> LinearResistance {
        ohms_per_meter(self.ac_ohms_per_meter(temperature.get::<degree_celsius>()))
    }

    /// Joule losses `I² R_ac(T)` per unit length.
    #[must_use]
    pub fn losses(
        &self,
        current: ElectricCurrent,
        temperature: ThermodynamicTemperature,
    ) -> LinearPowerDensity {
        let amps = current.get::<ampere>();
        watts_per_meter(amps * amps * self.ac_ohms_per_meter(temperature.get::<degree_celsius>()))
    }

    pub(super) fn dc_ohms_per_meter(&self, celsius: f64) -> f64 {
        self.r_ref * (1.0 + self.alpha * (celsius - self.t_ref))
    }

    pub(super) fn ac_ohms_per_meter(&self, celsius: f64) -> f64 {
        self.ac_factor * self.dc_ohms_per_meter(celsius)
    }

    /// Losses at `amps` as the affine function `w0 + w1 T` of temperature in °C.
    pub(super) fn loss_coefficients(&self, amps: f64) -> (f64, f64) {
        let a = amps * amps * self.ac_factor * self.r_ref;
        (a * (1.0 - self.alpha * self.t_ref), a * self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_millimeter, f64::Area};

    use crate::{
        models::thermal::cable::core::ConductorMaterial,
        support::units::{ohms_per_kilometer, per_kelvin},
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn reference_temperature_returns_reference_resistance() {
        let model = ConductorResistanceModel::from_parts(
            ohms_per_kilometer(0.05),
            per_kelvin(0.00393),
            celsius(20.0),
        )
        .unwrap();

        assert_relative_eq!(model.resistance_at(celsius(20.0)).value, 5e-5);
        assert_relative_eq!(
            model.resistance_at(celsius(90.0)).value,
            5e-5 * (1.0 + 0.00393 * 70.0)
        );
    }

    #[test]
    fn non_positive_parameters_are_invalid() {
        let t_ref = celsius(20.0);
        assert!(
            ConductorResistanceModel::from_parts(
                ohms_per_kilometer(-0.05),
                per_kelvin(0.00393),
                t_ref
            )
            .is_err()
        );
        assert!(
            ConductorResistanceModel::from_parts(ohms_per_kilometer(0.05), per_kelvin(0.0), t_ref)
                .is_err()
        );
    }

    #[test]
    fn loss_factors_scale_ac_resistance() {
        let conductor = Conductor::of_material(
            ConductorMaterial::Aluminium,
            Area::new::<square_millimeter>(630.0),
        )
        .unwrap()
        .with_loss_factors(0.015, 0.005)
        .unwrap();
        let model = ConductorResistanceModel::new(&conductor);

        let t = celsius(65.0);
        assert_relative_eq!(
            model.ac_resistance_at(t).value,
            1.02 * model.resistance_at(t).value,
            max_relative = 1e-12
        );

        let current = ElectricCurrent::new::<ampere>(1000.0);
        assert_relative_eq!(
            model.losses(current, t).value,
            1e6 * model.ac_resistance_at(t).value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn loss_coefficients_reproduce_losses() {
        let conductor = Conductor::of_material(
            ConductorMaterial::Copper,
            Area::new::<square_millimeter>(400.0),
        )
        .unwrap()
        .with_loss_factors(0.02, 0.01)
        .unwrap();
        let model = ConductorResistanceModel::new(&conductor);

        let (w0, w1) = model.loss_coefficients(750.0);
        for t in [0.0, 20.0, 90.0, 250.0] {
            assert_relative_eq!(
                w0 + w1 * t,
                750.0 * 750.0 * model.ac_ohms_per_meter(t),
                max_relative = 1e-12
            );
        }
    }
}
