//! Steady conductor temperature under a sustained current.
//!
//! Losses are affine in conductor temperature, `W(T) = w0 + w1 T`, and the
//! temperature rise is `W(T) R_total`, so the fixed point has the closed form
//! `T = (T_amb + w0 R_total) / (1 − w1 R_total)`. A non-positive denominator
//! means losses outgrow the cable's ability to shed heat at any temperature.

use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::watts_per_meter;

use super::{
    CableThermalSpec, ConductorResistanceModel, InputError, SteadyStateInput, SteadyStateResult,
    ThermalError, input,
};

/// Steady conductor state in plain SI numbers.
#[derive(Debug, Clone, Copy)]
pub(super) struct SteadyPoint {
    /// Conductor temperature, °C.
    pub(super) celsius: f64,

    /// Joule losses at that temperature, W/m.
    pub(super) losses: f64,
}

/// Computes the steady conductor temperature for a sustained current.
///
/// # Errors
///
/// Returns [`ThermalError::InvalidInput`] for a non-positive current or a
/// non-finite ambient, and [`ThermalError::ThermalRunaway`] if the current is
/// at or above the critical current of the cable.
pub fn steady_state(
    spec: &CableThermalSpec,
    input: &SteadyStateInput,
) -> Result<SteadyStateResult, ThermalError> {
    let amps = input::amperes("current", input.current)?;
    let ambient = input::celsius("ambient", input.ambient)?;

    let model = ConductorResistanceModel::new(spec.conductor());
    let point = solve(&model, spec.total_thermal_resistance().value, amps, ambient)?;

    Ok(SteadyStateResult {
        temperature: ThermodynamicTemperature::new::<degree_celsius>(point.celsius),
        temperature_rise: TemperatureInterval::new::<delta_kelvin>(point.celsius - ambient),
        losses: watts_per_meter(point.losses),
    })
}

/// Solves the steady fixed point for already validated inputs.
pub(super) fn solve(
    model: &ConductorResistanceModel,
    r_total: f64,
    amps: f64,
    ambient: f64,
) -> Result<SteadyPoint, ThermalError> {
    let (w0, w1) = model.loss_coefficients(amps);
    let denominator = 1.0 - w1 * r_total;

    let celsius = (ambient + w0 * r_total) / denominator;
    if denominator <= 0.0 || !celsius.is_finite() {
        let critical = critical_current(model, r_total);
        tracing::debug!(
            current = amps,
            critical_current = critical,
            "steady state is in thermal runaway"
        );
        return Err(ThermalError::ThermalRunaway {
            current: ElectricCurrent::new::<ampere>(amps),
            critical_current: ElectricCurrent::new::<ampere>(critical),
        });
    }

    Ok(SteadyPoint {
        celsius,
        losses: w0 + w1 * celsius,
    })
}

/// Current at which the steady-state denominator vanishes, in amperes.
fn critical_current(model: &ConductorResistanceModel, r_total: f64) -> f64 {
    let (_, w1_per_amp_squared) = model.loss_coefficients(1.0);
    (1.0 / (w1_per_amp_squared * r_total)).sqrt()
}

/// Current whose steady temperature equals the maximum operating temperature.
///
/// This is the continuous rating `I = sqrt((T_max − T_amb) / (R_ac(T_max) R_total))`.
///
/// # Errors
///
/// Returns [`ThermalError::InvalidInput`] if the ambient is not finite or is
/// not below the maximum operating temperature.
pub fn continuous_rating(
    spec: &CableThermalSpec,
    ambient: ThermodynamicTemperature,
) -> Result<ElectricCurrent, ThermalError> {
    let ambient_c = input::celsius("ambient", ambient)?;
    let max = spec.max_operating_temperature();
    let max_c = input::celsius("max_operating_temperature", max)?;

    if max_c <= ambient_c {
        return Err(InputError::LimitNotAboveAmbient {
            max_temperature: max,
            ambient,
        }
        .into());
    }

    let model = ConductorResistanceModel::new(spec.conductor());
    let heat_flow = (max_c - ambient_c) / spec.total_thermal_resistance().value;
    let amps = (heat_flow / model.ac_ohms_per_meter(max_c)).sqrt();
    if !amps.is_finite() {
        return Err(InputError::NotFinite {
            field: "continuous_rating",
        }
        .into());
    }

    Ok(ElectricCurrent::new::<ampere>(amps))
}
