//! Steady temperature profile from the conductor out to ambient.
//!
//! All conductor losses `W` flow radially outward, so stage `k` drops
//! `ΔT_k = W R_k` and, within its annulus, the temperature follows the
//! cylindrical conduction law
//!
//! ```text
//! T(r) = T_k − ΔT_k ln(r / r_in) / ln(r_out / r_in)
//! ```

use uom::si::{
    f64::{Length, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::watts_per_meter;

use super::{
    CableThermalSpec, ConductorResistanceModel, LayerBoundary, RadialInput, RadialResult,
    RadialSample, RadialSpacing, ThermalError, ThermalStage, input, steady_state,
};

/// Computes the steady radial temperature profile.
///
/// # Errors
///
/// Returns [`ThermalError::InvalidInput`] for a non-positive current or fewer
/// than two points, [`ThermalError::ThermalRunaway`] if the current has no
/// steady state, and [`ThermalError::ProfileMismatch`] if the chained layer
/// drops do not land on ambient.
pub fn radial_profile(
    spec: &CableThermalSpec,
    input: &RadialInput,
) -> Result<RadialResult, ThermalError> {
    let amps = input::amperes("current", input.current)?;
    let ambient = input::celsius("ambient", input.ambient)?;
    let count = input::point_count("point_count", input.point_count)?;

    let model = ConductorResistanceModel::new(spec.conductor());
    let point = steady_state::solve(
        &model,
        spec.total_thermal_resistance().value,
        amps,
        ambient,
    )?;

    let stages = spec.stages();

    // Temperature at the inner radius of each stage, then at the outer boundary.
    let mut interface = Vec::with_capacity(stages.len() + 1);
    interface.push(point.celsius);
    for stage in stages {
        let previous = interface[interface.len() - 1];
        interface.push(previous - point.losses * stage.resistance().value);
    }

    let outer = interface[stages.len()];
    let residual = outer - ambient;
    if residual.abs() > 1e-9 * point.celsius.abs().max(1.0) {
        return Err(ThermalError::ProfileMismatch {
            residual: TemperatureInterval::new::<delta_kelvin>(residual),
        });
    }

    let boundaries = std::iter::once(stages[0].inner_radius())
        .chain(stages.iter().map(ThermalStage::outer_radius))
        .zip(&interface)
        .map(|(radius, &celsius)| LayerBoundary {
            radius,
            temperature: ThermodynamicTemperature::new::<degree_celsius>(celsius),
        })
        .collect();

    let samples = sample_radii(stages, count, input.spacing)
        .into_iter()
        .map(|r| {
            let index = owning_stage(stages, r);
            let stage = &stages[index];
            let ri = stage.inner_radius().value;
            let ro = stage.outer_radius().value;
            let drop = interface[index] - interface[index + 1];
            let celsius = interface[index] - drop * (r / ri).ln() / (ro / ri).ln();

            RadialSample {
                radius: Length::new::<meter>(r),
                temperature: ThermodynamicTemperature::new::<degree_celsius>(celsius),
                stage: index,
                layer: stage.layer(),
            }
        })
        .collect();

    Ok(RadialResult {
        samples,
        boundaries,
        conductor_temperature: ThermodynamicTemperature::new::<degree_celsius>(point.celsius),
        losses: watts_per_meter(point.losses),
    })
}

/// Radii in metres from the conductor surface to the outer boundary, inclusive.
fn sample_radii(stages: &[ThermalStage], count: usize, spacing: RadialSpacing) -> Vec<f64> {
    let inner = stages[0].inner_radius().value;
    let outer = stages[stages.len() - 1].outer_radius().value;

    #[allow(clippy::cast_precision_loss)]
    let segments = (count - 1) as f64;

    (0..count)
        .map(|i| {
            if i + 1 == count {
                return outer;
            }
            #[allow(clippy::cast_precision_loss)]
            let fraction = i as f64 / segments;
            match spacing {
                RadialSpacing::Logarithmic => inner * (outer / inner).powf(fraction),
                RadialSpacing::Uniform => inner + (outer - inner) * fraction,
            }
        })
        .collect()
}

/// First stage whose outer radius is at or beyond `radius`.
fn owning_stage(stages: &[ThermalStage], radius: f64) -> usize {
    stages
        .iter()
        .position(|stage| radius <= stage.outer_radius().value)
        .unwrap_or(stages.len() - 1)
}
