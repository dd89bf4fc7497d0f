//! Cable fixtures shared by the solver tests.

use uom::si::{
    area::square_millimeter,
    electric_current::ampere,
    f64::{Area, ElectricCurrent, ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

use crate::support::units::{
    LinearResistance, joules_per_kelvin_meter, ohms_per_kilometer, per_kelvin,
};

use super::{CableThermalSpec, Conductor, ConductorMaterial, Layer, ThermalStage};

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(super) fn amps(value: f64) -> ElectricCurrent {
    ElectricCurrent::new::<ampere>(value)
}

pub(super) fn hours(value: f64) -> Time {
    Time::new::<hour>(value)
}

/// Copper conductor with the given resistance at 20 °C and α = 0.00393.
pub(super) fn copper(dc_resistance: LinearResistance) -> Conductor {
    Conductor::new(
        ConductorMaterial::Copper,
        Area::new::<square_millimeter>(500.0),
        dc_resistance,
        per_kelvin(0.00393),
    )
    .unwrap()
}

/// A 1000 mm² copper cable buried in soil, four stages.
///
/// Total thermal resistance 0.9952 K·m/W; the soil gives a dominant time
/// constant of hundreds of hours.
pub(super) fn buried_cable() -> CableThermalSpec {
    let conductor = Conductor::new(
        ConductorMaterial::Copper,
        Area::new::<square_millimeter>(1000.0),
        ohms_per_kilometer(0.0366),
        per_kelvin(0.00393),
    )
    .unwrap()
    .with_loss_factors(0.015, 0.005)
    .unwrap()
    .with_heat_capacity(joules_per_kelvin_meter(1725.0))
    .unwrap();

    let stages = vec![
        ThermalStage::from_si(Layer::Insulation, 0.1966, 1306.0, 0.013, 0.0185).unwrap(),
        ThermalStage::from_si(Layer::Sheath, 0.01, 600.0, 0.0185, 0.020).unwrap(),
        ThermalStage::from_si(Layer::Serving, 0.0779, 972.0, 0.020, 0.023).unwrap(),
        ThermalStage::from_si(Layer::Surroundings, 0.7107, 4.07e7, 0.023, 2.0).unwrap(),
    ];

    CableThermalSpec::new(conductor, stages, celsius(90.0)).unwrap()
}

/// A two-stage cable whose response settles within a few hours.
pub(super) fn compact_cable() -> CableThermalSpec {
    let conductor = copper(ohms_per_kilometer(0.06))
        .with_heat_capacity(joules_per_kelvin_meter(1000.0))
        .unwrap();

    let stages = vec![
        ThermalStage::from_si(Layer::Insulation, 0.3, 2000.0, 0.010, 0.015).unwrap(),
        ThermalStage::from_si(Layer::Surroundings, 0.5, 5000.0, 0.015, 0.050).unwrap(),
    ];

    CableThermalSpec::new(conductor, stages, celsius(90.0)).unwrap()
}

/// One stage of 0.5 K·m/W around a conductor of the given resistance.
pub(super) fn single_stage_cable(dc_resistance: LinearResistance) -> CableThermalSpec {
    let stages = vec![ThermalStage::from_si(Layer::Insulation, 0.5, 1500.0, 0.010, 0.020).unwrap()];
    CableThermalSpec::new(copper(dc_resistance), stages, celsius(90.0)).unwrap()
}
