//! The `Model` adapters agree with the free functions they wrap.

use approx::assert_relative_eq;
use twine_cable::models::thermal::cable::{
    CableThermalSpec, EmergencyInput, EmergencyRatingConfig, EmergencyRatingModel,
    InMemoryCatalog, RadialInput, RadialProfileModel, RadialSpacing, SteadyStateInput,
    SteadyStateModel, ThermalError, TransientInput, TransientModel, emergency_rating, lookup,
    radial_profile, steady_state, transient,
};
use twine_core::Model;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

fn paper() -> CableThermalSpec {
    let catalog = InMemoryCatalog::with_defaults().unwrap();
    lookup(&catalog, "750_MCM_12_KV_CU_Paper").unwrap()
}

fn amps(value: f64) -> ElectricCurrent {
    ElectricCurrent::new::<ampere>(value)
}

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

#[test]
fn steady_state_model() {
    let model = SteadyStateModel::new(paper());
    let input = SteadyStateInput {
        current: amps(600.0),
        ambient: celsius(15.0),
    };

    let output = model.call(&input).unwrap();
    assert_eq!(output, steady_state(model.spec(), &input).unwrap());
    assert!(output.temperature > input.ambient);

    let err = model
        .call(&SteadyStateInput {
            current: amps(0.0),
            ..input
        })
        .unwrap_err();
    assert!(matches!(err, ThermalError::InvalidInput(_)));
}

#[test]
fn transient_model() {
    let model = TransientModel::new(paper());
    let input = TransientInput {
        initial_current: amps(500.0),
        emergency_current: amps(900.0),
        duration: Time::new::<hour>(4.0),
        ambient: celsius(15.0),
        sample_count: 17,
    };

    let output = model.call(&input).unwrap();
    assert_eq!(output, transient(model.spec(), &input).unwrap());
    assert_eq!(output.samples.len(), 17);
}

#[test]
fn radial_profile_model() {
    let model = RadialProfileModel::new(paper());
    let input = RadialInput {
        current: amps(600.0),
        ambient: celsius(15.0),
        point_count: 30,
        spacing: RadialSpacing::Logarithmic,
    };

    let output = model.call(&input).unwrap();
    assert_eq!(output, radial_profile(model.spec(), &input).unwrap());
}

#[test]
fn emergency_rating_model() {
    let config = EmergencyRatingConfig::default();
    let model = EmergencyRatingModel::with_config(paper(), config);
    let input = EmergencyInput {
        initial_current: amps(500.0),
        duration: Time::new::<hour>(6.0),
        max_temperature: paper().max_operating_temperature(),
        ambient: celsius(15.0),
    };

    let output = model.call(&input).unwrap();
    assert_eq!(output, emergency_rating(model.spec(), &input, config).unwrap());
    assert_relative_eq!(
        output.final_temperature.get::<degree_celsius>(),
        80.0,
        epsilon = 0.01
    );
}
