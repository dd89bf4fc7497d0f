use uom::{
    si::{
        ISQ, Quantity, SI,
        electrical_resistance::ohm,
        energy::joule,
        f64::{ElectricalResistance, Energy, Length, Power, Ratio, TemperatureInterval},
        length::{kilometer, meter},
        power::watt,
        ratio::ratio,
        temperature_interval::kelvin as delta_kelvin,
    },
    typenum::{N1, N2, N3, P1, P3, Z0},
};

/// Electrical resistance per unit length, Ω/m in SI.
pub type LinearResistance = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thermal resistance per unit length, K·m/W in SI.
pub type LinearThermalResistance = Quantity<ISQ<N1, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Heat capacity per unit length, J/(K·m) in SI.
pub type LinearHeatCapacity = Quantity<ISQ<P1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Heat flow per unit length, W/m in SI.
pub type LinearPowerDensity = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Relative change per kelvin, 1/K in SI.
pub type TemperatureCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Conductor resistance from a value in Ω/km.
#[must_use]
pub fn ohms_per_kilometer(value: f64) -> LinearResistance {
    ElectricalResistance::new::<ohm>(value) / Length::new::<kilometer>(1.0)
}

/// Conductor resistance from a value in Ω/m.
#[must_use]
pub fn ohms_per_meter(value: f64) -> LinearResistance {
    ElectricalResistance::new::<ohm>(value) / Length::new::<meter>(1.0)
}

/// Thermal resistance from a value in K·m/W.
#[must_use]
pub fn kelvin_meters_per_watt(value: f64) -> LinearThermalResistance {
    TemperatureInterval::new::<delta_kelvin>(value) * Length::new::<meter>(1.0)
        / Power::new::<watt>(1.0)
}

/// Heat capacity from a value in J/(K·m).
#[must_use]
pub fn joules_per_kelvin_meter(value: f64) -> LinearHeatCapacity {
    Energy::new::<joule>(value)
        / TemperatureInterval::new::<delta_kelvin>(1.0)
        / Length::new::<meter>(1.0)
}

/// Heat flow from a value in W/m.
#[must_use]
pub fn watts_per_meter(value: f64) -> LinearPowerDensity {
    Power::new::<watt>(value) / Length::new::<meter>(1.0)
}

/// Temperature coefficient from a value in 1/K.
#[must_use]
pub fn per_kelvin(value: f64) -> TemperatureCoefficient {
    Ratio::new::<ratio>(value) / TemperatureInterval::new::<delta_kelvin>(1.0)
}
