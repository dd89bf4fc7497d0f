//! Per-unit-length quantities for cable ratings.
//!
//! Cable thermal data is quoted per metre of route: conductor resistance in
//! Ω/m, thermal resistance in K·m/W, heat capacity in J/(K·m) and losses in
//! W/m. [`uom`] has no named quantities for these, so this module defines them
//! as dimensioned [`Quantity`](uom::si::Quantity) aliases together with
//! constructors in the units engineers actually quote.
//!
//! ```
//! use twine_cable::support::units::{LinearResistance, ohms_per_kilometer};
//!
//! let r20: LinearResistance = ohms_per_kilometer(0.0366);
//! assert!((r20.value - 3.66e-5).abs() < 1e-15);
//! ```
//!
//! The inner `value` of each alias is always in coherent SI units.

mod quantities;

pub use quantities::{
    LinearHeatCapacity, LinearPowerDensity, LinearResistance, LinearThermalResistance,
    TemperatureCoefficient, joules_per_kelvin_meter, kelvin_meters_per_watt, ohms_per_kilometer,
    ohms_per_meter, per_kelvin, watts_per_meter,
};
