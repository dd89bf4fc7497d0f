//! Cable thermal rating engine.
//!
//! The cable is modelled as a radial ladder of thermal stages (insulation,
//! sheath, serving, surroundings), each with a thermal resistance and a heat
//! capacity. Steady temperatures follow from the total resistance; transient
//! temperatures from the ladder's step response, with each stage's capacity
//! split between its two nodes by the Van Wormer coefficient.
//!
//! Every calculation rebuilds the network it needs from the spec. Nothing is
//! cached between calls.

mod catalog;
mod construction;
mod emergency;
mod error;
mod input;
mod limits;
mod network;
mod radial;
mod resistance;
mod results;
mod spec;
mod steady_state;
mod transient;

#[cfg(test)]
mod test_support;

pub use catalog::{CableCatalog, CableDescriptor, CatalogError, InMemoryCatalog, lookup};
pub use construction::{CableConstruction, Insulation, LayerMaterial};
pub use emergency::{
    EmergencyRatingConfig, EmergencyRatingError, emergency_rating, emergency_rating_to_limit,
};
pub use error::{InputError, SpecError, ThermalError};
pub use input::{EmergencyInput, RadialInput, RadialSpacing, SteadyStateInput, TransientInput};
pub use limits::{MAX_SCALING_FACTOR, is_within_iec_limit, min_duration};
pub use network::{ResponseTerm, ThermalNetwork};
pub use radial::radial_profile;
pub use resistance::ConductorResistanceModel;
pub use results::{
    EmergencyRating, LayerBoundary, RadialResult, RadialSample, SteadyStateResult,
    TransientResult, TransientSample,
};
pub use spec::{CableThermalSpec, Conductor, ConductorMaterial, Layer, MAX_STAGES, ThermalStage};
pub use steady_state::{continuous_rating, steady_state};
pub use transient::{temperature_after, transient};
