//! Underground power cable rating models (IEC 60853-2).
//!
//! A cable is described once by a validated [`CableThermalSpec`], either built
//! directly from per-metre network data or derived from its physical
//! construction with [`CableConstruction`]. Each calculation is then a pure
//! function of that spec and a small input record:
//!
//! - [`steady_state`]: conductor temperature and losses for a sustained current
//! - [`transient`]: conductor temperature after a step change in current
//! - [`radial_profile`]: temperature through the cable layers and surroundings
//! - [`emergency_rating`]: the largest current a cable can carry for a bounded
//!   emergency without exceeding a temperature limit
//!
//! The [`twine_core::Model`] adapters in this module wrap a spec and expose the
//! same operations for use in Twine simulations and services.

mod adapters;
mod core;

pub use adapters::{EmergencyRatingModel, RadialProfileModel, SteadyStateModel, TransientModel};
pub use self::core::{
    CableCatalog, CableConstruction, CableDescriptor, CableThermalSpec, CatalogError, Conductor,
    ConductorMaterial, ConductorResistanceModel, EmergencyInput, EmergencyRating,
    EmergencyRatingConfig, EmergencyRatingError, InMemoryCatalog, InputError, Insulation, Layer,
    LayerBoundary, LayerMaterial, MAX_SCALING_FACTOR, MAX_STAGES, RadialInput, RadialResult,
    RadialSample, RadialSpacing, ResponseTerm, SpecError, SteadyStateInput, SteadyStateResult,
    ThermalError, ThermalNetwork, ThermalStage, TransientInput, TransientResult, TransientSample,
    continuous_rating, emergency_rating, emergency_rating_to_limit, is_within_iec_limit, lookup,
    min_duration, radial_profile, steady_state, temperature_after, transient,
};
