//! [`Model`] adapters over the cable solvers.
//!
//! Each adapter owns one [`CableThermalSpec`] and maps a request record to a
//! result record, so a cable can be plugged into anything that drives Twine
//! models.

use twine_core::Model;

use super::core::{
    CableThermalSpec, EmergencyInput, EmergencyRating, EmergencyRatingConfig,
    EmergencyRatingError, RadialInput, RadialResult, SteadyStateInput, SteadyStateResult,
    ThermalError, TransientInput, TransientResult, emergency_rating, radial_profile,
    steady_state, transient,
};

/// Steady conductor temperature of one cable.
#[derive(Debug, Clone, PartialEq)]
pub struct SteadyStateModel {
    spec: CableThermalSpec,
}

impl SteadyStateModel {
    #[must_use]
    pub fn new(spec: CableThermalSpec) -> Self {
        Self { spec }
    }

    #[must_use]
    pub fn spec(&self) -> &CableThermalSpec {
        &self.spec
    }
}

impl Model for SteadyStateModel {
    type Input = SteadyStateInput;
    type Output = SteadyStateResult;
    type Error = ThermalError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        steady_state(&self.spec, input)
    }
}

/// Step response of one cable.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientModel {
    spec: CableThermalSpec,
}

impl TransientModel {
    #[must_use]
    pub fn new(spec: CableThermalSpec) -> Self {
        Self { spec }
    }

    #[must_use]
    pub fn spec(&self) -> &CableThermalSpec {
        &self.spec
    }
}

impl Model for TransientModel {
    type Input = TransientInput;
    type Output = TransientResult;
    type Error = ThermalError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        transient(&self.spec, input)
    }
}

/// Radial temperature profile of one cable.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialProfileModel {
    spec: CableThermalSpec,
}

impl RadialProfileModel {
    #[must_use]
    pub fn new(spec: CableThermalSpec) -> Self {
        Self { spec }
    }

    #[must_use]
    pub fn spec(&self) -> &CableThermalSpec {
        &self.spec
    }
}

impl Model for RadialProfileModel {
    type Input = RadialInput;
    type Output = RadialResult;
    type Error = ThermalError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        radial_profile(&self.spec, input)
    }
}

/// Emergency rating of one cable with fixed solver settings.
#[derive(Debug, Clone)]
pub struct EmergencyRatingModel {
    spec: CableThermalSpec,
    config: EmergencyRatingConfig,
}

impl EmergencyRatingModel {
    /// Creates the model with the default [`EmergencyRatingConfig`].
    #[must_use]
    pub fn new(spec: CableThermalSpec) -> Self {
        Self::with_config(spec, EmergencyRatingConfig::default())
    }

    #[must_use]
    pub fn with_config(spec: CableThermalSpec, config: EmergencyRatingConfig) -> Self {
        Self { spec, config }
    }

    #[must_use]
    pub fn spec(&self) -> &CableThermalSpec {
        &self.spec
    }

    #[must_use]
    pub fn config(&self) -> EmergencyRatingConfig {
        self.config
    }
}

impl Model for EmergencyRatingModel {
    type Input = EmergencyInput;
    type Output = EmergencyRating;
    type Error = EmergencyRatingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        emergency_rating(&self.spec, input, self.config)
    }
}
