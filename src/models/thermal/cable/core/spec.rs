//! Validated cable description consumed by every solver.

use uom::si::{
    f64::{Area, Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::{
        LinearHeatCapacity, LinearResistance, LinearThermalResistance, TemperatureCoefficient,
        joules_per_kelvin_meter, kelvin_meters_per_watt, ohms_per_meter, per_kelvin,
    },
};

use super::SpecError;

/// Largest number of radial stages in a cable's thermal network.
pub const MAX_STAGES: usize = 4;

/// Relative gap tolerated between the outer radius of one stage and the inner
/// radius of the next.
const CONTIGUITY_TOL: f64 = 1e-9;

/// Rejects infinite and `NaN` values; sign is left to the constraints.
fn finite(field: &'static str, value: f64) -> Result<(), SpecError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpecError::NotFinite { field })
    }
}

/// Conductor metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConductorMaterial {
    Copper,
    Aluminium,
}

impl ConductorMaterial {
    /// Electrical resistivity at 20 °C, in Ω·m.
    #[must_use]
    pub fn resistivity(self) -> f64 {
        match self {
            Self::Copper => 1.72e-8,
            Self::Aluminium => 2.82e-8,
        }
    }

    /// Temperature coefficient of resistance at 20 °C (IEC 60287-1-1).
    #[must_use]
    pub fn temperature_coefficient(self) -> TemperatureCoefficient {
        match self {
            Self::Copper => per_kelvin(3.93e-3),
            Self::Aluminium => per_kelvin(4.03e-3),
        }
    }

    /// Volumetric heat capacity, in J/(m³·K).
    #[must_use]
    pub fn volumetric_heat_capacity(self) -> f64 {
        match self {
            Self::Copper => 8960.0 * 385.0,
            Self::Aluminium => 2700.0 * 897.0,
        }
    }
}

/// Current-carrying core of a cable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conductor {
    material: ConductorMaterial,
    cross_section: Constrained<Area, StrictlyPositive>,
    dc_resistance: Constrained<LinearResistance, StrictlyPositive>,
    temperature_coefficient: Constrained<TemperatureCoefficient, StrictlyPositive>,
    reference_temperature: ThermodynamicTemperature,
    skin_effect: Constrained<f64, NonNegative>,
    proximity_effect: Constrained<f64, NonNegative>,
    heat_capacity: Constrained<LinearHeatCapacity, NonNegative>,
}

impl Conductor {
    /// Creates a conductor from its DC resistance and temperature coefficient,
    /// both referred to 20 °C.
    ///
    /// Skin and proximity factors start at zero and the heat capacity is
    /// derived from the material and cross-section.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Constraint`] if the cross-section, resistance or
    /// coefficient is not strictly positive, and [`SpecError::NotFinite`] if
    /// one of them is infinite.
    pub fn new(
        material: ConductorMaterial,
        cross_section: Area,
        dc_resistance: LinearResistance,
        temperature_coefficient: TemperatureCoefficient,
    ) -> Result<Self, SpecError> {
        let cross_section =
            StrictlyPositive::new(cross_section).map_err(SpecError::constraint("cross_section"))?;
        finite("cross_section", cross_section.as_ref().value)?;
        finite("dc_resistance", dc_resistance.value)?;
        finite("temperature_coefficient", temperature_coefficient.value)?;

        let heat_capacity = joules_per_kelvin_meter(
            cross_section.as_ref().value * material.volumetric_heat_capacity(),
        );

        Ok(Self {
            material,
            cross_section,
            dc_resistance: StrictlyPositive::new(dc_resistance)
                .map_err(SpecError::constraint("dc_resistance"))?,
            temperature_coefficient: StrictlyPositive::new(temperature_coefficient)
                .map_err(SpecError::constraint("temperature_coefficient"))?,
            reference_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
            skin_effect: NonNegative::zero(),
            proximity_effect: NonNegative::zero(),
            heat_capacity: NonNegative::new(heat_capacity)
                .map_err(SpecError::constraint("heat_capacity"))?,
        })
    }

    /// Creates a solid conductor whose resistance and coefficient follow from
    /// its material.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Constraint`] if the cross-section is not strictly positive.
    pub fn of_material(material: ConductorMaterial, cross_section: Area) -> Result<Self, SpecError> {
        let area = StrictlyPositive::new(cross_section)
            .map_err(SpecError::constraint("cross_section"))?
            .into_inner();
        Self::new(
            material,
            area,
            ohms_per_meter(material.resistivity() / area.value),
            material.temperature_coefficient(),
        )
    }

    /// Sets the temperature the DC resistance is referred to.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::NotFinite`] if the temperature is infinite or `NaN`.
    pub fn with_reference_temperature(
        mut self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, SpecError> {
        finite("reference_temperature", temperature.value)?;
        self.reference_temperature = temperature;
        Ok(self)
    }

    /// Sets the skin and proximity effect factors `y_s` and `y_p`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Constraint`] if either factor is negative or `NaN`,
    /// and [`SpecError::NotFinite`] if either is infinite.
    pub fn with_loss_factors(mut self, skin: f64, proximity: f64) -> Result<Self, SpecError> {
        self.skin_effect = NonNegative::new(skin).map_err(SpecError::constraint("skin_effect"))?;
        self.proximity_effect =
            NonNegative::new(proximity).map_err(SpecError::constraint("proximity_effect"))?;
        finite("skin_effect", skin)?;
        finite("proximity_effect", proximity)?;
        Ok(self)
    }

    /// Overrides the heat capacity of the conductor per unit length.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Constraint`] if the capacity is negative or `NaN`,
    /// and [`SpecError::NotFinite`] if it is infinite.
    pub fn with_heat_capacity(mut self, capacity: LinearHeatCapacity) -> Result<Self, SpecError> {
        self.heat_capacity =
            NonNegative::new(capacity).map_err(SpecError::constraint("heat_capacity"))?;
        finite("heat_capacity", capacity.value)?;
        Ok(self)
    }

    #[must_use]
    pub fn material(&self) -> ConductorMaterial {
        self.material
    }

    #[must_use]
    pub fn cross_section(&self) -> Area {
        *self.cross_section.as_ref()
    }

    /// DC resistance per unit length at the reference temperature.
    #[must_use]
    pub fn dc_resistance(&self) -> LinearResistance {
        *self.dc_resistance.as_ref()
    }

    #[must_use]
    pub fn temperature_coefficient(&self) -> TemperatureCoefficient {
        *self.temperature_coefficient.as_ref()
    }

    #[must_use]
    pub fn reference_temperature(&self) -> ThermodynamicTemperature {
        self.reference_temperature
    }

    #[must_use]
    pub fn skin_effect(&self) -> f64 {
        *self.skin_effect.as_ref()
    }

    #[must_use]
    pub fn proximity_effect(&self) -> f64 {
        *self.proximity_effect.as_ref()
    }

    #[must_use]
    pub fn heat_capacity(&self) -> LinearHeatCapacity {
        *self.heat_capacity.as_ref()
    }
}

/// Physical layer a thermal stage represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Insulation,
    Sheath,
    Serving,
    /// Soil or duct between the cable surface and ambient.
    Surroundings,
}

/// One radial stage of the thermal ladder.
///
/// The stage's resistance lies between its inner and outer radius, and its
/// heat capacity is distributed over the same annulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalStage {
    layer: Layer,
    resistance: Constrained<LinearThermalResistance, StrictlyPositive>,
    capacitance: Constrained<LinearHeatCapacity, StrictlyPositive>,
    inner_radius: Constrained<Length, StrictlyPositive>,
    outer_radius: Length,
}

impl ThermalStage {
    /// Creates a stage from its per-metre resistance, capacity and radii.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Constraint`] for a non-positive value,
    /// [`SpecError::NonIncreasingRadii`] if `outer_radius <= inner_radius`, and
    /// [`SpecError::NotFinite`] for an infinite value.
    pub fn new(
        layer: Layer,
        resistance: LinearThermalResistance,
        capacitance: LinearHeatCapacity,
        inner_radius: Length,
        outer_radius: Length,
    ) -> Result<Self, SpecError> {
        let inner_radius =
            StrictlyPositive::new(inner_radius).map_err(SpecError::constraint("inner_radius"))?;
        finite("inner_radius", inner_radius.as_ref().value)?;

        if outer_radius.value.is_nan() || outer_radius <= *inner_radius.as_ref() {
            return Err(SpecError::NonIncreasingRadii {
                inner: inner_radius.into_inner(),
                outer: outer_radius,
            });
        }
        finite("outer_radius", outer_radius.value)?;

        let resistance =
            StrictlyPositive::new(resistance).map_err(SpecError::constraint("resistance"))?;
        finite("resistance", resistance.as_ref().value)?;

        let capacitance =
            StrictlyPositive::new(capacitance).map_err(SpecError::constraint("capacitance"))?;
        finite("capacitance", capacitance.as_ref().value)?;

        Ok(Self {
            layer,
            resistance,
            capacitance,
            inner_radius,
            outer_radius,
        })
    }

    /// Creates a stage from plain SI values: K·m/W, J/(K·m) and metres.
    ///
    /// # Errors
    ///
    /// Same as [`ThermalStage::new`].
    pub fn from_si(
        layer: Layer,
        resistance: f64,
        capacitance: f64,
        inner_radius: f64,
        outer_radius: f64,
    ) -> Result<Self, SpecError> {
        Self::new(
            layer,
            kelvin_meters_per_watt(resistance),
            joules_per_kelvin_meter(capacitance),
            Length::new::<meter>(inner_radius),
            Length::new::<meter>(outer_radius),
        )
    }

    #[must_use]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    #[must_use]
    pub fn resistance(&self) -> LinearThermalResistance {
        *self.resistance.as_ref()
    }

    #[must_use]
    pub fn capacitance(&self) -> LinearHeatCapacity {
        *self.capacitance.as_ref()
    }

    #[must_use]
    pub fn inner_radius(&self) -> Length {
        *self.inner_radius.as_ref()
    }

    #[must_use]
    pub fn outer_radius(&self) -> Length {
        self.outer_radius
    }
}

/// Immutable thermal description of one cable.
///
/// Stages are ordered from the conductor outward, contiguous, and end at the
/// ambient (reference) boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct CableThermalSpec {
    conductor: Conductor,
    stages: Vec<ThermalStage>,
    max_operating_temperature: ThermodynamicTemperature,
}

impl CableThermalSpec {
    /// Assembles a spec, checking stage count and radial continuity.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::StageCount`] unless there are 1 to [`MAX_STAGES`]
    /// stages, [`SpecError::Discontiguous`] if a stage does not start where
    /// the previous one ends, and [`SpecError::NotFinite`] if the maximum
    /// operating temperature is infinite or `NaN`.
    pub fn new(
        conductor: Conductor,
        stages: Vec<ThermalStage>,
        max_operating_temperature: ThermodynamicTemperature,
    ) -> Result<Self, SpecError> {
        finite("max_operating_temperature", max_operating_temperature.value)?;

        if stages.is_empty() || stages.len() > MAX_STAGES {
            return Err(SpecError::StageCount {
                count: stages.len(),
                max: MAX_STAGES,
            });
        }

        for (index, pair) in stages.windows(2).enumerate() {
            let previous_outer = pair[0].outer_radius().value;
            let inner = pair[1].inner_radius().value;
            if (inner - previous_outer).abs() > CONTIGUITY_TOL * previous_outer {
                return Err(SpecError::Discontiguous {
                    stage: index + 1,
                    inner: pair[1].inner_radius(),
                    previous_outer: pair[0].outer_radius(),
                });
            }
        }

        Ok(Self {
            conductor,
            stages,
            max_operating_temperature,
        })
    }

    #[must_use]
    pub fn conductor(&self) -> &Conductor {
        &self.conductor
    }

    /// Stages from the conductor outward.
    #[must_use]
    pub fn stages(&self) -> &[ThermalStage] {
        &self.stages
    }

    #[must_use]
    pub fn max_operating_temperature(&self) -> ThermodynamicTemperature {
        self.max_operating_temperature
    }

    /// Sum of all stage resistances, conductor to ambient.
    #[must_use]
    pub fn total_thermal_resistance(&self) -> LinearThermalResistance {
        kelvin_meters_per_watt(self.stages.iter().map(|s| s.resistance().value).sum())
    }
}
