//! Thermal specs derived from a cable's physical construction.
//!
//! Every layer is a concentric cylinder, so its thermal resistance per metre is
//! `ρ_th / (2π) ln(r_out / r_in)` and its heat capacity per metre is
//! `π (r_out² − r_in²) c_v`. The surroundings are a single soil stage from
//! the cable surface out to twice the burial depth.

use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use super::{CableThermalSpec, Conductor, ConductorMaterial, Layer, SpecError, ThermalStage};

/// Thermal properties of a layer material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerMaterial {
    /// Thermal resistivity, K·m/W.
    pub thermal_resistivity: f64,

    /// Volumetric heat capacity, J/(m³·K).
    pub volumetric_heat_capacity: f64,
}

impl LayerMaterial {
    /// Polyethylene, as used for oversheaths.
    pub const POLYETHYLENE: Self = Self {
        thermal_resistivity: 2.5,
        volumetric_heat_capacity: 950.0 * 2300.0,
    };

    /// PVC serving.
    pub const PVC: Self = Self {
        thermal_resistivity: 5.0,
        volumetric_heat_capacity: 1.7e6,
    };

    /// Moist native soil.
    pub const SOIL: Self = Self {
        thermal_resistivity: 1.0,
        volumetric_heat_capacity: 1800.0 * 1800.0,
    };

    /// Resistance of a cylindrical shell, K·m/W.
    fn resistance(&self, inner: f64, outer: f64) -> f64 {
        self.thermal_resistivity / (2.0 * PI) * (outer / inner).ln()
    }

    /// Heat capacity of a cylindrical shell, J/(K·m).
    fn capacitance(&self, inner: f64, outer: f64) -> f64 {
        PI * (outer * outer - inner * inner) * self.volumetric_heat_capacity
    }
}

/// Insulation type, which fixes the material and the temperature limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insulation {
    Xlpe,
    Epr,
    /// Oil-impregnated paper.
    Paper,
    /// Paper insulated, lead covered.
    Pilc,
    Pvc,
}

impl Insulation {
    /// Thermal properties from IEC 60287-2-1 and IEC 60853-2.
    #[must_use]
    pub fn material(self) -> LayerMaterial {
        let (thermal_resistivity, volumetric_heat_capacity) = match self {
            Self::Xlpe => (3.5, 2.4e6),
            Self::Epr => (3.5, 2.0e6),
            Self::Paper | Self::Pilc => (6.0, 2.0e6),
            Self::Pvc => (5.0, 1.7e6),
        };
        LayerMaterial {
            thermal_resistivity,
            volumetric_heat_capacity,
        }
    }

    /// Highest continuous conductor temperature the insulation tolerates.
    #[must_use]
    pub fn max_operating_temperature(self) -> ThermodynamicTemperature {
        let celsius = match self {
            Self::Xlpe | Self::Epr => 90.0,
            Self::Paper => 80.0,
            Self::Pilc => 85.0,
            Self::Pvc => 70.0,
        };
        ThermodynamicTemperature::new::<degree_celsius>(celsius)
    }
}

/// Physical construction of a single-core buried cable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableConstruction {
    pub material: ConductorMaterial,
    pub cross_section: Area,
    pub insulation: Insulation,
    pub insulation_thickness: Length,
    pub sheath_thickness: Length,
    pub sheath_material: LayerMaterial,

    /// Outer serving, if any.
    pub serving: Option<(Length, LayerMaterial)>,

    /// Depth of the cable axis below ground.
    pub burial_depth: Length,
    pub soil: LayerMaterial,
}

impl CableConstruction {
    /// A cable with a polyethylene sheath, no serving, in [`LayerMaterial::SOIL`].
    #[must_use]
    pub fn new(
        material: ConductorMaterial,
        cross_section: Area,
        insulation: Insulation,
        insulation_thickness: Length,
        sheath_thickness: Length,
        burial_depth: Length,
    ) -> Self {
        Self {
            material,
            cross_section,
            insulation,
            insulation_thickness,
            sheath_thickness,
            sheath_material: LayerMaterial::POLYETHYLENE,
            serving: None,
            burial_depth,
            soil: LayerMaterial::SOIL,
        }
    }

    /// Adds an outer serving.
    #[must_use]
    pub fn with_serving(mut self, thickness: Length, material: LayerMaterial) -> Self {
        self.serving = Some((thickness, material));
        self
    }

    #[must_use]
    pub fn with_soil(mut self, soil: LayerMaterial) -> Self {
        self.soil = soil;
        self
    }

    /// Radius of a solid round conductor of the given cross-section.
    #[must_use]
    pub fn conductor_radius(&self) -> Length {
        Length::new::<meter>((self.cross_section.get::<square_meter>() / PI).sqrt())
    }

    /// Builds the thermal spec of the cable in its surroundings.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] if a dimension or material property is not
    /// strictly positive, or if the cable surface lies beyond twice the
    /// burial depth.
    pub fn spec(&self) -> Result<CableThermalSpec, SpecError> {
        let conductor = Conductor::of_material(self.material, self.cross_section)?;

        let mut layers = vec![
            (
                Layer::Insulation,
                self.insulation.material(),
                self.insulation_thickness,
            ),
            (Layer::Sheath, self.sheath_material, self.sheath_thickness),
        ];
        if let Some((thickness, material)) = self.serving {
            layers.push((Layer::Serving, material, thickness));
        }

        let mut stages = Vec::with_capacity(layers.len() + 1);
        let mut inner = self.conductor_radius().get::<meter>();
        for (layer, material, thickness) in layers {
            let outer = inner + thickness.get::<meter>();
            stages.push(shell(layer, &material, inner, outer)?);
            inner = outer;
        }

        let ground = 2.0 * self.burial_depth.get::<meter>();
        stages.push(shell(Layer::Surroundings, &self.soil, inner, ground)?);

        CableThermalSpec::new(
            conductor,
            stages,
            self.insulation.max_operating_temperature(),
        )
    }
}

fn shell(
    layer: Layer,
    material: &LayerMaterial,
    inner: f64,
    outer: f64,
) -> Result<ThermalStage, SpecError> {
    ThermalStage::from_si(
        layer,
        material.resistance(inner, outer),
        material.capacitance(inner, outer),
        inner,
        outer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_millimeter, length::millimeter};

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    fn xlpe_cable() -> CableConstruction {
        CableConstruction::new(
            ConductorMaterial::Copper,
            Area::new::<square_millimeter>(506.7),
            Insulation::Xlpe,
            mm(4.5),
            mm(2.0),
            Length::new::<meter>(1.0),
        )
    }

    #[test]
    fn layers_are_concentric_shells() {
        let spec = xlpe_cable().spec().unwrap();
        let stages = spec.stages();
        assert_eq!(stages.len(), 3);

        let rc = (506.7e-6 / PI).sqrt();
        assert_relative_eq!(stages[0].inner_radius().get::<meter>(), rc);
        assert_relative_eq!(stages[0].outer_radius().get::<meter>(), rc + 0.0045);
        assert_relative_eq!(stages[2].outer_radius().get::<meter>(), 2.0);

        assert_relative_eq!(
            stages[0].resistance().value,
            3.5 / (2.0 * PI) * ((rc + 0.0045) / rc).ln(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            stages[1].capacitance().value,
            PI * ((rc + 0.0065).powi(2) - (rc + 0.0045).powi(2)) * 950.0 * 2300.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            stages[2].resistance().value,
            1.0 / (2.0 * PI) * (2.0 / (rc + 0.0065)).ln(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn conductor_follows_material() {
        let spec = xlpe_cable().spec().unwrap();
        let conductor = spec.conductor();

        assert_relative_eq!(conductor.dc_resistance().value, 1.72e-8 / 506.7e-6);
        assert_relative_eq!(
            conductor.heat_capacity().value,
            506.7e-6 * 8960.0 * 385.0,
            max_relative = 1e-12
        );
        assert_eq!(
            spec.max_operating_temperature(),
            Insulation::Xlpe.max_operating_temperature()
        );
    }

    #[test]
    fn serving_adds_a_stage() {
        let spec = xlpe_cable()
            .with_serving(mm(3.0), LayerMaterial::PVC)
            .spec()
            .unwrap();
        let layers: Vec<Layer> = spec.stages().iter().map(ThermalStage::layer).collect();
        assert_eq!(
            layers,
            vec![
                Layer::Insulation,
                Layer::Sheath,
                Layer::Serving,
                Layer::Surroundings
            ]
        );
    }

    #[test]
    fn drier_soil_raises_resistance() {
        let moist = xlpe_cable().spec().unwrap();
        let dry = xlpe_cable()
            .with_soil(LayerMaterial {
                thermal_resistivity: 2.5,
                ..LayerMaterial::SOIL
            })
            .spec()
            .unwrap();
        assert!(dry.total_thermal_resistance() > moist.total_thermal_resistance());
    }

    #[test]
    fn rejects_invalid_construction() {
        let shallow = CableConstruction {
            burial_depth: mm(5.0),
            ..xlpe_cable()
        };
        assert!(matches!(
            shallow.spec(),
            Err(SpecError::NonIncreasingRadii { .. })
        ));

        let bare = CableConstruction {
            insulation_thickness: mm(0.0),
            ..xlpe_cable()
        };
        assert!(bare.spec().is_err());
    }

    #[test]
    fn insulation_limits() {
        let celsius = |i: Insulation| i.max_operating_temperature().get::<degree_celsius>();
        assert_relative_eq!(celsius(Insulation::Xlpe), 90.0);
        assert_relative_eq!(celsius(Insulation::Epr), 90.0);
        assert_relative_eq!(celsius(Insulation::Paper), 80.0);
        assert_relative_eq!(celsius(Insulation::Pilc), 85.0);
        assert_relative_eq!(celsius(Insulation::Pvc), 70.0);
    }
}
