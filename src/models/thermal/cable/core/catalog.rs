//! Lookup of cable specs by identifier.

use std::collections::BTreeMap;

use thiserror::Error;
use uom::si::{
    area::square_millimeter,
    electric_potential::kilovolt,
    f64::{Area, ElectricPotential, Length, ThermodynamicTemperature},
    length::{meter, millimeter},
};

use super::{CableConstruction, CableThermalSpec, ConductorMaterial, Insulation, SpecError};

/// Source of validated cable specs.
pub trait CableCatalog {
    /// Returns the spec stored under `id`, if any.
    fn cable(&self, id: &str) -> Option<CableThermalSpec>;

    /// Identifiers of every stored cable.
    fn ids(&self) -> Vec<String>;

    /// Returns the descriptive data of cable `id`.
    ///
    /// Catalogs that only hold thermal specs return `None`.
    fn describe(&self, _id: &str) -> Option<CableDescriptor> {
        None
    }

    /// Descriptions of every cable that has one, in [`ids`](Self::ids) order.
    fn descriptors(&self) -> Vec<CableDescriptor> {
        self.ids().iter().filter_map(|id| self.describe(id)).collect()
    }
}

/// Errors from [`lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("cable {0:?} not found")]
    NotFound(String),
}

/// Fetches a cable, turning an absent one into an error.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] if the catalog has no cable `id`.
pub fn lookup(catalog: &impl CableCatalog, id: &str) -> Result<CableThermalSpec, CatalogError> {
    catalog
        .cable(id)
        .ok_or_else(|| CatalogError::NotFound(id.to_owned()))
}

/// What a catalog lists about a cable besides its thermal network.
#[derive(Debug, Clone, PartialEq)]
pub struct CableDescriptor {
    pub id: String,

    /// Display name, e.g. `1000 MCM 15 KV CU XLPE`.
    pub name: String,

    /// Rated voltage.
    pub voltage: ElectricPotential,
    pub construction: CableConstruction,
}

impl CableDescriptor {
    #[must_use]
    pub fn conductor_material(&self) -> ConductorMaterial {
        self.construction.material
    }

    #[must_use]
    pub fn insulation(&self) -> Insulation {
        self.construction.insulation
    }

    #[must_use]
    pub fn conductor_area(&self) -> Area {
        self.construction.cross_section
    }

    #[must_use]
    pub fn conductor_diameter(&self) -> Length {
        self.construction.conductor_radius() * 2.0
    }

    #[must_use]
    pub fn insulation_thickness(&self) -> Length {
        self.construction.insulation_thickness
    }

    #[must_use]
    pub fn max_operating_temperature(&self) -> ThermodynamicTemperature {
        self.construction.insulation.max_operating_temperature()
    }
}

#[derive(Debug, Clone)]
struct Entry {
    spec: CableThermalSpec,
    descriptor: Option<CableDescriptor>,
}

/// Catalog held in memory, ordered by identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    cables: BTreeMap<String, Entry>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the two reference cables:
    ///
    /// - `1000_MCM_15_KV_CU_XLPE`: 506.7 mm² copper, 4.5 mm XLPE, 2 mm sheath
    /// - `750_MCM_12_KV_CU_Paper`: 380 mm² copper, 4.0 mm paper, 2 mm sheath
    ///
    /// Both are buried 1 m deep in [`LayerMaterial::SOIL`](super::LayerMaterial::SOIL).
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] if a reference construction fails to build, which
    /// does not happen for the built-in data.
    pub fn with_defaults() -> Result<Self, SpecError> {
        let buried = |mm2: f64, insulation: Insulation, thickness_mm: f64| {
            CableConstruction::new(
                ConductorMaterial::Copper,
                Area::new::<square_millimeter>(mm2),
                insulation,
                Length::new::<millimeter>(thickness_mm),
                Length::new::<millimeter>(2.0),
                Length::new::<meter>(1.0),
            )
        };

        let mut catalog = Self::new();
        catalog.insert_construction(
            "1000_MCM_15_KV_CU_XLPE",
            "1000 MCM 15 KV CU XLPE",
            ElectricPotential::new::<kilovolt>(15.0),
            buried(506.7, Insulation::Xlpe, 4.5),
        )?;
        catalog.insert_construction(
            "750_MCM_12_KV_CU_Paper",
            "750 MCM 12 KV CU Paper",
            ElectricPotential::new::<kilovolt>(12.0),
            buried(380.0, Insulation::Paper, 4.0),
        )?;
        Ok(catalog)
    }

    /// Stores `spec` under `id`, returning the spec it replaces.
    ///
    /// The cable has no [`CableDescriptor`].
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        spec: CableThermalSpec,
    ) -> Option<CableThermalSpec> {
        let entry = Entry {
            spec,
            descriptor: None,
        };
        self.cables.insert(id.into(), entry).map(|old| old.spec)
    }

    /// Builds the spec of `construction` and stores it with its description.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] if the construction does not yield a valid spec,
    /// in which case the catalog is unchanged.
    pub fn insert_construction(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        voltage: ElectricPotential,
        construction: CableConstruction,
    ) -> Result<Option<CableThermalSpec>, SpecError> {
        let spec = construction.spec()?;
        let id = id.into();
        let descriptor = CableDescriptor {
            id: id.clone(),
            name: name.into(),
            voltage,
            construction,
        };

        let entry = Entry {
            spec,
            descriptor: Some(descriptor),
        };
        Ok(self.cables.insert(id, entry).map(|old| old.spec))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }
}

impl CableCatalog for InMemoryCatalog {
    fn cable(&self, id: &str) -> Option<CableThermalSpec> {
        self.cables.get(id).map(|entry| entry.spec.clone())
    }

    fn ids(&self) -> Vec<String> {
        self.cables.keys().cloned().collect()
    }

    fn describe(&self, id: &str) -> Option<CableDescriptor> {
        self.cables.get(id)?.descriptor.clone()
    }
}
