//! Projection registry: CRS code → proj4 definition, unit and extent.
//!
//! The registry is plain data handed to every operation that needs it. It starts
//! from a small built-in table and is extended explicitly, from configuration
//! or from remote definitions.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::proj::code::{extract_crs_from_urn, make_numeric_epsg, EPSG_3857, EPSG_4326, EPSG_900913};

/// Extent used when a projection declares none.
pub const DEFAULT_EXTENT: [f64; 4] = [-20026376.39, -20048966.10, 20026376.39, 20048966.10];

const WGS84_DEF: &str = "+proj=longlat +datum=WGS84 +no_defs";
const NAD83_DEF: &str = "+proj=longlat +datum=NAD83 +no_defs";
const WEB_MERCATOR_DEF: &str =
    "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Degrees,
    Meters,
    Feet,
}

impl Unit {
    /// Infer the unit from proj4 parameters.
    pub fn from_proj4(def: &str) -> Self {
        let mut unit = Unit::Meters;
        for param in def.split_whitespace() {
            match param {
                "+proj=longlat" | "+proj=latlong" | "+proj=lonlat" | "+proj=latlon" => {
                    unit = Unit::Degrees
                }
                "+units=ft" | "+units=us-ft" => unit = Unit::Feet,
                _ => {}
            }
        }
        unit
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionDefinition {
    pub code: String,
    pub proj4: String,
    pub unit: Unit,
    /// Valid area in the projection's own units, `[minx, miny, maxx, maxy]`.
    pub extent: Option<[f64; 4]>,
}

impl ProjectionDefinition {
    pub fn new(code: impl Into<String>, proj4: impl Into<String>) -> Self {
        let proj4 = proj4.into();
        Self {
            code: code.into(),
            unit: Unit::from_proj4(&proj4),
            proj4,
            extent: None,
        }
    }

    pub fn with_extent(mut self, extent: [f64; 4]) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn is_geographic(&self) -> bool {
        self.unit == Unit::Degrees
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionExtent {
    pub code: String,
    pub extent: [f64; 4],
}

#[derive(Clone, Debug)]
pub struct ProjectionRegistry {
    definitions: BTreeMap<String, ProjectionDefinition>,
}

impl ProjectionRegistry {
    /// Registry with the built-in geographic and Web Mercator definitions.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(
            ProjectionDefinition::new(EPSG_4326, WGS84_DEF).with_extent([-180.0, -90.0, 180.0, 90.0]),
        );
        registry.register(ProjectionDefinition::new("EPSG:4269", NAD83_DEF));
        registry.register(ProjectionDefinition::new(EPSG_3857, WEB_MERCATOR_DEF).with_extent(DEFAULT_EXTENT));
        registry.register(ProjectionDefinition::new(EPSG_900913, WEB_MERCATOR_DEF));
        registry
    }

    pub fn empty() -> Self {
        Self {
            definitions: BTreeMap::new(),
        }
    }

    /// Add or replace a definition. Returns the replaced one.
    pub fn register(&mut self, definition: ProjectionDefinition) -> Option<ProjectionDefinition> {
        log::debug!("registering projection {}", definition.code);
        self.definitions.insert(definition.code.clone(), definition)
    }

    pub fn remove(&mut self, code: &str) -> Option<ProjectionDefinition> {
        let removed = self.definitions.remove(code);
        if removed.is_some() {
            log::debug!("removed projection {code}");
        }
        removed
    }

    /// Set the extent of an already registered code.
    pub fn set_extent(&mut self, code: &str, extent: [f64; 4]) -> Result<(), RegistryError> {
        let definition = self
            .definitions
            .get_mut(code)
            .ok_or_else(|| RegistryError::MissingDefinition(code.to_string()))?;
        definition.extent = Some(extent);
        Ok(())
    }

    /// Look up a definition, trying the exact code first and then its
    /// numeric EPSG form. URN codes are reduced to `AUTH:CODE` first.
    pub fn resolve(&self, code: &str) -> Option<&ProjectionDefinition> {
        let code = match extract_crs_from_urn(code) {
            Some(short) => Cow::Owned(short),
            None => Cow::Borrowed(code),
        };
        if let Some(definition) = self.definitions.get(code.as_ref()) {
            return Some(definition);
        }
        let numeric = make_numeric_epsg(&code)?;
        self.definitions.get(&numeric)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.resolve(code).is_some()
    }

    /// All registered codes, sorted.
    pub fn list_available(&self) -> Vec<&str> {
        self.definitions.keys().map(String::as_str).collect()
    }

    /// Codes that declare an extent, with that extent.
    pub fn projections(&self) -> BTreeMap<&str, [f64; 4]> {
        self.definitions
            .values()
            .filter_map(|def| def.extent.map(|extent| (def.code.as_str(), extent)))
            .collect()
    }

    /// The declared extent of `code`, or [`DEFAULT_EXTENT`].
    pub fn extent_for_projection(&self, code: &str) -> ProjectionExtent {
        let extent = self
            .definitions
            .get(code)
            .and_then(|def| def.extent)
            .unwrap_or(DEFAULT_EXTENT);
        ProjectionExtent {
            code: code.to_string(),
            extent,
        }
    }
}

impl Default for ProjectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
