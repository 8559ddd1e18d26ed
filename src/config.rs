//! Registry configuration file.
//!
//! ```toml
//! [[projection]]
//! code = "EPSG:32633"
//! def = "+proj=utm +zone=33 +datum=WGS84 +units=m +no_defs"
//! extent = [166021.44, 0.0, 833978.56, 9329005.18]
//!
//! # Override the extent of a built-in code
//! [[projection]]
//! code = "EPSG:900913"
//! extent = [-20037508.34, -20037508.34, 20037508.34, 20037508.34]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, RegistryError};
use crate::proj::crs::validate_proj4;
use crate::proj::registry::{ProjectionDefinition, ProjectionRegistry, Unit};

#[derive(Debug, Deserialize, Default)]
pub struct RegistryConfig {
    #[serde(default, rename = "projection")]
    pub projections: Vec<ProjectionConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProjectionConfig {
    pub code: String,
    #[serde(default)]
    pub def: Option<String>,
    #[serde(default)]
    pub extent: Option<[f64; 4]>,
    #[serde(default)]
    pub unit: Option<Unit>,
}

impl RegistryConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

impl ProjectionRegistry {
    /// Built-in definitions extended with the configured ones.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.apply_config(config)?;
        Ok(registry)
    }

    /// Register every configured projection, in file order.
    ///
    /// An entry without `def` only sets the extent of an already registered code.
    pub fn apply_config(&mut self, config: &RegistryConfig) -> Result<(), ConfigError> {
        for entry in &config.projections {
            match &entry.def {
                Some(def) => {
                    validate_proj4(def).map_err(|e| RegistryError::InvalidDefinition {
                        code: entry.code.clone(),
                        reason: e.to_string(),
                    })?;
                    let mut definition = ProjectionDefinition::new(entry.code.as_str(), def.as_str());
                    definition.extent = entry.extent;
                    if let Some(unit) = entry.unit {
                        definition = definition.with_unit(unit);
                    }
                    self.register(definition);
                }
                None => {
                    let extent = entry.extent.ok_or_else(|| RegistryError::InvalidDefinition {
                        code: entry.code.clone(),
                        reason: "entry needs a def or an extent".to_string(),
                    })?;
                    self.set_extent(&entry.code, extent)?;
                }
            }
        }
        Ok(())
    }
}
