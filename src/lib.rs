//! mapcoords: coordinate reference system and geometry utilities for web
//! mapping clients.
//!
//! Reprojection runs against an explicit [`ProjectionRegistry`]; operations
//! that cannot be carried out (unknown CRS, failed transform) return `None`.

pub mod affine;
pub mod bbox;
pub mod config;
pub mod error;
pub mod geodesic;
pub mod geometry;
pub mod proj;
pub mod reproject;
pub mod units;
pub mod viewport;
pub mod visible_area;

pub use bbox::BoundingBox;
pub use config::RegistryConfig;
pub use error::{ConfigError, ProjError, RegistryError};
pub use proj::code::{compatible_srs, extract_crs_from_urn, make_numeric_epsg, normalize_srs};
pub use proj::registry::{ProjectionDefinition, ProjectionRegistry};
pub use reproject::{reproject, reproject_bbox, ProjectedPoint};
