//! Run configuration

use std::path::{Path, PathBuf};

use crate::errors::{MapError, Result};
use crate::projection::{Projection, ProjectionParams};

pub const DEFAULT_SCALE: f64 = 1.0;

/// Immutable settings for one map rendering
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    world_map: PathBuf,
    scale: f64,
    projection: Projection,
}

impl MapConfig {
    /// Validate and build a configuration
    pub fn new(world_map: impl Into<PathBuf>, scale: f64, projection: Projection) -> Result<Self> {
        let world_map = world_map.into();
        if world_map.as_os_str().is_empty() {
            return Err(MapError::Config("must supply a world map file".to_string()));
        }
        if !scale.is_finite() {
            return Err(MapError::Config(format!(
                "scale must be a finite number, got {scale}"
            )));
        }
        Ok(Self {
            world_map,
            scale,
            projection,
        })
    }

    pub fn world_map(&self) -> &Path {
        &self.world_map
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }
}

impl From<&MapConfig> for ProjectionParams {
    fn from(config: &MapConfig) -> Self {
        ProjectionParams::new(config.projection, config.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = MapConfig::new("world.csv", 2.5, Projection::Miller43).unwrap();
        assert_eq!(config.world_map(), Path::new("world.csv"));
        let params = ProjectionParams::from(&config);
        assert_eq!(params.projection, Projection::Miller43);
        assert_eq!(params.scale, 2.5);
        assert_eq!(params.reference_longitude, 0.0);
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = MapConfig::new("", DEFAULT_SCALE, Projection::Flat).unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }

    #[test]
    fn test_non_finite_scale_rejected() {
        for scale in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(MapConfig::new("w.csv", scale, Projection::Flat).is_err());
        }
    }
}
