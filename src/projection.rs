//! Equirectangular projections onto integer canvas coordinates
//!
//! The `miller*` variants keep their historical names but are plate carrée
//! projections with a standard-parallel correction, not Miller cylindrical.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::errors::MapError;
use crate::geo::GeoPoint;

/// Selectable projection method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Projection {
    /// Plain plate carrée, standard parallel at the equator
    #[default]
    Flat,
    /// Standard parallel 37°30', minimal overall scale distortion
    Miller37,
    /// Standard parallel 43°, minimal distortion over continents
    Miller43,
    /// Standard parallel 50°28' (Miller 1949)
    Miller50,
}

impl Projection {
    pub const ALL: [Projection; 4] = [
        Projection::Flat,
        Projection::Miller37,
        Projection::Miller43,
        Projection::Miller50,
    ];

    /// Reference latitude in degrees
    pub fn standard_parallel(self) -> f64 {
        match self {
            Projection::Flat => 0.0,
            Projection::Miller37 => 37.0 + 30.0 / 60.0,
            Projection::Miller43 => 43.0,
            Projection::Miller50 => 50.0 + 28.0 / 60.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Projection::Flat => "flat",
            Projection::Miller37 => "miller37",
            Projection::Miller43 => "miller43",
            Projection::Miller50 => "miller50",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Projection {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Projection::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Projection::ALL.iter().map(|p| p.as_str()).collect();
                MapError::Config(format!(
                    "projection must be one of: {}",
                    names.join(", ")
                ))
            })
    }
}

/// Integer position on the braille canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CanvasPoint {
    pub x: i32,
    pub y: i32,
}

impl CanvasPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Everything needed to project a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub projection: Projection,
    pub scale: f64,
    /// Always 0 for the supported projections
    pub reference_longitude: f64,
}

impl ProjectionParams {
    pub fn new(projection: Projection, scale: f64) -> Self {
        Self {
            projection,
            scale,
            reference_longitude: 0.0,
        }
    }

    #[inline]
    pub fn reference_latitude(&self) -> f64 {
        self.projection.standard_parallel()
    }
}

/// Project a point onto the canvas plane
pub fn project(point: GeoPoint, params: &ProjectionParams) -> CanvasPoint {
    let phi0 = params.reference_latitude();
    let xf = (point.longitude() - params.reference_longitude) * phi0.to_radians().cos();
    let yf = point.latitude() - phi0;
    CanvasPoint {
        x: (xf * params.scale).round() as i32,
        y: (yf * params.scale).round() as i32,
    }
}
