//! Geographic points read from the input file

use crate::errors::{MapError, Result};

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A validated latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Build a point, rejecting coordinates outside the globe
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(MapError::Range {
                field: "latitude",
                value: latitude,
                line: None,
            });
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(MapError::Range {
                field: "longitude",
                value: longitude,
                line: None,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// The two text fields of one input record, named by meaning.
///
/// Files store longitude in the first column and latitude in the second.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    pub longitude: &'a str,
    pub latitude: &'a str,
}

impl<'a> RawRecord<'a> {
    /// Map the column layout `<longitude> <latitude>` onto named fields
    pub fn from_columns(first: &'a str, second: &'a str) -> Self {
        Self {
            longitude: first,
            latitude: second,
        }
    }

    pub fn parse(&self) -> Result<GeoPoint> {
        parse_point(self.latitude, self.longitude)
    }
}

fn parse_coordinate(field: &'static str, text: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| MapError::Parse {
        field,
        value: text.to_string(),
        line: None,
    })
}

/// Parse latitude and longitude text into a validated point.
///
/// The latitude is parsed and range-checked before the longitude, so a
/// record bad in both fields reports the latitude.
pub fn parse_point(latitude: &str, longitude: &str) -> Result<GeoPoint> {
    let lat = parse_coordinate("latitude", latitude)?;
    if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(MapError::Range {
            field: "latitude",
            value: lat,
            line: None,
        });
    }
    let long = parse_coordinate("longitude", longitude)?;
    GeoPoint::new(lat, long)
}
