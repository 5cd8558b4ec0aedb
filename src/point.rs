// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::Error;

/// Minimum latitude of a [Point], in millionths of a degree.
pub const MIN_LATITUDE: i32 = -90_000_000;

/// Maximum latitude of a [Point], in millionths of a degree.
pub const MAX_LATITUDE: i32 = 90_000_000;

/// Minimum longitude of a [Point], in millionths of a degree.
pub const MIN_LONGITUDE: i32 = -180_000_000;

/// Maximum longitude of a [Point], in millionths of a degree.
pub const MAX_LONGITUDE: i32 = 180_000_000;

/// Kilometers per degree of latitude, used by the flat-earth approximation.
///
/// The value is only accurate around 32.78°N 35.01°E, and all distances
/// and headings computed by this crate are only meaningful in a small area
/// around that location.
pub const KM_PER_DEGREE_LATITUDE: f64 = 110.901;

/// Kilometers per degree of longitude, used by the flat-earth approximation.
/// See [KM_PER_DEGREE_LATITUDE].
pub const KM_PER_DEGREE_LONGITUDE: f64 = 93.681;

const MICRODEGREES_PER_DEGREE: f64 = 1_000_000.0;

/// Represents a geographic position, with latitude and longitude
/// stored as integer millionths of a degree.
///
/// North latitudes and east longitudes are positive.
/// Equality and hashing are exact, as no floating-point values are involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    lat: i32,
    lon: i32,
}

impl Point {
    /// Creates a new Point from latitude and longitude in millionths of a degree.
    ///
    /// Returns an error if the latitude is outside of [[MIN_LATITUDE], [MAX_LATITUDE]]
    /// or the longitude is outside of [[MIN_LONGITUDE], [MAX_LONGITUDE]].
    pub fn new(lat: i32, lon: i32) -> Result<Self, Error> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(Error::LatitudeOutOfRange(lat));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
            return Err(Error::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Creates a new Point from latitude and longitude in degrees,
    /// rounding both to the closest millionth of a degree.
    pub fn from_degrees(lat: f64, lon: f64) -> Result<Self, Error> {
        let lat = to_microdegrees(lat)?;
        let lon = to_microdegrees(lon)?;
        Self::new(lat, lon)
    }

    /// Latitude in millionths of a degree.
    pub fn lat(&self) -> i32 {
        self.lat
    }

    /// Longitude in millionths of a degree.
    pub fn lon(&self) -> i32 {
        self.lon
    }

    pub fn lat_degrees(&self) -> f64 {
        self.lat as f64 / MICRODEGREES_PER_DEGREE
    }

    pub fn lon_degrees(&self) -> f64 {
        self.lon as f64 / MICRODEGREES_PER_DEGREE
    }

    /// Calculates the distance to another point, in kilometers,
    /// using the flat-earth approximation (see [KM_PER_DEGREE_LATITUDE]).
    pub fn distance_to(&self, other: &Point) -> f64 {
        let (dlat, dlon) = self.scaled_delta(other);
        dlat.hypot(dlon) / MICRODEGREES_PER_DEGREE
    }

    /// Calculates the compass heading from this point to another one,
    /// using the flat-earth approximation (see [KM_PER_DEGREE_LATITUDE]).
    ///
    /// The result is in degrees, in the range [0, 360), with north at 0°
    /// and angles increasing clockwise (east is 90°, south is 180°, west is 270°).
    ///
    /// Returns [Error::UndefinedHeading] if both points are equal.
    pub fn heading_to(&self, other: &Point) -> Result<f64, Error> {
        if self == other {
            return Err(Error::UndefinedHeading(*self));
        }

        // Mathematical angle: east at 0°, counter-clockwise
        let (dlat, dlon) = self.scaled_delta(other);
        let mut theta = dlat.atan2(dlon).to_degrees();
        if theta < 0.0 {
            theta += 360.0;
        }

        // Convert into a compass heading
        if theta <= 90.0 {
            Ok(90.0 - theta)
        } else {
            Ok(360.0 - (theta - 90.0))
        }
    }

    /// Returns latitude and longitude differences (other - self),
    /// scaled to km·10⁻⁶.
    fn scaled_delta(&self, other: &Point) -> (f64, f64) {
        let dlat = (other.lat as i64 - self.lat as i64) as f64 * KM_PER_DEGREE_LATITUDE;
        let dlon = (other.lon as i64 - self.lon as i64) as f64 * KM_PER_DEGREE_LONGITUDE;
        (dlat, dlon)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat_degrees(), self.lon_degrees())
    }
}

fn to_microdegrees(degrees: f64) -> Result<i32, Error> {
    if !degrees.is_finite() {
        return Err(Error::NonFiniteCoordinate);
    }

    // Values outside of i32 are clamped by the cast, and are rejected
    // by the range check in Point::new anyway.
    Ok((degrees * MICRODEGREES_PER_DEGREE).round() as i32)
}
