//! Parsing of the form strings a map widget submits.
//!
//! - Paired coordinates: `"lat,lon;lat,lon;..."`.
//! - Separate lists: `"lat1, lat2, lat3"` and `"lon1, lon2, lon3"`.
//!
//! Blank segments (e.g. a trailing `;`) are skipped. Anything else that is not
//! a finite number is rejected; nothing is coerced to `0`. Latitudes must lie
//! in `[-90, 90]` and longitudes in `[-180, 180]`.

use std::str::FromStr;

use crate::area::{Coordinate, MAX_LATITUDE, MAX_LONGITUDE};
use crate::error::AreaError;

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[inline]
fn within(value: f64, limit: f64) -> bool {
    (-limit..=limit).contains(&value)
}

impl FromStr for Coordinate {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| AreaError::MalformedCoordinate {
            input: s.trim().to_string(),
            reason,
        };
        let mut parts = s.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed("expected exactly one ',' between latitude and longitude"));
        };
        let lat = parse_finite(lat).ok_or_else(|| malformed("latitude is not a finite number"))?;
        let lon = parse_finite(lon).ok_or_else(|| malformed("longitude is not a finite number"))?;
        if !within(lat, MAX_LATITUDE) {
            return Err(malformed("latitude outside [-90, 90]"));
        }
        if !within(lon, MAX_LONGITUDE) {
            return Err(malformed("longitude outside [-180, 180]"));
        }
        Ok(Coordinate { lat, lon })
    }
}

/// Parse `"lat,lon;lat,lon;..."` into an ordered ring.
pub fn parse_coordinate_pairs(input: &str) -> Result<Vec<Coordinate>, AreaError> {
    input
        .split(';')
        .filter(|seg| !seg.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Parse a comma-separated list of finite floats.
pub fn parse_float_list(input: &str) -> Result<Vec<f64>, AreaError> {
    parse_bounded_list(input, f64::INFINITY, "")
}

/// Parse a comma-separated latitude list, each in `[-90, 90]`.
pub fn parse_latitudes(input: &str) -> Result<Vec<f64>, AreaError> {
    parse_bounded_list(input, MAX_LATITUDE, "latitude outside [-90, 90]")
}

/// Parse a comma-separated longitude list, each in `[-180, 180]`.
pub fn parse_longitudes(input: &str) -> Result<Vec<f64>, AreaError> {
    parse_bounded_list(input, MAX_LONGITUDE, "longitude outside [-180, 180]")
}

fn parse_bounded_list(
    input: &str,
    limit: f64,
    out_of_range: &'static str,
) -> Result<Vec<f64>, AreaError> {
    input
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            let malformed = |reason| AreaError::MalformedNumber {
                input: s.trim().to_string(),
                reason,
            };
            let v = parse_finite(s).ok_or_else(|| malformed("not a finite number"))?;
            if within(v, limit) {
                Ok(v)
            } else {
                Err(malformed(out_of_range))
            }
        })
        .collect()
}
