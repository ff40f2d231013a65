use std::fmt;

/// Failures surfaced by the area core.
///
/// A ring with fewer than three vertices is not an error: the area functions
/// return `0.0` for it.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaError {
    /// A per-hectare ratio was requested for a plot with zero area.
    ZeroArea,
    /// A per-hectare ratio was requested with a negative or non-finite area.
    InvalidArea(f64),
    /// A `"lat,lon"` segment could not be parsed.
    MalformedCoordinate { input: String, reason: &'static str },
    /// A number in a comma-separated list could not be parsed or is out of range.
    MalformedNumber { input: String, reason: &'static str },
    /// Neither paired coordinates nor latitude/longitude lists were supplied.
    NoCoordinates,
}

impl fmt::Display for AreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaError::ZeroArea => {
                write!(f, "plot area is zero; per-hectare figures are undefined")
            }
            AreaError::InvalidArea(area) => {
                write!(f, "plot area {area} is not a finite non-negative number")
            }
            AreaError::MalformedCoordinate { input, reason } => {
                write!(f, "malformed coordinate '{input}': {reason}")
            }
            AreaError::MalformedNumber { input, reason } => {
                write!(f, "malformed number '{input}': {reason}")
            }
            AreaError::NoCoordinates => write!(f, "no coordinates were supplied"),
        }
    }
}

impl std::error::Error for AreaError {}
