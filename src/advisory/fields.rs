use std::str::FromStr;
use crate::advisory::normalizer::{section, until};
use crate::errors::{ExtractError, Field};

const PRESSURE_MARKER: &str = "PRESSURE...";
const WINDS_MARKER: &str = "WINDS...";
const LOCATION_MARKER: &str = "LOCATION...";
const ISSUED_MARKER: &str = "ISSUED AT ";
const MOVEMENT_MARKER: &str = "MOVEMENT...";

/// Radius markers in order of precedence. Plain "EXTEND" is not used since it
/// may refer to time rather than distance.
const RADIUS_MARKERS: [&str; 3] = ["RADI", "DIAMETER", "EXTEND OUTWARD"];

pub const KM_TO_MILES: f64 = 0.621371;

/// Storm movement as stated by the advisory, does not include the cone of uncertainty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub direction_deg: u32,
    pub speed_mph: u32,
}

/// Central pressure in mbar
///
/// # Arguments
///
/// * 'text' - normalized advisory summary
pub fn extract_pressure(text: &str) -> Result<u32, ExtractError> {
    let value = section(text, PRESSURE_MARKER).ok_or(ExtractError::missing(Field::Pressure))?;

    leading_number(until(value, "..."), Field::Pressure)
}

/// Maximum sustained wind in mph
///
/// # Arguments
///
/// * 'text' - normalized advisory summary
pub fn extract_wind(text: &str) -> Result<u32, ExtractError> {
    let value = section(text, WINDS_MARKER).ok_or(ExtractError::missing(Field::Wind))?;

    leading_number(until(value, "..."), Field::Wind)
}

/// Storm center as (latitude, longitude).
///
/// Longitude is always stored negated, i.e. the feed is assumed to cover western
/// hemisphere basins (Atlantic and Eastern Pacific) only.
///
/// # Arguments
///
/// * 'text' - normalized advisory summary
pub fn extract_position(text: &str) -> Result<(f64, f64), ExtractError> {
    let value = section(text, LOCATION_MARKER).ok_or(ExtractError::missing(Field::Location))?;
    let mut tokens = until(value, "ABOUT").split_whitespace();

    let lat = tokens.next().ok_or(ExtractError::missing(Field::Location))?;
    let long = tokens.next().ok_or(ExtractError::missing(Field::Location))?;

    let latitude: f64 = parse_token(lat.trim_end_matches('N'), Field::Location)?;
    let longitude: f64 = parse_token(long.trim_end_matches('W'), Field::Location)?;

    Ok((latitude, -longitude.abs()))
}

/// Raw issue time of the advisory, e.g. "1100 AM EDT THU SEP 29 2022"
///
/// # Arguments
///
/// * 'text' - normalized advisory summary
pub fn extract_issue_time(text: &str) -> Result<String, ExtractError> {
    let value = section(text, ISSUED_MARKER).ok_or(ExtractError::missing(Field::IssueTime))?;

    Ok(until(value, " <PRE").to_string())
}

/// Direction and speed of the storm. The advisory states the direction twice,
/// as a compass point and in degrees ("NNE OR 30 DEGREES AT 12 MPH"), the
/// part after " OR " is used.
///
/// # Arguments
///
/// * 'text' - normalized advisory summary
pub fn extract_movement(text: &str) -> Result<Movement, ExtractError> {
    let value = until(
        section(text, MOVEMENT_MARKER).ok_or(ExtractError::missing(Field::Movement))?,
        "...");

    let (_, specific) = value.split_once(" OR ").ok_or(ExtractError::missing(Field::Movement))?;
    let (direction, speed) = until(specific, " OR ")
        .split_once(" AT ")
        .ok_or(ExtractError::missing(Field::Movement))?;

    Ok(Movement {
        direction_deg: leading_number(direction, Field::Movement)?,
        speed_mph: leading_number(until(speed, " AT "), Field::Movement)?,
    })
}

/// Radius of the storm in miles taken from the advisory description.
///
/// The first marker found decides where to look, the first numeric token after it
/// is the magnitude and the token following that the unit. Diameters are halved and
/// kilometers converted. Falls back to 'default_radius_mi' if nothing usable is found.
///
/// # Arguments
///
/// * 'description' - normalized advisory description
/// * 'default_radius_mi' - radius to use when the description does not state one
pub fn extract_radius(description: &str, default_radius_mi: f64) -> f64 {
    let Some(marker) = RADIUS_MARKERS.iter().find(|m| description.contains(**m)) else {
        return default_radius_mi;
    };
    let Some(value) = section(description, marker) else {
        return default_radius_mi;
    };

    let tokens = value
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()))
        .collect::<Vec<&str>>();

    let Some(pos) = tokens.iter().position(|t| is_digits(t)) else {
        return default_radius_mi;
    };
    let Ok(mut radius) = tokens[pos].parse::<f64>() else {
        return default_radius_mi;
    };

    if *marker == "DIAMETER" {
        radius /= 2.0;
    }
    if tokens.get(pos + 1).is_some_and(|unit| unit.starts_with("KM")) {
        radius *= KM_TO_MILES;
    }

    if radius > 0.0 { radius } else { default_radius_mi }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Parses the first whitespace delimited token of 'text'
fn leading_number<T: FromStr>(text: &str, field: Field) -> Result<T, ExtractError> {
    parse_token(text.split_whitespace().next().unwrap_or(""), field)
}

fn parse_token<T: FromStr>(token: &str, field: Field) -> Result<T, ExtractError> {
    token.parse::<T>().map_err(|_| ExtractError::malformed(field, token))
}
