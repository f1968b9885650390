//! Parser for the canonical compass string.
//!
//! Inverts exactly the grammar produced by `Display`:
//!
//! ```text
//! compass = ring "," ring "," ring "/" [ code *( "," code ) ]
//! ring    = loc sign digits        ; loc in 0..6, |speed| < 6, no leading zeros, no "-0"
//! sign    = "+" / "-"
//! code    = "o" / "m" / "i" / "om" / "oi" / "mi"
//! ```
//!
//! Empty codes stand for unnamed patterns and cannot be inverted, so they are
//! rejected. The parsed value is returned standardized.

use std::str::FromStr;

use crate::{Compass, CompassError, ParseErrorKind, Ring, RingGroup, POSITIONS};

impl FromStr for Compass {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_compass(s).map_err(|reason| {
            tracing::debug!(input = s, %reason, "rejected compass string");
            CompassError::Parse {
                input: s.to_string(),
                reason,
            }
        })
    }
}

fn parse_compass(s: &str) -> Result<Compass, ParseErrorKind> {
    let (rings, groups) = s
        .split_once('/')
        .ok_or(ParseErrorKind::MissingGroupDelimiter)?;

    let fields: Vec<&str> = rings.split(',').collect();
    let [outer, middle, inner] = fields.as_slice() else {
        return Err(ParseErrorKind::WrongRingCount(fields.len()));
    };

    let ring_groups = if groups.is_empty() {
        Vec::new()
    } else {
        groups
            .split(',')
            .map(|code| {
                RingGroup::from_short_name(code)
                    .ok_or_else(|| ParseErrorKind::UnknownRingGroupCode(code.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    let compass = Compass::new(
        parse_ring(outer)?,
        parse_ring(middle)?,
        parse_ring(inner)?,
        ring_groups,
    );
    Ok(compass.standardize())
}

fn parse_ring(field: &str) -> Result<Ring, ParseErrorKind> {
    let malformed = || ParseErrorKind::MalformedRing(field.to_string());

    let sign_at = field.find(|c: char| c == '+' || c == '-').ok_or_else(malformed)?;
    let (location, speed) = field.split_at(sign_at);

    if !is_decimal(location) || !is_decimal(&speed[1..]) || speed == "-0" {
        return Err(malformed());
    }

    let location: i64 = location.parse().map_err(|_| malformed())?;
    let speed: i64 = speed.parse().map_err(|_| malformed())?;

    if !(0..POSITIONS).contains(&location) {
        return Err(ParseErrorKind::LocationOutOfRange(location));
    }
    if speed.unsigned_abs() >= POSITIONS.unsigned_abs() {
        return Err(ParseErrorKind::SpeedOutOfRange(speed));
    }

    Ok(Ring::new(location, speed))
}

/// Digits without a leading zero, as `Display` writes them.
fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'))
}
