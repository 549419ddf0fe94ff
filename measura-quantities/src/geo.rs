//! Geographic coordinates in degrees-minutes-seconds
//!
//! Accepted forms: `52°14'5.123"N`, `-52° 14′ 5″`, `52deg 14' 5" S`,
//! `52.2347 N`, `52 14 5.123 N`, `-52.2347`. Degree spellings are unified
//! with the same primitive the symbol canonicalizer uses.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use measura_core::symbol::{normalize_degree_signs, DEGREE_SIGN};
use measura_core::validation::require_within;
use measura_core::{format_number, parse_number, UnitError, Validated};

use crate::angle::{Angle, AngleUnit};

/// Range and hemisphere letters of a coordinate axis
pub trait Axis: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    const NAME: &'static str;
    /// Absolute limit in degrees
    const LIMIT: f64;
    const POSITIVE: char;
    const NEGATIVE: char;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatitudeAxis;

impl Axis for LatitudeAxis {
    const NAME: &'static str = "Latitude";
    const LIMIT: f64 = 90.0;
    const POSITIVE: char = 'N';
    const NEGATIVE: char = 'S';
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongitudeAxis;

impl Axis for LongitudeAxis {
    const NAME: &'static str = "Longitude";
    const LIMIT: f64 = 180.0;
    const POSITIVE: char = 'E';
    const NEGATIVE: char = 'W';
}

/// An angle in degrees, range-checked for its axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate<A: Axis> {
    angle: Angle,
    _axis: PhantomData<A>,
}

pub type Latitude = Coordinate<LatitudeAxis>;
pub type Longitude = Coordinate<LongitudeAxis>;

impl<A: Axis> Coordinate<A> {
    /// Signed decimal degrees, positive north/east
    pub fn new(degrees: f64) -> Validated<Self> {
        Self::from_angle(Angle::new(degrees, AngleUnit::Degree))
    }

    /// Any angle; stored in degrees
    pub fn from_angle(angle: Angle) -> Validated<Self> {
        let limit = Angle::new(A::LIMIT, AngleUnit::Degree);
        let angle = require_within(angle.to_unit(AngleUnit::Degree), -limit, limit)?;
        Ok(Coordinate {
            angle,
            _axis: PhantomData,
        })
    }

    /// Parse a DMS or decimal-degree string
    pub fn from_dms(text: &str) -> Result<Self, UnitError> {
        let degrees = parse_dms::<A>(text)?;
        Ok(Self::new(degrees)?)
    }

    pub fn degrees(&self) -> f64 {
        self.angle.value()
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// `52°14'5.123"N`, seconds rounded to milliseconds
    pub fn to_dms(&self) -> String {
        let degrees = self.degrees();
        let hemisphere = if degrees < 0.0 { A::NEGATIVE } else { A::POSITIVE };

        let abs = degrees.abs();
        let mut d = abs.trunc();
        let minutes_total = (abs - d) * 60.0;
        let mut m = minutes_total.trunc();
        let mut s = ((minutes_total - m) * 60.0 * 1_000.0).round() / 1_000.0;

        if s >= 60.0 {
            s -= 60.0;
            m += 1.0;
        }
        if m >= 60.0 {
            m -= 60.0;
            d += 1.0;
        }

        format!(
            "{}{}{}'{}\"{}",
            d,
            DEGREE_SIGN,
            m,
            format_number(s),
            hemisphere
        )
    }
}

impl<A: Axis> fmt::Display for Coordinate<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dms())
    }
}

impl<A: Axis> FromStr for Coordinate<A> {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dms(s)
    }
}

/// Signed decimal degrees from DMS text; no range check
fn parse_dms<A: Axis>(text: &str) -> Result<f64, UnitError> {
    let malformed = || UnitError::malformed_coordinate(text);

    let mut body = normalize_degree_signs(&text.trim().to_lowercase())
        .replace(['′', '’'], "'")
        .replace(['″', '”'], "\"")
        .replace("''", "\"");

    let positive = A::POSITIVE.to_ascii_lowercase();
    let negative = A::NEGATIVE.to_ascii_lowercase();

    let mut sign = 1.0;
    if let Some(last) = body.chars().last() {
        if last == positive || last == negative {
            if last == negative {
                sign = -1.0;
            }
            body.pop();
        }
    }

    let body = body.trim();
    let body = match body.strip_prefix('-') {
        // Sign given twice
        Some(_) if sign < 0.0 => return Err(malformed()),
        Some(rest) => {
            sign = -1.0;
            rest
        }
        None => body.strip_prefix('+').unwrap_or(body),
    };

    let [d, m, s] = split_components(body).ok_or_else(malformed)?;
    let degrees = d.ok_or_else(malformed)?;
    let minutes = m.unwrap_or(0.0);
    let seconds = s.unwrap_or(0.0);

    let in_range = |v: f64| (0.0..60.0).contains(&v);
    if degrees < 0.0 || !in_range(minutes) || !in_range(seconds) {
        return Err(malformed());
    }

    Ok(sign * (degrees + minutes / 60.0 + seconds / 3_600.0))
}

/// Degrees, minutes and seconds, by marker or by position
fn split_components(body: &str) -> Option<[Option<f64>; 3]> {
    let mut values: [Option<f64>; 3] = [None; 3];
    let mut slot = 0;
    let mut number = String::new();

    for c in body.chars() {
        let marker = match c {
            DEGREE_SIGN => Some(0),
            '\'' => Some(1),
            '"' => Some(2),
            _ => None,
        };

        if let Some(target) = marker {
            if number.is_empty() || target < slot {
                return None;
            }
            store(&mut values, target, &number)?;
            number.clear();
            slot = target + 1;
        } else if c.is_whitespace() {
            if !number.is_empty() {
                store(&mut values, slot, &number)?;
                number.clear();
                slot += 1;
            }
        } else {
            number.push(c);
        }
    }

    if !number.is_empty() {
        store(&mut values, slot, &number)?;
    }
    Some(values)
}

fn store(values: &mut [Option<f64>; 3], slot: usize, number: &str) -> Option<()> {
    let target = values.get_mut(slot)?;
    if target.is_some() {
        return None;
    }
    *target = Some(parse_number(number).ok()?);
    Some(())
}
