// src/common/unit.rs

use super::error::ConfigError;
use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

/// Units of distance accepted and returned by the sensor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Unit {
    Millimeter,
    #[default]
    Centimeter,
    Meter,
    Inch,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Millimeter, Unit::Centimeter, Unit::Meter, Unit::Inch];

    /// Multiplier from metres to this unit.
    #[inline]
    pub const fn per_meter(self) -> f64 {
        match self {
            Unit::Millimeter => 1000.0,
            Unit::Centimeter => 100.0,
            Unit::Meter => 1.0,
            Unit::Inch => 39.3701,
        }
    }

    /// Short token: `mm`, `cm`, `m` or `inch`.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Inch => "inch",
        }
    }
}

impl FromStr for Unit {
    type Err = ConfigError;

    /// Parses a unit token. Tokens are exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(Unit::Millimeter),
            "cm" => Ok(Unit::Centimeter),
            "m" => Ok(Unit::Meter),
            "inch" => Ok(Unit::Inch),
            _ => Err(ConfigError::InvalidUnit),
        }
    }
}

impl TryFrom<&str> for Unit {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
