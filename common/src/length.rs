use std::{fmt, str::FromStr, sync::LazyLock};

use anyhow::Result;
use regex::Regex;

use crate::LENGTH_REGEX;

static LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LENGTH_REGEX).expect("LENGTH_REGEX is a valid pattern"));

// a literal css length, e.g. "0.25rem"
//
// this exists so that arithmetic on theme tokens (the menu centers its active marker using
// half of the border token) happens once, when the stylesheet is built, instead of being left
// to a calc() expression nested inside another calc()
#[derive(Clone, Debug, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: String,
}

impl Length {
    pub fn half(&self) -> Length {
        self.scale(0.5)
    }

    pub fn scale(&self, factor: f64) -> Length {
        Length {
            value: self.value * factor,
            unit: self.unit.clone(),
        }
    }
}

impl FromStr for Length {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let captures = LENGTH
            .captures(s.trim())
            .ok_or_else(|| anyhow::Error::msg(format!("'{s}' is not a css length")))?;

        // only the bare zero alternative leaves the groups empty
        let (value, unit) = match (captures.name("value"), captures.name("unit")) {
            (Some(value), Some(unit)) => (value.as_str().parse::<f64>()?, unit.as_str().to_owned()),
            _ => (0.0, String::new()),
        };

        Ok(Length { value, unit })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
