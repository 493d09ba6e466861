use crate::Result;

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Signed fixed-point quantity with four decimal places, so `Money(10000)` is 1.00
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);
    pub const ZERO: Self = Self(0);

    /// Number of units in 1.00
    pub const SCALE: i64 = 10_000;

    pub const fn from_whole(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    /// Parses strings like `"1500"`, `"-250.5"` or `".75"`. Fractional digits past the fourth
    /// are truncated.
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = digits.split('.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        if whole.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("No digits", string.to_string()))?
        }

        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            Err(MoneyError::Parse("Unexpected character", string.to_string()))?
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse()? };

        let fraction: i64 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<4}", fraction)[..4].parse()?
        };

        let value = whole
            .checked_mul(Self::SCALE)
            .and_then(|whole| whole.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Value out of range", string.to_string()))?;

        return Ok(Money(if negative { -value } else { value }));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }

    pub fn is_negative(&self) -> bool {
        return self.0 < 0;
    }

    /// Adds `other` in place. On failure `self` is left as it was.
    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self.0.checked_add(other.0).ok_or_else(|| {
            if other.0 > 0 {
                MoneyError::Overflow("add", *self, *other)
            } else {
                MoneyError::Underflow("add", *self, *other)
            }
        })?;

        self.0 = sum;

        return Ok(());
    }

    /// Subtracts `other` in place. On failure `self` is left as it was.
    pub fn sub(&mut self, other: &Self) -> Result {
        let difference = self.0.checked_sub(other.0).ok_or_else(|| {
            if other.0 < 0 {
                MoneyError::Overflow("sub", *self, *other)
            } else {
                MoneyError::Underflow("sub", *self, *other)
            }
        })?;

        self.0 = difference;

        return Ok(());
    }

    /// `rate` percent of `self`, truncated toward zero
    pub fn percent(&self, rate: &Self) -> Result<Self> {
        let scaled = i128::from(self.0) * i128::from(rate.0) / i128::from(100 * Self::SCALE);

        let value = i64::try_from(scaled).map_err(|_| {
            if scaled > 0 {
                MoneyError::Overflow("percent", *self, *rate)
            } else {
                MoneyError::Underflow("percent", *self, *rate)
            }
        })?;

        return Ok(Money(value));
    }

    /// Renders every stored decimal place, used wherever the value must survive a round-trip
    pub fn to_precise_string(&self) -> String {
        let value = i128::from(self.0);
        let sign = if value < 0 { "-" } else { "" };
        let value = value.abs();
        let scale = i128::from(Self::SCALE);

        return format!("{sign}{}.{:04}", value / scale, value % scale);
    }
}

/// Two decimal places, rounded half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = i128::from(self.0);
        let cents = (value + if value < 0 { -50 } else { 50 }) / 100;

        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();

        return write!(f, "{sign}{}.{:02}", cents / 100, cents % 100);
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        return serializer.serialize_str(&self.to_precise_string());
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        return Money::parse(&string).map_err(de::Error::custom);
    }
}
