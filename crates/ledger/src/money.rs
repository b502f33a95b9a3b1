use std::{fmt, str::FromStr};

use num_format::{Locale, ToFormattedString};

/// Positive money amount represented as **integer cents**.
///
/// Use this type for all monetary values to avoid floating-point drift. The
/// value is unsigned in spirit: the transaction kind carries the direction,
/// so an `Amount` is always > 0.
///
/// # Examples
///
/// ```rust
/// use ledger::Amount;
///
/// let amount: Amount = "1234.56".parse().unwrap();
/// assert_eq!(amount.minor(), 123_456);
/// assert_eq!(amount.to_string(), "1,234.56");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

/// Rejection raised when a token is not a valid positive amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount")]
pub struct InvalidAmount;

impl Amount {
    /// Creates an amount from integer cents. Returns `None` unless the value
    /// is strictly positive.
    #[must_use]
    pub fn from_minor(minor: i64) -> Option<Self> {
        (minor > 0).then_some(Self(minor))
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns the value in major units, as sent on the wire.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Amount {
    /// Renders with thousands separators and exactly two decimals:
    /// `123_456` cents → `1,234.56`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.0 / 100;
        let cents = self.0 % 100;
        write!(f, "{}.{cents:02}", major.to_formatted_string(&Locale::en))
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = InvalidAmount;

    /// Parses a decimal token into cents.
    ///
    /// Validation rules:
    /// - digits only, `.` as decimal separator, no sign
    /// - 1 or 2 fractional digits when a separator is present
    /// - strictly positive, within 64-bit cents
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major_str, frac_str) = match s.split_once('.') {
            Some((major, frac)) => (major, Some(frac)),
            None => (s, None),
        };

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidAmount);
        }
        let major: i64 = major_str.parse().map_err(|_| InvalidAmount)?;

        let cents: i64 = match frac_str {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(InvalidAmount);
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| InvalidAmount)? * 10,
                    2 => frac.parse::<i64>().map_err(|_| InvalidAmount)?,
                    _ => return Err(InvalidAmount),
                }
            }
        };

        let total = major
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or(InvalidAmount)?;

        Amount::from_minor(total).ok_or(InvalidAmount)
    }
}
