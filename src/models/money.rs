//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is a plain JSON number in currency units
//! (`12.5`), matching the transaction file format.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Largest magnitude accepted from input or storage, in cents
const MAX_CENTS: i64 = 100_000_000_000_000_000;

impl Money {
    /// Largest amount accepted by [`Money::parse`] and deserialization
    /// (one quadrillion currency units)
    pub const MAX: Money = Money(MAX_CENTS);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finance_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.units(), 10);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "Rp 10000", "10", "10.5".
    /// More than two fraction digits and magnitudes above [`Money::MAX`]
    /// are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s
            .strip_prefix('$')
            .or_else(|| s.strip_prefix("Rp"))
            .unwrap_or(s)
            .trim_start();

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let cents = match s.split_once('.') {
            Some((units_str, cents_str)) => {
                if units_str.is_empty() || !cents_str.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }

                let units: i64 = units_str.parse().map_err(|_| invalid())?;

                let cents: i64 = match cents_str.len() {
                    0 => 0,
                    1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => cents_str.parse().map_err(|_| invalid())?,
                    _ => return Err(MoneyParseError::TooPrecise(original.to_string())),
                };

                units
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(cents))
                    .ok_or_else(invalid)?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        if cents < 0 {
            // sign is only accepted as a leading '-'
            return Err(invalid());
        }
        if cents > MAX_CENTS {
            return Err(MoneyParseError::OutOfRange(original.to_string()));
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let separator = if symbol.chars().last().is_some_and(|c| c.is_alphabetic()) {
            " "
        } else {
            ""
        };
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}{}", sign, symbol, separator, self.abs())
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let text = format!(
            "{}{}.{:02}",
            sign,
            group_thousands(self.units()),
            self.cents_part()
        );
        f.pad(&text)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        if !units.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        let cents = (units * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return Err(serde::de::Error::custom("amount is out of range"));
        }
        Ok(Self(cents as i64))
    }
}

// Arithmetic saturates at the i64 bounds so totals over a large ledger
// never panic.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    /// More than two digits after the decimal point
    TooPrecise(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "At most two decimal places are allowed: {}", s)
            }
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_units(2_000_000).to_string(), "2,000,000.00");
        assert_eq!(Money::from_cents(-123_456_78).to_string(), "-123,456.78");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>8}", Money::from_cents(500)), "    5.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(1500).format_with_symbol("Rp"), "Rp 1,500.00");
        assert_eq!(Money::from_cents(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_cents(-1050).format_with_symbol("$"), "-$10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("Rp 25000").unwrap().cents(), 2_500_000);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".5").is_err());
        assert!(Money::parse("10.-5").is_err());
        assert!(Money::parse("--5").is_err());
    }

    #[test]
    fn test_parse_rejects_extra_precision() {
        assert_eq!(
            Money::parse("10.999"),
            Err(MoneyParseError::TooPrecise("10.999".into()))
        );
        assert!(Money::parse("0.001").is_err());
        assert_eq!(Money::parse("10.99").unwrap().cents(), 1099);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(Money::parse("1000000000000000").unwrap(), Money::MAX);
        assert_eq!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::OutOfRange("90000000000000000".into()))
        );
        assert!(Money::parse("1000000000000000.01").is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!((big + Money::from_cents(10)).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN + 1) - big).cents(), i64::MIN);

        let total: Money = std::iter::repeat(Money::MAX).take(100).sum();
        assert_eq!(total.cents(), i64::MAX);
        assert!(total.abs().is_positive());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>("-1e300").is_err());
        assert_eq!(
            serde_json::from_str::<Money>("1000000000000000").unwrap(),
            Money::MAX
        );
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization_uses_units() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let whole: Money = serde_json::from_str("15000").unwrap();
        assert_eq!(whole, Money::from_units(15000));
    }
}
