//! Money type for expense amounts
//!
//! Amounts are stored in minor units (paise/cents) as `i64`, so category sums
//! and totals add up exactly. Ratios and percentages are the only places
//! where floating point appears.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A monetary amount in minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Largest amount accepted from user input or a feed, in minor units
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000_000_000;

/// Currency symbols stripped from the front of user input
const CURRENCY_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use pocketguard::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal number of major units, rounded to
    /// the nearest minor unit
    ///
    /// Returns `None` for NaN or infinite input, and for magnitudes beyond
    /// [`MAX_AMOUNT_CENTS`].
    pub fn from_major(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_AMOUNT_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
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

    /// Subtract, clamping the result at zero
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0).max(0))
    }

    /// `self / whole` as a plain ratio, or `0.0` when `whole` is not positive
    pub fn ratio_of(&self, whole: Money) -> f64 {
        if whole.0 <= 0 {
            0.0
        } else {
            self.0 as f64 / whole.0 as f64
        }
    }

    /// `self / whole * 100`, or `0.0` when `whole` is not positive
    pub fn percentage_of(&self, whole: Money) -> f64 {
        self.ratio_of(whole) * 100.0
    }

    /// A whole-number percentage of this amount, rounded to the nearest minor unit
    pub fn percent(&self, percent: i64) -> Self {
        Self(((self.0 as i128 * percent as i128 + 50) / 100) as i64)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "10.5", "10", "₹10.50", "$1,250.00". Negative amounts
    /// are rejected; expenses and configured scalars are never below zero.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let unsigned = trimmed
            .strip_prefix(|c: char| CURRENCY_SYMBOLS.contains(&c))
            .unwrap_or(trimmed)
            .trim_start();
        if unsigned.starts_with('-') {
            return Err(MoneyParseError::Negative(trimmed.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let digits: String = unsigned.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let cents = match digits.split_once('.') {
            Some((whole, frac)) => {
                if frac.contains('.') || frac.len() > 2 || (whole.is_empty() && frac.is_empty()) {
                    return Err(invalid());
                }
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };
                let frac: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => frac.parse().map_err(|_| invalid())?,
                };
                whole.checked_mul(100).and_then(|w| w.checked_add(frac))
            }
            None => digits.parse::<i64>().map_err(|_| invalid())?.checked_mul(100),
        };

        match cents {
            Some(cents) if cents <= MAX_AMOUNT_CENTS => Ok(Self(cents)),
            _ => Err(MoneyParseError::TooLarge(trimmed.to_string())),
        }
    }

    /// Format with a currency symbol, e.g. "₹1250.00"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, Money(self.0.abs()))
        } else {
            format!("{}{}", symbol, self)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
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
    Negative(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::Negative(s) => write!(f, "Amount cannot be negative: {}", s),
            MoneyParseError::TooLarge(s) => write!(f, "Amount is too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(125_000).format_with_symbol("₹"), "₹1250.00");
        assert_eq!(Money::from_cents(-5).format_with_symbol("$"), "-$0.05");
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(10.5), Some(Money::from_cents(1050)));
        assert_eq!(Money::from_major(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::from_major(f64::NAN), None);
        assert_eq!(Money::from_major(f64::INFINITY), None);
        assert_eq!(Money::from_major(1e300), None);
        assert_eq!(Money::from_major(-1e300), None);
        assert_eq!(
            Money::from_major(10_000_000_000_000.0),
            Some(Money::from_cents(MAX_AMOUNT_CENTS))
        );
    }

    #[test]
    fn test_addition_saturates() {
        let big = Money::from_cents(i64::MAX - 10);
        assert_eq!(big + Money::from_cents(100), Money::from_cents(i64::MAX));

        let mut acc = big;
        acc += big;
        assert_eq!(acc.cents(), i64::MAX);

        let total: Money = [big, big, big].iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN) - Money::from_cents(1), Money::from_cents(i64::MIN));
    }

    #[test]
    fn test_saturating_sub_clamps_at_zero() {
        let initial = Money::from_cents(100_000);
        assert_eq!(initial.saturating_sub(Money::from_cents(120_000)), Money::zero());
        assert_eq!(
            initial.saturating_sub(Money::from_cents(25_000)),
            Money::from_cents(75_000)
        );
    }

    #[test]
    fn test_ratio_guards_zero_denominator() {
        let part = Money::from_cents(5000);
        assert_eq!(part.ratio_of(Money::zero()), 0.0);
        assert_eq!(part.percentage_of(Money::zero()), 0.0);
        assert_eq!(part.percentage_of(Money::from_cents(20000)), 25.0);
    }

    #[test]
    fn test_percent() {
        assert_eq!(Money::from_cents(10_000).percent(20), Money::from_cents(2000));
        assert_eq!(Money::from_cents(333).percent(20), Money::from_cents(67));
        assert_eq!(Money::zero().percent(20), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$1,250").unwrap().cents(), 125_000);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert!(matches!(Money::parse("-10"), Err(MoneyParseError::Negative(_))));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn test_parse_rejects_sign_after_symbol() {
        assert!(matches!(Money::parse("₹-10"), Err(MoneyParseError::Negative(_))));
        assert!(matches!(Money::parse("$-5.00"), Err(MoneyParseError::Negative(_))));
        assert!(matches!(Money::parse("abc12"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("₹₹10"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("12abc"), Err(MoneyParseError::InvalidFormat(_))));
        assert_eq!(Money::parse("₹ 10").unwrap().cents(), 1000);
    }

    #[test]
    fn test_parse_rejects_huge_amounts() {
        assert!(matches!(
            Money::parse("92233720368547758"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("10000000000000.01"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert_eq!(
            Money::parse("10000000000000").unwrap().cents(),
            MAX_AMOUNT_CENTS
        );
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
    }
}
