use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const CENTS_PER_UNIT: i64 = 100;

/// Amount of money held in or moved between accounts.
/// Stored as an i64 count of cents so balances never suffer floating point drift.
/// The precision is two places past the decimal, extra digits are truncated on parse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: i64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount parsing error: {0}")]
    Parse(String),

    #[error("Overflow error while computing Amount")]
    Overflow,

    #[error("Underflow error while computing Amount")]
    Underflow,
}

impl Amount {
    pub const ZERO: Amount = Amount { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Amount { cents }
    }

    pub fn from_units(units: i64) -> Result<Self, AmountError> {
        units
            .checked_mul(CENTS_PER_UNIT)
            .map(Amount::from_cents)
            .ok_or(AmountError::Overflow)
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    pub fn checked_add(&self, other: Amount) -> Result<Amount, AmountError> {
        self.cents
            .checked_add(other.cents)
            .map(Amount::from_cents)
            .ok_or(AmountError::Overflow)
    }

    pub fn checked_sub(&self, other: Amount) -> Result<Amount, AmountError> {
        self.cents
            .checked_sub(other.cents)
            .map(Amount::from_cents)
            .ok_or(AmountError::Underflow)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parse_err = || AmountError::Parse(text.to_owned());

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        // "." alone, "-" alone and "" carry no digits at all
        if whole.is_empty() && fraction.is_empty() {
            return Err(parse_err());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(parse_err());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| parse_err())?
        };

        let mut fraction_digits: String = fraction.chars().take(2).collect();
        while fraction_digits.len() < 2 {
            fraction_digits.push('0');
        }
        let cents: i64 = fraction_digits.parse().map_err(|_| parse_err())?;

        let total = Amount::from_units(units)?.checked_add(Amount::from_cents(cents))?;
        if negative {
            Ok(Amount::from_cents(-total.cents))
        } else {
            Ok(total)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs_val = self.cents.unsigned_abs();
        let units = abs_val / CENTS_PER_UNIT as u64;
        let cents = abs_val % CENTS_PER_UNIT as u64;

        write!(f, "{sign}{units}.{cents:02}")
    }
}
