//! IMEI / IMSI values and the decimal string codec they travel in.
//!
//! The module only ever emits identities as decimal digit strings, so the
//! digit string is the canonical form; conversion to `u64` is lossless.

use core::fmt;

use heapless::String;

/// `u64::MAX` has 20 decimal digits.
pub const MAX_DIGITS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecimalError {
    Empty,
    InvalidDigit,
    TooLong,
    Overflow,
}

/// Parse a string of ASCII decimal digits. No sign, no grouping separators.
pub fn decimal_to_u64(s: &str) -> Result<u64, DecimalError> {
    if s.is_empty() {
        return Err(DecimalError::Empty);
    }
    if s.len() > MAX_DIGITS {
        return Err(DecimalError::TooLong);
    }

    s.bytes().try_fold(0u64, |acc, c| {
        if !c.is_ascii_digit() {
            return Err(DecimalError::InvalidDigit);
        }
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(c - b'0')))
            .ok_or(DecimalError::Overflow)
    })
}

/// Render `value` as decimal digits, without leading zeros.
pub fn u64_to_decimal(mut value: u64) -> String<MAX_DIGITS> {
    let mut digits = [0u8; MAX_DIGITS];
    let mut n = 0;
    loop {
        digits[n] = b'0' + (value % 10) as u8;
        n += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }

    let mut s = String::new();
    for &d in digits[..n].iter().rev() {
        // At most MAX_DIGITS pushes
        s.push(d as char).ok();
    }
    s
}

/// A device (IMEI) or subscriber (IMSI) identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Identity(String<MAX_DIGITS>);

impl Identity {
    /// Validate a digit string as reported by the module.
    pub fn parse(digits: &str) -> Result<Self, DecimalError> {
        decimal_to_u64(digits)?;
        let mut s = String::new();
        s.push_str(digits).map_err(|_| DecimalError::TooLong)?;
        Ok(Self(s))
    }

    pub fn from_u64(value: u64) -> Self {
        Self(u64_to_decimal(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_u64(&self) -> u64 {
        // Digits were validated on construction
        decimal_to_u64(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
