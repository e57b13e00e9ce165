//! PIN shape checking.

use std::fmt;
use thiserror::Error;

/// Number of digits in a PIN.
pub const PIN_LENGTH: usize = 4;

/// Why a candidate is not a well-formed PIN.
///
/// Both variants render the same message, which is also the reason
/// reported by the validator. The offending character is never stored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFormatError {
    #[error("PIN must be exactly 4 digits")]
    WrongLength(usize),
    #[error("PIN must be exactly 4 digits")]
    NonDigit { position: usize },
}

/// The ASCII digits of a well-formed PIN.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Digits([u8; PIN_LENGTH]);

impl Digits {
    /// Accepts exactly four ASCII digits `0`-`9`, nothing else.
    pub(crate) fn parse(pin: &str) -> Result<Self, PinFormatError> {
        let count = pin.chars().count();
        if count != PIN_LENGTH {
            return Err(PinFormatError::WrongLength(count));
        }
        if let Some(position) = pin.chars().position(|c| !c.is_ascii_digit()) {
            return Err(PinFormatError::NonDigit { position });
        }
        let bytes: [u8; PIN_LENGTH] = pin
            .as_bytes()
            .try_into()
            .map_err(|_| PinFormatError::WrongLength(pin.len()))?;
        Ok(Self(bytes))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; PIN_LENGTH] {
        &self.0
    }

    pub(crate) fn as_str(&self) -> &str {
        // only ASCII digits are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Numeric value of each digit.
    pub(crate) fn values(&self) -> [i8; PIN_LENGTH] {
        self.0.map(|b| (b - b'0') as i8)
    }

    pub(crate) fn distinct_count(&self) -> usize {
        let mut seen = [false; 10];
        for v in self.values() {
            seen[v as usize] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Digits([REDACTED])")
    }
}
