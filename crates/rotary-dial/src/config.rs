//! Phone configuration

use serde::{Deserialize, Serialize};

use crate::digit::{parse_number, Digit};
use crate::error::PhoneError;
use crate::timing::DialTiming;

/// Length constraints applied to whole numbers passed to `dial_number`
///
/// Both bounds are inclusive. `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberRules {
    /// Minimum number of digits
    pub min_digits: Option<usize>,
    /// Maximum number of digits
    pub max_digits: Option<usize>,
}

impl NumberRules {
    /// Require exactly `len` digits
    pub fn exact(len: usize) -> Self {
        Self {
            min_digits: Some(len),
            max_digits: Some(len),
        }
    }

    /// Validate a number string against the digit pattern and length bounds
    pub fn validate(&self, number: &str) -> Result<Vec<Digit>, PhoneError> {
        let digits = parse_number(number)?;
        let len = digits.len();

        let reason = match (self.min_digits, self.max_digits) {
            (Some(min), Some(max)) if min == max && len != min => {
                Some(format!("expected exactly {} digits, got {}", min, len))
            }
            (Some(min), _) if len < min => {
                Some(format!("expected at least {} digits, got {}", min, len))
            }
            (_, Some(max)) if len > max => {
                Some(format!("expected at most {} digits, got {}", max, len))
            }
            _ => None,
        };

        match reason {
            Some(reason) => Err(PhoneError::InvalidNumber {
                number: number.to_string(),
                reason,
            }),
            None => Ok(digits),
        }
    }
}

/// Configuration for a [`Phone`](crate::Phone)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    /// Dialing and call delays
    pub timing: DialTiming,
    /// Whole-number validation rules
    pub rules: NumberRules,
}
