//! Dial digits and their pulse counts

use std::fmt;

use crate::error::PhoneError;

/// A single position on the rotary dial ('0' through '9')
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// All dial positions in pulse order (1 pulse first, 0 last)
    pub const ALL: [Digit; 10] = [
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
        Digit(0),
    ];

    /// Numeric value of the digit (0-9)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Number of make/break pulses the dial sends for this digit
    ///
    /// Zero sits at the end of the finger wheel and sends ten pulses.
    pub fn pulses(&self) -> u32 {
        match self.0 {
            0 => 10,
            n => u32::from(n),
        }
    }

    /// The digit as an ASCII character
    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = PhoneError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|n| Digit(n as u8))
            .ok_or(PhoneError::InvalidDigit(c))
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.as_char()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse a whole number string into digits
///
/// The string must be non-empty and contain only '0'-'9'.
pub fn parse_number(number: &str) -> Result<Vec<Digit>, PhoneError> {
    if number.is_empty() {
        return Err(PhoneError::InvalidNumber {
            number: String::new(),
            reason: "number is empty".to_string(),
        });
    }

    number
        .chars()
        .map(Digit::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| PhoneError::InvalidNumber {
            number: number.to_string(),
            reason: "only digits 0-9 are allowed".to_string(),
        })
}

/// Join digits into a number string
pub fn join_digits(digits: &[Digit]) -> String {
    digits.iter().map(Digit::as_char).collect()
}
