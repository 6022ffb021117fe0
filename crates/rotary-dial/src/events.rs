//! Events emitted by the phone
//!
//! Operations buffer events as they happen; callers drain them to build a
//! transcript or drive a display.

use std::time::Duration;

use crate::digit::Digit;

/// Something the phone did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneEvent {
    /// A digit finished dialing
    DigitDialed {
        /// The dialed digit
        digit: Digit,
        /// Pulses sent for it
        pulses: u32,
        /// Time the dial took to return
        delay: Duration,
    },
    /// A whole number is about to be dialed
    NumberStarted {
        /// Number being dialed
        number: String,
    },
    /// A call connected
    CallConnected {
        /// Number called
        number: String,
    },
    /// An active call was hung up
    CallEnded {
        /// Number that was connected
        number: String,
    },
    /// Hang up requested with no call active
    NoActiveCall,
    /// Dialed digits were cleared
    Cleared,
}
