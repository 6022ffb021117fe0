//! Rotary Phone Simulation Library
//!
//! This crate simulates the user-facing behavior of a mechanical rotary
//! telephone:
//!
//! - **Pulse dialing**: each digit waits for as many pulses as the dial
//!   sends (digit 0 sends ten), followed by an inter-digit pause
//! - **Calls**: a call connects to the dialed number and is recorded in the
//!   call log; hanging up returns the phone to idle
//! - **Injectable timing**: delays go through a [`Waiter`], either a real
//!   [`ThreadSleeper`] or a [`VirtualClock`] that only records elapsed time
//!
//! # Example
//!
//! ```rust
//! use rotary_dial::{Phone, PhoneConfig};
//!
//! let mut phone = Phone::simulated(PhoneConfig::default());
//! phone.dial_number("911").unwrap();
//! phone.call().unwrap();
//!
//! assert_eq!(phone.call_log(), vec!["911".to_string()]);
//! assert!(phone.dial_digit('1').is_err());
//!
//! phone.hang_up();
//! assert_eq!(phone.dialed_number(), "");
//! println!("waited {:?}", phone.waiter().elapsed());
//! ```

pub mod config;
pub mod digit;
pub mod error;
pub mod events;
pub mod phone;
pub mod state;
pub mod timing;

pub use config::{NumberRules, PhoneConfig};
pub use digit::{parse_number, Digit};
pub use error::{ErrorKind, PhoneError};
pub use events::PhoneEvent;
pub use phone::{Phone, EVENT_BUFFER_LIMIT};
pub use state::{LineState, PhoneStatus};
pub use timing::{DialTiming, ThreadSleeper, VirtualClock, Waiter};
