//! Dial timing and the waiters that realise it
//!
//! A [`Waiter`] decides what "waiting" means. [`ThreadSleeper`] blocks the
//! calling thread like a real dial would; [`VirtualClock`] only records the
//! time that would have passed, so tests and fast demos run instantly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::digit::Digit;

/// Strategy for realising a delay
pub trait Waiter {
    /// Wait for the given duration
    fn wait(&mut self, duration: Duration);
}

/// Blocks the calling thread for each wait
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Waiter for ThreadSleeper {
    fn wait(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records waits without sleeping
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    elapsed: Duration,
    waits: Vec<Duration>,
}

impl VirtualClock {
    /// Create a clock at zero elapsed time
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time waited so far
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Every individual wait, in order
    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }

    /// Reset to zero elapsed time
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.waits.clear();
    }
}

impl Waiter for VirtualClock {
    fn wait(&mut self, duration: Duration) {
        self.elapsed = self.elapsed.saturating_add(duration);
        self.waits.push(duration);
    }
}

impl<W: Waiter + ?Sized> Waiter for &mut W {
    fn wait(&mut self, duration: Duration) {
        (**self).wait(duration)
    }
}

/// Delays used by the phone, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialTiming {
    /// Length of one dial pulse
    pub pulse_ms: u64,
    /// Pause after each dialed digit
    pub inter_digit_ms: u64,
    /// Time from placing a call to being connected
    pub connect_ms: u64,
    /// Time taken to hang up an active call
    pub hang_up_ms: u64,
}

impl Default for DialTiming {
    fn default() -> Self {
        Self {
            pulse_ms: 100,
            inter_digit_ms: 500,
            connect_ms: 1000,
            hang_up_ms: 500,
        }
    }
}

impl DialTiming {
    /// Timing with every delay set to zero
    pub fn instant() -> Self {
        Self {
            pulse_ms: 0,
            inter_digit_ms: 0,
            connect_ms: 0,
            hang_up_ms: 0,
        }
    }

    /// Time the dial takes to return after sending a digit's pulses
    ///
    /// Saturates at `u64::MAX` milliseconds.
    pub fn pulse_delay(&self, digit: Digit) -> Duration {
        Duration::from_millis(self.pulse_ms.saturating_mul(u64::from(digit.pulses())))
    }

    /// Pause between digits
    pub fn inter_digit_delay(&self) -> Duration {
        Duration::from_millis(self.inter_digit_ms)
    }

    /// Delay before a call connects
    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_ms)
    }

    /// Delay while hanging up
    pub fn hang_up_delay(&self) -> Duration {
        Duration::from_millis(self.hang_up_ms)
    }
}
