//! The simulated rotary phone
//!
//! A [`Phone`] accumulates dialed digits while idle, connects a call to the
//! dialed number, and remembers every number it has called. Dialing waits
//! through the configured [`Waiter`] for as long as the dial would take to
//! return, so a `Phone<ThreadSleeper>` feels like the real thing and a
//! `Phone<VirtualClock>` runs instantly.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::PhoneConfig;
use crate::digit::{join_digits, Digit};
use crate::error::PhoneError;
use crate::events::PhoneEvent;
use crate::state::{LineState, PhoneStatus};
use crate::timing::{ThreadSleeper, VirtualClock, Waiter};

/// Maximum number of undrained events kept; the oldest are dropped first
pub const EVENT_BUFFER_LIMIT: usize = 256;

/// A simulated rotary telephone
///
/// Operations record [`PhoneEvent`]s. Callers that want them should call
/// [`Phone::drain_events`]; at most [`EVENT_BUFFER_LIMIT`] are kept.
#[derive(Debug)]
pub struct Phone<W: Waiter = ThreadSleeper> {
    config: PhoneConfig,
    waiter: W,
    /// Digits dialed since the last hang up or clear
    dialed: Vec<Digit>,
    line: LineState,
    /// Numbers called, oldest first; append-only
    call_log: Vec<String>,
    event_buffer: VecDeque<PhoneEvent>,
}

impl Phone<ThreadSleeper> {
    /// Create a phone with default timing that really sleeps
    pub fn new() -> Self {
        Self::with_config(PhoneConfig::default())
    }

    /// Create a sleeping phone with custom configuration
    pub fn with_config(config: PhoneConfig) -> Self {
        Self::with_waiter(config, ThreadSleeper)
    }

    /// Create a sleeping phone with a number already on the dial
    pub fn with_number(number: &str) -> Result<Self, PhoneError> {
        Self::new().preloaded(number)
    }
}

impl Default for Phone<ThreadSleeper> {
    fn default() -> Self {
        Self::new()
    }
}

impl Phone<VirtualClock> {
    /// Create a phone that records delays on a virtual clock instead of sleeping
    pub fn simulated(config: PhoneConfig) -> Self {
        Self::with_waiter(config, VirtualClock::new())
    }
}

impl<W: Waiter> Phone<W> {
    /// Create a phone with a custom waiter
    pub fn with_waiter(config: PhoneConfig, waiter: W) -> Self {
        Self {
            config,
            waiter,
            dialed: Vec::new(),
            line: LineState::Idle,
            call_log: Vec::new(),
            event_buffer: VecDeque::new(),
        }
    }

    /// Load a number onto the dial without dialing delays
    ///
    /// The number is checked against the configured rules.
    pub fn preloaded(mut self, number: &str) -> Result<Self, PhoneError> {
        self.dialed = self.config.rules.validate(number)?;
        Ok(self)
    }

    /// Get the configuration
    pub fn config(&self) -> &PhoneConfig {
        &self.config
    }

    /// Get the waiter
    pub fn waiter(&self) -> &W {
        &self.waiter
    }

    /// Get the waiter mutably
    pub fn waiter_mut(&mut self) -> &mut W {
        &mut self.waiter
    }

    /// Dial a single digit
    ///
    /// Blocks (through the waiter) for the digit's pulse time, then for the
    /// inter-digit pause.
    pub fn dial_digit(&mut self, digit: char) -> Result<(), PhoneError> {
        self.ensure_can_dial()?;
        let digit = Digit::try_from(digit)?;
        self.dial(digit);
        Ok(())
    }

    /// Dial a whole number, one digit at a time
    ///
    /// The number is fully validated before anything is dialed.
    pub fn dial_number(&mut self, number: &str) -> Result<(), PhoneError> {
        let digits = self.config.rules.validate(number)?;
        self.ensure_can_dial()?;

        debug!(number, "dialing number");
        self.emit(PhoneEvent::NumberStarted {
            number: number.to_string(),
        });
        for digit in digits {
            self.dial(digit);
        }
        Ok(())
    }

    /// Place a call to the dialed number
    ///
    /// Returns the number now connected.
    pub fn call(&mut self) -> Result<String, PhoneError> {
        if let LineState::Connected { number } = &self.line {
            return Err(PhoneError::AlreadyConnected(number.clone()));
        }
        if self.dialed.is_empty() {
            return Err(PhoneError::NothingDialed);
        }

        let number = join_digits(&self.dialed);
        info!(number = %number, "calling");
        self.waiter.wait(self.config.timing.connect_delay());

        self.line = LineState::Connected {
            number: number.clone(),
        };
        self.call_log.push(number.clone());
        self.emit(PhoneEvent::CallConnected {
            number: number.clone(),
        });
        info!(number = %number, "connected");

        Ok(number)
    }

    /// Hang up, returning to idle with nothing dialed
    ///
    /// Never fails. Returns true if a call was actually ended.
    pub fn hang_up(&mut self) -> bool {
        self.dialed.clear();

        match std::mem::take(&mut self.line) {
            LineState::Connected { number } => {
                info!(number = %number, "hanging up");
                self.waiter.wait(self.config.timing.hang_up_delay());
                self.emit(PhoneEvent::CallEnded { number });
                true
            }
            LineState::Idle => {
                debug!("no active call to hang up");
                self.emit(PhoneEvent::NoActiveCall);
                false
            }
        }
    }

    /// Discard the dialed digits
    pub fn clear(&mut self) -> Result<(), PhoneError> {
        if self.line.is_connected() {
            return Err(PhoneError::ClearWhileConnected);
        }
        self.dialed.clear();
        self.emit(PhoneEvent::Cleared);
        debug!("dialed number cleared");
        Ok(())
    }

    /// The digits dialed so far as a string
    pub fn dialed_number(&self) -> String {
        join_digits(&self.dialed)
    }

    /// The digits dialed so far
    pub fn dialed_digits(&self) -> &[Digit] {
        &self.dialed
    }

    /// Copy of every number called, oldest first
    pub fn call_log(&self) -> Vec<String> {
        self.call_log.clone()
    }

    /// Number of calls placed
    pub fn calls_made(&self) -> usize {
        self.call_log.len()
    }

    /// True while a call is active
    pub fn is_connected(&self) -> bool {
        self.line.is_connected()
    }

    /// Current line state
    pub fn line_state(&self) -> &LineState {
        &self.line
    }

    /// Snapshot of the phone for display
    pub fn status(&self) -> PhoneStatus {
        PhoneStatus {
            dialed_number: self.dialed_number(),
            line: self.line.clone(),
            call_log: self.call_log.clone(),
        }
    }

    /// Drain all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<PhoneEvent> {
        self.event_buffer.drain(..).collect()
    }

    /// Number of undrained events
    pub fn pending_events(&self) -> usize {
        self.event_buffer.len()
    }

    fn emit(&mut self, event: PhoneEvent) {
        if self.event_buffer.len() >= EVENT_BUFFER_LIMIT {
            self.event_buffer.pop_front();
        }
        self.event_buffer.push_back(event);
    }

    fn ensure_can_dial(&self) -> Result<(), PhoneError> {
        if self.line.is_connected() {
            return Err(PhoneError::DialWhileConnected);
        }
        Ok(())
    }

    fn dial(&mut self, digit: Digit) {
        let pulses = digit.pulses();
        let delay = self.config.timing.pulse_delay(digit);
        debug!(%digit, pulses, "dialing digit");

        self.waiter.wait(delay);
        self.dialed.push(digit);
        self.emit(PhoneEvent::DigitDialed {
            digit,
            pulses,
            delay,
        });

        self.waiter.wait(self.config.timing.inter_digit_delay());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::NumberRules;

    fn phone() -> Phone<VirtualClock> {
        Phone::simulated(PhoneConfig::default())
    }

    #[test]
    fn test_new_phone_is_idle_and_empty() {
        let phone = phone();
        assert!(!phone.is_connected());
        assert_eq!(phone.dialed_number(), "");
        assert!(phone.call_log().is_empty());
        assert_eq!(phone.waiter().elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_dial_digit_appends_and_waits() {
        let mut phone = phone();
        phone.dial_digit('3').unwrap();

        assert_eq!(phone.dialed_number(), "3");
        assert_eq!(
            phone.waiter().waits(),
            &[Duration::from_millis(300), Duration::from_millis(500)]
        );
    }

    #[test]
    fn test_dial_zero_takes_ten_pulses() {
        let mut phone = phone();
        phone.dial_digit('0').unwrap();
        assert_eq!(phone.waiter().waits()[0], Duration::from_secs(1));
    }

    #[test]
    fn test_dial_invalid_digit_changes_nothing() {
        let mut phone = phone();
        let err = phone.dial_digit('A').unwrap_err();

        assert_eq!(err, PhoneError::InvalidDigit('A'));
        assert_eq!(phone.dialed_number(), "");
        assert_eq!(phone.waiter().elapsed(), Duration::ZERO);
        assert!(phone.drain_events().is_empty());
    }

    #[test]
    fn test_dial_while_connected_fails() {
        let mut phone = phone().preloaded("911").unwrap();
        phone.call().unwrap();

        assert_eq!(phone.dial_digit('1'), Err(PhoneError::DialWhileConnected));
        assert_eq!(phone.dial_number("1"), Err(PhoneError::DialWhileConnected));
        // State error wins over a bad digit while connected
        assert_eq!(phone.dial_digit('x'), Err(PhoneError::DialWhileConnected));
        assert_eq!(phone.dialed_number(), "911");
    }

    #[test]
    fn test_dial_with_huge_pulse_length() {
        let config: PhoneConfig =
            serde_json::from_str(r#"{"timing":{"pulse_ms":18446744073709551615}}"#).unwrap();
        let mut phone = Phone::simulated(config);

        phone.dial_digit('2').unwrap();
        phone.dial_digit('0').unwrap();
        assert_eq!(phone.dialed_number(), "20");
        assert_eq!(phone.waiter().waits()[0], Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_dial_number_accumulates_delays() {
        let mut phone = phone();
        phone.dial_number("911").unwrap();

        assert_eq!(phone.dialed_number(), "911");
        // 9 + 1 + 1 pulses at 100ms, plus three 500ms pauses
        assert_eq!(phone.waiter().elapsed(), Duration::from_millis(2600));
    }

    #[test]
    fn test_dial_number_validates_before_dialing() {
        let mut phone = phone();
        phone.dial_digit('5').unwrap();
        phone.waiter_mut().reset();

        assert!(phone.dial_number("12a4").unwrap_err().is_invalid_input());
        assert!(phone.dial_number("").unwrap_err().is_invalid_input());
        assert_eq!(phone.dialed_number(), "5");
        assert_eq!(phone.waiter().elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_dial_number_length_rules() {
        let config = PhoneConfig {
            rules: NumberRules::exact(10),
            ..Default::default()
        };
        let mut phone = Phone::simulated(config);

        assert!(phone.dial_number("5551234").unwrap_err().is_invalid_input());
        assert_eq!(phone.dialed_number(), "");

        phone.dial_number("2125551234").unwrap();
        assert_eq!(phone.dialed_number(), "2125551234");
    }

    #[test]
    fn test_call_connects_and_logs() {
        let mut phone = phone();
        phone.dial_number("5551234").unwrap();

        let number = phone.call().unwrap();
        assert_eq!(number, "5551234");
        assert!(phone.is_connected());
        assert_eq!(phone.line_state().connected_number(), Some("5551234"));
        assert_eq!(phone.call_log(), vec!["5551234".to_string()]);
    }

    #[test]
    fn test_call_without_digits_fails() {
        let mut phone = phone();
        assert_eq!(phone.call(), Err(PhoneError::NothingDialed));
        assert!(phone.call_log().is_empty());
        assert!(!phone.is_connected());
    }

    #[test]
    fn test_call_while_connected_fails() {
        let mut phone = phone().preloaded("911").unwrap();
        phone.call().unwrap();

        assert_eq!(
            phone.call(),
            Err(PhoneError::AlreadyConnected("911".to_string()))
        );
        assert_eq!(phone.calls_made(), 1);
    }

    #[test]
    fn test_hang_up_returns_to_idle() {
        let mut phone = phone().preloaded("911").unwrap();
        phone.call().unwrap();

        assert!(phone.hang_up());
        assert!(!phone.is_connected());
        assert_eq!(phone.dialed_number(), "");
        assert_eq!(phone.call_log(), vec!["911".to_string()]);
    }

    #[test]
    fn test_hang_up_when_idle_is_noop() {
        let mut phone = phone();
        phone.dial_digit('4').unwrap();

        assert!(!phone.hang_up());
        assert!(!phone.hang_up());
        assert!(!phone.is_connected());
        assert_eq!(phone.dialed_number(), "");
    }

    #[test]
    fn test_clear() {
        let mut phone = phone();
        phone.dial_number("555").unwrap();
        phone.clear().unwrap();
        assert_eq!(phone.dialed_number(), "");

        phone.dial_digit('7').unwrap();
        phone.call().unwrap();
        assert_eq!(phone.clear(), Err(PhoneError::ClearWhileConnected));
        assert_eq!(phone.dialed_number(), "7");
    }

    #[test]
    fn test_preloaded_number_skips_delays() {
        let phone = phone().preloaded("2125551234").unwrap();
        assert_eq!(phone.dialed_number(), "2125551234");
        assert_eq!(phone.waiter().elapsed(), Duration::ZERO);

        assert!(Phone::simulated(PhoneConfig::default())
            .preloaded("555-1234")
            .is_err());
    }

    #[test]
    fn test_with_number_uses_sleeper() {
        let phone = Phone::with_number("911").unwrap();
        assert_eq!(phone.dialed_number(), "911");
        assert!(Phone::with_number("9x1").is_err());
    }

    #[test]
    fn test_events_in_order() {
        let mut phone = phone();
        phone.dial_number("12").unwrap();
        phone.call().unwrap();
        phone.hang_up();

        let events = phone.drain_events();
        assert_eq!(events.len(), 5);
        assert!(matches!(&events[0], PhoneEvent::NumberStarted { number } if number == "12"));
        assert!(matches!(events[1], PhoneEvent::DigitDialed { pulses: 1, .. }));
        assert!(matches!(events[2], PhoneEvent::DigitDialed { pulses: 2, .. }));
        assert!(matches!(&events[3], PhoneEvent::CallConnected { number } if number == "12"));
        assert!(matches!(&events[4], PhoneEvent::CallEnded { number } if number == "12"));

        assert!(phone.drain_events().is_empty());
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let mut phone = Phone::simulated(PhoneConfig {
            timing: crate::timing::DialTiming::instant(),
            ..Default::default()
        });
        for _ in 0..EVENT_BUFFER_LIMIT {
            phone.dial_digit('1').unwrap();
        }
        phone.clear().unwrap();

        assert_eq!(phone.pending_events(), EVENT_BUFFER_LIMIT);
        let events = phone.drain_events();
        assert_eq!(events.len(), EVENT_BUFFER_LIMIT);
        assert_eq!(events.last(), Some(&PhoneEvent::Cleared));
        assert_eq!(phone.pending_events(), 0);
    }

    #[test]
    fn test_status_snapshot() {
        let mut phone = phone();
        phone.dial_number("911").unwrap();
        phone.call().unwrap();

        let status = phone.status();
        assert_eq!(status.dialed_number, "911");
        assert!(status.line.is_connected());
        assert_eq!(status.calls_made(), 1);
        assert!(status.to_string().contains("Connected: Yes"));
    }
}
