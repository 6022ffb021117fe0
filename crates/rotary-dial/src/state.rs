//! Line state and status reporting

use std::fmt;

/// Whether a call is active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LineState {
    /// No call; dialing and clearing are allowed
    #[default]
    Idle,
    /// A call is in progress
    Connected {
        /// Number that was called
        number: String,
    },
}

impl LineState {
    /// True while a call is active
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Number of the active call, if any
    pub fn connected_number(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Connected { number } => Some(number),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Connected { .. } => "Connected",
        }
    }
}

/// Snapshot of a phone's state for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneStatus {
    /// Digits dialed so far
    pub dialed_number: String,
    /// Current line state
    pub line: LineState,
    /// Numbers called, oldest first
    pub call_log: Vec<String>,
}

impl PhoneStatus {
    /// Number of calls placed
    pub fn calls_made(&self) -> usize {
        self.call_log.len()
    }

    /// Single-line summary
    pub fn summary(&self) -> String {
        let dialed = if self.dialed_number.is_empty() {
            "(none)"
        } else {
            self.dialed_number.as_str()
        };
        let calls = match self.calls_made() {
            1 => "1 call".to_string(),
            n => format!("{} calls", n),
        };
        match &self.line {
            LineState::Idle => format!("{} - dialed {} - {}", self.line.name(), dialed, calls),
            LineState::Connected { number } => {
                format!("{} to {} - {}", self.line.name(), number, calls)
            }
        }
    }
}

impl fmt::Display for PhoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(40);
        writeln!(f, "{}", rule)?;
        writeln!(f, "ROTARY PHONE STATUS")?;
        writeln!(f, "{}", rule)?;
        if self.dialed_number.is_empty() {
            writeln!(f, "Dialed Number: (none)")?;
        } else {
            writeln!(f, "Dialed Number: {}", self.dialed_number)?;
        }
        writeln!(
            f,
            "Connected: {}",
            if self.line.is_connected() { "Yes" } else { "No" }
        )?;
        writeln!(f, "Calls Made: {}", self.calls_made())?;
        if !self.call_log.is_empty() {
            writeln!(f, "Call History: {}", self.call_log.join(", "))?;
        }
        write!(f, "{}", rule)
    }
}
