//! Error types for phone operations

use thiserror::Error;

/// Broad classification of a [`PhoneError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed digit or number string
    InvalidInput,
    /// Operation not allowed in the phone's current state
    InvalidState,
}

/// Errors that can occur while operating a phone
///
/// A failed operation never mutates the phone.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// Character outside '0'-'9'
    #[error("invalid digit '{0}': only digits 0-9 are allowed")]
    InvalidDigit(char),

    /// Number string that fails validation
    #[error("invalid phone number '{number}': {reason}")]
    InvalidNumber { number: String, reason: String },

    /// Dialing attempted during an active call
    #[error("cannot dial while connected, hang up first")]
    DialWhileConnected,

    /// Call attempted with nothing dialed
    #[error("cannot place a call: no digits dialed")]
    NothingDialed,

    /// Call attempted during an active call
    #[error("already connected to {0}")]
    AlreadyConnected(String),

    /// Clear attempted during an active call
    #[error("cannot clear the dialed number while connected")]
    ClearWhileConnected,
}

impl PhoneError {
    /// Get the error classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDigit(_) | Self::InvalidNumber { .. } => ErrorKind::InvalidInput,
            Self::DialWhileConnected
            | Self::NothingDialed
            | Self::AlreadyConnected(_)
            | Self::ClearWhileConnected => ErrorKind::InvalidState,
        }
    }

    /// True for malformed input errors
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// True for errors caused by the phone's current state
    pub fn is_invalid_state(&self) -> bool {
        self.kind() == ErrorKind::InvalidState
    }
}
