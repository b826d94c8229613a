use std::{error::Error, fmt};

/// Decode input was shorter than the wire format requires.
///
/// Surfaced to direct callers of a decode operation; the reply waiter treats
/// it as "not the frame we are looking for" and keeps listening.
#[derive(Debug, PartialEq)]
pub struct TruncatedFrameError {
    pub required: usize,
    pub actual: usize,
}

impl fmt::Display for TruncatedFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame is truncated: need at least {} bytes, got {}",
            self.required, self.actual
        )
    }
}

impl Error for TruncatedFrameError {}

/// Raw-frame transport failure. Always propagated to the caller and aborts
/// the current wait; absence of a reply is reported separately, never as an
/// error.
#[derive(Debug)]
pub enum TransportError {
    InvalidInterface,
    UnsupportedChannel,
    NetworkError(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::InvalidInterface => write!(f, "Invalid network interface"),
            TransportError::UnsupportedChannel => write!(f, "Unsupported channel type"),
            TransportError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl Error for TransportError {}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::NetworkError(err.to_string())
    }
}
