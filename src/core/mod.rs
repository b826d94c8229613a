pub mod checksum;
pub mod constants;
pub mod ip;
pub mod mac;

use std::{error::Error, fmt};

pub use checksum::internet_checksum;
pub use ip::{Ipv4Address, IPV4_ADDRESS_LENGTH};
pub use mac::{MacAddress, MAC_ADDRESS_BROADCAST, MAC_ADDRESS_LENGTH};

/// Error for malformed textual address input (MAC or IPv4).
#[derive(Debug, PartialEq)]
pub enum FormatError {
    InvalidLength,
    InvalidFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidLength => write!(f, "Address has the wrong number of groups"),
            FormatError::InvalidFormat => write!(f, "Address group is not a valid number"),
        }
    }
}

impl Error for FormatError {}
