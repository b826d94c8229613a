use std::fmt;
use std::ops::{BitAnd, Index};

use super::FormatError;

pub const IPV4_ADDRESS_LENGTH: usize = 4;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Ipv4Address {
    address: [u8; IPV4_ADDRESS_LENGTH],
}

impl Ipv4Address {
    pub const fn new(address: [u8; IPV4_ADDRESS_LENGTH]) -> Self {
        Ipv4Address { address }
    }

    pub fn address(&self) -> [u8; IPV4_ADDRESS_LENGTH] {
        self.address
    }

    pub fn parse(ip_str: &str) -> Result<Self, FormatError> {
        let parts: Vec<&str> = ip_str.split('.').collect();
        if parts.len() != IPV4_ADDRESS_LENGTH {
            return Err(FormatError::InvalidLength);
        }
        let mut address = [0u8; IPV4_ADDRESS_LENGTH];
        for (i, part) in parts.iter().enumerate() {
            match part.parse::<u8>() {
                Ok(num) => address[i] = num,
                Err(_) => return Err(FormatError::InvalidFormat),
            }
        }
        Ok(Ipv4Address::new(address))
    }

    /// Builds a subnet mask from a prefix length, e.g. 24 -> 255.255.255.0.
    pub fn from_prefix(prefix: u8) -> Self {
        let bits = if prefix >= 32 {
            u32::MAX
        } else {
            u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0)
        };
        Ipv4Address::new(bits.to_be_bytes())
    }
}

impl BitAnd for Ipv4Address {
    type Output = Ipv4Address;

    // Byte-wise AND, used for subnet comparison
    fn bitand(self, mask: Ipv4Address) -> Ipv4Address {
        let mut address = [0u8; IPV4_ADDRESS_LENGTH];
        for (i, byte) in address.iter_mut().enumerate() {
            *byte = self.address[i] & mask.address[i];
        }
        Ipv4Address::new(address)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .address
            .iter()
            .map(|byte| byte.to_string())
            .collect::<Vec<String>>()
            .join(".");
        write!(f, "{}", text)
    }
}

impl Index<usize> for Ipv4Address {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        if index >= IPV4_ADDRESS_LENGTH {
            panic!("Index out of bounds");
        }
        &self.address[index]
    }
}
