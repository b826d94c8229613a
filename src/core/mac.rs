use std::fmt;

use super::FormatError;

pub const MAC_ADDRESS_LENGTH: usize = 6;

pub const MAC_ADDRESS_BROADCAST: MacAddress =
    MacAddress::new([0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct MacAddress {
    address: [u8; MAC_ADDRESS_LENGTH],
}

impl MacAddress {
    // Create a new MAC address from a byte array
    pub const fn new(bytes: [u8; MAC_ADDRESS_LENGTH]) -> Self {
        MacAddress { address: bytes }
    }

    pub fn address(&self) -> [u8; MAC_ADDRESS_LENGTH] {
        self.address
    }

    pub fn is_broadcast(&self) -> bool {
        *self == MAC_ADDRESS_BROADCAST
    }

    // Parse "aa:bb:cc:dd:ee:ff" -> MacAddress([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])
    pub fn parse(address: &str) -> Result<Self, FormatError> {
        let parts: Vec<&str> = address.split(':').collect();
        if parts.len() != MAC_ADDRESS_LENGTH {
            return Err(FormatError::InvalidLength);
        }

        let mut bytes = [0u8; MAC_ADDRESS_LENGTH];
        for (i, part) in parts.iter().enumerate() {
            if part.len() != 2 {
                return Err(FormatError::InvalidFormat);
            }
            bytes[i] = u8::from_str_radix(part, 16)
                .map_err(|_| FormatError::InvalidFormat)?;
        }

        Ok(MacAddress { address: bytes })
    }
}

impl fmt::Display for MacAddress {
    // Format as "aa:bb:cc:dd:ee:ff"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .address
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<String>>()
            .join(":");
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let mac = MacAddress::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        assert_eq!(mac.address(), [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
    }

    #[test]
    fn test_parse_valid() {
        let mac = MacAddress::parse("aa:bb:cc:dd:ee:ff").unwrap();
        assert_eq!(mac.address(), [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
    }

    #[test]
    fn test_parse_uppercase() {
        let mac = MacAddress::parse("AA:BB:CC:DD:EE:FF").unwrap();
        assert_eq!(mac.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_parse_invalid_length() {
        let result = MacAddress::parse("aa:bb:cc:dd:ee");
        assert!(result.is_err());
        assert_eq!(result.err(), Some(FormatError::InvalidLength));
    }

    #[test]
    fn test_parse_invalid_format() {
        let result = MacAddress::parse("a:b:c:d:e:f");
        assert!(result.is_err());
        assert_eq!(result.err(), Some(FormatError::InvalidFormat));
    }

    #[test]
    fn test_roundtrip() {
        let text = "00:1a:2b:3c:4d:5e";
        let mac = MacAddress::parse(text).unwrap();
        assert_eq!(mac.to_string(), text);
    }

    #[test]
    fn test_broadcast() {
        assert!(MAC_ADDRESS_BROADCAST.is_broadcast());
        assert!(!MacAddress::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]).is_broadcast());
        assert_eq!(MAC_ADDRESS_BROADCAST.to_string(), "ff:ff:ff:ff:ff:ff");
    }
}
