use crate::core::constants::{
    ARP_HARDWARE_TYPE_ETHERNET, ARP_MESSAGE_SIZE, ARP_OPERATION_REQUEST, ETHERTYPE_IPV4,
};
use crate::core::{Ipv4Address, MacAddress};

use super::error::TruncatedFrameError;

/// A decoded ARP message (RFC 826), fixed 28-byte layout for the
/// Ethernet/IPv4 combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ArpMessage {
    pub hardware_type: u16,
    pub protocol_type: u16,
    pub hardware_len: u8,
    pub protocol_len: u8,
    pub operation: u16,
    pub sender_mac: MacAddress,
    pub sender_ip: Ipv4Address,
    pub target_mac: MacAddress,
    pub target_ip: Ipv4Address,
}

impl ArpMessage {
    /// Encodes a who-has request for `target_ip`. The target MAC is all-zero
    /// since it is exactly what is being asked for.
    pub fn encode_request(
        sender_mac: MacAddress,
        sender_ip: Ipv4Address,
        target_ip: Ipv4Address,
    ) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(ARP_MESSAGE_SIZE);
        buffer.extend_from_slice(&ARP_HARDWARE_TYPE_ETHERNET.to_be_bytes());
        buffer.extend_from_slice(&ETHERTYPE_IPV4.to_be_bytes());
        buffer.push(6); // Hardware address length
        buffer.push(4); // Protocol address length
        buffer.extend_from_slice(&ARP_OPERATION_REQUEST.to_be_bytes());
        buffer.extend_from_slice(&sender_mac.address());
        buffer.extend_from_slice(&sender_ip.address());
        buffer.extend_from_slice(&[0u8; 6]); // Target MAC is unknown
        buffer.extend_from_slice(&target_ip.address());
        buffer
    }

    pub fn decode(bytes: &[u8]) -> Result<ArpMessage, TruncatedFrameError> {
        if bytes.len() < ARP_MESSAGE_SIZE {
            return Err(TruncatedFrameError {
                required: ARP_MESSAGE_SIZE,
                actual: bytes.len(),
            });
        }

        let mut sender_mac = [0u8; 6];
        sender_mac.copy_from_slice(&bytes[8..14]);
        let mut sender_ip = [0u8; 4];
        sender_ip.copy_from_slice(&bytes[14..18]);
        let mut target_mac = [0u8; 6];
        target_mac.copy_from_slice(&bytes[18..24]);
        let mut target_ip = [0u8; 4];
        target_ip.copy_from_slice(&bytes[24..28]);

        Ok(ArpMessage {
            hardware_type: u16::from_be_bytes([bytes[0], bytes[1]]),
            protocol_type: u16::from_be_bytes([bytes[2], bytes[3]]),
            hardware_len: bytes[4],
            protocol_len: bytes[5],
            operation: u16::from_be_bytes([bytes[6], bytes[7]]),
            sender_mac: MacAddress::new(sender_mac),
            sender_ip: Ipv4Address::new(sender_ip),
            target_mac: MacAddress::new(target_mac),
            target_ip: Ipv4Address::new(target_ip),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_request_fields() {
        let sender_mac = MacAddress::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        let sender_ip = Ipv4Address::new([192, 168, 1, 250]);
        let target_ip = Ipv4Address::new([192, 168, 1, 1]);

        let bytes = ArpMessage::encode_request(sender_mac, sender_ip, target_ip);
        assert_eq!(bytes.len(), ARP_MESSAGE_SIZE);

        let message = ArpMessage::decode(&bytes).unwrap();
        assert_eq!(message.hardware_type, 1);
        assert_eq!(message.protocol_type, 0x0800);
        assert_eq!(message.hardware_len, 6);
        assert_eq!(message.protocol_len, 4);
        assert_eq!(message.operation, ARP_OPERATION_REQUEST);
        assert_eq!(message.sender_mac, sender_mac);
        assert_eq!(message.sender_ip, sender_ip);
        assert_eq!(message.target_mac, MacAddress::new([0; 6]));
        assert_eq!(message.target_ip, target_ip);
    }

    #[test]
    fn test_decode_reply() {
        let reply: Vec<u8> = vec![
            0x00, 0x01, 0x08, 0x00, 0x06, 0x04, 0x00, 0x02, // Header, operation = 2
            1, 2, 3, 4, 5, 6, // Sender MAC
            192, 168, 1, 1, // Sender IP
            0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, // Target MAC
            192, 168, 1, 250, // Target IP
        ];
        let message = ArpMessage::decode(&reply).unwrap();
        assert_eq!(message.operation, 2);
        assert_eq!(message.sender_mac, MacAddress::new([1, 2, 3, 4, 5, 6]));
        assert_eq!(message.sender_ip, Ipv4Address::new([192, 168, 1, 1]));
    }

    #[test]
    fn test_decode_truncated() {
        let result = ArpMessage::decode(&[0u8; 27]);
        assert_eq!(
            result.err(),
            Some(TruncatedFrameError {
                required: 28,
                actual: 27
            })
        );
    }
}
