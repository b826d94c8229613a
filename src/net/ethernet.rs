use crate::core::constants::ETHERNET_HEADER_SIZE;
use crate::core::MacAddress;

use super::error::TruncatedFrameError;

/// A decoded Ethernet II frame. The payload carries everything after the
/// 14-byte header; the trailing CRC is left to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct EthernetFrame {
    pub destination: MacAddress,
    pub source: MacAddress,
    pub ethertype: u16,
    pub payload: Vec<u8>,
}

impl EthernetFrame {
    /// Encodes a frame as the concatenation destination, source, ethertype,
    /// payload. No length validation beyond what callers guarantee.
    pub fn encode(
        destination: MacAddress,
        source: MacAddress,
        ethertype: u16,
        payload: &[u8],
    ) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(ETHERNET_HEADER_SIZE + payload.len());
        buffer.extend_from_slice(&destination.address());
        buffer.extend_from_slice(&source.address());
        buffer.extend_from_slice(&ethertype.to_be_bytes());
        buffer.extend_from_slice(payload);
        buffer
    }

    pub fn decode(bytes: &[u8]) -> Result<EthernetFrame, TruncatedFrameError> {
        if bytes.len() < ETHERNET_HEADER_SIZE {
            return Err(TruncatedFrameError {
                required: ETHERNET_HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let mut destination = [0u8; 6];
        destination.copy_from_slice(&bytes[0..6]);
        let mut source = [0u8; 6];
        source.copy_from_slice(&bytes[6..12]);

        Ok(EthernetFrame {
            destination: MacAddress::new(destination),
            source: MacAddress::new(source),
            ethertype: u16::from_be_bytes([bytes[12], bytes[13]]),
            payload: bytes[ETHERNET_HEADER_SIZE..].to_vec(),
        })
    }
}
