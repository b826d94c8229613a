use crate::core::constants::{
    ICMP_CHECKSUM_OFFSET, ICMP_CODE_OFFSET, ICMP_ECHO_REQUEST_TYPE, ICMP_HEADER_SIZE,
    ICMP_ID_OFFSET, ICMP_SEQUENCE_OFFSET, ICMP_TYPE_OFFSET,
};
use crate::core::internet_checksum;

use super::error::TruncatedFrameError;

/// A decoded ICMP message: 8-byte header plus payload.
#[derive(Debug, Clone, PartialEq)]
pub struct IcmpMessage {
    pub message_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub identifier: u16,
    pub sequence_no: u16,
    pub payload: Vec<u8>,
}

impl IcmpMessage {
    /// Encodes an echo request (type 8, code 0). The checksum covers the
    /// whole message and is computed with the checksum field zeroed.
    pub fn encode_echo_request(identifier: u16, sequence_no: u16, payload: &[u8]) -> Vec<u8> {
        let mut buffer = vec![0u8; ICMP_HEADER_SIZE];
        buffer[ICMP_TYPE_OFFSET] = ICMP_ECHO_REQUEST_TYPE;
        buffer[ICMP_CODE_OFFSET] = 0;
        buffer[ICMP_ID_OFFSET..ICMP_ID_OFFSET + 2].copy_from_slice(&identifier.to_be_bytes());
        buffer[ICMP_SEQUENCE_OFFSET..ICMP_SEQUENCE_OFFSET + 2]
            .copy_from_slice(&sequence_no.to_be_bytes());
        buffer.extend_from_slice(payload);

        let checksum = internet_checksum(&buffer);
        buffer[ICMP_CHECKSUM_OFFSET..ICMP_CHECKSUM_OFFSET + 2]
            .copy_from_slice(&checksum.to_be_bytes());
        buffer
    }

    pub fn decode(bytes: &[u8]) -> Result<IcmpMessage, TruncatedFrameError> {
        if bytes.len() < ICMP_HEADER_SIZE {
            return Err(TruncatedFrameError {
                required: ICMP_HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        Ok(IcmpMessage {
            message_type: bytes[ICMP_TYPE_OFFSET],
            code: bytes[ICMP_CODE_OFFSET],
            checksum: u16::from_be_bytes([bytes[2], bytes[3]]),
            identifier: u16::from_be_bytes([bytes[4], bytes[5]]),
            sequence_no: u16::from_be_bytes([bytes[6], bytes[7]]),
            payload: bytes[ICMP_HEADER_SIZE..].to_vec(),
        })
    }
}
