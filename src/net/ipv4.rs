use crate::core::constants::{
    IPV4_CHECKSUM_OFFSET, IPV4_DEFAULT_TTL, IPV4_DESTINATION_OFFSET, IPV4_FLAGS_OFFSET,
    IPV4_FLAG_DONT_FRAGMENT, IPV4_HEADER_SIZE, IPV4_HEADER_WORDS, IPV4_IDENTIFICATION_OFFSET,
    IPV4_PROTOCOL_OFFSET, IPV4_SOURCE_OFFSET, IPV4_TOTAL_LENGTH_OFFSET, IPV4_TTL_OFFSET,
};
use crate::core::{internet_checksum, Ipv4Address};

use super::error::TruncatedFrameError;

/// A decoded IPv4 packet with a 20-byte header (options are not supported).
#[derive(Debug, Clone, PartialEq)]
pub struct Ipv4Packet {
    pub version: u8,
    pub header_len_words: u8,
    pub dscp_ecn: u8,
    pub total_length: u16,
    pub identification: u16,
    pub flags_fragment: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: Ipv4Address,
    pub destination: Ipv4Address,
    pub payload: Vec<u8>,
}

impl Ipv4Packet {
    /// Encodes a packet with the fixed header this stack emits: no options,
    /// don't-fragment, ttl=64, identification=0. The header checksum is
    /// computed with the checksum field zeroed and then written in place.
    pub fn encode(
        source: Ipv4Address,
        destination: Ipv4Address,
        protocol: u8,
        payload: &[u8],
    ) -> Vec<u8> {
        let total_length = (IPV4_HEADER_SIZE + payload.len()) as u16;

        let mut buffer = vec![0u8; IPV4_HEADER_SIZE];
        buffer[0] = (4 << 4) | IPV4_HEADER_WORDS; // Version 4, 5-word header
        buffer[1] = 0; // DSCP/ECN
        buffer[IPV4_TOTAL_LENGTH_OFFSET..IPV4_TOTAL_LENGTH_OFFSET + 2]
            .copy_from_slice(&total_length.to_be_bytes());
        buffer[IPV4_IDENTIFICATION_OFFSET..IPV4_IDENTIFICATION_OFFSET + 2]
            .copy_from_slice(&0u16.to_be_bytes());
        buffer[IPV4_FLAGS_OFFSET..IPV4_FLAGS_OFFSET + 2]
            .copy_from_slice(&IPV4_FLAG_DONT_FRAGMENT.to_be_bytes());
        buffer[IPV4_TTL_OFFSET] = IPV4_DEFAULT_TTL;
        buffer[IPV4_PROTOCOL_OFFSET] = protocol;
        // Checksum stays zero while it is being computed
        buffer[IPV4_SOURCE_OFFSET..IPV4_SOURCE_OFFSET + 4].copy_from_slice(&source.address());
        buffer[IPV4_DESTINATION_OFFSET..IPV4_DESTINATION_OFFSET + 4]
            .copy_from_slice(&destination.address());

        let checksum = internet_checksum(&buffer);
        buffer[IPV4_CHECKSUM_OFFSET..IPV4_CHECKSUM_OFFSET + 2]
            .copy_from_slice(&checksum.to_be_bytes());

        buffer.extend_from_slice(payload);
        buffer
    }

    /// Decodes the fixed 20-byte header; the payload is the remainder. The
    /// header checksum is decoded but not re-verified here.
    pub fn decode(bytes: &[u8]) -> Result<Ipv4Packet, TruncatedFrameError> {
        if bytes.len() < IPV4_HEADER_SIZE {
            return Err(TruncatedFrameError {
                required: IPV4_HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let mut source = [0u8; 4];
        source.copy_from_slice(&bytes[IPV4_SOURCE_OFFSET..IPV4_SOURCE_OFFSET + 4]);
        let mut destination = [0u8; 4];
        destination.copy_from_slice(&bytes[IPV4_DESTINATION_OFFSET..IPV4_DESTINATION_OFFSET + 4]);

        Ok(Ipv4Packet {
            version: bytes[0] >> 4,
            header_len_words: bytes[0] & 0x0F,
            dscp_ecn: bytes[1],
            total_length: u16::from_be_bytes([bytes[2], bytes[3]]),
            identification: u16::from_be_bytes([bytes[4], bytes[5]]),
            flags_fragment: u16::from_be_bytes([bytes[6], bytes[7]]),
            ttl: bytes[IPV4_TTL_OFFSET],
            protocol: bytes[IPV4_PROTOCOL_OFFSET],
            checksum: u16::from_be_bytes([bytes[10], bytes[11]]),
            source: Ipv4Address::new(source),
            destination: Ipv4Address::new(destination),
            payload: bytes[IPV4_HEADER_SIZE..].to_vec(),
        })
    }
}
