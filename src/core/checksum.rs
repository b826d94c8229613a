/// Calculates the internet checksum (RFC 1071) over a byte buffer.
///
/// The buffer is interpreted as a sequence of 16-bit big-endian words which
/// are summed with one's complement arithmetic; the result is the one's
/// complement of the final sum. If the buffer length is odd, the last byte
/// is padded with zero before summing.
///
/// Used by both the IPv4 header checksum and the ICMP message checksum. The
/// caller is expected to zero the checksum field of the header before
/// computing, and a recomputation over a header with a correct checksum in
/// place yields zero.
pub fn internet_checksum(packet: &[u8]) -> u16 {
    let mut sum = 0u32;
    for chunk in packet.chunks(2) {
        let word = if chunk.len() == 2 {
            u16::from_be_bytes([chunk[0], chunk[1]])
        } else {
            u16::from_be_bytes([chunk[0], 0])
        };
        sum += u32::from(word);
    }
    while sum >> 16 != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}
