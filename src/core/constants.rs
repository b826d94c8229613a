// Ethernet
pub const ETHERNET_HEADER_SIZE: usize = 14; // Dest MAC (6) + Source MAC (6) + Ethertype (2)
pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const ETHERTYPE_ARP: u16 = 0x0806;
pub const MAX_FRAME_SIZE: usize = 1600; // Receive buffer bound, > standard MTU + headers

// ARP Protocol Constants
pub const ARP_MESSAGE_SIZE: usize = 28; // Header (8) + Sender MAC (6) + Sender IP (4) + Target MAC (6) + Target IP (4)
pub const ARP_HARDWARE_TYPE_ETHERNET: u16 = 1;
pub const ARP_OPERATION_REQUEST: u16 = 1;
pub const ARP_OPERATION_REPLY: u16 = 2;

// IPv4
pub const IPV4_HEADER_SIZE: usize = 20; // Standard IPv4 header size, no options
pub const IPV4_HEADER_WORDS: u8 = 5; // Header length in 32-bit words
pub const IPV4_FLAG_DONT_FRAGMENT: u16 = 0x4000; // Flags + fragment offset field
pub const IPV4_DEFAULT_TTL: u8 = 64;
pub const IPV4_PROTOCOL_ICMP: u8 = 1;

// IPv4 Header Field Offsets (for manual packet parsing)
pub const IPV4_TOTAL_LENGTH_OFFSET: usize = 2;
pub const IPV4_IDENTIFICATION_OFFSET: usize = 4;
pub const IPV4_FLAGS_OFFSET: usize = 6;
pub const IPV4_TTL_OFFSET: usize = 8;
pub const IPV4_PROTOCOL_OFFSET: usize = 9;
pub const IPV4_CHECKSUM_OFFSET: usize = 10;
pub const IPV4_SOURCE_OFFSET: usize = 12;
pub const IPV4_DESTINATION_OFFSET: usize = 16;

// ICMP Protocol Constants
pub const ICMP_HEADER_SIZE: usize = 8;
pub const ICMP_ECHO_REQUEST_TYPE: u8 = 8;
pub const ICMP_ECHO_REPLY_TYPE: u8 = 0;

// ICMP Header Field Offsets (for manual packet parsing)
pub const ICMP_TYPE_OFFSET: usize = 0;
pub const ICMP_CODE_OFFSET: usize = 1;
pub const ICMP_CHECKSUM_OFFSET: usize = 2;
pub const ICMP_ID_OFFSET: usize = 4;
pub const ICMP_SEQUENCE_OFFSET: usize = 6;
