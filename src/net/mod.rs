pub mod arp;
pub mod config;
pub mod error;
pub mod ethernet;
pub mod icmp;
pub mod ipv4;
pub mod ping;
pub mod resolver;
pub mod transport;
pub mod waiter;

pub use arp::ArpMessage;
pub use config::NetworkConfig;
pub use error::{TransportError, TruncatedFrameError};
pub use ethernet::EthernetFrame;
pub use icmp::IcmpMessage;
pub use ipv4::Ipv4Packet;
pub use ping::{EchoClient, EchoOutcome};
pub use resolver::ArpResolver;
pub use transport::{DatalinkTransport, InterfaceInfo, RawFrameTransport};
pub use waiter::wait_for_reply;
