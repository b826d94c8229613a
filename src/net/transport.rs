use std::net::IpAddr;
use std::time::{Duration, Instant};

use pnet::datalink::{self, Channel, Config, DataLinkReceiver, DataLinkSender};

use crate::core::{Ipv4Address, MacAddress};

use super::error::TransportError;

// Poll granularity for the pnet receiver; bounds how long a wait can overshoot
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Raw-frame capability the protocol core is handed. Bound to one interface
/// for its lifetime; delivers every frame seen on that interface, including
/// frames not addressed to this host and frames this process sent itself.
pub trait RawFrameTransport {
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError>;

    /// Receives one frame, blocking until one arrives.
    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, TransportError>;

    /// Returns true if a frame became available before `timeout` elapsed.
    fn wait_readable(&mut self, timeout: Duration) -> Result<bool, TransportError>;
}

/// Addressing information of a local interface, used to build a
/// `NetworkConfig`.
#[derive(Debug, Clone, Copy)]
pub struct InterfaceInfo {
    pub mac: MacAddress,
    pub ip: Ipv4Address,
    pub prefix: u8,
}

/// Looks up a local interface by name and extracts its MAC, first IPv4
/// address and prefix length.
pub fn interface_info(interface_name: &str) -> Result<InterfaceInfo, TransportError> {
    let interface = datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == interface_name)
        .ok_or(TransportError::InvalidInterface)?;

    // Get ip address and prefix from the interface
    let (ipv4_addr, prefix) = interface
        .ips
        .iter()
        .find_map(|ip| match ip.ip() {
            IpAddr::V4(v4) => Some((v4, ip.prefix())),
            _ => None,
        })
        .ok_or(TransportError::InvalidInterface)?;

    // Get mac address from the interface
    let mac_address = interface.mac.ok_or(TransportError::InvalidInterface)?;

    Ok(InterfaceInfo {
        mac: MacAddress::new(mac_address.octets()),
        ip: Ipv4Address::new(ipv4_addr.octets()),
        prefix,
    })
}

/// `RawFrameTransport` backed by a pnet datalink channel. The channel is
/// acquired on `open` and released when the value is dropped; the caller that
/// owns the session owns the transport.
pub struct DatalinkTransport {
    sender: Box<dyn DataLinkSender>,
    receiver: Box<dyn DataLinkReceiver>,
    // Frame pulled off the channel by wait_readable, handed out by receive.
    // pnet has no poll-without-consume call.
    pending: Option<Vec<u8>>,
}

impl DatalinkTransport {
    /// Opens an Ethernet channel bound to the named interface.
    pub fn open(interface_name: &str) -> Result<DatalinkTransport, TransportError> {
        let interface = datalink::interfaces()
            .into_iter()
            .find(|iface| iface.name == interface_name)
            .ok_or(TransportError::InvalidInterface)?;

        let config = Config {
            read_timeout: Some(POLL_INTERVAL),
            ..Default::default()
        };
        let channel = match datalink::channel(&interface, config) {
            Ok(channel) => channel,
            Err(e) => return Err(TransportError::NetworkError(e.to_string())),
        };

        let (sender, receiver) = match channel {
            Channel::Ethernet(tx, rx) => (tx, rx),
            _ => return Err(TransportError::UnsupportedChannel),
        };

        Ok(DatalinkTransport {
            sender,
            receiver,
            pending: None,
        })
    }
}

impl RawFrameTransport for DatalinkTransport {
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        match self.sender.send_to(frame, None) {
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => Err(TransportError::NetworkError(format!(
                "Failed to send frame: {}",
                e
            ))),
            None => Err(TransportError::NetworkError(
                "Failed to send frame".to_string(),
            )),
        }
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, TransportError> {
        if let Some(mut frame) = self.pending.take() {
            frame.truncate(max_len);
            return Ok(frame);
        }
        loop {
            match self.receiver.next() {
                Ok(frame) => {
                    let mut frame = frame.to_vec();
                    frame.truncate(max_len);
                    return Ok(frame);
                }
                Err(e) if is_poll_timeout(&e) => continue,
                Err(e) => {
                    return Err(TransportError::NetworkError(format!(
                        "Failed to receive frame: {}",
                        e
                    )))
                }
            }
        }
    }

    fn wait_readable(&mut self, timeout: Duration) -> Result<bool, TransportError> {
        if self.pending.is_some() {
            return Ok(true);
        }
        let deadline = Instant::now() + timeout;
        loop {
            match self.receiver.next() {
                Ok(frame) => {
                    self.pending = Some(frame.to_vec());
                    return Ok(true);
                }
                Err(e) if is_poll_timeout(&e) => {
                    if Instant::now() >= deadline {
                        return Ok(false);
                    }
                }
                Err(e) => {
                    return Err(TransportError::NetworkError(format!(
                        "Failed to receive frame: {}",
                        e
                    )))
                }
            }
        }
    }
}

fn is_poll_timeout(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
    )
}
