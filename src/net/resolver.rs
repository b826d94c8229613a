use std::collections::HashMap;
use std::time::Duration;

use crate::core::constants::{ARP_OPERATION_REPLY, ETHERTYPE_ARP};
use crate::core::{Ipv4Address, MacAddress, MAC_ADDRESS_BROADCAST};

use super::arp::ArpMessage;
use super::config::NetworkConfig;
use super::error::TransportError;
use super::ethernet::EthernetFrame;
use super::transport::RawFrameTransport;
use super::waiter::wait_for_reply;

pub const DEFAULT_ARP_TIMEOUT: Duration = Duration::from_secs(1);

/// Resolves IPv4 addresses to hardware addresses via ARP, with a cache.
///
/// Addresses outside the local subnet resolve to the gateway's hardware
/// address. The cache is populated on successful resolution and never
/// evicted; a hardware-address change on a remote host after first
/// resolution is not detected.
pub struct ArpResolver {
    config: NetworkConfig,
    timeout: Duration,
    cache: HashMap<Ipv4Address, MacAddress>,
}

impl ArpResolver {
    pub fn new(config: NetworkConfig) -> Self {
        ArpResolver {
            config,
            timeout: DEFAULT_ARP_TIMEOUT,
            cache: HashMap::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Read-only view of the resolution cache.
    pub fn cache(&self) -> &HashMap<Ipv4Address, MacAddress> {
        &self.cache
    }

    /// The IP whose hardware address actually gets resolved: the target
    /// itself when it is on the local subnet, the gateway otherwise.
    pub fn resolve_route(&self, target_ip: Ipv4Address) -> Ipv4Address {
        if self.config.same_subnet(target_ip) {
            target_ip
        } else {
            self.config.gateway_ip
        }
    }

    /// Resolves `target_ip` to a hardware address, asking the network only
    /// on a cache miss. Returns `Ok(None)` if nobody answered within the
    /// timeout; the caller decides whether that is fatal.
    pub fn resolve<T: RawFrameTransport>(
        &mut self,
        transport: &mut T,
        target_ip: Ipv4Address,
    ) -> Result<Option<MacAddress>, TransportError> {
        let next_hop = self.resolve_route(target_ip);

        if let Some(mac) = self.cache.get(&next_hop) {
            return Ok(Some(*mac));
        }

        let request =
            ArpMessage::encode_request(self.config.own_mac, self.config.own_ip, next_hop);
        let frame = EthernetFrame::encode(
            MAC_ADDRESS_BROADCAST,
            self.config.own_mac,
            ETHERTYPE_ARP,
            &request,
        );
        transport.send(&frame)?;

        let own_mac = self.config.own_mac;
        let reply = wait_for_reply(
            transport,
            |frame| {
                if frame.destination != own_mac || frame.ethertype != ETHERTYPE_ARP {
                    return false;
                }
                match ArpMessage::decode(&frame.payload) {
                    Ok(message) => {
                        message.operation == ARP_OPERATION_REPLY && message.sender_ip == next_hop
                    }
                    Err(_) => false,
                }
            },
            self.timeout,
        )?;

        // The predicate only matches frames whose ARP payload decoded
        if let Some(message) = reply.and_then(|frame| ArpMessage::decode(&frame.payload).ok()) {
            self.cache.insert(next_hop, message.sender_mac);
            return Ok(Some(message.sender_mac));
        }
        Ok(None)
    }
}
