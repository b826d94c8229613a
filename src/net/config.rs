use crate::core::{Ipv4Address, MacAddress};

use super::error::TransportError;
use super::transport::interface_info;

/// Process-wide network configuration, immutable for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct NetworkConfig {
    pub own_mac: MacAddress,
    pub own_ip: Ipv4Address,
    pub subnet_mask: Ipv4Address,
    pub gateway_ip: Ipv4Address,
}

impl NetworkConfig {
    pub fn new(
        own_mac: MacAddress,
        own_ip: Ipv4Address,
        subnet_mask: Ipv4Address,
        gateway_ip: Ipv4Address,
    ) -> Self {
        NetworkConfig {
            own_mac,
            own_ip,
            subnet_mask,
            gateway_ip,
        }
    }

    /// Derives MAC, IP and subnet mask from a named local interface. The
    /// gateway cannot be read off the interface and stays caller-supplied.
    pub fn from_interface(
        interface_name: &str,
        gateway_ip: Ipv4Address,
    ) -> Result<Self, TransportError> {
        let info = interface_info(interface_name)?;
        Ok(NetworkConfig {
            own_mac: info.mac,
            own_ip: info.ip,
            subnet_mask: Ipv4Address::from_prefix(info.prefix),
            gateway_ip,
        })
    }

    /// True if `ip` is on the same subnet as this host.
    pub fn same_subnet(&self, ip: Ipv4Address) -> bool {
        ip & self.subnet_mask == self.own_ip & self.subnet_mask
    }
}
