use std::time::Duration;

use crate::core::constants::{
    ETHERTYPE_IPV4, ICMP_ECHO_REPLY_TYPE, IPV4_PROTOCOL_ICMP,
};
use crate::core::Ipv4Address;

use super::error::TransportError;
use super::ethernet::EthernetFrame;
use super::icmp::IcmpMessage;
use super::ipv4::Ipv4Packet;
use super::resolver::ArpResolver;
use super::transport::RawFrameTransport;
use super::waiter::wait_for_reply;

pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_secs(1);

// Fixed 8-byte echo payload
const ECHO_PAYLOAD: [u8; 8] = *b"rawping!";

/// Outcome of a single echo exchange. Neither `Timeout` nor `NoRoute` is an
/// error: unreachable hosts are a normal network condition.
#[derive(Debug, Clone, PartialEq)]
pub enum EchoOutcome {
    /// The decoded echo reply.
    Reply(IcmpMessage),
    /// The request was sent but nothing matching came back in time.
    Timeout,
    /// Next-hop resolution failed; no packet was sent.
    NoRoute,
}

/// Sends ICMP echo requests and correlates the replies.
pub struct EchoClient {
    resolver: ArpResolver,
    timeout: Duration,
}

impl EchoClient {
    pub fn new(resolver: ArpResolver) -> Self {
        EchoClient {
            resolver,
            timeout: DEFAULT_PING_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pings `destination_ip` once. The frame is addressed to the ARP-resolved
    /// next hop (the host itself on the local subnet, the gateway otherwise);
    /// the reply is matched on our addresses plus the identifier and sequence
    /// number sent.
    pub fn ping<T: RawFrameTransport>(
        &mut self,
        transport: &mut T,
        destination_ip: Ipv4Address,
        identifier: u16,
        sequence_no: u16,
    ) -> Result<EchoOutcome, TransportError> {
        let next_hop_mac = match self.resolver.resolve(transport, destination_ip)? {
            Some(mac) => mac,
            None => return Ok(EchoOutcome::NoRoute),
        };

        let config = *self.resolver.config();
        let echo = IcmpMessage::encode_echo_request(identifier, sequence_no, &ECHO_PAYLOAD);
        let packet = Ipv4Packet::encode(
            config.own_ip,
            destination_ip,
            IPV4_PROTOCOL_ICMP,
            &echo,
        );
        let frame =
            EthernetFrame::encode(next_hop_mac, config.own_mac, ETHERTYPE_IPV4, &packet);
        transport.send(&frame)?;

        let reply = wait_for_reply(
            transport,
            |frame| {
                if frame.destination != config.own_mac || frame.ethertype != ETHERTYPE_IPV4 {
                    return false;
                }
                let packet = match Ipv4Packet::decode(&frame.payload) {
                    Ok(packet) => packet,
                    Err(_) => return false,
                };
                if packet.destination != config.own_ip
                    || packet.source != destination_ip
                    || packet.protocol != IPV4_PROTOCOL_ICMP
                {
                    return false;
                }
                match IcmpMessage::decode(&packet.payload) {
                    Ok(message) => {
                        message.message_type == ICMP_ECHO_REPLY_TYPE
                            && message.identifier == identifier
                            && message.sequence_no == sequence_no
                    }
                    Err(_) => false,
                }
            },
            self.timeout,
        )?;

        // The predicate only matches frames that decode down to an echo reply
        let message = reply
            .and_then(|frame| Ipv4Packet::decode(&frame.payload).ok())
            .and_then(|packet| IcmpMessage::decode(&packet.payload).ok());
        match message {
            Some(message) => Ok(EchoOutcome::Reply(message)),
            None => Ok(EchoOutcome::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::ETHERTYPE_ARP;
    use crate::core::MacAddress;
    use crate::net::config::NetworkConfig;
    use crate::net::transport::mock::MockTransport;

    fn config() -> NetworkConfig {
        NetworkConfig::new(
            MacAddress::parse("aa:bb:cc:dd:ee:ff").unwrap(),
            Ipv4Address::parse("192.168.1.250").unwrap(),
            Ipv4Address::parse("255.255.255.0").unwrap(),
            Ipv4Address::parse("192.168.1.1").unwrap(),
        )
    }

    fn arp_reply_frame(
        sender_mac: MacAddress,
        sender_ip: Ipv4Address,
        target: &NetworkConfig,
    ) -> Vec<u8> {
        let mut message = Vec::new();
        message.extend_from_slice(&1u16.to_be_bytes());
        message.extend_from_slice(&0x0800u16.to_be_bytes());
        message.push(6);
        message.push(4);
        message.extend_from_slice(&2u16.to_be_bytes());
        message.extend_from_slice(&sender_mac.address());
        message.extend_from_slice(&sender_ip.address());
        message.extend_from_slice(&target.own_mac.address());
        message.extend_from_slice(&target.own_ip.address());
        EthernetFrame::encode(target.own_mac, sender_mac, ETHERTYPE_ARP, &message)
    }

    fn echo_reply_frame(
        from_ip: Ipv4Address,
        from_mac: MacAddress,
        to: &NetworkConfig,
        identifier: u16,
        sequence_no: u16,
    ) -> Vec<u8> {
        let mut echo = IcmpMessage::encode_echo_request(identifier, sequence_no, &ECHO_PAYLOAD);
        echo[0] = ICMP_ECHO_REPLY_TYPE; // Rewrite type; checksum is not re-verified by decode
        let packet = Ipv4Packet::encode(from_ip, to.own_ip, IPV4_PROTOCOL_ICMP, &echo);
        EthernetFrame::encode(to.own_mac, from_mac, ETHERTYPE_IPV4, &packet)
    }

    #[test]
    fn test_ping_local_host_reply() {
        let config = config();
        let target_ip = Ipv4Address::parse("192.168.1.54").unwrap();
        let target_mac = MacAddress::parse("11:22:33:44:55:66").unwrap();

        let mut transport = MockTransport::new();
        transport.queue_frame(arp_reply_frame(target_mac, target_ip, &config));
        transport.queue_frame(echo_reply_frame(target_ip, target_mac, &config, 1, 1));

        let mut client = EchoClient::new(ArpResolver::new(config));
        let outcome = client.ping(&mut transport, target_ip, 1, 1).unwrap();

        match outcome {
            EchoOutcome::Reply(message) => {
                assert_eq!(message.identifier, 1);
                assert_eq!(message.sequence_no, 1);
                assert_eq!(message.payload, ECHO_PAYLOAD);
            }
            other => panic!("expected a reply, got {:?}", other),
        }

        // ARP request then the echo request itself
        assert_eq!(transport.sent.len(), 2);
        let echo_frame = EthernetFrame::decode(&transport.sent[1]).unwrap();
        assert_eq!(echo_frame.destination, target_mac);
        assert_eq!(echo_frame.ethertype, ETHERTYPE_IPV4);
        let packet = Ipv4Packet::decode(&echo_frame.payload).unwrap();
        assert_eq!(packet.protocol, IPV4_PROTOCOL_ICMP);
        assert_eq!(packet.destination, target_ip);
    }

    #[test]
    fn test_ping_remote_host_goes_via_gateway() {
        let config = config();
        let remote_ip = Ipv4Address::parse("8.8.8.8").unwrap();
        let gateway_mac = MacAddress::parse("01:02:03:04:05:06").unwrap();

        let mut transport = MockTransport::new();
        transport.queue_frame(arp_reply_frame(gateway_mac, config.gateway_ip, &config));
        transport.queue_frame(echo_reply_frame(remote_ip, gateway_mac, &config, 9, 3));

        let mut client = EchoClient::new(ArpResolver::new(config));
        let outcome = client.ping(&mut transport, remote_ip, 9, 3).unwrap();
        assert!(matches!(outcome, EchoOutcome::Reply(_)));

        // The echo frame is addressed to the gateway's MAC, not the target's
        let echo_frame = EthernetFrame::decode(&transport.sent[1]).unwrap();
        assert_eq!(echo_frame.destination, gateway_mac);
        let packet = Ipv4Packet::decode(&echo_frame.payload).unwrap();
        assert_eq!(packet.destination, remote_ip);
    }

    #[test]
    fn test_ping_no_route() {
        let config = config();
        let mut transport = MockTransport::new();

        let mut client = EchoClient::new(
            ArpResolver::new(config).with_timeout(Duration::from_millis(50)),
        );
        let outcome = client
            .ping(
                &mut transport,
                Ipv4Address::parse("192.168.1.54").unwrap(),
                1,
                1,
            )
            .unwrap();

        assert_eq!(outcome, EchoOutcome::NoRoute);
        // Only the ARP request went out, never an echo
        assert_eq!(transport.sent.len(), 1);
    }

    #[test]
    fn test_ping_timeout() {
        let config = config();
        let target_ip = Ipv4Address::parse("192.168.1.54").unwrap();
        let target_mac = MacAddress::parse("11:22:33:44:55:66").unwrap();

        let mut transport = MockTransport::new();
        transport.queue_frame(arp_reply_frame(target_mac, target_ip, &config));

        let mut client = EchoClient::new(ArpResolver::new(config))
            .with_timeout(Duration::from_millis(50));
        let outcome = client.ping(&mut transport, target_ip, 1, 1).unwrap();
        assert_eq!(outcome, EchoOutcome::Timeout);
        assert_eq!(transport.sent.len(), 2);
    }

    #[test]
    fn test_mismatched_identifier_is_ignored() {
        let config = config();
        let target_ip = Ipv4Address::parse("192.168.1.54").unwrap();
        let target_mac = MacAddress::parse("11:22:33:44:55:66").unwrap();

        let mut transport = MockTransport::new();
        transport.queue_frame(arp_reply_frame(target_mac, target_ip, &config));
        // Reply carrying a foreign identifier must not satisfy the wait
        transport.queue_frame(echo_reply_frame(target_ip, target_mac, &config, 99, 1));

        let mut client = EchoClient::new(ArpResolver::new(config))
            .with_timeout(Duration::from_millis(50));
        let outcome = client.ping(&mut transport, target_ip, 1, 1).unwrap();
        assert_eq!(outcome, EchoOutcome::Timeout);
    }

    #[test]
    fn test_three_layer_roundtrip() {
        // Echo request wrapped in IPv4 and Ethernet survives decoding through
        // all three layers intact
        let config = config();
        let target_ip = Ipv4Address::parse("192.168.1.54").unwrap();
        let target_mac = MacAddress::parse("11:22:33:44:55:66").unwrap();

        let echo = IcmpMessage::encode_echo_request(1, 1, &ECHO_PAYLOAD);
        let packet = Ipv4Packet::encode(config.own_ip, target_ip, IPV4_PROTOCOL_ICMP, &echo);
        let frame = EthernetFrame::encode(target_mac, config.own_mac, ETHERTYPE_IPV4, &packet);

        let decoded_frame = EthernetFrame::decode(&frame).unwrap();
        let decoded_packet = Ipv4Packet::decode(&decoded_frame.payload).unwrap();
        let decoded_echo = IcmpMessage::decode(&decoded_packet.payload).unwrap();

        assert_eq!(decoded_echo.identifier, 1);
        assert_eq!(decoded_echo.sequence_no, 1);
        assert_eq!(decoded_echo.payload, ECHO_PAYLOAD);
    }
}
