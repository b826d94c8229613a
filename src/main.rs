use std::env;
use std::process;

use rawping::core::Ipv4Address;
use rawping::net::{ArpResolver, DatalinkTransport, EchoClient, EchoOutcome, NetworkConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <interface> <gateway-ip> <target-ip>", args[0]);
        process::exit(1);
    }

    let gateway_ip = match Ipv4Address::parse(&args[2]) {
        Ok(ip) => ip,
        Err(e) => {
            eprintln!("Bad gateway address {}: {}", args[2], e);
            process::exit(1);
        }
    };
    let target_ip = match Ipv4Address::parse(&args[3]) {
        Ok(ip) => ip,
        Err(e) => {
            eprintln!("Bad target address {}: {}", args[3], e);
            process::exit(1);
        }
    };

    let config = match NetworkConfig::from_interface(&args[1], gateway_ip) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read interface {}: {}", args[1], e);
            process::exit(1);
        }
    };
    println!(
        "Pinging {} from {} ({}) via {}",
        target_ip, config.own_ip, config.own_mac, args[1]
    );

    let mut transport = match DatalinkTransport::open(&args[1]) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("Failed to open channel on {}: {}", args[1], e);
            process::exit(1);
        }
    };

    let mut client = EchoClient::new(ArpResolver::new(config));
    match client.ping(&mut transport, target_ip, process::id() as u16, 1) {
        Ok(EchoOutcome::Reply(reply)) => {
            println!(
                "Reply from {}: id={} seq={} payload={} bytes",
                target_ip,
                reply.identifier,
                reply.sequence_no,
                reply.payload.len()
            );
        }
        Ok(EchoOutcome::Timeout) => println!("No reply from {}", target_ip),
        Ok(EchoOutcome::NoRoute) => println!("No route to {}: ARP resolution failed", target_ip),
        Err(e) => {
            eprintln!("Transport error: {}", e);
            process::exit(1);
        }
    }
}
