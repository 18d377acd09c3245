/// Address resolution for the "running at" block
///
/// This module handles:
/// - Choosing which host addresses to advertise
/// - Discovering the primary non-loopback IPv4 address
use log::debug;
use std::net::{IpAddr, UdpSocket};

/// Addresses to advertise, in display order
///
/// An explicit address wins; otherwise "localhost" plus whatever `discover`
/// finds (possibly an empty string). `discover` is only called when needed.
pub fn displayed_addresses<F>(address: Option<&str>, discover: F) -> Vec<String>
where
    F: FnOnce() -> String,
{
    match address.filter(|a| !a.is_empty()) {
        Some(address) => vec![address.to_string()],
        None => vec!["localhost".to_string(), discover()],
    }
}

/// Format an address and port as a URL
pub fn format_url(address: &str, port: u16) -> String {
    format!("http://{}:{}", address, port)
}

/// Primary non-loopback IPv4 address of this host, or an empty string
///
/// Connecting a UDP socket only selects a route; no packet is sent.
pub fn discover_primary_ip() -> String {
    let discovered = UdpSocket::bind("0.0.0.0:0")
        .and_then(|socket| {
            socket.connect("8.8.8.8:80")?;
            socket.local_addr()
        })
        .ok()
        .map(|addr| addr.ip())
        .filter(|ip| matches!(ip, IpAddr::V4(v4) if !v4.is_loopback() && !v4.is_unspecified()));

    match discovered {
        Some(ip) => ip.to_string(),
        None => {
            debug!("No non-loopback IPv4 address found");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_address_is_the_only_entry() {
        let addresses = displayed_addresses(Some("1.2.3.4"), || panic!("discovery should not run"));
        assert_eq!(addresses, vec!["1.2.3.4"]);
    }

    #[test]
    fn test_missing_address_uses_localhost_and_discovery() {
        let addresses = displayed_addresses(None, || "192.168.1.20".to_string());
        assert_eq!(addresses, vec!["localhost", "192.168.1.20"]);
    }

    #[test]
    fn test_empty_address_counts_as_missing() {
        let addresses = displayed_addresses(Some(""), String::new);
        assert_eq!(addresses, vec!["localhost", ""]);
    }

    #[test]
    fn test_format_url() {
        assert_eq!(format_url("1.2.3.4", 3000), "http://1.2.3.4:3000");
        assert_eq!(format_url("", 8080), "http://:8080");
    }

    #[test]
    fn test_discovered_ip_is_never_loopback() {
        let ip = discover_primary_ip();
        assert!(!ip.starts_with("127."));
    }
}
