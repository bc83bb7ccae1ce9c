use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use mac_address::MacAddress;

use super::{InterfaceSource, LocalAddress, NetworkIdentity, NetworkInterface, SystemInterfaces};
use crate::constants::{DEFAULT_LOOKUP_TIMEOUT, PUBLIC_IP_LOOKUP_URL};
use crate::error::{AngelError, Result};

/// Discovers the local IP, public IP and MAC address of this host.
///
/// Nothing is cached: every call re-reads the interface table and, for
/// [`public_ip`](Self::public_ip), re-queries the echo service.
#[derive(Debug, Clone)]
pub struct IdentityResolver<S = SystemInterfaces> {
    source: S,
    http: reqwest::Client,
    lookup_url: String,
    timeout: Duration,
}

impl IdentityResolver<SystemInterfaces> {
    /// Resolver over the OS interface table and [`PUBLIC_IP_LOOKUP_URL`].
    pub fn new() -> Self {
        Self::with_source(SystemInterfaces)
    }
}

impl Default for IdentityResolver<SystemInterfaces> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: InterfaceSource> IdentityResolver<S> {
    /// Resolver over a custom interface table.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            http: reqwest::Client::new(),
            lookup_url: PUBLIC_IP_LOOKUP_URL.to_owned(),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Use another plain-text IP echo service.
    pub fn lookup_url(mut self, url: impl Into<String>) -> Self {
        self.lookup_url = url.into();
        self
    }

    /// Bound the public IP request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The underlying interface source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve the full identity triple.
    ///
    /// Stops at the first failure, in the order local IP → MAC → public IP.
    pub async fn resolve(&self) -> Result<NetworkIdentity> {
        let local = self.local_address()?;
        let mac_address = hardware_address(&local.interface)?;
        let public_ip = self.public_ip().await?;

        let identity = NetworkIdentity {
            local_ip: local.ip,
            public_ip,
            mac_address,
        };
        tracing::debug!(interface = %local.interface.name, %identity, "resolved network identity");
        Ok(identity)
    }

    /// First IPv4 address on an up, non-loopback interface.
    pub fn local_address(&self) -> Result<LocalAddress> {
        let interfaces = self.source.interfaces()?;
        first_usable_ipv4(interfaces).ok_or(AngelError::NetworkUnavailable)
    }

    /// The interface that has `ip` bound to it; the first match wins.
    pub fn interface_for_ip(&self, ip: Ipv4Addr) -> Result<NetworkInterface> {
        self.source
            .interfaces()?
            .into_iter()
            .find(|iface| iface.addresses.iter().any(|addr| as_ipv4(*addr) == Some(ip)))
            .ok_or_else(|| AngelError::InterfaceLookup(ip.to_string()))
    }

    /// Validated MAC address of the interface called `name`.
    pub fn mac_address_by_name(&self, name: &str) -> Result<MacAddress> {
        let iface = self
            .source
            .interfaces()?
            .into_iter()
            .find(|iface| iface.name == name)
            .ok_or_else(|| AngelError::InterfaceLookup(name.to_owned()))?;
        hardware_address(&iface)
    }

    /// Public IP as reported by the echo service.
    pub async fn public_ip(&self) -> Result<IpAddr> {
        tracing::debug!(url = %self.lookup_url, timeout = ?self.timeout, "GET public ip");

        let resp = self
            .http
            .get(&self.lookup_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(AngelError::PublicIpTransport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(AngelError::PublicIpTransport)?;
        if !status.is_success() {
            return Err(AngelError::HttpStatus { status, body });
        }

        let trimmed = body.trim();
        trimmed
            .parse()
            .map_err(|_| AngelError::InvalidPublicIp(trimmed.to_owned()))
    }
}

/// Validated EUI-48 hardware address of `iface`.
///
/// Absent, wrongly sized or all-zero addresses are rejected.
pub fn hardware_address(iface: &NetworkInterface) -> Result<MacAddress> {
    let raw = iface.hardware_addr.as_deref().unwrap_or_default();
    let malformed = || AngelError::MalformedHardwareAddress {
        interface: iface.name.clone(),
        address: raw.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(":"),
    };

    let bytes: [u8; 6] = raw.try_into().map_err(|_| malformed())?;
    if bytes == [0; 6] {
        return Err(malformed());
    }
    Ok(MacAddress::new(bytes))
}

fn first_usable_ipv4(interfaces: Vec<NetworkInterface>) -> Option<LocalAddress> {
    for iface in interfaces {
        if !iface.is_up || iface.is_loopback {
            tracing::trace!(interface = %iface.name, "skipping down or loopback interface");
            continue;
        }
        let ip = iface
            .addresses
            .iter()
            .filter(|addr| !addr.is_loopback())
            .find_map(|addr| as_ipv4(*addr));
        if let Some(ip) = ip {
            return Some(LocalAddress { ip, interface: iface });
        }
    }
    None
}

/// IPv4 form of `addr`, unwrapping IPv4-mapped IPv6 addresses.
fn as_ipv4(addr: IpAddr) -> Option<Ipv4Addr> {
    match addr {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv6Addr;

    use super::*;

    fn iface(name: &str, up: bool, loopback: bool, addrs: &[IpAddr]) -> NetworkInterface {
        NetworkInterface {
            name: name.into(),
            is_up: up,
            is_loopback: loopback,
            addresses: addrs.to_vec(),
            hardware_addr: None,
        }
    }

    #[test]
    fn skips_ipv6_and_picks_first_ipv4_on_interface() {
        let v6: IpAddr = "fe80::1".parse().unwrap();
        let v4: IpAddr = "192.168.1.20".parse().unwrap();
        let found = first_usable_ipv4(vec![iface("eth0", true, false, &[v6, v4])]).unwrap();
        assert_eq!(found.ip, Ipv4Addr::new(192, 168, 1, 20));
        assert_eq!(found.interface.name, "eth0");
    }

    #[test]
    fn loopback_address_on_regular_interface_is_skipped() {
        let lo: IpAddr = "127.0.0.2".parse().unwrap();
        let v4: IpAddr = "10.1.2.3".parse().unwrap();
        let found = first_usable_ipv4(vec![iface("eth0", true, false, &[lo, v4])]).unwrap();
        assert_eq!(found.ip, Ipv4Addr::new(10, 1, 2, 3));
    }

    #[test]
    fn ipv4_mapped_ipv6_counts_as_ipv4() {
        let mapped = IpAddr::V6(Ipv4Addr::new(172, 16, 0, 9).to_ipv6_mapped());
        let found = first_usable_ipv4(vec![iface("eth0", true, false, &[mapped])]).unwrap();
        assert_eq!(found.ip, Ipv4Addr::new(172, 16, 0, 9));
    }

    #[test]
    fn interface_with_only_ipv6_is_passed_over() {
        let v6 = IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1));
        let v4: IpAddr = "192.0.2.10".parse().unwrap();
        let found = first_usable_ipv4(vec![
            iface("wg0", true, false, &[v6]),
            iface("eth1", true, false, &[v4]),
        ])
        .unwrap();
        assert_eq!(found.interface.name, "eth1");
    }

    #[test]
    fn malformed_address_is_hex_encoded_in_error() {
        let mut eth = iface("eth0", true, false, &[]);
        eth.hardware_addr = Some(vec![0xde, 0xad, 0xbe]);
        match hardware_address(&eth) {
            Err(AngelError::MalformedHardwareAddress { interface, address }) => {
                assert_eq!(interface, "eth0");
                assert_eq!(address, "de:ad:be");
            }
            other => panic!("expected MalformedHardwareAddress, got {other:?}"),
        }
    }
}
