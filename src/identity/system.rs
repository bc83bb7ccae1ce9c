//! Interface table read from the operating system.

use super::{InterfaceSource, NetworkInterface};
use crate::error::Result;

/// Reads interfaces with `getifaddrs(3)`.
///
/// On platforms without `getifaddrs` the table is empty, so local IP
/// discovery reports [`NetworkUnavailable`](crate::AngelError::NetworkUnavailable).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

#[cfg(unix)]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>> {
        use std::net::IpAddr;

        use nix::net::if_::InterfaceFlags;

        use crate::error::AngelError;

        let entries = nix::ifaddrs::getifaddrs()
            .map_err(|errno| AngelError::InterfaceEnumeration(errno.into()))?;

        // getifaddrs yields one entry per (interface, address) pair; fold them
        // into one record per interface, keeping first-seen order.
        let mut table: Vec<NetworkInterface> = Vec::new();
        for entry in entries {
            let idx = match table.iter().position(|i| i.name == entry.interface_name) {
                Some(idx) => idx,
                None => {
                    table.push(NetworkInterface::new(entry.interface_name.clone()));
                    table.len() - 1
                }
            };
            let iface = &mut table[idx];
            iface.is_up |= entry.flags.contains(InterfaceFlags::IFF_UP);
            iface.is_loopback |= entry.flags.contains(InterfaceFlags::IFF_LOOPBACK);

            let Some(address) = entry.address else {
                continue;
            };
            if let Some(sin) = address.as_sockaddr_in() {
                iface
                    .addresses
                    .push(IpAddr::V4(std::net::Ipv4Addr::from(sin.ip())));
            } else if let Some(sin6) = address.as_sockaddr_in6() {
                iface.addresses.push(IpAddr::V6(sin6.ip()));
            } else if let Some(mac) = link_address(&address) {
                iface.hardware_addr = Some(mac.to_vec());
            }
        }

        tracing::trace!(count = table.len(), "enumerated network interfaces");
        Ok(table)
    }
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios"
))]
fn link_address(address: &nix::sys::socket::SockaddrStorage) -> Option<[u8; 6]> {
    address.as_link_addr().and_then(|link| link.addr())
}

#[cfg(all(
    unix,
    not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios"
    ))
))]
fn link_address(_address: &nix::sys::socket::SockaddrStorage) -> Option<[u8; 6]> {
    None
}

#[cfg(not(unix))]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>> {
        tracing::warn!("interface enumeration is not supported on this platform");
        Ok(Vec::new())
    }
}
