//! Device identity for SmartAPI requests.
//!
//! SmartAPI wants the caller's private IPv4, public IP and MAC address on
//! every request. [`IdentityResolver`] discovers all three:
//!
//! 1. **Local IP**: the first IPv4 address bound to an interface that is up
//!    and not a loopback.
//! 2. **MAC**: the hardware address of *that same* interface. The interface
//!    found in step 1 is carried forward rather than searched for again.
//! 3. **Public IP**: the body of a plain-text "what is my IP" service,
//!    fetched with a bounded timeout.
//!
//! Interface enumeration goes through the [`InterfaceSource`] trait;
//! [`SystemInterfaces`] reads the operating system's interface table.
//!
//! ```no_run
//! use angel_broking::identity::IdentityResolver;
//!
//! # #[tokio::main]
//! # async fn main() -> angel_broking::Result<()> {
//! let identity = IdentityResolver::new().resolve().await?;
//! println!("{identity}");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use mac_address::MacAddress;

use crate::error::Result;

mod resolver;
mod system;

pub use resolver::{IdentityResolver, hardware_address};
pub use system::SystemInterfaces;

/// One network interface with every address bound to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInterface {
    /// OS name of the interface (`eth0`, `en0`, ...).
    pub name: String,
    /// Administratively up.
    pub is_up: bool,
    pub is_loopback: bool,
    /// Bound addresses, in the order the platform reports them.
    pub addresses: Vec<IpAddr>,
    /// Raw link-layer address, if the platform exposes one.
    pub hardware_addr: Option<Vec<u8>>,
}

impl NetworkInterface {
    /// An interface with no flags and no addresses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Source of the host's interface table.
pub trait InterfaceSource {
    /// All interfaces, in platform order.
    fn interfaces(&self) -> Result<Vec<NetworkInterface>>;
}

impl<S: InterfaceSource + ?Sized> InterfaceSource for &S {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>> {
        (**self).interfaces()
    }
}

/// A usable local IPv4 together with the interface it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAddress {
    pub ip: Ipv4Addr,
    pub interface: NetworkInterface,
}

/// The (local IP, public IP, MAC) triple sent with every SmartAPI request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkIdentity {
    pub local_ip: Ipv4Addr,
    pub public_ip: IpAddr,
    pub mac_address: MacAddress,
}

impl fmt::Display for NetworkIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "local={} public={} mac={}",
            self.local_ip, self.public_ip, self.mac_address
        )
    }
}
