//! # angel-broking
//!
//! A Rust client library for the Angel Broking SmartAPI REST trading API.
//!
//! ## Quick Start
//!
//! ```no_run
//! use angel_broking::client::AngelClient;
//!
//! #[tokio::main]
//! async fn main() -> angel_broking::error::Result<()> {
//!     let mut client = AngelClient::new("api-key", "A123456", "password")?;
//!     // Resolves local IP, public IP and MAC, then logs in.
//!     client.login().await?;
//!     let rms = client.get_rms().await?;
//!     println!("available cash: {:?}", rms.available_cash);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod identity;
pub mod params;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::AngelClient;
/// Re-export the error type and Result alias.
pub use error::{AngelError, Result};
/// Re-export the device identity resolver.
pub use identity::{IdentityResolver, NetworkIdentity};
