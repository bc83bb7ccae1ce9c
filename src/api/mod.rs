//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`AngelClient`](crate::client::AngelClient) via `impl` blocks. All methods
//! handle JSON serialization, HTTP transport, envelope unwrapping and error
//! mapping automatically.
//!
//! ## Usage
//!
//! ```no_run
//! use angel_broking::AngelClient;
//!
//! # #[tokio::main]
//! # async fn main() -> angel_broking::Result<()> {
//! let mut client = AngelClient::new("api-key", "A123456", "password")?;
//! client.login().await?;
//! let orders = client.get_order_book().await?;
//! let holdings = client.get_holdings().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`auth`] | 3 | Login, session renewal, logout |
//! | [`profile`] | 1 | User profile |
//! | [`orders`] | 5 | Place, modify, cancel, order book, trade book |
//! | [`portfolio`] | 3 | Holdings, positions, convert position |
//! | [`market_quote`] | 1 | LTP |
//! | [`funds`] | 1 | RMS limits |

pub mod auth;
pub mod funds;
pub mod market_quote;
pub mod orders;
pub mod portfolio;
pub mod profile;
