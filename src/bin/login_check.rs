//! Binary that resolves the device identity, logs in to SmartAPI, prints the
//! profile and RMS limits, and logs out again.
//!
//! # Usage
//!
//! ```sh
//! export ANGEL_API_KEY="your-api-key"
//! export ANGEL_CLIENT_CODE="your-client-code"
//! export ANGEL_PASSWORD="your-password"
//! cargo run --bin login_check --features cli
//! ```

use std::env;
use std::time::Duration;

use angel_broking::error::{AngelError, Result};
use angel_broking::{AngelClient, IdentityResolver};

fn required_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| AngelError::InvalidArgument(format!("set {name} before running")))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let api_key = required_env("ANGEL_API_KEY")?;
    let client_code = required_env("ANGEL_CLIENT_CODE")?;
    let password = required_env("ANGEL_PASSWORD")?;

    let resolver = IdentityResolver::new().timeout(Duration::from_secs(5));
    let identity = resolver.resolve().await?;
    println!("Device identity: {identity}");

    let mut client = AngelClient::new(api_key, client_code, password)?
        .with_network_identity(identity);

    client.login().await?;
    println!("Logged in.");

    let profile = client.get_profile().await?;
    println!(
        "Profile: {} ({}) exchanges={:?}",
        profile.client_code,
        profile.name.as_deref().unwrap_or("-"),
        profile.exchanges
    );

    let rms = client.get_rms().await?;
    println!(
        "RMS: net={:?} available_cash={:?}",
        rms.net, rms.available_cash
    );

    client.logout().await?;
    println!("Done.");

    Ok(())
}
