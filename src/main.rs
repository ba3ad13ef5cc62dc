//! Terminal frontend for the converter client.
//!
//! This demonstrates how to configure and drive the two workflows with
//! environment variables: a balance query always runs; a conversion runs
//! afterwards when `CONVERT=1` and the queried balance was positive.

#![warn(clippy::all, clippy::pedantic)]

use ledger_converter::{BalanceOutcome, RequestCoordinator, config};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::from_env()?;
    let account = env::var("ACCOUNT")?;
    let subaccount = env::var("SUBACCOUNT").unwrap_or_default();
    let convert = env::var("CONVERT").is_ok_and(|v| v == "1");

    println!("Initializing converter client...");
    println!("Service URL: {}", config.service_url);
    println!("Account: {account}");
    if !subaccount.is_empty() {
        println!("Subaccount: {subaccount}");
    }

    let coordinator = RequestCoordinator::with_http(config)?;

    match coordinator.query_balance(&account, &subaccount).await? {
        BalanceOutcome::Balance { display, .. } => println!("Balance: {display}"),
        BalanceOutcome::Failed { rendering } => println!("Balance query failed: {rendering}"),
    }

    if convert {
        if coordinator.conversion_enabled() {
            let outcome = coordinator.convert(&account, &subaccount).await?;
            println!("{}", outcome.message());
        } else {
            println!("Conversion is not enabled: the account has no positive balance.");
        }
    }

    Ok(())
}
