//! Currency Refresh
//!
//! This example fetches a rate table once and converts with it.
//!
//! Key concepts:
//! - The rate source is an environment capability
//! - A refresh is a single attempt; failure keeps the old table
//! - Strict rate policy rejects currencies without a rate
//!
//! Run with: cargo run --example currency_refresh

use quantum_calc::config::EngineConfig;
use quantum_calc::conversion::{Domain, UnitConverter};
use quantum_calc::core::State;
use quantum_calc::currency::{RateTable, StaticRateSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Currency Refresh ===\n");

    let config = EngineConfig::from_toml_str(
        r#"
        [fallback]
        rate = "strict"
        "#,
    )?
    .validated()?;
    let mut converter = UnitConverter::with_config(&config);

    println!("Before refresh: {}", converter.currency().status().name());
    if let Err(e) = converter.try_convert(Domain::Currency, 100.0, "USD", "EUR") {
        println!("  100 USD -> EUR: {e}");
    }

    let body = r#"{"base": "USD", "date": "2024-05-01", "rates": {"USD": 1, "EUR": 0.93, "GBP": 0.8, "JPY": 157.8}}"#;
    let env = StaticRateSource::new(RateTable::from_json(body)?);
    converter.currency_mut().refresh(&env).await?;
    println!("\nAfter refresh: {}", converter.currency().status().name());

    for to in ["EUR", "GBP", "JPY", "INR"] {
        match converter.convert_text(Domain::Currency, "100", "USD", to) {
            Ok(text) => println!("  100 USD -> {to}: {text}"),
            Err(e) => println!("  100 USD -> {to}: {e}"),
        }
    }

    let offline = StaticRateSource::failing("offline");
    if let Err(e) = converter.currency_mut().refresh(&offline).await {
        println!("\nSecond refresh failed: {e}");
    }
    println!("Status: {}", converter.currency().status().name());
    println!(
        "  100 USD -> EUR still: {}",
        converter.convert_text(Domain::Currency, "100", "USD", "EUR")?
    );

    Ok(())
}
