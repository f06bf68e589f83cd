//! # Demo Seed
//!
//! Writes the demo cafe into the configured snapshot storage.
//!
//! ## Usage
//! ```bash
//! # JSON file in the platform data directory (default)
//! cargo run -p cafe-store --bin seed
//!
//! # SQLite database in a local directory
//! cargo run -p cafe-store --bin seed -- --storage sqlite --dir ./data
//!
//! # Overwrite an existing snapshot
//! cargo run -p cafe-store --bin seed -- --force
//! ```
//!
//! Options fall back to the `CAFE_*` environment variables.

use std::env;
use std::path::PathBuf;

use cafe_store::{init_tracing, CafeStore, SnapshotStorage, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let mut config = StoreConfig::from_env()?;
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--storage" | "-s" => {
                if i + 1 < args.len() {
                    config.backend = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    config.data_dir = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--key" | "-k" => {
                if i + 1 < args.len() {
                    config.storage_key = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Cafe Desk Demo Seed");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --storage <KIND>  memory | json | sqlite (default: json)");
                println!("  -d, --dir <PATH>      Data directory (default: platform data dir)");
                println!("  -k, --key <KEY>       Snapshot key (default: cafe-management-store)");
                println!("  -f, --force           Overwrite an existing snapshot");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    println!("🌱 Cafe Desk Demo Seed");
    println!("======================");
    println!("Storage:  {}", config.backend);
    println!("Data dir: {}", config.data_dir.display());
    println!("Key:      {}", config.storage_key);
    println!();

    let storage = config.open_storage().await?;
    println!("✓ Storage opened");

    if storage.get(&config.storage_key).await?.is_some() && !force {
        println!("⚠ A snapshot already exists under '{}'", config.storage_key);
        println!("  Skipping seed. Pass --force to overwrite it.");
        return Ok(());
    }

    let store = CafeStore::demo();
    store.save(&storage, &config.storage_key).await?;

    let analytics = store.analytics();
    println!("✓ Demo snapshot written");
    println!();
    println!("  Orders:     {} (counter {})", store.orders().len(), store.snapshot().order_counter);
    println!("  Tables:     {}", store.tables().len());
    println!("  Staff:      {}", store.staff().len());
    println!("  Menu items: {}", store.menu_items().len());
    println!("  Inventory:  {}", store.inventory().len());
    println!(
        "  Revenue:    {} over {} paid orders",
        store.format_price(analytics.total_revenue),
        analytics.total_orders
    );
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
