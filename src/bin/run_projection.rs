// Small dev utility: run a full inventory projection over JSON snapshot files.
//
// Usage:
//   cargo run --bin run_projection -- components.json products.json forecasts.json
//
// The three files hold the collaborator-fetched inputs (inventory snapshot,
// product/BOM list, forecast list). Prints a per-health summary and the
// projection report as JSON to stdout.

use anyhow::{Context, Result};
use chrono::Utc;
use inventory_projection::{logging, Component, Forecast, Product, ProjectionEngine};
use std::collections::BTreeMap;
use std::fs;

fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path))
}

fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let components_path = args.next().unwrap_or_else(|| "components.json".to_string());
    let products_path = args.next().unwrap_or_else(|| "products.json".to_string());
    let forecasts_path = args.next().unwrap_or_else(|| "forecasts.json".to_string());

    let components: Vec<Component> = load_json(&components_path)?;
    let products: Vec<Product> = load_json(&products_path)?;
    let forecasts: Vec<Forecast> = load_json(&forecasts_path)?;

    let engine = ProjectionEngine::new();
    // The engine is a pure function; the report timestamp is supplied here.
    let projections = engine.run(&components, &products, &forecasts, Utc::now().naive_utc())?;

    let mut by_health: BTreeMap<String, usize> = BTreeMap::new();
    for p in &projections {
        *by_health.entry(p.overall_health.to_string()).or_insert(0) += 1;
    }
    for (health, count) in &by_health {
        eprintln!("{}: {}", health, count);
    }

    println!("{}", serde_json::to_string_pretty(&projections)?);
    Ok(())
}
