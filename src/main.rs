//! ChemSpider conversion demo
//!
//! Runs each supported conversion once against the configured service and
//! prints the results.

use chemspider_convert::core::config::Config;
use chemspider_convert::core::logging::init_logging;
use chemspider_convert::{Conversion, StructureConverter};
use tracing::{error, info};

/// Fixed demonstration inputs, one per conversion direction
const DEMO_INPUTS: [(Conversion, &str); 4] = [
    (Conversion::SmilesToInchi, "C(C(=O)O)N"),
    (
        Conversion::InchiToInchiKey,
        "InChI=1S/C4H10O/c1-3-4(2)5/h4-5H,3H2,1-2H3",
    ),
    (
        Conversion::InchiToSmiles,
        "InChI=1S/C4H10O/c1-3-4(2)5/h4-5H,3H2,1-2H3",
    ),
    (Conversion::InchiKeyToInchi, "OTMSDBZUPAUEDD-UHFFFAOYSA-N"),
];

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);

    let converter = match StructureConverter::from_config(&config) {
        Ok(converter) => converter,
        Err(e) => {
            error!("Failed to create converter: {}", e);
            std::process::exit(1);
        }
    };

    match converter.base_url() {
        Some(base_url) => info!("Using service at {}", base_url),
        None => info!("Using published ChemSpider endpoints"),
    }

    for (conversion, input) in DEMO_INPUTS {
        match converter.convert(conversion, input).await {
            Ok(value) => println!("{}: {}", conversion.target(), value),
            Err(e) => {
                error!(%conversion, "Conversion failed: {}", e);
                println!("{} error occurred: {}", conversion, e);
            }
        }
    }
}

/// Print help message
fn print_help() {
    println!("ChemSpider structure converter demo");
    println!();
    println!("Usage: chemspider-convert [OPTIONS]");
    println!();
    println!("Runs SMILES->InChI, InChI->InChIKey, InChI->SMILES and InChIKey->InChI");
    println!("once each on fixed example inputs.");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables:");
    println!("  CONFIG_PATH - TOML configuration file (default: config.toml, optional)");
    println!("  RUST_LOG    - Overrides the configured log level");
}
