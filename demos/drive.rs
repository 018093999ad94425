//! Strategy demo: the same `drive` call, different behavior per vehicle.
//!
//! ```text
//! cargo run --example drive
//! cargo run --example drive -- normal sport
//! ```

use clap::Parser;
use patterncraft::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "drive", about = "Drive vehicles built with different strategies")]
struct Args {
    /// Strategy names to drive with (default: a sports vehicle, then a good vehicle)
    strategies: Vec<String>,

    /// Log each drive
    #[arg(short, long)]
    verbose: bool,

    /// Log everything
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    let mut config = DemoConfig::new().with_name("drive");
    if args.verbose {
        config = config.verbose();
    }
    if args.debug {
        config = config.debug();
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();
    let _demo = tracing::info_span!("demo", name = config.name()).entered();

    let vehicles = if args.strategies.is_empty() {
        vec![
            Vehicle::of_kind(VehicleKind::Sports),
            Vehicle::of_kind(VehicleKind::Good),
        ]
    } else {
        let (fleet, unknown) = default_strategies().vehicles(&args.strategies);
        for err in &unknown {
            tracing::error!("{}, skipping", err);
        }
        fleet
    };

    for vehicle in &vehicles {
        println!("{}", vehicle.drive());
    }
}
