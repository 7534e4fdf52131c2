/*

    Probe a set of regions from the command line: print the
    bounding volume, what each ray picks and how each point
    is classified.

    @date: Nov, 2025
    @author: Bartu

*/

use std::env;
use tracing::{info, warn, error, debug};

use region3::json_parser::parse_probe_json;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: &String = if args.len() == 1 {
        warn!("No arguments were provided, setting default probe path...");
        &String::from("./inputs/probe.json")
    } else if args.len() == 2 {
        &args[1]
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading probe from {}...", json_path);
    let root = parse_probe_json(json_path).map_err(|e| {
        error!("Failed to load probe: {}", e);
        e
    })?;
    debug!("Probe is loaded successfully.\n {:#?}", root);

    let report = root.probe.report();
    report.log(root.probe.precision);

    info!("Finished execution.");
    Ok(())
}
