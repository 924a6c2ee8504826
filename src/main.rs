//! Command-line interface for groundtrack
//!
//! Analyzes a directory of stored captures and writes the average
//! ground-track speed to the result artifact.

use groundtrack::{collect_images, report, track, GreatCircle, MissionConfig};
use std::{env, path::PathBuf, process};
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut image_dir = None;
    let mut result_path = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i]));
            }
            "--image-dir" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --image-dir requires a path");
                    process::exit(1);
                }
                image_dir = Some(PathBuf::from(&args[i]));
            }
            "--result" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --result requires a path");
                    process::exit(1);
                }
                result_path = Some(PathBuf::from(&args[i]));
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => match MissionConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => MissionConfig::default_iss(),
    };
    if let Some(dir) = image_dir {
        config.image_dir = dir;
    }
    if let Some(path) = result_path {
        config.result_path = path;
    }

    let images = match collect_images(&config.image_dir) {
        Ok(images) => images,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!(count = images.len(), dir = %config.image_dir.display(), "analyzing captures");

    let sphere = GreatCircle::new(config.orbit.effective_radius_km);
    let estimate = track::average_ground_speed(&images, &sphere);
    info!(
        pairs_used = estimate.pairs_used,
        pairs_skipped = estimate.pairs_skipped,
        "aggregation finished"
    );

    if let Err(e) = report::write_result(&config.result_path, &estimate) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    print!(
        "Average speed: {}",
        report::format_average_speed(estimate.average_kmps)
    );
}

fn print_help(program: &str) {
    println!("Usage: {} [OPTIONS]", program);
    println!();
    println!("Estimate average ground-track speed from geotagged captures.");
    println!();
    println!("Options:");
    println!("  --config <path>      Mission configuration JSON (default: ISS profile)");
    println!("  --image-dir <path>   Directory of stored captures (default: current dir)");
    println!("  --result <path>      Result artifact path (default: result.txt)");
    println!("  --help, -h           Show this help");
}
