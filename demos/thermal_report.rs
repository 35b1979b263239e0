use std::io::{self, BufRead};

use sysfs_thermal::prelude::*;
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("usage: thermal_report [flat|table|detailed|json] [--root PATH] [--refresh COUNT]");
    std::process::exit(2);
}

fn render(reader: &SensorReader, mode: Option<ReportMode>) -> Result<String> {
    match mode {
        Some(mode) => reader.refresh(mode),
        None => Reporter::to_json(&reader.poll()?).map(|json| json + "\n"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // `None` selects JSON output.
    let mut mode = Some(ReportMode::Table);
    let mut config = ThermalConfig::default();
    let mut refreshes = 0usize;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--root" => config.sensor_root = args.next().unwrap_or_else(|| usage()).into(),
            "--refresh" => {
                refreshes = args.next().and_then(|n| n.parse().ok()).unwrap_or_else(|| usage());
            },
            "json" => mode = None,
            other => mode = Some(other.parse().unwrap_or_else(|_| usage())),
        }
    }

    let reader = match SensorReader::with_config(config) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        },
    };

    println!("Thermal zones under {}", reader.config().sensor_root.display());
    println!("------------------------");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    for pass in 0..=refreshes {
        if pass > 0 {
            println!("\nPress Enter to refresh ({} left)", refreshes - pass + 1);
            if lines.next().is_none() {
                break;
            }
        }

        match render(&reader, mode) {
            Ok(report) => print!("{}", report),
            Err(e) if e.is_unavailable() => println!("No thermal data: {}", e),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            },
        }
    }
}
