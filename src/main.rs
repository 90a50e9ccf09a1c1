mod nmea;
mod track;

use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;

use crate::track::{TrackError, TrackPoint};

#[derive(Parser)]
#[command(name = "gpstrace")]
#[command(about = "GPS trajectory kinematics from NMEA logs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check which sentences of a log decode into position fixes
    Validate { log: String },
    /// Reconstruct the trajectory and derive distance, speed and acceleration
    Analyze {
        log: String,
        /// Write the derived track points to this path as JSON
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { log } => validate(&log),
        Commands::Analyze { log, output } => analyze(&log, output.as_deref()),
    }
}

fn validate(path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = nmea::scan_log(&content);
    println!(
        "{} position fixes decoded, {} sentences skipped",
        report.fixes.len(),
        report.rejected.len()
    );
    for rejected in &report.rejected {
        println!("  {}: {}", rejected.error, rejected.line);
    }
    ExitCode::SUCCESS
}

fn analyze(path: &str, output: Option<&str>) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = nmea::scan_log(&content);
    let points = match track::build_track(report.fixes) {
        Ok(points) => points,
        Err(TrackError::NoData) => {
            println!("No position fixes available, nothing to analyze");
            return ExitCode::SUCCESS;
        }
    };

    print_summary(&points, report.rejected.len());

    if let Some(path) = output {
        if let Err(e) = write_track(&points, path) {
            eprintln!("Error writing {}: {}", path, e);
            return ExitCode::FAILURE;
        }
        println!("Track written to {}", path);
    }

    ExitCode::SUCCESS
}

fn print_summary(points: &[TrackPoint], skipped: usize) {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return,
    };

    let elapsed = last.fix.timestamp.signed_duration_since(first.fix.timestamp);
    let peak_speed = points
        .iter()
        .map(|p| p.kinematics.speed_kmh)
        .fold(0.0, f64::max);

    println!("{} track points ({} sentences skipped)", points.len(), skipped);
    println!(
        "Total distance: {:.3} km",
        last.kinematics.cumulative_distance_km
    );
    println!("Peak speed: {:.1} km/h", peak_speed);
    println!("Elapsed time: {} s", elapsed.num_seconds());
}

fn write_track(points: &[TrackPoint], path: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(points)?;
    fs::write(path, json)
}
