use clap::Parser;
use fitstat_core::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitstat")]
#[command(about = "Workout statistics calculator", long_about = None)]
struct Cli {
    /// JSON packets file to process (defaults to the built-in sample batch)
    packets: Option<PathBuf>,

    /// Output format: text, json or csv
    #[arg(long)]
    format: Option<String>,

    /// Override config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    fitstat_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = match cli.format {
        Some(ref name) => name.parse::<ReportFormat>()?,
        None => config.report.format,
    };

    let packets = match cli.packets.or(config.input.packets_file) {
        Some(path) => load_packets(&path)?,
        None => {
            tracing::info!("No packets file given, processing built-in sample batch");
            sample_packets()
        }
    };

    // Decode and compute in input order. A bad packet is reported and
    // skipped; the rest of the batch still renders.
    let total = packets.len();
    let mut summaries = Vec::with_capacity(total);
    let mut failed = 0usize;

    for packet in packets {
        match read_packet(&packet.workout_type, &packet.data) {
            Ok(workout) => summaries.push(workout.summary()),
            Err(e) => {
                failed += 1;
                eprintln!("skipping '{}' packet: {}", packet.workout_type, e);
            }
        }
    }

    render(&summaries, format, io::stdout().lock())?;

    if failed > 0 {
        return Err(Error::Other(format!(
            "{} of {} packets could not be processed",
            failed, total
        )));
    }

    Ok(())
}
