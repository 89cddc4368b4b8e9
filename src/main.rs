use clap::{Parser, Subcommand, ValueEnum};
use ronpr::{OrientedRect, RegionDetector, ResultMap, TextFilter};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ronpr")]
#[command(about = "Romanian number plate region detection and OCR text filtering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect plate candidate regions from contour boxes
    Detect {
        /// JSON file with the frame dimensions and the minimal-area boxes
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Classify OCR strings into dates and plate numbers
    Classify {
        /// Text file with one OCR string per line
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Also write a "<date> - <plate>" report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    /// JSON output with full details
    Json,
    /// Plain text, one line per result
    Text,
}

/// On-disk shape of the detection input: one vehicle crop's contour boxes.
#[derive(Deserialize)]
struct DetectInput {
    frame_height: u32,
    frame_width: u32,
    boxes: Vec<OrientedRect>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Detect { input, format } => {
            let raw = std::fs::read_to_string(&input)?;
            let detect_input: DetectInput = serde_json::from_str(&raw)?;

            let detector = RegionDetector::default();
            let output = detector.detect(
                &detect_input.boxes,
                detect_input.frame_height,
                detect_input.frame_width,
            );

            match format {
                OutputFormat::Json => {
                    let json_output = serde_json::json!({
                        "regions": output.regions,
                        "accepted": output.accepted,
                        "rejected": output.rejected,
                    });
                    println!("{}", serde_json::to_string_pretty(&json_output)?);
                }
                OutputFormat::Text => {
                    for region in &output.regions {
                        println!(
                            "{},{} {},{}",
                            region.top_left.x,
                            region.top_left.y,
                            region.bottom_right.x,
                            region.bottom_right.y
                        );
                    }
                }
            }
        }
        Command::Classify {
            input,
            format,
            report,
        } => {
            let raw = std::fs::read_to_string(&input)?;
            let lines: Vec<String> = raw.lines().map(|l| l.to_string()).collect();

            let filter = TextFilter::new();
            let (dates, plates) = filter.filter_dates_and_plates(&lines);

            if let Some(path) = report {
                let mut map = ResultMap::new();
                // The most recently detected date keys this batch's plates.
                map.record(dates.first().map(|s| s.as_str()), plates.iter().cloned());
                map.write_report(&path)?;
            }

            match format {
                OutputFormat::Json => {
                    let json_output = serde_json::json!({
                        "dates": dates,
                        "plates": plates,
                    });
                    println!("{}", serde_json::to_string_pretty(&json_output)?);
                }
                OutputFormat::Text => {
                    for date in &dates {
                        println!("date\t{}", date);
                    }
                    for plate in &plates {
                        println!("plate\t{}", plate);
                    }
                }
            }
        }
    }

    Ok(())
}
