use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use chat_archive::config::parse_gap;
use chat_archive::export::process_archive;
use chat_archive::{ExportConfig, init_logger};

#[derive(Parser, Debug)]
#[command(
    name = "chat-archive",
    about = "Split exported conversations into per-thread Markdown segments"
)]
struct Args {
    /// Path to conversations.json
    json_file: PathBuf,

    /// Output directory (defaults to $SEGMENTS_OUTPUT_DIR or `segments`).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Gap in minutes to start a new segment (defaults to $SEGMENT_GAP_MINUTES or 30).
    #[arg(long, value_parser = parse_gap_minutes)]
    gap_minutes: Option<f64>,

    /// Worker threads (defaults to $SEGMENT_JOBS or the CPU count).
    #[arg(long)]
    jobs: Option<usize>,

    /// Print the export statistics as JSON instead of a summary line.
    #[arg(long)]
    json: bool,
}

fn parse_gap_minutes(raw: &str) -> Result<f64, String> {
    parse_gap(raw).ok_or_else(|| format!("gap must be a non-negative number of minutes, got `{raw}`"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let args = Args::parse();

    let mut config = ExportConfig::from_env();
    if let Some(output) = args.output {
        config = config.with_output_dir(output);
    }
    if let Some(minutes) = args.gap_minutes {
        config = config.with_gap_minutes(minutes);
    }
    if let Some(jobs) = args.jobs {
        config = config.with_jobs(jobs);
    }

    log::info!(
        "exporting {} into {}",
        args.json_file.display(),
        config.output_dir.display()
    );

    let stats = match process_archive(&args.json_file, &config) {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("export failed: {}", e);
            writeln!(io::stderr(), "error: {e}")?;
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "Wrote {} segment files from {} threads in {} conversations to {}",
            stats.files,
            stats.threads,
            stats.conversations,
            config.output_dir.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_minutes_accepts_fractions() {
        assert_eq!(parse_gap_minutes("1.5"), Ok(1.5));
        assert_eq!(parse_gap_minutes("0"), Ok(0.0));
    }

    #[test]
    fn test_gap_minutes_rejects_negative_and_non_finite() {
        assert!(parse_gap_minutes("-1").is_err());
        assert!(parse_gap_minutes("inf").is_err());
        assert!(parse_gap_minutes("NaN").is_err());
    }

    #[test]
    fn test_gap_minutes_rejects_garbage() {
        let err = parse_gap_minutes("abc").unwrap_err();
        assert!(err.contains("`abc`"));
    }

    #[test]
    fn test_cli_rejects_negative_gap() {
        let result = Args::try_parse_from(["chat-archive", "in.json", "--gap-minutes", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_overrides() {
        let args = Args::try_parse_from([
            "chat-archive",
            "in.json",
            "--gap-minutes",
            "2.5",
            "--jobs",
            "3",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.json_file, PathBuf::from("in.json"));
        assert_eq!(args.gap_minutes, Some(2.5));
        assert_eq!(args.jobs, Some(3));
        assert!(args.json);
        assert_eq!(args.output, None);
    }
}
