// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use colorful::Colorful;
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use beepmarkr::cli::{format_json, format_report_line, format_timestamp, FileReport};
use beepmarkr::config::DetectorConfig;
use beepmarkr::core::{decode_audio, extract_audio, extract_mono, is_video_file, BeepDetector};

#[derive(Parser, Debug)]
#[command(name = "beepmarkr")]
#[command(about = "Detect double-beep event markers in all video files in a folder")]
struct Args {
    /// Folder containing video files
    folder: PathBuf,

    /// Output file where results will be saved
    output: PathBuf,

    /// Peak threshold multiplier on the energy standard deviation
    #[arg(short, long, default_value = "3.0")]
    sensitivity: f64,

    /// Write the report as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Quiet mode: only errors are logged
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.quiet, args.verbose);

    let config = DetectorConfig::default().with_sensitivity(args.sensitivity);
    let detector = BeepDetector::new(config).context("Invalid detection configuration")?;

    let video_files = collect_video_files(&args.folder)?;
    if video_files.is_empty() {
        println!("{}", "No video files found!".red());
        return Ok(());
    }

    println!("Found {} video file(s)\n", video_files.len());

    let mut reports = Vec::new();
    for file_path in video_files {
        let report = process_file(&file_path, &detector)?;
        if let Some(report) = report {
            reports.push(report);
        }
    }

    let contents = if args.json {
        format_json(&reports)
    } else {
        let mut lines: Vec<String> = reports.iter().map(format_report_line).collect();
        lines.push(String::new());
        lines.join("\n")
    };
    fs::write(&args.output, contents)
        .with_context(|| format!("Failed to write report: {}", args.output.display()))?;

    println!(
        "\n{} file(s) with markers, report written to {}",
        reports.len(),
        args.output.display()
    );
    Ok(())
}

/// Quiet wins over verbosity; otherwise -v raises the level from the
/// warn default. The log level never affects detection results.
fn init_logging(quiet: bool, verbosity: u8) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };
    env_logger::Builder::new().filter_level(level).init();
}

/// Collect video files directly inside the folder (non-recursive),
/// sorted by name so runs are reproducible.
fn collect_video_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| is_video_file(p))
        .collect();
    files.sort();
    Ok(files)
}

/// Extract, decode and scan one file. Extraction or decode failure is
/// fatal and aborts the batch; the per-file temporary WAV is removed
/// on every exit path when the extraction handle drops.
fn process_file(file_path: &Path, detector: &BeepDetector) -> Result<Option<FileReport>> {
    println!("Analyzing: {}", file_path.display().to_string().cyan());

    let extracted = extract_audio(file_path)?;
    let audio = decode_audio(extracted.path())?;
    let mono = extract_mono(&audio);

    let times = detector.detect(&mono, audio.sample_rate);
    if times.is_empty() {
        println!("  {}", "no markers".yellow());
        return Ok(None);
    }

    let timestamps: Vec<String> = times.iter().map(|&t| format_timestamp(t)).collect();
    println!("  {} {}", timestamps.len(), "marker(s) found".green());

    let filename = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string());

    Ok(Some(FileReport {
        filename,
        timestamps,
    }))
}
