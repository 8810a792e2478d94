// src/core/extract.rs
//
// Audio track extraction from video containers via FFmpeg. Each
// extraction writes to its own uniquely named temporary WAV that is
// deleted when the handle drops, on success and failure alike.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::{Builder, NamedTempFile};

/// A decoded audio track on disk, scoped to one file's processing.
pub struct ExtractedAudio {
    file: NamedTempFile,
}

impl ExtractedAudio {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Extract the audio track of a video file to a temporary mono WAV.
///
/// Fails if the input is missing, has no audio track, or FFmpeg exits
/// non-zero; that failure is fatal to processing this file.
pub fn extract_audio(video_path: &Path) -> Result<ExtractedAudio> {
    if !video_path.exists() {
        bail!("Video file not found: {}", video_path.display());
    }

    let file = Builder::new()
        .prefix("beepmarkr-")
        .suffix(".wav")
        .tempfile()
        .context("Failed to create temporary WAV file")?;

    info!(
        "Extracting audio from {} to {}",
        video_path.display(),
        file.path().display()
    );

    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-y")
        .arg("-i")
        .arg(video_path)
        .arg("-vn") // No video
        .arg("-ac")
        .arg("1") // Mono
        .arg("-acodec")
        .arg("pcm_s16le")
        .arg(file.path());
    cmd.stdout(Stdio::null()).stderr(Stdio::null());

    debug!("Running FFmpeg: {:?}", cmd);

    let status = cmd
        .status()
        .context("Failed to spawn FFmpeg - is it installed and on PATH?")?;

    if !status.success() {
        bail!(
            "FFmpeg failed to extract audio from {} (exit code {:?})",
            video_path.display(),
            status.code()
        );
    }

    debug!("Audio extraction completed");
    Ok(ExtractedAudio { file })
}

/// Extension check for supported video containers (case-insensitive).
pub fn is_video_file(path: &Path) -> bool {
    const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mov", "mkv", "avi"];
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
