//! BeepMarkr - Locate double-beep event markers in video footage
//!
//! Recording devices embed an acoustic marker (two short 2020 Hz tone
//! bursts, repeated roughly two seconds later) in the audio track when
//! an event occurs. This crate finds those markers in long recordings
//! and reports the clock time of each occurrence, so nobody has to
//! scrub hours of footage by hand.
//!
//! ## Pipeline
//!
//! 1. `SpectralAnalyzer` - STFT energy over time at the marker frequency
//! 2. `PeakDetector` - adaptive-threshold local maxima -> candidate beeps
//! 3. `BeepPairMatcher` - stage 1 pairs two close beeps, stage 2 requires
//!    the pair to repeat at the expected cadence
//! 4. `format_timestamp` - seconds offset -> `HH:MM:SS[.ffffff]`
//!
//! Every stage is pure and consumes the complete output of the previous
//! one; an empty result at any stage is a valid outcome, not an error.
//!
//! ## Module Structure
//!
//! - `core` - extraction, decoding, DSP and the detection pipeline
//! - `cli` - report and timestamp formatting
//! - `config` - detection parameters and validation
//! - `testgen` - synthetic marker signals for tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use beepmarkr::config::DetectorConfig;
//! use beepmarkr::core::BeepDetector;
//!
//! let detector = BeepDetector::new(DetectorConfig::default())?;
//! let times = detector.detect(&samples, sample_rate);
//! ```

// Core extraction, decoding and detection
pub mod core;

// Report formatting
pub mod cli;

// Configuration
pub mod config;

// Synthetic test signals
pub mod testgen;

// Re-export commonly used types at crate root for convenience
pub use cli::{format_json, format_report_line, format_timestamp, FileReport};
pub use config::{ConfigError, DetectorConfig};
pub use core::{
    decode_audio, extract_audio, extract_mono, is_video_file, AudioData, BeepDetector,
    BeepPairMatcher, EnergySeries, ExtractedAudio, PeakDetector, SpectralAnalyzer,
};
