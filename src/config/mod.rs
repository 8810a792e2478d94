// src/config/mod.rs
//
// Detection configuration with up-front validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by [`DetectorConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("target frequency must be finite and positive, got {0}")]
    InvalidTargetFrequency(f64),
    #[error("fft window size must be non-zero")]
    ZeroWindowSize,
    #[error("hop length must be non-zero")]
    ZeroHopLength,
    #[error("hop length {hop} exceeds fft window size {window}")]
    HopExceedsWindow { hop: usize, window: usize },
    #[error("sensitivity must be non-negative, got {0}")]
    NegativeSensitivity(f64),
    #[error("minimum peak distance must be at least 1 frame")]
    ZeroPeakDistance,
    #[error("intra-pair interval must be positive, got {0}")]
    InvalidIntraInterval(f64),
    #[error("intra-pair tolerance must be non-negative, got {0}")]
    NegativeIntraTolerance(f64),
    #[error("pair interval window is malformed: low {low} > high {high}")]
    MalformedPairWindow { low: f64, high: f64 },
    #[error("pair interval low bound must be non-negative, got {0}")]
    NegativePairIntervalLow(f64),
}

/// All tunables for one detection run.
///
/// A config is validated once, before any signal processing, so the
/// pipeline stages can assume well-formed parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Marker tone frequency in Hz.
    pub target_frequency: f64,
    /// STFT window size in samples.
    pub fft_window_size: usize,
    /// Stride between analysis frames, in samples.
    pub hop_length: usize,
    /// Multiplier on the energy-series standard deviation; the peak
    /// threshold is `mean + sensitivity * stddev`.
    pub sensitivity: f64,
    /// Minimum spacing, in frames, between accepted peaks. 1 means no
    /// constraint beyond the strict local-maximum rule.
    pub min_peak_distance: usize,
    /// Nominal spacing between the two tones of one beep-pair, seconds.
    pub intra_interval: f64,
    /// Acceptance half-width around `intra_interval`, seconds.
    pub intra_tolerance: f64,
    /// Lower bound (inclusive) on the spacing between repeated pairs.
    pub pair_interval_low: f64,
    /// Upper bound (inclusive) on the spacing between repeated pairs.
    pub pair_interval_high: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            target_frequency: 2020.0,
            fft_window_size: 2048,
            hop_length: 512,
            sensitivity: 1.0,
            min_peak_distance: 1,
            intra_interval: 0.165,
            intra_tolerance: 0.11,
            pair_interval_low: 1.6,
            pair_interval_high: 2.0,
        }
    }
}

impl DetectorConfig {
    /// Check every invariant the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_frequency.is_finite() || self.target_frequency <= 0.0 {
            return Err(ConfigError::InvalidTargetFrequency(self.target_frequency));
        }
        if self.fft_window_size == 0 {
            return Err(ConfigError::ZeroWindowSize);
        }
        if self.hop_length == 0 {
            return Err(ConfigError::ZeroHopLength);
        }
        if self.hop_length > self.fft_window_size {
            return Err(ConfigError::HopExceedsWindow {
                hop: self.hop_length,
                window: self.fft_window_size,
            });
        }
        if !self.sensitivity.is_finite() || self.sensitivity < 0.0 {
            return Err(ConfigError::NegativeSensitivity(self.sensitivity));
        }
        if self.min_peak_distance == 0 {
            return Err(ConfigError::ZeroPeakDistance);
        }
        if !self.intra_interval.is_finite() || self.intra_interval <= 0.0 {
            return Err(ConfigError::InvalidIntraInterval(self.intra_interval));
        }
        if !self.intra_tolerance.is_finite() || self.intra_tolerance < 0.0 {
            return Err(ConfigError::NegativeIntraTolerance(self.intra_tolerance));
        }
        if self.pair_interval_low < 0.0 {
            return Err(ConfigError::NegativePairIntervalLow(self.pair_interval_low));
        }
        if self.pair_interval_low > self.pair_interval_high {
            return Err(ConfigError::MalformedPairWindow {
                low: self.pair_interval_low,
                high: self.pair_interval_high,
            });
        }
        Ok(())
    }

    /// Builder-style override for the sensitivity knob.
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }
}
