// src/core/detector.rs
//
// Full detection pipeline: waveform -> validated marker times.

use log::info;

use crate::config::{ConfigError, DetectorConfig};
use crate::core::analysis::{BeepPairMatcher, PeakDetector, SpectralAnalyzer};

/// Runs the whole pipeline over one loaded signal.
///
/// Construction validates the config, so every stage downstream can
/// assume well-formed parameters. The pipeline is pure: identical
/// input and config yield identical output, and nothing is shared
/// across calls.
pub struct BeepDetector {
    config: DetectorConfig,
}

impl BeepDetector {
    pub fn new(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect marker onsets in a mono signal. Returns the start times,
    /// in seconds, of each validated double-beep repetition, strictly
    /// increasing. An empty result is the expected outcome for clean
    /// audio; degenerate signals (empty, shorter than one analysis
    /// window, flat) also yield an empty result rather than an error.
    pub fn detect(&self, samples: &[f32], sample_rate: u32) -> Vec<f64> {
        let analyzer = SpectralAnalyzer::new(&self.config);
        let series = analyzer.analyze(samples, sample_rate);

        let peaks = PeakDetector::new(self.config.sensitivity, self.config.min_peak_distance);
        let candidates = peaks.detect(&series);
        info!("{} candidate beep locations", candidates.len());

        let matcher = BeepPairMatcher::new(
            self.config.intra_interval,
            self.config.intra_tolerance,
            self.config.pair_interval_low,
            self.config.pair_interval_high,
        );
        let pair_events = matcher.match_pairs(&candidates);
        let validated = matcher.validate_repetitions(&pair_events);
        info!("{} validated beep pairs", validated.len());
        validated
    }
}
