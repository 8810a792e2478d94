// src/core/analysis/peaks.rs
//
// Adaptive-threshold peak picking over an energy series.

use log::debug;

use super::spectral::EnergySeries;
use crate::core::dsp::stats::{mean, std_dev};

/// Finds candidate beep instants in an energy series.
///
/// Threshold is `mean + sensitivity * stddev` (population stddev). A
/// frame is accepted iff it is a strict local maximum relative to its
/// immediate neighbors, its magnitude strictly exceeds the threshold,
/// and it lies at least `min_peak_distance` frames after the previously
/// accepted peak (forward greedy scan). The spacing rule is explicit
/// configuration; `min_peak_distance = 1` imposes nothing beyond the
/// local-maximum rule.
pub struct PeakDetector {
    sensitivity: f64,
    min_peak_distance: usize,
}

impl PeakDetector {
    pub fn new(sensitivity: f64, min_peak_distance: usize) -> Self {
        Self {
            sensitivity,
            min_peak_distance,
        }
    }

    /// Candidate times in seconds, strictly increasing.
    ///
    /// A series of length <= 2 has no interior frame and yields no
    /// candidates. A flat series has `stddev == 0`, so the threshold
    /// equals the mean and nothing strictly exceeds it.
    pub fn detect(&self, series: &EnergySeries) -> Vec<f64> {
        let indices = self.peak_indices(&series.values);
        debug!("{} candidate peaks above threshold", indices.len());
        indices.into_iter().map(|i| series.frame_time(i)).collect()
    }

    fn peak_indices(&self, values: &[f32]) -> Vec<usize> {
        if values.len() < 3 {
            return Vec::new();
        }

        let threshold = mean(values) + self.sensitivity as f32 * std_dev(values);
        let mut peaks = Vec::new();
        let mut last_accepted: Option<usize> = None;

        for i in 1..values.len() - 1 {
            if !(values[i - 1] < values[i] && values[i] > values[i + 1]) {
                continue;
            }
            if values[i] <= threshold {
                continue;
            }
            if let Some(last) = last_accepted {
                if i - last < self.min_peak_distance {
                    continue;
                }
            }
            peaks.push(i);
            last_accepted = Some(i);
        }

        peaks
    }
}
