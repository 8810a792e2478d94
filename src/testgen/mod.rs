// src/testgen/mod.rs
//
// Synthetic marker-signal generation for tests and fixtures. Builds
// the device's double-beep pattern in memory and can write it out as
// a WAV file for decode tests.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};

/// Beep duration used by the recording device, seconds.
pub const BEEP_DURATION: f64 = 0.032;
/// Onset-to-onset spacing of the two beeps in one pair, seconds.
pub const INTRA_INTERVAL: f64 = 0.165;
/// Marker tone frequency, Hz.
pub const BEEP_FREQUENCY: f64 = 2020.0;

/// A sine burst of the given frequency, duration and amplitude.
pub fn tone(frequency: f64, duration_secs: f64, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    let n = (duration_secs * sample_rate as f64).round() as usize;
    (0..n)
        .map(|i| {
            amplitude * (2.0 * PI * frequency * i as f64 / sample_rate as f64).sin() as f32
        })
        .collect()
}

/// Write a tone burst into `samples` starting at `onset_secs`.
pub fn place_burst(samples: &mut [f32], onset_secs: f64, sample_rate: u32) {
    let burst = tone(BEEP_FREQUENCY, BEEP_DURATION, sample_rate, 0.8);
    let start = (onset_secs * sample_rate as f64).round() as usize;
    for (i, &s) in burst.iter().enumerate() {
        if let Some(slot) = samples.get_mut(start + i) {
            *slot = s;
        }
    }
}

/// Write one double-beep (two bursts `INTRA_INTERVAL` apart) starting
/// at `onset_secs`.
pub fn place_double_beep(samples: &mut [f32], onset_secs: f64, sample_rate: u32) {
    place_burst(samples, onset_secs, sample_rate);
    place_burst(samples, onset_secs + INTRA_INTERVAL, sample_rate);
}

/// A full marker: double-beep at `lead_secs`, a second double-beep
/// `cadence_secs` later, then a second of trailing silence.
pub fn double_beep_signal(sample_rate: u32, lead_secs: f64, cadence_secs: f64) -> Vec<f32> {
    let total = lead_secs + cadence_secs + INTRA_INTERVAL + BEEP_DURATION + 1.0;
    let mut samples = vec![0.0f32; (total * sample_rate as f64).ceil() as usize];
    place_double_beep(&mut samples, lead_secs, sample_rate);
    place_double_beep(&mut samples, lead_secs + cadence_secs, sample_rate);
    samples
}

/// Write samples to a 16-bit mono WAV file.
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;
    for &s in samples {
        let clamped = s.clamp(-1.0, 1.0);
        writer.write_sample((clamped * i16::MAX as f32) as i16)?;
    }
    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_has_expected_length_and_range() {
        let sr = 48000;
        let t = tone(2020.0, 0.032, sr, 0.8);
        assert_eq!(t.len(), (0.032 * sr as f64).round() as usize);
        assert!(t.iter().all(|&s| s.abs() <= 0.8 + 1e-6));
    }

    #[test]
    fn double_beep_signal_is_silent_outside_bursts() {
        let sr = 48000;
        let samples = double_beep_signal(sr, 1.0, 1.8);
        // Half a second in: before the first burst.
        assert_eq!(samples[(0.5 * sr as f64) as usize], 0.0);
        // Inside the first burst.
        let inside = (1.01 * sr as f64) as usize;
        assert!(samples[inside..inside + 100].iter().any(|&s| s != 0.0));
    }
}
