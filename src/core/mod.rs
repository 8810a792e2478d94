//! Core extraction, decoding and detection modules

pub mod analysis;
pub mod decoder;
pub mod detector;
pub mod dsp;
pub mod extract;

pub use analysis::{BeepPairMatcher, EnergySeries, PeakDetector, SpectralAnalyzer};
pub use decoder::{decode_audio, extract_mono, AudioData};
pub use detector::BeepDetector;
pub use extract::{extract_audio, is_video_file, ExtractedAudio};
