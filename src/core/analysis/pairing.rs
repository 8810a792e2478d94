// src/core/analysis/pairing.rs
//
// Two-stage temporal correlator: candidate beeps -> beep pairs ->
// validated repetitions. No state persists across calls.

use log::debug;

/// Matches candidate beep times into the device's double-beep pattern.
///
/// Stage 1 groups two close candidates into a pair event; stage 2
/// requires two consecutive pair events at the expected repeat cadence,
/// which suppresses single double-beep-shaped noise bursts. Each stage
/// is a single forward scan over adjacent elements and produces a new
/// list without mutating its input, so stage-2 output is a subsequence
/// of stage-1 output, which is a subsequence of the candidate list.
pub struct BeepPairMatcher {
    intra_interval: f64,
    intra_tolerance: f64,
    pair_interval_low: f64,
    pair_interval_high: f64,
}

impl BeepPairMatcher {
    pub fn new(
        intra_interval: f64,
        intra_tolerance: f64,
        pair_interval_low: f64,
        pair_interval_high: f64,
    ) -> Self {
        Self {
            intra_interval,
            intra_tolerance,
            pair_interval_low,
            pair_interval_high,
        }
    }

    /// Stage 1: accept `t[i]` iff
    /// `|t[i+1] - t[i] - intra_interval| < intra_tolerance` (strict).
    ///
    /// Only immediate successors are examined, so three closely spaced
    /// candidates can each match against their neighbor; no
    /// deduplication is applied.
    pub fn match_pairs(&self, candidates: &[f64]) -> Vec<f64> {
        let pairs: Vec<f64> = candidates
            .windows(2)
            .filter(|w| (w[1] - w[0] - self.intra_interval).abs() < self.intra_tolerance)
            .map(|w| w[0])
            .collect();
        debug!("stage 1: {} pair events from {} candidates", pairs.len(), candidates.len());
        pairs
    }

    /// Stage 2: accept `p[i]` iff
    /// `pair_interval_low <= p[i+1] - p[i] <= pair_interval_high`
    /// (both bounds inclusive).
    pub fn validate_repetitions(&self, pair_events: &[f64]) -> Vec<f64> {
        let validated: Vec<f64> = pair_events
            .windows(2)
            .filter(|w| {
                let gap = w[1] - w[0];
                self.pair_interval_low <= gap && gap <= self.pair_interval_high
            })
            .map(|w| w[0])
            .collect();
        debug!(
            "stage 2: {} validated detections from {} pair events",
            validated.len(),
            pair_events.len()
        );
        validated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> BeepPairMatcher {
        BeepPairMatcher::new(0.165, 0.11, 1.6, 2.0)
    }

    #[test]
    fn empty_candidates_yield_empty_stages() {
        let m = matcher();
        assert!(m.match_pairs(&[]).is_empty());
        assert!(m.validate_repetitions(&[]).is_empty());
    }

    #[test]
    fn matched_pair_reports_first_member_time() {
        let pairs = matcher().match_pairs(&[1.0, 1.165]);
        assert_eq!(pairs, vec![1.0]);
    }

    #[test]
    fn stage_one_tolerance_boundary_is_exclusive() {
        // Exactly representable interval and tolerance so the boundary
        // comparison is exact: a gap of interval + tolerance sits on
        // the edge and is rejected by the strict inequality.
        let m = BeepPairMatcher::new(0.25, 0.125, 1.6, 2.0);
        assert!(m.match_pairs(&[0.0, 0.375]).is_empty());
        assert!(m.match_pairs(&[0.0, 0.125]).is_empty());
        // Just inside either edge: accepted.
        assert_eq!(m.match_pairs(&[0.0, 0.374]), vec![0.0]);
        assert_eq!(m.match_pairs(&[0.0, 0.126]), vec![0.0]);
    }

    #[test]
    fn stage_one_wide_tolerance_edges() {
        // Default 0.165 +/- 0.11 band, probed just inside and outside.
        let m = BeepPairMatcher::new(0.165, 0.11, 1.6, 2.0);
        assert_eq!(m.match_pairs(&[0.0, 0.27]), vec![0.0]);
        assert!(m.match_pairs(&[0.0, 0.29]).is_empty());
        assert_eq!(m.match_pairs(&[0.0, 0.06]), vec![0.0]);
        assert!(m.match_pairs(&[0.0, 0.05]).is_empty());
    }

    #[test]
    fn stage_one_narrow_tolerance_variant() {
        // The tight 0.02 s acceptance band, probed the same way.
        let m = BeepPairMatcher::new(0.165, 0.02, 1.6, 2.0);
        assert_eq!(m.match_pairs(&[0.0, 0.18]), vec![0.0]);
        assert!(m.match_pairs(&[0.0, 0.19]).is_empty());
        assert_eq!(m.match_pairs(&[0.0, 0.15]), vec![0.0]);
        assert!(m.match_pairs(&[0.0, 0.14]).is_empty());
    }

    #[test]
    fn overlapping_triples_each_match_their_successor() {
        // Three candidates spaced one interval apart: both adjacent
        // windows satisfy stage 1 independently.
        let pairs = matcher().match_pairs(&[0.0, 0.165, 0.330]);
        assert_eq!(pairs, vec![0.0, 0.165]);
    }

    #[test]
    fn stage_two_bounds_are_inclusive() {
        let m = matcher();
        assert_eq!(m.validate_repetitions(&[0.0, 1.6]), vec![0.0]);
        assert_eq!(m.validate_repetitions(&[0.0, 2.0]), vec![0.0]);
        assert!(m.validate_repetitions(&[0.0, 1.59]).is_empty());
        assert!(m.validate_repetitions(&[0.0, 2.01]).is_empty());
    }

    #[test]
    fn lone_pair_event_is_not_validated() {
        assert!(matcher().validate_repetitions(&[4.2]).is_empty());
    }

    #[test]
    fn validated_times_are_a_subsequence_of_pair_events() {
        let pair_events = vec![0.0, 1.8, 3.6, 10.0, 11.7];
        let validated = matcher().validate_repetitions(&pair_events);
        assert_eq!(validated, vec![0.0, 1.8, 10.0]);
        assert!(validated.iter().all(|t| pair_events.contains(t)));
        assert!(validated.windows(2).all(|w| w[0] < w[1]));
    }
}
