// src/cli/output.rs
//
// Timestamp formatting and report output (plain text and JSON).

use serde::Serialize;

/// Detections for one processed video file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub filename: String,
    pub timestamps: Vec<String>,
}

/// Format a non-negative seconds offset as `HH:MM:SS[.ffffff]`.
///
/// Hours, minutes and seconds are always two digits. The fractional
/// part is rounded to the nearest microsecond (carrying into seconds
/// on overflow) and appended as six digits only when non-zero.
pub fn format_timestamp(seconds: f64) -> String {
    let total_micros = (seconds.max(0.0) * 1_000_000.0).round() as u64;
    let micros = total_micros % 1_000_000;
    let total_secs = total_micros / 1_000_000;

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if micros == 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}:{:02}.{:06}", hours, minutes, secs, micros)
    }
}

/// One report line: `<filename> - <ts1>, <ts2>, ...`
///
/// Files with zero detections produce no line; the caller skips them.
pub fn format_report_line(report: &FileReport) -> String {
    format!("{} - {}", report.filename, report.timestamps.join(", "))
}

/// Render all reports as a JSON array.
pub fn format_json(reports: &[FileReport]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_seconds_have_no_fraction() {
        assert_eq!(format_timestamp(5.0), "00:00:05");
        assert_eq!(format_timestamp(0.0), "00:00:00");
    }

    #[test]
    fn fractional_seconds_use_six_digits() {
        assert_eq!(format_timestamp(3661.5), "01:01:01.500000");
        assert_eq!(format_timestamp(0.25), "00:00:00.250000");
    }

    #[test]
    fn fraction_rounds_to_nearest_microsecond() {
        assert_eq!(format_timestamp(1.0000004), "00:00:01");
        assert_eq!(format_timestamp(1.0000006), "00:00:01.000001");
        // Rounding carries into the integer second.
        assert_eq!(format_timestamp(59.9999999), "00:01:00");
    }

    #[test]
    fn hour_field_is_always_two_digits() {
        for v in [0.0, 5.0, 59.9, 3600.0, 3661.5, 86399.0] {
            let formatted = format_timestamp(v);
            let hours = formatted.split(':').next().unwrap();
            assert_eq!(hours.len(), 2, "bad hour field in {formatted}");
        }
    }

    #[test]
    fn report_line_joins_timestamps() {
        let report = FileReport {
            filename: "clip.mp4".to_string(),
            timestamps: vec!["00:00:05".to_string(), "00:01:10.500000".to_string()],
        };
        assert_eq!(
            format_report_line(&report),
            "clip.mp4 - 00:00:05, 00:01:10.500000"
        );
    }

    #[test]
    fn json_output_is_an_array() {
        let reports = vec![FileReport {
            filename: "clip.mp4".to_string(),
            timestamps: vec!["00:00:05".to_string()],
        }];
        let json = format_json(&reports);
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains("\"clip.mp4\""));
    }
}
