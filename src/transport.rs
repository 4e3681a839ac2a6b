//! Progress, seek and volume arithmetic for the custom control bar.

pub const DEFAULT_VOLUME: f64 = 1.0;

/// `m:ss`; anything that is not a finite, non-negative number reads `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn progress_percent(current: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / duration * 100.0).clamp(0.0, 100.0)
}

/// Seek position for a progress slider value. `None` until the duration is known.
pub fn seek_target(percent: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 || !percent.is_finite() {
        return None;
    }
    Some(percent.clamp(0.0, 100.0) / 100.0 * duration)
}

/// Volume slider (0–100) to element volume (0.0–1.0).
pub fn volume_from_slider(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    (value / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.9), "0:09");
        assert_eq!(format_time(61.2), "1:01");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn unknown_time_reads_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn progress_without_duration_is_zero() {
        assert_eq!(progress_percent(10.0, 0.0), 0.0);
        assert_eq!(progress_percent(10.0, f64::NAN), 0.0);
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
    }

    #[test]
    fn seek_clamps_percent() {
        assert_eq!(seek_target(50.0, 200.0), Some(100.0));
        assert_eq!(seek_target(150.0, 200.0), Some(200.0));
        assert_eq!(seek_target(10.0, 0.0), None);
    }

    #[test]
    fn volume_is_normalized() {
        assert_eq!(volume_from_slider(40.0), 0.4);
        assert_eq!(volume_from_slider(250.0), 1.0);
        assert_eq!(volume_from_slider(f64::NAN), DEFAULT_VOLUME);
    }
}
