use std::time::Duration;

pub fn percent(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    let value = elapsed.as_secs_f64() / duration.as_secs_f64() * 100.0;
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub fn position_at(percent: f64, duration: Duration) -> Duration {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    duration.mul_f64(percent / 100.0)
}

// A zero duration means unknown and leaves the upper bound open.
pub fn offset(current: Duration, delta_secs: i64, duration: Duration) -> Duration {
    let delta = Duration::from_secs(delta_secs.unsigned_abs());
    let moved = if delta_secs >= 0 {
        current.saturating_add(delta)
    } else {
        current.saturating_sub(delta)
    };

    if duration.is_zero() {
        moved
    } else {
        moved.min(duration)
    }
}

pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

pub fn format_time(time: Duration) -> String {
    let total_seconds = time.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}
