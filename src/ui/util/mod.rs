pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if !is_playing {
        return "•";
    }

    const FRAME_STEP_MS: u128 = 120;
    const FRAMES: [&str; 4] = ["▁", "▃", "▅", "▃"];

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    FRAMES[(now / FRAME_STEP_MS) as usize % FRAMES.len()]
}
