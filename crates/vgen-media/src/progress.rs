//! Parsing of FFmpeg's `-progress` output.

/// Snapshot of an in-flight FFmpeg run.
#[derive(Debug, Clone, Default)]
pub struct FfmpegProgress {
    /// Output timestamp in milliseconds
    pub out_time_ms: i64,
    /// Frames written
    pub frame: u64,
    /// Encoding speed relative to realtime, e.g. 1.5
    pub speed: f64,
    /// Whether the end-of-stream marker was seen
    pub is_complete: bool,
}

/// Fold one `key=value` line into `current`.
///
/// Returns a snapshot on each `progress=` line, which FFmpeg emits once per
/// reporting block.
pub(crate) fn parse_progress_line(
    line: &str,
    current: &mut FfmpegProgress,
) -> Option<FfmpegProgress> {
    let (key, value) = line.trim().split_once('=')?;

    match key {
        // out_time_us is microseconds despite historical naming of out_time_ms
        "out_time_us" => {
            if let Ok(us) = value.parse::<i64>() {
                current.out_time_ms = us / 1000;
            }
        }
        "frame" => {
            if let Ok(frame) = value.parse() {
                current.frame = frame;
            }
        }
        "speed" => {
            if let Some(speed) = value.strip_suffix('x').and_then(|s| s.parse().ok()) {
                current.speed = speed;
            }
        }
        "progress" => {
            if value == "end" {
                current.is_complete = true;
            }
            return Some(current.clone());
        }
        _ => {}
    }

    None
}
