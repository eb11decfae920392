use super::snapshot::BackupSnapshot;

const BYTES_PER_GB: i64 = 1_000_000_000;

/// Percentage label for the progress bar: `"NN.NN%"`, or `"--%"` while no
/// backup is running. The raw fraction is rounded half-up to 4 places before
/// scaling, then the scaled value half-up to 2, matching how the widget has
/// always displayed it.
pub fn formatted_percentage(snapshot: &BackupSnapshot) -> String {
    if !snapshot.is_running {
        return "--%".to_string();
    }
    let scaled = round_half_up(snapshot.percentage, 4) * 100.0;
    format!("{:.2}%", round_half_up(scaled, 2))
}

/// Whole gigabytes, truncated, e.g. `2_500_000_000` renders as `"2GB"`.
pub fn gigabytes(bytes: i64) -> String {
    format!("{}GB", bytes / BYTES_PER_GB)
}

pub fn minutes_remaining(secs: i64) -> i64 {
    secs / 60
}

/// Files counter line, e.g. `"42 (+5) files copied (of 100)"`.
pub fn files_line(snapshot: &BackupSnapshot) -> String {
    format!(
        "{} (+{}) files copied (of {})",
        snapshot.files_copied, snapshot.files_copied_delta, snapshot.total_files
    )
}

fn round_half_up(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    if value < 0.0 {
        -((-value * factor + 0.5).floor()) / factor
    } else {
        (value * factor + 0.5).floor() / factor
    }
}
