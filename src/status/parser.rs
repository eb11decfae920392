use super::snapshot::BackupSnapshot;

/// Sentinel for a numeric field that was missing or failed to parse; the
/// view renders it as-is.
const SENTINEL: i64 = -1;

/// Parse raw `tmutil status` output into a snapshot.
///
/// The tool prints a plist-flavored block of `Key = value;` lines. Fewer
/// than 7 non-empty lines means no backup is running and the idle snapshot
/// is returned. Otherwise each line is scanned as a key/value pair (split on
/// the first `=`, value stripped of quotes and the trailing semicolon), so a
/// reordered dump still parses. A field that is missing or non-numeric gets
/// the -1 sentinel; it never fails the snapshot as a whole.
pub fn parse_status(raw: &str, previous: &BackupSnapshot) -> BackupSnapshot {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 7 {
        return BackupSnapshot::default();
    }

    let mut destination_id = None;
    let mut percent = None;
    let mut time_remaining = None;
    let mut bytes = None;
    let mut files = None;
    let mut total_bytes = None;
    let mut total_files = None;

    for line in &lines {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_end_matches(';').trim().trim_matches('"');
        match key.trim() {
            "DestinationID" => destination_id = Some(value),
            "Percent" => percent = Some(value),
            "TimeRemaining" => time_remaining = Some(value),
            "bytes" => bytes = Some(value),
            "files" => files = Some(value),
            "totalBytes" => total_bytes = Some(value),
            "totalFiles" => total_files = Some(value),
            _ => {}
        }
    }

    let files_copied = int_or_sentinel(files);
    let previous_files = if previous.is_running {
        previous.files_copied
    } else {
        0
    };

    BackupSnapshot {
        is_running: true,
        percentage: percent.and_then(|v| v.parse().ok()).unwrap_or(-1.0),
        time_remaining_secs: int_or_sentinel(time_remaining),
        destination_id: destination_id.unwrap_or("None").to_string(),
        files_copied,
        total_files: int_or_sentinel(total_files),
        files_copied_delta: files_copied - previous_files,
        bytes_copied: int_or_sentinel(bytes),
        total_bytes: int_or_sentinel(total_bytes),
    }
}

fn int_or_sentinel(value: Option<&str>) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNNING_SAMPLE: &str = r#"Backup session status:
{
    BackupPhase = Copying;
    ClientID = "com.apple.backupd";
    DateOfStateChange = "2020-06-19 18:04:12 +0000";
    DestinationID = "ABC-123";
    DestinationMountPoint = "/Volumes/Backup";
    FirstBackup = 0;
    Percent = "0.4521";
    TimeRemaining = 120;
    Running = 1;
    Progress = {
        bytes = 500000000;
        files = 42;
        totalBytes = 1000000000;
        totalFiles = 100;
    };
}"#;

    const IDLE_SAMPLE: &str = "Backup session status:\n{\n    Running = 0;\n}";

    #[test]
    fn short_output_is_idle() {
        let snapshot = parse_status(IDLE_SAMPLE, &BackupSnapshot::default());
        assert_eq!(snapshot, BackupSnapshot::default());
        assert!(!snapshot.is_running);
    }

    #[test]
    fn well_formed_output_extracts_every_field() {
        let snapshot = parse_status(RUNNING_SAMPLE, &BackupSnapshot::default());
        assert!(snapshot.is_running);
        assert_eq!(snapshot.destination_id, "ABC-123");
        assert_eq!(snapshot.percentage, 0.4521);
        assert_eq!(snapshot.time_remaining_secs, 120);
        assert_eq!(snapshot.bytes_copied, 500_000_000);
        assert_eq!(snapshot.files_copied, 42);
        assert_eq!(snapshot.total_bytes, 1_000_000_000);
        assert_eq!(snapshot.total_files, 100);
    }

    #[test]
    fn reordered_keys_parse_the_same() {
        let mut lines: Vec<&str> = RUNNING_SAMPLE.lines().collect();
        lines.swap(5, 8); // DestinationID and Percent trade places
        let reordered = lines.join("\n");
        let snapshot = parse_status(&reordered, &BackupSnapshot::default());
        assert_eq!(snapshot.destination_id, "ABC-123");
        assert_eq!(snapshot.percentage, 0.4521);
    }

    #[test]
    fn unparseable_numeric_falls_back_to_sentinel() {
        let mangled = RUNNING_SAMPLE.replace("TimeRemaining = 120;", "TimeRemaining = soon;");
        let snapshot = parse_status(&mangled, &BackupSnapshot::default());
        assert!(snapshot.is_running);
        assert_eq!(snapshot.time_remaining_secs, -1);
        // the rest of the snapshot is unaffected
        assert_eq!(snapshot.files_copied, 42);
    }

    #[test]
    fn missing_percent_falls_back_to_sentinel() {
        let mangled = RUNNING_SAMPLE.replace("Percent = \"0.4521\";", "Phase = Copying;");
        let snapshot = parse_status(&mangled, &BackupSnapshot::default());
        assert_eq!(snapshot.percentage, -1.0);
    }

    #[test]
    fn delta_is_counted_from_zero_without_a_running_predecessor() {
        let snapshot = parse_status(RUNNING_SAMPLE, &BackupSnapshot::default());
        assert_eq!(snapshot.files_copied_delta, 42);
    }

    #[test]
    fn delta_spans_consecutive_polls() {
        let first = parse_status(RUNNING_SAMPLE, &BackupSnapshot::default());
        let later = RUNNING_SAMPLE.replace("files = 42;", "files = 50;");
        let second = parse_status(&later, &first);
        assert_eq!(second.files_copied, 50);
        assert_eq!(second.files_copied_delta, 8);
    }

    #[test]
    fn parse_is_idempotent() {
        let previous = parse_status(RUNNING_SAMPLE, &BackupSnapshot::default());
        let a = parse_status(RUNNING_SAMPLE, &previous);
        let b = parse_status(RUNNING_SAMPLE, &previous);
        assert_eq!(a, b);
    }

    #[test]
    fn idle_output_after_a_running_snapshot_resets_everything() {
        let running = parse_status(RUNNING_SAMPLE, &BackupSnapshot::default());
        assert!(running.is_running);
        let idle = parse_status(IDLE_SAMPLE, &running);
        assert_eq!(idle, BackupSnapshot::default());
    }
}
