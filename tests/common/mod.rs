use assert_cmd::cargo_bin;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

/// Writes a session CSV with the given `step, value` rows.
pub fn session_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "step, value").unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

/// Replays a session and returns the transcript, one JSON value per line.
pub fn replay(file: &NamedTempFile, extra_args: &[&str]) -> Vec<serde_json::Value> {
    let output = Command::new(cargo_bin!("bancontact-checkout"))
        .arg(file.path())
        .args(extra_args)
        .output()
        .unwrap();
    assert!(output.status.success(), "replay failed: {:?}", output);

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

pub fn entries_of_kind<'a>(
    transcript: &'a [serde_json::Value],
    kind: &str,
) -> Vec<&'a serde_json::Value> {
    transcript
        .iter()
        .filter(|entry| entry["kind"] == kind)
        .collect()
}
