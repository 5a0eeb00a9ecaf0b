/*!
 * Common test utilities for the wordcue test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Two entries, one of them with a duration that does not divide evenly
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:03,000
hello world

2
00:00:04,000 --> 00:00:05,000
one two three
";

/// Expected output for `SAMPLE_SRT`
pub const SAMPLE_SRT_WORDS: &str = "1
00:00:01,000 --> 00:00:02,000
hello

2
00:00:02,000 --> 00:00:03,000
world

3
00:00:04,000 --> 00:00:04,333
one

4
00:00:04,333 --> 00:00:04,666
two

5
00:00:04,666 --> 00:00:04,999
three

";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates the sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SRT)
}

/// Builds an SRT document from (start_ms, end_ms, text) triples
pub fn build_srt(entries: &[(u64, u64, &str)]) -> String {
    let mut out = String::new();
    for (i, (start, end, text)) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            wordcue::Timecode::from_milliseconds(*start),
            wordcue::Timecode::from_milliseconds(*end),
            text
        ));
    }
    out
}
