/*!
 * Command line tests for the wordcue binary
 */

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::Result;

use crate::common;

// Run the binary inside `dir` so no stray conf.json is picked up
fn run_wordcue(dir: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_wordcue"))
        .current_dir(dir)
        .args(args)
        .output()?)
}

#[test]
fn test_cli_withInputAndOutput_shouldConvert() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_subtitle(temp_dir.path(), "in.srt")?;

    let output = run_wordcue(temp_dir.path(), &["--input", "in.srt", "--output", "out.srt"])?;

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("out.srt"))?,
        common::SAMPLE_SRT_WORDS
    );

    Ok(())
}

#[test]
fn test_cli_withShortFlags_shouldConvert() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_subtitle(temp_dir.path(), "in.srt")?;

    let output = run_wordcue(temp_dir.path(), &["-i", "in.srt", "-o", "out.srt"])?;

    assert!(output.status.success());
    assert!(temp_dir.path().join("out.srt").exists());

    Ok(())
}

#[test]
fn test_cli_withMissingOutput_shouldPrintUsage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_subtitle(temp_dir.path(), "in.srt")?;

    let output = run_wordcue(temp_dir.path(), &["--input", "in.srt"])?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--output"));

    Ok(())
}

#[test]
fn test_cli_withUnknownFlag_shouldPrintUsageToStdout() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = run_wordcue(temp_dir.path(), &["--bogus"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));

    Ok(())
}

#[test]
fn test_cli_withMissingInputFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = run_wordcue(temp_dir.path(), &["-i", "absent.srt", "-o", "out.srt"])?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("absent.srt"));
    assert!(!temp_dir.path().join("out.srt").exists());

    Ok(())
}

#[test]
fn test_cli_withEmptyEntriesFail_shouldOverrideConfig() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(
        temp_dir.path(),
        "in.srt",
        &common::build_srt(&[(0, 1000, "ok"), (1000, 2000, "")]),
    )?;
    common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"splitting": {"empty_entries": "skip"}}"#,
    )?;

    let skipped = run_wordcue(temp_dir.path(), &["-i", "in.srt", "-o", "a.srt"])?;
    let strict = run_wordcue(
        temp_dir.path(),
        &["-i", "in.srt", "-o", "b.srt", "--empty-entries", "fail"],
    )?;

    assert!(skipped.status.success());
    assert!(!strict.status.success());
    assert!(String::from_utf8_lossy(&strict.stdout).contains("no words"));

    Ok(())
}

#[test]
fn test_cli_withInvalidConfig_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_subtitle(temp_dir.path(), "in.srt")?;
    common::create_test_file(temp_dir.path(), "custom.json", "{ nope")?;

    let output = run_wordcue(
        temp_dir.path(),
        &["-i", "in.srt", "-o", "out.srt", "--config", "custom.json"],
    )?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration error"));

    Ok(())
}

/// The logger filters on the active level, not a fixed threshold
#[test]
fn test_cli_withLogLevel_shouldFilterStderr() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_subtitle(temp_dir.path(), "in.srt")?;

    let quiet = run_wordcue(temp_dir.path(), &["-i", "in.srt", "-o", "a.srt", "-l", "error"])?;
    let verbose = run_wordcue(temp_dir.path(), &["-i", "in.srt", "-o", "b.srt", "-l", "debug"])?;

    assert!(quiet.status.success());
    assert!(verbose.status.success());
    assert!(quiet.stderr.is_empty());
    let verbose_log = String::from_utf8_lossy(&verbose.stderr);
    assert!(verbose_log.contains("Empty entry policy"));
    assert!(verbose_log.contains("cues"));

    Ok(())
}

#[test]
fn test_cli_completions_shouldPrintScript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = run_wordcue(temp_dir.path(), &["completions", "bash"])?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("wordcue"));

    Ok(())
}
