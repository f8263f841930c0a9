use keyevolve::config::DEFAULT_ALPHABET;
use keyevolve::frequency::FrequencyTable;
use keyevolve::geometry::KeyboardGeometry;
use keyevolve::scorer;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const QWERTY: &str = "qwertyuiopasdfghjkl;zxcvbnm,./";

struct TestContext {
    _dir: TempDir,
    freq_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let freq_path = dir.path().join("freqs.tsv");

        let mut f = File::create(&freq_path).unwrap();
        writeln!(f, "a\t100").unwrap();
        writeln!(f, "s\t50").unwrap();
        writeln!(f, "q\t30").unwrap();
        writeln!(f, "p\t10").unwrap();

        Self {
            _dir: dir,
            freq_path,
        }
    }
}

fn keyevolve(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_keyevolve"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn expected_total(layout: &str, freqs: &FrequencyTable) -> String {
    let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
    let layout = scorer::parse_layout(layout, &alphabet).unwrap();
    format!("{:.3}", scorer::score(&layout, &KeyboardGeometry::standard(), freqs))
}

#[test]
fn test_cli_score_default_tables() {
    let output = keyevolve(&["score", "--layout", QWERTY]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Layout: INPUT"));
    assert!(
        stdout.contains(&expected_total(QWERTY, &FrequencyTable::english())),
        "STDOUT:\n{}",
        stdout
    );
}

#[test]
fn test_cli_score_custom_frequencies() {
    let ctx = TestContext::new();
    let output = keyevolve(&[
        "score",
        "--layout",
        QWERTY,
        "--frequencies",
        ctx.freq_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    // a, s on the home row; q, p on pinkies.
    let freqs = FrequencyTable::load_from_file(&ctx.freq_path).unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&expected_total(QWERTY, &freqs)), "STDOUT:\n{}", stdout);
}

#[test]
fn test_cli_score_rejects_bad_layout() {
    let output = keyevolve(&["score", "--layout", "qwerty"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_search_execution() {
    let output = keyevolve(&[
        "search",
        "-p",
        "6",
        "-g",
        "4",
        "--seed",
        "7",
        "--generation-delay-ms",
        "0",
        "--poll-ms",
        "1",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Layout: OPTIMIZED"), "STDOUT:\n{}", stdout);
}

#[test]
fn test_cli_search_invalid_config() {
    let output = keyevolve(&["search", "-p", "1", "-g", "4"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_missing_keyboard_file() {
    let output = keyevolve(&["score", "--layout", QWERTY, "--keyboard", "/nonexistent/board.json"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_search_params_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    std::fs::write(
        &path,
        r#"{ "population_size": 4, "generations": 3, "generation_delay_ms": 0, "seed": 1 }"#,
    )
    .unwrap();

    let output = keyevolve(&["search", "--params-file", path.to_str().unwrap(), "--poll-ms", "1"]);
    assert!(output.status.success());
}
