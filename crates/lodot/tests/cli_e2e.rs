//! End-to-end tests: each test runs the real `lodot` binary in a scratch
//! directory with an isolated user config dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

const ESSAY: &str = "The cat sat on the mat. The cat was happy.\n\n\
The dog barked at the cat. Nobody liked the dog.";

fn lodot_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lodot"));
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("LODOT_NO_PROGRESS", "1")
        .env_remove("LODOT_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// Help and subcommands
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands_and_flags() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("modules"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--analyze"))
        .stdout(predicate::str::contains("--outfile"));
}

#[test]
fn modules_lists_every_analysis() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("read"))
        .stdout(predicate::str::contains("lexicon"))
        .stdout(predicate::str::contains("ngrams"));
}

#[test]
fn completions_generate_a_script() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lodot"));
}

#[test]
fn init_writes_template_once() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir).arg("init").assert().success();
    assert!(dir.path().join("lodot.toml").is_file());

    lodot_cmd(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    lodot_cmd(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn init_print_writes_nothing() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .args(["init", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[analyze]"));
    assert!(!dir.path().join("lodot.toml").exists());
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[test]
fn no_input_fails_with_hint() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: No input text or file provided.",
        ))
        .stderr(predicate::str::contains("Hints:"));
}

#[test]
fn unsupported_file_type_is_rejected() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("paper.rtf"), "{\\rtf1 Hi}").unwrap();
    lodot_cmd(&dir)
        .args(["--files", "paper.rtf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type: .rtf"))
        .stderr(predicate::str::contains(".docx"));
}

#[test]
fn corrupt_pdf_is_reported_with_its_path() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("paper.pdf"), "%PDF").unwrap();
    lodot_cmd(&dir)
        .args(["--files", "paper.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to extract text from paper.pdf"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .args(["--files", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read absent.txt"));
}

#[test]
fn file_format_without_outfile_fails() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .args([ESSAY, "--output", "md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Filename required for .md output"));
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[test]
fn default_run_streams_text_statistics() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .arg(ESSAY)
        .assert()
        .success()
        .stdout(predicate::str::contains("text:"))
        .stdout(predicate::str::contains("  word_count: 20"))
        .stdout(predicate::str::contains("  sentence_count: 4"));
}

#[test]
fn stdin_marker_reads_stdin() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .args(["-", "--analyze", "words"])
        .write_stdin(ESSAY)
        .assert()
        .success()
        .stdout(predicate::str::contains("words:"))
        .stdout(predicate::str::contains("word=the"));
}

#[test]
fn json_report_is_written_with_extension() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "The cat sat on the mat.").unwrap();
    std::fs::write(dir.path().join("b.md"), "The dog barked.").unwrap();

    lodot_cmd(&dir)
        .args([
            "--files", "a.txt", "b.md", "--analyze", "text,sent", "--output", "json",
            "--outfile", "report",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("report.json"));

    let raw = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["source"]["inputs"].as_array().unwrap().len(), 2);
    assert_eq!(json["text"]["paragraph_count"], 2);
    assert!(json["sentiment"].is_object());
    assert!(json.get("readability").is_none());
}

#[test]
fn turtle_report_carries_glossary_senses() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("senses.toml"),
        "[senses]\ncat = [\"a small domesticated feline\"]\n",
    )
    .unwrap();

    lodot_cmd(&dir)
        .args([
            ESSAY, "--analyze", "lexicon", "--output", "ttl", "--outfile", "essay",
            "--glossary", "senses.toml",
        ])
        .assert()
        .success();

    let ttl = std::fs::read_to_string(dir.path().join("essay.ttl")).unwrap();
    assert!(ttl.contains("a ontolex:LexicalEntry"));
    assert!(ttl.contains("\"a small domesticated feline\"@en"));
}

// ---------------------------------------------------------------------------
// Visualization
// ---------------------------------------------------------------------------

#[test]
fn plot_prints_bars_before_report() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .args([ESSAY, "--analyze", "words", "--viz", "plot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word frequencies"))
        .stdout(predicate::str::contains("#".repeat(60)));
}

#[test]
fn repeated_focus_plots_once() {
    let dir = tempdir().unwrap();
    let out = lodot_cmd(&dir)
        .args([
            ESSAY, "--analyze", "words,words", "--viz", "plot", "--output", "md", "--outfile",
            "report",
        ])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.matches("Word frequencies").count(), 1);
}

#[test]
fn image_writes_svg_per_module() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .args([ESSAY, "--analyze", "pos,text", "--viz", "image"])
        .assert()
        .success();

    let svg = std::fs::read_to_string(dir.path().join("pos_freq.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(!dir.path().join("text_freq.svg").exists());
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn profile_from_local_config_applies() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("lodot.toml"),
        "[analyze]\nfocus = [\"words\"]\n\n[view.brief]\nfocus = [\"text\"]\noutput = \"txt\"\noutfile = \"brief\"\n",
    )
    .unwrap();

    lodot_cmd(&dir)
        .args([ESSAY, "--profile", "brief"])
        .assert()
        .success();

    let txt = std::fs::read_to_string(dir.path().join("brief.txt")).unwrap();
    assert!(txt.contains("TEXT STATISTICS:"));
    assert!(!txt.contains("WORD FREQUENCIES:"));
}

#[test]
fn cli_flags_override_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("lodot.toml"),
        "[analyze]\nfocus = [\"words\"]\noutput = \"md\"\n",
    )
    .unwrap();

    lodot_cmd(&dir)
        .args([ESSAY, "--analyze", "text", "--output", "stream"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text:"))
        .stdout(predicate::str::contains("words:").not());
}

#[test]
fn unknown_profile_fails() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .args([ESSAY, "--profile", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown profile 'nope'"));
}

#[test]
fn broken_config_points_at_init() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("lodot.toml"), "[analyze\n").unwrap();
    lodot_cmd(&dir)
        .arg(ESSAY)
        .assert()
        .failure()
        .stderr(predicate::str::contains("lodot init --force"));
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn verbose_flag_logs_to_stderr_only() {
    let dir = tempdir().unwrap();
    lodot_cmd(&dir)
        .args(["-vv", ESSAY])
        .assert()
        .success()
        .stderr(predicate::str::contains("verbosity level: 2"))
        .stdout(predicate::str::contains("verbosity").not());
}
