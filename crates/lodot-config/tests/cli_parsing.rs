//! Clap parsing tests for the lodot CLI surface.

use std::path::PathBuf;

use clap::Parser;
use lodot_config::{Cli, Commands, Focus, ReportFormat, Shell, VizKind};

// ── Defaults ────────────────────────────────────────────────────────────

#[test]
fn bare_invocation_leaves_every_override_unset() {
    let cli = Cli::try_parse_from(["lodot"]).expect("parse");

    assert!(cli.command.is_none());
    assert!(cli.analyze.input.is_none());
    assert!(cli.analyze.files.is_empty());
    assert!(cli.analyze.analyze.is_empty());
    assert!(cli.analyze.output.is_none());
    assert!(cli.analyze.top.is_none());
    assert_eq!(cli.global.verbose, 0);
    assert!(!cli.global.no_progress);
}

#[test]
fn positional_text_is_captured() {
    let cli = Cli::try_parse_from(["lodot", "The cat sat."]).expect("parse");

    assert_eq!(cli.analyze.input.as_deref(), Some("The cat sat."));
}

// ── Focus lists ─────────────────────────────────────────────────────────

#[test]
fn analyze_accepts_comma_lists_and_repeats() {
    let cli = Cli::try_parse_from(["lodot", "x", "--analyze", "text,read", "-a", "ngrams"])
        .expect("parse");

    assert_eq!(cli.analyze.analyze, vec![Focus::Text, Focus::Read, Focus::Ngrams]);
}

#[test]
fn analyze_takes_several_values_after_one_flag() {
    let cli = Cli::try_parse_from(["lodot", "--analyze", "text", "read"]).expect("parse");

    assert_eq!(cli.analyze.analyze, vec![Focus::Text, Focus::Read]);
    assert!(cli.analyze.input.is_none());
}

#[test]
fn analyze_values_follow_positional_text() {
    let cli = Cli::try_parse_from(["lodot", "Some text.", "--analyze", "text", "read", "sent"])
        .expect("parse");

    assert_eq!(cli.analyze.input.as_deref(), Some("Some text."));
    assert_eq!(cli.analyze.analyze, vec![Focus::Text, Focus::Read, Focus::Sent]);
}

#[test]
fn analyze_accepts_long_aliases() {
    let cli = Cli::try_parse_from(["lodot", "x", "--analyze", "readability,sentiment"])
        .expect("parse");

    assert_eq!(cli.analyze.analyze, vec![Focus::Read, Focus::Sent]);
}

#[test]
fn unknown_focus_is_rejected() {
    assert!(Cli::try_parse_from(["lodot", "x", "--analyze", "vibes"]).is_err());
}

// ── Output and viz ──────────────────────────────────────────────────────

#[test]
fn output_outfile_and_viz_parse() {
    let cli = Cli::try_parse_from([
        "lodot", "x", "--output", "turtle", "--outfile", "report", "--viz", "plot",
    ])
    .expect("parse");

    assert_eq!(cli.analyze.output, Some(ReportFormat::Ttl));
    assert_eq!(cli.analyze.outfile, Some(PathBuf::from("report")));
    assert_eq!(cli.analyze.viz, Some(VizKind::Plot));
}

#[test]
fn multiple_files_follow_one_flag() {
    let cli = Cli::try_parse_from(["lodot", "--files", "a.txt", "b.md"]).expect("parse");

    assert_eq!(cli.analyze.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.md")]);
    assert!(cli.analyze.input.is_none());
}

#[test]
fn verbosity_counts_repeats() {
    let cli = Cli::try_parse_from(["lodot", "-vvv", "x"]).expect("parse");
    assert_eq!(cli.global.verbose, 3);
}

// ── Subcommands ─────────────────────────────────────────────────────────

#[test]
fn init_defaults_to_current_dir() {
    let cli = Cli::try_parse_from(["lodot", "init"]).expect("parse");

    match cli.command {
        Some(Commands::Init(args)) => {
            assert_eq!(args.dir, PathBuf::from("."));
            assert!(!args.force);
            assert!(!args.print);
        }
        other => panic!("expected init, got {other:?}"),
    }
}

#[test]
fn completions_take_a_shell() {
    let cli = Cli::try_parse_from(["lodot", "completions", "zsh"]).expect("parse");

    assert!(matches!(
        cli.command,
        Some(Commands::Completions(ref args)) if args.shell == Shell::Zsh
    ));
}

#[test]
fn profile_is_global() {
    let cli = Cli::try_parse_from(["lodot", "modules", "--profile", "brief"]).expect("parse");

    assert!(matches!(cli.command, Some(Commands::Modules)));
    assert_eq!(cli.profile.as_deref(), Some("brief"));
}
