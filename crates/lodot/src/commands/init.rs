use anyhow::{Context, Result, bail};
use lodot_config::{self as cli, CONFIG_FILE_NAME};

pub(crate) const TEMPLATE: &str = r#"# lodot configuration.
# Precedence: command-line flags > [view.<profile>] > [analyze] > defaults.

[analyze]
# text, words, pos, composition, read, sent, lexicon, ngrams
focus = ["text", "read"]
# stream, json, txt, md, ttl
output = "stream"
top = 20
lexicon_top = 50
ngram_top = 10
reading_wpm = 225
speaking_wpm = 125
# Optional sense glossary, relative to this file:
#   [senses]
#   bank = ["a financial institution", "the side of a river"]
# glossary = "senses.toml"

[view.brief]
focus = ["text"]
output = "txt"

[view.rdf]
focus = ["text", "read", "sent", "lexicon"]
output = "ttl"
outfile = "report"
"#;

pub(crate) fn handle(args: cli::InitArgs) -> Result<()> {
    if args.print {
        print!("{TEMPLATE}");
        return Ok(());
    }

    let path = args.dir.join(CONFIG_FILE_NAME);
    if path.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("Failed to create {}", args.dir.display()))?;
    std::fs::write(&path, TEMPLATE).with_context(|| format!("Failed to write {}", path.display()))?;
    eprintln!("Created {}", path.display());
    Ok(())
}
