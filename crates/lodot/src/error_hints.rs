use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no input text or file provided") {
        push_hint(&mut out, "Pass text as an argument: `lodot \"Some text.\"`.");
        push_hint(&mut out, "Or analyze files with `--files notes.txt`, or `-` to read stdin.");
    }

    if haystack.contains("unsupported file type") {
        push_hint(
            &mut out,
            "Supported inputs are UTF-8 `.txt`, `.md` and `.text` files plus `.docx` and `.pdf`.",
        );
        push_hint(&mut out, "Convert other documents to plain text first.");
    }

    if haystack.contains("filename required") {
        push_hint(
            &mut out,
            "Add `--outfile <NAME>`; the format name is appended as the extension.",
        );
        push_hint(&mut out, "Or use `--output stream` to print to stdout.");
    }

    if haystack.contains("no such file or directory") || haystack.contains("not found") {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("unknown profile") {
        push_hint(
            &mut out,
            "Define the profile as a `[view.<name>]` table in `lodot.toml`.",
        );
    }

    if haystack.contains("unknown focus") {
        push_hint(&mut out, "Run `lodot modules` to list available analyses.");
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(
            &mut out,
            "Check `lodot.toml` syntax and key names, or regenerate with `lodot init --force`.",
        );
    }

    if haystack.contains("stream did not contain valid utf-8") {
        push_hint(&mut out, "Input files must be UTF-8 encoded text.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
