//! Command-line verification of Var2 grammar artifacts.
//!
//! With no arguments, checks that the embedded artifact constructs a valid
//! language and prints a one-line summary. Given a path, checks that file
//! instead. Exits zero on pass; exits one with the diagnostic on stderr when
//! the grammar fails to load.

use facet::Facet;
use std::process::ExitCode;
use var2_grammar::{Language, VerificationError};

/// Verify that a compiled Var2 grammar artifact loads.
#[derive(Facet)]
struct Cli {
    /// Path to an artifact to verify instead of the embedded one.
    #[facet(positional)]
    #[facet(default)]
    artifact: Option<String>,

    /// Suppress the summary line on success.
    #[facet(named, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();

    let cli: Cli = match facet_args::from_slice(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let loaded = match cli.artifact.as_deref() {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => Language::from_json(&text).map_err(VerificationError::from),
            Err(e) => {
                eprintln!("error: cannot read {path}: {e}");
                return ExitCode::from(2);
            }
        },
        None => Language::load(var2_grammar::grammar()).map_err(VerificationError::from),
    };

    match loaded {
        Ok(language) => {
            if !cli.quiet {
                println!(
                    "{} grammar ok: {} rules, {} node kinds, {} fields",
                    language.name(),
                    language.rule_count(),
                    language.node_kinds().len(),
                    language.field_names().len()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
