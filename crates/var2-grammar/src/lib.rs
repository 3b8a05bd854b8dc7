//! Var2 language support: the compiled grammar artifact and its binding checks.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::multiple_crate_versions)]

/// The embedded grammar artifact and the opaque handle exported over it.
///
/// This is the leaf of the crate: a named access point to the artifact the
/// grammar compiler produced, with no computation and no failure mode.
pub mod artifact;

/// Typed model of the grammar compiler's JSON output.
///
/// Deserializes a compiled artifact into rule trees and provides the
/// accessors the rest of the crate inspects them through.
pub mod grammar;

/// Language construction from a grammar handle.
pub mod language;

/// Structural validation of compiled grammar artifacts.
///
/// Validation exists to protect language construction from malformed
/// artifacts: unresolved symbols, unlabeled fields, empty combinators.
pub mod validate;

/// The binding verifier: does the exported grammar actually load?
pub mod verify;

/// The language name a loadable artifact must carry.
pub const LANGUAGE_NAME: &str = "var2";

/// The rule parsing starts from.
///
/// The compiler's convention is "first authored rule", which the artifact's
/// JSON map does not preserve, so the entry rule is pinned by name here.
pub const ENTRY_RULE: &str = "source";

pub use artifact::{grammar, GrammarHandle, GRAMMAR_JSON};
pub use grammar::{Grammar, GrammarError, Rule, RuleKind, RuleValue};
pub use language::{Language, LoadError};
pub use validate::{validate, ValidationError};
pub use verify::{verify_grammar_loads, VerificationError};
