//! Typed model of the compiled grammar artifact.
//!
//! The grammar compiler serializes an authored rule set to JSON; this module
//! deserializes that artifact into a strongly typed [`Grammar`] with
//! [`facet_json`]. The model mirrors the compiler's published schema and
//! makes no attempt to interpret the rules beyond their structure.

pub mod rules;

use facet::Facet;
use std::collections::HashMap;

pub use rules::{Rule, RuleKind, RuleValue};

/// A complete compiled grammar definition.
///
/// Captures the full rule set along with the auxiliary metadata the compiler
/// emits: extras, precedence tables, expected conflicts, external scanner
/// symbols, and supertype groupings.
///
/// See <https://tree-sitter.github.io/tree-sitter/assets/schemas/grammar.schema.json>
#[derive(Debug, Clone, Facet)]
pub struct Grammar {
    /// Optional `$schema` reference emitted for editor integration.
    #[facet(rename = "$schema")]
    #[facet(default)]
    pub schema: Option<String>,

    /// The short name of the language (e.g. `"var2"`).
    pub name: String,

    /// Name of a base grammar this one inherits from, if any.
    #[facet(default)]
    pub inherits: Option<String>,

    /// Map of rule names to their combinator trees.
    pub rules: HashMap<String, Rule>,

    /// Tokens that may appear between any two others, such as whitespace.
    #[facet(default)]
    pub extras: Option<Vec<Rule>>,

    /// Rules implemented by an external scanner.
    #[facet(default)]
    pub externals: Option<Vec<Rule>>,

    /// Rules the compiler inlines into their use sites.
    #[facet(default)]
    pub inline: Option<Vec<String>>,

    /// Named precedence orderings.
    #[facet(default)]
    pub precedences: Option<Vec<Vec<Precedence>>>,

    /// Conflict groups the authored grammar expects.
    #[facet(default)]
    pub conflicts: Option<Vec<Vec<String>>>,

    /// Context-specific reserved-word sets.
    #[facet(default)]
    pub reserved: Option<HashMap<String, Vec<Rule>>>,

    /// The rule name used to identify word tokens.
    #[facet(default)]
    pub word: Option<String>,

    /// Node supertypes grouping related syntactic forms.
    #[facet(default)]
    pub supertypes: Option<Vec<String>>,
}

/// One entry in a named precedence ordering.
#[derive(Debug, Clone, Facet)]
#[repr(u8)]
pub enum Precedence {
    /// A literal precedence name.
    String(String),

    /// A symbolic reference to another entry.
    Symbol {
        /// The identifier of the referenced symbol.
        name: String,
    },
}

impl Grammar {
    /// Looks up a rule by name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// The number of rules in the grammar.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when the grammar defines no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Deserialize a compiled grammar artifact into a [`Grammar`].
///
/// # Errors
///
/// Returns [`GrammarError::JsonParse`] if the artifact is not valid JSON or
/// does not match the compiler's schema.
pub fn parse(json: &str) -> Result<Grammar, GrammarError> {
    facet_json::from_str(json).map_err(|e| GrammarError::JsonParse(e.to_string()))
}

/// Errors raised while deserializing a grammar artifact.
#[derive(Debug)]
pub enum GrammarError {
    /// The artifact was syntactically invalid or structurally mismatched.
    JsonParse(String),
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GrammarError::JsonParse(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for GrammarError {}
