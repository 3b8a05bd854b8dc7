//! Language construction from a grammar handle.
//!
//! [`Language::load`] is the host-side construction routine: it takes an
//! opaque [`GrammarHandle`], deserializes and validates the artifact behind
//! it, and derives the metadata a consumer can query. A handle that does not
//! load yields an error, never a partially constructed language.

use crate::artifact::GrammarHandle;
use crate::grammar::{self, Grammar, GrammarError};
use crate::validate::{self, ValidationError};
use crate::{ENTRY_RULE, LANGUAGE_NAME};

/// A usable language object constructed from a compiled grammar artifact.
///
/// Existence of a `Language` value is the validity guarantee: construction
/// only succeeds when the artifact parses against the compiler's schema and
/// passes structural validation.
#[derive(Debug, Clone)]
pub struct Language {
    name: String,
    entry: String,
    node_kinds: Vec<String>,
    field_names: Vec<String>,
    rule_count: usize,
}

impl Language {
    /// Constructs a language from a grammar handle.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] when the artifact behind the handle does not
    /// parse, names a different language, or fails structural validation.
    pub fn load(handle: GrammarHandle) -> Result<Self, LoadError> {
        Self::from_json(handle.raw())
    }

    /// Constructs a language from artifact text, e.g. a file on disk.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`Language::load`].
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let grammar = grammar::parse(json)?;
        if grammar.name != LANGUAGE_NAME {
            return Err(LoadError::WrongLanguage(grammar.name));
        }
        validate::validate(&grammar, ENTRY_RULE)?;
        Ok(Self::from_grammar(&grammar))
    }

    fn from_grammar(grammar: &Grammar) -> Self {
        // Visible node kinds: non-hidden rule names plus named alias targets.
        let mut node_kinds: Vec<String> = grammar
            .rules
            .keys()
            .filter(|name| !name.starts_with('_'))
            .cloned()
            .collect();
        let mut field_names = Vec::new();

        for rule in grammar.rules.values() {
            rule.walk(&mut |node| {
                if node.named.unwrap_or(false) {
                    if let Some(alias) = node.alias_name() {
                        node_kinds.push(alias.to_string());
                    }
                }
                if let Some(field) = node.field_name() {
                    field_names.push(field.to_string());
                }
            });
        }

        node_kinds.sort_unstable();
        node_kinds.dedup();
        field_names.sort_unstable();
        field_names.dedup();

        Self {
            name: grammar.name.clone(),
            entry: ENTRY_RULE.to_string(),
            node_kinds,
            field_names,
            rule_count: grammar.rule_count(),
        }
    }

    /// The language name carried by the artifact.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule parsing starts from.
    #[must_use]
    pub fn entry_rule(&self) -> &str {
        &self.entry
    }

    /// The number of rules in the compiled grammar.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// The visible node kinds this language can produce, sorted.
    #[must_use]
    pub fn node_kinds(&self) -> &[String] {
        &self.node_kinds
    }

    /// The field labels appearing anywhere in the grammar, sorted.
    #[must_use]
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Returns `true` if the language can produce a node of the given kind.
    #[must_use]
    pub fn has_node_kind(&self, kind: &str) -> bool {
        self.node_kinds.binary_search_by(|k| k.as_str().cmp(kind)).is_ok()
    }
}

/// Reasons a grammar handle can fail to load into a [`Language`].
#[derive(Debug)]
pub enum LoadError {
    /// The artifact is not a well-formed compiled grammar.
    Parse(GrammarError),

    /// The artifact parses but names a different language.
    WrongLanguage(String),

    /// The artifact parses but is structurally inconsistent.
    Invalid(ValidationError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::Parse(e) => write!(f, "artifact does not parse: {e}"),
            LoadError::WrongLanguage(name) => {
                write!(f, "artifact names grammar '{name}', expected '{LANGUAGE_NAME}'")
            }
            LoadError::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Parse(e) => Some(e),
            LoadError::Invalid(e) => Some(e),
            LoadError::WrongLanguage(_) => None,
        }
    }
}

impl From<GrammarError> for LoadError {
    fn from(e: GrammarError) -> Self {
        LoadError::Parse(e)
    }
}

impl From<ValidationError> for LoadError {
    fn from(e: ValidationError) -> Self {
        LoadError::Invalid(e)
    }
}
