//! Rule combinators as emitted by the grammar compiler.
//!
//! A compiled grammar is a map of rule names to trees of combinator nodes.
//! Each node carries a discriminant ([`RuleKind`]) plus the handful of
//! type-specific payload fields the JSON schema allows. Absent keys are
//! simply omitted from the artifact, so every payload field defaults.

use facet::Facet;

/// A single combinator node in a compiled rule tree.
///
/// Atomic nodes (literals, patterns, symbol references) carry a `value` or
/// `name`; composite nodes (`SEQ`, `CHOICE`) carry `members`; unary wrappers
/// (`REPEAT`, `FIELD`, precedence markers) carry `content`.
#[derive(Debug, Clone, Facet)]
pub struct Rule {
    /// The discriminant identifying what kind of node this is.
    #[facet(rename = "type")]
    pub kind: RuleKind,

    /// Literal text, pattern source, numeric precedence level, or alias
    /// target, depending on `kind`.
    #[facet(default)]
    pub value: Option<RuleValue>,

    /// Referenced rule name (`SYMBOL`) or field label (`FIELD`).
    #[facet(default)]
    pub name: Option<String>,

    /// Wrapped node for unary constructs.
    #[facet(default)]
    pub content: Option<Box<Rule>>,

    /// Child nodes for compound constructs.
    #[facet(default)]
    pub members: Vec<Rule>,

    /// Whether an `ALIAS` produces a named node.
    #[facet(default)]
    pub named: Option<bool>,

    /// Generator-specific modifier flags.
    #[facet(default)]
    pub flags: Option<String>,

    /// Context label used for reserved-word handling.
    #[facet(default)]
    pub context_name: Option<String>,
}

/// A scalar payload attached to a rule node.
#[derive(Debug, Clone, Facet)]
#[repr(u8)]
pub enum RuleValue {
    /// A string payload: literal text, a pattern source, or an alias target.
    String(String),

    /// An integer payload: a numeric precedence level.
    Integer(i32),
}

/// The combinator vocabulary of the grammar compiler's JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Facet)]
#[repr(u8)]
pub enum RuleKind {
    /// An empty production.
    #[facet(rename = "BLANK")]
    Blank,
    /// A literal string token.
    #[facet(rename = "STRING")]
    String,
    /// A regular-expression token.
    #[facet(rename = "PATTERN")]
    Pattern,
    /// A reference to another named rule.
    #[facet(rename = "SYMBOL")]
    Symbol,
    /// One of several alternatives.
    #[facet(rename = "CHOICE")]
    Choice,
    /// A sequential composition.
    #[facet(rename = "SEQ")]
    Seq,
    /// Zero-or-more repetition.
    #[facet(rename = "REPEAT")]
    Repeat,
    /// One-or-more repetition.
    #[facet(rename = "REPEAT1")]
    Repeat1,
    /// A precedence wrapper with no associativity.
    #[facet(rename = "PREC")]
    Prec,
    /// A left-associative precedence wrapper.
    #[facet(rename = "PREC_LEFT")]
    PrecLeft,
    /// A right-associative precedence wrapper.
    #[facet(rename = "PREC_RIGHT")]
    PrecRight,
    /// A dynamic (runtime-resolved) precedence wrapper.
    #[facet(rename = "PREC_DYNAMIC")]
    PrecDynamic,
    /// A named field applied to a subrule.
    #[facet(rename = "FIELD")]
    Field,
    /// An alternate node name for the wrapped rule.
    #[facet(rename = "ALIAS")]
    Alias,
    /// A tokenization wrapper.
    #[facet(rename = "TOKEN")]
    Token,
    /// A token that admits no leading trivia.
    #[facet(rename = "IMMEDIATE_TOKEN")]
    ImmediateToken,
    /// A reserved-word placeholder.
    #[facet(rename = "RESERVED")]
    Reserved,
}

impl RuleKind {
    /// The canonical schema spelling of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Blank => "BLANK",
            RuleKind::String => "STRING",
            RuleKind::Pattern => "PATTERN",
            RuleKind::Symbol => "SYMBOL",
            RuleKind::Choice => "CHOICE",
            RuleKind::Seq => "SEQ",
            RuleKind::Repeat => "REPEAT",
            RuleKind::Repeat1 => "REPEAT1",
            RuleKind::Prec => "PREC",
            RuleKind::PrecLeft => "PREC_LEFT",
            RuleKind::PrecRight => "PREC_RIGHT",
            RuleKind::PrecDynamic => "PREC_DYNAMIC",
            RuleKind::Field => "FIELD",
            RuleKind::Alias => "ALIAS",
            RuleKind::Token => "TOKEN",
            RuleKind::ImmediateToken => "IMMEDIATE_TOKEN",
            RuleKind::Reserved => "RESERVED",
        }
    }

    /// Returns `true` for the precedence wrapper kinds.
    #[must_use]
    pub fn is_precedence(self) -> bool {
        matches!(
            self,
            RuleKind::Prec | RuleKind::PrecLeft | RuleKind::PrecRight | RuleKind::PrecDynamic
        )
    }
}

impl Rule {
    /// Returns `true` if this node is a terminal (literal or pattern) token.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, RuleKind::String | RuleKind::Pattern)
    }

    /// Returns the referenced rule name if this is a `SYMBOL` node.
    #[must_use]
    pub fn symbol_name(&self) -> Option<&str> {
        if matches!(self.kind, RuleKind::Symbol) {
            self.name.as_deref()
        } else {
            None
        }
    }

    /// Returns the field label if this is a `FIELD` node.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        if matches!(self.kind, RuleKind::Field) {
            self.name.as_deref()
        } else {
            None
        }
    }

    /// Returns the alias target if this is an `ALIAS` node.
    ///
    /// The compiler stores the alias name in the node's `value` slot, not in
    /// `name`.
    #[must_use]
    pub fn alias_name(&self) -> Option<&str> {
        if matches!(self.kind, RuleKind::Alias) {
            self.string_payload()
        } else {
            None
        }
    }

    /// Returns the numeric level if this is a precedence wrapper.
    ///
    /// Precedence wrappers may instead carry a named level (a string payload
    /// referencing the grammar's `precedences` table); those yield `None`.
    #[must_use]
    pub fn precedence(&self) -> Option<i32> {
        if self.kind.is_precedence() {
            match self.value {
                Some(RuleValue::Integer(level)) => Some(level),
                Some(RuleValue::String(_)) | None => None,
            }
        } else {
            None
        }
    }

    /// Returns the literal text if this is a `STRING` node.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        if matches!(self.kind, RuleKind::String) {
            self.string_payload()
        } else {
            None
        }
    }

    /// Returns the regex source if this is a `PATTERN` node.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        if matches!(self.kind, RuleKind::Pattern) {
            self.string_payload()
        } else {
            None
        }
    }

    /// Iterates over the direct children of this node, whichever payload
    /// slot they live in.
    pub fn children(&self) -> impl Iterator<Item = &Rule> {
        self.content.as_deref().into_iter().chain(self.members.iter())
    }

    /// Visits this node and every node below it, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Rule)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    fn string_payload(&self) -> Option<&str> {
        match &self.value {
            Some(RuleValue::String(s)) => Some(s.as_str()),
            Some(RuleValue::Integer(_)) | None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_rule(json: &str) -> Rule {
        facet_json::from_str(json).unwrap_or_else(|e| {
            panic!("JSON parse error:\n{e}");
        })
    }

    #[test]
    fn test_parse_symbol_rule() {
        let rule = parse_rule(r#"{"type": "SYMBOL", "name": "expression"}"#);
        assert_eq!(rule.symbol_name(), Some("expression"));
        assert!(!rule.is_terminal());
    }

    #[test]
    fn test_parse_precedence_wrapper() {
        let rule = parse_rule(
            r#"{
                "type": "PREC_RIGHT",
                "value": -2,
                "content": {
                    "type": "SEQ",
                    "members": [
                        {"type": "SYMBOL", "name": "expression"},
                        {"type": "STRING", "value": ":="},
                        {"type": "SYMBOL", "name": "expression"}
                    ]
                }
            }"#,
        );
        assert_eq!(rule.precedence(), Some(-2));
        assert!(matches!(rule.kind, RuleKind::PrecRight));
        let seq = rule.content.as_deref().unwrap();
        assert_eq!(seq.members.len(), 3);
        assert_eq!(seq.members[1].literal(), Some(":="));
    }

    #[test]
    fn test_alias_target_lives_in_value() {
        let rule = parse_rule(
            r#"{
                "type": "ALIAS",
                "content": {"type": "STRING", "value": "break"},
                "named": true,
                "value": "break"
            }"#,
        );
        assert_eq!(rule.alias_name(), Some("break"));
        assert_eq!(rule.named, Some(true));
        assert_eq!(rule.symbol_name(), None);
    }

    #[test]
    fn test_walk_visits_every_node() {
        let rule = parse_rule(
            r#"{
                "type": "CHOICE",
                "members": [
                    {"type": "STRING", "value": "while"},
                    {"type": "REPEAT", "content": {"type": "SYMBOL", "name": "statement"}}
                ]
            }"#,
        );
        let mut kinds = Vec::new();
        rule.walk(&mut |node| kinds.push(node.kind));
        assert_eq!(
            kinds,
            vec![
                RuleKind::Choice,
                RuleKind::String,
                RuleKind::Repeat,
                RuleKind::Symbol
            ]
        );
    }
}
