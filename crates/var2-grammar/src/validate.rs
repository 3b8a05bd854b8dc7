//! Structural validation of compiled grammar artifacts.
//!
//! Validation protects language construction from malformed artifacts: every
//! symbol reference must resolve, every combinator node must carry the
//! payload its kind requires. Conditions that a working artifact may
//! legitimately exhibit (detached rule subtrees, left recursion) are reported
//! to stderr rather than rejected.

use crate::grammar::{Grammar, Rule, RuleKind};
use std::collections::{HashMap, HashSet};

/// A structural defect found while checking a grammar.
#[derive(Debug)]
pub struct ValidationError {
    /// The human-readable description of the defect.
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "validation error: {}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks a parsed [`Grammar`] for structural consistency.
///
/// Hard failures: an empty rule set, a missing entry rule, symbol references
/// to undefined rules, and combinator nodes missing their required payload
/// (unlabeled fields, empty sequences, precedence wrappers with nothing to
/// wrap). Rules unreachable from `entry`, left-recursive rules, and mixed
/// associativity at a single precedence level are reported as warnings.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first structural defect
/// found.
pub fn validate(grammar: &Grammar, entry: &str) -> Result<(), ValidationError> {
    if grammar.is_empty() {
        return Err(ValidationError::new("grammar has no rules"));
    }
    if grammar.rule(entry).is_none() {
        return Err(ValidationError::new(format!(
            "entry rule '{entry}' is not defined"
        )));
    }

    check_node_shapes(grammar)?;
    check_symbol_references(grammar)?;

    report_unreachable_rules(grammar, entry);
    report_left_recursion(grammar);
    report_mixed_associativity(grammar);

    Ok(())
}

fn check_node_shapes(grammar: &Grammar) -> Result<(), ValidationError> {
    let mut problems = Vec::new();

    for (rule_name, rule) in &grammar.rules {
        rule.walk(&mut |node| {
            if let Some(problem) = node_shape_problem(node) {
                problems.push(format!("{problem} in rule '{rule_name}'"));
            }
        });
    }

    problems
        .into_iter()
        .next()
        .map_or(Ok(()), |first| Err(ValidationError::new(first)))
}

fn node_shape_problem(node: &Rule) -> Option<String> {
    match node.kind {
        RuleKind::Symbol => node
            .symbol_name()
            .filter(|name| !name.is_empty())
            .is_none()
            .then(|| "symbol reference without a name".to_string()),

        RuleKind::Field => {
            if node.field_name().filter(|name| !name.is_empty()).is_none() {
                Some("field without a label".to_string())
            } else if node.content.is_none() {
                Some("field without content".to_string())
            } else {
                None
            }
        }

        RuleKind::Alias => {
            if node.alias_name().filter(|name| !name.is_empty()).is_none() {
                Some("alias without a target name".to_string())
            } else if node.content.is_none() {
                Some("alias without content".to_string())
            } else {
                None
            }
        }

        RuleKind::Seq | RuleKind::Choice => node
            .members
            .is_empty()
            .then(|| format!("empty {} node", node.kind.as_str())),

        RuleKind::Repeat
        | RuleKind::Repeat1
        | RuleKind::Token
        | RuleKind::ImmediateToken
        | RuleKind::Prec
        | RuleKind::PrecLeft
        | RuleKind::PrecRight
        | RuleKind::PrecDynamic => node
            .content
            .is_none()
            .then(|| format!("{} node without content", node.kind.as_str())),

        RuleKind::String | RuleKind::Pattern => {
            let missing = match node.kind {
                RuleKind::String => node.literal().is_none(),
                _ => node.pattern().is_none(),
            };
            missing.then(|| format!("{} token without source text", node.kind.as_str()))
        }

        RuleKind::Blank | RuleKind::Reserved => None,
    }
}

fn check_symbol_references(grammar: &Grammar) -> Result<(), ValidationError> {
    let defined: HashSet<&str> = grammar.rules.keys().map(String::as_str).collect();

    for (rule_name, rule) in &grammar.rules {
        let mut undefined = None;
        rule.walk(&mut |node| {
            if let Some(target) = node.symbol_name() {
                if undefined.is_none() && !defined.contains(target) {
                    undefined = Some(target.to_string());
                }
            }
        });
        if let Some(target) = undefined {
            return Err(ValidationError::new(format!(
                "undefined symbol '{target}' referenced in rule '{rule_name}'"
            )));
        }
    }

    Ok(())
}

fn report_unreachable_rules(grammar: &Grammar, entry: &str) {
    let mut reachable = HashSet::new();
    let mut to_visit = vec![entry.to_string()];

    while let Some(rule_name) = to_visit.pop() {
        if !reachable.insert(rule_name.clone()) {
            continue;
        }
        if let Some(rule) = grammar.rule(&rule_name) {
            rule.walk(&mut |node| {
                if let Some(target) = node.symbol_name() {
                    to_visit.push(target.to_string());
                }
            });
        }
    }

    let inlined = |name: &str| {
        grammar
            .inline
            .as_ref()
            .is_some_and(|inline| inline.iter().any(|n| n == name))
    };

    let mut unreachable: Vec<&str> = grammar
        .rules
        .keys()
        .map(String::as_str)
        .filter(|&name| !reachable.contains(name) && !inlined(name))
        .collect();

    if !unreachable.is_empty() {
        unreachable.sort_unstable();
        eprintln!(
            "warning: {} rules unreachable from '{}': {}",
            unreachable.len(),
            entry,
            unreachable.join(", ")
        );
    }
}

fn report_left_recursion(grammar: &Grammar) {
    for (rule_name, rule) in &grammar.rules {
        if starts_with_symbol(rule, rule_name) {
            eprintln!("info: rule '{rule_name}' is left-recursive");
        }
    }
}

// Whether the rule can derive `target` in first position without consuming
// input.
fn starts_with_symbol(rule: &Rule, target: &str) -> bool {
    match rule.kind {
        RuleKind::Symbol => rule.symbol_name() == Some(target),

        RuleKind::Seq => rule
            .members
            .first()
            .is_some_and(|first| starts_with_symbol(first, target)),

        RuleKind::Choice => rule
            .members
            .iter()
            .any(|member| starts_with_symbol(member, target)),

        RuleKind::Repeat
        | RuleKind::Repeat1
        | RuleKind::Prec
        | RuleKind::PrecLeft
        | RuleKind::PrecRight
        | RuleKind::PrecDynamic
        | RuleKind::Field
        | RuleKind::Alias => rule
            .content
            .as_deref()
            .is_some_and(|content| starts_with_symbol(content, target)),

        _ => false,
    }
}

fn report_mixed_associativity(grammar: &Grammar) {
    for (rule_name, rule) in &grammar.rules {
        let mut sides: HashMap<i32, (bool, bool)> = HashMap::new();

        rule.walk(&mut |node| {
            if let Some(level) = node.precedence() {
                let entry = sides.entry(level).or_default();
                match node.kind {
                    RuleKind::PrecLeft => entry.0 = true,
                    RuleKind::PrecRight => entry.1 = true,
                    _ => {}
                }
            }
        });

        let mut mixed: Vec<i32> = sides
            .iter()
            .filter(|(_, (left, right))| *left && *right)
            .map(|(level, _)| *level)
            .collect();
        mixed.sort_unstable();

        for level in mixed {
            eprintln!(
                "warning: rule '{rule_name}' mixes left and right associativity at level {level}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse;

    fn grammar_from(json: &str) -> Grammar {
        parse(json).unwrap()
    }

    #[test]
    fn test_valid_grammar_passes() {
        let grammar = grammar_from(
            r#"{
                "name": "test",
                "rules": {
                    "source": {"type": "REPEAT", "content": {"type": "SYMBOL", "name": "word"}},
                    "word": {"type": "PATTERN", "value": "[a-z]+"}
                }
            }"#,
        );
        assert!(validate(&grammar, "source").is_ok());
    }

    #[test]
    fn test_missing_entry_rule() {
        let grammar = grammar_from(
            r#"{"name": "test", "rules": {"word": {"type": "STRING", "value": "x"}}}"#,
        );
        let err = validate(&grammar, "source").unwrap_err();
        assert!(err.message.contains("entry rule 'source'"));
    }

    #[test]
    fn test_undefined_symbol_is_rejected() {
        let grammar = grammar_from(
            r#"{
                "name": "test",
                "rules": {
                    "source": {"type": "SYMBOL", "name": "missing"}
                }
            }"#,
        );
        let err = validate(&grammar, "source").unwrap_err();
        assert!(err.message.contains("undefined symbol 'missing'"));
        assert!(err.message.contains("rule 'source'"));
    }

    #[test]
    fn test_unlabeled_field_is_rejected() {
        let grammar = grammar_from(
            r#"{
                "name": "test",
                "rules": {
                    "source": {"type": "FIELD", "content": {"type": "STRING", "value": "x"}}
                }
            }"#,
        );
        let err = validate(&grammar, "source").unwrap_err();
        assert!(err.message.contains("field without a label"));
    }

    #[test]
    fn test_empty_choice_is_rejected() {
        let grammar = grammar_from(
            r#"{
                "name": "test",
                "rules": {
                    "source": {"type": "CHOICE", "members": []}
                }
            }"#,
        );
        let err = validate(&grammar, "source").unwrap_err();
        assert!(err.message.contains("empty CHOICE"));
    }

    #[test]
    fn test_bare_precedence_wrapper_is_rejected() {
        let grammar = grammar_from(
            r#"{
                "name": "test",
                "rules": {
                    "source": {"type": "PREC_LEFT", "value": 1}
                }
            }"#,
        );
        let err = validate(&grammar, "source").unwrap_err();
        assert!(err.message.contains("PREC_LEFT node without content"));
    }

    #[test]
    fn test_detached_rules_are_only_a_warning() {
        let grammar = grammar_from(
            r#"{
                "name": "test",
                "rules": {
                    "source": {"type": "STRING", "value": "x"},
                    "orphan": {"type": "STRING", "value": "y"}
                }
            }"#,
        );
        assert!(validate(&grammar, "source").is_ok());
    }

    #[test]
    fn test_empty_grammar_is_rejected() {
        let grammar = grammar_from(r#"{"name": "test", "rules": {}}"#);
        let err = validate(&grammar, "source").unwrap_err();
        assert!(err.message.contains("no rules"));
    }
}
