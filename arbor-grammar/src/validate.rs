//! Well-formedness checks for grammar definitions
//!
//! Grammar definitions are authored by hand or by generation steps, and
//! both get the invariants wrong occasionally: an empty token set, a
//! choice with a single alternative, a child without a name. The
//! renderer stays total over such inputs, so these checks exist as a
//! separate advisory pass that authoring tools run before publishing
//! documentation.

use crate::model::{Child, ChildKind, NodeSpec};
use std::fmt;

/// Errors reported by grammar definition validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A child slot has an empty name.
    UnnamedChild {
        node: String,
        index: usize,
    },
    /// A token set with no alternatives. Token sets must offer at least
    /// one acceptable token.
    EmptyTokenSet {
        node: String,
        child: String,
    },
    /// A node choice with fewer than two alternatives. A single
    /// alternative degenerates to a plain node reference.
    DegenerateNodeChoice {
        node: String,
        child: String,
        alternatives: usize,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::UnnamedChild { node, index } => {
                write!(f, "child {index} of node '{node}' has no name")
            }
            GrammarError::EmptyTokenSet { node, child } => {
                write!(f, "token set child '{child}' of node '{node}' has no choices")
            }
            GrammarError::DegenerateNodeChoice {
                node,
                child,
                alternatives,
            } => {
                write!(
                    f,
                    "node choice child '{child}' of node '{node}' has {alternatives} alternative(s), expected at least 2"
                )
            }
        }
    }
}

impl std::error::Error for GrammarError {}

/// Check one node definition against the model invariants.
///
/// Returns the first violation found, walking children in order and
/// nested choice alternatives depth-first.
pub fn validate_node(node: &NodeSpec) -> Result<(), GrammarError> {
    for (index, child) in node.children.iter().enumerate() {
        validate_child(&node.name, index, child)?;
    }
    Ok(())
}

fn validate_child(node: &str, index: usize, child: &Child) -> Result<(), GrammarError> {
    if child.name.is_empty() {
        return Err(GrammarError::UnnamedChild {
            node: node.to_string(),
            index,
        });
    }
    validate_kind(node, &child.name, &child.kind)
}

fn validate_kind(node: &str, child: &str, kind: &ChildKind) -> Result<(), GrammarError> {
    match kind {
        ChildKind::Node { .. } | ChildKind::Collection { .. } => Ok(()),
        ChildKind::NodeChoice { alternatives } => {
            if alternatives.len() < 2 {
                return Err(GrammarError::DegenerateNodeChoice {
                    node: node.to_string(),
                    child: child.to_string(),
                    alternatives: alternatives.len(),
                });
            }
            for alternative in alternatives {
                validate_kind(node, child, alternative)?;
            }
            Ok(())
        }
        ChildKind::TokenSet { choices } => {
            if choices.is_empty() {
                return Err(GrammarError::EmptyTokenSet {
                    node: node.to_string(),
                    child: child.to_string(),
                });
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TokenChoice;

    fn node_with(child: Child) -> NodeSpec {
        NodeSpec::new("TestSyntax", vec![child])
    }

    #[test]
    fn well_formed_node_passes() {
        let node = NodeSpec::new(
            "BinaryExprSyntax",
            vec![
                Child::new("left", ChildKind::node("ExprSyntax")),
                Child::new(
                    "operator",
                    ChildKind::token_set(vec![
                        TokenChoice::token("+", "plus"),
                        TokenChoice::token("-", "minus"),
                    ]),
                ),
                Child::new("right", ChildKind::node("ExprSyntax")),
            ],
        );
        assert_eq!(validate_node(&node), Ok(()));
    }

    #[test]
    fn empty_token_set_is_rejected() {
        let node = node_with(Child::new("operator", ChildKind::token_set(vec![])));
        assert_eq!(
            validate_node(&node),
            Err(GrammarError::EmptyTokenSet {
                node: "TestSyntax".to_string(),
                child: "operator".to_string(),
            })
        );
    }

    #[test]
    fn degenerate_choice_is_rejected() {
        let node = node_with(Child::new(
            "value",
            ChildKind::choice(vec![ChildKind::node("ExprSyntax")]),
        ));
        assert_eq!(
            validate_node(&node),
            Err(GrammarError::DegenerateNodeChoice {
                node: "TestSyntax".to_string(),
                child: "value".to_string(),
                alternatives: 1,
            })
        );
    }

    #[test]
    fn nested_choice_alternatives_are_checked() {
        let node = node_with(Child::new(
            "value",
            ChildKind::choice(vec![
                ChildKind::node("ExprSyntax"),
                ChildKind::token_set(vec![]),
            ]),
        ));
        assert_eq!(
            validate_node(&node),
            Err(GrammarError::EmptyTokenSet {
                node: "TestSyntax".to_string(),
                child: "value".to_string(),
            })
        );
    }

    #[test]
    fn unnamed_child_is_rejected() {
        let node = node_with(Child::new("", ChildKind::node("ExprSyntax")));
        assert_eq!(
            validate_node(&node),
            Err(GrammarError::UnnamedChild {
                node: "TestSyntax".to_string(),
                index: 0,
            })
        );
    }
}
