//! Markdown grammar rendering
//!
//! Turns grammar definitions into single-line markdown grammar fragments
//! and bullet lists. Rendering is a total, side-effect-free mapping: it
//! never fails, and out-of-contract inputs (such as a node choice with a
//! single alternative) are rendered by the same rules rather than
//! rejected.
//!
//! Notation:
//! - keywords and fixed-text tokens: `'text'` in backticks
//! - tokens without fixed text: `<displayName>` in backticks
//! - node references: the type name in double backticks (a doc
//!   cross-reference in the generated markdown)
//! - alternatives: joined with `|` and parenthesized
//! - optional slots: a trailing `?`
//!
//! Collections render identically to single node references; repetition
//! is not visually distinguished in the grammar summary. Downstream
//! documentation depends on this format, so it stays.

use crate::model::{Child, ChildKind, NodeSpec, TokenChoice};

/// Grammar text for a single token alternative.
pub fn token_choice_grammar(choice: &TokenChoice) -> String {
    match choice {
        TokenChoice::Keyword { name } => format!("`'{name}'`"),
        TokenChoice::Token {
            text: Some(text), ..
        } => format!("`'{text}'`"),
        TokenChoice::Token {
            text: None,
            display_name,
        } => format!("`<{display_name}>`"),
    }
}

/// Grammar text for a child's kind, without the optionality marker.
pub fn child_kind_grammar(kind: &ChildKind) -> String {
    match kind {
        ChildKind::Node { node_type } => format!("``{node_type}``"),
        ChildKind::NodeChoice { alternatives } => {
            let descriptions: Vec<String> = alternatives.iter().map(child_kind_grammar).collect();
            format!("({})", descriptions.join(" | "))
        }
        // Repetition is not distinguished from a single reference here.
        ChildKind::Collection { element_type } => format!("``{element_type}``"),
        ChildKind::TokenSet { choices } => {
            if choices.len() == 1 {
                token_choice_grammar(&choices[0])
            } else {
                let descriptions: Vec<String> = choices.iter().map(token_choice_grammar).collect();
                format!("({})", descriptions.join(" | "))
            }
        }
    }
}

/// Grammar text for a child slot, with a trailing `?` when optional.
pub fn child_grammar(child: &Child) -> String {
    let optionality = if child.is_optional { "?" } else { "" };
    format!("{}{}", child_kind_grammar(&child.kind), optionality)
}

/// A markdown bullet list with one line per child: its name and grammar.
///
/// Unexpected-nodes placeholders are filtered out. Lines are joined with
/// newlines, without a trailing newline; when every child is filtered
/// out the result is empty.
pub fn children_list(children: &[Child]) -> String {
    children
        .iter()
        .filter(|child| !child.is_unexpected_nodes)
        .map(|child| format!(" - `{}`: {}", child.name, child_grammar(child)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The list of possible token kinds for a token-typed child.
///
/// A single choice renders inline behind one leading space; multiple
/// choices render as a bullet list. Children of any other kind render as
/// the empty string.
pub fn child_token_choices(child: &Child) -> String {
    match &child.kind {
        ChildKind::TokenSet { choices } => {
            if choices.len() == 1 {
                format!(" {}", token_choice_grammar(&choices[0]))
            } else {
                choices
                    .iter()
                    .map(|choice| format!(" - {}", token_choice_grammar(choice)))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        _ => String::new(),
    }
}

/// A markdown section for one node type: a heading followed by the
/// children list, or the heading alone when the node has no visible
/// children.
pub fn node_grammar(node: &NodeSpec) -> String {
    let children = children_list(&node.children);
    if children.is_empty() {
        format!("### {}", node.name)
    } else {
        format!("### {}\n\n{}", node.name, children)
    }
}
