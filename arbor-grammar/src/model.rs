//! Grammar model for syntax node definitions
//!
//! These types describe what each named child slot of a syntax node may
//! hold: a single node of a given type, one of several node alternatives,
//! a collection of nodes, or one token drawn from a fixed set of lexical
//! alternatives.
//!
//! Everything here is immutable value data. A definition is constructed
//! once by a grammar authoring step and consumed read-only by rendering
//! and validation. There is no identity beyond value equality and no
//! ownership graph beyond plain tree containment: a [Child] owns its
//! [ChildKind], which may own nested kinds for choices.
//!
//! Ordering of token choices and node alternatives is significant and is
//! preserved verbatim by every consumer. Authors control presentation
//! order by construction order.

use serde::{Deserialize, Serialize};

/// A single acceptable lexical alternative for a token-typed child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenChoice {
    /// A reserved word. Renders as its literal spelling.
    Keyword {
        /// The keyword's spelling (e.g. `if`, `return`).
        name: String,
    },
    /// A punctuation or operator token. If the token has fixed literal
    /// text it renders as that text, otherwise as a named placeholder.
    #[serde(rename_all = "camelCase")]
    Token {
        /// Fixed literal text, when the token always spells the same way.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        /// Name used as a placeholder when there is no fixed text.
        display_name: String,
    },
}

impl TokenChoice {
    /// A keyword alternative.
    pub fn keyword(name: impl Into<String>) -> Self {
        TokenChoice::Keyword { name: name.into() }
    }

    /// A token alternative with fixed literal text.
    pub fn token(text: impl Into<String>, display_name: impl Into<String>) -> Self {
        TokenChoice::Token {
            text: Some(text.into()),
            display_name: display_name.into(),
        }
    }

    /// A token alternative without fixed text (e.g. identifiers),
    /// rendered as a named placeholder.
    pub fn placeholder(display_name: impl Into<String>) -> Self {
        TokenChoice::Token {
            text: None,
            display_name: display_name.into(),
        }
    }
}

/// What a child slot of a syntax node may hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChildKind {
    /// Exactly one child of a specific node type.
    #[serde(rename_all = "camelCase")]
    Node {
        /// The referenced node type name.
        node_type: String,
    },
    /// Exactly one of several node-typed alternatives.
    ///
    /// Well-formed definitions have at least two alternatives; a
    /// single-alternative choice degenerates to [ChildKind::Node] and is
    /// never constructed by grammar authoring. Consumers still handle it.
    #[serde(rename_all = "camelCase")]
    NodeChoice {
        /// The alternatives, in presentation order.
        alternatives: Vec<ChildKind>,
    },
    /// Zero or more repetitions of a node type.
    #[serde(rename_all = "camelCase")]
    Collection {
        /// The element node type name.
        element_type: String,
    },
    /// Exactly one lexical token drawn from a fixed, non-empty set of
    /// alternatives.
    #[serde(rename_all = "camelCase")]
    TokenSet {
        /// The acceptable tokens, in presentation order.
        choices: Vec<TokenChoice>,
    },
}

impl ChildKind {
    /// A reference to a single node type.
    pub fn node(node_type: impl Into<String>) -> Self {
        ChildKind::Node {
            node_type: node_type.into(),
        }
    }

    /// A choice between several node-typed alternatives.
    pub fn choice(alternatives: Vec<ChildKind>) -> Self {
        ChildKind::NodeChoice { alternatives }
    }

    /// A collection of nodes of one element type.
    pub fn collection(element_type: impl Into<String>) -> Self {
        ChildKind::Collection {
            element_type: element_type.into(),
        }
    }

    /// A token slot with a fixed set of acceptable tokens.
    pub fn token_set(choices: Vec<TokenChoice>) -> Self {
        ChildKind::TokenSet { choices }
    }
}

/// A named slot on a syntax node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    /// The slot's name as it appears in documentation.
    pub name: String,

    /// What the slot may hold.
    pub kind: ChildKind,

    /// Whether the slot may be absent.
    #[serde(default, rename = "optional")]
    pub is_optional: bool,

    /// Marks synthetic error-recovery slots. These carry no grammar
    /// meaning and never appear in rendered output.
    #[serde(default, rename = "unexpected")]
    pub is_unexpected_nodes: bool,
}

impl Child {
    /// A required, regular child slot.
    pub fn new(name: impl Into<String>, kind: ChildKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_optional: false,
            is_unexpected_nodes: false,
        }
    }

    /// Mark the slot as optional.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Mark the slot as a synthetic error-recovery placeholder.
    pub fn unexpected(mut self) -> Self {
        self.is_unexpected_nodes = true;
        self
    }
}

/// One syntax node type's definition: its name and its child slots.
///
/// This is the unit the documentation generator iterates over. A grammar
/// definition file is a JSON array of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// The node type name (e.g. `BinaryExprSyntax`).
    pub name: String,

    /// The node's child slots, in declaration order.
    pub children: Vec<Child>,
}

impl NodeSpec {
    /// A node definition with the given children.
    pub fn new(name: impl Into<String>, children: Vec<Child>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}
