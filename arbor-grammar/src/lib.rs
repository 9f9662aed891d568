//! # arbor-grammar
//!
//! Grammar definitions for arbor syntax node types, and the rendering of
//! those definitions into human-readable markdown.
//!
//! The crate has three parts:
//!
//! - [model]: the value types describing a node's children and their token
//!   alternatives. These are authored elsewhere (by hand or by a grammar
//!   authoring step) and consumed read-only here. They can be stored as
//!   JSON through serde.
//! - [render]: pure functions turning grammar definitions into markdown
//!   grammar summaries. Rendering is total; every well-typed input
//!   produces well-formed output.
//! - [validate]: advisory well-formedness checks for grammar authors.
//!   The renderer itself never validates and never fails.
//!
//! The rendered output is consumed by an offline documentation generation
//! step, typically one markdown fragment per syntax node type.

#![allow(rustdoc::invalid_html_tags)]

pub mod model;
pub mod render;
pub mod validate;

pub use model::{Child, ChildKind, NodeSpec, TokenChoice};
