//! The parsing engine interface the harness drives
//!
//! The harness consumes an engine, it never implements one. The seam is
//! deliberately narrow: one parse entry point taking the source bytes,
//! an optional previous tree, an optional edit set, and an optional
//! affected-range collector. What a tree or a collector actually is
//! stays opaque to the harness; it only stores them between iterations
//! and hands them back.

use std::fmt;

/// One textual edit: `old_len` bytes at `start` replaced by `new_len`
/// new bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceEdit {
    pub start: usize,
    pub old_len: usize,
    pub new_len: usize,
}

/// An ordered set of edits to apply before reparsing.
///
/// The harness only ever constructs the empty set: incremental
/// measurement signals "no textual change, but run the reuse
/// bookkeeping". Engines still receive the set so that other drivers
/// can describe real edits through the same interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSet {
    edits: Vec<SourceEdit>,
}

impl EditSet {
    /// The empty edit set.
    pub fn none() -> Self {
        Self::default()
    }

    /// An edit set from edits in application order.
    pub fn from_sequential(edits: Vec<SourceEdit>) -> Self {
        Self { edits }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceEdit> {
        self.edits.iter()
    }
}

/// A failure reported by the parsing engine.
#[derive(Debug, Clone)]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EngineError {}

/// A parsing engine the harness can measure.
pub trait ParseEngine {
    /// The syntax tree the engine produces.
    type Tree;

    /// The engine's affected-range collector: bookkeeping for which
    /// source regions incremental reparsing touched.
    type Collector;

    /// A fresh collector for a file the harness has not seen yet.
    fn new_collector(&self) -> Self::Collector;

    /// Parse `source` into a tree.
    ///
    /// `previous_tree` and `edits` are present together when the driver
    /// requests incremental reparsing; `collector` is present whenever
    /// the driver wants affected-range bookkeeping. An error aborts the
    /// harness run.
    fn parse(
        &mut self,
        source: &[u8],
        previous_tree: Option<&Self::Tree>,
        edits: Option<&EditSet>,
        collector: Option<&mut Self::Collector>,
    ) -> Result<Self::Tree, EngineError>;
}
