//! Tree-sitter backed parse engine
//!
//! Adapts a [tree_sitter::Parser] for the Rust grammar to the harness's
//! engine interface. Previous trees are handed to tree-sitter for node
//! reuse; the affected-range collector accumulates the ranges
//! tree-sitter reports as changed between the previous and the new
//! tree. Edit application is out of scope for this adapter: the harness
//! only ever sends the empty edit set, and a non-empty one is refused.

use arbor_bench::{EditSet, EngineError, ParseEngine};
use tree_sitter::{Parser, Tree};

/// Accumulated ranges that incremental reparsing touched.
#[derive(Debug, Default)]
pub struct AffectedRanges {
    ranges: Vec<tree_sitter::Range>,
}

impl AffectedRanges {
    pub fn record(&mut self, ranges: impl Iterator<Item = tree_sitter::Range>) {
        self.ranges.extend(ranges);
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// A parse engine for Rust sources.
pub struct RustEngine {
    parser: Parser,
}

impl RustEngine {
    pub fn new() -> Result<Self, EngineError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_rust::LANGUAGE.into())
            .map_err(|err| EngineError::new(format!("failed to load Rust grammar: {err}")))?;
        Ok(Self { parser })
    }
}

impl ParseEngine for RustEngine {
    type Tree = Tree;
    type Collector = AffectedRanges;

    fn new_collector(&self) -> AffectedRanges {
        AffectedRanges::default()
    }

    fn parse(
        &mut self,
        source: &[u8],
        previous_tree: Option<&Tree>,
        edits: Option<&EditSet>,
        collector: Option<&mut AffectedRanges>,
    ) -> Result<Tree, EngineError> {
        if let Some(edits) = edits {
            if !edits.is_empty() {
                return Err(EngineError::new(
                    "edit application is not supported by the Rust engine",
                ));
            }
        }
        let tree = self
            .parser
            .parse(source, previous_tree)
            .ok_or_else(|| EngineError::new("parser produced no tree"))?;
        if let (Some(previous), Some(collector)) = (previous_tree, collector) {
            collector.record(previous.changed_ranges(&tree));
        }
        Ok(tree)
    }
}
