//! Test support engines
//!
//! Engines that record every call the harness makes, for asserting on
//! call counts, tree threading, and edit-set contents without a real
//! parser. Also useful to downstream engine implementers for testing
//! their own drivers.

use crate::engine::{EditSet, EngineError, ParseEngine};
use std::cell::Cell;

/// Everything observable about one parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub source: Vec<u8>,
    /// Id of the previous tree the call received, if any.
    pub previous_tree: Option<u64>,
    /// Number of edits in the received edit set, if one was passed.
    pub edit_count: Option<usize>,
    /// Id of the collector the call received, if any.
    pub collector: Option<u64>,
}

/// An opaque stand-in tree carrying only an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubTree {
    pub id: u64,
}

/// An opaque stand-in collector carrying only an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubCollector {
    pub id: u64,
}

/// An engine that records calls and returns numbered stub trees.
///
/// Tree ids count up from zero in call order, so a test can check that
/// iteration K+1 received exactly the tree iteration K produced.
/// Setting `fail_at` makes that call (zero-based) return an error.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Vec<RecordedCall>,
    pub fail_at: Option<usize>,
    trees_created: u64,
    collectors_created: Cell<u64>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose `index`-th parse call (zero-based) fails.
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }
}

impl ParseEngine for RecordingEngine {
    type Tree = StubTree;
    type Collector = StubCollector;

    fn new_collector(&self) -> StubCollector {
        let id = self.collectors_created.get();
        self.collectors_created.set(id + 1);
        StubCollector { id }
    }

    fn parse(
        &mut self,
        source: &[u8],
        previous_tree: Option<&StubTree>,
        edits: Option<&EditSet>,
        collector: Option<&mut StubCollector>,
    ) -> Result<StubTree, EngineError> {
        if self.fail_at == Some(self.calls.len()) {
            return Err(EngineError::new("injected engine failure"));
        }
        self.calls.push(RecordedCall {
            source: source.to_vec(),
            previous_tree: previous_tree.map(|tree| tree.id),
            edit_count: edits.map(EditSet::len),
            collector: collector.map(|collector| collector.id),
        });
        let id = self.trees_created;
        self.trees_created += 1;
        Ok(StubTree { id })
    }
}
