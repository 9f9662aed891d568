//! # arbor-bench
//!
//! A wall-clock and instruction-count harness for parsing engines.
//!
//! The harness repeatedly parses a corpus of source files and reports the
//! average time one pass over the corpus took. Engines plug in through
//! the narrow [engine::ParseEngine] interface; the harness knows nothing
//! about trees beyond holding on to them between iterations. With
//! incremental measurement enabled, each parse after the first pass over
//! a file is handed the previous tree and an empty edit set, which
//! measures the engine's reuse bookkeeping under a no-op edit rather
//! than true edit-driven reparsing.
//!
//! The harness is strictly sequential: a file's parse in iteration K+1
//! depends on the tree its parse in iteration K produced. Engine
//! failures and I/O failures abort the run; no partial metrics survive.

pub mod corpus;
pub mod engine;
pub mod error;
pub mod harness;
pub mod instructions;
pub mod testing;

pub use corpus::SourceFile;
pub use engine::{EditSet, EngineError, ParseEngine, SourceEdit};
pub use error::BenchError;
pub use harness::{run, BenchOptions, BenchReport};
