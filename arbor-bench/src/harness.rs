//! The measurement loop
//!
//! Parses every corpus file once per iteration, accumulating wall-clock
//! time around the parse calls only. Trees and collectors are cached
//! per file, keyed by raw file content, in a map that lives for exactly
//! one run. With incremental measurement enabled, iterations after the
//! first hand the engine the cached tree and an empty edit set; the
//! first iteration of a file never sees a previous tree.

use crate::corpus::SourceFile;
use crate::engine::{EditSet, ParseEngine};
use crate::error::BenchError;
use crate::instructions;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// What to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchOptions {
    /// How many passes over the corpus to time.
    pub iterations: u32,
    /// Whether to exercise the engine's incremental-reparse path.
    pub incremental: bool,
}

/// Aggregated measurements for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    /// Number of files in the corpus.
    pub files: usize,
    /// Total parse calls made (files × iterations).
    pub parses: usize,
    /// Mean wall-clock time of one pass over the corpus, in milliseconds.
    pub mean_time_ms: f64,
    /// Mean CPU instructions one pass executed, where the host exposes a
    /// counter. Absent, not zero, when unsupported.
    pub mean_instructions: Option<f64>,
}

/// Parse `corpus` `options.iterations` times with `engine` and report
/// aggregate timings.
///
/// Zero iterations and an empty corpus are rejected up front; the mean
/// would otherwise divide by zero. Any engine failure aborts the run.
pub fn run<E: ParseEngine>(
    engine: &mut E,
    corpus: &[SourceFile],
    options: &BenchOptions,
) -> Result<BenchReport, BenchError> {
    if options.iterations == 0 {
        return Err(BenchError::InvalidInput(
            "iterations must be greater than zero".to_string(),
        ));
    }
    if corpus.is_empty() {
        return Err(BenchError::InvalidInput(
            "no source files to parse".to_string(),
        ));
    }

    let mut cache: HashMap<Vec<u8>, (E::Tree, E::Collector)> = HashMap::new();
    let mut total_time = Duration::ZERO;
    let mut parses = 0usize;
    let start_instructions = instructions::executed();

    for iteration in 0..options.iterations {
        for file in corpus {
            let cached = if options.incremental {
                cache.remove(&file.contents)
            } else {
                None
            };
            let (cached_tree, mut collector) = match cached {
                Some((tree, collector)) => (Some(tree), Some(collector)),
                None if options.incremental => (None, Some(engine.new_collector())),
                None => (None, None),
            };
            // Reuse only kicks in after the first pass over a file, and
            // the edit set it ships is always empty: this measures the
            // engine's no-op reuse bookkeeping, not real edit cost.
            let previous_tree = if iteration == 0 { None } else { cached_tree.as_ref() };
            let edits = if options.incremental && iteration != 0 {
                Some(EditSet::none())
            } else {
                None
            };

            let started = Instant::now();
            let tree = engine
                .parse(&file.contents, previous_tree, edits.as_ref(), collector.as_mut())
                .map_err(|err| BenchError::Engine {
                    message: err.to_string(),
                })?;
            total_time += started.elapsed();
            parses += 1;

            if let Some(collector) = collector {
                cache.insert(file.contents.clone(), (tree, collector));
            }
        }
    }

    let end_instructions = instructions::executed();
    let mean_instructions = match (start_instructions, end_instructions) {
        (Some(start), Some(end)) if end > start => {
            Some((end - start) as f64 / f64::from(options.iterations))
        }
        _ => None,
    };

    Ok(BenchReport {
        files: corpus.len(),
        parses,
        mean_time_ms: total_time.as_secs_f64() * 1000.0 / f64::from(options.iterations),
        mean_instructions,
    })
}
