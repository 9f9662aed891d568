//! Command-line interface for arbor
//! This binary is used to render grammar documentation and to benchmark
//! parsing engines over a source corpus.
//!
//! Usage:
//!   arbor grammar-docs `<path>` [--node `<name>`]           - Render markdown grammar docs
//!   arbor performance-test --directory `<dir>` --iterations `<n>` [--incremental-parse]

use clap::{Arg, ArgAction, Command};
use std::path::Path;

mod engine;

fn main() {
    let matches = Command::new("arbor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Developer tooling for syntax-tree grammars")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("grammar-docs")
                .about("Render markdown grammar documentation from a grammar definition file")
                .arg(
                    Arg::new("path")
                        .help("Path to the grammar definition JSON")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("node")
                        .long("node")
                        .help("Render only the node type with this name"),
                ),
        )
        .subcommand(
            Command::new("performance-test")
                .about(
                    "Parse all source files in --directory and its subdirectories --iterations \
                     times and output the average time (in milliseconds) one iteration took",
                )
                .arg(
                    Arg::new("directory")
                        .long("directory")
                        .help("The directory in which all source files should be parsed")
                        .required(true),
                )
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .help("How many times should the directory be parsed?")
                        .required(true)
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("incremental-parse")
                        .long("incremental-parse")
                        .help("Parse files incrementally")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("extension")
                        .long("extension")
                        .help("File extension of the sources to parse")
                        .default_value("rs"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("grammar-docs", sub)) => {
            let path = sub.get_one::<String>("path").expect("path is required");
            let node = sub.get_one::<String>("node").map(String::as_str);
            handle_grammar_docs_command(path, node);
        }
        Some(("performance-test", sub)) => {
            let directory = sub
                .get_one::<String>("directory")
                .expect("directory is required");
            let iterations = *sub
                .get_one::<u32>("iterations")
                .expect("iterations is required");
            let incremental = sub.get_flag("incremental-parse");
            let extension = sub
                .get_one::<String>("extension")
                .expect("extension has a default");
            handle_performance_test_command(directory, iterations, incremental, extension);
        }
        _ => unreachable!("a subcommand is required"),
    }
}

/// Handle the grammar-docs command
fn handle_grammar_docs_command(path: &str, node_filter: Option<&str>) {
    use arbor_grammar::render::node_grammar;
    use arbor_grammar::validate::validate_node;
    use arbor_grammar::NodeSpec;

    let source = std::fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Failed to read {}: {}", path, err);
        std::process::exit(1);
    });
    let nodes: Vec<NodeSpec> = serde_json::from_str(&source).unwrap_or_else(|err| {
        eprintln!("Invalid grammar definition in {}: {}", path, err);
        std::process::exit(1);
    });
    for node in &nodes {
        if let Err(err) = validate_node(node) {
            eprintln!("Invalid grammar definition in {}: {}", path, err);
            std::process::exit(1);
        }
    }

    let selected: Vec<&NodeSpec> = match node_filter {
        Some(name) => {
            let found: Vec<&NodeSpec> = nodes.iter().filter(|node| node.name == name).collect();
            if found.is_empty() {
                eprintln!("No node type named '{}' in {}", name, path);
                std::process::exit(1);
            }
            found
        }
        None => nodes.iter().collect(),
    };

    let docs = selected
        .iter()
        .map(|node| node_grammar(node))
        .collect::<Vec<_>>()
        .join("\n\n");
    println!("{}", docs);
}

/// Handle the performance-test command
fn handle_performance_test_command(
    directory: &str,
    iterations: u32,
    incremental: bool,
    extension: &str,
) {
    use arbor_bench::{corpus, harness, BenchOptions};

    let mut engine = engine::RustEngine::new().unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });
    let corpus = corpus::discover(Path::new(directory), extension).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });
    let options = BenchOptions {
        iterations,
        incremental,
    };
    let report = harness::run(&mut engine, &corpus, &options).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    println!("Time:         {}ms", report.mean_time_ms);
    if let Some(instructions) = report.mean_instructions {
        println!("Instructions: {}", instructions);
    }
}
