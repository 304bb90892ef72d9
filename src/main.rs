//! Anagram Finder - CLI
//!
//! Finds every dictionary word formable from a set of letters, with one-shot,
//! REPL, and live TUI modes.

use anagram_finder::{
    commands::{find_words, random_racks, run_benchmark, run_interactive},
    core::Word,
    index::DictionaryIndex,
    interactive::{App, run_tui},
    output::{DiagnosticSink, TerminalDiagnostics, print_benchmark_result, print_find_result},
    search::SearchEngine,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "anagram_finder",
    about = "Find every dictionary word formable from your letters (? = wildcard)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - results update as you type)
    Play,

    /// Simple CLI mode (interactive loop without TUI)
    Simple,

    /// Find all words formable from the given letters
    Find {
        /// The letters to search; use ? as a wildcard
        letters: String,

        /// Group results by word length with counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark search throughput on random letter racks
    Benchmark {
        /// Number of random racks to search
        #[arg(short = 'n', long, default_value = "500")]
        count: usize,

        /// Extra random letters mixed into each rack
        #[arg(short = 'x', long, default_value = "2")]
        extra: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// "embedded" uses the word list compiled into the binary; anything else is
/// treated as a file path. A missing or unreadable file is fatal: there is
/// no partial index.
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read dictionary {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_dictionary(&cli.wordlist)?;
    let index = DictionaryIndex::build(words.iter().cloned());

    let mut diagnostics = TerminalDiagnostics;
    diagnostics.info(&format!("indexed {} dictionary entries", index.len()));

    let engine = SearchEngine::new(&index);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(engine)),
        Commands::Simple => run_interactive(&engine).map_err(|e| anyhow::anyhow!(e)),
        Commands::Find { letters, verbose } => {
            let result = find_words(&engine, &letters);
            print_find_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count, extra } => {
            println!("Running benchmark on {count} random racks ({extra} extra letters each)...");
            let racks = random_racks(&words, count, extra);
            let result = run_benchmark(&engine, &racks);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
