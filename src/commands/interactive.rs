//! Simple interactive CLI mode
//!
//! Text-based interactive search loop without TUI.

use crate::output::{DiagnosticSink, ResultSink, TerminalDiagnostics, TerminalResults};
use crate::search::SearchEngine;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_interactive(engine: &SearchEngine) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Anagram Finder - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter letters and I'll list every dictionary word they can form.");
    println!("  - Use ? as a wildcard for any letter (e.g. C?T)");
    println!("  - Results come longest first, alphabetical within a length\n");
    println!("Commands: 'quit' to exit, 'help' to show this again\n");

    let mut diagnostics = TerminalDiagnostics;
    let mut results = TerminalResults;

    loop {
        let input = get_user_input("Letters")?;

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            "help" | "h" => {
                println!("\nEnter letters to search; ? is a wildcard; 'quit' exits.\n");
                continue;
            }
            _ => {}
        }

        let start = Instant::now();
        let hits = engine.search(&input);
        let elapsed = start.elapsed();

        println!();
        if hits.is_empty() {
            results.no_results();
        } else {
            results.results(&hits);
        }
        diagnostics.info(&format!(
            "{} hits in {:.2} ms",
            hits.len(),
            elapsed.as_secs_f64() * 1000.0
        ));
        println!();
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
