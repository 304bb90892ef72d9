//! Display functions for command results

use crate::commands::{BenchmarkResult, FindResult};
use crate::core::Word;
use colored::Colorize;

/// Print the result of a find invocation
pub fn print_find_result(result: &FindResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Query: {}", result.query.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.hits.is_empty() {
        println!("\n{}\n", "no results found".yellow());
        return;
    }

    if verbose {
        // Group hits under a heading per word length
        let mut current_len = 0;
        for hit in &result.hits {
            if hit.len() != current_len {
                current_len = hit.len();
                let count = result.hits.iter().filter(|w| w.len() == current_len).count();
                println!(
                    "\n{}",
                    format!("{current_len} letters ({count}):").bright_cyan().bold()
                );
            }
            println!("  {hit}");
        }
        println!();
    } else {
        println!();
        for hit in &result.hits {
            println!("{hit}");
        }
        println!();
    }

    println!(
        "{}",
        format!(
            "{} hits in {:.2} ms",
            result.hits.len(),
            result.duration.as_secs_f64() * 1000.0
        )
        .bright_black()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!(
        "   Queries/second:   {}",
        format!("{:.1}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Hits:".bright_cyan().bold());
    println!("   Total hits:       {}", result.total_hits);
    println!("   Average per query: {:.1}", result.average_hits);
    println!(
        "   Fewest:           {}",
        format!("{}", result.min_hits).yellow()
    );
    println!(
        "   Most:             {}",
        format!("{}", result.max_hits).green()
    );
}

/// Render hits the way the result sink does, for callers that want a string
#[must_use]
pub fn join_hits(hits: &[Word]) -> String {
    hits.iter().map(Word::text).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_hits_is_newline_separated() {
        let hits = vec![
            Word::new("ACT").unwrap(),
            Word::new("CAT").unwrap(),
            Word::new("AT").unwrap(),
        ];
        assert_eq!(join_hits(&hits), "ACT\nCAT\nAT");
    }

    #[test]
    fn join_hits_empty() {
        assert_eq!(join_hits(&[]), "");
    }
}
