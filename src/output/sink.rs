//! Collaborator interfaces for diagnostics and results
//!
//! The core hands search outcomes and informational messages to these two
//! narrow contracts; the terminal implementations below are what the CLI
//! wires in. Tests substitute recording sinks.

use crate::core::Word;
use colored::Colorize;

/// Receives informational messages (e.g. the startup dictionary count)
pub trait DiagnosticSink {
    fn info(&mut self, message: &str);
}

/// Receives one search outcome: an ordered word sequence or "no results"
pub trait ResultSink {
    fn results(&mut self, words: &[Word]);
    fn no_results(&mut self);
}

/// Diagnostic sink printing dimmed lines to the terminal
#[derive(Debug, Default)]
pub struct TerminalDiagnostics;

impl DiagnosticSink for TerminalDiagnostics {
    fn info(&mut self, message: &str) {
        println!("{}", message.bright_black());
    }
}

/// Result sink printing one word per line, matches longest first
#[derive(Debug, Default)]
pub struct TerminalResults;

impl ResultSink for TerminalResults {
    fn results(&mut self, words: &[Word]) {
        let joined = words
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join("\n");
        println!("{joined}");
    }

    fn no_results(&mut self) {
        println!("{}", "no results found".yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording {
        lines: Vec<String>,
        no_results_calls: usize,
    }

    impl ResultSink for Recording {
        fn results(&mut self, words: &[Word]) {
            self.lines.extend(words.iter().map(|w| w.text().to_string()));
        }

        fn no_results(&mut self) {
            self.no_results_calls += 1;
        }
    }

    impl DiagnosticSink for Recording {
        fn info(&mut self, message: &str) {
            self.lines.push(message.to_string());
        }
    }

    #[test]
    fn result_sink_receives_ordered_words() {
        let mut sink = Recording::default();
        let words = vec![Word::new("CAT").unwrap(), Word::new("AT").unwrap()];

        sink.results(&words);

        assert_eq!(sink.lines, vec!["CAT", "AT"]);
        assert_eq!(sink.no_results_calls, 0);
    }

    #[test]
    fn no_results_is_signalled_explicitly() {
        let mut sink = Recording::default();
        sink.no_results();
        assert_eq!(sink.no_results_calls, 1);
        assert!(sink.lines.is_empty());
    }

    #[test]
    fn diagnostic_sink_receives_messages() {
        let mut sink = Recording::default();
        sink.info("indexed 4 dictionary entries");
        assert_eq!(sink.lines, vec!["indexed 4 dictionary entries"]);
    }
}
