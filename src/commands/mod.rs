//! Command implementations

pub mod benchmark;
pub mod find;
pub mod interactive;

pub use benchmark::{BenchmarkResult, random_racks, run_benchmark};
pub use find::{FindResult, find_words};
pub use interactive::run_interactive;
