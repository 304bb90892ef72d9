//! Core domain types
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure and directly testable.

mod query;
mod word;

pub use query::{ALPHABET, Expansions, Query, WILDCARD};
pub use word::{Word, WordError};
