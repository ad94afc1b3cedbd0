//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod models;
pub mod output;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use matching::hybrid::{HybridMatcher, HybridResult};
pub use matching::lexical::{lexical_match, missing_keywords, MatchResult};
pub use matching::semantic::{EmbeddingHandle, SemanticMatcher, SemanticResult};
