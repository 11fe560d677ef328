//! Text analysis: char filters, tokenizers, token filters and the analyzers
//! that chain them.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, CleaningAnalyzer, PipelineAnalyzer};
pub use char_filter::{CharFilter, Transformation};
pub use token::{Token, TokenStream, TokenType};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;
