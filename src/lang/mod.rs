/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language:
splitting statements into words, classifying words, and reading
numbered program lines.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use token::Token;

/// User-facing statement label. Distinct from the execution position.
pub type LineNumber = u32;
