/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the TL language.

*/

/// 1-based position of a line in the source file.
pub type LineNumber = usize;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::number;
pub use line::Line;
pub use parse::expression;
pub use parse::parse;
pub use token::Operator;
pub use token::Word;

pub mod ast;
