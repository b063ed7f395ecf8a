//! # TL
//!
//! A tiny line-oriented scripting language with numbers, labels
//! and not much else.
//!
//! The library takes program text and runs it. The `tl` binary wraps it
//! with a command line, a terminal and Ctrl-C handling.
//!
//! ```
//! use tl::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.load("let x = 3 + 4\nprint \"sum:\", x").unwrap();
//! assert_eq!(runtime.execute(100), Event::Print("sum: 7\n".to_string()));
//! assert_eq!(runtime.execute(100), Event::Stopped);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod lang;
pub mod mach;
