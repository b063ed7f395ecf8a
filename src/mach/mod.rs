/*!
## Rust Machine Module

This Rust module links, evaluates and runs TL programs.

*/

mod eval;
mod link;
mod operation;
mod options;
mod program;
mod runtime;
mod var;

pub use eval::eval;
pub use link::Link;
pub use operation::Operation;
pub use options::Options;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;
