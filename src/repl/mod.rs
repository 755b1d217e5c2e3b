mod repl;

pub use repl::*;
