mod builtins;

pub use builtins::*;
