mod environment;

pub use environment::*;
