mod commands;

pub use commands::{update, Cli};
