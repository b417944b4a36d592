pub mod commands;

pub use commands::{Cli, execute, run};
