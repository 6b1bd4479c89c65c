//! Terminal shell over the gofinances core: a line editor in interactive mode,
//! stdin commands in script mode.

mod commands;
pub mod context;
pub mod error;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
pub mod render;
mod shell;

#[cfg(test)]
mod tests;

pub use context::{CliMode, ShellContext};
pub use error::{CliError, CommandError};
pub use shell::run_cli;
