//! CLI argument parsing and command handling.

mod args;
mod validators;

pub use args::{BrowseArgs, Cli, Command, ConfigAction, GlobalArgs, OutputMode, ShowArgs};
