//! CLI module for nexttask - command-line arguments.

pub mod commands;

pub use commands::Cli;
