//! Command-line front end: one function per `rgraph` subcommand.

pub mod commands;
