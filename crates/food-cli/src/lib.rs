//! Command-line front end for the food database builder.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;
