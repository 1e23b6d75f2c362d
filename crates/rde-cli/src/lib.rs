//! RDE dataset template generator CLI.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
