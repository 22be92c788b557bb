/*
[INPUT]:  Public API exports for the tradeogre-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod command;
pub mod config;

pub use command::{Clients, Command};
pub use config::CliConfig;
