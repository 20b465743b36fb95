// Library module for hash_replicable
// Re-exports modules for use in integration tests and the command-line tool

pub mod config;
pub mod hash;
