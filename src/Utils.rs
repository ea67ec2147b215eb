//! different utility modules used throughout the project
/// read settings of the demonstration driver from a TOML document
pub mod config;
/// set up terminal (and optionally file) logging on top of the log facade
pub mod logger;
