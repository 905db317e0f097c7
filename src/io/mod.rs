/// Command-line interface and batch file processing
pub mod cli;
/// Puzzle constants and runtime defaults
pub mod configuration;
/// Error types and result aliases
pub mod error;
/// Synthetic puzzle generation
pub mod generator;
/// PNG export of reconstructed images
pub mod image;
/// Puzzle text parsing
pub mod parser;
/// Progress display for batch runs
pub mod progress;
