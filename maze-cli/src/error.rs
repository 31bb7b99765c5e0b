//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Maze input could not be parsed
    #[error("Invalid maze: {0}")]
    Parse(#[from] maze_search::ParseError),

    /// Search error
    #[error("Search failed: {0}")]
    Search(#[from] maze_search::SearchError),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
}
