use std::path::PathBuf;
use thiserror::Error;


#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathPlannerError {
    /// A node is referenced but has no coordinate entry
    #[error("no coordinate for node '{0}'")]
    MissingCoordinate(String),
    /// Start or destination is not part of the graph
    #[error("node '{0}' is not in the graph")]
    UnknownNode(String),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    #[error("line {line}: '{value}' is not a number")]
    InvalidNumber { line: usize, value: String },
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Error. Select a number from 0 to {}", .bound.saturating_sub(1))]
    NotANumber { bound: usize },
    #[error("Error. Select a number from 0 to {}", .bound.saturating_sub(1))]
    OutOfRange { bound: usize },
    #[error("there are no locations to choose from")]
    NoOptions,
    #[error("input closed before a location was selected")]
    EndOfInput,
    #[error("failed to read selection: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format svg")]
    Format(#[from] std::fmt::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
