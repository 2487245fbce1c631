use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Invalid game record: {0}")]
    InvalidRecord(String),
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Progress bar error: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, GameError>;
