use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("station list not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("malformed station list: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
