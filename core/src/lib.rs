pub mod directory;
pub mod error;

pub use directory::StationDirectory;
pub use error::{DirectoryError, Error, Result};
