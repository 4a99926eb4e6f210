use serde::Deserialize;
use std::path::Path;

use crate::error::DirectoryError;

/// Ordered list of destination names backing one search session.
///
/// Provisioned once (e.g. from a `stations.toml` shipped with the machine)
/// and read-only afterwards: every search filters against the same entries,
/// in the same order. Entries are plain strings with no constraints; an
/// empty list is a valid directory that simply matches nothing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct StationDirectory {
    stations: Vec<String>,
}

impl StationDirectory {
    pub fn new(stations: Vec<String>) -> Self {
        Self { stations }
    }

    /// Parses a TOML document with a top-level `stations` array.
    ///
    /// A document without the `stations` key is rejected: a missing data
    /// source is a provisioning error, not an empty directory.
    pub fn from_toml_str(content: &str) -> Result<Self, DirectoryError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the directory from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        if !path.exists() {
            return Err(DirectoryError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl FromIterator<String> for StationDirectory {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for StationDirectory {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

#[cfg(test)]
mod tests;
