//! Revocable references to user-supplied files.
//!
//! An [`ObjectUrl`] stands in for a file's bytes until it is revoked. The
//! registry is the only place that maps URLs back to paths.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

const SCHEME: &str = "blob:groove/";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    next: u64,
    live: HashMap<ObjectUrl, PathBuf>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh URL for `path`. URLs are never reused, even after revocation.
    pub fn allocate(&mut self, path: &Path) -> ObjectUrl {
        let url = ObjectUrl(format!("{SCHEME}{}", self.next));
        self.next += 1;
        self.live.insert(url.clone(), path.to_path_buf());
        url
    }

    pub fn resolve(&self, uri: &str) -> Option<&Path> {
        self.live
            .get(&ObjectUrl(uri.to_string()))
            .map(PathBuf::as_path)
    }

    /// Returns `false` when `url` was not live.
    pub fn revoke(&mut self, url: &ObjectUrl) -> bool {
        self.live.remove(url).is_some()
    }

    pub fn revoke_all(&mut self) -> usize {
        let n = self.live.len();
        self.live.clear();
        n
    }

    #[cfg(test)]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
