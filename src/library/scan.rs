use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::FileEntry;

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List every regular file under `dir`, sorted case-insensitively by name.
///
/// Unreadable entries are skipped.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<FileEntry> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut files: Vec<FileEntry> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() || e.path().is_file())
        .map(|e| FileEntry::from_path(e.path()))
        .collect();

    files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    debug!(dir = %dir.display(), found = files.len(), "scanned directory");
    files
}
