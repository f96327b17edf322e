use std::path::{Path, PathBuf};

/// A user-selected file: a name, a declared media type and the bytes' location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub media_type: String,
    pub path: PathBuf,
}

impl FileEntry {
    /// Build an entry with a media type guessed from the file extension.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let media_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self {
            name,
            media_type,
            path: path.to_path_buf(),
        }
    }

    pub fn is_audio(&self) -> bool {
        self.media_type.starts_with("audio/")
    }
}
