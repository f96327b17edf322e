use std::path::{Path, PathBuf};

use tracing::debug;

use crate::library::FileEntry;
use crate::media::{ObjectUrl, ObjectUrlRegistry, RecordRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// A sleeve with nothing in it. Never playable.
    Placeholder,
    /// An ingested file and the object URL that stands in for its bytes.
    Upload { path: PathBuf, url: ObjectUrl },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub source: RecordSource,
}

impl Record {
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: RecordSource::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.source, RecordSource::Placeholder)
    }

    pub fn url(&self) -> Option<&ObjectUrl> {
        match &self.source {
            RecordSource::Placeholder => None,
            RecordSource::Upload { url, .. } => Some(url),
        }
    }

    pub fn row(&self) -> RecordRow {
        RecordRow {
            name: self.name.clone(),
            placeholder: self.is_placeholder(),
        }
    }
}

/// The records in catalog order plus the URLs they own.
#[derive(Debug, Default)]
pub struct RecordCollection {
    records: Vec<Record>,
    urls: ObjectUrlRegistry,
}

impl RecordCollection {
    pub fn new<I, S>(placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: placeholders.into_iter().map(Record::placeholder).collect(),
            urls: ObjectUrlRegistry::new(),
        }
    }

    /// Append every audio entry in arrival order. Returns how many were taken.
    pub fn ingest<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = FileEntry>,
    {
        let before = self.records.len();
        for file in files {
            if !file.is_audio() {
                debug!(name = %file.name, media_type = %file.media_type, "not audio, skipped");
                continue;
            }
            let url = self.urls.allocate(&file.path);
            self.records.push(Record {
                name: file.name,
                source: RecordSource::Upload {
                    path: file.path,
                    url,
                },
            });
        }
        self.records.len() - before
    }

    /// Remove an uploaded record and revoke its URL. Placeholders stay put.
    pub fn evict(&mut self, index: usize) -> Option<Record> {
        if self.records.get(index)?.is_placeholder() {
            return None;
        }
        let record = self.records.remove(index);
        if let Some(url) = record.url() {
            self.urls.revoke(url);
        }
        Some(record)
    }

    /// Revoke every live URL. Records stay listed but can no longer load.
    pub fn release_all(&mut self) -> usize {
        self.urls.revoke_all()
    }

    pub fn resolve(&self, uri: &str) -> Option<&Path> {
        self.urls.resolve(uri)
    }

    #[cfg(test)]
    pub fn live_urls(&self) -> usize {
        self.urls.live_count()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn rows(&self) -> Vec<RecordRow> {
        self.iter().map(Record::row).collect()
    }
}
