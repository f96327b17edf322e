//! Error types for the `rodio` engine.

use std::path::PathBuf;

use thiserror::Error;

/// Failures inside the playback engine.
///
/// These never reach the players; the engine logs them and goes quiet.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("no audio output device: {0}")]
    Output(#[from] rodio::StreamError),

    #[error("seek failed: {0}")]
    Seek(#[from] rodio::source::SeekError),
}
