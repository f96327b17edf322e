use std::path::Path;
use std::time::Duration;

use lofty::prelude::AudioFile;
use tracing::debug;

/// Track length read from the container headers.
///
/// Used when the decoder cannot size a stream itself, e.g. MP3s without a
/// Xing/Info frame. Unreadable files and zero lengths give `None`.
pub fn duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()).filter(|d| !d.is_zero()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no duration from file headers");
            None
        }
    }
}
