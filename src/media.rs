//! Media plumbing shared by both players.
//!
//! The players never touch `rodio` directly: they speak to a
//! [`PlaybackEngine`] and a [`RenderSink`], and the runtime wires those to the
//! real output device and the terminal view. Tests use the fakes in
//! `media::testing`.

mod engine;
mod error;
mod object_url;
mod render;
mod rodio_engine;

#[cfg(test)]
pub mod testing;

pub use engine::*;
pub use error::EngineError;
pub use object_url::{ObjectUrl, ObjectUrlRegistry};
pub use render::*;
pub use rodio_engine::{AudioOutput, RodioEngine, RodioFactory};

/// Normalize `n` into `[0, len)`.
///
/// Works for negative and out-of-range values alike. `len` must be non-zero.
pub fn wrap_index(n: i64, len: usize) -> usize {
    let len = len as i64;
    (((n % len) + len) % len) as usize
}

#[cfg(test)]
mod tests;
