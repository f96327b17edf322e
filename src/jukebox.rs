//! Scene-based jukebox.
//!
//! A scene router (landing / jukebox / car-radio, or whatever the config
//! lists), a record collection mixing placeholder sleeves with ingested files,
//! a modal record picker, and transport controls bound to a single active
//! playback handle.

mod model;
mod records;
mod scene;
mod session;

pub use model::*;
pub use records::{Record, RecordCollection, RecordSource};
pub use scene::{SceneId, SceneRouter};
pub use session::*;
