//! Linear tracklist player.
//!
//! `Playlist` holds the fixed track list and the current index and turns each
//! user action or media notification into a list of [`Effect`]s. A
//! `PlaylistSession` applies those effects to a real (or fake) engine and view.

mod model;
mod session;

pub use model::*;
pub use session::*;

#[cfg(test)]
mod tests;
