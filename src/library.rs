//! File discovery for the jukebox.
//!
//! Directories given on the command line play the role of a file picker:
//! every regular file found becomes a [`FileEntry`] carrying a guessed media
//! type. Deciding which entries are audio is left to the record collection.
//! [`tags`] reads track lengths from file headers for the players.

mod model;
pub mod tags;
mod scan;

pub use model::FileEntry;
pub use scan::scan;
