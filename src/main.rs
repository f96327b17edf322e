mod config;
mod jukebox;
mod library;
mod media;
mod playlist;
mod runtime;
mod ui;
mod view;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
