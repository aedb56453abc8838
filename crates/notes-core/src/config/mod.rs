//! Configuration infrastructure shared by the editor crates
//!
//! - Generic YAML config loading/saving
//! - Standard config and music file locations

mod io;
mod paths;

pub use io::{load_config, save_config};
pub use paths::{default_config_path, default_music_path, APP_DIR};
