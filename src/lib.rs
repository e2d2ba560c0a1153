pub mod ops;

mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod reference;
pub mod release;
pub mod repository;
pub mod submodules;

// Re-export App, Config and Error from modules
pub use app::App;
pub use config::Config;
pub use error::Error;

// Disable colors for all tests to get clean output
#[cfg(test)]
#[ctor::ctor]
fn init_tests() {
    colored::control::set_override(false);
}
