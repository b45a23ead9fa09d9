//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::PocketbookPaths;
pub use settings::Settings;
