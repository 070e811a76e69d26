//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::ClubPaths;
pub use settings::Settings;
