// crates/meetup-cli/src/services/mod.rs - Infrastructure services

pub mod content;

pub use content::ContentDir;
