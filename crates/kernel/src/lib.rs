//! Shared kernel for Libris: layered settings consumed by every other crate.

pub mod settings;

pub use settings::Settings;
