//! Configuration loaded from `.tinycrypt.toml`.

pub mod settings;

pub use settings::{Backend, Settings};
