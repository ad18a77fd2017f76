// src/core/mod.rs
pub mod config;
pub mod engine;

pub use config::{Config, ConfigError};
pub use engine::{reestimate, run, EngineError, ErrorKind};
