// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod datasets;

pub mod csv;
pub mod data;
pub mod file;
pub mod gateway;
pub mod gui;
pub mod json;
pub mod normalize;
pub mod progress;
pub mod record;
pub mod refresh;
pub mod store;
