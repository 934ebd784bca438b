// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod aggregate;
pub mod chart;
pub mod classify;
pub mod csv;
pub mod data;
pub mod gui;
pub mod map;
pub mod present;
pub mod progress;
pub mod records;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{GdpError, Result};
