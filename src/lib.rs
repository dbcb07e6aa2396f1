// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod batch;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod table;

pub mod file;
pub mod gui;
pub mod progress;

#[cfg(feature = "cli")]
pub mod cli;
