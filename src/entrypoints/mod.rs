// Shared modules
pub(crate) mod cli;
mod metadata;
mod profiling;
mod run;

#[cfg(target_arch = "wasm32")]
pub mod web;

// Entry points
pub mod main;
