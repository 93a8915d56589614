//! Jeep Route Finder
//!
//! Enter jeepney route codes and see which stops they share. The route logic lives in
//! [`data`] and has no UI dependency; the eframe app only draws its output.

mod app;
pub mod data;
mod entrypoints;

// Entry point for desktop, called from main.rs
#[cfg(not(target_arch = "wasm32"))]
pub use entrypoints::main::main as run_native;

// Entry point for web, created from JavaScript
#[cfg(target_arch = "wasm32")]
pub use entrypoints::web::WebHandle;
