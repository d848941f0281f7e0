//! WebAssembly bindings for the drive emulator.
//!
//! This module provides a JavaScript-callable wrapper around a 1541 drive CPU,
//! so firmware can be stepped and inspected from a browser.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::DriveEmulator;
