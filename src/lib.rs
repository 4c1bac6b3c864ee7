//! Instrument cluster library - testable modules for the motion dashboard.
//!
//! This library contains the core update engine that can be tested on the
//! host machine: telemetry history, the auto-centering offset filter, the
//! multi-rate cadences, and the incremental widget rendering. The binary
//! (`main.rs`) uses this library and adds the embedded-specific code
//! (display driver, I2C sensor wrappers, boot sequence).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p cardash-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p cardash-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Cooperative update engine
pub mod engine;
pub mod render;
pub mod scheduler;
pub mod sensors;

// Widget drawing (generic over DrawTarget, testable with a recording target)
pub mod widgets;

mod telemetry {
    pub mod autocenter;
    pub mod history;
    pub mod ratchet;
}

mod ui {
    pub mod colors;
    pub mod styles;
}

// Re-export at top level for existing imports
pub use telemetry::{autocenter, history, ratchet};
pub use ui::{colors, styles};
