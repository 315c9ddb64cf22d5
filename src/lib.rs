// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Stall Indicator Firmware
//!
//! Bare-metal control loop that samples two analog inputs through a memory-mapped ADC and drives
//! a bank of ten indicator LEDs: either a bar graph of the selected channel, or an all-on stall
//! warning computed from airspeed and angle of attack.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Register access layer: named registers, volatile / in-memory backends, ADC, LEDs, switch, console |
//! | [`control`] | Unit conversion, decision strategies (bar graph, stall warning), indicator patterns |
//! | [`app`] | The polling control loop |
//! | [`config`] | Register map, masks and other build-time settings |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Build the firmware (`hardware` moves the ready flag to bit 15, `stall-warning` selects the
//! stall detector):
//!
//! ```bash
//! cargo build --release --target thumbv7em-none-eabihf --features hardware
//! ```
//!
//! The default register map in [`config`] (`0xFF20_xxxx`) is the simulator board's peripheral
//! layout. On any other part those addresses are unmapped: set `Config::map` to the board's ADC,
//! GPIO, switch and console bases, and adjust `memory.x`, before flashing.
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod control;
pub mod hw;

pub use app::{ControlLoop, StepOutcome};
pub use config::{Config, ConfigError, Platform};
