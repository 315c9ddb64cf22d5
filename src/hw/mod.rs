// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Register Access Layer
//!
//! Named hardware registers, the backends that reach them, and thin peripheral views on top.
//!
//! - [`regs`] - `Register`, `RegisterMap` and the `RegisterAccess` trait.
//! - [`mmio`] - Volatile backend for the target.
//! - [`sim`] - In-memory backend for host tests.
//! - [`adc`], [`led`], [`switch`], [`console`] - Peripheral views.

pub mod adc;
pub mod console;
pub mod led;
pub mod mmio;
pub mod regs;
pub mod sim;
pub mod switch;

pub use adc::{Adc, RawSample, SampleFormat};
pub use console::Console;
pub use led::IndicatorBank;
pub use mmio::Mmio;
pub use regs::{Channel, Register, RegisterAccess, RegisterMap};
pub use sim::RegisterFile;
pub use switch::{Selector, SelectorState};
