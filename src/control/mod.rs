// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! Everything between a raw ADC magnitude and the pattern on the indicators. Nothing in here
//! keeps state between loop iterations.
//!
//! ## Modules
//!
//! - [`conversion`] - Linear scaling of ADC counts to physical units.
//! - [`aero`] - Airframe constants and stall speed.
//! - [`decision`] - Decisions, indicator patterns and the `DecisionStrategy` trait.
//! - [`bar_graph`] - Proportional bar graph of one selectable channel.
//! - [`stall`] - Airspeed / angle-of-attack stall warning.

pub mod aero;
pub mod bar_graph;
pub mod conversion;
pub mod decision;
pub mod stall;

pub use aero::Airframe;
pub use bar_graph::BarGraph;
pub use conversion::LinearScale;
pub use decision::{ActuationPattern, Decision, DecisionStrategy};
pub use stall::StallDetector;
