//! # nandchip
//!
//! A 16-bit Arithmetic Logic Unit built gate by gate from a single NAND.
//!
//! Every chip in this crate (NOT, AND, OR, XOR, the bus-wide gates, the
//! multiplexer trees, the adders and the ALU) is derived from one
//! [`Primitive`] operation and nothing else. The chips are pure functions:
//! no state, no clock, no feedback.
//!
//! Chips are exposed as traits implemented for every primitive, so the
//! designated [`Nand`] gets the whole chip set:
//!
//! ```
//! use nandchip::{Alu, AluOp, Bus16, Nand};
//!
//! let result = Nand::compute(Bus16::from_u16(1), Bus16::from_u16(2), AluOp::Add);
//! assert_eq!(result.out.to_u16(), 3);
//! ```

pub mod logic;
pub mod chips;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use logic::{Bit, Bus, Bus2, Bus3, Bus4, Bus8, Bus16, ParseError};
pub use logic::{Primitive, Nand, Gates, BusGates};
pub use chips::{Selectors, Arithmetic, Alu, AluOutput, AluOp, ControlWord, ControlError};

#[cfg(feature = "tui")]
pub use tui::run_explorer;
