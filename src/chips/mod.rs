//! Composite chips built from the gate library.
//!
//! This module implements the upper half of the combinational chip set:
//! - Selector network: 2/4/8-way multiplexers and demultiplexers
//! - Arithmetic: half adder, full adder, 16-bit ripple adder, incrementer
//! - The 16-bit ALU with its six-bit control word

pub mod select;
pub mod arith;
pub mod control;
pub mod alu;

pub use select::Selectors;
pub use arith::Arithmetic;
pub use control::{AluOp, ControlWord, ControlError};
pub use alu::{Alu, AluOutput};
