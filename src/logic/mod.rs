//! Signal-level primitives.
//!
//! This module provides the wiring and gate layer the chips are built on:
//! - [`Bit`] - A single binary signal
//! - [`Bus`] - A fixed-width group of wires (`Bus2` .. `Bus16`)
//! - [`Primitive`] - The NAND capability, with [`Nand`] as its designated implementation
//! - [`Gates`] - NOT, AND, OR, XOR wired from the primitive
//! - [`BusGates`] - The gates lifted across whole buses

mod bit;
mod bus;
mod primitive;
mod gates;
mod ops;

pub use bit::Bit;
pub use bus::{Bus, Bus2, Bus3, Bus4, Bus8, Bus16, ParseError};
pub use primitive::{Primitive, Nand};
pub use gates::Gates;
pub use ops::BusGates;
