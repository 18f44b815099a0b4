//! TUI explorer for the ALU.
//!
//! Provides an interactive terminal view with:
//! - Editable x and y registers (hex entry)
//! - The six control bits, toggled one by one
//! - Cycling through the 18 canonical operations
//! - Live out / zr / ng, bit by bit

mod app;
mod ui;

pub use app::{ExplorerApp, Register, run_explorer};
