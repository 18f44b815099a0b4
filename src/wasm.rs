//! WebAssembly bindings for the ALU.
//!
//! This module provides JavaScript-friendly wrappers around the chip set.
//! Results cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;
use crate::{Alu, AluOp, Bus16, ControlWord, Nand};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly ALU wrapper.
#[wasm_bindgen]
pub struct WasmAlu {
    x: Bus16,
    y: Bus16,
}

#[wasm_bindgen]
impl WasmAlu {
    /// Create an ALU with both inputs at zero.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            x: Bus16::zero(),
            y: Bus16::zero(),
        }
    }

    /// Set both inputs.
    #[wasm_bindgen]
    pub fn set_inputs(&mut self, x: u16, y: u16) {
        self.x = Bus16::from_u16(x);
        self.y = Bus16::from_u16(y);
    }

    /// Compute a canonical operation by mnemonic (e.g. "x+y"). Returns JSON.
    #[wasm_bindgen]
    pub fn compute(&self, op: &str) -> Result<String, JsError> {
        let op: AluOp = op.parse()
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        let result = Nand::compute(self.x, self.y, op);
        serde_json::to_string(&result)
            .map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// Compute with a raw six-digit control word (e.g. "000010"). Returns JSON.
    #[wasm_bindgen]
    pub fn compute_control(&self, control: &str) -> Result<String, JsError> {
        let control: ControlWord = control.parse()
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        let result = Nand::alu(self.x, self.y, control);
        serde_json::to_string(&result)
            .map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// Output word of the last-set inputs under `op`, as an unsigned integer.
    #[wasm_bindgen]
    pub fn out(&self, op: &str) -> Result<u16, JsError> {
        let op: AluOp = op.parse()
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(Nand::compute(self.x, self.y, op).out.to_u16())
    }

    /// Mnemonics of the 18 canonical operations.
    #[wasm_bindgen]
    pub fn operations() -> js_sys::Array {
        AluOp::ALL
            .iter()
            .map(|op| JsValue::from_str(op.mnemonic()))
            .collect()
    }
}

impl Default for WasmAlu {
    fn default() -> Self {
        Self::new()
    }
}
