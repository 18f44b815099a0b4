//! The 16-bit Arithmetic Logic Unit.
//!
//! The ALU prepares both inputs, combines them, and post-processes the
//! result, steered by the six bits of a [`ControlWord`]:
//! ```text
//! if zx then x = 0        // 16-bit constant
//! if nx then x = !x       // bitwise not
//! if zy then y = 0
//! if ny then y = !y
//! if f  then out = x + y  // two's-complement addition
//!       else out = x & y  // bitwise and
//! if no then out = !out
//! zr = (out == 0)
//! ng = (out < 0)
//! ```
//! Every step is a chip from the lower layers; there is no host arithmetic.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::chips::{AluOp, Arithmetic, ControlWord};
use crate::logic::{Bit, Bus16};

/// ALU outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AluOutput {
    /// 16-bit result
    pub out: Bus16,
    /// High iff every bit of `out` is low
    pub zr: Bit,
    /// Sign bit of `out`
    pub ng: Bit,
}

impl fmt::Display for AluOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "out={} (0x{:04X}, {}) zr={} ng={}",
            self.out, self.out.to_u16(), self.out.to_i16(), self.zr, self.ng)
    }
}

/// The ALU chip, available on every primitive.
pub trait Alu: Arithmetic {
    /// Evaluate the ALU on two words under a control word.
    fn alu(x: Bus16, y: Bus16, control: ControlWord) -> AluOutput {
        let ground = Bus16::zero();

        let x = Self::mux16(x, ground, control.zx);
        let x = Self::mux16(x, Self::not16(x), control.nx);

        let y = Self::mux16(y, ground, control.zy);
        let y = Self::mux16(y, Self::not16(y), control.ny);

        let out = Self::mux16(Self::and16(x, y), Self::add16(x, y), control.f);
        let out = Self::mux16(out, Self::not16(out), control.no);

        let (high, low) = out.halves();
        let zr = Self::not(Self::or(Self::or8way(high), Self::or8way(low)));
        let ng = out.get(0);

        AluOutput { out, zr, ng }
    }

    /// Evaluate one of the canonical operations.
    #[inline]
    fn compute(x: Bus16, y: Bus16, op: AluOp) -> AluOutput {
        Self::alu(x, y, op.control())
    }
}

impl<P: Arithmetic> Alu for P {}
