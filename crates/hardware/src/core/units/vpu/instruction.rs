//! Vector-vector floating-point instruction descriptors.
//!
//! Decoding from a 32-bit encoding happens upstream. This module only carries
//! the already-decoded fields: the operation, the three register group bases,
//! and the `vm` bit (`masked`).

use std::fmt;

use crate::common::constants::{MASK_REG, NUM_VREGS};
use crate::common::error::VectorError;
use crate::core::arch::Lmul;

/// `.vv` floating-point operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VfOp {
    /// `vd = vs2 + vs1`.
    Add,
    /// `vd = vs2 - vs1`.
    Sub,
    /// `vd = vs2 * vs1`.
    Mul,
    /// `vd = (vs1 * vs2) + vd`.
    Macc,
    /// `vd = -(vs1 * vs2) - vd`.
    Nmacc,
    /// `vd = (vs1 * vs2) - vd`.
    Msac,
    /// `vd = -(vs1 * vs2) + vd`.
    Nmsac,
    /// `vd = (vd * vs1) + vs2`.
    Madd,
    /// `vd = -(vd * vs1) - vs2`.
    Nmadd,
    /// `vd = (vd * vs1) - vs2`.
    Msub,
    /// `vd = -(vd * vs1) + vs2`.
    Nmsub,
}

impl VfOp {
    /// Every operation, in encoding-table order.
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Macc,
        Self::Nmacc,
        Self::Msac,
        Self::Nmsac,
        Self::Madd,
        Self::Nmadd,
        Self::Msub,
        Self::Nmsub,
    ];

    /// Assembler mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "vfadd.vv",
            Self::Sub => "vfsub.vv",
            Self::Mul => "vfmul.vv",
            Self::Macc => "vfmacc.vv",
            Self::Nmacc => "vfnmacc.vv",
            Self::Msac => "vfmsac.vv",
            Self::Nmsac => "vfnmsac.vv",
            Self::Madd => "vfmadd.vv",
            Self::Nmadd => "vfnmadd.vv",
            Self::Msub => "vfmsub.vv",
            Self::Nmsub => "vfnmsub.vv",
        }
    }

    /// Returns true if the operation reads the old destination value.
    pub fn reads_vd(self) -> bool {
        !matches!(self, Self::Add | Self::Sub | Self::Mul)
    }
}

impl fmt::Display for VfOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded `.vv` floating-point instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VfInstruction {
    /// Operation.
    pub op: VfOp,
    /// Destination (and accumulator) register group base.
    pub vd: usize,
    /// First source register group base.
    pub vs1: usize,
    /// Second source register group base.
    pub vs2: usize,
    /// `vm == 0`: lanes are enabled by `v0`.
    pub masked: bool,
}

impl VfInstruction {
    /// Creates an unmasked instruction.
    pub fn new(op: VfOp, vd: usize, vs1: usize, vs2: usize) -> Self {
        Self {
            op,
            vd,
            vs1,
            vs2,
            masked: false,
        }
    }

    /// Returns a copy governed by the mask in `v0`.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Checks register group alignment and mask overlap for the given LMUL.
    pub fn validate(&self, lmul: Lmul) -> Result<(), VectorError> {
        let group = lmul.registers();
        for reg in [self.vd, self.vs1, self.vs2] {
            if reg % group != 0 || reg + group > NUM_VREGS {
                return Err(VectorError::MisalignedRegisterGroup { reg, group });
            }
        }
        if self.masked && self.vd == MASK_REG {
            return Err(VectorError::MaskOverlap { vd: self.vd });
        }
        Ok(())
    }
}

impl fmt::Display for VfInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // FMA forms list vs1 first.
        let (first, second) = if self.op.reads_vd() {
            (self.vs1, self.vs2)
        } else {
            (self.vs2, self.vs1)
        };
        write!(f, "{} v{}, v{first}, v{second}", self.op, self.vd)?;
        if self.masked {
            f.write_str(", v0.t")?;
        }
        Ok(())
    }
}
