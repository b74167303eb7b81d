//! Vector configuration snapshot.
//!
//! A [`VectorState`] is the read-only view of `vl`, `vstart`, `vtype`, and the
//! dynamic rounding mode that one instruction executes under. The loop driver
//! never mutates it; only the [`Vpu`](super::Vpu) advances `vstart`.

use tracing::debug;

use crate::common::error::VectorError;
use crate::core::arch::VType;
use crate::core::units::fpu::{ElementWidth, RoundingMode};

/// Vector configuration for one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorState {
    /// Number of elements to process.
    pub vl: usize,
    /// First element to process.
    pub vstart: usize,
    /// Decoded `vtype`.
    pub vtype: VType,
    /// Dynamic rounding mode from `fcsr.frm`.
    pub frm: RoundingMode,
}

impl VectorState {
    /// Creates a state starting at element 0 with round-to-nearest-even.
    pub fn new(vtype: VType, vl: usize) -> Self {
        Self {
            vl,
            vstart: 0,
            vtype,
            frm: RoundingMode::Rne,
        }
    }

    /// Returns a copy with `vstart` replaced.
    pub fn with_vstart(mut self, vstart: usize) -> Self {
        self.vstart = vstart;
        self
    }

    /// Returns a copy with the rounding mode replaced.
    pub fn with_frm(mut self, frm: RoundingMode) -> Self {
        self.frm = frm;
        self
    }

    /// Element representation selected by `vtype`.
    ///
    /// # Returns
    ///
    /// The element width, or the precondition error when `vtype` is illegal
    /// or selects no floating-point format.
    pub fn element_width(&self) -> Result<ElementWidth, VectorError> {
        if self.vtype.vill {
            return Err(VectorError::IllegalVtype);
        }
        self.vtype
            .element_width()
            .ok_or(VectorError::UnsupportedElementWidth {
                sew: self.vtype.sew.bits(),
                altfmt: self.vtype.altfmt,
            })
    }

    /// Checks every precondition that does not depend on the operands.
    ///
    /// # Arguments
    ///
    /// * `vlen` - Register width in bits, for VLMAX.
    ///
    /// # Returns
    ///
    /// The element width the instruction runs at.
    pub fn validate(&self, vlen: usize) -> Result<ElementWidth, VectorError> {
        let width = self.element_width()?;
        let vlmax = self.vtype.vlmax(vlen);
        if self.vl > vlmax {
            return Err(VectorError::LengthExceedsVlmax { vl: self.vl, vlmax });
        }
        if self.vstart > self.vl {
            debug!(vstart = self.vstart, vl = self.vl, "vector state rejected");
            return Err(VectorError::StartBeyondLength {
                vstart: self.vstart,
                vl: self.vl,
            });
        }
        Ok(width)
    }
}
