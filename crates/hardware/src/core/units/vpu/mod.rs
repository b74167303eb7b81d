//! Vector Floating-Point Unit (VPU).
//!
//! This module implements the `.vv` floating-point add and fused multiply-add
//! instructions of the RISC-V V extension. Execution is layered:
//! - [`state`]: The `vl`/`vstart`/`vtype`/`frm` snapshot an instruction runs under.
//! - [`instruction`]: Decoded operation and register operands.
//! - [`bodies`]: Per-element computations, one fused and one bf16 body per operation.
//! - [`lanes`]: The loop driver that applies a body across `[vstart, vl)`.
//! - [`dispatch`]: Selection of one width instantiation per instruction.
//!
//! [`Vpu`] owns the register file and CSRs, checks every precondition before a
//! lane executes, and ORs raised exception flags into `fcsr.fflags`.

/// Per-element instruction bodies.
pub mod bodies;

/// Precision dispatcher.
pub mod dispatch;

/// Decoded `.vv` instruction descriptors.
pub mod instruction;

/// Lane loop driver.
pub mod lanes;

/// Vector configuration snapshot.
pub mod state;

use tracing::{debug, trace};

use crate::common::error::{ConfigError, VectorError};
use crate::config::VectorConfig;
use crate::core::arch::{Csrs, VType, VectorRegisterFile};
use crate::core::units::fpu::{FpEnv, FpFlags, RoundingMode};

pub use self::instruction::{VfInstruction, VfOp};
pub use self::lanes::LoopSummary;
pub use self::state::VectorState;

/// Vector floating-point unit.
///
/// Holds the architectural state the `.vv` FP instructions read and write:
/// the vector register file, `vl`/`vtype`/`vstart`, and `fcsr`.
#[derive(Clone, Debug)]
pub struct Vpu {
    config: VectorConfig,
    regs: VectorRegisterFile,
    csrs: Csrs,
}

impl Vpu {
    /// Creates a unit in its reset state: zeroed registers, `vl = 0`, and
    /// `vtype.vill` set.
    ///
    /// # Arguments
    ///
    /// * `config` - Unit geometry and policy settings.
    ///
    /// # Returns
    ///
    /// The unit, or a [`ConfigError`] if the geometry is illegal.
    pub fn new(config: &VectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            regs: VectorRegisterFile::new(config.vlen),
            csrs: Csrs::new(config.vlenb(), VType::ILLEGAL.encode()),
        })
    }

    /// Unit configuration.
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// Vector register file.
    pub fn regs(&self) -> &VectorRegisterFile {
        &self.regs
    }

    /// Mutable vector register file.
    pub fn regs_mut(&mut self) -> &mut VectorRegisterFile {
        &mut self.regs
    }

    /// Control and status registers.
    pub fn csrs(&self) -> &Csrs {
        &self.csrs
    }

    /// Mutable control and status registers.
    pub fn csrs_mut(&mut self) -> &mut Csrs {
        &mut self.csrs
    }

    /// Decoded current `vtype`.
    pub fn vtype(&self) -> VType {
        VType::decode(self.csrs.vtype, self.config.vlen, self.config.elen)
    }

    /// Current vector length.
    pub fn vl(&self) -> usize {
        self.csrs.vl as usize
    }

    /// Current `vstart`.
    pub fn vstart(&self) -> usize {
        self.csrs.vstart as usize
    }

    /// Accrued exception flags.
    pub fn fflags(&self) -> FpFlags {
        self.csrs.fflags
    }

    /// Sets `vstart`, as a CSR write or a trap handler would.
    pub fn set_vstart(&mut self, vstart: usize) {
        self.csrs.vstart = vstart as u64;
    }

    /// Sets the dynamic rounding mode.
    pub fn set_frm(&mut self, rm: RoundingMode) {
        self.csrs.frm = rm.bits();
    }

    /// Clears the accrued exception flags.
    pub fn clear_fflags(&mut self) {
        self.csrs.fflags = FpFlags::NONE;
    }

    /// Installs a new `vtype` and vector length, as `vsetvl` does.
    ///
    /// # Arguments
    ///
    /// * `avl` - Application vector length requested.
    /// * `raw_vtype` - Requested `vtype` encoding.
    ///
    /// # Returns
    ///
    /// The granted `vl`: `min(avl, VLMAX)`, or 0 if the `vtype` is illegal.
    pub fn vsetvl(&mut self, avl: usize, raw_vtype: u64) -> usize {
        let vtype = VType::decode(raw_vtype, self.config.vlen, self.config.elen);
        let vl = avl.min(vtype.vlmax(self.config.vlen));
        self.csrs.set_vl_vtype(vl as u64, vtype.encode());
        self.csrs.vstart = 0;
        vl
    }

    /// Replaces `vtype`, keeping the requested length at the current `vl`.
    pub fn set_vtype(&mut self, vtype: VType) -> usize {
        self.vsetvl(self.vl(), vtype.encode())
    }

    /// Changes `vl` under the current `vtype`.
    pub fn set_vl(&mut self, avl: usize) -> usize {
        self.vsetvl(avl, self.csrs.vtype)
    }

    /// Snapshot of the configuration the next instruction runs under.
    ///
    /// # Returns
    ///
    /// The state, or [`VectorError::InvalidRoundingMode`] if `frm` holds a
    /// reserved encoding.
    pub fn state(&self) -> Result<VectorState, VectorError> {
        let frm = self
            .csrs
            .rounding_mode()
            .ok_or(VectorError::InvalidRoundingMode(self.csrs.frm))?;
        Ok(VectorState {
            vl: self.vl(),
            vstart: self.vstart(),
            vtype: self.vtype(),
            frm,
        })
    }

    /// Executes one instruction over `[vstart, vl)`.
    ///
    /// On success the raised flags are ORed into `fflags` and `vstart` is
    /// reset to 0. On error nothing is modified.
    pub fn execute(&mut self, insn: &VfInstruction) -> Result<LoopSummary, VectorError> {
        self.execute_until(insn, usize::MAX)
    }

    /// Executes one instruction, stopping before lane `stop`.
    ///
    /// Models an instruction interrupted at element `stop`: lanes
    /// `[vstart, stop)` complete, their flags are accrued, and `vstart` is left
    /// at `stop` so a later [`Vpu::execute`] resumes there. If `stop >= vl`
    /// the instruction completes and `vstart` returns to 0.
    pub fn execute_until(
        &mut self,
        insn: &VfInstruction,
        stop: usize,
    ) -> Result<LoopSummary, VectorError> {
        let state = self.state().and_then(|state| {
            let width = state.validate(self.config.vlen)?;
            insn.validate(state.vtype.lmul)?;
            Ok((state, width))
        });
        let (state, width) = match state {
            Ok(checked) => checked,
            Err(err) => {
                debug!(insn = %insn, error = %err, "vector instruction rejected");
                return Err(err);
            }
        };

        let end = stop.clamp(state.vstart, state.vl);
        let pass = VectorState { vl: end, ..state };
        let mut env = FpEnv::new(state.frm);
        let summary = dispatch::execute_op(
            width,
            &pass,
            &mut self.regs,
            insn,
            self.config.agnostic_fill,
            &mut env,
        );

        self.csrs.accrue(env.flags);
        self.csrs.vstart = if end < state.vl { end as u64 } else { 0 };

        if self.config.trace {
            debug!(
                insn = %insn,
                width = %width,
                vl = state.vl,
                vstart = state.vstart,
                end,
                active = summary.active,
                flags = %env.flags,
                "vector instruction"
            );
        } else {
            trace!(
                insn = %insn,
                width = %width,
                vl = state.vl,
                vstart = state.vstart,
                end,
                active = summary.active,
                flags = %env.flags,
                "vector instruction"
            );
        }
        Ok(summary)
    }
}
