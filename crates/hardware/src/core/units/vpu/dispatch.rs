//! Precision dispatcher.
//!
//! Maps the runtime element width to exactly one instantiation of the loop
//! driver: the fused body at [`F16`], [`F32`], or [`F64`], or the bf16 body at
//! [`Bf16`]. The width is resolved once per instruction, never per lane.

use crate::config::AgnosticFill;
use crate::core::arch::VectorRegisterFile;
use crate::core::units::fpu::{Bf16, ElementWidth, F16, F32, F64, FpEnv};

use super::bodies::{
    ElementBody, Vfadd, Vfmacc, Vfmadd, Vfmsac, Vfmsub, Vfmul, Vfnmacc, Vfnmadd, Vfnmsac,
    Vfnmsub, Vfsub,
};
use super::instruction::{VfInstruction, VfOp};
use super::lanes::{LoopSummary, run_lanes};
use super::state::VectorState;

/// Runs body `B` at the element type selected by `width`.
pub fn dispatch<B: ElementBody>(
    width: ElementWidth,
    state: &VectorState,
    regs: &mut VectorRegisterFile,
    insn: &VfInstruction,
    fill: AgnosticFill,
    env: &mut FpEnv,
) -> LoopSummary {
    debug_assert_eq!(insn.op, B::OP, "body does not implement {}", insn.op);
    match width {
        ElementWidth::F16 => run_lanes::<F16, _>(state, regs, insn, fill, env, B::fused::<F16>),
        ElementWidth::F32 => run_lanes::<F32, _>(state, regs, insn, fill, env, B::fused::<F32>),
        ElementWidth::F64 => run_lanes::<F64, _>(state, regs, insn, fill, env, B::fused::<F64>),
        ElementWidth::Bf16 => run_lanes::<Bf16, _>(state, regs, insn, fill, env, B::bf16),
    }
}

/// Runs `insn.op` at the element type selected by `width`.
///
/// # Arguments
///
/// * `width` - Element representation from the validated `vtype`.
/// * `state` - Validated vector configuration.
/// * `regs` - Register file.
/// * `insn` - Validated instruction.
/// * `fill` - Value given to mask-agnostic inactive lanes.
/// * `env` - Rounding mode and flag accumulator.
pub fn execute_op(
    width: ElementWidth,
    state: &VectorState,
    regs: &mut VectorRegisterFile,
    insn: &VfInstruction,
    fill: AgnosticFill,
    env: &mut FpEnv,
) -> LoopSummary {
    match insn.op {
        VfOp::Add => dispatch::<Vfadd>(width, state, regs, insn, fill, env),
        VfOp::Sub => dispatch::<Vfsub>(width, state, regs, insn, fill, env),
        VfOp::Mul => dispatch::<Vfmul>(width, state, regs, insn, fill, env),
        VfOp::Macc => dispatch::<Vfmacc>(width, state, regs, insn, fill, env),
        VfOp::Nmacc => dispatch::<Vfnmacc>(width, state, regs, insn, fill, env),
        VfOp::Msac => dispatch::<Vfmsac>(width, state, regs, insn, fill, env),
        VfOp::Nmsac => dispatch::<Vfnmsac>(width, state, regs, insn, fill, env),
        VfOp::Madd => dispatch::<Vfmadd>(width, state, regs, insn, fill, env),
        VfOp::Nmadd => dispatch::<Vfnmadd>(width, state, regs, insn, fill, env),
        VfOp::Msub => dispatch::<Vfmsub>(width, state, regs, insn, fill, env),
        VfOp::Nmsub => dispatch::<Vfnmsub>(width, state, regs, insn, fill, env),
    }
}
