//! Lane loop driver.
//!
//! Walks the body elements `[vstart, vl)` of one instruction at a fixed element
//! type and applies a per-element body to every active lane. Masked-off lanes
//! follow `vtype.vma`; elements at or past `vl` are never touched. The driver
//! reads the [`VectorState`] but never advances it, so a run can be split at
//! any lane `k` and resumed with `vstart = k`.

use crate::config::AgnosticFill;
use crate::core::arch::{ElementPolicy, VectorRegisterFile};
use crate::core::units::fpu::{FloatElement, FpEnv, FpFlags};

use super::instruction::VfInstruction;
use super::state::VectorState;

/// Outcome of one pass of the loop driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Lanes whose body ran.
    pub active: usize,
    /// Lanes in `[vstart, vl)` skipped by the mask.
    pub inactive: usize,
    /// Flags accumulated in the environment after the pass.
    pub flags: FpFlags,
}

/// Runs `body` over every active lane of `insn`.
///
/// # Arguments
///
/// * `state` - Vector configuration; must already be validated.
/// * `regs` - Register file holding the operand groups and `v0`.
/// * `insn` - Register operands and the `vm` bit.
/// * `fill` - Value given to mask-agnostic inactive lanes.
/// * `env` - Rounding mode and flag accumulator shared by every lane.
/// * `body` - Element computation, called as `body(vd, vs1, vs2, env)`.
///
/// # Returns
///
/// Lane counts and the accumulated flags.
pub fn run_lanes<E, F>(
    state: &VectorState,
    regs: &mut VectorRegisterFile,
    insn: &VfInstruction,
    fill: AgnosticFill,
    env: &mut FpEnv,
    mut body: F,
) -> LoopSummary
where
    E: FloatElement,
    F: FnMut(E, E, E, &mut FpEnv) -> E,
{
    debug_assert!(state.vstart <= state.vl, "vstart past vl");
    debug_assert_eq!(state.vtype.element_width(), Some(E::WIDTH), "element width mismatch");

    let fill_inactive = state.vtype.mask_policy() == ElementPolicy::Agnostic
        && fill == AgnosticFill::AllOnes;
    let mut summary = LoopSummary::default();

    for i in state.vstart..state.vl {
        if insn.masked && !regs.mask_bit(i) {
            summary.inactive += 1;
            if fill_inactive {
                regs.write(insn.vd, i, E::from_bits(u64::MAX));
            }
            continue;
        }

        let vd = regs.read::<E>(insn.vd, i);
        let vs1 = regs.read::<E>(insn.vs1, i);
        let vs2 = regs.read::<E>(insn.vs2, i);
        regs.write(insn.vd, i, body(vd, vs1, vs2, env));
        summary.active += 1;
    }

    summary.flags = env.flags;
    summary
}
