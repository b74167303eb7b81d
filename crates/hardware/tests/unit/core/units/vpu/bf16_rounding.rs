//! # bf16 Rounding Tests
//!
//! bf16 multiply-add forms round the product and the sum separately. These
//! vectors are chosen so that the intermediate rounding changes the result:
//! the product `1.0078125^2` rounds to `1.015625`, which then cancels exactly
//! against the addend. The same computation in f16 is fused and keeps the
//! residue.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvsim_vfpu::core::arch::Lmul;
use rvsim_vfpu::core::units::fpu::{Bf16, ElementWidth, F16, FpFlags, RoundingMode};
use rvsim_vfpu::core::units::vpu::{VfInstruction, VfOp};

use crate::common::TestContext;

const VD: usize = 1;
const VS1: usize = 2;
const VS2: usize = 3;

/// `1 + 2^-7`, whose square is `1 + 2^-6 + 2^-14`.
const A: u16 = 0x3f81;
/// `1 + 2^-6`, the square rounded to bf16.
const SQUARE: u16 = 0x3f82;

fn bf16_ctx(vl: usize) -> TestContext {
    TestContext::new().configure(ElementWidth::Bf16, Lmul::M1, vl)
}

// ══════════════════════════════════════════════════════════
// 1. Intermediate Rounding
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::msac(VfOp::Msac, SQUARE)]
#[case::macc(VfOp::Macc, SQUARE | Bf16::SIGN)]
#[case::nmacc(VfOp::Nmacc, SQUARE | Bf16::SIGN)]
#[case::nmsac(VfOp::Nmsac, SQUARE)]
fn accumulate_forms_cancel_after_product_rounding(#[case] op: VfOp, #[case] acc: u16) {
    let mut ctx = bf16_ctx(1);
    ctx.load(VD, &[Bf16::new(acc)]);
    ctx.load(VS1, &[Bf16::new(A)]);
    ctx.load(VS2, &[Bf16::new(A)]);

    let _ = ctx.run(VfInstruction::new(op, VD, VS1, VS2));

    assert_eq!(ctx.dump::<Bf16>(VD, 1), vec![Bf16::ZERO], "{op}");
    assert_eq!(ctx.fflags(), FpFlags::NX, "{op}");
}

#[rstest]
#[case::madd(VfOp::Madd, SQUARE | Bf16::SIGN)]
#[case::msub(VfOp::Msub, SQUARE)]
fn overwrite_forms_cancel_after_product_rounding(#[case] op: VfOp, #[case] addend: u16) {
    let mut ctx = bf16_ctx(1);
    ctx.load(VD, &[Bf16::new(A)]);
    ctx.load(VS1, &[Bf16::new(A)]);
    ctx.load(VS2, &[Bf16::new(addend)]);

    let _ = ctx.run(VfInstruction::new(op, VD, VS1, VS2));

    assert_eq!(ctx.dump::<Bf16>(VD, 1), vec![Bf16::ZERO], "{op}");
}

#[test]
fn negated_cancellation_is_positive_zero() {
    // -(p + d) is computed as 0 - (p + d), so an exact zero sum stays +0.
    let mut ctx = bf16_ctx(1);
    ctx.load(VD, &[Bf16::new(A)]);
    ctx.load(VS1, &[Bf16::new(A)]);
    ctx.load(VS2, &[Bf16::new(SQUARE | Bf16::SIGN)]);

    let _ = ctx.run(VfInstruction::new(VfOp::Nmadd, VD, VS1, VS2));

    assert_eq!(ctx.dump::<Bf16>(VD, 1), vec![Bf16::ZERO]);
}

#[test]
fn every_lane_rounds_twice() {
    let mut ctx = bf16_ctx(8);
    ctx.load(VD, &[Bf16::new(SQUARE); 8]);
    ctx.load(VS1, &[Bf16::new(A); 8]);
    ctx.load(VS2, &[Bf16::new(A); 8]);

    let summary = ctx.run(VfInstruction::new(VfOp::Msac, VD, VS1, VS2));

    assert_eq!(summary.active, 8);
    assert_eq!(ctx.dump::<Bf16>(VD, 8), vec![Bf16::ZERO; 8]);
}

#[test]
fn round_down_cancellation_is_negative_zero() {
    let mut ctx = bf16_ctx(1).with_rounding(RoundingMode::Rdn);
    ctx.load(VD, &[Bf16::new(SQUARE | Bf16::SIGN)]);
    ctx.load(VS1, &[Bf16::new(A)]);
    ctx.load(VS2, &[Bf16::new(A)]);

    let _ = ctx.run(VfInstruction::new(VfOp::Macc, VD, VS1, VS2));

    assert_eq!(ctx.dump::<Bf16>(VD, 1), vec![Bf16::new(Bf16::SIGN)]);
}

// ══════════════════════════════════════════════════════════
// 2. Fused Contrast
// ══════════════════════════════════════════════════════════

#[test]
fn f16_keeps_the_residue() {
    // (1 + 2^-10)^2 - (1 + 2^-9) = 2^-20, an exact f16 subnormal.
    let mut ctx = TestContext::new().configure(ElementWidth::F16, Lmul::M1, 1);
    ctx.load(VD, &[F16::new(0x3c02)]);
    ctx.load(VS1, &[F16::new(0x3c01)]);
    ctx.load(VS2, &[F16::new(0x3c01)]);

    let _ = ctx.run(VfInstruction::new(VfOp::Msac, VD, VS1, VS2));

    assert_eq!(ctx.dump::<F16>(VD, 1), vec![F16::new(0x0010)]);
    assert_eq!(ctx.fflags(), FpFlags::NONE);
}

#[test]
fn same_bits_differ_only_by_altfmt() {
    let run = |width: ElementWidth| {
        let mut ctx = TestContext::new().configure(width, Lmul::M1, 1);
        ctx.load_raw(VD, width, &[u64::from(SQUARE)]);
        ctx.load_raw(VS1, width, &[u64::from(A)]);
        ctx.load_raw(VS2, width, &[u64::from(A)]);
        let _ = ctx.run(VfInstruction::new(VfOp::Msac, VD, VS1, VS2));
        ctx.dump_raw(VD, width, 1)[0]
    };

    assert_eq!(run(ElementWidth::Bf16), 0x0000);
    // As f16, 0x3f81 and 0x3f82 are 1.876 and 1.877; the fused result is nonzero.
    assert_ne!(run(ElementWidth::F16), 0x0000);
}
