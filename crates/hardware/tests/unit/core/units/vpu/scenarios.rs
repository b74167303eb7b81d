//! # Operation Scenario Tests
//!
//! Every operation in every format with `vs1 = 1`, `vs2 = 2`, `vd = 3`. The
//! inputs and results are exact in all four formats, so one expected value
//! per operation covers f16, bf16, f32, and f64.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvsim_vfpu::core::arch::Lmul;
use rvsim_vfpu::core::units::fpu::{ElementWidth, F32, FpFlags};
use rvsim_vfpu::core::units::vpu::{VfInstruction, VfOp};

use crate::common::{TestContext, decode, encode, single};

const VD: usize = 1;
const VS1: usize = 2;
const VS2: usize = 3;

// ══════════════════════════════════════════════════════════
// 1. All Operations, All Formats
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::add(VfOp::Add, 3.0)]
#[case::sub(VfOp::Sub, 1.0)]
#[case::mul(VfOp::Mul, 2.0)]
#[case::macc(VfOp::Macc, 5.0)]
#[case::nmacc(VfOp::Nmacc, -5.0)]
#[case::msac(VfOp::Msac, -1.0)]
#[case::nmsac(VfOp::Nmsac, 1.0)]
#[case::madd(VfOp::Madd, 5.0)]
#[case::nmadd(VfOp::Nmadd, -5.0)]
#[case::msub(VfOp::Msub, 1.0)]
#[case::nmsub(VfOp::Nmsub, -1.0)]
fn one_two_three(
    #[case] op: VfOp,
    #[case] expected: f64,
    #[values(ElementWidth::F16, ElementWidth::Bf16, ElementWidth::F32, ElementWidth::F64)]
    width: ElementWidth,
) {
    let lanes = 4;
    let mut ctx = TestContext::new().configure(width, Lmul::M1, lanes.min(128 / width.bits()));
    let vl = ctx.vpu.vl();
    ctx.load_raw(VD, width, &vec![encode(width, 3.0); vl]);
    ctx.load_raw(VS1, width, &vec![encode(width, 1.0); vl]);
    ctx.load_raw(VS2, width, &vec![encode(width, 2.0); vl]);

    let summary = ctx.run(VfInstruction::new(op, VD, VS1, VS2));

    assert_eq!(summary.active, vl);
    let results: Vec<f64> = ctx
        .dump_raw(VD, width, vl)
        .into_iter()
        .map(|bits| decode(width, bits))
        .collect();
    assert_eq!(results, vec![expected; vl], "{op} at {width}");
    assert_eq!(ctx.fflags(), FpFlags::NONE);
}

// ══════════════════════════════════════════════════════════
// 2. Single-Precision Scenario
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::macc(VfOp::Macc, 0x40a0_0000)]
#[case::msac(VfOp::Msac, 0xbf80_0000)]
#[case::nmacc(VfOp::Nmacc, 0xc0a0_0000)]
fn single_lane_f32(#[case] op: VfOp, #[case] expected: u32) {
    let mut ctx = TestContext::new().configure(ElementWidth::F32, Lmul::M1, 1);
    ctx.load(VS1, &[single(1.0)]);
    ctx.load(VS2, &[single(2.0)]);
    ctx.load(VD, &[single(3.0)]);

    let _ = ctx.run(VfInstruction::new(op, VD, VS1, VS2));

    assert_eq!(ctx.dump::<F32>(VD, 1), vec![F32::new(expected)]);
}

// ══════════════════════════════════════════════════════════
// 3. Exceptional Operands
// ══════════════════════════════════════════════════════════

fn signaling_nan(width: ElementWidth) -> u64 {
    match width {
        ElementWidth::F16 => 0x7c01,
        ElementWidth::Bf16 => 0x7f81,
        ElementWidth::F32 => 0x7f80_0001,
        ElementWidth::F64 => 0x7ff0_0000_0000_0001,
    }
}

fn canonical_nan(width: ElementWidth) -> u64 {
    match width {
        ElementWidth::F16 => 0x7e00,
        ElementWidth::Bf16 => 0x7fc0,
        ElementWidth::F32 => 0x7fc0_0000,
        ElementWidth::F64 => 0x7ff8_0000_0000_0000,
    }
}

#[rstest]
fn signaling_nan_operand_is_invalid(
    #[values(VfOp::Add, VfOp::Mul, VfOp::Macc, VfOp::Nmsub)] op: VfOp,
    #[values(ElementWidth::F16, ElementWidth::Bf16, ElementWidth::F32, ElementWidth::F64)]
    width: ElementWidth,
) {
    let mut ctx = TestContext::new().configure(width, Lmul::M1, 1);
    ctx.load_raw(VD, width, &[encode(width, 3.0)]);
    ctx.load_raw(VS1, width, &[signaling_nan(width)]);
    ctx.load_raw(VS2, width, &[encode(width, 2.0)]);

    let _ = ctx.run(VfInstruction::new(op, VD, VS1, VS2));

    assert_eq!(ctx.dump_raw(VD, width, 1), vec![canonical_nan(width)]);
    assert_eq!(ctx.fflags(), FpFlags::NV);
}

#[rstest]
fn zero_times_infinity_plus_quiet_nan_is_invalid(
    #[values(ElementWidth::F16, ElementWidth::F32, ElementWidth::F64)] width: ElementWidth,
) {
    let mut ctx = TestContext::new().configure(width, Lmul::M1, 1);
    ctx.load_raw(VD, width, &[canonical_nan(width)]);
    ctx.load_raw(VS1, width, &[encode(width, 0.0)]);
    ctx.load_raw(VS2, width, &[encode(width, f64::INFINITY)]);

    let _ = ctx.run(VfInstruction::new(VfOp::Macc, VD, VS1, VS2));

    assert_eq!(ctx.dump_raw(VD, width, 1), vec![canonical_nan(width)]);
    assert_eq!(ctx.fflags(), FpFlags::NV);
}

#[rstest]
fn infinity_minus_infinity_is_invalid(
    #[values(ElementWidth::F16, ElementWidth::Bf16, ElementWidth::F32, ElementWidth::F64)]
    width: ElementWidth,
) {
    let mut ctx = TestContext::new().configure(width, Lmul::M1, 1);
    ctx.load_raw(VS1, width, &[encode(width, f64::INFINITY)]);
    ctx.load_raw(VS2, width, &[encode(width, f64::INFINITY)]);

    let _ = ctx.run(VfInstruction::new(VfOp::Sub, VD, VS1, VS2));

    assert_eq!(ctx.dump_raw(VD, width, 1), vec![canonical_nan(width)]);
    assert_eq!(ctx.fflags(), FpFlags::NV);
}
