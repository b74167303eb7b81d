//! Per-element instruction bodies.
//!
//! Every operation supplies two bodies:
//! 1. **Fused:** one generic body over [`FusedArith`], instantiated for f16, f32,
//!    and f64. Multiply-add forms round once.
//! 2. **bf16:** composed of separately rounded `mul`, `add`, and `sub` calls.
//!    bf16 has no fused primitive, so these bodies round after the product
//!    and again after the sum.
//!
//! Arguments are always `(vd, vs1, vs2)`: the old destination element and the
//! two source elements of the same lane. Negation is the sign-bit XOR of
//! [`FloatElement::negate`]; it never rounds or raises flags.

use crate::core::units::fpu::{Bf16, FloatElement, FpEnv, FusedArith};

use super::instruction::VfOp;

/// The element computation of one `.vv` operation.
pub trait ElementBody {
    /// The operation this body implements.
    const OP: VfOp;

    /// Body for formats with a fused multiply-add.
    fn fused<E: FusedArith>(vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E;

    /// Body for bf16.
    fn bf16(vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16;
}

/// `vfadd.vv`
#[derive(Clone, Copy, Debug)]
pub struct Vfadd;

impl ElementBody for Vfadd {
    const OP: VfOp = VfOp::Add;

    fn fused<E: FusedArith>(_vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vs1.add(vs2, env)
    }

    fn bf16(_vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        vs1.add(vs2, env)
    }
}

/// `vfsub.vv`
#[derive(Clone, Copy, Debug)]
pub struct Vfsub;

impl ElementBody for Vfsub {
    const OP: VfOp = VfOp::Sub;

    fn fused<E: FusedArith>(_vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vs2.sub(vs1, env)
    }

    fn bf16(_vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        vs2.sub(vs1, env)
    }
}

/// `vfmul.vv`
#[derive(Clone, Copy, Debug)]
pub struct Vfmul;

impl ElementBody for Vfmul {
    const OP: VfOp = VfOp::Mul;

    fn fused<E: FusedArith>(_vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vs2.mul(vs1, env)
    }

    fn bf16(_vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        vs2.mul(vs1, env)
    }
}

/// `vfmacc.vv`: `vd = (vs1 * vs2) + vd`
#[derive(Clone, Copy, Debug)]
pub struct Vfmacc;

impl ElementBody for Vfmacc {
    const OP: VfOp = VfOp::Macc;

    fn fused<E: FusedArith>(vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vs1.mul_add(vs2, vd, env)
    }

    fn bf16(vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        vs1.mul(vs2, env).add(vd, env)
    }
}

/// `vfnmacc.vv`: `vd = -(vs1 * vs2) - vd`
#[derive(Clone, Copy, Debug)]
pub struct Vfnmacc;

impl ElementBody for Vfnmacc {
    const OP: VfOp = VfOp::Nmacc;

    fn fused<E: FusedArith>(vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vs2.negate().mul_add(vs1, vd.negate(), env)
    }

    fn bf16(vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        let sum = vs1.mul(vs2, env).add(vd, env);
        Bf16::ZERO.sub(sum, env)
    }
}

/// `vfmsac.vv`: `vd = (vs1 * vs2) - vd`
#[derive(Clone, Copy, Debug)]
pub struct Vfmsac;

impl ElementBody for Vfmsac {
    const OP: VfOp = VfOp::Msac;

    fn fused<E: FusedArith>(vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vs1.mul_add(vs2, vd.negate(), env)
    }

    fn bf16(vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        vs1.mul(vs2, env).sub(vd, env)
    }
}

/// `vfnmsac.vv`: `vd = -(vs1 * vs2) + vd`
#[derive(Clone, Copy, Debug)]
pub struct Vfnmsac;

impl ElementBody for Vfnmsac {
    const OP: VfOp = VfOp::Nmsac;

    fn fused<E: FusedArith>(vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vs2.negate().mul_add(vs1, vd, env)
    }

    fn bf16(vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        let product = vs1.mul(vs2, env);
        vd.sub(product, env)
    }
}

/// `vfmadd.vv`: `vd = (vd * vs1) + vs2`
#[derive(Clone, Copy, Debug)]
pub struct Vfmadd;

impl ElementBody for Vfmadd {
    const OP: VfOp = VfOp::Madd;

    fn fused<E: FusedArith>(vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vd.mul_add(vs1, vs2, env)
    }

    fn bf16(vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        vd.mul(vs1, env).add(vs2, env)
    }
}

/// `vfnmadd.vv`: `vd = -(vd * vs1) - vs2`
#[derive(Clone, Copy, Debug)]
pub struct Vfnmadd;

impl ElementBody for Vfnmadd {
    const OP: VfOp = VfOp::Nmadd;

    fn fused<E: FusedArith>(vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vd.negate().mul_add(vs1, vs2.negate(), env)
    }

    fn bf16(vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        let sum = vd.mul(vs1, env).add(vs2, env);
        Bf16::ZERO.sub(sum, env)
    }
}

/// `vfmsub.vv`: `vd = (vd * vs1) - vs2`
#[derive(Clone, Copy, Debug)]
pub struct Vfmsub;

impl ElementBody for Vfmsub {
    const OP: VfOp = VfOp::Msub;

    fn fused<E: FusedArith>(vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vd.mul_add(vs1, vs2.negate(), env)
    }

    fn bf16(vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        vd.mul(vs1, env).sub(vs2, env)
    }
}

/// `vfnmsub.vv`: `vd = -(vd * vs1) + vs2`
#[derive(Clone, Copy, Debug)]
pub struct Vfnmsub;

impl ElementBody for Vfnmsub {
    const OP: VfOp = VfOp::Nmsub;

    fn fused<E: FusedArith>(vd: E, vs1: E, vs2: E, env: &mut FpEnv) -> E {
        vd.negate().mul_add(vs1, vs2, env)
    }

    fn bf16(vd: Bf16, vs1: Bf16, vs2: Bf16, env: &mut FpEnv) -> Bf16 {
        let product = vd.mul(vs1, env);
        vs2.sub(product, env)
    }
}
