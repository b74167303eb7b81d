//! Bit-exact software floating-point arithmetic.
//!
//! One engine serves every [`FloatFormat`]. Operands are unpacked into an
//! integer significand and a power-of-two exponent, the operation is carried
//! out exactly in `u128`, and the result is rounded once by [`round_pack`].
//!
//! Behaviour follows the RISC-V flavour of IEEE 754-2008:
//! - every NaN result is the canonical quiet NaN, payloads are dropped;
//! - signaling NaN operands, `∞ - ∞`, and `0 × ∞` raise NV;
//! - `0 × ∞ + c` raises NV even when `c` is a quiet NaN;
//! - tininess is detected after rounding, and UF is raised only when the tiny
//!   result is also inexact;
//! - an exact zero sum of opposite-signed operands is `+0`, or `-0` under RDN.
//!
//! The host FPU is never consulted, so results do not depend on the host
//! rounding mode or on host fused-multiply-add support.

use super::FpEnv;
use super::exception_flags::FpFlags;
use super::formats::FloatFormat;
use super::nan_handling::{canonical_nan, is_signaling_nan};
use super::rounding_modes::RoundingMode;

/// MSB position that [`add_finite`] aligns both addends to.
///
/// Two bits of headroom above it absorb the carry of a same-sign sum.
const ALIGN_MSB: u32 = 125;

/// Operand class after unpacking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Class {
    Zero,
    /// Value is `sig * 2^exp`, `sig != 0`.
    Finite { exp: i32, sig: u128 },
    Infinite,
    Nan,
}

/// Splits an encoding into its sign and class.
fn unpack(fmt: FloatFormat, bits: u64) -> (bool, Class) {
    let sign = fmt.sign(bits);
    let exp_field = fmt.exp_field(bits);
    let frac = fmt.frac_field(bits);

    let class = if exp_field == fmt.exp_field_max() {
        if frac == 0 { Class::Infinite } else { Class::Nan }
    } else if exp_field == 0 {
        if frac == 0 {
            Class::Zero
        } else {
            Class::Finite {
                exp: fmt.min_quantum(),
                sig: u128::from(frac),
            }
        }
    } else {
        Class::Finite {
            exp: fmt.min_quantum() + exp_field as i32 - 1,
            sig: u128::from(frac | (1 << fmt.frac_bits)),
        }
    };
    (sign, class)
}

/// Raises NV if any operand is a signaling NaN and returns the canonical NaN.
fn propagate_nan(fmt: FloatFormat, operands: &[u64], env: &mut FpEnv) -> u64 {
    if operands.iter().any(|&bits| is_signaling_nan(fmt, bits)) {
        env.raise(FpFlags::NV);
    }
    canonical_nan(fmt)
}

/// Signals an invalid operation and returns the canonical NaN.
fn invalid(fmt: FloatFormat, env: &mut FpEnv) -> u64 {
    env.raise(FpFlags::NV);
    canonical_nan(fmt)
}

/// Sign of an exact zero produced by adding opposite-signed quantities.
fn cancellation_zero(fmt: FloatFormat, rm: RoundingMode) -> u64 {
    fmt.zero(rm == RoundingMode::Rdn)
}

/// Shifts `sig` right by `shift` bits and rounds the kept part per `rm`.
///
/// Returns the rounded integer and whether any nonzero bits were discarded.
/// A non-positive `shift` is an exact left shift.
fn round_shift(sig: u128, shift: i32, negative: bool, rm: RoundingMode) -> (u128, bool) {
    if shift <= 0 {
        return (sig << shift.unsigned_abs(), false);
    }
    let shift = shift.unsigned_abs();
    let (kept, rem, half) = if shift >= 128 {
        (0, sig, None)
    } else {
        (sig >> shift, sig & ((1u128 << shift) - 1), Some(1u128 << (shift - 1)))
    };
    let inexact = rem != 0;

    // With no representable half (shift >= 128), `rem < 2^127` is always below it.
    let increment = match rm {
        RoundingMode::Rne => half.is_some_and(|h| rem > h || (rem == h && kept & 1 == 1)),
        RoundingMode::Rmm => half.is_some_and(|h| rem >= h),
        RoundingMode::Rtz => false,
        RoundingMode::Rdn => inexact && negative,
        RoundingMode::Rup => inexact && !negative,
    };
    (kept + u128::from(increment), inexact)
}

/// Rounds the exact value `(-1)^negative * sig * 2^exp` into `fmt`.
///
/// `sig` must be nonzero and below `2^127`.
fn round_pack(
    fmt: FloatFormat,
    negative: bool,
    exp: i32,
    sig: u128,
    env: &mut FpEnv,
) -> u64 {
    debug_assert!(sig != 0 && sig >> 127 == 0);
    let rm = env.rm;
    let precision = fmt.frac_bits as i32;
    let min_quantum = fmt.min_quantum();

    let msb = 127 - sig.leading_zeros() as i32;
    // Quantum (weight of the result LSB) with an unbounded exponent range.
    let unbounded_quantum = exp + msb - precision;
    let quantum = unbounded_quantum.max(min_quantum);

    // Tininess after rounding: the value rounded to full precision with an
    // unbounded exponent is still below the smallest normal.
    let tiny = if unbounded_quantum < min_quantum {
        let (full, _) = round_shift(sig, unbounded_quantum - exp, negative, rm);
        let carried = full >> (precision + 1) != 0;
        !(carried && unbounded_quantum + 1 == min_quantum)
    } else {
        false
    };

    let (mut rounded, inexact) = round_shift(sig, quantum - exp, negative, rm);
    let mut quantum = quantum;
    if rounded >> (precision + 1) != 0 {
        // Carry out of the significand; the dropped bit is zero.
        rounded >>= 1;
        quantum += 1;
    }

    let biased_exp = if rounded >> precision != 0 {
        i64::from(quantum - min_quantum + 1)
    } else {
        0
    };

    if biased_exp >= fmt.exp_field_max() as i64 {
        env.raise(FpFlags::OF | FpFlags::NX);
        let to_infinity = match rm {
            RoundingMode::Rne | RoundingMode::Rmm => true,
            RoundingMode::Rtz => false,
            RoundingMode::Rdn => negative,
            RoundingMode::Rup => !negative,
        };
        return if to_infinity {
            fmt.infinity(negative)
        } else {
            fmt.max_finite(negative)
        };
    }

    if inexact {
        env.raise(FpFlags::NX);
        if tiny {
            env.raise(FpFlags::UF);
        }
    }

    fmt.zero(negative) | ((biased_exp as u64) << fmt.frac_bits) | (rounded as u64 & fmt.frac_mask())
}

/// Shifts right, ORing every discarded bit into the result LSB.
fn shift_right_jam(sig: u128, shift: u32) -> u128 {
    if shift == 0 {
        sig
    } else if shift >= 128 {
        u128::from(sig != 0)
    } else {
        (sig >> shift) | u128::from(sig & ((1u128 << shift) - 1) != 0)
    }
}

/// Moves the MSB of a nonzero `sig` to [`ALIGN_MSB`], adjusting `exp`.
fn normalize(exp: i32, sig: u128) -> (i32, u128) {
    let msb = 127 - sig.leading_zeros();
    if msb <= ALIGN_MSB {
        let shift = ALIGN_MSB - msb;
        (exp - shift as i32, sig << shift)
    } else {
        let shift = msb - ALIGN_MSB;
        (exp + shift as i32, shift_right_jam(sig, shift))
    }
}

/// Adds two nonzero finite values given as exact significand/exponent pairs.
///
/// The smaller addend is aligned with a sticky bit, which never lies at or
/// above the rounding position of the result.
#[allow(clippy::too_many_arguments)]
fn add_finite(
    fmt: FloatFormat,
    a_negative: bool,
    a_exp: i32,
    a_sig: u128,
    b_negative: bool,
    b_exp: i32,
    b_sig: u128,
    env: &mut FpEnv,
) -> u64 {
    let a = normalize(a_exp, a_sig);
    let b = normalize(b_exp, b_sig);

    let ((big_negative, (big_exp, big_sig)), (small_negative, (small_exp, small_sig))) =
        if a >= b {
            ((a_negative, a), (b_negative, b))
        } else {
            ((b_negative, b), (a_negative, a))
        };
    let small_sig = shift_right_jam(small_sig, big_exp.abs_diff(small_exp));

    if big_negative == small_negative {
        round_pack(fmt, big_negative, big_exp, big_sig + small_sig, env)
    } else {
        let diff = big_sig - small_sig;
        if diff == 0 {
            cancellation_zero(fmt, env.rm)
        } else {
            round_pack(fmt, big_negative, big_exp, diff, env)
        }
    }
}

/// `a + b` in `fmt`.
pub fn add(fmt: FloatFormat, a: u64, b: u64, env: &mut FpEnv) -> u64 {
    let (a_negative, a_class) = unpack(fmt, a);
    let (b_negative, b_class) = unpack(fmt, b);

    match (a_class, b_class) {
        (Class::Nan, _) | (_, Class::Nan) => propagate_nan(fmt, &[a, b], env),
        (Class::Infinite, Class::Infinite) => {
            if a_negative == b_negative {
                fmt.infinity(a_negative)
            } else {
                invalid(fmt, env)
            }
        }
        (Class::Infinite, _) => fmt.infinity(a_negative),
        (_, Class::Infinite) => fmt.infinity(b_negative),
        (Class::Zero, Class::Zero) => {
            if a_negative == b_negative {
                fmt.zero(a_negative)
            } else {
                cancellation_zero(fmt, env.rm)
            }
        }
        (Class::Zero, Class::Finite { .. }) => b,
        (Class::Finite { .. }, Class::Zero) => a,
        (
            Class::Finite {
                exp: a_exp,
                sig: a_sig,
            },
            Class::Finite {
                exp: b_exp,
                sig: b_sig,
            },
        ) => add_finite(fmt, a_negative, a_exp, a_sig, b_negative, b_exp, b_sig, env),
    }
}

/// `a - b` in `fmt`.
///
/// Identical to adding `b` with its sign bit flipped; the flip cannot change
/// whether `b` is a NaN or whether it signals.
pub fn sub(fmt: FloatFormat, a: u64, b: u64, env: &mut FpEnv) -> u64 {
    add(fmt, a, b ^ fmt.sign_bit(), env)
}

/// `a * b` in `fmt`.
pub fn mul(fmt: FloatFormat, a: u64, b: u64, env: &mut FpEnv) -> u64 {
    let (a_negative, a_class) = unpack(fmt, a);
    let (b_negative, b_class) = unpack(fmt, b);
    let negative = a_negative != b_negative;

    match (a_class, b_class) {
        (Class::Nan, _) | (_, Class::Nan) => propagate_nan(fmt, &[a, b], env),
        (Class::Infinite, Class::Zero) | (Class::Zero, Class::Infinite) => invalid(fmt, env),
        (Class::Infinite, _) | (_, Class::Infinite) => fmt.infinity(negative),
        (Class::Zero, _) | (_, Class::Zero) => fmt.zero(negative),
        (
            Class::Finite {
                exp: a_exp,
                sig: a_sig,
            },
            Class::Finite {
                exp: b_exp,
                sig: b_sig,
            },
        ) => round_pack(fmt, negative, a_exp + b_exp, a_sig * b_sig, env),
    }
}

/// `a * b + c` in `fmt` with a single rounding.
pub fn mul_add(fmt: FloatFormat, a: u64, b: u64, c: u64, env: &mut FpEnv) -> u64 {
    let (a_negative, a_class) = unpack(fmt, a);
    let (b_negative, b_class) = unpack(fmt, b);
    let (c_negative, c_class) = unpack(fmt, c);
    let product_negative = a_negative != b_negative;

    if a_class == Class::Nan || b_class == Class::Nan {
        return propagate_nan(fmt, &[a, b, c], env);
    }

    if a_class == Class::Infinite || b_class == Class::Infinite {
        if a_class == Class::Zero || b_class == Class::Zero {
            return invalid(fmt, env);
        }
        return match c_class {
            Class::Nan => propagate_nan(fmt, &[c], env),
            Class::Infinite if c_negative != product_negative => invalid(fmt, env),
            _ => fmt.infinity(product_negative),
        };
    }

    match c_class {
        Class::Nan => return propagate_nan(fmt, &[c], env),
        Class::Infinite => return fmt.infinity(c_negative),
        _ => {}
    }

    let (product_exp, product_sig) = match (a_class, b_class) {
        (
            Class::Finite {
                exp: a_exp,
                sig: a_sig,
            },
            Class::Finite {
                exp: b_exp,
                sig: b_sig,
            },
        ) => (a_exp + b_exp, a_sig * b_sig),
        _ => {
            // Exact zero product.
            return match c_class {
                Class::Zero if c_negative != product_negative => cancellation_zero(fmt, env.rm),
                _ => c,
            };
        }
    };

    match c_class {
        Class::Finite {
            exp: c_exp,
            sig: c_sig,
        } => add_finite(
            fmt,
            product_negative,
            product_exp,
            product_sig,
            c_negative,
            c_exp,
            c_sig,
            env,
        ),
        _ => round_pack(fmt, product_negative, product_exp, product_sig, env),
    }
}
