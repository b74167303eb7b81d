//! Floating-point element formats.
//!
//! Four disjoint element representations are supported. Each is a newtype over
//! its raw bit pattern, so signed zeros and NaN payloads are never touched by
//! host float conversions:
//!
//! | Type     | Bits | Exponent | Fraction | Fused multiply-add |
//! |----------|------|----------|----------|--------------------|
//! | [`F16`]  | 16   | 5        | 10       | yes                |
//! | [`Bf16`] | 16   | 8        | 7        | no                 |
//! | [`F32`]  | 32   | 8        | 23       | yes                |
//! | [`F64`]  | 64   | 11       | 52       | yes                |
//!
//! [`FloatElement`] is the arithmetic oracle contract every format provides
//! (`add`, `sub`, `mul`). [`FusedArith`] adds the single-rounding `mul_add`
//! and is deliberately not implemented for [`Bf16`].

use std::fmt;

use super::FpEnv;
use super::softfloat;

/// Bit layout of a binary IEEE 754 interchange format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloatFormat {
    /// Width of the biased exponent field.
    pub exp_bits: u32,
    /// Width of the trailing significand (fraction) field.
    pub frac_bits: u32,
}

impl FloatFormat {
    /// IEEE 754 binary16.
    pub const HALF: Self = Self {
        exp_bits: 5,
        frac_bits: 10,
    };

    /// bfloat16: binary32 with the fraction truncated to 7 bits.
    pub const BFLOAT16: Self = Self {
        exp_bits: 8,
        frac_bits: 7,
    };

    /// IEEE 754 binary32.
    pub const SINGLE: Self = Self {
        exp_bits: 8,
        frac_bits: 23,
    };

    /// IEEE 754 binary64.
    pub const DOUBLE: Self = Self {
        exp_bits: 11,
        frac_bits: 52,
    };

    /// Total encoding width in bits.
    #[inline]
    pub const fn width(self) -> u32 {
        1 + self.exp_bits + self.frac_bits
    }

    /// Mask of the sign bit (the most significant bit of the encoding).
    #[inline]
    pub const fn sign_bit(self) -> u64 {
        1 << (self.width() - 1)
    }

    /// Mask of the fraction field.
    #[inline]
    pub const fn frac_mask(self) -> u64 {
        (1 << self.frac_bits) - 1
    }

    /// Most significant fraction bit; set in every quiet NaN.
    #[inline]
    pub const fn quiet_bit(self) -> u64 {
        1 << (self.frac_bits - 1)
    }

    /// All-ones exponent field value (infinities and NaNs).
    #[inline]
    pub const fn exp_field_max(self) -> u64 {
        (1 << self.exp_bits) - 1
    }

    /// Exponent bias.
    #[inline]
    pub const fn bias(self) -> i32 {
        (1 << (self.exp_bits - 1)) - 1
    }

    /// Weight exponent of the least significant bit of a subnormal.
    ///
    /// Every finite value of the format is an integer multiple of
    /// `2^min_quantum()`.
    #[inline]
    pub const fn min_quantum(self) -> i32 {
        1 - self.bias() - self.frac_bits as i32
    }

    /// Extracts the biased exponent field.
    #[inline]
    pub const fn exp_field(self, bits: u64) -> u64 {
        (bits >> self.frac_bits) & self.exp_field_max()
    }

    /// Extracts the fraction field.
    #[inline]
    pub const fn frac_field(self, bits: u64) -> u64 {
        bits & self.frac_mask()
    }

    /// Returns true if the sign bit of `bits` is set.
    #[inline]
    pub const fn sign(self, bits: u64) -> bool {
        bits & self.sign_bit() != 0
    }

    /// Signed zero.
    #[inline]
    pub const fn zero(self, negative: bool) -> u64 {
        if negative { self.sign_bit() } else { 0 }
    }

    /// Signed infinity.
    #[inline]
    pub const fn infinity(self, negative: bool) -> u64 {
        self.zero(negative) | (self.exp_field_max() << self.frac_bits)
    }

    /// Largest finite magnitude with the given sign.
    #[inline]
    pub const fn max_finite(self, negative: bool) -> u64 {
        self.zero(negative) | ((self.exp_field_max() - 1) << self.frac_bits) | self.frac_mask()
    }
}

/// Element representation selected for one vector instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementWidth {
    /// IEEE half precision (SEW=16).
    F16,
    /// bfloat16 (SEW=16 with `vtype.altfmt`).
    Bf16,
    /// IEEE single precision (SEW=32).
    F32,
    /// IEEE double precision (SEW=64).
    F64,
}

impl ElementWidth {
    /// Element width in bits (the SEW the format occupies).
    pub fn bits(self) -> usize {
        match self {
            Self::F16 | Self::Bf16 => 16,
            Self::F32 => 32,
            Self::F64 => 64,
        }
    }

    /// Element width in bytes.
    pub fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Bit layout of the format.
    pub fn format(self) -> FloatFormat {
        match self {
            Self::F16 => FloatFormat::HALF,
            Self::Bf16 => FloatFormat::BFLOAT16,
            Self::F32 => FloatFormat::SINGLE,
            Self::F64 => FloatFormat::DOUBLE,
        }
    }

    /// Short lowercase name used in traces.
    pub fn name(self) -> &'static str {
        match self {
            Self::F16 => "f16",
            Self::Bf16 => "bf16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed-width floating-point element and its arithmetic oracle.
///
/// All arithmetic consults `env.rm` and ORs raised exception flags into
/// `env.flags`.
pub trait FloatElement: Copy + PartialEq + Eq + fmt::Debug {
    /// Bit layout of the representation.
    const FORMAT: FloatFormat;

    /// The runtime width tag that selects this representation.
    const WIDTH: ElementWidth;

    /// Builds an element from the low `FORMAT.width()` bits of `bits`.
    fn from_bits(bits: u64) -> Self;

    /// Returns the raw encoding, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Flips the sign bit. Never rounds, never raises flags.
    fn negate(self) -> Self;

    /// Returns true for quiet and signaling NaNs.
    fn is_nan(self) -> bool {
        super::nan_handling::is_nan(Self::FORMAT, self.to_bits())
    }

    /// `self + rhs`, correctly rounded.
    fn add(self, rhs: Self, env: &mut FpEnv) -> Self {
        Self::from_bits(softfloat::add(Self::FORMAT, self.to_bits(), rhs.to_bits(), env))
    }

    /// `self - rhs`, correctly rounded.
    fn sub(self, rhs: Self, env: &mut FpEnv) -> Self {
        Self::from_bits(softfloat::sub(Self::FORMAT, self.to_bits(), rhs.to_bits(), env))
    }

    /// `self * rhs`, correctly rounded.
    fn mul(self, rhs: Self, env: &mut FpEnv) -> Self {
        Self::from_bits(softfloat::mul(Self::FORMAT, self.to_bits(), rhs.to_bits(), env))
    }
}

/// Formats with a fused multiply-add primitive.
pub trait FusedArith: FloatElement {
    /// `self * b + c` with a single rounding.
    fn mul_add(self, b: Self, c: Self, env: &mut FpEnv) -> Self {
        Self::from_bits(softfloat::mul_add(
            Self::FORMAT,
            self.to_bits(),
            b.to_bits(),
            c.to_bits(),
            env,
        ))
    }
}

/// IEEE 754 half-precision element.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct F16(u16);

impl F16 {
    /// Sign-bit mask.
    pub const SIGN: u16 = 0x8000;

    /// Wraps a raw encoding.
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw encoding.
    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl FloatElement for F16 {
    const FORMAT: FloatFormat = FloatFormat::HALF;
    const WIDTH: ElementWidth = ElementWidth::F16;

    #[inline]
    fn from_bits(bits: u64) -> Self {
        Self(bits as u16)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self.0)
    }

    #[inline]
    fn negate(self) -> Self {
        Self(self.0 ^ Self::SIGN)
    }
}

impl FusedArith for F16 {}

impl fmt::Debug for F16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F16({:#06x})", self.0)
    }
}

/// bfloat16 element. Has no fused multiply-add.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bf16(u16);

impl Bf16 {
    /// Sign-bit mask.
    pub const SIGN: u16 = 0x8000;

    /// Positive zero, the minuend of the two-step negations.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw encoding.
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw encoding.
    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl FloatElement for Bf16 {
    const FORMAT: FloatFormat = FloatFormat::BFLOAT16;
    const WIDTH: ElementWidth = ElementWidth::Bf16;

    #[inline]
    fn from_bits(bits: u64) -> Self {
        Self(bits as u16)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self.0)
    }

    #[inline]
    fn negate(self) -> Self {
        Self(self.0 ^ Self::SIGN)
    }
}

impl fmt::Debug for Bf16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bf16({:#06x})", self.0)
    }
}

/// IEEE 754 single-precision element.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct F32(u32);

impl F32 {
    /// Sign-bit mask.
    pub const SIGN: u32 = 0x8000_0000;

    /// Wraps a raw encoding.
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw encoding.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Bit-exact conversion from a host `f32`.
    pub fn from_f32(value: f32) -> Self {
        Self(value.to_bits())
    }

    /// Bit-exact conversion to a host `f32`.
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }
}

impl FloatElement for F32 {
    const FORMAT: FloatFormat = FloatFormat::SINGLE;
    const WIDTH: ElementWidth = ElementWidth::F32;

    #[inline]
    fn from_bits(bits: u64) -> Self {
        Self(bits as u32)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self.0)
    }

    #[inline]
    fn negate(self) -> Self {
        Self(self.0 ^ Self::SIGN)
    }
}

impl FusedArith for F32 {}

impl fmt::Debug for F32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F32({:#010x})", self.0)
    }
}

/// IEEE 754 double-precision element.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct F64(u64);

impl F64 {
    /// Sign-bit mask.
    pub const SIGN: u64 = 0x8000_0000_0000_0000;

    /// Wraps a raw encoding.
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw encoding.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Bit-exact conversion from a host `f64`.
    pub fn from_f64(value: f64) -> Self {
        Self(value.to_bits())
    }

    /// Bit-exact conversion to a host `f64`.
    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl FloatElement for F64 {
    const FORMAT: FloatFormat = FloatFormat::DOUBLE;
    const WIDTH: ElementWidth = ElementWidth::F64;

    #[inline]
    fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        self.0
    }

    #[inline]
    fn negate(self) -> Self {
        Self(self.0 ^ Self::SIGN)
    }
}

impl FusedArith for F64 {}

impl fmt::Debug for F64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F64({:#018x})", self.0)
    }
}
