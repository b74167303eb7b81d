//! Element format tests.
//!
//! These tests verify the bit layouts of the four element formats, their sign
//! constants, and the sign-bit negation every format exposes.

use rstest::rstest;
use rvsim_vfpu::core::units::fpu::{
    Bf16, ElementWidth, F16, F32, F64, FloatElement, FloatFormat,
};

#[rstest]
#[case(FloatFormat::HALF, 16, 15, 0x7c00, 0x7bff)]
#[case(FloatFormat::BFLOAT16, 16, 127, 0x7f80, 0x7f7f)]
#[case(FloatFormat::SINGLE, 32, 127, 0x7f80_0000, 0x7f7f_ffff)]
#[case(FloatFormat::DOUBLE, 64, 1023, 0x7ff0_0000_0000_0000, 0x7fef_ffff_ffff_ffff)]
fn format_layout(
    #[case] fmt: FloatFormat,
    #[case] width: u32,
    #[case] bias: i32,
    #[case] infinity: u64,
    #[case] max_finite: u64,
) {
    assert_eq!(fmt.width(), width);
    assert_eq!(fmt.bias(), bias);
    assert_eq!(fmt.infinity(false), infinity);
    assert_eq!(fmt.max_finite(false), max_finite);
    assert_eq!(fmt.infinity(true), infinity | fmt.sign_bit());
    assert_eq!(fmt.zero(true), fmt.sign_bit());
}

#[test]
fn sign_constants() {
    assert_eq!(F16::SIGN, 0x8000);
    assert_eq!(Bf16::SIGN, 0x8000);
    assert_eq!(F32::SIGN, 0x8000_0000);
    assert_eq!(F64::SIGN, 0x8000_0000_0000_0000);
    assert_eq!(F32::FORMAT.sign_bit(), u64::from(F32::SIGN));
}

#[test]
fn negate_flips_only_the_sign() {
    assert_eq!(F16::new(0x0000).negate(), F16::new(0x8000));
    assert_eq!(F16::new(0x8000).negate(), F16::new(0x0000));
    assert_eq!(Bf16::new(0x7fc1).negate(), Bf16::new(0xffc1));
    assert_eq!(F32::from_f32(1.5).negate().to_f32(), -1.5);
    assert_eq!(F64::new(0x7ff0_0000_0000_0001).negate().bits(), 0xfff0_0000_0000_0001);
}

#[test]
fn from_bits_truncates_to_width() {
    assert_eq!(F16::from_bits(0x1234_5678).bits(), 0x5678);
    assert_eq!(Bf16::from_bits(u64::MAX).bits(), 0xffff);
    assert_eq!(F32::from_bits(0xffff_ffff_3f80_0000).to_f32(), 1.0);
    assert_eq!(F64::from_bits(u64::MAX).to_bits(), u64::MAX);
}

#[test]
fn element_width_metadata() {
    assert_eq!(F16::WIDTH, ElementWidth::F16);
    assert_eq!(Bf16::WIDTH, ElementWidth::Bf16);
    assert_eq!(ElementWidth::Bf16.bits(), 16);
    assert_eq!(ElementWidth::F64.bytes(), 8);
    assert_eq!(ElementWidth::Bf16.format(), FloatFormat::BFLOAT16);
    assert_eq!(ElementWidth::F32.to_string(), "f32");
    assert_eq!(ElementWidth::Bf16.to_string(), "bf16");
}

#[test]
fn debug_shows_raw_bits() {
    assert_eq!(format!("{:?}", F16::new(0x3c00)), "F16(0x3c00)");
    assert_eq!(format!("{:?}", Bf16::new(0x3f80)), "Bf16(0x3f80)");
    assert_eq!(format!("{:?}", F32::from_f32(1.0)), "F32(0x3f800000)");
    assert_eq!(format!("{:?}", F64::from_f64(1.0)), "F64(0x3ff0000000000000)");
}

#[test]
fn classification() {
    assert!(F32::from_f32(f32::NAN).is_nan());
    assert!(!F32::from_f32(f32::INFINITY).is_nan());
    assert!(Bf16::new(0x7f81).is_nan());
    assert!(!Bf16::ZERO.is_nan());
}
