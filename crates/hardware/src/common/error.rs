//! Vector unit error definitions.
//!
//! This module defines the failures the vector unit reports. It provides:
//! 1. **Precondition Violations:** Malformed vector state or operand groups that
//!    make an instruction illegal. These are detected before any lane executes.
//! 2. **Configuration Errors:** Invalid unit geometry or unparsable config input.
//!
//! Floating-point exceptional results (NaN, infinity, overflow, underflow) are
//! never errors; they surface only as sticky flags in `fcsr.fflags`.

use thiserror::Error;

/// Precondition violations that make a vector instruction illegal.
///
/// On hardware every variant raises an illegal-instruction exception; the
/// instruction never starts executing lanes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VectorError {
    /// `vtype.vill` is set (reserved encoding or unsupported SEW/LMUL).
    #[error("vtype is illegal (vill set)")]
    IllegalVtype,

    /// The configured element width has no floating-point representation.
    #[error("no floating-point format for SEW={sew} (altfmt={altfmt})")]
    UnsupportedElementWidth {
        /// Selected element width in bits.
        sew: usize,
        /// Value of `vtype.altfmt`.
        altfmt: bool,
    },

    /// `vstart` lies past `vl`.
    #[error("vstart {vstart} exceeds vl {vl}")]
    StartBeyondLength {
        /// Current `vstart`.
        vstart: usize,
        /// Current `vl`.
        vl: usize,
    },

    /// `vl` exceeds the maximum for the current `vtype`.
    #[error("vl {vl} exceeds VLMAX {vlmax}")]
    LengthExceedsVlmax {
        /// Current `vl`.
        vl: usize,
        /// VLMAX for the current SEW/LMUL.
        vlmax: usize,
    },

    /// A register operand is not a multiple of the group size, or the group
    /// runs past `v31`.
    #[error("register group v{reg} is not valid for a group of {group} registers")]
    MisalignedRegisterGroup {
        /// Base register of the operand.
        reg: usize,
        /// Registers per group (LMUL, at least 1).
        group: usize,
    },

    /// A masked instruction's destination group overlaps `v0`.
    #[error("masked instruction writes v{vd}, overlapping the mask register")]
    MaskOverlap {
        /// Destination register.
        vd: usize,
    },

    /// `fcsr.frm` holds a reserved encoding.
    #[error("invalid dynamic rounding mode {0:#05b}")]
    InvalidRoundingMode(u8),
}

/// Invalid vector unit configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// VLEN is not a power of two in the supported range.
    #[error("VLEN {0} must be a power of two between 64 and 65536")]
    InvalidVlen(usize),

    /// ELEN is neither 32 nor 64, or exceeds VLEN.
    #[error("ELEN {elen} must be 32 or 64 and not exceed VLEN {vlen}")]
    InvalidElen {
        /// Requested ELEN.
        elen: usize,
        /// Requested VLEN.
        vlen: usize,
    },

    /// The configuration document could not be parsed.
    #[error("failed to parse vector config: {0}")]
    Parse(#[from] serde_json::Error),
}
