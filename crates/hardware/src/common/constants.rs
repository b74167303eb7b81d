//! Global Vector Unit Constants.
//!
//! This module defines constants shared across the vector unit. It includes:
//! 1. **Register File Constants:** Register count and the mask register index.
//! 2. **Geometry Limits:** Legal VLEN/ELEN ranges.
//! 3. **CSR Field Layout:** Bit positions of `vtype` and `fcsr` fields.

/// Number of architectural vector registers.
pub const NUM_VREGS: usize = 32;

/// Register holding the lane mask of masked instructions (`v0`).
pub const MASK_REG: usize = 0;

/// Smallest supported VLEN in bits.
pub const VLEN_MIN: usize = 64;

/// Largest VLEN the architecture allows in bits.
pub const VLEN_MAX: usize = 65536;

/// Mask of the `vtype.vlmul` field (bits 2:0).
pub const VTYPE_VLMUL_MASK: u64 = 0x7;

/// Shift of the `vtype.vsew` field (bits 5:3).
pub const VTYPE_VSEW_SHIFT: u64 = 3;

/// Mask of the `vtype.vsew` field after shifting.
pub const VTYPE_VSEW_MASK: u64 = 0x7;

/// Bit position of `vtype.vta` (tail agnostic).
pub const VTYPE_VTA_BIT: u64 = 6;

/// Bit position of `vtype.vma` (mask agnostic).
pub const VTYPE_VMA_BIT: u64 = 7;

/// Bit position of `vtype.altfmt` (alternate FP format, selects bf16 at SEW=16).
pub const VTYPE_ALTFMT_BIT: u64 = 8;

/// Bit position of `vtype.vill` (XLEN-1 on RV64).
pub const VTYPE_VILL_BIT: u64 = 63;

/// Reserved `vtype` bits (62:9); writing any of them sets `vill`.
pub const VTYPE_RESERVED_MASK: u64 = !((1 << (VTYPE_ALTFMT_BIT + 1)) - 1) & !(1 << VTYPE_VILL_BIT);

/// Mask of `fcsr.fflags` (bits 4:0).
pub const FFLAGS_MASK: u64 = 0x1F;

/// Shift of `fcsr.frm` (bits 7:5).
pub const FRM_SHIFT: u64 = 5;

/// Mask of `fcsr.frm` after shifting.
pub const FRM_MASK: u64 = 0x7;
