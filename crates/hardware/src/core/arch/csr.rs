//! Control and Status Register (CSR) definitions and operations.
//!
//! This module implements the CSR subset the vector floating-point unit reads and
//! updates. It provides:
//! 1. **Address Definitions:** Constants for the FP status and vector configuration CSRs.
//! 2. **Register Storage:** The `Csrs` struct for maintaining architectural state.
//! 3. **Access Logic:** Read and write operations following each CSR's field layout.
//!
//! `vl`, `vtype`, and `vlenb` are read-only through [`Csrs::write`]; `vl` and
//! `vtype` change only through [`Csrs::set_vl_vtype`], as `vsetvl` does.

use crate::common::constants::{FFLAGS_MASK, FRM_MASK, FRM_SHIFT};
use crate::core::units::fpu::{FpFlags, RoundingMode};

/// Floating-point accrued exceptions CSR address.
pub const FFLAGS: u32 = 0x001;

/// Floating-point dynamic rounding mode CSR address.
pub const FRM: u32 = 0x002;

/// Floating-point control and status register (`frm` + `fflags`) CSR address.
pub const FCSR: u32 = 0x003;

/// Vector start element index CSR address.
pub const VSTART: u32 = 0x008;

/// Vector length CSR address (read-only).
pub const VL: u32 = 0xC20;

/// Vector data type CSR address (read-only).
pub const VTYPE: u32 = 0xC21;

/// Vector register length in bytes CSR address (read-only).
pub const VLENB: u32 = 0xC22;

/// Control and Status Register file.
///
/// Holds the floating-point status (`fflags`, `frm`) and the vector
/// configuration (`vstart`, `vl`, `vtype`, `vlenb`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Csrs {
    /// Accrued floating-point exception flags.
    pub fflags: FpFlags,
    /// Raw 3-bit dynamic rounding mode; may hold a reserved encoding.
    pub frm: u8,
    /// First element index the next vector instruction executes.
    pub vstart: u64,
    /// Current vector length.
    pub vl: u64,
    /// Raw `vtype` value as last accepted by `vsetvl`.
    pub vtype: u64,
    /// VLEN / 8, fixed by the configuration.
    pub vlenb: u64,
}

impl Csrs {
    /// Creates the register set of a freshly reset unit.
    ///
    /// # Arguments
    ///
    /// * `vlenb` - Vector register width in bytes.
    /// * `vtype` - Reset value of `vtype` (normally with `vill` set).
    pub fn new(vlenb: usize, vtype: u64) -> Self {
        Self {
            vlenb: vlenb as u64,
            vtype,
            ..Self::default()
        }
    }

    /// Reads a CSR value by its address.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 12-bit CSR address.
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the specified CSR, or 0 if the address is not recognized.
    pub fn read(&self, addr: u32) -> u64 {
        match addr {
            FFLAGS => u64::from(self.fflags.bits()),
            FRM => u64::from(self.frm),
            FCSR => (u64::from(self.frm) << FRM_SHIFT) | u64::from(self.fflags.bits()),
            VSTART => self.vstart,
            VL => self.vl,
            VTYPE => self.vtype,
            VLENB => self.vlenb,
            _ => 0,
        }
    }

    /// Writes a value to a CSR by its address.
    ///
    /// Writes to read-only or unknown addresses are ignored.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 12-bit CSR address.
    /// * `val` - The 64-bit value to write.
    pub fn write(&mut self, addr: u32, val: u64) {
        match addr {
            FFLAGS => self.fflags = FpFlags::from_bits((val & FFLAGS_MASK) as u8),
            FRM => self.frm = (val & FRM_MASK) as u8,
            FCSR => {
                self.fflags = FpFlags::from_bits((val & FFLAGS_MASK) as u8);
                self.frm = ((val >> FRM_SHIFT) & FRM_MASK) as u8;
            }
            VSTART => self.vstart = val,
            _ => {}
        }
    }

    /// Installs a new `vl` and raw `vtype`, as `vsetvl` does.
    pub fn set_vl_vtype(&mut self, vl: u64, vtype: u64) {
        self.vl = vl;
        self.vtype = vtype;
    }

    /// ORs freshly raised flags into `fflags`.
    pub fn accrue(&mut self, flags: FpFlags) {
        self.fflags |= flags;
    }

    /// Decodes `frm` as a dynamic rounding mode.
    ///
    /// # Returns
    ///
    /// `None` when `frm` holds a reserved encoding (5, 6, or 7).
    pub fn rounding_mode(&self) -> Option<RoundingMode> {
        RoundingMode::from_bits(self.frm)
    }
}
