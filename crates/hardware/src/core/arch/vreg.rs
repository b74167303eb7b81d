//! RISC-V Vector Register File.
//!
//! This module implements the vector register file (`v0`-`v31`). It performs the following:
//! 1. **Storage:** Holds 32 registers of VLEN bits as one contiguous byte array.
//! 2. **Element Access:** Reads and writes elements of any supported width in
//!    little-endian order. A register group spans consecutive registers, so element
//!    `i` of group `vN` lives at byte `N * VLENB + i * EEW / 8`.
//! 3. **Mask Access:** Bit `i % 8` of byte `i / 8` of a register is mask bit `i`.

use std::fmt;

use crate::common::constants::{MASK_REG, NUM_VREGS};
use crate::core::units::fpu::FloatElement;

/// Vector register file.
///
/// Accesses past `v31` read as zero and are dropped on write; register group
/// legality is checked before any instruction reaches the file.
#[derive(Clone, PartialEq, Eq)]
pub struct VectorRegisterFile {
    vlenb: usize,
    data: Vec<u8>,
}

impl VectorRegisterFile {
    /// Creates a zeroed register file.
    ///
    /// # Arguments
    ///
    /// * `vlen` - Register width in bits (a validated power of two, at least 64).
    pub fn new(vlen: usize) -> Self {
        let vlenb = vlen / 8;
        Self {
            vlenb,
            data: vec![0; vlenb * NUM_VREGS],
        }
    }

    /// Register width in bits.
    pub fn vlen(&self) -> usize {
        self.vlenb * 8
    }

    /// Register width in bytes.
    pub fn vlenb(&self) -> usize {
        self.vlenb
    }

    fn span(&self, reg: usize, bytes: usize, idx: usize) -> Option<std::ops::Range<usize>> {
        let start = reg.checked_mul(self.vlenb)?.checked_add(idx.checked_mul(bytes)?)?;
        let end = start.checked_add(bytes)?;
        (end <= self.data.len()).then_some(start..end)
    }

    /// Reads a raw `bytes`-wide element of the group starting at `reg`.
    ///
    /// # Arguments
    ///
    /// * `reg` - Base register of the group.
    /// * `bytes` - Element width in bytes (1, 2, 4, or 8).
    /// * `idx` - Element index within the group.
    ///
    /// # Returns
    ///
    /// The element zero-extended to 64 bits.
    pub fn read_raw(&self, reg: usize, bytes: usize, idx: usize) -> u64 {
        let Some(range) = self.span(reg, bytes, idx) else {
            return 0;
        };
        let mut buf = [0u8; 8];
        buf[..bytes].copy_from_slice(&self.data[range]);
        u64::from_le_bytes(buf)
    }

    /// Writes the low `bytes` bytes of `val` to an element of the group at `reg`.
    pub fn write_raw(&mut self, reg: usize, bytes: usize, idx: usize, val: u64) {
        if let Some(range) = self.span(reg, bytes, idx) {
            self.data[range].copy_from_slice(&val.to_le_bytes()[..bytes]);
        }
    }

    /// Reads element `idx` of the group at `reg` as an `E`.
    #[inline]
    pub fn read<E: FloatElement>(&self, reg: usize, idx: usize) -> E {
        E::from_bits(self.read_raw(reg, E::WIDTH.bytes(), idx))
    }

    /// Writes `value` to element `idx` of the group at `reg`.
    #[inline]
    pub fn write<E: FloatElement>(&mut self, reg: usize, idx: usize, value: E) {
        self.write_raw(reg, E::WIDTH.bytes(), idx, value.to_bits());
    }

    /// Reads mask bit `idx` of register `reg`.
    pub fn mask_bit_of(&self, reg: usize, idx: usize) -> bool {
        self.data
            .get(reg * self.vlenb + idx / 8)
            .is_some_and(|byte| (byte >> (idx % 8)) & 1 != 0)
    }

    /// Reads mask bit `idx` of `v0`.
    #[inline]
    pub fn mask_bit(&self, idx: usize) -> bool {
        self.mask_bit_of(MASK_REG, idx)
    }

    /// Sets or clears mask bit `idx` of register `reg`.
    pub fn set_mask_bit(&mut self, reg: usize, idx: usize, val: bool) {
        let offset = reg * self.vlenb + idx / 8;
        if let Some(byte) = self.data.get_mut(offset) {
            if val {
                *byte |= 1 << (idx % 8);
            } else {
                *byte &= !(1 << (idx % 8));
            }
        }
    }

    /// Raw bytes of one register, or an empty slice past `v31`.
    pub fn register(&self, reg: usize) -> &[u8] {
        let start = reg * self.vlenb;
        self.data.get(start..start + self.vlenb).unwrap_or(&[])
    }

    /// Mutable raw bytes of one register, or an empty slice past `v31`.
    pub fn register_mut(&mut self, reg: usize) -> &mut [u8] {
        let start = reg * self.vlenb;
        let vlenb = self.vlenb;
        self.data.get_mut(start..start + vlenb).unwrap_or(&mut [])
    }
}

impl fmt::Debug for VectorRegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_map();
        for reg in 0..NUM_VREGS {
            let bytes = self.register(reg);
            if bytes.iter().any(|&b| b != 0) {
                let hex: String = bytes.iter().rev().map(|b| format!("{b:02x}")).collect();
                let _ = list.entry(&format_args!("v{reg}"), &format_args!("0x{hex}"));
            }
        }
        list.finish()
    }
}
