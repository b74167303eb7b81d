//! Vector Type (`vtype`) Decoding.
//!
//! This module decodes the `vtype` CSR that configures every vector instruction.
//! It provides:
//! 1. **Element Width:** SEW (8/16/32/64) and the `altfmt` bit selecting bf16.
//! 2. **Grouping:** LMUL, both integral (m1..m8) and fractional (mf2..mf8).
//! 3. **Policies:** Tail and mask agnostic/undisturbed bits.
//! 4. **Legality:** Reserved encodings and unsupported SEW/LMUL set `vill`.
//!
//! Layout (RV64): `vlmul[2:0]`, `vsew[5:3]`, `vta[6]`, `vma[7]`, `altfmt[8]`,
//! reserved `[62:9]`, `vill[63]`.

use tracing::debug;

use crate::common::constants::{
    VTYPE_ALTFMT_BIT, VTYPE_RESERVED_MASK, VTYPE_VILL_BIT, VTYPE_VLMUL_MASK, VTYPE_VMA_BIT,
    VTYPE_VSEW_MASK, VTYPE_VSEW_SHIFT, VTYPE_VTA_BIT,
};
use crate::core::units::fpu::ElementWidth;

/// Selected element width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sew {
    /// 8-bit elements.
    E8,
    /// 16-bit elements.
    E16,
    /// 32-bit elements.
    E32,
    /// 64-bit elements.
    E64,
}

impl Sew {
    /// Decodes the 3-bit `vsew` field; `None` for reserved encodings.
    pub fn from_bits(bits: u64) -> Option<Self> {
        match bits {
            0 => Some(Self::E8),
            1 => Some(Self::E16),
            2 => Some(Self::E32),
            3 => Some(Self::E64),
            _ => None,
        }
    }

    /// Returns the `vsew` encoding.
    pub fn to_bits(self) -> u64 {
        match self {
            Self::E8 => 0,
            Self::E16 => 1,
            Self::E32 => 2,
            Self::E64 => 3,
        }
    }

    /// Element width in bits.
    pub fn bits(self) -> usize {
        8 << self.to_bits()
    }
}

/// Register group multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lmul {
    /// LMUL = 1/8.
    Mf8,
    /// LMUL = 1/4.
    Mf4,
    /// LMUL = 1/2.
    Mf2,
    /// LMUL = 1.
    M1,
    /// LMUL = 2.
    M2,
    /// LMUL = 4.
    M4,
    /// LMUL = 8.
    M8,
}

impl Lmul {
    /// Decodes the 3-bit `vlmul` field; `None` for the reserved encoding 4.
    pub fn from_bits(bits: u64) -> Option<Self> {
        match bits {
            0 => Some(Self::M1),
            1 => Some(Self::M2),
            2 => Some(Self::M4),
            3 => Some(Self::M8),
            5 => Some(Self::Mf8),
            6 => Some(Self::Mf4),
            7 => Some(Self::Mf2),
            _ => None,
        }
    }

    /// Returns the `vlmul` encoding.
    pub fn to_bits(self) -> u64 {
        match self {
            Self::M1 => 0,
            Self::M2 => 1,
            Self::M4 => 2,
            Self::M8 => 3,
            Self::Mf8 => 5,
            Self::Mf4 => 6,
            Self::Mf2 => 7,
        }
    }

    /// LMUL as a `(numerator, denominator)` pair.
    pub fn ratio(self) -> (usize, usize) {
        match self {
            Self::Mf8 => (1, 8),
            Self::Mf4 => (1, 4),
            Self::Mf2 => (1, 2),
            Self::M1 => (1, 1),
            Self::M2 => (2, 1),
            Self::M4 => (4, 1),
            Self::M8 => (8, 1),
        }
    }

    /// Number of registers an operand group occupies (fractional LMUL uses one).
    pub fn registers(self) -> usize {
        self.ratio().0
    }
}

/// Policy for elements an instruction does not compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementPolicy {
    /// The destination element keeps its previous value.
    Undisturbed,
    /// The destination element may hold any value the implementation chooses.
    Agnostic,
}

impl ElementPolicy {
    fn from_bit(agnostic: bool) -> Self {
        if agnostic {
            Self::Agnostic
        } else {
            Self::Undisturbed
        }
    }
}

/// Decoded `vtype` CSR.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VType {
    /// Selected element width.
    pub sew: Sew,
    /// Register group multiplier.
    pub lmul: Lmul,
    /// Tail agnostic.
    pub vta: bool,
    /// Mask agnostic.
    pub vma: bool,
    /// Alternate floating-point format (bf16 at SEW=16).
    pub altfmt: bool,
    /// Illegal configuration; every vector instruction traps.
    pub vill: bool,
}

impl Default for VType {
    /// `vtype` after reset: `vill` set.
    fn default() -> Self {
        Self::ILLEGAL
    }
}

impl VType {
    /// The value `vtype` takes after an unsupported configuration request.
    pub const ILLEGAL: Self = Self {
        sew: Sew::E8,
        lmul: Lmul::M1,
        vta: false,
        vma: false,
        altfmt: false,
        vill: true,
    };

    /// A legal `vtype` with undisturbed policies and IEEE formats.
    pub fn new(sew: Sew, lmul: Lmul) -> Self {
        Self {
            sew,
            lmul,
            vta: false,
            vma: false,
            altfmt: false,
            vill: false,
        }
    }

    /// Returns a copy with `vta` set to `agnostic`.
    pub fn with_tail_agnostic(mut self, agnostic: bool) -> Self {
        self.vta = agnostic;
        self
    }

    /// Returns a copy with `vma` set to `agnostic`.
    pub fn with_mask_agnostic(mut self, agnostic: bool) -> Self {
        self.vma = agnostic;
        self
    }

    /// Returns a copy with `altfmt` set.
    pub fn with_altfmt(mut self, altfmt: bool) -> Self {
        self.altfmt = altfmt;
        self
    }

    /// Decodes a raw `vtype` value for a unit with the given VLEN and ELEN.
    ///
    /// Reserved encodings, SEW > ELEN, LMUL < SEW/ELEN, and configurations
    /// whose VLMAX would be zero all decode to [`VType::ILLEGAL`].
    pub fn decode(raw: u64, vlen: usize, elen: usize) -> Self {
        if raw >> VTYPE_VILL_BIT != 0 || raw & VTYPE_RESERVED_MASK != 0 {
            debug!(raw = format_args!("{raw:#x}"), "vtype: reserved bits set");
            return Self::ILLEGAL;
        }
        let (Some(sew), Some(lmul)) = (
            Sew::from_bits((raw >> VTYPE_VSEW_SHIFT) & VTYPE_VSEW_MASK),
            Lmul::from_bits(raw & VTYPE_VLMUL_MASK),
        ) else {
            debug!(raw = format_args!("{raw:#x}"), "vtype: reserved SEW/LMUL");
            return Self::ILLEGAL;
        };

        let (num, den) = lmul.ratio();
        if sew.bits() > elen || sew.bits() * den > elen * num || vlen * num < sew.bits() * den {
            debug!(
                sew = sew.bits(),
                lmul = format_args!("{num}/{den}"),
                vlen,
                elen,
                "vtype: unsupported SEW/LMUL"
            );
            return Self::ILLEGAL;
        }

        Self {
            sew,
            lmul,
            vta: (raw >> VTYPE_VTA_BIT) & 1 != 0,
            vma: (raw >> VTYPE_VMA_BIT) & 1 != 0,
            altfmt: (raw >> VTYPE_ALTFMT_BIT) & 1 != 0,
            vill: false,
        }
    }

    /// Encodes back into the raw CSR layout.
    pub fn encode(self) -> u64 {
        if self.vill {
            return 1 << VTYPE_VILL_BIT;
        }
        self.lmul.to_bits()
            | (self.sew.to_bits() << VTYPE_VSEW_SHIFT)
            | (u64::from(self.vta) << VTYPE_VTA_BIT)
            | (u64::from(self.vma) << VTYPE_VMA_BIT)
            | (u64::from(self.altfmt) << VTYPE_ALTFMT_BIT)
    }

    /// Maximum vector length for this configuration: `VLEN * LMUL / SEW`.
    pub fn vlmax(self, vlen: usize) -> usize {
        if self.vill {
            return 0;
        }
        let (num, den) = self.lmul.ratio();
        vlen * num / (self.sew.bits() * den)
    }

    /// Floating-point representation selected by SEW and `altfmt`.
    ///
    /// Returns `None` for SEW=8 and for `altfmt` outside SEW=16.
    pub fn element_width(self) -> Option<ElementWidth> {
        match (self.sew, self.altfmt) {
            (Sew::E16, false) => Some(ElementWidth::F16),
            (Sew::E16, true) => Some(ElementWidth::Bf16),
            (Sew::E32, false) => Some(ElementWidth::F32),
            (Sew::E64, false) => Some(ElementWidth::F64),
            _ => None,
        }
    }

    /// Policy for masked-off body elements.
    pub fn mask_policy(self) -> ElementPolicy {
        ElementPolicy::from_bit(self.vma)
    }

    /// Policy for tail elements (`index >= vl`).
    pub fn tail_policy(self) -> ElementPolicy {
        ElementPolicy::from_bit(self.vta)
    }
}
