use crate::numbers;
use std::fmt::{Debug, Formatter};

/// Wrapper for LC-3 u16 instruction.
/// format is: `OOOO_DDD_P_PPPP_PPPP`
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Instruction(u16);

impl Instruction {
    /// Gives the value of only the specified bit range.
    ///
    /// # Parameters
    /// - `from`: starting index
    /// - `to`: end index (inclusive), mut be greater or equal to `from`
    ///
    /// # Panics
    /// - asserts that to is greater or equal from and both are valid indexes
    #[must_use]
    pub fn get_bit_range(self, from: u8, to: u8) -> u16 {
        debug_assert!(
            to >= from,
            "wrong direction of from: {from:?} and to: {to:?}"
        );
        debug_assert!(
            (0..u16::BITS).contains(&u32::from(to)),
            "index: {to:?} to u16 is greater than maximum value {:?}",
            u16::BITS - 1
        );
        let width = u32::from(to - from + 1);
        (self.0 >> from) & (u16::MAX >> (u16::BITS - width))
    }
    /// Gives the value of a bit range of at most 8 bits as u8.
    /// See [`Instruction::get_bit_range()`]
    #[must_use]
    pub fn get_bit_range_u8(self, from: u8, to: u8) -> u8 {
        debug_assert!(to - from < 8, "bit range {from}..={to} does not fit into u8");
        self.get_bit_range(from, to).to_le_bytes()[0]
    }
    #[must_use]
    pub fn get_bit(self, index: u8) -> bool {
        self.get_bit_range(index, index) & 1 != 0
    }
    #[must_use]
    pub fn op_code(self) -> u8 {
        self.get_bit_range_u8(12, 15)
    }
    /// Destination register, also the source register of the store opcodes.
    #[must_use]
    pub fn dr_number(self) -> u8 {
        self.get_bit_range_u8(9, 11)
    }
    /// First source register, also `BaseR` of JMP, JSRR, LDR and STR.
    #[must_use]
    pub fn sr1_number(self) -> u8 {
        self.get_bit_range_u8(6, 8)
    }
    #[must_use]
    pub fn sr2_number(self) -> u8 {
        self.get_bit_range_u8(0, 2)
    }
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.get_bit(5)
    }
    /// Sign extended `imm5` operand of ADD and AND.
    #[must_use]
    pub fn get_immediate(self) -> u16 {
        numbers::sign_extend(self.get_bit_range(0, 4), 5)
    }
    /// The `nzp` condition bits of BR.
    #[must_use]
    pub fn condition_bits(self) -> u16 {
        self.get_bit_range(9, 11)
    }
    /// Offset of the lowest `len` bits, sign extended.
    /// Adding it with wrapping arithmetic gives the signed result.
    #[must_use]
    pub fn pc_offset(self, len: u8) -> u16 {
        numbers::sign_extend(self.get_bit_range(0, len - 1), len)
    }
    #[must_use]
    pub fn trap_vector(self) -> u8 {
        self.get_bit_range_u8(0, 7)
    }
}

impl Debug for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:#06X} (Op: {:04b}, DR: {:03b}, SR1: {:03b}, Low: {:06b})",
            self.0,
            self.op_code(),
            self.dr_number(),
            self.sr1_number(),
            self.get_bit_range(0, 5)
        )
    }
}

impl From<u16> for Instruction {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}
