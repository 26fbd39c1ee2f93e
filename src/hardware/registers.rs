use crate::hardware::memory::PROGRAM_SECTION_START;
use crate::numbers;
use std::fmt::{Debug, Formatter};

/// Content of a single LC-3 register.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Register(u16);

impl Register {
    #[must_use]
    pub const fn from_binary(value: u16) -> Self {
        Self(value)
    }
    #[must_use]
    pub const fn from_decimal(value: i16) -> Self {
        Self(value.cast_unsigned())
    }
    #[must_use]
    pub const fn as_binary(self) -> u16 {
        self.0
    }
    #[must_use]
    pub const fn as_decimal(self) -> i16 {
        numbers::twos_complement_to_decimal(self.0)
    }
}
impl Debug for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#06X} ({})", self.0, self.as_decimal())
    }
}

#[must_use]
pub const fn from_binary(value: u16) -> Register {
    Register::from_binary(value)
}
#[must_use]
pub const fn from_decimal(value: i16) -> Register {
    Register::from_decimal(value)
}

/// The register file: R0 to R7, the program counter and the condition register.
#[derive(Clone, PartialEq, Eq)]
pub struct Registers {
    general_purpose: [Register; 8],
    pc: Register,
    cond: ConditionFlag,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Power-on state: all general purpose registers zero, PC at the start of the program
    /// section and the condition register set to [`ConditionFlag::Zero`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            general_purpose: [Register(0); 8],
            pc: Register(PROGRAM_SECTION_START),
            cond: ConditionFlag::Zero,
        }
    }

    /// Register number as decoded from a 3 bit instruction field.
    #[must_use]
    pub fn get(&self, r: u8) -> Register {
        debug_assert!(r <= 7, "Invalid general purpose register get: {r}");
        self.general_purpose[usize::from(r & 0b111)]
    }
    pub fn set(&mut self, r: u8, value: Register) {
        debug_assert!(r <= 7, "Invalid general purpose register set: {r}");
        self.general_purpose[usize::from(r & 0b111)] = value;
    }
    #[must_use]
    pub const fn pc(&self) -> Register {
        self.pc
    }
    pub const fn set_pc(&mut self, value: u16) {
        self.pc = Register(value);
    }
    /// Moves PC to the next word, wrapping at the end of memory.
    pub const fn increment_pc(&mut self) {
        self.pc = Register(self.pc.0.wrapping_add(1));
    }
    #[must_use]
    pub const fn get_conditional_register(&self) -> ConditionFlag {
        self.cond
    }
    /// Sets the condition register according to the current content of register `r`.
    pub fn update_conditional_register(&mut self, r: u8) {
        self.cond = ConditionFlag::from(self.get(r).as_binary());
    }
}

impl Debug for Registers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, r) in self.general_purpose.iter().enumerate() {
            write!(f, "R{idx}: {r:?}, ")?;
        }
        write!(f, "PC: {:?}, COND: {:?}", self.pc, self.cond)
    }
}

/// The three condition codes, the discriminant matches the `nzp` bits of the BR opcode.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionFlag {
    Pos = 1 << 0, // Positive
    Zero = 1 << 1,
    Neg = 1 << 2, // Negative
}

impl ConditionFlag {
    #[must_use]
    pub const fn bits(self) -> u16 {
        self as u16
    }
}

impl From<u16> for ConditionFlag {
    fn from(value: u16) -> Self {
        if value == 0 {
            Self::Zero
        } else if value >> 15 == 1 {
            // leftmost bit is 1 for negative numbers
            Self::Neg
        } else {
            Self::Pos
        }
    }
}
