//! Implemented operations for the LC 3.
use crate::emulator::instruction::Instruction;
use crate::hardware::memory::Memory;
use crate::hardware::registers::{Registers, from_binary};

/// The 16 LC-3 opcodes, decoded from bits `[15:12]` of an instruction.
#[repr(u8)]
#[derive(enumn::N, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Opcode {
    Br = 0b0000,
    Add = 0b0001,
    Ld = 0b0010,
    St = 0b0011,
    Jsr = 0b0100,
    And = 0b0101,
    Ldr = 0b0110,
    Str = 0b0111,
    Rti = 0b1000,
    Not = 0b1001,
    Ldi = 0b1010,
    Sti = 0b1011,
    JmpOrRet = 0b1100,
    Res = 0b1101,
    Lea = 0b1110,
    Trap = 0b1111,
}

impl From<Instruction> for Opcode {
    fn from(i: Instruction) -> Self {
        let op = i.op_code();
        Self::n(op).unwrap_or_else(|| unreachable!("op code has only 4 bits: {op:#b}"))
    }
}

/// ADD: Mathematical addition in 2 variants
/// - DR is set with result of SR 1 + SR 2
/// ```text
///  15__12__11_9__8_6___5___4_3__2_0_
/// | 0001 |  DR | SR1 | 0 | 00 | SR2 |
///  ---------------------------------
/// ```
/// - DR is set with result of SR 1 + sign extended immediate
/// ```text
///  15__12__11_9__8_6___5___4___0_
/// | 0001 |  DR | SR1 | 1 |  IMM5 |
///  ------------------------------
/// ```
/// The result wraps around at 16 bits.
pub fn add(i: Instruction, r: &mut Registers) {
    let operand = if i.is_immediate() {
        i.get_immediate()
    } else {
        r.get(i.sr2_number()).as_binary()
    };
    r.set(
        i.dr_number(),
        from_binary(r.get(i.sr1_number()).as_binary().wrapping_add(operand)),
    );
    r.update_conditional_register(i.dr_number());
}
/// AND: bit-wise AND in 2 variants
/// - DR is set with result of SR 1 AND SR 2
/// ```text
///  15__12__11_9__8_6___5___4_3__2_0_
/// | 0101 |  DR | SR1 | 0 | 00 | SR2 |
///  ---------------------------------
/// ```
/// - DR is set with result of SR 1 AND sign extended immediate
/// ```text
///  15__12__11_9__8_6___5___4___0_
/// | 0101 |  DR | SR1 | 1 |  IMM5 |
///  ------------------------------
/// ```
pub fn and(i: Instruction, r: &mut Registers) {
    let operand = if i.is_immediate() {
        i.get_immediate()
    } else {
        r.get(i.sr2_number()).as_binary()
    };
    r.set(
        i.dr_number(),
        from_binary(r.get(i.sr1_number()).as_binary() & operand),
    );
    r.update_conditional_register(i.dr_number());
}

/// NOT: bit-wise complement of the value in SR 1
/// ```text
///  15__12__11_9__8_6___5___0_
/// | 1001 |  DR | SR1 | 11111 |
///  --------------------------
/// ```
pub fn not(i: Instruction, r: &mut Registers) {
    r.set(
        i.dr_number(),
        from_binary(!r.get(i.sr1_number()).as_binary()),
    );
    r.update_conditional_register(i.dr_number());
}
/// BR: Conditional Branch
/// This opcode adds the value of the sign extended offset to PC if the current state of the
/// [`ConditionFlag`](crate::hardware::registers::ConditionFlag) matches a set bit of `n`, `z`
/// or `p`. With none of the bits set the branch is never taken, `BRnzp` always branches.
/// ```text
///  15__12__11_9___8_______0_
/// | 0000 |  nzp | PCoffset9 |
///  -------------------------
/// ```
pub fn br(i: Instruction, r: &mut Registers) {
    if i.condition_bits() & r.get_conditional_register().bits() != 0 {
        r.set_pc(address_by_pc_offset(i, r));
    }
}
/// JSR: Jump to Sub-Routine.
/// Two variants:
/// - JSR to `PCOffset11`
/// ```text
///  15__12__11_10_________0
/// | 0100 | 1 | PCOffset11 |
///  -----------------------
/// ```
/// - JSRR: JSR to location in `BaseR`
/// ```text
///  15__12__11_9__8___6___5____0_
/// | 0100 | 000 | BaseR | 000000 |
///  -----------------------------
/// ```
/// The former PC is saved in R7 before `BaseR` is read, so `JSRR R7` continues at the next
/// instruction.
pub fn jsr(i: Instruction, r: &mut Registers) {
    let temp_pc = r.pc();
    r.set(7, temp_pc);
    r.set_pc(if i.get_bit(11) {
        temp_pc.as_binary().wrapping_add(i.pc_offset(11))
    } else {
        r.get(i.sr1_number()).as_binary()
    });
}
/// JMP or RET operation.
/// - JMP sets the PC to the value of register `BaseR`
/// ```text
///  15__12__11_9___8_6____5____0_
/// | 1100 | 000 | BaseR | 000000 |
///  -----------------------------
/// ```
/// - RET same as JMP, but special case for returning from JSR where former PC is saved in R7.
/// ```text
///  15__12__11_9__8_6___5____0_
/// | 1100 | 000 | 111 | 000000 |
///  ---------------------------
/// ```
pub fn jmp_or_ret(i: Instruction, r: &mut Registers) {
    r.set_pc(r.get(i.sr1_number()).as_binary());
}

/// LD: Loads content of memory address of PC + sign extended offset into DR.
/// ```text
///  15__12__11_9___8_______0_
/// | 0010 |  DR  | PCoffset9 |
///  -------------------------
/// ```
pub fn ld(i: Instruction, r: &mut Registers, memory: &mut Memory) {
    let value = memory.read(address_by_pc_offset(i, r));
    r.set(i.dr_number(), from_binary(value));
    r.update_conditional_register(i.dr_number());
}

/// LDI: Load indirect.
/// Calculates memory address of PC + sign extended offset and reads another address from there,
/// the content of the memory at that indirectly loaded address is put into DR.
/// ```text
///  15__12__11_9___8_______0_
/// | 1010 |  DR  | PCoffset9 |
///  -------------------------
/// ```
pub fn ldi(i: Instruction, r: &mut Registers, memory: &mut Memory) {
    let address_address = address_by_pc_offset(i, r);
    let value_address = memory.read(address_address);
    r.set(i.dr_number(), from_binary(memory.read(value_address)));
    r.update_conditional_register(i.dr_number());
}
/// LDR: Load address from base register and adds sign extended offset to load the memory content
/// from there into DR.
/// ```text
///  15__12__11_9__8___6____5____0_
/// | 0110 |  DR | BaseR | offset6 |
///  ------------------------------
/// ```
pub fn ldr(i: Instruction, r: &mut Registers, memory: &mut Memory) {
    let value_address = address_by_baser_offset(i, r);
    r.set(i.dr_number(), from_binary(memory.read(value_address)));
    r.update_conditional_register(i.dr_number());
}

fn address_by_pc_offset(i: Instruction, r: &Registers) -> u16 {
    r.pc().as_binary().wrapping_add(i.pc_offset(9))
}
fn address_by_baser_offset(i: Instruction, r: &Registers) -> u16 {
    r.get(i.sr1_number())
        .as_binary()
        .wrapping_add(i.pc_offset(6))
}

/// LEA: Load Effective Address loads PC + sign extended offset into DR.
/// ```text
///  15__12__11_9___8_______0_
/// | 1110 |  DR  | PCoffset9 |
///  -------------------------
/// ```
pub fn lea(i: Instruction, r: &mut Registers) {
    r.set(i.dr_number(), from_binary(address_by_pc_offset(i, r)));
    r.update_conditional_register(i.dr_number());
}
/// ST: Store. The contents of the SR are written to memory address PC + sign extended offset.
/// ```text
///  15__12__11_9___8_______0_
/// | 0011 |  SR  | PCoffset9 |
///  -------------------------
/// ```
pub fn st(i: Instruction, r: &Registers, memory: &mut Memory) {
    let store_address = address_by_pc_offset(i, r);
    memory.write(store_address, r.get(i.dr_number()).as_binary());
}
/// STI: Store Indirect. The contents of the SR are written to the address which is loaded from
/// memory address PC + sign extended offset.
/// ```text
///  15__12__11_9___8_______0_
/// | 1011 |  SR  | PCoffset9 |
///  -------------------------
/// ```
pub fn sti(i: Instruction, r: &Registers, memory: &mut Memory) {
    let address_of_store_address = address_by_pc_offset(i, r);
    let store_address = memory.read(address_of_store_address);
    memory.write(store_address, r.get(i.dr_number()).as_binary());
}
/// STR: Store contents of SR to memory address of base register plus sign extended offset.
/// ```text
///  15__12__11_9__8___6____5____0_
/// | 0111 |  SR | BaseR | offset6 |
///  ------------------------------
/// ```
pub fn str(i: Instruction, r: &Registers, memory: &mut Memory) {
    let store_address = address_by_baser_offset(i, r);
    memory.write(store_address, r.get(i.dr_number()).as_binary());
}
/// RTI: Return from Interrupt.
///
/// Programs never run in supervisor mode here, so there is nothing to return to.
/// The instruction is skipped.
/// ```text
///  15__12__11_____________0_
/// | 1000 | 0000000000000000 |
///  -------------------------
/// ```
pub fn rti(i: Instruction, r: &Registers) {
    tracing::warn!(instruction = ?i, pc = ?r.pc(), "RTI is not supported, skipping");
}
/// Reserved opcode `1101`, skipped.
pub fn res(i: Instruction, r: &Registers) {
    tracing::warn!(instruction = ?i, pc = ?r.pc(), "reserved opcode, skipping");
}

#[expect(clippy::unusual_byte_groupings)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulator::test_helpers::FakeKeyboardInputProvider;
    use crate::hardware::memory::PROGRAM_SECTION_START;
    use crate::hardware::registers::{ConditionFlag, from_decimal};
    use googletest::prelude::*;
    use yare::parameterized;

    fn create_memory(data: &[u16]) -> Memory {
        let kip = FakeKeyboardInputProvider::new("");
        let mut mem = Memory::new(Box::new(kip));
        mem.load(PROGRAM_SECTION_START, data);
        mem
    }

    #[parameterized(
        br = { 0x0000, Opcode::Br },
        add = { 0x1000, Opcode::Add },
        ld = { 0x2000, Opcode::Ld },
        st = { 0x3000, Opcode::St },
        jsr = { 0x4000, Opcode::Jsr },
        and = { 0x5000, Opcode::And },
        ldr = { 0x6000, Opcode::Ldr },
        str = { 0x7000, Opcode::Str },
        rti = { 0x8000, Opcode::Rti },
        not = { 0x9000, Opcode::Not },
        ldi = { 0xA000, Opcode::Ldi },
        sti = { 0xB000, Opcode::Sti },
        jmp = { 0xC1C0, Opcode::JmpOrRet },
        res = { 0xD000, Opcode::Res },
        lea = { 0xE000, Opcode::Lea },
        trap = { 0xF025, Opcode::Trap },
    )]
    #[test_macro(gtest)]
    fn test_opcode_decoding(bits: u16, expected: Opcode) {
        assert_that!(Opcode::from(Instruction::from(bits)), eq(expected));
        expect_that!(u16::from(expected as u8), eq(bits >> 12));
    }

    #[gtest]
    pub fn test_opcode_add() {
        let mut regs = Registers::new();
        regs.set(0, from_binary(22));
        regs.set(1, from_binary(128));
        // Add: DR: 2, SR1: 0: 22, Immediate: false, SR2: 1: 128 => R2: 150
        add(0b0001_010_000_0_00_001.into(), &mut regs);
        // Add: DR: 3, SR1: 2: 150, Immediate: true, imm5: 14 => R3: 164
        add(0b0001_011_010_1_01110.into(), &mut regs);
        expect_that!(regs.get(0), eq(from_binary(22)));
        expect_that!(regs.get(1), eq(from_binary(128)));
        expect_that!(regs.get(2), eq(from_binary(150)));
        expect_that!(regs.get(3), eq(from_binary(164)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Pos));
    }
    #[gtest]
    pub fn test_opcode_add_negative() {
        let mut regs = Registers::new();
        regs.set(0, from_binary(22));
        regs.set(1, from_decimal(-128));
        // Add: DR: 2, SR1: 0: 22, Immediate: false, SR2: 1: -128 => R2: -106
        add(0b0001_010_000_0_00_001.into(), &mut regs);
        // Add: DR: 3, SR1: 2: -106, Immediate: true, imm5: -2 => R3: -108
        add(0b0001_011_010_1_11110.into(), &mut regs);
        expect_that!(regs.get(1), eq(from_binary(0b1111_1111_1000_0000)));
        expect_that!(regs.get(2).as_decimal(), eq(-106));
        expect_that!(regs.get(3).as_decimal(), eq(-108));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Neg));
    }
    #[gtest]
    pub fn test_opcode_add_overflow() {
        let mut regs = Registers::new();
        regs.set(0, from_binary(0x7FFF)); // largest positive number in 2's complement
        regs.set(1, from_binary(1));
        // Add: DR: 2, SR1: 0, Immediate: false, SR2: 1 => R2: 32768
        add(0b0001_010_000_0_00_001.into(), &mut regs);
        expect_that!(regs.get(2), eq(from_binary(0x8000)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Neg));
    }
    #[gtest]
    pub fn test_opcode_add_wraps_to_0() {
        let mut regs = Registers::new();
        regs.set(0, from_binary(0xFFFF));
        regs.set(2, from_binary(1)); // to be sure opcode was executed
        // Add: DR: 2, SR1: 0, Immediate: true, imm5: 1 => R2: 0
        add(0b0001_010_000_1_00001.into(), &mut regs);
        expect_that!(regs.get(2), eq(from_binary(0)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Zero));
    }
    #[gtest]
    pub fn test_opcode_add_same_register() {
        let mut regs = Registers::new();
        regs.set(4, from_binary(21));
        // Add: DR: 4, SR1: 4, SR2: 4 => R4: 42
        add(0b0001_100_100_0_00_100.into(), &mut regs);
        expect_that!(regs.get(4), eq(from_binary(42)));
    }
    #[gtest]
    pub fn test_opcode_and() {
        let mut regs = Registers::new();
        regs.set(0, from_binary(0b1101_1001_0111_0101));
        regs.set(1, from_binary(0b0100_1010_0010_1001));
        // And: DR: 2, SR1: 0, Immediate: false, SR2: 1
        and(0b0101_010_000_0_00_001.into(), &mut regs);
        expect_that!(regs.get(0), eq(from_binary(0b1101_1001_0111_0101)));
        expect_that!(regs.get(1), eq(from_binary(0b0100_1010_0010_1001)));
        expect_that!(regs.get(2), eq(from_binary(0b0100_1000_0010_0001)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Pos));
    }
    #[gtest]
    pub fn test_opcode_and_immediate() {
        let mut regs = Registers::new();
        regs.set(0, from_binary(0b1101_1001_0111_0101));
        // Immediate sign extended: 0b1111_1111_1111_0101
        and(0b0101_010_000_1_10101.into(), &mut regs);
        expect_that!(regs.get(2), eq(from_binary(0b1101_1001_0111_0101)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Neg));
    }
    #[gtest]
    pub fn test_opcode_and_clear_register() {
        let mut regs = Registers::new();
        regs.set(5, from_binary(0x1234));
        // And: DR: 5, SR1: 5, imm5: 0 => R5: 0
        and(0b0101_101_101_1_00000.into(), &mut regs);
        expect_that!(regs.get(5), eq(from_binary(0)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Zero));
    }
    #[gtest]
    pub fn test_opcode_not() {
        let mut regs = Registers::new();
        regs.set(0, from_binary(0x7FFF)); // largest positive number in 2's complement
        // Not: DR: 1, SR1: 0 => R1: 0x8000
        super::not(0b1001_001_000_111111.into(), &mut regs);
        expect_that!(regs.get(0), eq(from_binary(0x7FFF)));
        expect_that!(regs.get(1), eq(from_binary(0x8000)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Neg));
    }
    #[parameterized(
        n_taken = { 0b100, 0x8000, true },
        z_taken = { 0b010, 0x0000, true },
        p_taken = { 0b001, 0x0001, true },
        nzp_taken = { 0b111, 0x0000, true },
        np_not_taken_on_zero = { 0b101, 0x0000, false },
        z_not_taken_on_neg = { 0b010, 0xFFFF, false },
        none_never_taken = { 0b000, 0x0001, false },
    )]
    fn test_opcode_br(nzp: u16, last_result: u16, taken: bool) {
        let mut regs = Registers::new();
        regs.set(0, from_binary(last_result));
        regs.update_conditional_register(0);
        regs.set_pc(0x3010);
        // BR - PC_OFFSET9: -0x10
        br(((nzp << 9) | 0b1_1111_0000).into(), &mut regs);
        let expected = if taken { 0x3000 } else { 0x3010 };
        assert_that!(regs.pc(), eq(from_binary(expected)));
    }
    #[gtest]
    pub fn test_opcode_lea() {
        let mut regs = Registers::new();
        regs.set_pc(0x3045);
        // Lea: DR: 3, PC_OFFSET9: 0x55
        lea(0b1110_011_0_0101_0101.into(), &mut regs);
        expect_that!(regs.get(3), eq(from_binary(0x3045 + 0b0_0101_0101)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Pos));
    }
    #[gtest]
    pub fn test_opcode_ld() {
        let mut regs = Registers::new();
        regs.set_pc(0x3045);
        let mut memory = create_memory(&[4711, 815]);
        // LD - DR: 4, PC_OFFSET9: -0x44
        ld(0b0010_100_1_1011_1100.into(), &mut regs, &mut memory);
        expect_that!(regs.get(4), eq(from_decimal(815)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Pos));

        // LD - DR: 4, PC_OFFSET9: -0x45
        ld(0b0010_100_1_1011_1011.into(), &mut regs, &mut memory);
        expect_that!(regs.get(4), eq(from_decimal(4711)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Pos));
    }
    #[gtest]
    pub fn test_opcode_ld_zero() {
        let mut regs = Registers::new();
        regs.set(1, from_binary(99));
        let mut memory = create_memory(&[]);
        // LD - DR: 1, PC_OFFSET9: 5
        ld(0b0010_001_0_0000_0101.into(), &mut regs, &mut memory);
        expect_that!(regs.get(1), eq(from_binary(0)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Zero));
    }
    #[gtest]
    pub fn test_opcode_ldr() {
        let mut regs = Registers::new();
        let mut raw = vec![0; 6];
        let mem_val = 0b1111_1111_1111_0110; // -10
        raw[5] = mem_val;
        let mut memory = create_memory(&raw);
        regs.set(6, from_binary(0x3025));
        // LDR - DR: 2, - BaseR: 6, OFFSET6: -32 = -0x20
        ldr(0b0110_010_110_100000.into(), &mut regs, &mut memory);
        expect_that!(regs.get(2), eq(from_binary(mem_val)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Neg));
    }
    #[gtest]
    pub fn test_opcode_ldi() {
        let mut regs = Registers::new();
        let mut raw = vec![0; 10];
        let val_to_load_in_register = 0b1111_1111_1111_0110; // -10
        raw[3] = val_to_load_in_register;
        raw[5] = 0x3003; // absolute address of value above
        let mut memory = create_memory(&raw);
        regs.set_pc(0x3065);
        // LDI - DR: 1, - PC_OFFSET9: -96 = -0x60
        ldi(0b1010_001_110100000.into(), &mut regs, &mut memory);
        expect_that!(regs.get(1), eq(from_binary(val_to_load_in_register)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Neg));
    }
    #[gtest]
    pub fn test_opcode_ldi_polls_keyboard() {
        let mut regs = Registers::new();
        let mut memory = Memory::new(Box::new(FakeKeyboardInputProvider::new("z")));
        memory.load(0x3000, &[0xFE00]);
        regs.set_pc(0x3001);
        // LDI - DR: 0, - PC_OFFSET9: -1 => reads KBSR
        ldi(0b1010_000_111111111.into(), &mut regs, &mut memory);
        expect_that!(regs.get(0), eq(from_binary(0x8000)));
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Neg));
        expect_that!(memory.read(0xFE02), eq(u16::from(b'z')));
    }
    #[gtest]
    pub fn test_opcode_st() {
        let mut regs = Registers::new();
        let mut memory = create_memory(&[0; 0xC4]);
        regs.set(5, from_decimal(4760));
        regs.set_pc(0x3065);
        // ST - SR: 5, - PC_OFFSET9: -95 = -0x5F
        st(0b0011_101_110100001.into(), &regs, &mut memory);
        expect_that!(memory.read(0x3006), eq(4760));
    }
    #[gtest]
    pub fn test_opcode_sti() {
        let mut regs = Registers::new();
        let mut memory = create_memory(&[0; 0xC4]);
        memory.write(0x300A, 0x3006);
        regs.set(7, from_decimal(1234));
        regs.set_pc(0x3067);
        // STI - SR: 7, - PC_OFFSET9: -0x5D
        sti(0b1011_111_110100011.into(), &regs, &mut memory);
        expect_that!(memory.read(0x3006), eq(1234));
    }
    #[gtest]
    pub fn test_opcode_str() {
        let mut regs = Registers::new();
        let mut memory = create_memory(&[0; 0xC4]);
        regs.set(2, from_decimal(2345));
        regs.set(6, from_binary(0x3005));
        // STR - SR: 2, - BaseR: 6, offset6: 0x1
        str(0b0111_010_110_000001.into(), &regs, &mut memory);
        expect_that!(memory.read(0x3006), eq(2345));
    }
    #[gtest]
    pub fn test_opcode_store_does_not_touch_flags() {
        let mut regs = Registers::new();
        let mut memory = create_memory(&[]);
        regs.set(2, from_decimal(-1));
        str(0b0111_010_110_000001.into(), &regs, &mut memory);
        expect_that!(regs.get_conditional_register(), eq(ConditionFlag::Zero));
    }
    #[gtest]
    pub fn test_opcode_jsr() {
        let mut regs = Registers::new();
        regs.set_pc(0x3099);
        // JSR - PC_OFFSET11: 0x1A1
        jsr(0b0100_1_00110100001.into(), &mut regs);
        expect_that!(regs.pc(), eq(from_binary(0x323A)));
        expect_that!(regs.get(7), eq(from_binary(0x3099)));

        let mut regs = Registers::new();
        regs.set_pc(0x3100);
        regs.set(6, from_binary(0x3456));
        // JSRR - BaseR: 6
        jsr(0b0100_000_110_000000.into(), &mut regs);
        expect_that!(regs.pc(), eq(from_binary(0x3456)));
        expect_that!(regs.get(7), eq(from_binary(0x3100)));
    }
    #[gtest]
    pub fn test_opcode_jsr_negative_offset() {
        let mut regs = Registers::new();
        regs.set_pc(0x3400);
        // JSR - PC_OFFSET11: -0x400
        jsr(0b0100_1_10000000000.into(), &mut regs);
        expect_that!(regs.pc(), eq(from_binary(0x3000)));
        expect_that!(regs.get(7), eq(from_binary(0x3400)));
    }
    #[gtest]
    pub fn test_opcode_jsrr_r7() {
        let mut regs = Registers::new();
        regs.set_pc(0x3001);
        regs.set(7, from_binary(0x4000));
        // JSRR - BaseR: 7, R7 already holds the return address when it is read
        jsr(0b0100_000_111_000000.into(), &mut regs);
        expect_that!(regs.pc(), eq(from_binary(0x3001)));
        expect_that!(regs.get(7), eq(from_binary(0x3001)));
    }
    #[gtest]
    pub fn test_opcode_ret() {
        let mut regs = Registers::new();
        regs.set_pc(0x3020);
        regs.set(7, from_binary(0x3022));
        // RET
        jmp_or_ret(0b1100_000_111_000000.into(), &mut regs);
        expect_that!(regs.pc(), eq(from_binary(0x3022)));
    }
    #[gtest]
    pub fn test_opcode_jmp() {
        let mut regs = Registers::new();
        regs.set_pc(0x3020);
        regs.set(1, from_binary(0x5000));
        // JMP - BaseR: 1
        jmp_or_ret(0b1100_000_001_000000.into(), &mut regs);
        expect_that!(regs.pc(), eq(from_binary(0x5000)));
    }
    #[gtest]
    pub fn test_opcode_rti_and_res_are_no_ops() {
        let mut regs = Registers::new();
        regs.set(1, from_binary(17));
        let before = regs.clone();
        rti(0b1000_000000000000.into(), &regs);
        res(0b1101_000000000000.into(), &regs);
        expect_that!(regs, eq(&before));
    }
}
