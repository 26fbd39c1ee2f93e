//! Fetch, decode and execute loop of the LC-3.
pub mod instruction;
pub mod opcodes;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod trap_routines;

use crate::emulator::instruction::Instruction;
use crate::emulator::opcodes::Opcode;
use crate::errors::{ExecutionError, LoadProgramError};
use crate::hardware::keyboard::KeyboardInputProvider;
use crate::hardware::memory::Memory;
use crate::hardware::registers::Registers;
use crate::program_image::ProgramImage;
use std::fmt::{Debug, Formatter};
use std::io::Write;
use std::ops::ControlFlow;
use std::path::Path;

/// The public facing emulator used to run LC-3 programs.
///
/// Owns registers and memory; keystrokes come from the given [`KeyboardInputProvider`] and
/// program output goes to `W`.
pub struct Emulator<W: Write> {
    registers: Registers,
    memory: Memory,
    stdout: W,
}

impl<W: Write> Debug for Emulator<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Registers: {:?}, {:?}", self.registers, self.memory)
    }
}

impl<W: Write> Emulator<W> {
    /// Creates an emulator with zeroed memory and registers in their power-on state.
    #[must_use]
    pub fn new(keyboard: Box<dyn KeyboardInputProvider>, stdout: W) -> Self {
        Self {
            registers: Registers::new(),
            memory: Memory::new(keyboard),
            stdout,
        }
    }

    /// Copies the words of `image` into memory starting at its origin.
    pub fn load_image(&mut self, image: &ProgramImage) {
        self.memory.load(image.origin(), image.words());
    }

    /// Reads the object file at `path` and loads it, returning its origin.
    ///
    /// # Errors
    /// - See [`ProgramImage::from_file`]
    pub fn load_program(&mut self, path: impl AsRef<Path>) -> Result<u16, LoadProgramError> {
        let image = ProgramImage::from_file(path)?;
        self.load_image(&image);
        Ok(image.origin())
    }

    #[must_use]
    pub const fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Output written so far by the program.
    #[must_use]
    pub const fn stdout(&self) -> &W {
        &self.stdout
    }

    /// Restores the power-on register state, memory is kept.
    pub fn reset_registers(&mut self) {
        self.registers = Registers::new();
    }

    /// Runs the loaded program starting at the current PC until it halts.
    ///
    /// # Errors
    /// - Writing program output failed
    pub fn execute(&mut self) -> Result<(), ExecutionError> {
        tracing::info!(pc = ?self.registers.pc(), "starting execution");
        loop {
            if let ControlFlow::Break(res) = self.step() {
                return res;
            }
        }
    }

    /// Executes a single instruction.
    ///
    /// Breaks with `Ok(())` once the program halted, either through the HALT trap or because an
    /// interrupt key was pressed.
    pub(crate) fn step(&mut self) -> ControlFlow<Result<(), ExecutionError>> {
        let i = Instruction::from(self.memory.read(self.registers.pc().as_binary()));
        self.registers.increment_pc();
        let regs = &mut self.registers;
        let mem = &mut self.memory;
        match Opcode::from(i) {
            Opcode::Br => opcodes::br(i, regs),
            Opcode::Add => opcodes::add(i, regs),
            Opcode::Ld => opcodes::ld(i, regs, mem),
            Opcode::St => opcodes::st(i, regs, mem),
            Opcode::Jsr => opcodes::jsr(i, regs),
            Opcode::And => opcodes::and(i, regs),
            Opcode::Ldr => opcodes::ldr(i, regs, mem),
            Opcode::Str => opcodes::str(i, regs, mem),
            Opcode::Rti => opcodes::rti(i, regs),
            Opcode::Not => opcodes::not(i, regs),
            Opcode::Ldi => opcodes::ldi(i, regs, mem),
            Opcode::Sti => opcodes::sti(i, regs, mem),
            Opcode::JmpOrRet => opcodes::jmp_or_ret(i, regs),
            Opcode::Res => opcodes::res(i, regs),
            Opcode::Lea => opcodes::lea(i, regs),
            Opcode::Trap => trap_routines::trap(i, regs, mem, &mut self.stdout)?,
        }
        if self.memory.take_interrupt() {
            tracing::info!("interrupt key pressed");
            return trap_routines::halt(&mut self.stdout);
        }
        ControlFlow::Continue(())
    }
}
