//! System calls reached through the TRAP opcode.
use crate::emulator::instruction::Instruction;
use crate::errors::ExecutionError;
use crate::hardware::keyboard::KeyPress;
use crate::hardware::memory::{MEMORY_SIZE_U16, Memory};
use crate::hardware::registers::{Registers, from_binary};
use std::io;
use std::io::Write;
use std::ops::ControlFlow;

/// Trap vectors with a routine, from bits `[7:0]` of the TRAP instruction.
#[repr(u8)]
#[derive(enumn::N, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrapVector {
    GetC = 0x20,
    Out = 0x21,
    PutS = 0x22,
    In = 0x23,
    PutSp = 0x24,
    Halt = 0x25,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum EchoOptions {
    EchoOn,
    EchoOff,
}

/// TRAP: calls the routine selected by `trapvect8`, R7 is not touched.
/// ```text
///  15__12__11__8___7______0_
/// | 1111 | 0000 | trapvect8 |
///  -------------------------
/// ```
/// Unknown trap vectors are ignored.
pub fn trap(
    i: Instruction,
    regs: &mut Registers,
    mem: &mut Memory,
    stdout: &mut impl Write,
) -> ControlFlow<Result<(), ExecutionError>> {
    match TrapVector::n(i.trap_vector()) {
        Some(TrapVector::GetC) => get_c(regs, mem, stdout),
        Some(TrapVector::Out) => out(regs, stdout),
        Some(TrapVector::PutS) => put_s(regs, mem, stdout),
        Some(TrapVector::In) => in_trap(regs, mem, stdout),
        Some(TrapVector::PutSp) => put_sp(regs, mem, stdout),
        Some(TrapVector::Halt) => halt(stdout),
        None => {
            tracing::debug!(
                vector = i.trap_vector(),
                pc = ?regs.pc(),
                "unknown trap vector, ignoring"
            );
            ControlFlow::Continue(())
        }
    }
}

fn read_character_from_console(
    regs: &mut Registers,
    mem: &mut Memory,
    eo: EchoOptions,
    stdout: &mut impl Write,
) -> ControlFlow<Result<(), ExecutionError>> {
    match mem.read_key() {
        Ok(KeyPress::Character(code)) => {
            regs.set(0, from_binary(code));
            if eo == EchoOptions::EchoOn {
                write_str_out(&String::from(to_char(code)), stdout)
            } else {
                ControlFlow::Continue(())
            }
        }
        Ok(KeyPress::Interrupt) => {
            tracing::info!("interrupted while waiting for keyboard input");
            halt(stdout)
        }
        Err(e) => {
            tracing::warn!(error = %e, "keyboard read failed, using character code 0");
            regs.set(0, from_binary(0));
            ControlFlow::Continue(())
        }
    }
}

/// GETC: Read a single character from the keyboard. The character is not echoed onto the console.
///
/// Its character code is copied into R0. A failing keyboard is logged and reads as code 0.
pub fn get_c(
    regs: &mut Registers,
    mem: &mut Memory,
    stdout: &mut impl Write,
) -> ControlFlow<Result<(), ExecutionError>> {
    read_character_from_console(regs, mem, EchoOptions::EchoOff, stdout)
}

/// IN: Print a prompt on the screen and read a single character echoed back from the keyboard.
///
/// Otherwise, like 0x20 GETC.
pub fn in_trap(
    regs: &mut Registers,
    mem: &mut Memory,
    stdout: &mut impl Write,
) -> ControlFlow<Result<(), ExecutionError>> {
    write_str_out("Enter a character: ", stdout)?;
    read_character_from_console(regs, mem, EchoOptions::EchoOn, stdout)
}

/// OUT: Write the character in R0 to the console display.
pub fn out(regs: &Registers, stdout: &mut impl Write) -> ControlFlow<Result<(), ExecutionError>> {
    write_str_out(&String::from(to_char(regs.get(0).as_binary())), stdout)
}

fn to_char(code: u16) -> char {
    char::from_u32(u32::from(code)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn put_one_char_per_u16(input: u16, append_to: &mut String) -> ControlFlow<()> {
    append_to.push(to_char(input));
    ControlFlow::Continue(())
}

fn put_two_chars_per_u16(input: u16, append_to: &mut String) -> ControlFlow<()> {
    for b in input.to_le_bytes() {
        if b == 0 {
            return ControlFlow::Break(());
        }
        append_to.push(char::from(b));
    }
    ControlFlow::Continue(())
}

fn put(
    regs: &Registers,
    mem: &mut Memory,
    stdout: &mut impl Write,
    handle_char: fn(u16, &mut String) -> ControlFlow<()>,
) -> ControlFlow<Result<(), ExecutionError>> {
    let mut address = regs.get(0).as_binary();
    let mut s = String::with_capacity(120);
    // a string without terminator is cut after one pass over the whole memory
    for _ in 0..MEMORY_SIZE_U16 {
        let word = mem.read(address);
        if word == 0 || handle_char(word, &mut s).is_break() {
            break;
        }
        address = address.wrapping_add(1);
    }
    write_str_out(s.as_str(), stdout)
}

/// PUTS: print null-delimited string with one character per word from R0's address
pub fn put_s(
    regs: &Registers,
    mem: &mut Memory,
    stdout: &mut impl Write,
) -> ControlFlow<Result<(), ExecutionError>> {
    put(regs, mem, stdout, put_one_char_per_u16)
}

/// PUTSP: Packed version of PUTS
///
/// The ASCII code contained in bits [7:0] of a memory location is written to the console first.
/// The second character of the last memory location can be 0x00.
/// Writing terminates with the first 0x00 byte.
pub fn put_sp(
    regs: &Registers,
    mem: &mut Memory,
    stdout: &mut impl Write,
) -> ControlFlow<Result<(), ExecutionError>> {
    put(regs, mem, stdout, put_two_chars_per_u16)
}

/// HALT: End program and stdout a message
pub fn halt(stdout: &mut impl Write) -> ControlFlow<Result<(), ExecutionError>> {
    write_str_out("\nProgram halted\n", stdout)?;
    tracing::info!("program halted");
    ControlFlow::Break(Ok(()))
}

fn write_str_out(
    message: &str,
    stdout: &mut impl Write,
) -> ControlFlow<Result<(), ExecutionError>> {
    match write!(stdout, "{message}").and_then(|()| stdout.flush()) {
        Ok(()) => ControlFlow::Continue(()),
        Err(e) => wrap_io_error_in_cf(&e),
    }
}

fn wrap_io_error_in_cf(error: &io::Error) -> ControlFlow<Result<(), ExecutionError>, ()> {
    ControlFlow::Break(Err(ExecutionError::IOInputOutputError(error.to_string())))
}
