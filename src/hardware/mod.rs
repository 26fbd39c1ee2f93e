//! The LC-3 machine state: memory with its memory mapped keyboard and the register file.
pub mod keyboard;
pub mod memory;
pub mod registers;
