//! # LC-3 VM.
//!
//! `lc3-vm` runs program images of the LC-3 system.
//! Create an [`emulator::Emulator`] with a keyboard and an output, load one or more images and
//! call [`emulator::Emulator::execute`] until the program halts.
//!
//!  # Example
//! ```
//! use lc3_vm::emulator::Emulator;
//! use lc3_vm::program_image::ProgramImage;
//! use lc3_vm::terminal::TerminalInputProvider;
//!
//! // LEA R0, 2; PUTS; HALT; "Hi"
//! let image = ProgramImage::from_bytes(&[
//!     0x30, 0x00, 0xE0, 0x02, 0xF0, 0x22, 0xF0, 0x25, 0x00, 0x48, 0x00, 0x69, 0x00, 0x00,
//! ]).unwrap();
//! let mut emu = Emulator::new(Box::new(TerminalInputProvider::new()), Vec::new());
//! emu.load_image(&image);
//! emu.execute().unwrap();
//! assert_eq!(emu.stdout().as_slice(), b"Hi\nProgram halted\n");
//! ```
//! # Errors
//! - Program image is missing a valid .ORIG header or has an odd length
//! - Writing program output fails while running

pub mod emulator;
pub mod errors;
pub mod hardware;
pub(crate) mod numbers;
pub mod program_image;
pub mod terminal;
