use crate::hardware::keyboard::{KeyPress, KeyboardInputProvider};
use std::fmt::{Debug, Formatter};
use std::io;

pub const PROGRAM_SECTION_START: u16 = 0x3000;
/// Number of addressable u16 words, every `u16` is a valid address.
pub const MEMORY_SIZE_U16: usize = 1 << 16;

/// Memory regions mapped to IO functionality.
#[repr(u16)]
#[derive(enumn::N, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MemoryMappedIOLocations {
    /// Keyboard Status Register
    Kbsr = 0xFE00,
    /// Keyboard Data Register
    Kbdr = 0xFE02,
}

/// An abstraction for the LC-3 memory including the memory mapped keyboard but excluding registers.
pub struct Memory {
    /// Index equals memory address
    data: Box<[u16]>,
    keyboard: Box<dyn KeyboardInputProvider>,
    interrupted: bool,
}

impl Debug for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|w| **w != 0).count();
        write!(
            f,
            "Memory {{ non-zero words: {used}, KBSR: {:#06X}, KBDR: {:#06X}, interrupted: {} }}",
            self.data[usize::from(MemoryMappedIOLocations::Kbsr as u16)],
            self.data[usize::from(MemoryMappedIOLocations::Kbdr as u16)],
            self.interrupted
        )
    }
}

impl Memory {
    const KEYBOARD_STATUS_REGISTER_SET: u16 = 1 << 15;
    const KEYBOARD_STATUS_REGISTER_UNSET: u16 = 0;

    #[must_use]
    pub fn new(keyboard: Box<dyn KeyboardInputProvider>) -> Self {
        Self {
            data: vec![0x0u16; MEMORY_SIZE_U16].into_boxed_slice(),
            keyboard,
            interrupted: false,
        }
    }

    /// Reads the word at `address`.
    ///
    /// Reading the keyboard status register polls the keyboard and latches a pending key into
    /// the keyboard data register.
    pub fn read(&mut self, address: u16) -> u16 {
        if MemoryMappedIOLocations::n(address) == Some(MemoryMappedIOLocations::Kbsr) {
            self.poll_keyboard();
        }
        self.data[usize::from(address)]
    }

    pub fn write(&mut self, address: u16, value: u16) {
        self.data[usize::from(address)] = value;
    }

    /// Copies `words` into memory starting at `origin`.
    /// Addresses wrap around from `0xFFFF` to `0x0000`, at most one full memory is written.
    pub fn load(&mut self, origin: u16, words: &[u16]) {
        let mut address = origin;
        for word in words.iter().take(MEMORY_SIZE_U16) {
            self.write(address, *word);
            address = address.wrapping_add(1);
        }
    }

    /// Blocking read of the keyboard for the trap routines.
    ///
    /// # Errors
    /// - keyboard could not be read
    pub fn read_key(&mut self) -> io::Result<KeyPress> {
        self.keyboard.read_key()
    }

    /// Returns whether an interrupt key was seen while polling the keyboard status register
    /// and resets that state.
    pub const fn take_interrupt(&mut self) -> bool {
        let res = self.interrupted;
        self.interrupted = false;
        res
    }

    fn poll_keyboard(&mut self) {
        let status = match self.keyboard.poll_key() {
            Ok(Some(KeyPress::Character(code))) => {
                self.write(MemoryMappedIOLocations::Kbdr as u16, code);
                Self::KEYBOARD_STATUS_REGISTER_SET
            }
            Ok(Some(KeyPress::Interrupt)) => {
                self.interrupted = true;
                Self::KEYBOARD_STATUS_REGISTER_UNSET
            }
            Ok(None) => Self::KEYBOARD_STATUS_REGISTER_UNSET,
            Err(e) => {
                tracing::warn!(error = %e, "keyboard poll failed, treating as no key available");
                Self::KEYBOARD_STATUS_REGISTER_UNSET
            }
        };
        self.write(MemoryMappedIOLocations::Kbsr as u16, status);
    }
}
