use std::io;

/// A single keystroke as seen by the LC-3.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyPress {
    /// Character code of the pressed key.
    Character(u16),
    /// Escape or CTRL-C, ends the running program.
    Interrupt,
}

/// Providing Keyboard Input independent of an implementation.
///
/// The same provider backs the memory mapped keyboard registers and the blocking
/// `GETC` and `IN` trap routines.
pub trait KeyboardInputProvider {
    /// Returns a pending keystroke if there is one, does not block.
    ///
    /// # Errors
    /// - the input device could not be queried
    fn poll_key(&mut self) -> io::Result<Option<KeyPress>>;
    /// Blocks until a keystroke is available.
    ///
    /// # Errors
    /// - the input device could not be read
    fn read_key(&mut self) -> io::Result<KeyPress>;
}
