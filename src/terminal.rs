//! Console collaborators of the emulator backed by `crossterm`.
use crate::hardware::keyboard::{KeyPress, KeyboardInputProvider};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll, read};
use crossterm::terminal;
use std::io;
use std::io::Write;
use std::time::Duration;

pub struct RawLock {}

impl Drop for RawLock {
    fn drop(&mut self) {
        // terminal stays in raw mode but no means to repair
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::error!(error = %e, "Error resetting terminal");
        }
    }
}

/// Set terminal to raw in best-effort mode, only log on failure, since it does not work
/// when stdin is not a terminal.
///
/// Raw mode is left again when the returned lock is dropped.
#[must_use]
pub fn set_terminal_raw() -> RawLock {
    if let Err(e) = terminal::enable_raw_mode() {
        tracing::warn!(error = %e, "Could not set terminal to raw mode");
    }
    RawLock {}
}

/// Keyboard of the real terminal, Escape and CTRL-C are reported as [`KeyPress::Interrupt`].
#[derive(Debug, Default)]
pub struct TerminalInputProvider {}

impl TerminalInputProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl KeyboardInputProvider for TerminalInputProvider {
    fn poll_key(&mut self) -> io::Result<Option<KeyPress>> {
        while poll(Duration::ZERO)? {
            if let Some(key) = to_key_press(&read()?) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
    fn read_key(&mut self) -> io::Result<KeyPress> {
        loop {
            if let Some(key) = to_key_press(&read()?) {
                return Ok(key);
            }
        }
    }
}

/// Maps terminal events to LC-3 keystrokes, everything without a character code is dropped.
fn to_key_press(event: &Event) -> Option<KeyPress> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };
    match code {
        KeyCode::Esc => Some(KeyPress::Interrupt),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyPress::Interrupt)
        }
        // CTRL-A..CTRL-Z arrive as control codes 0x01..0x1A
        KeyCode::Char(c)
            if modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() =>
        {
            u16::try_from(u32::from(*c) & 0x1F)
                .ok()
                .map(KeyPress::Character)
        }
        KeyCode::Char(c) => u16::try_from(u32::from(*c)).ok().map(KeyPress::Character),
        KeyCode::Enter => Some(KeyPress::Character(u16::from(b'\n'))),
        KeyCode::Backspace => Some(KeyPress::Character(0x08)),
        KeyCode::Tab => Some(KeyPress::Character(u16::from(b'\t'))),
        _ => None,
    }
}

/// Program output for a terminal in raw mode, where a line feed does not return the cursor
/// to the first column.
pub struct ConsoleOutput<W: Write> {
    inner: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for ConsoleOutput<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for (idx, part) in buf.split(|b| *b == b'\n').enumerate() {
            if idx > 0 {
                self.inner.write_all(b"\r\n")?;
            }
            self.inner.write_all(part)?;
        }
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
