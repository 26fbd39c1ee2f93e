use crate::emulator::Emulator;
use crate::hardware::keyboard::{KeyPress, KeyboardInputProvider};
use crate::hardware::memory::PROGRAM_SECTION_START;
use crate::program_image::ProgramImage;
use std::collections::VecDeque;
use std::io;
use std::io::Write;

/// Keyboard replaying scripted keystrokes, `poll_key` and `read_key` consume the same queue.
pub struct FakeKeyboardInputProvider {
    keys: VecDeque<KeyPress>,
    error: Option<String>,
}
impl FakeKeyboardInputProvider {
    pub fn new(input: &str) -> Self {
        Self {
            keys: input
                .chars()
                .map(|c| KeyPress::Character(u16::try_from(u32::from(c)).unwrap()))
                .collect(),
            error: None,
        }
    }
    /// Keystrokes of `input` followed by an interrupt key.
    pub fn with_interrupt(input: &str) -> Self {
        let mut res = Self::new(input);
        res.keys.push_back(KeyPress::Interrupt);
        res
    }
    /// Every access fails with `message`.
    pub fn with_error(message: &str) -> Self {
        Self {
            keys: VecDeque::new(),
            error: Some(message.to_owned()),
        }
    }
    fn check_error(&self) -> io::Result<()> {
        self.error
            .as_ref()
            .map_or(Ok(()), |e| Err(io::Error::other(e.clone())))
    }
}
impl KeyboardInputProvider for FakeKeyboardInputProvider {
    fn poll_key(&mut self) -> io::Result<Option<KeyPress>> {
        self.check_error()?;
        Ok(self.keys.pop_front())
    }
    fn read_key(&mut self) -> io::Result<KeyPress> {
        self.check_error()?;
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys scripted"))
    }
}

pub struct StringWriter {
    vec: Vec<u8>,
}
impl Write for StringWriter {
    fn write(&mut self, data: &[u8]) -> Result<usize, io::Error> {
        self.vec.write(data)
    }
    fn flush(&mut self) -> Result<(), io::Error> {
        Ok(())
    }
}
impl StringWriter {
    pub fn new() -> Self {
        let vec = Vec::<u8>::with_capacity(120);
        Self { vec }
    }
    pub fn get_string(&self) -> String {
        String::from_utf8(self.vec.clone()).unwrap()
    }
}

/// Writer failing on every write, standing in for a closed stdout.
pub struct BrokenWriter;
impl Write for BrokenWriter {
    fn write(&mut self, _data: &[u8]) -> Result<usize, io::Error> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }
    fn flush(&mut self) -> Result<(), io::Error> {
        Ok(())
    }
}

/// Emulator with `program` loaded at `0x3000` and the given scripted keyboard.
pub fn emulator_with_program(
    program: &[u16],
    kip: FakeKeyboardInputProvider,
) -> Emulator<StringWriter> {
    let mut emu = Emulator::new(Box::new(kip), StringWriter::new());
    emu.load_image(&ProgramImage::new(PROGRAM_SECTION_START, program.to_vec()));
    emu
}
