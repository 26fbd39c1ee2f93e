//! Reading LC-3 object files.
//!
//! An image is a sequence of big-endian u16 words. The first word is the `.ORIG` address the
//! remaining words are loaded to.
use crate::errors::LoadProgramError;
use std::fs;
use std::path::Path;

/// A program ready to be copied into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramImage {
    origin: u16,
    words: Vec<u16>,
}

impl ProgramImage {
    /// Words running past `0xFFFF` continue at address `0x0000` when loaded.
    #[must_use]
    pub const fn new(origin: u16, words: Vec<u16>) -> Self {
        Self { origin, words }
    }

    /// Parses the raw bytes of an object file.
    ///
    /// # Errors
    /// - Program is missing valid .ORIG header (because it is shorter than one `u16` instruction)
    /// - Program has an odd number of bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadProgramError> {
        if bytes.len() < 2 {
            return Err(LoadProgramError::ProgramMissingOrigHeader);
        }
        if bytes.len() % 2 != 0 {
            return Err(LoadProgramError::ProgramOddLength { bytes: bytes.len() });
        }
        let mut words = bytes
            .chunks_exact(2)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]));
        let origin = words
            .next()
            .ok_or(LoadProgramError::ProgramMissingOrigHeader)?;
        Ok(Self::new(origin, words.collect()))
    }

    /// Reads and parses the object file at `path`.
    ///
    /// # Errors
    /// - `path` is a directory or cannot be read
    /// - See [`ProgramImage::from_bytes`]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadProgramError> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(LoadProgramError::ProgramIsDirectory {
                path: path.display().to_string(),
            });
        }
        let bytes = fs::read(path).map_err(|e| LoadProgramError::ProgramNotReadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let image = Self::from_bytes(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            origin = format_args!("{:#06X}", image.origin),
            words = image.words.len(),
            "read program image"
        );
        Ok(image)
    }

    #[must_use]
    pub const fn origin(&self) -> u16 {
        self.origin
    }
    #[must_use]
    pub fn words(&self) -> &[u16] {
        &self.words
    }
}
