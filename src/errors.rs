//! Errors reported while loading or running LC-3 programs.
use displaydoc::Display;
use std::error::Error;

/// Failures reading a program image, reported before execution starts.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum LoadProgramError {
    /// Cannot read program image {path}: {message}
    ProgramNotReadable { path: String, message: String },
    /// {path} is a directory, not a program image
    ProgramIsDirectory { path: String },
    /// Program is missing valid .ORIG header
    ProgramMissingOrigHeader,
    /// Program has an odd length of {bytes} bytes, expected a sequence of u16 words
    ProgramOddLength { bytes: usize },
}
impl Error for LoadProgramError {}

/// Failures of the console collaborators while a program runs.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// Error during reading Stdin or writing program output to Stdout: {0}
    IOInputOutputError(String),
}
impl Error for ExecutionError {}
