use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised while building a ROM container. If one of these surfaces, there is no
/// container to disassemble.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Error {
    pub fn io(source: io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// The file was readable, but its contents do not describe a valid iNES image.
#[derive(Error, Debug, PartialEq)]
pub enum FormatError {
    #[error("header too short: expected 16 bytes, found {found}")]
    HeaderTooShort { found: usize },
    #[error("missing iNES signature (found: {found:02X?})")]
    InvalidMagic { found: [u8; 4] },
    #[error("truncated {region}: expected {expected} bytes, found {found}")]
    Truncated {
        region: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Per-instruction decode failures. The disassembler never surfaces these: unknown opcodes are
/// skipped and running out of bytes ends the walk.
#[derive(Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("offset ${offset:04X} is past the end of the program")]
    EndOfInput { offset: usize },
    #[error("unknown opcode ${opcode:02X} at offset ${offset:04X}")]
    UnknownOpcode { offset: usize, opcode: u8 },
    #[error(
        "opcode ${opcode:02X} at offset ${offset:04X} needs {needed} bytes, only {remaining} remain"
    )]
    Truncated {
        offset: usize,
        opcode: u8,
        needed: usize,
        remaining: usize,
    },
}
