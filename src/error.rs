//! Error related data structures.

use std::fmt::{self, Display, Formatter};

/// Top level enum for error handling within the emulator core.
///
/// Every variant here corresponds to a load-time failure: once a
/// [`crate::gb::GameBoy`] is running there is nothing left to fail,
/// every opcode and every memory access has a defined outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The cartridge image is shorter than the minimum 0x8000 bytes
    /// a Game Boy ROM must have.
    RomSize,

    /// The cartridge header (0x0147) requests a bank controller this
    /// core does not implement (MBC3, MBC5, MBC6, MBC7, ...).
    UnsupportedMbc(u8),

    /// Catch-all for messages that don't deserve their own variant.
    CustomError(String),
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::RomSize => "Invalid ROM size".to_string(),
            Error::UnsupportedMbc(mbc_type) => {
                format!("Unsupported cartridge type 0x{mbc_type:02x}")
            }
            Error::CustomError(message) => message.clone(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Error {}
