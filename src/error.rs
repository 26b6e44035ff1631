use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingFault {
    #[error("empty buffer")]
    Empty,
    #[error("no lead byte")]
    NoLeadByte,
    #[error("run overflows U+10FFFF at byte {offset}")]
    Overflow { offset: usize },
    // only with OrphanPrefix::Reject
    #[error("{len} orphaned continuation byte(s) before first lead byte")]
    OrphanPrefix { len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LzyError {
    #[error("invalid LZY encoding: {0}")]
    InvalidEncoding(#[from] EncodingFault),

    /// `offset` is the run's lead byte, or the input index for a strict encode.
    #[error("invalid code point 0x{code_point:X} at {offset}")]
    InvalidCodePoint { code_point: u32, offset: usize },

    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
