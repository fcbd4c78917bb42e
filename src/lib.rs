//! # codepage-transcode - Legacy Single-Byte Code Page Transcoding
//!
//! Converts text between Unicode and the single-byte code pages found in
//! mainframe, DOS, Windows and Unix data: IBM EBCDIC variants, OEM pages,
//! Windows ANSI pages, KOI8 and the ISO 8859 series.
//!
//! ## Features
//!
//! - **Table driven**: every page is a 256-entry decode array plus one
//!   shared encoding algorithm
//! - **Two-phase encoding**: [`Encoder::byte_count`] sizes the output
//!   exactly before [`Encoder::encode`] writes it
//! - **Pluggable fallbacks** for characters a page cannot represent
//! - **Compatibility folding** of fullwidth ASCII forms
//! - **Thread-safe**: tables are built lazily, once, and shared read-only
//!
//! ## Quick Start
//!
//! ```rust
//! use codepage_transcode::{CodePageRegistry, FallbackPolicy};
//!
//! let registry = CodePageRegistry::global();
//! let ebcdic = registry.lookup("IBM037").unwrap();
//!
//! // Decode mainframe data
//! assert_eq!(ebcdic.decode(&[0xC8, 0xC5, 0xD3, 0xD3, 0xD6]), "HELLO");
//!
//! // Encode into an exactly sized buffer
//! let mut encoder = ebcdic.encoder(FallbackPolicy::Strict);
//! let mut out = vec![0u8; encoder.byte_count("HELLO").unwrap()];
//! encoder.encode("HELLO", &mut out).unwrap();
//! assert_eq!(out, [0xC8, 0xC5, 0xD3, 0xD3, 0xD6]);
//!
//! // Unrepresentable characters become the page's substitute byte
//! assert_eq!(codepage_transcode::encode(437, "☃").unwrap(), b"?");
//! ```

#![deny(missing_docs)]

pub mod decoder;
pub mod encoder;
pub mod fallback;
pub mod registry;
pub mod table;
mod tables;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use fallback::{FallbackDecision, FallbackHandler, FallbackPolicy};
pub use registry::{CodePageKey, CodePageRegistry};
pub use table::{CodePageInfo, CodePageTable, Family, Fold, TableBuilder};

/// Result type for transcoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during transcoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No registered code page matches the key
    #[error("unknown code page: {0}")]
    UnknownCodePage(String),

    /// The fallback policy refused a unit the code page cannot represent
    #[error("cannot encode U+{code_point:04X} at position {position}")]
    UnmappableCharacter {
        /// The unmappable UTF-16 unit
        code_point: u32,
        /// UTF-16 offset of the unit in the input
        position: usize,
    },

    /// The output buffer filled up before the input was consumed
    #[error("output buffer too small: {written} of {capacity} bytes written")]
    BufferTooSmall {
        /// Size of the caller's buffer
        capacity: usize,
        /// Bytes written before running out of room
        written: usize,
    },

    /// A fallback substitute contained a unit the code page cannot represent
    #[error("fallback for position {position} produced unencodable U+{code_point:04X}")]
    RecursiveFallback {
        /// The unmappable unit inside the substitute
        code_point: u32,
        /// UTF-16 offset of the unit that triggered the fallback
        position: usize,
    },

    /// Table definition rejected at build time
    #[error("invalid table for code page {id}: {reason}")]
    InvalidTable {
        /// Code page identifier
        id: u16,
        /// What is wrong with the definition
        reason: String,
    },

    /// Unparseable fallback policy
    #[error("invalid fallback policy: {0:?} (expected replace, strict, ignore, ncr or byte:<value>)")]
    InvalidFallback(String),
}

/// Decode `bytes` from the code page named by `page`
pub fn decode<'k>(page: impl Into<CodePageKey<'k>>, bytes: &[u8]) -> Result<String> {
    Ok(CodePageRegistry::global().lookup(page)?.decode(bytes))
}

/// Encode `text` into the code page named by `page`, substituting
/// unrepresentable characters
pub fn encode<'k>(page: impl Into<CodePageKey<'k>>, text: &str) -> Result<Vec<u8>> {
    CodePageRegistry::global().lookup(page)?.encode(text)
}

/// Number of bytes [`encode`] produces for `text`
pub fn byte_count<'k>(page: impl Into<CodePageKey<'k>>, text: &str) -> Result<usize> {
    CodePageRegistry::global().lookup(page)?.byte_count(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions() {
        assert_eq!(decode(1252, &[0x80, 0x41]).unwrap(), "€A");
        assert_eq!(encode("windows-1252", "€A").unwrap(), vec![0x80, 0x41]);
        assert_eq!(byte_count("cp1252", "€A☃").unwrap(), 3);
    }

    #[test]
    fn test_unknown_page() {
        assert_eq!(
            decode("klingon", b"abc").unwrap_err(),
            Error::UnknownCodePage("klingon".to_string())
        );
    }

    #[test]
    fn test_ebcdic_to_windows_through_unicode() {
        let text = decode(1141, &[0xC8, 0x85, 0x93, 0x93, 0x96, 0x9F]).unwrap();
        assert_eq!(text, "Hello€");
        assert_eq!(encode(1252, &text).unwrap(), b"Hello\x80".to_vec());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::UnmappableCharacter {
            code_point: 0x2603,
            position: 4,
        };
        assert_eq!(err.to_string(), "cannot encode U+2603 at position 4");

        let err = Error::BufferTooSmall {
            capacity: 3,
            written: 3,
        };
        assert_eq!(err.to_string(), "output buffer too small: 3 of 3 bytes written");

        let err = Error::InvalidTable {
            id: 1,
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "invalid table for code page 1: bad");
    }
}
