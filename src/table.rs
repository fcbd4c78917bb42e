//! Immutable per-code-page mapping tables.
//!
//! A [`CodePageTable`] owns a total 256-entry decode table and the sparse
//! encode map derived from it. Tables are built once through a
//! [`TableBuilder`] and are read-only afterwards, so a single table can be
//! shared by any number of concurrent encoders and decoders.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::fallback::FallbackPolicy;
use crate::{Error, Result};

/// Marker for byte values a code page leaves unassigned in its decode data.
pub const UNMAPPED: u16 = 0xFFFF;

/// Character produced when decoding a byte the code page leaves unassigned.
pub const DECODE_SUBSTITUTE: char = '?';

/// Broad family a code page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// IBM EBCDIC pages
    Ebcdic,
    /// DOS/OEM pages
    Oem,
    /// Windows ANSI pages
    Windows,
    /// Classic Macintosh pages
    Mac,
    /// KOI8 Cyrillic pages
    Koi8,
    /// ISO 8859 series
    Iso,
    /// Tables defined by the caller
    Custom,
}

impl Family {
    /// Lowercase name used in listings and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Family::Ebcdic => "ebcdic",
            Family::Oem => "oem",
            Family::Windows => "windows",
            Family::Mac => "mac",
            Family::Koi8 => "koi8",
            Family::Iso => "iso",
            Family::Custom => "custom",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compatibility range folded onto canonical code points before lookup.
///
/// A unit `ch` in `first..=last` is treated as `ch - offset`. The folded
/// unit goes through the identity guard and the primary encode map once;
/// folds never chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fold {
    /// First code unit of the range
    pub first: u16,
    /// Last code unit of the range (inclusive)
    pub last: u16,
    /// Distance subtracted from units in the range
    pub offset: u16,
}

impl Fold {
    /// Fullwidth ASCII forms U+FF01..U+FF5E onto U+0021..U+007E.
    pub const FULLWIDTH_ASCII: Fold = Fold::new(0xFF01, 0xFF5E, 0xFEE0);

    /// Create a fold range
    pub const fn new(first: u16, last: u16, offset: u16) -> Self {
        Self {
            first,
            last,
            offset,
        }
    }

    /// Fold `unit` if it falls inside this range
    #[inline]
    pub fn apply(&self, unit: u16) -> Option<u16> {
        if (self.first..=self.last).contains(&unit) {
            unit.checked_sub(self.offset)
        } else {
            None
        }
    }
}

/// Descriptive metadata of a code page, available without building its table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodePageInfo {
    /// Numeric code page identifier
    pub id: u16,
    /// Canonical name
    pub name: String,
    /// Alternative names accepted by the registry
    pub aliases: Vec<String>,
    /// Human readable description
    pub description: String,
    /// Family the page belongs to
    pub family: Family,
}

/// Bidirectional mapping between a single-byte code page and UTF-16 units
#[derive(Debug, Clone)]
pub struct CodePageTable {
    id: u16,
    name: String,
    aliases: Vec<String>,
    description: String,
    family: Family,
    decode: [char; 256],
    decode_units: [u16; 256],
    /// Bitmask of unassigned bytes (256 bits = 4 u64s)
    unmapped_mask: [u64; 4],
    encode: HashMap<u16, u8>,
    identity_below: u16,
    folds: Vec<Fold>,
    substitute: u8,
}

impl CodePageTable {
    /// Start building a table for code page `id` named `name`
    pub fn builder(id: u16, name: impl Into<String>) -> TableBuilder {
        TableBuilder::new(id, name)
    }

    /// Numeric code page identifier
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Canonical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Human readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Family the page belongs to
    pub fn family(&self) -> Family {
        self.family
    }

    /// Byte emitted by the default lenient fallback
    pub fn substitute_byte(&self) -> u8 {
        self.substitute
    }

    /// Code units below this value encode to the byte of the same value
    pub fn identity_below(&self) -> u16 {
        self.identity_below
    }

    /// Compatibility fold ranges, in lookup order
    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    /// Metadata snapshot of this table
    pub fn info(&self) -> CodePageInfo {
        CodePageInfo {
            id: self.id,
            name: self.name.clone(),
            aliases: self.aliases.clone(),
            description: self.description.clone(),
            family: self.family,
        }
    }

    /// Check whether the code page assigns `byte`
    #[inline]
    pub fn is_mapped(&self, byte: u8) -> bool {
        let word_idx = (byte as usize) / 64;
        let bit_idx = (byte as usize) % 64;
        (self.unmapped_mask[word_idx] & (1u64 << bit_idx)) == 0
    }

    /// Bytes the code page leaves unassigned
    pub fn unmapped_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&byte| !self.is_mapped(byte))
    }

    /// Decode a single byte. Total: unassigned bytes yield [`DECODE_SUBSTITUTE`].
    #[inline]
    pub fn decode_byte(&self, byte: u8) -> char {
        self.decode[byte as usize]
    }

    /// Decode a single byte to its UTF-16 unit
    #[inline]
    pub fn decode_unit(&self, byte: u8) -> u16 {
        self.decode_units[byte as usize]
    }

    /// Encode one unit through the identity guard and the primary map only
    #[inline]
    pub fn lookup_exact(&self, unit: u16) -> Option<u8> {
        if unit < self.identity_below {
            return Some(unit as u8);
        }
        self.encode.get(&unit).copied()
    }

    /// Encode one unit: identity guard, primary map, then fold ranges.
    ///
    /// Returns `None` when the unit needs a fallback.
    #[inline]
    pub fn lookup(&self, unit: u16) -> Option<u8> {
        if let Some(byte) = self.lookup_exact(unit) {
            return Some(byte);
        }
        self.folds
            .iter()
            .find_map(|fold| fold.apply(unit))
            .and_then(|folded| self.lookup_exact(folded))
    }

    /// Assigned bytes whose decoded unit re-encodes to a different byte
    pub fn non_bijective_bytes(&self) -> Vec<u8> {
        (0..=u8::MAX)
            .filter(|&byte| self.is_mapped(byte))
            .filter(|&byte| self.lookup(self.decode_unit(byte)) != Some(byte))
            .collect()
    }

    /// Decoder over this table
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self)
    }

    /// Encoder over this table using `fallback` for unmappable units
    pub fn encoder(&self, fallback: FallbackPolicy) -> Encoder<'_> {
        Encoder::new(self, fallback)
    }

    /// Decode `bytes` to a string
    pub fn decode(&self, bytes: &[u8]) -> String {
        self.decoder().decode(bytes)
    }

    /// Encode `text` with the default lenient fallback
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        self.encoder(FallbackPolicy::default()).encode_to_vec(text)
    }

    /// Number of bytes [`CodePageTable::encode`] produces for `text`
    pub fn byte_count(&self, text: &str) -> Result<usize> {
        self.encoder(FallbackPolicy::default()).byte_count(text)
    }
}

impl fmt::Display for CodePageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Builder for [`CodePageTable`]
#[derive(Debug, Clone)]
pub struct TableBuilder {
    id: u16,
    name: String,
    aliases: Vec<String>,
    description: String,
    family: Family,
    identity_below: u16,
    substitute: u8,
    folds: Vec<Fold>,
    encode_aliases: Vec<(u16, u8)>,
}

impl TableBuilder {
    fn new(id: u16, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            family: Family::Custom,
            identity_below: 0,
            substitute: b'?',
            folds: Vec::new(),
            encode_aliases: Vec::new(),
        }
    }

    /// Add an alternative name
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Add several alternative names
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the family
    pub fn family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }

    /// Declare that every unit below `limit` encodes to itself.
    ///
    /// `build` rejects a limit the decode data does not honour.
    pub fn identity_below(mut self, limit: u16) -> Self {
        self.identity_below = limit;
        self
    }

    /// Set the byte emitted by the lenient fallback
    pub fn substitute(mut self, byte: u8) -> Self {
        self.substitute = byte;
        self
    }

    /// Append a compatibility fold range
    pub fn fold(mut self, fold: Fold) -> Self {
        self.folds.push(fold);
        self
    }

    /// Route `unit` to `byte` unless the decode data already maps `unit`
    pub fn encode_alias(mut self, unit: u16, byte: u8) -> Self {
        self.encode_aliases.push((unit, byte));
        self
    }

    /// Build the table from a byte to unit decode array.
    ///
    /// Entries equal to [`UNMAPPED`] mark unassigned bytes. When two bytes
    /// decode to the same unit the higher byte becomes its encoding.
    pub fn build(self, decode: &[u16; 256]) -> Result<CodePageTable> {
        let id = self.id;
        let invalid = |reason: String| Error::InvalidTable { id, reason };

        if self.identity_below > 256 {
            return Err(invalid(format!(
                "identity guard {:#X} exceeds the byte range",
                self.identity_below
            )));
        }

        let mut chars = [DECODE_SUBSTITUTE; 256];
        let mut units = [DECODE_SUBSTITUTE as u16; 256];
        let mut unmapped_mask = [0u64; 4];
        let mut encode = HashMap::with_capacity(256 + self.encode_aliases.len());
        let mut collisions = 0usize;

        for (byte, &unit) in decode.iter().enumerate() {
            if unit == UNMAPPED {
                unmapped_mask[byte / 64] |= 1u64 << (byte % 64);
                continue;
            }
            let ch = char::from_u32(u32::from(unit)).ok_or_else(|| {
                invalid(format!(
                    "byte 0x{byte:02X} decodes to surrogate U+{unit:04X}"
                ))
            })?;
            chars[byte] = ch;
            units[byte] = unit;
            if encode.insert(unit, byte as u8).is_some() {
                collisions += 1;
            }
        }

        for byte in 0..self.identity_below as usize {
            let assigned = unmapped_mask[byte / 64] & (1u64 << (byte % 64)) == 0;
            if !assigned || units[byte] as usize != byte {
                return Err(invalid(format!(
                    "identity guard {:#X} covers byte 0x{byte:02X}, which decodes to U+{:04X}",
                    self.identity_below, units[byte]
                )));
            }
        }

        for fold in &self.folds {
            if fold.first > fold.last || fold.offset > fold.first {
                return Err(invalid(format!(
                    "fold U+{:04X}..U+{:04X} by {:#X} is malformed",
                    fold.first, fold.last, fold.offset
                )));
            }
        }

        for &(unit, byte) in &self.encode_aliases {
            encode.entry(unit).or_insert(byte);
        }

        log::debug!(
            "built code page {} ({}): {} encode entries, {} decode collisions, {} fold ranges",
            self.name,
            id,
            encode.len(),
            collisions,
            self.folds.len()
        );

        Ok(CodePageTable {
            id,
            name: self.name,
            aliases: self.aliases,
            description: self.description,
            family: self.family,
            decode: chars,
            decode_units: units,
            unmapped_mask,
            encode,
            identity_below: self.identity_below,
            folds: self.folds,
            substitute: self.substitute,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_decode() -> [u16; 256] {
        std::array::from_fn(|byte| byte as u16)
    }

    #[test]
    fn test_last_byte_wins_on_duplicate_decode() {
        let mut decode = identity_decode();
        decode[0x80] = 0x20AC;
        decode[0x90] = 0x20AC;
        let table = CodePageTable::builder(9000, "test").build(&decode).unwrap();

        assert_eq!(table.lookup(0x20AC), Some(0x90));
        assert_eq!(table.decode_byte(0x80), '€');
        assert_eq!(table.non_bijective_bytes(), vec![0x80]);
    }

    #[test]
    fn test_unmapped_bytes_decode_to_substitute() {
        let mut decode = identity_decode();
        decode[0xA0] = UNMAPPED;
        let table = CodePageTable::builder(9001, "holes").build(&decode).unwrap();

        assert!(!table.is_mapped(0xA0));
        assert!(table.is_mapped(0xA1));
        assert_eq!(table.decode_byte(0xA0), DECODE_SUBSTITUTE);
        assert_eq!(table.unmapped_bytes().collect::<Vec<_>>(), vec![0xA0]);
        // '?' keeps encoding to its own byte, not to the hole
        assert_eq!(table.lookup(u16::from(b'?')), Some(b'?'));
        assert_eq!(table.lookup(0x00A0), None);
        assert!(table.non_bijective_bytes().is_empty());
    }

    #[test]
    fn test_encode_alias_does_not_override_decode() {
        let mut decode = identity_decode();
        decode[0xF5] = 0x00A7;
        let table = CodePageTable::builder(9002, "aliases")
            .encode_alias(0x00A7, 0x15)
            .encode_alias(0x263A, 0x01)
            .build(&decode)
            .unwrap();

        assert_eq!(table.lookup(0x00A7), Some(0xF5));
        assert_eq!(table.lookup(0x263A), Some(0x01));
    }

    #[test]
    fn test_fold_reaches_primary_table() {
        let mut decode = identity_decode();
        decode[0xC1] = 0x0041;
        decode[0x41] = UNMAPPED;
        decode[0x42] = UNMAPPED;
        let table = CodePageTable::builder(9004, "fold")
            .identity_below(0x20)
            .fold(Fold::FULLWIDTH_ASCII)
            .build(&decode)
            .unwrap();

        assert_eq!(table.lookup(0xFF21), Some(0xC1));
        assert_eq!(table.lookup_exact(0xFF21), None);
        // the folded unit has no byte of its own
        assert_eq!(table.lookup(0xFF22), None);
        assert_eq!(table.lookup(0xFF5F), None);
    }

    #[test]
    fn test_identity_guard_is_validated() {
        let mut decode = identity_decode();
        decode[0x05] = 0x0009;
        let err = CodePageTable::builder(9005, "bad-guard")
            .identity_below(0x20)
            .build(&decode)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTable { id: 9005, .. }));

        let err = CodePageTable::builder(9005, "too-wide")
            .identity_below(0x101)
            .build(&identity_decode())
            .unwrap_err();
        assert!(err.to_string().contains("exceeds the byte range"));
    }

    #[test]
    fn test_surrogate_decode_rejected() {
        let mut decode = identity_decode();
        decode[0x80] = 0xD800;
        let err = CodePageTable::builder(9006, "surrogate")
            .build(&decode)
            .unwrap_err();
        assert!(err.to_string().contains("surrogate"));
    }

    #[test]
    fn test_malformed_fold_rejected() {
        let err = CodePageTable::builder(9007, "fold")
            .fold(Fold::new(0x0010, 0x0020, 0x0030))
            .build(&identity_decode())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTable { .. }));
    }

    #[test]
    fn test_table_metadata() {
        let table = CodePageTable::builder(9008, "meta")
            .aliases(["m1", "m2"])
            .description("metadata test")
            .family(Family::Oem)
            .substitute(0x6F)
            .build(&identity_decode())
            .unwrap();

        assert_eq!(table.to_string(), "meta (9008)");
        assert_eq!(table.substitute_byte(), 0x6F);
        let info = table.info();
        assert_eq!(info.aliases, vec!["m1".to_string(), "m2".to_string()]);
        assert_eq!(info.family, Family::Oem);
        assert_eq!(info.family.to_string(), "oem");
    }
}
