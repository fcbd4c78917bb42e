//! Text to byte encoding.
//!
//! [`Encoder::byte_count`] and [`Encoder::encode`] share one core loop that
//! differs only in where bytes go: a counter, a caller supplied slice or a
//! growable vector. Input is consumed one UTF-16 unit at a time; each half
//! of a supplementary character falls back on its own, except under
//! [`FallbackPolicy::NcrEscape`], which escapes the pair as one scalar.

use crate::fallback::{FallbackDecision, FallbackPolicy};
use crate::table::CodePageTable;
use crate::{Error, Result};

/// Destination of encoded bytes
trait ByteSink {
    fn put(&mut self, byte: u8) -> Result<()>;
}

/// Counts bytes without storing them
#[derive(Debug, Default)]
struct ByteCounter {
    count: usize,
}

impl ByteSink for ByteCounter {
    #[inline]
    fn put(&mut self, _byte: u8) -> Result<()> {
        self.count += 1;
        Ok(())
    }
}

/// Writes into a fixed caller buffer
struct SliceWriter<'o> {
    out: &'o mut [u8],
    written: usize,
}

impl ByteSink for SliceWriter<'_> {
    #[inline]
    fn put(&mut self, byte: u8) -> Result<()> {
        match self.out.get_mut(self.written) {
            Some(slot) => {
                *slot = byte;
                self.written += 1;
                Ok(())
            }
            None => Err(Error::BufferTooSmall {
                capacity: self.out.len(),
                written: self.written,
            }),
        }
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn put(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }
}

/// Fallback replacement cursor
#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    /// Substitute units queued by a fallback, drained before the next
    /// source unit. `origin` is the offset of the unit that fell back.
    Draining {
        buffer: Vec<u16>,
        pos: usize,
        origin: usize,
    },
}

/// Encoder over a shared [`CodePageTable`] with its own fallback policy
#[derive(Debug)]
pub struct Encoder<'t> {
    table: &'t CodePageTable,
    fallback: FallbackPolicy,
    state: State,
}

impl<'t> Encoder<'t> {
    /// Create an encoder for `table` using `fallback` for unmappable units
    pub fn new(table: &'t CodePageTable, fallback: FallbackPolicy) -> Self {
        Self {
            table,
            fallback,
            state: State::Idle,
        }
    }

    /// Table this encoder writes for
    pub fn table(&self) -> &'t CodePageTable {
        self.table
    }

    /// Fallback policy in use
    pub fn fallback(&self) -> &FallbackPolicy {
        &self.fallback
    }

    /// Number of bytes [`Encoder::encode`] would write for `text`.
    ///
    /// Fails only when the fallback policy fails.
    pub fn byte_count(&mut self, text: &str) -> Result<usize> {
        self.byte_count_utf16_iter(text.encode_utf16())
    }

    /// [`Encoder::byte_count`] for UTF-16 input
    pub fn byte_count_utf16(&mut self, units: &[u16]) -> Result<usize> {
        self.byte_count_utf16_iter(units.iter().copied())
    }

    fn byte_count_utf16_iter<I>(&mut self, units: I) -> Result<usize>
    where
        I: Iterator<Item = u16>,
    {
        let mut counter = ByteCounter::default();
        self.run(units, &mut counter)?;
        Ok(counter.count)
    }

    /// Encode `text` into `out`, returning the number of bytes written.
    ///
    /// Size `out` with [`Encoder::byte_count`]. On
    /// [`Error::BufferTooSmall`] or a fallback failure the bytes already
    /// written are the valid encoding of the consumed prefix of `text`.
    pub fn encode(&mut self, text: &str, out: &mut [u8]) -> Result<usize> {
        self.encode_into(text.encode_utf16(), out)
    }

    /// [`Encoder::encode`] for UTF-16 input
    pub fn encode_utf16(&mut self, units: &[u16], out: &mut [u8]) -> Result<usize> {
        self.encode_into(units.iter().copied(), out)
    }

    fn encode_into<I>(&mut self, units: I, out: &mut [u8]) -> Result<usize>
    where
        I: Iterator<Item = u16>,
    {
        let mut writer = SliceWriter { out, written: 0 };
        self.run(units, &mut writer)?;
        Ok(writer.written)
    }

    /// Encode `text` into a new vector
    pub fn encode_to_vec(&mut self, text: &str) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(text.len());
        self.run(text.encode_utf16(), &mut output)?;
        Ok(output)
    }

    /// [`Encoder::encode_to_vec`] for UTF-16 input
    pub fn encode_utf16_to_vec(&mut self, units: &[u16]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(units.len());
        self.run(units.iter().copied(), &mut output)?;
        Ok(output)
    }

    fn run<I, S>(&mut self, units: I, sink: &mut S) -> Result<()>
    where
        I: Iterator<Item = u16>,
        S: ByteSink,
    {
        self.state = State::Idle;
        let result = self.transcode(units, sink);
        self.state = State::Idle;
        result
    }

    fn transcode<I, S>(&mut self, units: I, sink: &mut S) -> Result<()>
    where
        I: Iterator<Item = u16>,
        S: ByteSink,
    {
        let mut units = units.peekable();
        let mut position = 0usize;
        loop {
            if let State::Draining {
                buffer,
                pos,
                origin,
            } = &mut self.state
            {
                if let Some(&unit) = buffer.get(*pos) {
                    *pos += 1;
                    let byte = self
                        .table
                        .lookup(unit)
                        .ok_or(Error::RecursiveFallback {
                            code_point: u32::from(unit),
                            position: *origin,
                        })?;
                    sink.put(byte)?;
                    continue;
                }
                self.state = State::Idle;
            }

            let Some(unit) = units.next() else {
                return Ok(());
            };

            let mut consumed = 1;
            match self.table.lookup(unit) {
                Some(byte) => sink.put(byte)?,
                None => {
                    let decision = match units.peek() {
                        Some(&low) => self
                            .fallback
                            .resolve_pair(self.table, unit, low, position)
                            .inspect(|_| consumed = 2),
                        None => None,
                    }
                    .unwrap_or_else(|| self.fallback.resolve(self.table, unit, position));

                    match decision {
                        FallbackDecision::ReplaceWithByte(byte) => sink.put(byte)?,
                        FallbackDecision::Fail => {
                            return Err(Error::UnmappableCharacter {
                                code_point: u32::from(unit),
                                position,
                            });
                        }
                        FallbackDecision::Substitute(buffer) => {
                            self.state = State::Draining {
                                buffer,
                                pos: 0,
                                origin: position,
                            };
                        }
                    }
                }
            }
            if consumed == 2 {
                units.next();
            }
            position += consumed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CodePageRegistry;

    fn page(key: &str) -> &'static CodePageTable {
        CodePageRegistry::global().lookup(key).unwrap()
    }

    #[test]
    fn test_cp866_cyrillic_a() {
        let cp866 = page("cp866");
        assert_eq!(cp866.encode("А").unwrap(), vec![0x80]);
        assert_eq!(cp866.encode("Привет").unwrap(), vec![0x8F, 0xE0, 0xA8, 0xA2, 0xA5, 0xE2]);
    }

    #[test]
    fn test_asmo708_arabic_reh() {
        let asmo = page("ASMO-708");
        assert_eq!(asmo.encode("ر").unwrap(), vec![0xD1]);
    }

    #[test]
    fn test_ebcdic_hello() {
        let ibm037 = page("IBM037");
        assert_eq!(ibm037.encode("HELLO").unwrap(), vec![0xC8, 0xC5, 0xD3, 0xD3, 0xD6]);
    }

    #[test]
    fn test_control_guard_passthrough() {
        let ibm037 = page("IBM037");
        assert_eq!(ibm037.encode("\u{0}\u{1}\u{2}\u{3}").unwrap(), vec![0, 1, 2, 3]);
        // U+0004 lies beyond the guard and goes through the table
        assert_eq!(ibm037.encode("\u{4}").unwrap(), vec![0x37]);
    }

    #[test]
    fn test_fullwidth_fold() {
        let ibm037 = page("IBM037");
        assert_eq!(ibm037.encode("ＨＥＬＬＯ").unwrap(), ibm037.encode("HELLO").unwrap());

        let cp437 = page("IBM437");
        assert_eq!(cp437.encode("Ａ１！").unwrap(), b"A1!".to_vec());
    }

    #[test]
    fn test_fold_not_applied_outside_page_ranges() {
        let latin1 = page("iso-8859-1");
        assert!(latin1.folds().is_empty());
        assert_eq!(latin1.encode("Ａ").unwrap(), vec![b'?']);

        // IBM290 has no lowercase Latin letters to fold onto
        let katakana = page("IBM290");
        assert_eq!(katakana.encode("Ａ").unwrap(), katakana.encode("A").unwrap());
        assert_eq!(katakana.encode("ａ").unwrap(), vec![katakana.substitute_byte()]);
    }

    #[test]
    fn test_snowman_falls_back() {
        for key in ["IBM037", "IBM437", "windows-1252", "cp866", "ASMO-708"] {
            let table = page(key);
            let encoded = table.encode("a☃b").unwrap();
            assert_eq!(encoded[1], table.substitute_byte(), "{key}");
            assert_eq!(table.byte_count("a☃b").unwrap(), encoded.len(), "{key}");
        }
        assert_eq!(page("IBM037").encode("☃").unwrap(), vec![0x6F]);
        assert_eq!(page("IBM437").encode("☃").unwrap(), vec![0x3F]);
    }

    #[test]
    fn test_strict_fallback_fails_at_position() {
        let cp437 = page("IBM437");
        let mut encoder = cp437.encoder(FallbackPolicy::Strict);

        let err = encoder.encode_to_vec("ab☃").unwrap_err();
        assert_eq!(
            err,
            Error::UnmappableCharacter {
                code_point: 0x2603,
                position: 2
            }
        );
        assert!(encoder.byte_count("ab☃").is_err());
        // the same encoder keeps working after a failure
        assert_eq!(encoder.encode_to_vec("ab").unwrap(), b"ab".to_vec());
    }

    #[test]
    fn test_replace_with_fixed_byte() {
        let cp437 = page("IBM437");
        let mut encoder = cp437.encoder(FallbackPolicy::ReplaceWith(0xFE));
        assert_eq!(encoder.encode_to_vec("x☃").unwrap(), vec![b'x', 0xFE]);
    }

    #[test]
    fn test_surrogate_pairs_fall_back_per_unit() {
        let cp437 = page("IBM437");
        assert_eq!(cp437.encode("😀").unwrap(), vec![0x3F, 0x3F]);
        assert_eq!(cp437.byte_count("😀").unwrap(), 2);

        let mut strict = cp437.encoder(FallbackPolicy::Strict);
        let err = strict.encode_utf16_to_vec(&[0x41, 0xD83D, 0xDE00]).unwrap_err();
        assert_eq!(
            err,
            Error::UnmappableCharacter {
                code_point: 0xD83D,
                position: 1
            }
        );
    }

    #[test]
    fn test_encode_into_presized_buffer() {
        let ibm1141 = page("IBM01141");
        let mut encoder = ibm1141.encoder(FallbackPolicy::default());
        let text = "Grüße €5";

        let needed = encoder.byte_count(text).unwrap();
        let mut out = vec![0u8; needed];
        let written = encoder.encode(text, &mut out).unwrap();

        assert_eq!(written, needed);
        assert_eq!(out, encoder.encode_to_vec(text).unwrap());
        assert_eq!(ibm1141.decode(&out), text);
    }

    #[test]
    fn test_buffer_too_small_keeps_prefix() {
        let cp437 = page("IBM437");
        let mut encoder = cp437.encoder(FallbackPolicy::default());
        let mut out = [0u8; 3];

        let err = encoder.encode("hello", &mut out).unwrap_err();
        assert_eq!(
            err,
            Error::BufferTooSmall {
                capacity: 3,
                written: 3
            }
        );
        assert_eq!(&out, b"hel");
    }

    #[test]
    fn test_ignore_drops_units() {
        let cp437 = page("IBM437");
        let mut encoder = cp437.encoder(FallbackPolicy::Ignore);
        assert_eq!(encoder.encode_to_vec("a☃b").unwrap(), b"ab".to_vec());
        assert_eq!(encoder.byte_count("a☃b").unwrap(), 2);
    }

    #[test]
    fn test_ncr_escape_is_reencoded() {
        let ibm037 = page("IBM037");
        let mut encoder = ibm037.encoder(FallbackPolicy::NcrEscape);

        let bytes = encoder.encode_to_vec("a☃").unwrap();
        assert_eq!(ibm037.decode(&bytes), "a&#9731;");
        assert_eq!(encoder.byte_count("a☃").unwrap(), bytes.len());
    }

    #[test]
    fn test_ncr_escape_whole_supplementary_character() {
        let cp437 = page("IBM437");
        let mut encoder = cp437.encoder(FallbackPolicy::NcrEscape);

        let bytes = encoder.encode_to_vec("a😀b").unwrap();
        assert_eq!(cp437.decode(&bytes), "a&#128512;b");
        assert_eq!(encoder.byte_count("a😀b").unwrap(), bytes.len());

        // a lone surrogate is still escaped per unit
        let bytes = encoder.encode_utf16_to_vec(&[0xD83D, 0x41]).unwrap();
        assert_eq!(cp437.decode(&bytes), "&#55357;A");

        // positions after the pair keep counting UTF-16 units
        let policy = FallbackPolicy::custom(|_unit: u16, position: usize| {
            FallbackDecision::substitute_str(&format!("&#{position};"))
        });
        let mut positions = cp437.encoder(policy);
        let bytes = positions.encode_to_vec("😀☃").unwrap();
        assert_eq!(cp437.decode(&bytes), "&#0;&#1;&#2;");
    }

    #[test]
    fn test_custom_handler_drains_before_next_unit() {
        let cp866 = page("cp866");
        let policy = FallbackPolicy::custom(|unit: u16, _position: usize| match unit {
            0x2603 => FallbackDecision::substitute_str("[снег]"),
            _ => FallbackDecision::Fail,
        });
        let mut encoder = cp866.encoder(policy);

        let bytes = encoder.encode_to_vec("a☃b").unwrap();
        assert_eq!(cp866.decode(&bytes), "a[снег]b");
        assert_eq!(encoder.byte_count("a☃b").unwrap(), bytes.len());

        let err = encoder.encode_to_vec("a€").unwrap_err();
        assert!(matches!(err, Error::UnmappableCharacter { code_point: 0x20AC, position: 1 }));
    }

    #[test]
    fn test_substitute_may_not_fall_back_again() {
        let cp437 = page("IBM437");
        let policy = FallbackPolicy::custom(|_unit: u16, _position: usize| {
            FallbackDecision::substitute_str("ok☃")
        });
        let mut encoder = cp437.encoder(policy);

        let err = encoder.encode_to_vec("xy€").unwrap_err();
        assert_eq!(
            err,
            Error::RecursiveFallback {
                code_point: 0x2603,
                position: 2
            }
        );
    }

    #[test]
    fn test_oem_glyph_aliases() {
        let cp437 = page("IBM437");
        assert_eq!(cp437.encode("☺♥⌂").unwrap(), vec![0x01, 0x03, 0x7F]);
        // decoding keeps the control characters
        assert_eq!(cp437.decode(&[0x01]), "\u{1}");
    }

    #[test]
    fn test_utf16_input() {
        let windows_1251 = page("windows-1251");
        let units: Vec<u16> = "Москва".encode_utf16().collect();
        let mut encoder = windows_1251.encoder(FallbackPolicy::Strict);

        let count = encoder.byte_count_utf16(&units).unwrap();
        let mut out = vec![0u8; count];
        assert_eq!(encoder.encode_utf16(&units, &mut out).unwrap(), 6);
        assert_eq!(windows_1251.decode(&out), "Москва");
    }
}
