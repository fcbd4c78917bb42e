//! Byte to text decoding.
//!
//! Decoding a single-byte code page never fails: every byte indexes the
//! table's total decode array.

use crate::table::CodePageTable;

/// Decoder over a shared [`CodePageTable`]
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    table: &'t CodePageTable,
}

impl<'t> Decoder<'t> {
    /// Create a decoder for `table`
    pub fn new(table: &'t CodePageTable) -> Self {
        Self { table }
    }

    /// Table this decoder reads from
    pub fn table(&self) -> &'t CodePageTable {
        self.table
    }

    /// Number of UTF-16 units `bytes` decode to
    pub fn char_count(&self, bytes: &[u8]) -> usize {
        bytes.len()
    }

    /// Decode `bytes` into a new string
    pub fn decode(&self, bytes: &[u8]) -> String {
        let mut output = String::with_capacity(bytes.len());
        self.decode_into(bytes, &mut output);
        output
    }

    /// Append the decoding of `bytes` to `output`
    pub fn decode_into(&self, bytes: &[u8], output: &mut String) {
        output.reserve(bytes.len());
        output.extend(bytes.iter().map(|&byte| self.table.decode_byte(byte)));
    }

    /// Decode `bytes` to UTF-16 code units
    pub fn decode_utf16(&self, bytes: &[u8]) -> Vec<u16> {
        bytes
            .iter()
            .map(|&byte| self.table.decode_unit(byte))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::CodePageRegistry;
    use crate::table::DECODE_SUBSTITUTE;

    #[test]
    fn test_cp866_cyrillic() {
        let cp866 = CodePageRegistry::global().lookup(866).unwrap();
        let decoder = cp866.decoder();

        assert_eq!(decoder.decode(&[0x80]), "А");
        assert_eq!(decoder.decode(&[0x8F, 0xE0, 0xA8, 0xA2, 0xA5, 0xE2]), "Привет");
    }

    #[test]
    fn test_ebcdic_037_alphabet() {
        let ibm037 = CodePageRegistry::global().lookup("IBM037").unwrap();

        let ebcdic_alphabet = &[
            0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, // A-I
            0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, // J-R
            0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, // S-Z
        ];
        assert_eq!(ibm037.decode(ebcdic_alphabet), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(ibm037.decode(&[0xC8, 0xC5, 0xD3, 0xD3, 0xD6]), "HELLO");
    }

    #[test]
    fn test_every_byte_decodes() {
        let registry = CodePageRegistry::global();
        for info in registry.pages() {
            let table = registry.lookup(info.id).unwrap();
            let all: Vec<u8> = (0..=u8::MAX).collect();
            let text = table.decode(&all);
            assert_eq!(text.chars().count(), 256, "{}", table.name());
            assert_eq!(table.decoder().char_count(&all), 256);
        }
    }

    #[test]
    fn test_unassigned_byte_decodes_to_substitute() {
        let windows_1252 = CodePageRegistry::global().lookup(1252).unwrap();

        assert!(!windows_1252.is_mapped(0x81));
        assert_eq!(windows_1252.decode(&[0x41, 0x81, 0x80]), format!("A{DECODE_SUBSTITUTE}€"));
    }

    #[test]
    fn test_decode_into_appends() {
        let cp437 = CodePageRegistry::global().lookup(437).unwrap();
        let mut output = String::from("box: ");
        cp437.decoder().decode_into(&[0xC9, 0xCD, 0xBB], &mut output);
        assert_eq!(output, "box: ╔═╗");
    }

    #[test]
    fn test_decode_utf16_units() {
        let asmo = CodePageRegistry::global().lookup(708).unwrap();
        assert_eq!(asmo.decoder().decode_utf16(&[0x41, 0xD1]), vec![0x0041, 0x0631]);
    }
}
