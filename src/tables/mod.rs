//! Built-in code page definitions.
//!
//! Decode data lives in the per-family modules as plain `[u16; 256]`
//! arrays. Everything else a page needs (identity guard, substitute byte,
//! fold ranges, extra encode aliases) is declared here next to its names.

mod ansi;
mod ebcdic;
mod oem;

pub(crate) use crate::table::UNMAPPED;
use crate::table::{CodePageInfo, CodePageTable, Family, Fold};
use crate::Result;

/// Static description of a built-in code page
#[derive(Debug)]
pub(crate) struct PageDef {
    pub id: u16,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub family: Family,
    pub decode: &'static [u16; 256],
    pub identity_below: u16,
    pub substitute: u8,
    pub folds: &'static [Fold],
    /// Extra code points routed to a byte when the decode data has no entry
    pub encode_aliases: &'static [(u16, u8)],
}

impl PageDef {
    pub fn info(&self) -> CodePageInfo {
        CodePageInfo {
            id: self.id,
            name: self.name.to_string(),
            aliases: self.aliases.iter().map(|alias| alias.to_string()).collect(),
            description: self.description.to_string(),
            family: self.family,
        }
    }

    pub fn build(&self) -> Result<CodePageTable> {
        let mut builder = CodePageTable::builder(self.id, self.name)
            .aliases(self.aliases.iter().copied())
            .description(self.description)
            .family(self.family)
            .identity_below(self.identity_below)
            .substitute(self.substitute);
        for &fold in self.folds {
            builder = builder.fold(fold);
        }
        for &(unit, byte) in self.encode_aliases {
            builder = builder.encode_alias(unit, byte);
        }
        builder.build(self.decode)
    }
}

const FULLWIDTH: &[Fold] = &[Fold::FULLWIDTH_ASCII];

const NO_FOLDS: &[Fold] = &[];

/// IBM290 lacks `[ \ ] ^`, lowercase Latin and `{ } ~`.
const IBM290_FOLDS: &[Fold] = &[
    Fold::new(0xFF01, 0xFF3A, 0xFEE0),
    Fold::new(0xFF3F, 0xFF40, 0xFEE0),
    Fold::new(0xFF5C, 0xFF5C, 0xFEE0),
];

/// IBM420 lacks `[ \ ] ^`, the grave accent and `{ } ~`.
const IBM420_FOLDS: &[Fold] = &[
    Fold::new(0xFF01, 0xFF3A, 0xFEE0),
    Fold::new(0xFF3F, 0xFF3F, 0xFEE0),
    Fold::new(0xFF41, 0xFF5A, 0xFEE0),
    Fold::new(0xFF5C, 0xFF5C, 0xFEE0),
];

/// IBM864 puts the Arabic percent sign at 0x25.
const IBM864_FOLDS: &[Fold] = &[
    Fold::new(0xFF01, 0xFF04, 0xFEE0),
    Fold::new(0xFF06, 0xFF5E, 0xFEE0),
];

const NO_ALIASES: &[(u16, u8)] = &[];

/// IBM PC glyphs drawn for the C0 control bytes and DEL.
const OEM_GLYPHS: &[(u16, u8)] = &[
    (0x263A, 0x01),
    (0x263B, 0x02),
    (0x2665, 0x03),
    (0x2666, 0x04),
    (0x2663, 0x05),
    (0x2660, 0x06),
    (0x2022, 0x07),
    (0x25D8, 0x08),
    (0x25CB, 0x09),
    (0x25D9, 0x0A),
    (0x2642, 0x0B),
    (0x2640, 0x0C),
    (0x266A, 0x0D),
    (0x266B, 0x0E),
    (0x263C, 0x0F),
    (0x25BA, 0x10),
    (0x25C4, 0x11),
    (0x2195, 0x12),
    (0x203C, 0x13),
    (0x00B6, 0x14),
    (0x00A7, 0x15),
    (0x25AC, 0x16),
    (0x21A8, 0x17),
    (0x2191, 0x18),
    (0x2193, 0x19),
    (0x2192, 0x1A),
    (0x2190, 0x1B),
    (0x221F, 0x1C),
    (0x2194, 0x1D),
    (0x25B2, 0x1E),
    (0x25BC, 0x1F),
    (0x2302, 0x7F),
];

const EBCDIC_GUARD: u16 = 0x04;
const EBCDIC_SUBSTITUTE: u8 = 0x6F;

macro_rules! ebcdic {
    ($id:expr, $name:expr, [$($alias:expr),*], $desc:expr, $decode:expr) => {
        ebcdic!($id, $name, [$($alias),*], $desc, $decode, FULLWIDTH)
    };
    ($id:expr, $name:expr, [$($alias:expr),*], $desc:expr, $decode:expr, $folds:expr) => {
        PageDef {
            id: $id,
            name: $name,
            aliases: &[$($alias),*],
            description: $desc,
            family: Family::Ebcdic,
            decode: &$decode,
            identity_below: EBCDIC_GUARD,
            substitute: EBCDIC_SUBSTITUTE,
            folds: $folds,
            encode_aliases: NO_ALIASES,
        }
    };
}

macro_rules! page {
    ($family:ident, $id:expr, $name:expr, [$($alias:expr),*], $desc:expr, $decode:expr,
     guard: $guard:expr, folds: $folds:expr, aliases: $extra:expr) => {
        PageDef {
            id: $id,
            name: $name,
            aliases: &[$($alias),*],
            description: $desc,
            family: Family::$family,
            decode: &$decode,
            identity_below: $guard,
            substitute: b'?',
            folds: $folds,
            encode_aliases: $extra,
        }
    };
}

pub(crate) static PAGES: &[PageDef] = &[
    // EBCDIC
    ebcdic!(37, "IBM037", ["cp037", "ibm37", "cp37", "ebcdic-cp-us", "ebcdic-cp-ca", "csibm037"], "IBM EBCDIC (US-Canada)", ebcdic::IBM037),
    ebcdic!(500, "IBM500", ["cp500", "ebcdic-cp-be", "ebcdic-cp-ch", "csibm500"], "IBM EBCDIC (International)", ebcdic::IBM500),
    ebcdic!(875, "cp875", ["ibm875", "x-ebcdic-greekmodern"], "IBM EBCDIC (Greek Modern)", ebcdic::IBM875),
    ebcdic!(1026, "IBM1026", ["cp1026", "ibm01026", "csibm1026"], "IBM EBCDIC (Turkish Latin-5)", ebcdic::IBM1026),
    ebcdic!(1140, "IBM01140", ["ibm1140", "cp1140", "ebcdic-us-37+euro"], "IBM EBCDIC (US-Canada-Euro)", ebcdic::IBM01140),
    ebcdic!(1141, "IBM01141", ["ibm1141", "cp1141", "ebcdic-de-273+euro"], "IBM EBCDIC (Germany-Euro)", ebcdic::IBM01141),
    ebcdic!(1142, "IBM01142", ["ibm1142", "cp1142", "ebcdic-dk-277+euro", "ebcdic-no-277+euro"], "IBM EBCDIC (Denmark-Norway-Euro)", ebcdic::IBM01142),
    ebcdic!(1143, "IBM01143", ["ibm1143", "cp1143", "ebcdic-fi-278+euro", "ebcdic-se-278+euro"], "IBM EBCDIC (Finland-Sweden-Euro)", ebcdic::IBM01143),
    ebcdic!(1144, "IBM01144", ["ibm1144", "cp1144", "ebcdic-it-280+euro"], "IBM EBCDIC (Italy-Euro)", ebcdic::IBM01144),
    ebcdic!(1145, "IBM01145", ["ibm1145", "cp1145", "ebcdic-es-284+euro"], "IBM EBCDIC (Spain-Euro)", ebcdic::IBM01145),
    ebcdic!(1146, "IBM01146", ["ibm1146", "cp1146", "ebcdic-gb-285+euro"], "IBM EBCDIC (UK-Euro)", ebcdic::IBM01146),
    ebcdic!(1147, "IBM01147", ["ibm1147", "cp1147", "ebcdic-fr-297+euro"], "IBM EBCDIC (France-Euro)", ebcdic::IBM01147),
    ebcdic!(1148, "IBM01148", ["ibm1148", "cp1148", "ebcdic-international-500+euro"], "IBM EBCDIC (International-Euro)", ebcdic::IBM01148),
    ebcdic!(1149, "IBM01149", ["ibm1149", "cp1149", "ebcdic-is-871+euro"], "IBM EBCDIC (Icelandic-Euro)", ebcdic::IBM01149),
    ebcdic!(20273, "IBM273", ["cp273", "csibm273"], "IBM EBCDIC (Germany)", ebcdic::IBM273),
    ebcdic!(20277, "IBM277", ["cp277", "csibm277", "ebcdic-cp-dk", "ebcdic-cp-no"], "IBM EBCDIC (Denmark-Norway)", ebcdic::IBM277),
    ebcdic!(20278, "IBM278", ["cp278", "csibm278", "ebcdic-cp-fi", "ebcdic-cp-se"], "IBM EBCDIC (Finland-Sweden)", ebcdic::IBM278),
    ebcdic!(20280, "IBM280", ["cp280", "csibm280", "ebcdic-cp-it"], "IBM EBCDIC (Italy)", ebcdic::IBM280),
    ebcdic!(20284, "IBM284", ["cp284", "csibm284", "ebcdic-cp-es"], "IBM EBCDIC (Spain)", ebcdic::IBM284),
    ebcdic!(20285, "IBM285", ["cp285", "csibm285", "ebcdic-cp-gb"], "IBM EBCDIC (UK)", ebcdic::IBM285),
    ebcdic!(20290, "IBM290", ["cp290", "csibm290", "ebcdic-jp-kana"], "IBM EBCDIC (Japanese katakana)", ebcdic::IBM290, IBM290_FOLDS),
    ebcdic!(20297, "IBM297", ["cp297", "csibm297", "ebcdic-cp-fr"], "IBM EBCDIC (France)", ebcdic::IBM297),
    ebcdic!(20420, "IBM420", ["cp420", "csibm420", "ebcdic-cp-ar1"], "IBM EBCDIC (Arabic)", ebcdic::IBM420, IBM420_FOLDS),
    ebcdic!(20871, "IBM871", ["cp871", "csibm871", "ebcdic-cp-is"], "IBM EBCDIC (Icelandic)", ebcdic::IBM871),
    // DOS/OEM
    page!(Oem, 437, "IBM437", ["cp437", "cspc8codepage437"], "OEM United States", oem::IBM437, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 708, "ASMO-708", ["cp708"], "Arabic (ASMO 708)", oem::ASMO_708, guard: 0xA1, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Oem, 720, "DOS-720", ["cp720"], "Arabic (DOS)", oem::DOS_720, guard: 0x82, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Oem, 737, "ibm737", ["cp737"], "Greek (DOS)", oem::IBM737, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 775, "ibm775", ["cp775"], "Baltic (DOS)", oem::IBM775, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 850, "ibm850", ["cp850"], "Western European (DOS)", oem::IBM850, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 852, "ibm852", ["cp852"], "Central European (DOS)", oem::IBM852, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 855, "IBM855", ["cp855"], "OEM Cyrillic", oem::IBM855, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 857, "ibm857", ["cp857"], "Turkish (DOS)", oem::IBM857, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 858, "IBM00858", ["ibm858", "cp858", "ccsid00858", "cp00858"], "OEM Multilingual Latin I", oem::IBM00858, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 860, "IBM860", ["cp860"], "Portuguese (DOS)", oem::IBM860, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 861, "ibm861", ["cp861"], "Icelandic (DOS)", oem::IBM861, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 862, "DOS-862", ["cp862"], "Hebrew (DOS)", oem::DOS_862, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 863, "IBM863", ["cp863"], "French Canadian (DOS)", oem::IBM863, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 864, "IBM864", ["cp864"], "Arabic (864)", oem::IBM864, guard: 0x25, folds: IBM864_FOLDS, aliases: NO_ALIASES),
    page!(Oem, 865, "IBM865", ["cp865"], "Nordic (DOS)", oem::IBM865, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 866, "cp866", ["ibm866", "csibm866"], "Cyrillic (DOS)", oem::CP866, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    page!(Oem, 869, "ibm869", ["cp869", "cp-gr"], "Greek, Modern (DOS)", oem::IBM869, guard: 0x80, folds: FULLWIDTH, aliases: OEM_GLYPHS),
    // Windows
    page!(Windows, 874, "windows-874", ["cp874", "ms874"], "Thai (Windows)", ansi::WINDOWS_874, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Windows, 1250, "windows-1250", ["cp1250", "x-cp1250"], "Central European (Windows)", ansi::WINDOWS_1250, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Windows, 1251, "windows-1251", ["cp1251", "x-cp1251"], "Cyrillic (Windows)", ansi::WINDOWS_1251, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Windows, 1252, "windows-1252", ["cp1252", "x-ansi"], "Western European (Windows)", ansi::WINDOWS_1252, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Windows, 1253, "windows-1253", ["cp1253"], "Greek (Windows)", ansi::WINDOWS_1253, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Windows, 1254, "windows-1254", ["cp1254"], "Turkish (Windows)", ansi::WINDOWS_1254, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Windows, 1255, "windows-1255", ["cp1255"], "Hebrew (Windows)", ansi::WINDOWS_1255, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Windows, 1256, "windows-1256", ["cp1256"], "Arabic (Windows)", ansi::WINDOWS_1256, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Windows, 1257, "windows-1257", ["cp1257"], "Baltic (Windows)", ansi::WINDOWS_1257, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    page!(Windows, 1258, "windows-1258", ["cp1258"], "Vietnamese (Windows)", ansi::WINDOWS_1258, guard: 0x80, folds: FULLWIDTH, aliases: NO_ALIASES),
    // Macintosh, KOI8, ISO 8859
    page!(Mac, 10000, "macintosh", ["mac", "macroman", "x-mac-roman"], "Western European (Mac)", ansi::MACINTOSH, guard: 0x80, folds: NO_FOLDS, aliases: NO_ALIASES),
    page!(Koi8, 20866, "koi8-r", ["koi8", "koi", "cskoi8r"], "Cyrillic (KOI8-R)", ansi::KOI8_R, guard: 0x80, folds: NO_FOLDS, aliases: NO_ALIASES),
    page!(Koi8, 21866, "koi8-u", ["koi8-ru"], "Cyrillic (KOI8-U)", ansi::KOI8_U, guard: 0x80, folds: NO_FOLDS, aliases: NO_ALIASES),
    page!(Iso, 28591, "iso-8859-1", ["latin1", "l1", "cp819", "ibm819"], "Western European (ISO)", ansi::ISO_8859_1, guard: 0x100, folds: NO_FOLDS, aliases: NO_ALIASES),
    page!(Iso, 28592, "iso-8859-2", ["latin2", "l2"], "Central European (ISO)", ansi::ISO_8859_2, guard: 0xA1, folds: NO_FOLDS, aliases: NO_ALIASES),
    page!(Iso, 28595, "iso-8859-5", ["cyrillic"], "Cyrillic (ISO)", ansi::ISO_8859_5, guard: 0xA1, folds: NO_FOLDS, aliases: NO_ALIASES),
    page!(Iso, 28597, "iso-8859-7", ["greek", "greek8", "elot_928"], "Greek (ISO)", ansi::ISO_8859_7, guard: 0xA1, folds: NO_FOLDS, aliases: NO_ALIASES),
    page!(Iso, 28605, "iso-8859-15", ["latin9", "l9"], "Latin 9 (ISO)", ansi::ISO_8859_15, guard: 0xA4, folds: NO_FOLDS, aliases: NO_ALIASES),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_match_decode_data() {
        for def in PAGES {
            let decode = def.decode;
            for byte in 0..def.identity_below as usize {
                assert_eq!(decode[byte] as usize, byte, "{} byte {byte:#04X}", def.name);
            }
            if (def.identity_below as usize) < 256 {
                assert_ne!(
                    decode[def.identity_below as usize] as usize,
                    def.identity_below as usize,
                    "{}: guard could be wider",
                    def.name
                );
            }
            assert_eq!(
                decode[def.substitute as usize], 0x003F,
                "{}: substitute byte must decode to '?'",
                def.name
            );
        }
    }

    #[test]
    fn test_fold_ranges_land_on_assigned_characters() {
        for def in PAGES {
            let table = def.build().unwrap();
            for fold in def.folds {
                for unit in fold.first..=fold.last {
                    assert!(
                        table.lookup(unit).is_some(),
                        "{}: U+{unit:04X} folds onto an unmapped character",
                        def.name
                    );
                }
            }
        }
    }
}
