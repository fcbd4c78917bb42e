use codepage_transcode::{
    CodePageRegistry, CodePageTable, Error, FallbackDecision, FallbackPolicy, Family,
};

fn all_pages() -> Vec<&'static CodePageTable> {
    let registry = CodePageRegistry::global();
    registry
        .pages()
        .map(|info| registry.lookup(info.id).unwrap())
        .collect()
}

/// Bytes whose character encodes back to a different byte
const IBM875_NON_BIJECTIVE: [u8; 6] = [0x3F, 0xDC, 0xE1, 0xEC, 0xED, 0xFC];

fn known_non_bijective(id: u16) -> &'static [u8] {
    match id {
        875 => &IBM875_NON_BIJECTIVE,
        _ => &[],
    }
}

#[test]
fn non_bijective_bytes_are_known() {
    for table in all_pages() {
        assert_eq!(
            table.non_bijective_bytes(),
            known_non_bijective(table.id()),
            "{table}"
        );
    }
}

#[test]
fn every_bijective_byte_round_trips() {
    for table in all_pages() {
        let non_bijective = known_non_bijective(table.id());
        let mut encoder = table.encoder(FallbackPolicy::Strict);

        for byte in 0..=u8::MAX {
            if !table.is_mapped(byte) || non_bijective.contains(&byte) {
                continue;
            }
            let text = table.decode(&[byte]);
            assert_eq!(
                encoder.encode_to_vec(&text).unwrap(),
                vec![byte],
                "{table}: byte 0x{byte:02X} ({text:?})"
            );
        }
    }
}

#[test]
fn non_bijective_bytes_share_a_character() {
    for table in all_pages() {
        for byte in table.non_bijective_bytes() {
            let unit = table.decode_unit(byte);
            let encoded = table.lookup(unit).unwrap();
            assert_ne!(encoded, byte);
            assert_eq!(table.decode_unit(encoded), unit, "{table}: byte 0x{byte:02X}");
        }
    }
}

#[test]
fn ibm875_sub_encodes_to_last_byte() {
    let ibm875 = CodePageRegistry::global().lookup(875).unwrap();
    for byte in [0x3F, 0xDC, 0xE1, 0xEC, 0xED, 0xFC, 0xFD] {
        assert_eq!(ibm875.decode(&[byte]), "\u{1A}");
    }
    assert_eq!(ibm875.encode("\u{1A}").unwrap(), vec![0xFD]);
}

#[test]
fn byte_count_matches_encoded_length() {
    let samples = [
        "",
        "plain ASCII",
        "Grüße, naïve café",
        "Привет, мир",
        "Καλημέρα",
        "مرحبا",
        "שלום",
        "ＦＵＬＬ ｗｉｄｔｈ",
        "☃ 😀 €",
    ];
    let policies = ["replace", "ignore", "ncr", "byte:0x20"];

    for table in all_pages() {
        for policy in policies {
            let policy: FallbackPolicy = policy.parse().unwrap();
            let mut encoder = table.encoder(policy.clone());
            for text in samples {
                let count = encoder.byte_count(text).unwrap();
                let mut out = vec![0u8; count];
                let written = encoder.encode(text, &mut out).unwrap();
                assert_eq!(written, count, "{table} {policy} {text:?}");
                assert_eq!(out, encoder.encode_to_vec(text).unwrap());
            }
        }
    }
}

/// Fullwidth ranges each page folds onto ASCII
fn expected_fold_ranges(id: u16) -> &'static [(u16, u16)] {
    match id {
        20290 => &[(0xFF01, 0xFF3A), (0xFF3F, 0xFF40), (0xFF5C, 0xFF5C)],
        20420 => &[(0xFF01, 0xFF3A), (0xFF3F, 0xFF3F), (0xFF41, 0xFF5A), (0xFF5C, 0xFF5C)],
        864 => &[(0xFF01, 0xFF04), (0xFF06, 0xFF5E)],
        10000 | 20866 | 21866 | 28591 | 28592 | 28595 | 28597 | 28605 => &[],
        _ => &[(0xFF01, 0xFF5E)],
    }
}

#[test]
fn fullwidth_folding_follows_page_ranges() {
    for table in all_pages() {
        let ranges = expected_fold_ranges(table.id());
        for unit in 0xFF01..=0xFF5E_u16 {
            let folds = ranges
                .iter()
                .any(|&(first, last)| (first..=last).contains(&unit));
            if folds {
                let ascii = table.lookup(unit - 0xFEE0);
                assert!(ascii.is_some(), "{table}: U+{unit:04X} folds onto nothing");
                assert_eq!(table.lookup(unit), ascii, "{table}: U+{unit:04X}");
            } else {
                assert_eq!(table.lookup(unit), None, "{table}: U+{unit:04X}");
            }
        }
    }
}

#[test]
fn narrow_fold_ranges() {
    let registry = CodePageRegistry::global();

    let ibm290 = registry.lookup(20290).unwrap();
    assert_eq!(ibm290.encode("ＡＺ").unwrap(), ibm290.encode("AZ").unwrap());
    assert_eq!(ibm290.encode("ａ").unwrap(), vec![0x6F]);

    let ibm420 = registry.lookup(20420).unwrap();
    assert_eq!(ibm420.encode("ａ").unwrap(), ibm420.encode("a").unwrap());
    assert_eq!(ibm420.encode("［").unwrap(), vec![0x6F]);

    let ibm864 = registry.lookup(864).unwrap();
    assert_eq!(ibm864.encode("＄＆").unwrap(), b"$&".to_vec());
    assert_eq!(ibm864.encode("％").unwrap(), vec![b'?']);
}

#[test]
fn fullwidth_letters_fold_on_ebcdic_oem_and_windows() {
    for table in all_pages() {
        let expected_fold = !matches!(table.family(), Family::Iso | Family::Koi8 | Family::Mac);
        assert_eq!(!table.folds().is_empty(), expected_fold, "{table}");

        if expected_fold {
            assert_eq!(
                table.encode("ＡＢＣ１２３").unwrap(),
                table.encode("ABC123").unwrap(),
                "{table}"
            );
        } else {
            assert_eq!(
                table.encode("Ａ").unwrap(),
                vec![table.substitute_byte()],
                "{table}"
            );
        }
    }
}

#[test]
fn snowman_uses_substitute_or_fails() {
    for table in all_pages() {
        let expected = match table.family() {
            Family::Ebcdic => 0x6F,
            _ => b'?',
        };
        assert_eq!(table.substitute_byte(), expected, "{table}");
        assert_eq!(table.encode("☃").unwrap(), vec![expected]);
        assert_eq!(table.byte_count("☃").unwrap(), 1);

        let err = table
            .encoder(FallbackPolicy::Strict)
            .encode_to_vec("OK☃")
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnmappableCharacter {
                code_point: 0x2603,
                position: 2
            }
        );
    }
}

#[test]
fn substitute_byte_decodes_to_question_mark() {
    for table in all_pages() {
        assert_eq!(table.decode(&[table.substitute_byte()]), "?", "{table}");
    }
}

#[test]
fn known_mappings() {
    let registry = CodePageRegistry::global();

    let cp866 = registry.lookup(866).unwrap();
    assert_eq!(cp866.encode("А").unwrap(), vec![0x80]);
    assert_eq!(cp866.decode(&[0x80]), "А");

    let asmo = registry.lookup(708).unwrap();
    assert_eq!(asmo.encode("ر").unwrap(), vec![0xD1]);

    let koi8r = registry.lookup("koi8-r").unwrap();
    assert_eq!(koi8r.encode("Ж").unwrap(), vec![0xF6]);

    let latin9 = registry.lookup("latin9").unwrap();
    assert_eq!(latin9.encode("€").unwrap(), vec![0xA4]);
    assert_eq!(latin9.encode("¤").unwrap(), vec![b'?']);

    let ibm1148 = registry.lookup(1148).unwrap();
    assert_eq!(ibm1148.encode("€").unwrap(), vec![0x9F]);
}

#[test]
fn identity_guard_covers_ascii_on_ascii_pages() {
    for table in all_pages() {
        if table.family() == Family::Ebcdic {
            assert_eq!(table.identity_below(), 0x04, "{table}");
            continue;
        }
        for unit in 0..table.identity_below() {
            assert_eq!(table.lookup(unit), Some(unit as u8));
        }
    }
}

#[test]
fn custom_fallback_with_transliteration() {
    let ibm037 = CodePageRegistry::global().lookup("IBM037").unwrap();
    let policy = FallbackPolicy::custom(|unit: u16, _position: usize| match unit {
        0x201C | 0x201D => FallbackDecision::substitute_str("\""),
        0x2014 => FallbackDecision::substitute_str("--"),
        _ => FallbackDecision::Fail,
    });
    let mut encoder = ibm037.encoder(policy);

    let text = "“quoted”—dash";
    let bytes = encoder.encode_to_vec(text).unwrap();
    assert_eq!(ibm037.decode(&bytes), "\"quoted\"--dash");
    assert_eq!(encoder.byte_count(text).unwrap(), bytes.len());
}

#[test]
fn tables_are_shared_across_threads() {
    let registry = CodePageRegistry::global();
    let table = registry.lookup("windows-1251").unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut encoder = table.encoder(FallbackPolicy::Strict);
                for _ in 0..100 {
                    let bytes = encoder.encode_to_vec("Москва").unwrap();
                    assert_eq!(table.decode(&bytes), "Москва");
                }
            });
        }
    });
}
