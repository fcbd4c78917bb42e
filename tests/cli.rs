#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("cptranscode").unwrap()
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("decode"))
        .stdout(predicate::str::contains("encode"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn encode_from_stdin() {
    cmd()
        .args(["encode", "-p", "IBM037"])
        .write_stdin("HELLO")
        .assert()
        .success()
        .stdout(predicate::eq(&[0xC8u8, 0xC5, 0xD3, 0xD3, 0xD6][..]));
}

#[test]
fn decode_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cyrillic.bin");
    std::fs::write(&input, [0x8F, 0xE0, 0xA8, 0xA2, 0xA5, 0xE2]).unwrap();

    cmd()
        .args(["decode", "-p", "866", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Привет");
}

#[test]
fn encode_to_file_with_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.bin");

    cmd()
        .args(["--format", "json", "encode", "-p", "cp437", "-o"])
        .arg(&output)
        .write_stdin("a☃b")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bytes_written\": 3"))
        .stdout(predicate::str::contains("\"fallback\": \"replace\""));

    assert_eq!(std::fs::read(&output).unwrap(), b"a?b");
}

#[test]
fn strict_encode_fails_with_position() {
    cmd()
        .args(["encode", "-p", "windows-1252", "--fallback", "strict"])
        .write_stdin("ab☃")
        .assert()
        .failure()
        .stderr(predicate::str::contains("U+2603 at position 2"));
}

#[test]
fn fixed_byte_fallback() {
    cmd()
        .args(["encode", "-p", "IBM037", "--fallback", "byte:0x40"])
        .write_stdin("☃")
        .assert()
        .success()
        .stdout(predicate::eq(&[0x40u8][..]));
}

#[test]
fn invalid_fallback_is_rejected() {
    cmd()
        .args(["encode", "-p", "IBM037", "--fallback", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid fallback policy"));
}

#[test]
fn unknown_page_is_rejected() {
    cmd()
        .args(["decode", "-p", "EBCDIC-KLINGON"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown code page"));
}

#[test]
fn convert_ebcdic_to_windows() {
    cmd()
        .args(["convert", "-f", "IBM01141", "-t", "windows-1252"])
        .write_stdin(&[0xC8u8, 0x85, 0x93, 0x93, 0x96, 0x9F][..])
        .assert()
        .success()
        .stdout(predicate::eq(&b"Hello\x80"[..]));
}

#[test]
fn count_prints_byte_count() {
    cmd()
        .args(["count", "-p", "IBM037", "--fallback", "ncr"])
        .write_stdin("a☃")
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn validate_reports_every_error() {
    cmd()
        .args(["validate", "-p", "koi8-r", "--show-errors"])
        .write_stdin("Жук € ☃")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2 characters"))
        .stdout(predicate::str::contains("position 4: unmappable character U+20AC"))
        .stdout(predicate::str::contains("position 6: unmappable character U+2603"));
}

#[test]
fn validate_accepts_representable_text() {
    cmd()
        .args(["validate", "-p", "koi8-r"])
        .write_stdin("Жук")
        .assert()
        .success()
        .stdout(predicate::str::contains("representable in koi8-r"));
}

#[test]
fn list_filters_by_family() {
    cmd()
        .args(["list", "--family", "koi8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 total"))
        .stdout(predicate::str::contains("koi8-r"))
        .stdout(predicate::str::contains("koi8-u"))
        .stdout(predicate::str::contains("IBM037").not());
}

#[test]
fn list_json_includes_aliases() {
    cmd()
        .args(["--format", "json", "list", "--family", "iso"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"latin1\""))
        .stdout(predicate::str::contains("\"family\": \"iso\""));
}

#[test]
fn info_shows_non_bijective_bytes() {
    cmd()
        .args(["info", "875"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cp875 (875)"))
        .stdout(predicate::str::contains(
            "Non-bijective bytes: 0x3F 0xDC 0xE1 0xEC 0xED 0xFC",
        ))
        .stdout(predicate::str::contains("U+FF01..U+FF5E -> U+0021..U+007E"));
}

#[test]
fn info_samples() {
    cmd()
        .args(["info", "IBM037", "--samples"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0xC1 -> U+0041 A"));
}

#[test]
fn ncr_escapes_supplementary_character_once() {
    cmd()
        .args(["encode", "-p", "cp437", "--fallback", "ncr"])
        .write_stdin("😀")
        .assert()
        .success()
        .stdout("&#128512;");
}
